//! Sampling location types returned by the API.

use serde::{Deserialize, Serialize};

/// A place where samples are collected or field measurements are taken.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SamplingLocation {
    /// Server-assigned identifier.
    pub id: String,

    /// User-facing identifier, unique per tenant (e.g. "LAKE-01").
    pub custom_id: String,

    /// Display name.
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    /// Location type name (e.g. "Lake", "Well").
    #[serde(default, rename = "type")]
    pub location_type: Option<String>,
}
