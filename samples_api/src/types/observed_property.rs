//! Observed property types returned by the API.

use serde::{Deserialize, Serialize};

/// A measurable characteristic, such as pH or dissolved oxygen.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ObservedProperty {
    pub id: String,

    /// Short code (e.g. "pH", "DO").
    pub custom_id: String,

    #[serde(default)]
    pub name: Option<String>,

    /// Kind of result recorded for this property (e.g. "NUMERIC", "CATEGORICAL").
    #[serde(default)]
    pub result_type: Option<String>,

    /// Unit used when a result does not specify one.
    #[serde(default)]
    pub default_unit: Option<Unit>,
}

/// A unit of measure.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Unit {
    pub id: String,
    /// Unit symbol (e.g. "mg/L").
    pub custom_id: String,
}
