//! Observation types returned by the API.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use super::{Reference, Unit};

/// A single result for one observed property at one location and time.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Observation {
    pub id: String,

    #[serde(default)]
    pub sampling_location: Option<Reference>,

    #[serde(default)]
    pub observed_property: Option<Reference>,

    #[serde(default)]
    pub project: Option<Reference>,

    /// When the observation was made, with the offset recorded in the field.
    #[serde(default)]
    pub observed_time: Option<DateTime<FixedOffset>>,

    /// Present for numeric properties.
    #[serde(default)]
    pub numeric_result: Option<NumericResult>,
}

impl Observation {
    /// Returns the numeric value and its unit symbol, if this observation has one.
    pub fn value(&self) -> Option<(f64, Option<&str>)> {
        let quantity = self.numeric_result.as_ref()?.quantity.as_ref()?;
        Some((
            quantity.value,
            quantity.unit.as_ref().map(|u| u.custom_id.as_str()),
        ))
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NumericResult {
    #[serde(default)]
    pub quantity: Option<Quantity>,
}

/// A value with its unit.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Quantity {
    pub value: f64,
    #[serde(default)]
    pub unit: Option<Unit>,
}
