//! System component dataset - which manufacturer supplies what, at what value

use serde::{Deserialize, Serialize};

use crate::datasets::Record;

/// A component of a system, supplied by exactly one manufacturer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemComponent {
    pub system_id: String,

    pub system_name: String,

    pub manufacturer_id: String,

    pub component_name: String,

    /// Estimated value of this component per delivered unit of the system
    pub estimated_value_per_unit_usd_millions: f64,
}

impl Record for SystemComponent {
    const DATASET: &'static str = "system_components";
    const REQUIRED: &'static [&'static str] = &[
        "system_id",
        "system_name",
        "manufacturer_id",
        "component_name",
        "estimated_value_per_unit_usd_millions",
    ];
}
