//! Ownership stake dataset - who owns how much of each manufacturer

use serde::{Deserialize, Serialize};

use crate::datasets::Record;

/// One shareholder's position in one manufacturer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OwnershipStake {
    pub manufacturer_id: String,

    pub manufacturer_name: String,

    pub shareholder_name: String,

    /// Percentage of the manufacturer owned, 0-100
    pub ownership_percentage: f64,

    pub market_value_usd_millions: f64,
}

impl Record for OwnershipStake {
    const DATASET: &'static str = "ownership_stakes";
    const REQUIRED: &'static [&'static str] = &[
        "manufacturer_id",
        "manufacturer_name",
        "shareholder_name",
        "ownership_percentage",
        "market_value_usd_millions",
    ];
}
