//! Lobbying and political contribution dataset - one row per manufacturer per year

use serde::{Deserialize, Serialize};

use crate::datasets::Record;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LobbyingRecord {
    pub year: i32,

    pub manufacturer_name: String,

    pub total_lobbying_usd_millions: f64,

    pub political_contributions_usd_thousands: f64,
}

impl Record for LobbyingRecord {
    const DATASET: &'static str = "lobbying_political_contributions";
    const REQUIRED: &'static [&'static str] = &[
        "year",
        "manufacturer_name",
        "total_lobbying_usd_millions",
        "political_contributions_usd_thousands",
    ];
}
