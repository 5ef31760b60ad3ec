//! Manufacturer dataset - companies producing system components

use serde::{Deserialize, Serialize};

use crate::datasets::Record;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manufacturer {
    /// Dataset-wide identifier (e.g. "MFR-LMT")
    pub manufacturer_id: String,

    pub manufacturer_name: String,

    pub country: String,

    /// Exchange ticker, absent for privately held companies
    #[serde(default)]
    pub stock_ticker: Option<String>,
}

impl Record for Manufacturer {
    const DATASET: &'static str = "manufacturers";
    const REQUIRED: &'static [&'static str] =
        &["manufacturer_id", "manufacturer_name", "country"];
}
