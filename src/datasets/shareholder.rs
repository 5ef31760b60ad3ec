//! Shareholder dataset - institutional investors in the manufacturers

use serde::{Deserialize, Serialize};

use crate::datasets::Record;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Shareholder {
    pub shareholder_name: String,

    /// Investor category (e.g. "sovereign_wealth_fund", "asset_manager")
    pub shareholder_type: String,

    pub country: String,
}

impl Record for Shareholder {
    const DATASET: &'static str = "major_shareholders";
    const REQUIRED: &'static [&'static str] =
        &["shareholder_name", "shareholder_type", "country"];
}
