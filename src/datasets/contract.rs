//! Foreign military sales contracts dataset

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::datasets::Record;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FmsContract {
    pub contract_id: String,

    pub manufacturer_name: String,

    pub contract_value_usd_millions: f64,

    pub date_announced: NaiveDate,

    pub fiscal_year: i32,

    #[serde(default)]
    pub description: Option<String>,
}

impl Record for FmsContract {
    const DATASET: &'static str = "fms_contracts";
    const REQUIRED: &'static [&'static str] = &[
        "contract_id",
        "manufacturer_name",
        "contract_value_usd_millions",
        "date_announced",
        "fiscal_year",
    ];
}
