//! Ownership time series - stake snapshots over time

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::datasets::Record;

/// A dated snapshot of one shareholder's position in one manufacturer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeseriesRow {
    pub date: NaiveDate,

    pub shareholder_name: String,

    pub manufacturer_name: String,

    pub ownership_percentage: f64,

    pub market_value_usd_millions: f64,
}

impl Record for TimeseriesRow {
    const DATASET: &'static str = "ownership_timeseries";
    const REQUIRED: &'static [&'static str] = &[
        "date",
        "shareholder_name",
        "manufacturer_name",
        "ownership_percentage",
        "market_value_usd_millions",
    ];
}
