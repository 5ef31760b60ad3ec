//! Stock closing price dataset

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::datasets::Record;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockQuote {
    pub date: NaiveDate,

    pub manufacturer_name: String,

    pub closing_price_usd: f64,
}

impl Record for StockQuote {
    const DATASET: &'static str = "stock_performance_gaza_war";
    const REQUIRED: &'static [&'static str] =
        &["date", "manufacturer_name", "closing_price_usd"];
}
