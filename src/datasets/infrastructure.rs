//! Infrastructure ownership summary - precomputed per-investor rollup
//!
//! This table is externally supplied and treated as ground truth; the
//! pipeline never derives it, only reads and re-exports it.

use serde::{Deserialize, Serialize};

use crate::datasets::Record;

/// Per-investor ownership rollup across the kill-chain categories
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InfrastructureRow {
    pub investor_name: String,

    pub investor_type: String,

    pub country: String,

    pub pct_ownership_f35_infrastructure: f64,

    pub pct_ownership_f16_infrastructure: f64,

    pub pct_ownership_f15_infrastructure: f64,

    pub pct_ownership_munitions_infrastructure: f64,

    /// Absent for investors with no ISR/UAV exposure
    #[serde(default)]
    pub pct_ownership_isr_uav_infrastructure: Option<f64>,

    pub pct_ownership_targeting_infrastructure: f64,

    /// Weighted average across the categories above, precomputed upstream
    pub weighted_avg_killchain_ownership_pct: f64,

    pub total_investment_usd_millions: f64,
}

impl InfrastructureRow {
    /// Category ownership percentages paired with display labels, in the
    /// column order of the source table
    pub fn category_ownership(&self) -> [(&'static str, Option<f64>); 6] {
        [
            ("F-35", Some(self.pct_ownership_f35_infrastructure)),
            ("F-16", Some(self.pct_ownership_f16_infrastructure)),
            ("F-15", Some(self.pct_ownership_f15_infrastructure)),
            ("Munitions", Some(self.pct_ownership_munitions_infrastructure)),
            ("ISR/UAV", self.pct_ownership_isr_uav_infrastructure),
            ("Targeting", Some(self.pct_ownership_targeting_infrastructure)),
        ]
    }
}

impl Record for InfrastructureRow {
    const DATASET: &'static str = "infrastructure_ownership_analysis";
    const REQUIRED: &'static [&'static str] = &[
        "investor_name",
        "investor_type",
        "country",
        "pct_ownership_f35_infrastructure",
        "pct_ownership_f16_infrastructure",
        "pct_ownership_f15_infrastructure",
        "pct_ownership_munitions_infrastructure",
        "pct_ownership_targeting_infrastructure",
        "weighted_avg_killchain_ownership_pct",
        "total_investment_usd_millions",
    ];
}
