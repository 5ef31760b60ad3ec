//! Operation records - documented operational uses of systems

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::datasets::Record;

/// One documented operation involving a system
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OperationRecord {
    pub operation_id: String,

    pub date: NaiveDate,

    pub system_id: String,

    pub munition_type: String,

    /// Estimated units expended; absent when no credible estimate exists.
    /// Absent rows are excluded from attribution, not counted as zero.
    #[serde(default)]
    pub estimated_units_used: Option<f64>,

    #[serde(default)]
    pub estimated_cost_usd_millions: Option<f64>,
}

impl OperationRecord {
    /// Calendar-month bucket key, e.g. "2023-10"
    pub fn year_month(&self) -> String {
        format!("{:04}-{:02}", self.date.year(), self.date.month())
    }
}

impl Record for OperationRecord {
    const DATASET: &'static str = "gaza_operations_data";
    const REQUIRED: &'static [&'static str] = &[
        "operation_id",
        "date",
        "system_id",
        "munition_type",
        "estimated_units_used",
        "estimated_cost_usd_millions",
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_month_bucket() {
        let op = OperationRecord {
            operation_id: "OP-001".to_string(),
            date: NaiveDate::from_ymd_opt(2023, 10, 7).unwrap(),
            system_id: "SYS-F35".to_string(),
            munition_type: "JDAM".to_string(),
            estimated_units_used: Some(120.0),
            estimated_cost_usd_millions: Some(3.1),
        };
        assert_eq!(op.year_month(), "2023-10");
    }

    #[test]
    fn test_missing_units_deserialize_as_none() {
        let csv = "operation_id,date,system_id,munition_type,estimated_units_used,estimated_cost_usd_millions\n\
                   OP-002,2023-11-01,SYS-F16,GBU-39,,\n";
        let mut reader = csv::Reader::from_reader(csv.as_bytes());
        let op: OperationRecord = reader.deserialize().next().unwrap().unwrap();
        assert!(op.estimated_units_used.is_none());
        assert!(op.estimated_cost_usd_millions.is_none());
    }
}
