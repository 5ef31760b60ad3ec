//! Foreign military sales contract rollups

use chrono::NaiveDate;
use serde::Serialize;

use crate::datasets::FmsContract;

/// Contracts announced on or after this date count as wartime emergency sales
pub fn escalation_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, 10, 7).expect("valid calendar date")
}

#[derive(Debug, Clone, Serialize)]
pub struct ManufacturerContracts {
    pub manufacturer_name: String,
    pub total_value_usd_millions: f64,
    pub number_of_contracts: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct ContractAnalysis {
    /// Per-manufacturer totals, sorted descending by value
    pub by_manufacturer: Vec<ManufacturerContracts>,

    pub total_fms_value_usd_millions: f64,

    pub post_oct7_value_usd_millions: f64,

    pub post_oct7_contracts: usize,
}

pub fn analyze(contracts: &[FmsContract]) -> ContractAnalysis {
    let mut order: Vec<String> = Vec::new();
    let mut by_manufacturer: Vec<ManufacturerContracts> = Vec::new();

    for contract in contracts {
        let slot = order
            .iter()
            .position(|name| *name == contract.manufacturer_name)
            .unwrap_or_else(|| {
                order.push(contract.manufacturer_name.clone());
                by_manufacturer.push(ManufacturerContracts {
                    manufacturer_name: contract.manufacturer_name.clone(),
                    total_value_usd_millions: 0.0,
                    number_of_contracts: 0,
                });
                by_manufacturer.len() - 1
            });
        by_manufacturer[slot].total_value_usd_millions += contract.contract_value_usd_millions;
        by_manufacturer[slot].number_of_contracts += 1;
    }

    by_manufacturer.sort_by(|a, b| {
        b.total_value_usd_millions
            .partial_cmp(&a.total_value_usd_millions)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let total: f64 = contracts
        .iter()
        .map(|c| c.contract_value_usd_millions)
        .sum();

    let cutoff = escalation_date();
    let post: Vec<&FmsContract> = contracts
        .iter()
        .filter(|c| c.date_announced >= cutoff)
        .collect();

    ContractAnalysis {
        by_manufacturer,
        total_fms_value_usd_millions: total,
        post_oct7_value_usd_millions: post
            .iter()
            .map(|c| c.contract_value_usd_millions)
            .sum(),
        post_oct7_contracts: post.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contract(id: &str, manufacturer: &str, value: f64, date: (i32, u32, u32)) -> FmsContract {
        FmsContract {
            contract_id: id.to_string(),
            manufacturer_name: manufacturer.to_string(),
            contract_value_usd_millions: value,
            date_announced: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            fiscal_year: date.0,
            description: None,
        }
    }

    #[test]
    fn test_rollup_and_post_escalation_slice() {
        let contracts = vec![
            contract("C1", "Boeing", 500.0, (2022, 3, 1)),
            contract("C2", "Lockheed Martin", 2000.0, (2023, 11, 5)),
            contract("C3", "Boeing", 750.0, (2023, 10, 7)),
        ];

        let analysis = analyze(&contracts);
        assert_eq!(analysis.total_fms_value_usd_millions, 3250.0);
        assert_eq!(analysis.post_oct7_contracts, 2);
        assert_eq!(analysis.post_oct7_value_usd_millions, 2750.0);
        assert_eq!(analysis.by_manufacturer[0].manufacturer_name, "Lockheed Martin");
        assert_eq!(analysis.by_manufacturer[1].number_of_contracts, 2);
    }
}
