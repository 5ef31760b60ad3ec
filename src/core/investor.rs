//! Single-investor deep-dive
//!
//! Combines the investor's precomputed infrastructure rollup with a
//! breakdown derived from the raw stakes table. The investor name is a
//! parameter; an unknown name is a typed diagnostic, never an index panic.

use serde::Serialize;

use crate::core::error::UnknownInvestor;
use crate::datasets::{InfrastructureRow, OwnershipStake};

/// One manufacturer position held by the investor
#[derive(Debug, Clone, Serialize)]
pub struct Holding {
    pub manufacturer_name: String,
    pub ownership_percentage: f64,
    pub market_value_usd_millions: f64,
}

/// Combined deep-dive result for one investor
#[derive(Debug, Clone, Serialize)]
pub struct InvestorProfile {
    pub investor_name: String,

    /// Sum of the investor's stake market values
    pub total_investment_usd_millions: f64,

    /// Weighted average kill-chain ownership, from the infrastructure summary
    pub avg_killchain_ownership_pct: f64,

    /// Positions sorted descending by market value
    pub holdings: Vec<Holding>,
}

/// Build the deep-dive for the named investor
pub fn profile(
    name: &str,
    infrastructure: &[InfrastructureRow],
    stakes: &[OwnershipStake],
) -> Result<InvestorProfile, UnknownInvestor> {
    let summary = infrastructure
        .iter()
        .find(|row| row.investor_name == name)
        .ok_or_else(|| UnknownInvestor {
            name: name.to_string(),
        })?;

    let mut holdings: Vec<Holding> = stakes
        .iter()
        .filter(|stake| stake.shareholder_name == name)
        .map(|stake| Holding {
            manufacturer_name: stake.manufacturer_name.clone(),
            ownership_percentage: stake.ownership_percentage,
            market_value_usd_millions: stake.market_value_usd_millions,
        })
        .collect();

    let total: f64 = holdings.iter().map(|h| h.market_value_usd_millions).sum();

    holdings.sort_by(|a, b| {
        b.market_value_usd_millions
            .partial_cmp(&a.market_value_usd_millions)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    Ok(InvestorProfile {
        investor_name: summary.investor_name.clone(),
        total_investment_usd_millions: total,
        avg_killchain_ownership_pct: summary.weighted_avg_killchain_ownership_pct,
        holdings,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn infra(name: &str, avg: f64) -> InfrastructureRow {
        InfrastructureRow {
            investor_name: name.to_string(),
            investor_type: "sovereign_wealth_fund".to_string(),
            country: "Norway".to_string(),
            pct_ownership_f35_infrastructure: 1.0,
            pct_ownership_f16_infrastructure: 1.0,
            pct_ownership_f15_infrastructure: 1.0,
            pct_ownership_munitions_infrastructure: 1.0,
            pct_ownership_isr_uav_infrastructure: None,
            pct_ownership_targeting_infrastructure: 1.0,
            weighted_avg_killchain_ownership_pct: avg,
            total_investment_usd_millions: 0.0,
        }
    }

    fn stake(shareholder: &str, manufacturer: &str, value: f64) -> OwnershipStake {
        OwnershipStake {
            manufacturer_id: manufacturer.to_string(),
            manufacturer_name: manufacturer.to_string(),
            shareholder_name: shareholder.to_string(),
            ownership_percentage: 1.5,
            market_value_usd_millions: value,
        }
    }

    #[test]
    fn test_profile_totals_and_sorting() {
        let infrastructure = vec![infra("Fund", 1.72)];
        let stakes = vec![
            stake("Fund", "Boeing", 800.0),
            stake("Fund", "Lockheed Martin", 1200.0),
            stake("Other", "Boeing", 5000.0),
        ];

        let profile = profile("Fund", &infrastructure, &stakes).unwrap();
        assert_eq!(profile.total_investment_usd_millions, 2000.0);
        assert_eq!(profile.avg_killchain_ownership_pct, 1.72);
        assert_eq!(profile.holdings.len(), 2);
        assert_eq!(profile.holdings[0].manufacturer_name, "Lockheed Martin");
    }

    #[test]
    fn test_unknown_investor_is_typed_error() {
        let err = profile("Nobody", &[], &[]).unwrap_err();
        assert_eq!(err.name, "Nobody");
    }
}
