//! Summary statistics assembly
//!
//! Composes the attribution engine, the investor deep-dive, and the
//! auxiliary analyses into one serializable document. Field order is fixed
//! by the struct definitions, so re-running on unchanged input produces
//! byte-identical JSON.

use serde::Serialize;

use crate::core::attribution::{self, MunitionsAttribution, SystemOwnership};
use crate::core::contracts::{self, ContractAnalysis};
use crate::core::error::UnknownInvestor;
use crate::core::investor::{self, InvestorProfile};
use crate::core::lobbying::{self, LobbyingAnalysis};
use crate::core::stocks::{self, StockMove};
use crate::core::timeline::{self, OwnershipTimeline};
use crate::datasets::Tables;

#[derive(Debug, Clone, Serialize)]
pub struct TopInvestor {
    pub investor_name: String,
    pub weighted_avg_killchain_ownership_pct: f64,
    pub total_investment_usd_millions: f64,
}

/// The structured summary document written to `summary_statistics.json`
#[derive(Debug, Clone, Serialize)]
pub struct SummaryStatistics {
    pub total_systems: usize,
    pub total_manufacturers: usize,
    pub total_shareholders: usize,
    pub total_operations_documented: usize,

    pub total_investment_all_investors_usd_billions: f64,

    /// Top five by weighted average kill-chain ownership, stable descending
    pub top_5_investors: Vec<TopInvestor>,

    pub focus_investor: InvestorProfile,

    pub top_5_munitions_investors: Vec<MunitionsAttribution>,

    pub fms_contracts: ContractAnalysis,

    pub stock_performance_oct_dec_2023: Vec<StockMove>,

    pub lobbying: LobbyingAnalysis,

    pub focus_timeseries: OwnershipTimeline,
}

/// Everything one pipeline run derives from the loaded tables
#[derive(Debug)]
pub struct Analysis {
    pub ownership: Vec<SystemOwnership>,
    pub munitions: Vec<MunitionsAttribution>,
    pub stats: SummaryStatistics,
}

/// Run the whole derivation for the given focus investor
pub fn run(tables: &Tables, focus: &str) -> Result<Analysis, UnknownInvestor> {
    let ownership = attribution::system_ownership(&tables.components, &tables.stakes);
    let munitions = attribution::munitions_by_investor(&tables.operations, &ownership);

    let mut ranked: Vec<&crate::datasets::InfrastructureRow> =
        tables.infrastructure.iter().collect();
    ranked.sort_by(|a, b| {
        b.weighted_avg_killchain_ownership_pct
            .partial_cmp(&a.weighted_avg_killchain_ownership_pct)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    let top_5_investors = ranked
        .iter()
        .take(5)
        .map(|row| TopInvestor {
            investor_name: row.investor_name.clone(),
            weighted_avg_killchain_ownership_pct: row.weighted_avg_killchain_ownership_pct,
            total_investment_usd_millions: row.total_investment_usd_millions,
        })
        .collect();

    let total_investment: f64 = tables
        .infrastructure
        .iter()
        .map(|row| row.total_investment_usd_millions)
        .sum();

    let stats = SummaryStatistics {
        total_systems: tables.systems.len(),
        total_manufacturers: tables.manufacturers.len(),
        total_shareholders: tables.shareholders.len(),
        total_operations_documented: tables.operations.len(),
        total_investment_all_investors_usd_billions: total_investment / 1000.0,
        top_5_investors,
        focus_investor: investor::profile(focus, &tables.infrastructure, &tables.stakes)?,
        top_5_munitions_investors: munitions.iter().take(5).cloned().collect(),
        fms_contracts: contracts::analyze(&tables.contracts),
        stock_performance_oct_dec_2023: stocks::war_window_moves(&tables.stocks),
        lobbying: lobbying::analyze(&tables.lobbying),
        focus_timeseries: timeline::for_investor(focus, &tables.timeseries),
    };

    Ok(Analysis {
        ownership,
        munitions,
        stats,
    })
}
