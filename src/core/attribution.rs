//! Ownership attribution engine
//!
//! Joins system components to ownership stakes to answer two questions:
//! what fraction of each system does each shareholder own, and how much of
//! each documented operation is therefore attributable to them.
//!
//! The percentage denominator is the system's total component value,
//! computed once per system independently of the join. Summing the joined
//! rows instead would count a component once per shareholder of its
//! manufacturer and distort the percentages whenever a manufacturer has
//! more than one shareholder.

use std::collections::{BTreeMap, HashMap};

use serde::Serialize;

use crate::datasets::{OperationRecord, OwnershipStake, SystemComponent};

/// One shareholder's computed position in one system
#[derive(Debug, Clone, Serialize)]
pub struct SystemOwnership {
    pub system_id: String,
    pub system_name: String,
    pub shareholder_name: String,

    /// Sum over the system's components of per-unit value scaled by the
    /// shareholder's ownership of the supplying manufacturer
    pub component_ownership_value: f64,

    /// Total per-unit value of the system across all its components,
    /// including components whose manufacturer has no recorded stakes
    pub total_system_value_usd_millions: f64,

    /// `component_ownership_value / total_system_value * 100`
    pub system_ownership_pct: f64,
}

/// Per-shareholder rollup of attributed operational use
#[derive(Debug, Clone, Serialize)]
pub struct MunitionsAttribution {
    pub shareholder_name: String,

    pub units_attributed_to_investor: f64,

    pub cost_attributed_to_investor_usd_millions: f64,

    /// Raw units used across the operations this shareholder matched,
    /// unscaled, for reference
    pub estimated_units_used: f64,
}

struct OwnershipAcc {
    system_name: String,
    owned_value: f64,
}

/// Compute per-system-per-shareholder ownership.
///
/// A component whose manufacturer has no stakes produces no rows but still
/// counts toward the system total, so percentages reflect the whole system
/// rather than just the covered slice. Rows are ordered by
/// (system id, shareholder name).
pub fn system_ownership(
    components: &[SystemComponent],
    stakes: &[OwnershipStake],
) -> Vec<SystemOwnership> {
    let mut stakes_by_manufacturer: HashMap<&str, Vec<&OwnershipStake>> = HashMap::new();
    for stake in stakes {
        stakes_by_manufacturer
            .entry(stake.manufacturer_id.as_str())
            .or_default()
            .push(stake);
    }

    let mut system_totals: HashMap<&str, f64> = HashMap::new();
    for component in components {
        *system_totals.entry(component.system_id.as_str()).or_default() +=
            component.estimated_value_per_unit_usd_millions;
    }

    let mut groups: BTreeMap<(String, String), OwnershipAcc> = BTreeMap::new();
    for component in components {
        let Some(holders) = stakes_by_manufacturer.get(component.manufacturer_id.as_str()) else {
            continue;
        };
        for stake in holders {
            let owned = component.estimated_value_per_unit_usd_millions
                * stake.ownership_percentage
                / 100.0;
            let key = (
                component.system_id.clone(),
                stake.shareholder_name.clone(),
            );
            let acc = groups.entry(key).or_insert_with(|| OwnershipAcc {
                system_name: component.system_name.clone(),
                owned_value: 0.0,
            });
            acc.owned_value += owned;
        }
    }

    groups
        .into_iter()
        .map(|((system_id, shareholder_name), acc)| {
            let total = system_totals.get(system_id.as_str()).copied().unwrap_or(0.0);
            let pct = if total > 0.0 {
                acc.owned_value / total * 100.0
            } else {
                0.0
            };
            SystemOwnership {
                system_id,
                system_name: acc.system_name,
                shareholder_name,
                component_ownership_value: acc.owned_value,
                total_system_value_usd_millions: total,
                system_ownership_pct: pct,
            }
        })
        .collect()
}

/// Attribute documented operational use to shareholders.
///
/// Operations without a units estimate are excluded entirely. An absent
/// cost contributes zero to the cost sum while the row still counts for
/// units. Output is sorted descending by attributed cost; the sort is
/// stable, so ties keep first-encountered order.
pub fn munitions_by_investor(
    operations: &[OperationRecord],
    ownership: &[SystemOwnership],
) -> Vec<MunitionsAttribution> {
    let mut ownership_by_system: HashMap<&str, Vec<&SystemOwnership>> = HashMap::new();
    for row in ownership {
        ownership_by_system
            .entry(row.system_id.as_str())
            .or_default()
            .push(row);
    }

    let mut index: HashMap<String, usize> = HashMap::new();
    let mut totals: Vec<MunitionsAttribution> = Vec::new();

    for op in operations {
        let Some(units) = op.estimated_units_used else {
            continue;
        };
        let Some(holders) = ownership_by_system.get(op.system_id.as_str()) else {
            continue;
        };
        for row in holders {
            let slot = *index
                .entry(row.shareholder_name.clone())
                .or_insert_with(|| {
                    totals.push(MunitionsAttribution {
                        shareholder_name: row.shareholder_name.clone(),
                        units_attributed_to_investor: 0.0,
                        cost_attributed_to_investor_usd_millions: 0.0,
                        estimated_units_used: 0.0,
                    });
                    totals.len() - 1
                });
            let entry = &mut totals[slot];
            entry.units_attributed_to_investor += units * row.system_ownership_pct / 100.0;
            if let Some(cost) = op.estimated_cost_usd_millions {
                entry.cost_attributed_to_investor_usd_millions +=
                    cost * row.system_ownership_pct / 100.0;
            }
            entry.estimated_units_used += units;
        }
    }

    totals.sort_by(|a, b| {
        b.cost_attributed_to_investor_usd_millions
            .partial_cmp(&a.cost_attributed_to_investor_usd_millions)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    totals
}

/// Manufacturers whose recorded stakes sum past 100%, with the offending sum.
///
/// Not an error: the datasets are research estimates and may double-count
/// custodial positions. The analyze command surfaces these as warnings.
pub fn oversubscribed_manufacturers(stakes: &[OwnershipStake]) -> Vec<(String, f64)> {
    let mut sums: BTreeMap<&str, f64> = BTreeMap::new();
    for stake in stakes {
        *sums.entry(stake.manufacturer_name.as_str()).or_default() += stake.ownership_percentage;
    }
    sums.into_iter()
        .filter(|(_, sum)| *sum > 100.0 + 1e-9)
        .map(|(name, sum)| (name.to_string(), sum))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn component(system: &str, manufacturer: &str, value: f64) -> SystemComponent {
        SystemComponent {
            system_id: system.to_string(),
            system_name: format!("{system} name"),
            manufacturer_id: manufacturer.to_string(),
            component_name: format!("{manufacturer} part"),
            estimated_value_per_unit_usd_millions: value,
        }
    }

    fn stake(manufacturer: &str, shareholder: &str, pct: f64) -> OwnershipStake {
        OwnershipStake {
            manufacturer_id: manufacturer.to_string(),
            manufacturer_name: format!("{manufacturer} Inc"),
            shareholder_name: shareholder.to_string(),
            ownership_percentage: pct,
            market_value_usd_millions: 0.0,
        }
    }

    fn operation(system: &str, units: Option<f64>, cost: Option<f64>) -> OperationRecord {
        OperationRecord {
            operation_id: "OP".to_string(),
            date: NaiveDate::from_ymd_opt(2023, 10, 9).unwrap(),
            system_id: system.to_string(),
            munition_type: "test".to_string(),
            estimated_units_used: units,
            estimated_cost_usd_millions: cost,
        }
    }

    #[test]
    fn test_full_stake_in_every_component_is_exactly_100_pct() {
        let components = vec![component("SYS-1", "MFR-A", 60.0), component("SYS-1", "MFR-B", 40.0)];
        let stakes = vec![stake("MFR-A", "S", 100.0), stake("MFR-B", "S", 100.0)];

        let rows = system_ownership(&components, &stakes);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].system_ownership_pct, 100.0);
        assert_eq!(rows[0].total_system_value_usd_millions, 100.0);
    }

    #[test]
    fn test_split_ownership_scenario() {
        // One $100M system: $60M from A, $40M from B; S owns 50% of A and
        // 25% of B, so S's slice is $30M + $10M = 40% of the system.
        let components = vec![component("SYS-1", "MFR-A", 60.0), component("SYS-1", "MFR-B", 40.0)];
        let stakes = vec![stake("MFR-A", "S", 50.0), stake("MFR-B", "S", 25.0)];

        let rows = system_ownership(&components, &stakes);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].component_ownership_value, 40.0);
        assert_eq!(rows[0].system_ownership_pct, 40.0);
    }

    #[test]
    fn test_uncovered_component_still_counts_in_denominator() {
        let components = vec![component("SYS-1", "MFR-A", 50.0), component("SYS-1", "MFR-X", 50.0)];
        let stakes = vec![stake("MFR-A", "S", 100.0)];

        let rows = system_ownership(&components, &stakes);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].system_ownership_pct, 50.0);
    }

    #[test]
    fn test_shareholder_without_stake_is_absent() {
        let components = vec![component("SYS-1", "MFR-A", 60.0)];
        let stakes = vec![stake("MFR-B", "S", 50.0)];

        let rows = system_ownership(&components, &stakes);
        assert!(rows.is_empty());
    }

    #[test]
    fn test_multiple_shareholders_do_not_inflate_denominator() {
        // The source pipeline summed per-unit value over joined rows, so a
        // second shareholder doubled the denominator. Both must see the
        // true $100M total here.
        let components = vec![component("SYS-1", "MFR-A", 100.0)];
        let stakes = vec![stake("MFR-A", "S1", 10.0), stake("MFR-A", "S2", 20.0)];

        let rows = system_ownership(&components, &stakes);
        assert_eq!(rows.len(), 2);
        for row in &rows {
            assert_eq!(row.total_system_value_usd_millions, 100.0);
        }
        assert_eq!(rows[0].system_ownership_pct, 10.0);
        assert_eq!(rows[1].system_ownership_pct, 20.0);
    }

    #[test]
    fn test_zero_value_system_yields_zero_pct() {
        let components = vec![component("SYS-1", "MFR-A", 0.0)];
        let stakes = vec![stake("MFR-A", "S", 50.0)];

        let rows = system_ownership(&components, &stakes);
        assert_eq!(rows[0].system_ownership_pct, 0.0);
    }

    #[test]
    fn test_munitions_attribution_scales_by_pct() {
        let components = vec![component("SYS-1", "MFR-A", 100.0)];
        let stakes = vec![stake("MFR-A", "X", 40.0)];
        let ownership = system_ownership(&components, &stakes);

        let ops = vec![operation("SYS-1", Some(1000.0), Some(10.0))];
        let rows = munitions_by_investor(&ops, &ownership);

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].units_attributed_to_investor, 400.0);
        assert_eq!(rows[0].cost_attributed_to_investor_usd_millions, 4.0);
        assert_eq!(rows[0].estimated_units_used, 1000.0);
    }

    #[test]
    fn test_operations_without_units_are_excluded() {
        let components = vec![component("SYS-1", "MFR-A", 100.0)];
        let stakes = vec![stake("MFR-A", "X", 40.0)];
        let ownership = system_ownership(&components, &stakes);

        let ops = vec![operation("SYS-1", None, Some(10.0))];
        assert!(munitions_by_investor(&ops, &ownership).is_empty());
    }

    #[test]
    fn test_missing_cost_contributes_zero_but_units_count() {
        let components = vec![component("SYS-1", "MFR-A", 100.0)];
        let stakes = vec![stake("MFR-A", "X", 50.0)];
        let ownership = system_ownership(&components, &stakes);

        let ops = vec![operation("SYS-1", Some(200.0), None)];
        let rows = munitions_by_investor(&ops, &ownership);

        assert_eq!(rows[0].units_attributed_to_investor, 100.0);
        assert_eq!(rows[0].cost_attributed_to_investor_usd_millions, 0.0);
    }

    #[test]
    fn test_munitions_sorted_descending_by_cost_stable() {
        let components = vec![component("SYS-1", "MFR-A", 100.0)];
        let stakes = vec![
            stake("MFR-A", "Small", 10.0),
            stake("MFR-A", "Big", 60.0),
            stake("MFR-A", "AlsoSmall", 10.0),
        ];
        let ownership = system_ownership(&components, &stakes);

        let ops = vec![operation("SYS-1", Some(100.0), Some(100.0))];
        let rows = munitions_by_investor(&ops, &ownership);

        assert_eq!(rows[0].shareholder_name, "Big");
        // Tie between the two 10% holders: BTreeMap order of the ownership
        // table is the encounter order here, AlsoSmall before Small.
        assert_eq!(rows[1].shareholder_name, "AlsoSmall");
        assert_eq!(rows[2].shareholder_name, "Small");
    }

    #[test]
    fn test_oversubscribed_detection() {
        let stakes = vec![
            stake("MFR-A", "S1", 60.0),
            stake("MFR-A", "S2", 55.0),
            stake("MFR-B", "S1", 40.0),
        ];
        let flagged = oversubscribed_manufacturers(&stakes);
        assert_eq!(flagged.len(), 1);
        assert_eq!(flagged[0].0, "MFR-A Inc");
        assert!((flagged[0].1 - 115.0).abs() < 1e-9);
    }
}
