//! Figure builders
//!
//! One function per defined visualization. Each prepares its own small
//! aggregation from the loaded tables and emits a plotly figure as JSON.
//! Layout and styling are intentionally plain; the charts exist to show
//! the numbers, not to be pretty.

use std::collections::BTreeMap;

use serde_json::{Value, json};

use crate::charts::ChartDoc;
use crate::core::stocks;
use crate::datasets::{
    FmsContract, InfrastructureRow, LobbyingRecord, OperationRecord, OwnershipStake, StockQuote,
    System, TimeseriesRow,
};

fn bar(x: Vec<Value>, y: Vec<Value>) -> Value {
    json!({"type": "bar", "x": x, "y": y})
}

/// Top investors ranked by weighted average kill-chain ownership, stable sort
fn ranked<'a>(infrastructure: &'a [InfrastructureRow]) -> Vec<&'a InfrastructureRow> {
    let mut rows: Vec<&InfrastructureRow> = infrastructure.iter().collect();
    rows.sort_by(|a, b| {
        b.weighted_avg_killchain_ownership_pct
            .partial_cmp(&a.weighted_avg_killchain_ownership_pct)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    rows
}

pub fn top_investors_bar(infrastructure: &[InfrastructureRow]) -> ChartDoc {
    let top10 = ranked(infrastructure);
    let top10 = &top10[..top10.len().min(10)];

    let figure = json!({
        "data": [{
            "type": "bar",
            "x": top10.iter().map(|r| r.investor_name.as_str()).collect::<Vec<_>>(),
            "y": top10.iter().map(|r| r.weighted_avg_killchain_ownership_pct).collect::<Vec<_>>(),
            "text": top10.iter().map(|r| format!("{:.2}%", r.weighted_avg_killchain_ownership_pct)).collect::<Vec<_>>(),
            "textposition": "outside"
        }],
        "layout": {
            "title": "Top 10 investors by average kill-chain ownership",
            "xaxis": {"tickangle": -45},
            "yaxis": {"title": "Ownership (%)"}
        }
    });
    ChartDoc {
        slug: "top_investors_bar",
        title: "Top investors".to_string(),
        figure,
    }
}

pub fn ownership_heatmap(infrastructure: &[InfrastructureRow]) -> ChartDoc {
    let top10 = ranked(infrastructure);
    let top10 = &top10[..top10.len().min(10)];

    let labels: Vec<&str> = top10
        .first()
        .map(|row| row.category_ownership().iter().map(|(label, _)| *label).collect())
        .unwrap_or_default();
    let z: Vec<Vec<Option<f64>>> = top10
        .iter()
        .map(|row| row.category_ownership().iter().map(|(_, pct)| *pct).collect())
        .collect();

    let figure = json!({
        "data": [{
            "type": "heatmap",
            "x": labels,
            "y": top10.iter().map(|r| r.investor_name.as_str()).collect::<Vec<_>>(),
            "z": z,
            "colorscale": "Reds"
        }],
        "layout": {"title": "Ownership across infrastructure categories"}
    });
    ChartDoc {
        slug: "ownership_heatmap",
        title: "Ownership heatmap".to_string(),
        figure,
    }
}

pub fn focus_comparison(infrastructure: &[InfrastructureRow], focus: &str) -> ChartDoc {
    let mut rows: Vec<&InfrastructureRow> = infrastructure
        .iter()
        .filter(|r| r.investor_name == focus)
        .collect();
    rows.extend(
        ranked(infrastructure)
            .into_iter()
            .filter(|r| r.investor_name != focus)
            .take(5),
    );

    let colors: Vec<&str> = rows
        .iter()
        .map(|r| if r.investor_name == focus { "#FF6B6B" } else { "#4ECDC4" })
        .collect();

    let figure = json!({
        "data": [{
            "type": "bar",
            "x": rows.iter().map(|r| r.investor_name.as_str()).collect::<Vec<_>>(),
            "y": rows.iter().map(|r| r.weighted_avg_killchain_ownership_pct).collect::<Vec<_>>(),
            "marker": {"color": colors}
        }],
        "layout": {
            "title": format!("{focus} compared with the other top investors"),
            "xaxis": {"tickangle": -45},
            "yaxis": {"title": "Average ownership (%)"},
            "showlegend": false
        }
    });
    ChartDoc {
        slug: "focus_comparison",
        title: "Focus investor comparison".to_string(),
        figure,
    }
}

/// Manufacturer with the largest recorded stake value, and its top holders.
///
/// The remainder past the top eight holders is shown as "Others" so the pie
/// always closes at 100%.
pub fn manufacturer_ownership_pie(stakes: &[OwnershipStake]) -> ChartDoc {
    let mut value_by_manufacturer: BTreeMap<&str, f64> = BTreeMap::new();
    for stake in stakes {
        *value_by_manufacturer
            .entry(stake.manufacturer_name.as_str())
            .or_default() += stake.market_value_usd_millions;
    }
    let manufacturer = value_by_manufacturer
        .into_iter()
        .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(name, _)| name.to_string())
        .unwrap_or_default();

    let mut holders: Vec<&OwnershipStake> = stakes
        .iter()
        .filter(|s| s.manufacturer_name == manufacturer)
        .collect();
    holders.sort_by(|a, b| {
        b.ownership_percentage
            .partial_cmp(&a.ownership_percentage)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    holders.truncate(8);

    let mut labels: Vec<String> = holders.iter().map(|s| s.shareholder_name.clone()).collect();
    let mut values: Vec<f64> = holders.iter().map(|s| s.ownership_percentage).collect();
    let covered: f64 = values.iter().sum();
    labels.push("Others".to_string());
    values.push((100.0 - covered).max(0.0));

    let figure = json!({
        "data": [{"type": "pie", "labels": labels, "values": values, "hole": 0.3}],
        "layout": {"title": format!("Ownership of {manufacturer}")}
    });
    ChartDoc {
        slug: "manufacturer_ownership_pie",
        title: "Key manufacturer ownership".to_string(),
        figure,
    }
}

/// Per-month totals of cost and units across all operations
pub fn monthly_operations(operations: &[OperationRecord]) -> BTreeMap<String, (f64, f64)> {
    let mut monthly: BTreeMap<String, (f64, f64)> = BTreeMap::new();
    for op in operations {
        let entry = monthly.entry(op.year_month()).or_default();
        entry.0 += op.estimated_cost_usd_millions.unwrap_or(0.0);
        entry.1 += op.estimated_units_used.unwrap_or(0.0);
    }
    monthly
}

pub fn operations_timeline(operations: &[OperationRecord]) -> ChartDoc {
    let monthly = monthly_operations(operations);
    let months: Vec<&str> = monthly.keys().map(String::as_str).collect();

    let figure = json!({
        "data": [
            {
                "type": "bar",
                "x": months,
                "y": monthly.values().map(|(cost, _)| cost).collect::<Vec<_>>(),
                "name": "Cost (USD millions)",
                "marker": {"color": "#E63946"}
            },
            {
                "type": "bar",
                "x": months,
                "y": monthly.values().map(|(_, units)| units).collect::<Vec<_>>(),
                "name": "Units used",
                "marker": {"color": "#457B9D"},
                "xaxis": "x2",
                "yaxis": "y2"
            }
        ],
        "layout": {
            "title": "Operations over time, monthly",
            "grid": {"rows": 2, "columns": 1, "pattern": "independent"},
            "showlegend": false
        }
    });
    ChartDoc {
        slug: "operations_timeline",
        title: "Operations timeline".to_string(),
        figure,
    }
}

/// Per-munition-type totals, in first-encountered order
pub fn munition_totals(operations: &[OperationRecord]) -> Vec<(String, f64, f64)> {
    let mut order: Vec<String> = Vec::new();
    let mut totals: Vec<(String, f64, f64)> = Vec::new();
    for op in operations {
        let slot = order
            .iter()
            .position(|name| *name == op.munition_type)
            .unwrap_or_else(|| {
                order.push(op.munition_type.clone());
                totals.push((op.munition_type.clone(), 0.0, 0.0));
                totals.len() - 1
            });
        totals[slot].1 += op.estimated_units_used.unwrap_or(0.0);
        totals[slot].2 += op.estimated_cost_usd_millions.unwrap_or(0.0);
    }
    totals
}

pub fn munition_types_breakdown(operations: &[OperationRecord]) -> ChartDoc {
    let totals = munition_totals(operations);
    let labels: Vec<&str> = totals.iter().map(|(name, _, _)| name.as_str()).collect();

    let figure = json!({
        "data": [
            {
                "type": "pie",
                "labels": labels,
                "values": totals.iter().map(|(_, units, _)| units).collect::<Vec<_>>(),
                "name": "Units",
                "domain": {"x": [0.0, 0.48]}
            },
            {
                "type": "pie",
                "labels": labels,
                "values": totals.iter().map(|(_, _, cost)| cost).collect::<Vec<_>>(),
                "name": "Cost",
                "domain": {"x": [0.52, 1.0]}
            }
        ],
        "layout": {"title": "Munition types: units vs. cost"}
    });
    ChartDoc {
        slug: "munition_types_breakdown",
        title: "Munition types".to_string(),
        figure,
    }
}

pub fn system_types_distribution(systems: &[System]) -> ChartDoc {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for system in systems {
        *counts.entry(system.system_type.as_str()).or_default() += 1;
    }

    let figure = json!({
        "data": [bar(
            counts.keys().map(|k| json!(k)).collect(),
            counts.values().map(|v| json!(v)).collect()
        )],
        "layout": {
            "title": "System types in the documented infrastructure",
            "xaxis": {"tickangle": -45},
            "yaxis": {"title": "Systems"}
        }
    });
    ChartDoc {
        slug: "system_types_distribution",
        title: "System types".to_string(),
        figure,
    }
}

pub fn ownership_table(infrastructure: &[InfrastructureRow]) -> ChartDoc {
    let header = ["Investor", "Type", "Country", "F-35 (%)", "F-16 (%)", "F-15 (%)",
        "Munitions (%)", "ISR/UAV (%)", "Targeting (%)", "Average (%)"];

    let cells: Vec<Vec<Value>> = vec![
        infrastructure.iter().map(|r| json!(r.investor_name)).collect(),
        infrastructure.iter().map(|r| json!(r.investor_type)).collect(),
        infrastructure.iter().map(|r| json!(r.country)).collect(),
        infrastructure.iter().map(|r| json!(r.pct_ownership_f35_infrastructure)).collect(),
        infrastructure.iter().map(|r| json!(r.pct_ownership_f16_infrastructure)).collect(),
        infrastructure.iter().map(|r| json!(r.pct_ownership_f15_infrastructure)).collect(),
        infrastructure.iter().map(|r| json!(r.pct_ownership_munitions_infrastructure)).collect(),
        infrastructure.iter().map(|r| json!(r.pct_ownership_isr_uav_infrastructure.unwrap_or(0.0))).collect(),
        infrastructure.iter().map(|r| json!(r.pct_ownership_targeting_infrastructure)).collect(),
        infrastructure.iter().map(|r| json!(r.weighted_avg_killchain_ownership_pct)).collect(),
    ];

    let figure = json!({
        "data": [{
            "type": "table",
            "header": {"values": header, "fill": {"color": "#1D3557"}, "font": {"color": "white"}},
            "cells": {"values": cells, "fill": {"color": "#F1FAEE"}}
        }],
        "layout": {"title": "All investors across infrastructure categories"}
    });
    ChartDoc {
        slug: "ownership_table",
        title: "Ownership table".to_string(),
        figure,
    }
}

pub fn stock_performance_war(quotes: &[StockQuote]) -> ChartDoc {
    let mut manufacturers: Vec<&str> = Vec::new();
    for quote in quotes {
        if !manufacturers.contains(&quote.manufacturer_name.as_str()) {
            manufacturers.push(&quote.manufacturer_name);
        }
    }

    let traces: Vec<Value> = manufacturers
        .iter()
        .map(|name| {
            let series: Vec<&StockQuote> = quotes
                .iter()
                .filter(|q| q.manufacturer_name == *name)
                .collect();
            json!({
                "type": "scatter",
                "mode": "lines",
                "name": name,
                "x": series.iter().map(|q| q.date.to_string()).collect::<Vec<_>>(),
                "y": series.iter().map(|q| q.closing_price_usd).collect::<Vec<_>>()
            })
        })
        .collect();

    let figure = json!({
        "data": traces,
        "layout": {
            "title": "Closing prices over the war window",
            "yaxis": {"title": "Closing price (USD)"}
        }
    });
    ChartDoc {
        slug: "stock_performance_war",
        title: "Stock prices".to_string(),
        figure,
    }
}

pub fn stock_performance_comparison(quotes: &[StockQuote]) -> ChartDoc {
    let mut moves = stocks::war_window_moves(quotes);
    // Horizontal bars read bottom-up, so ascending puts the winner on top
    moves.reverse();

    let colors: Vec<&str> = moves
        .iter()
        .map(|m| if m.pct_change >= 0.0 { "#2A9D8F" } else { "#E76F51" })
        .collect();

    let figure = json!({
        "data": [{
            "type": "bar",
            "orientation": "h",
            "y": moves.iter().map(|m| m.manufacturer_name.as_str()).collect::<Vec<_>>(),
            "x": moves.iter().map(|m| m.pct_change).collect::<Vec<_>>(),
            "marker": {"color": colors},
            "text": moves.iter().map(|m| format!("{:.2}%", m.pct_change)).collect::<Vec<_>>(),
            "textposition": "outside"
        }],
        "layout": {
            "title": "Price change across the war window (%)",
            "xaxis": {"title": "Change (%)"}
        }
    });
    ChartDoc {
        slug: "stock_performance_comparison",
        title: "Stock price change".to_string(),
        figure,
    }
}

pub fn fms_contracts_timeline(contracts: &[FmsContract]) -> ChartDoc {
    let mut by_year: BTreeMap<i32, (f64, usize)> = BTreeMap::new();
    for contract in contracts {
        let entry = by_year.entry(contract.fiscal_year).or_default();
        entry.0 += contract.contract_value_usd_millions;
        entry.1 += 1;
    }

    let years: Vec<i32> = by_year.keys().copied().collect();
    let figure = json!({
        "data": [
            {
                "type": "bar",
                "x": years,
                "y": by_year.values().map(|(value, _)| value).collect::<Vec<_>>(),
                "name": "Contract value (USD millions)",
                "marker": {"color": "#E63946"}
            },
            {
                "type": "bar",
                "x": years,
                "y": by_year.values().map(|(_, count)| count).collect::<Vec<_>>(),
                "name": "Contracts",
                "marker": {"color": "#457B9D"},
                "xaxis": "x2",
                "yaxis": "y2"
            }
        ],
        "layout": {
            "title": "Foreign military sales by fiscal year",
            "grid": {"rows": 2, "columns": 1, "pattern": "independent"},
            "showlegend": false
        }
    });
    ChartDoc {
        slug: "fms_contracts_timeline",
        title: "FMS contracts".to_string(),
        figure,
    }
}

pub fn lobbying_trends(records: &[LobbyingRecord]) -> ChartDoc {
    let mut totals: BTreeMap<&str, f64> = BTreeMap::new();
    for record in records {
        *totals.entry(record.manufacturer_name.as_str()).or_default() +=
            record.total_lobbying_usd_millions;
    }
    let mut ranked: Vec<(&str, f64)> = totals.into_iter().collect();
    ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    ranked.truncate(5);

    let traces: Vec<Value> = ranked
        .iter()
        .map(|(name, _)| {
            let mut series: Vec<&LobbyingRecord> = records
                .iter()
                .filter(|r| r.manufacturer_name == *name)
                .collect();
            series.sort_by_key(|r| r.year);
            json!({
                "type": "scatter",
                "mode": "lines+markers",
                "name": name,
                "x": series.iter().map(|r| r.year).collect::<Vec<_>>(),
                "y": series.iter().map(|r| r.total_lobbying_usd_millions).collect::<Vec<_>>()
            })
        })
        .collect();

    let figure = json!({
        "data": traces,
        "layout": {
            "title": "Lobbying spend, top five manufacturers",
            "xaxis": {"title": "Year"},
            "yaxis": {"title": "Lobbying (USD millions)"}
        }
    });
    ChartDoc {
        slug: "lobbying_trends",
        title: "Lobbying trends".to_string(),
        figure,
    }
}

pub fn focus_timeseries(rows: &[TimeseriesRow], focus: &str) -> ChartDoc {
    let timeline = crate::core::timeline::for_investor(focus, rows);

    let figure = json!({
        "data": [{
            "type": "scatter",
            "mode": "lines+markers",
            "fill": "tozeroy",
            "x": timeline.points.iter().map(|p| p.date.to_string()).collect::<Vec<_>>(),
            "y": timeline.points.iter().map(|p| p.market_value_usd_millions).collect::<Vec<_>>(),
            "line": {"color": "#E63946"}
        }],
        "layout": {
            "title": format!("{focus} holdings over time"),
            "yaxis": {"title": "Market value (USD millions)"}
        }
    });
    ChartDoc {
        slug: "focus_timeseries",
        title: "Focus investor over time".to_string(),
        figure,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn op(date: (i32, u32, u32), munition: &str, units: Option<f64>, cost: Option<f64>) -> OperationRecord {
        OperationRecord {
            operation_id: "OP".to_string(),
            date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            system_id: "SYS-1".to_string(),
            munition_type: munition.to_string(),
            estimated_units_used: units,
            estimated_cost_usd_millions: cost,
        }
    }

    #[test]
    fn test_monthly_bucketing() {
        let ops = vec![
            op((2023, 10, 9), "JDAM", Some(100.0), Some(1.0)),
            op((2023, 10, 30), "JDAM", Some(50.0), None),
            op((2023, 11, 2), "GBU-39", Some(10.0), Some(0.5)),
        ];

        let monthly = monthly_operations(&ops);
        assert_eq!(monthly.len(), 2);
        assert_eq!(monthly["2023-10"], (1.0, 150.0));
        assert_eq!(monthly["2023-11"], (0.5, 10.0));
    }

    #[test]
    fn test_munition_totals_keep_encounter_order() {
        let ops = vec![
            op((2023, 10, 9), "JDAM", Some(100.0), Some(1.0)),
            op((2023, 10, 9), "Hellfire", Some(20.0), Some(0.2)),
            op((2023, 10, 10), "JDAM", Some(40.0), Some(0.4)),
        ];

        let totals = munition_totals(&ops);
        assert_eq!(totals[0].0, "JDAM");
        assert_eq!(totals[0].1, 140.0);
        assert_eq!(totals[1].0, "Hellfire");
    }

    #[test]
    fn test_pie_remainder_closes_at_100() {
        let stakes = vec![
            OwnershipStake {
                manufacturer_id: "MFR-A".to_string(),
                manufacturer_name: "Alpha Dynamics".to_string(),
                shareholder_name: "Fund".to_string(),
                ownership_percentage: 60.0,
                market_value_usd_millions: 1000.0,
            },
            OwnershipStake {
                manufacturer_id: "MFR-A".to_string(),
                manufacturer_name: "Alpha Dynamics".to_string(),
                shareholder_name: "Acme Capital".to_string(),
                ownership_percentage: 15.0,
                market_value_usd_millions: 250.0,
            },
        ];

        let doc = manufacturer_ownership_pie(&stakes);
        let values = doc.figure["data"][0]["values"].as_array().unwrap();
        assert_eq!(values.len(), 3);
        assert_eq!(values[2].as_f64().unwrap(), 25.0);
        assert_eq!(doc.figure["data"][0]["labels"][2], "Others");
    }
}
