//! Focus-investor ownership over time

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use crate::core::contracts::escalation_date;
use crate::datasets::TimeseriesRow;

/// Aggregated snapshot of the investor's positions on one date
#[derive(Debug, Clone, Serialize)]
pub struct TimelinePoint {
    pub date: NaiveDate,

    /// Total market value across the investor's positions on this date
    pub market_value_usd_millions: f64,

    /// Mean ownership percentage across those positions
    pub mean_ownership_pct: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct OwnershipTimeline {
    pub points: Vec<TimelinePoint>,

    /// Total market value on the escalation date, None when the series
    /// has no snapshot for that day
    pub value_at_escalation_usd_millions: Option<f64>,
}

/// Per-date rollup of the named investor's positions, date-ordered
pub fn for_investor(name: &str, rows: &[TimeseriesRow]) -> OwnershipTimeline {
    let mut by_date: BTreeMap<NaiveDate, (f64, f64, usize)> = BTreeMap::new();
    for row in rows.iter().filter(|r| r.shareholder_name == name) {
        let entry = by_date.entry(row.date).or_insert((0.0, 0.0, 0));
        entry.0 += row.market_value_usd_millions;
        entry.1 += row.ownership_percentage;
        entry.2 += 1;
    }

    let points: Vec<TimelinePoint> = by_date
        .iter()
        .map(|(date, (value, pct_sum, count))| TimelinePoint {
            date: *date,
            market_value_usd_millions: *value,
            mean_ownership_pct: *pct_sum / *count as f64,
        })
        .collect();

    let value_at_escalation = by_date.get(&escalation_date()).map(|(value, _, _)| *value);

    OwnershipTimeline {
        points,
        value_at_escalation_usd_millions: value_at_escalation,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(shareholder: &str, date: (i32, u32, u32), pct: f64, value: f64) -> TimeseriesRow {
        TimeseriesRow {
            date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            shareholder_name: shareholder.to_string(),
            manufacturer_name: "Any".to_string(),
            ownership_percentage: pct,
            market_value_usd_millions: value,
        }
    }

    #[test]
    fn test_per_date_rollup() {
        let rows = vec![
            row("Fund", (2023, 10, 7), 1.0, 500.0),
            row("Fund", (2023, 10, 7), 2.0, 300.0),
            row("Fund", (2023, 9, 30), 1.5, 700.0),
            row("Other", (2023, 10, 7), 9.0, 9000.0),
        ];

        let timeline = for_investor("Fund", &rows);
        assert_eq!(timeline.points.len(), 2);
        assert_eq!(timeline.points[0].date, NaiveDate::from_ymd_opt(2023, 9, 30).unwrap());
        assert_eq!(timeline.points[1].market_value_usd_millions, 800.0);
        assert_eq!(timeline.points[1].mean_ownership_pct, 1.5);
        assert_eq!(timeline.value_at_escalation_usd_millions, Some(800.0));
    }

    #[test]
    fn test_missing_escalation_snapshot_is_none() {
        let rows = vec![row("Fund", (2023, 9, 30), 1.5, 700.0)];
        let timeline = for_investor("Fund", &rows);
        assert!(timeline.value_at_escalation_usd_millions.is_none());
    }
}
