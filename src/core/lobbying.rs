//! Lobbying and political contribution rollups

use serde::Serialize;

use crate::datasets::LobbyingRecord;

/// War-period years for the restricted rollup
const WAR_YEARS: [i32; 2] = [2023, 2024];

#[derive(Debug, Clone, Serialize)]
pub struct ManufacturerLobbying {
    pub manufacturer_name: String,
    pub total_lobbying_usd_millions: f64,
    pub political_contributions_usd_thousands: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct LobbyingAnalysis {
    /// All years in the dataset, sorted descending by lobbying spend
    pub by_manufacturer: Vec<ManufacturerLobbying>,

    /// Same rollup restricted to 2023-2024
    pub war_period_2023_2024: Vec<ManufacturerLobbying>,

    pub total_lobbying_usd_millions: f64,

    pub total_contributions_usd_thousands: f64,
}

fn rollup<'a, I>(records: I) -> Vec<ManufacturerLobbying>
where
    I: Iterator<Item = &'a LobbyingRecord>,
{
    let mut order: Vec<String> = Vec::new();
    let mut totals: Vec<ManufacturerLobbying> = Vec::new();

    for record in records {
        let slot = order
            .iter()
            .position(|name| *name == record.manufacturer_name)
            .unwrap_or_else(|| {
                order.push(record.manufacturer_name.clone());
                totals.push(ManufacturerLobbying {
                    manufacturer_name: record.manufacturer_name.clone(),
                    total_lobbying_usd_millions: 0.0,
                    political_contributions_usd_thousands: 0.0,
                });
                totals.len() - 1
            });
        totals[slot].total_lobbying_usd_millions += record.total_lobbying_usd_millions;
        totals[slot].political_contributions_usd_thousands +=
            record.political_contributions_usd_thousands;
    }

    totals.sort_by(|a, b| {
        b.total_lobbying_usd_millions
            .partial_cmp(&a.total_lobbying_usd_millions)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    totals
}

pub fn analyze(records: &[LobbyingRecord]) -> LobbyingAnalysis {
    let by_manufacturer = rollup(records.iter());
    let war_period = rollup(records.iter().filter(|r| WAR_YEARS.contains(&r.year)));

    let total_lobbying = by_manufacturer
        .iter()
        .map(|m| m.total_lobbying_usd_millions)
        .sum();
    let total_contributions = by_manufacturer
        .iter()
        .map(|m| m.political_contributions_usd_thousands)
        .sum();

    LobbyingAnalysis {
        by_manufacturer,
        war_period_2023_2024: war_period,
        total_lobbying_usd_millions: total_lobbying,
        total_contributions_usd_thousands: total_contributions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(manufacturer: &str, year: i32, lobbying: f64, contributions: f64) -> LobbyingRecord {
        LobbyingRecord {
            year,
            manufacturer_name: manufacturer.to_string(),
            total_lobbying_usd_millions: lobbying,
            political_contributions_usd_thousands: contributions,
        }
    }

    #[test]
    fn test_war_period_restriction() {
        let records = vec![
            record("Boeing", 2020, 12.0, 300.0),
            record("Boeing", 2023, 14.0, 450.0),
            record("Boeing", 2024, 15.0, 500.0),
            record("RTX", 2023, 10.0, 200.0),
        ];

        let analysis = analyze(&records);
        assert_eq!(analysis.total_lobbying_usd_millions, 51.0);
        assert_eq!(analysis.by_manufacturer[0].total_lobbying_usd_millions, 41.0);

        let boeing_war = &analysis.war_period_2023_2024[0];
        assert_eq!(boeing_war.manufacturer_name, "Boeing");
        assert_eq!(boeing_war.total_lobbying_usd_millions, 29.0);
        assert_eq!(boeing_war.political_contributions_usd_thousands, 950.0);
    }
}
