//! Stock price movement over the war window

use chrono::NaiveDate;
use serde::Serialize;

use crate::datasets::StockQuote;

/// Last trading day before the escalation
pub fn window_open() -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, 10, 6).expect("valid calendar date")
}

/// End of the comparison window
pub fn window_close() -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, 12, 31).expect("valid calendar date")
}

/// One manufacturer's price move across the window
#[derive(Debug, Clone, Serialize)]
pub struct StockMove {
    pub manufacturer_name: String,
    pub open_price_usd: f64,
    pub close_price_usd: f64,
    pub pct_change: f64,
}

/// Percent change per manufacturer between the window endpoints, sorted
/// descending by change. Manufacturers missing either endpoint are omitted.
pub fn war_window_moves(quotes: &[StockQuote]) -> Vec<StockMove> {
    let open = window_open();
    let close = window_close();

    let price_on = |name: &str, date: NaiveDate| {
        quotes
            .iter()
            .find(|q| q.manufacturer_name == name && q.date == date)
            .map(|q| q.closing_price_usd)
    };

    let mut seen: Vec<&str> = Vec::new();
    let mut moves: Vec<StockMove> = Vec::new();
    for quote in quotes {
        if seen.contains(&quote.manufacturer_name.as_str()) {
            continue;
        }
        seen.push(&quote.manufacturer_name);

        let (Some(open_price), Some(close_price)) = (
            price_on(&quote.manufacturer_name, open),
            price_on(&quote.manufacturer_name, close),
        ) else {
            continue;
        };
        moves.push(StockMove {
            manufacturer_name: quote.manufacturer_name.clone(),
            open_price_usd: open_price,
            close_price_usd: close_price,
            pct_change: (close_price - open_price) / open_price * 100.0,
        });
    }

    moves.sort_by(|a, b| {
        b.pct_change
            .partial_cmp(&a.pct_change)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    moves
}
