//! Stock price movement report

use miette::Result;
use std::path::PathBuf;

use crate::cli::commands::resolve_config;
use crate::cli::helpers::format_pct;
use crate::cli::GlobalOpts;
use crate::core::stocks;
use crate::datasets::Tables;

use super::{render_rows, write_output};

#[derive(clap::Args, Debug)]
pub struct StocksArgs {
    /// Output to file instead of stdout
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,
}

pub fn run(args: StocksArgs, global: &GlobalOpts) -> Result<()> {
    let config = resolve_config(global);
    let tables = Tables::load(&config.data_dir())?;

    let moves = stocks::war_window_moves(&tables.stocks);

    let content = render_rows(
        &moves,
        &["Manufacturer", "Open ($)", "Close ($)", "Change"],
        |row| {
            vec![
                row.manufacturer_name.clone(),
                format!("{:.2}", row.open_price_usd),
                format!("{:.2}", row.close_price_usd),
                format_pct(row.pct_change),
            ]
        },
        global.format,
    )?;

    write_output(&content, args.output)
}
