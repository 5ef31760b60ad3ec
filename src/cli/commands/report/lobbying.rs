//! Lobbying and political contribution report

use miette::Result;
use std::path::PathBuf;

use crate::cli::commands::resolve_config;
use crate::cli::GlobalOpts;
use crate::core::lobbying;
use crate::datasets::Tables;

use super::{render_rows, write_output};

#[derive(clap::Args, Debug)]
pub struct LobbyingArgs {
    /// Restrict to the 2023-2024 war period
    #[arg(long)]
    pub war_period: bool,

    /// Output to file instead of stdout
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,
}

pub fn run(args: LobbyingArgs, global: &GlobalOpts) -> Result<()> {
    let config = resolve_config(global);
    let tables = Tables::load(&config.data_dir())?;

    let analysis = lobbying::analyze(&tables.lobbying);
    let rows = if args.war_period {
        &analysis.war_period_2023_2024
    } else {
        &analysis.by_manufacturer
    };

    let content = render_rows(
        rows,
        &["Manufacturer", "Lobbying ($M)", "Contributions ($K)"],
        |row| {
            vec![
                row.manufacturer_name.clone(),
                format!("{:.1}", row.total_lobbying_usd_millions),
                format!("{:.0}", row.political_contributions_usd_thousands),
            ]
        },
        global.format,
    )?;

    write_output(&content, args.output)
}
