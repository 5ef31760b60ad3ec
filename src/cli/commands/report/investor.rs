//! Single-investor deep-dive report

use console::style;
use miette::Result;
use std::path::PathBuf;

use crate::cli::commands::resolve_config;
use crate::cli::helpers::{format_millions, format_pct};
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::investor;
use crate::datasets::Tables;

use super::{render_rows, write_output};

#[derive(clap::Args, Debug)]
pub struct InvestorArgs {
    /// Investor name (default: the configured focus investor)
    pub name: Option<String>,

    /// Output to file instead of stdout
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,
}

pub fn run(args: InvestorArgs, global: &GlobalOpts) -> Result<()> {
    let config = resolve_config(global);
    let tables = Tables::load(&config.data_dir())?;

    let name = args.name.unwrap_or_else(|| config.focus_investor());
    let profile = investor::profile(&name, &tables.infrastructure, &tables.stakes)?;

    // JSON carries the whole profile; the tabular formats carry the holdings
    let content = match global.format {
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(&profile)
                .map_err(|e| miette::miette!("{e}"))?;
            json.push('\n');
            json
        }
        format => {
            let table = render_rows(
                &profile.holdings,
                &["Manufacturer", "Ownership", "Market value ($M)"],
                |holding| {
                    vec![
                        holding.manufacturer_name.clone(),
                        format_pct(holding.ownership_percentage),
                        format!("{:.0}", holding.market_value_usd_millions),
                    ]
                },
                format,
            )?;
            if format == OutputFormat::Md {
                format!(
                    "{}\nTotal investment: {}\nAverage kill-chain ownership: {}\n\n{}",
                    style(&profile.investor_name).bold(),
                    format_millions(profile.total_investment_usd_millions),
                    format_pct(profile.avg_killchain_ownership_pct),
                    table
                )
            } else {
                table
            }
        }
    };

    write_output(&content, args.output)
}
