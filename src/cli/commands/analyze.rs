//! `oat analyze` command - run the full pipeline
//!
//! Load everything, compute everything, write everything, print a summary.
//! There is no incremental mode; each run rebuilds all outputs.

use console::style;
use miette::Result;

use crate::cli::helpers::{format_millions, format_pct};
use crate::cli::GlobalOpts;
use crate::core::summary::Analysis;
use crate::core::{attribution, export, summary};
use crate::datasets::Tables;

use super::resolve_config;

#[derive(clap::Args, Debug)]
pub struct AnalyzeArgs {
    /// Investor for the deep-dive sections (default: from config)
    #[arg(long, env = "OAT_FOCUS_INVESTOR")]
    pub focus: Option<String>,
}

pub fn run(args: AnalyzeArgs, global: &GlobalOpts) -> Result<()> {
    let config = resolve_config(global);
    let focus = args.focus.unwrap_or_else(|| config.focus_investor());

    if !global.quiet {
        println!(
            "{} Loading datasets from {}",
            style("→").blue(),
            style(config.data_dir().display()).yellow()
        );
    }
    let tables = Tables::load(&config.data_dir())?;

    for (manufacturer, sum) in attribution::oversubscribed_manufacturers(&tables.stakes) {
        eprintln!(
            "{} recorded stakes in {} sum to {:.1}%",
            style("warning:").yellow().bold(),
            manufacturer,
            sum
        );
    }

    let analysis = summary::run(&tables, &focus)?;

    let written = export::write_all(&config.output_dir(), &tables, &analysis)?;
    if !global.quiet {
        println!(
            "{} Exported {} files to {}",
            style("✓").green(),
            written.len(),
            style(config.output_dir().display()).yellow()
        );
    }

    print_summary(&analysis, &focus);
    Ok(())
}

fn rule(heavy: bool) -> String {
    if heavy {
        "=".repeat(80)
    } else {
        "-".repeat(80)
    }
}

fn print_summary(analysis: &Analysis, focus: &str) {
    let stats = &analysis.stats;

    println!();
    println!("{}", rule(true));
    println!("{}", style("OWNERSHIP ATTRIBUTION - SUMMARY").bold());
    println!("{}", rule(true));
    println!();
    println!("Systems documented:       {}", stats.total_systems);
    println!("Manufacturers:            {}", stats.total_manufacturers);
    println!("Shareholders:             {}", stats.total_shareholders);
    println!("Operations documented:    {}", stats.total_operations_documented);
    println!(
        "Total investment (all investors): ${:.1}B",
        stats.total_investment_all_investors_usd_billions
    );

    println!();
    println!("{}", style("TOP 5 INVESTORS IN KILL-CHAIN INFRASTRUCTURE").bold());
    println!("{}", rule(false));
    for (rank, investor) in stats.top_5_investors.iter().enumerate() {
        println!("{}. {}", rank + 1, style(&investor.investor_name).cyan());
        println!(
            "   Average ownership: {}",
            format_pct(investor.weighted_avg_killchain_ownership_pct)
        );
        println!(
            "   Total investment:  {}",
            format_millions(investor.total_investment_usd_millions)
        );
    }

    println!();
    println!("{}", style(format!("{} ANALYSIS", focus.to_uppercase())).bold());
    println!("{}", rule(false));
    let profile = &stats.focus_investor;
    println!(
        "Total investment:            {}",
        format_millions(profile.total_investment_usd_millions)
    );
    println!(
        "Average kill-chain ownership: {}",
        format_pct(profile.avg_killchain_ownership_pct)
    );
    println!("Top holdings:");
    for holding in profile.holdings.iter().take(5) {
        println!(
            "  - {}: {} ({})",
            holding.manufacturer_name,
            format_pct(holding.ownership_percentage),
            format_millions(holding.market_value_usd_millions)
        );
    }

    println!();
    println!("{}", rule(true));
    println!("{}", style("MUNITIONS USE ATTRIBUTED TO INVESTORS").bold());
    println!("{}", rule(true));
    for (rank, investor) in stats.top_5_munitions_investors.iter().enumerate() {
        println!("{}. {}", rank + 1, style(&investor.shareholder_name).cyan());
        println!(
            "   Attributed units: {:.0}",
            investor.units_attributed_to_investor
        );
        println!(
            "   Attributed cost:  ${:.2}M",
            investor.cost_attributed_to_investor_usd_millions
        );
    }

    println!();
    println!(
        "FMS contracts: {} total, {} ({} contracts) announced since the escalation",
        format_millions(stats.fms_contracts.total_fms_value_usd_millions),
        format_millions(stats.fms_contracts.post_oct7_value_usd_millions),
        stats.fms_contracts.post_oct7_contracts
    );
    println!(
        "Lobbying 2020-2024: {} ({}K in political contributions)",
        format_millions(stats.lobbying.total_lobbying_usd_millions),
        stats.lobbying.total_contributions_usd_thousands as i64
    );
    println!("{}", rule(true));
}
