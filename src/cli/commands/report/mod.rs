//! `oat report` command - print one derived table

mod contracts;
mod investor;
mod lobbying;
mod munitions;
mod ownership;
mod stocks;

use clap::Subcommand;
use miette::{IntoDiagnostic, Result};
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use tabled::{builder::Builder, settings::Style};

use crate::cli::{GlobalOpts, OutputFormat};

pub use contracts::ContractsArgs;
pub use investor::InvestorArgs;
pub use lobbying::LobbyingArgs;
pub use munitions::MunitionsArgs;
pub use ownership::OwnershipArgs;
pub use stocks::StocksArgs;

#[derive(Subcommand, Debug)]
pub enum ReportCommands {
    /// Per-system-per-shareholder ownership
    Ownership(OwnershipArgs),

    /// Munitions use attributed to shareholders
    Munitions(MunitionsArgs),

    /// Deep-dive for one investor
    Investor(InvestorArgs),

    /// Foreign military sales contract rollup
    Contracts(ContractsArgs),

    /// Stock price moves over the war window
    Stocks(StocksArgs),

    /// Lobbying and political contribution rollup
    Lobbying(LobbyingArgs),
}

pub fn run(cmd: ReportCommands, global: &GlobalOpts) -> Result<()> {
    match cmd {
        ReportCommands::Ownership(args) => ownership::run(args, global),
        ReportCommands::Munitions(args) => munitions::run(args, global),
        ReportCommands::Investor(args) => investor::run(args, global),
        ReportCommands::Contracts(args) => contracts::run(args, global),
        ReportCommands::Stocks(args) => stocks::run(args, global),
        ReportCommands::Lobbying(args) => lobbying::run(args, global),
    }
}

// Shared helper functions

pub(crate) fn write_output(content: &str, output_path: Option<PathBuf>) -> Result<()> {
    match output_path {
        Some(path) => {
            let file = File::create(&path).into_diagnostic()?;
            let mut writer = BufWriter::new(file);
            writer.write_all(content.as_bytes()).into_diagnostic()?;
            println!("Report written to: {}", path.display());
        }
        None => {
            print!("{}", content);
        }
    }
    Ok(())
}

/// Render serializable rows in the requested format.
///
/// Markdown gets the display headers and formatter; CSV and JSON use the
/// serde field names, so piped output stays machine-friendly.
pub(crate) fn render_rows<T, F>(
    rows: &[T],
    headers: &[&str],
    to_record: F,
    format: OutputFormat,
) -> Result<String>
where
    T: Serialize,
    F: Fn(&T) -> Vec<String>,
{
    match format {
        OutputFormat::Md => {
            let mut builder = Builder::default();
            builder.push_record(headers.iter().copied());
            for row in rows {
                builder.push_record(to_record(row));
            }
            Ok(format!(
                "{}\n",
                builder.build().with(Style::markdown())
            ))
        }
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(Vec::new());
            for row in rows {
                writer.serialize(row).into_diagnostic()?;
            }
            let bytes = writer
                .into_inner()
                .map_err(|e| miette::miette!("{e}"))?;
            String::from_utf8(bytes).into_diagnostic()
        }
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(rows).into_diagnostic()?;
            json.push('\n');
            Ok(json)
        }
    }
}
