//! CLI argument definitions using clap derive

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::cli::commands::{
    analyze::AnalyzeArgs, charts::ChartsArgs, completions::CompletionsArgs,
    report::ReportCommands,
};

#[derive(Parser)]
#[command(name = "oat")]
#[command(author, version, about = "Ownership Attribution Toolkit")]
#[command(
    long_about = "Ownership Attribution Toolkit\n\nA batch analysis toolkit that attributes weapons-system value and documented operational use to shareholders, proportional to their ownership of the component manufacturers."
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOpts,
}

#[derive(clap::Args, Clone, Debug)]
pub struct GlobalOpts {
    /// Directory containing the CSV datasets (default: ./data)
    #[arg(long, global = true, env = "OAT_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Directory for exports and chart documents (default: ./output)
    #[arg(long, global = true, env = "OAT_OUTPUT_DIR")]
    pub output_dir: Option<PathBuf>,

    /// Output format for report tables
    #[arg(long, short = 'f', global = true, default_value = "md")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the full pipeline: load, compute, export, print the summary
    Analyze(AnalyzeArgs),

    /// Print one derived table
    #[command(subcommand)]
    Report(ReportCommands),

    /// Render the chart documents
    Charts(ChartsArgs),

    /// Generate shell completion scripts
    Completions(CompletionsArgs),
}

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Markdown tables
    #[default]
    Md,
    /// CSV (for piping into other tools)
    Csv,
    /// JSON (for programming)
    Json,
}
