//! Per-system-per-shareholder ownership report

use miette::Result;
use std::path::PathBuf;

use crate::cli::commands::resolve_config;
use crate::cli::helpers::format_pct;
use crate::cli::GlobalOpts;
use crate::core::attribution;
use crate::datasets::Tables;

use super::{render_rows, write_output};

#[derive(clap::Args, Debug)]
pub struct OwnershipArgs {
    /// Only rows for this system id
    #[arg(long)]
    pub system: Option<String>,

    /// Output to file instead of stdout
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,
}

pub fn run(args: OwnershipArgs, global: &GlobalOpts) -> Result<()> {
    let config = resolve_config(global);
    let tables = Tables::load(&config.data_dir())?;

    let mut rows = attribution::system_ownership(&tables.components, &tables.stakes);
    if let Some(ref system) = args.system {
        rows.retain(|row| row.system_id == *system);
    }

    let content = render_rows(
        &rows,
        &["System", "Shareholder", "Owned value ($M)", "System value ($M)", "Ownership"],
        |row| {
            vec![
                row.system_name.clone(),
                row.shareholder_name.clone(),
                format!("{:.1}", row.component_ownership_value),
                format!("{:.1}", row.total_system_value_usd_millions),
                format_pct(row.system_ownership_pct),
            ]
        },
        global.format,
    )?;

    write_output(&content, args.output)
}
