//! Munitions attribution report

use miette::Result;
use std::path::PathBuf;

use crate::cli::commands::resolve_config;
use crate::cli::GlobalOpts;
use crate::core::attribution;
use crate::datasets::Tables;

use super::{render_rows, write_output};

#[derive(clap::Args, Debug)]
pub struct MunitionsArgs {
    /// Only the top N shareholders
    #[arg(long)]
    pub top: Option<usize>,

    /// Output to file instead of stdout
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,
}

pub fn run(args: MunitionsArgs, global: &GlobalOpts) -> Result<()> {
    let config = resolve_config(global);
    let tables = Tables::load(&config.data_dir())?;

    let ownership = attribution::system_ownership(&tables.components, &tables.stakes);
    let mut rows = attribution::munitions_by_investor(&tables.operations, &ownership);
    if let Some(top) = args.top {
        rows.truncate(top);
    }

    let content = render_rows(
        &rows,
        &["Shareholder", "Attributed units", "Attributed cost ($M)", "Units in matched ops"],
        |row| {
            vec![
                row.shareholder_name.clone(),
                format!("{:.0}", row.units_attributed_to_investor),
                format!("{:.2}", row.cost_attributed_to_investor_usd_millions),
                format!("{:.0}", row.estimated_units_used),
            ]
        },
        global.format,
    )?;

    write_output(&content, args.output)
}
