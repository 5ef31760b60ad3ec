//! Foreign military sales contract report

use miette::Result;
use std::path::PathBuf;

use crate::cli::commands::resolve_config;
use crate::cli::helpers::format_millions;
use crate::cli::GlobalOpts;
use crate::core::contracts;
use crate::datasets::Tables;

use super::{render_rows, write_output};

#[derive(clap::Args, Debug)]
pub struct ContractsArgs {
    /// Output to file instead of stdout
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,
}

pub fn run(args: ContractsArgs, global: &GlobalOpts) -> Result<()> {
    let config = resolve_config(global);
    let tables = Tables::load(&config.data_dir())?;

    let analysis = contracts::analyze(&tables.contracts);

    let mut content = render_rows(
        &analysis.by_manufacturer,
        &["Manufacturer", "Total value ($M)", "Contracts"],
        |row| {
            vec![
                row.manufacturer_name.clone(),
                format!("{:.0}", row.total_value_usd_millions),
                row.number_of_contracts.to_string(),
            ]
        },
        global.format,
    )?;

    if global.format == crate::cli::OutputFormat::Md {
        content.push_str(&format!(
            "\nTotal: {} | Since {}: {} across {} contracts\n",
            format_millions(analysis.total_fms_value_usd_millions),
            contracts::escalation_date(),
            format_millions(analysis.post_oct7_value_usd_millions),
            analysis.post_oct7_contracts
        ));
    }

    write_output(&content, args.output)
}
