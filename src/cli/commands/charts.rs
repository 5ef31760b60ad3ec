//! `oat charts` command - render the chart documents

use console::style;
use miette::Result;

use crate::charts;
use crate::cli::GlobalOpts;
use crate::datasets::Tables;

use super::resolve_config;

#[derive(clap::Args, Debug)]
pub struct ChartsArgs {
    /// Investor for the focus charts (default: from config)
    #[arg(long, env = "OAT_FOCUS_INVESTOR")]
    pub focus: Option<String>,
}

pub fn run(args: ChartsArgs, global: &GlobalOpts) -> Result<()> {
    let config = resolve_config(global);
    let focus = args.focus.unwrap_or_else(|| config.focus_investor());

    let tables = Tables::load(&config.data_dir())?;

    let viz_dir = config.output_dir().join("visualizations");
    let written = charts::write_all(&viz_dir, &tables, &focus)?;

    if !global.quiet {
        for path in &written {
            println!(
                "{} Generated: {}",
                style("✓").green(),
                path.file_stem().and_then(|s| s.to_str()).unwrap_or("?")
            );
        }
        println!();
        println!(
            "{} chart document(s) in {}",
            style(written.len()).cyan(),
            style(viz_dir.display()).yellow()
        );

        println!("Files:");
        let mut names: Vec<String> = walkdir::WalkDir::new(&viz_dir)
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_file())
            .filter_map(|entry| entry.file_name().to_str().map(String::from))
            .collect();
        names.sort();
        for name in names {
            println!("  - {name}");
        }
    }

    Ok(())
}
