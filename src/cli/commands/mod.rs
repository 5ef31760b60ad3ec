//! CLI command implementations

pub mod analyze;
pub mod charts;
pub mod completions;
pub mod report;

use crate::cli::GlobalOpts;
use crate::core::Config;

/// Layered config with CLI flags applied on top
pub(crate) fn resolve_config(global: &GlobalOpts) -> Config {
    let mut config = Config::load();
    if global.data_dir.is_some() {
        config.data_dir = global.data_dir.clone();
    }
    if global.output_dir.is_some() {
        config.output_dir = global.output_dir.clone();
    }
    config
}
