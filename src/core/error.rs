//! Typed diagnostics for the pipeline
//!
//! The tool is fail-fast: a missing file, a missing column, or a malformed
//! row terminates the run with one of these diagnostics. There is no retry
//! or partial-result mode.

use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Errors raised while loading the input datasets
#[derive(Debug, Error, Diagnostic)]
pub enum DatasetError {
    #[error("dataset '{dataset}' not found at {}", path.display())]
    #[diagnostic(
        code(oat::dataset::missing),
        help("expected {dataset}.csv under the data directory; point --data-dir or OAT_DATA_DIR at it")
    )]
    Missing {
        dataset: &'static str,
        path: PathBuf,
    },

    #[error("dataset '{dataset}' is missing required column '{column}'")]
    #[diagnostic(
        code(oat::dataset::column),
        help("the header row must contain: {expected}")
    )]
    MissingColumn {
        dataset: &'static str,
        column: &'static str,
        expected: String,
    },

    #[error("dataset '{dataset}', line {line}: malformed record")]
    #[diagnostic(code(oat::dataset::malformed))]
    Malformed {
        dataset: &'static str,
        line: usize,
        #[source]
        source: csv::Error,
    },

    #[error("could not read {}", path.display())]
    #[diagnostic(code(oat::dataset::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// The requested focus investor has no row in the infrastructure summary
#[derive(Debug, Error, Diagnostic)]
#[error("investor not found: '{name}'")]
#[diagnostic(
    code(oat::investor::unknown),
    help("the name must match infrastructure_ownership_analysis.csv exactly, including punctuation")
)]
pub struct UnknownInvestor {
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_investor_message() {
        let err = UnknownInvestor {
            name: "Acme Capital".to_string(),
        };
        assert_eq!(err.to_string(), "investor not found: 'Acme Capital'");
    }
}
