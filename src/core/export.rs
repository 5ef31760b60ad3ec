//! Output file writing
//!
//! Every artifact is fully rebuilt on each run; there is no incremental
//! mode. The summary JSON has stable field order so unchanged input yields
//! byte-identical output.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use miette::{IntoDiagnostic, Result};
use serde::Serialize;

use crate::core::summary::Analysis;
use crate::datasets::Tables;

pub const SUMMARY_FILE: &str = "summary_statistics.json";
pub const OWNERSHIP_FILE: &str = "system_ownership_by_investor.csv";
pub const MUNITIONS_FILE: &str = "munitions_attributed_to_investors.csv";
pub const INFRASTRUCTURE_FILE: &str = "infrastructure_ownership_summary.csv";

/// Write the summary document plus the three tabular exports.
///
/// Returns the paths written, in order.
pub fn write_all(out_dir: &Path, tables: &Tables, analysis: &Analysis) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(out_dir).into_diagnostic()?;

    let summary_path = out_dir.join(SUMMARY_FILE);
    let json = serde_json::to_string_pretty(&analysis.stats).into_diagnostic()?;
    let mut writer = BufWriter::new(File::create(&summary_path).into_diagnostic()?);
    writer.write_all(json.as_bytes()).into_diagnostic()?;
    writer.write_all(b"\n").into_diagnostic()?;
    writer.flush().into_diagnostic()?;

    let ownership_path = out_dir.join(OWNERSHIP_FILE);
    write_csv(&ownership_path, &analysis.ownership)?;

    let munitions_path = out_dir.join(MUNITIONS_FILE);
    write_csv(&munitions_path, &analysis.munitions)?;

    let infrastructure_path = out_dir.join(INFRASTRUCTURE_FILE);
    write_csv(&infrastructure_path, &tables.infrastructure)?;

    Ok(vec![
        summary_path,
        ownership_path,
        munitions_path,
        infrastructure_path,
    ])
}

fn write_csv<T: Serialize>(path: &Path, rows: &[T]) -> Result<()> {
    let file = File::create(path).into_diagnostic()?;
    let mut writer = csv::Writer::from_writer(BufWriter::new(file));
    for row in rows {
        writer.serialize(row).into_diagnostic()?;
    }
    writer.flush().into_diagnostic()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::attribution::SystemOwnership;
    use tempfile::tempdir;

    #[test]
    fn test_csv_headers_come_from_field_names() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("ownership.csv");
        let rows = vec![SystemOwnership {
            system_id: "SYS-1".to_string(),
            system_name: "Iron Hawk".to_string(),
            shareholder_name: "Fund".to_string(),
            component_ownership_value: 40.0,
            total_system_value_usd_millions: 100.0,
            system_ownership_pct: 40.0,
        }];

        write_csv(&path, &rows).unwrap();
        let content = fs::read_to_string(&path).unwrap();
        let mut lines = content.lines();
        assert_eq!(
            lines.next().unwrap(),
            "system_id,system_name,shareholder_name,component_ownership_value,total_system_value_usd_millions,system_ownership_pct"
        );
        assert_eq!(lines.next().unwrap(), "SYS-1,Iron Hawk,Fund,40.0,100.0,40.0");
    }
}
