//! CSV dataset loading
//!
//! Generic loader shared by every dataset: open `<data_dir>/<name>.csv`,
//! validate the header against the row type's required columns, then
//! deserialize each record. Any failure is fatal; a batch analysis over
//! bad input has nothing useful to say.

use std::collections::HashSet;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::core::error::DatasetError;
use crate::datasets::Record;

/// Load all rows of a dataset from the data directory
pub fn load<T: Record>(data_dir: &Path) -> Result<Vec<T>, DatasetError> {
    let path = data_dir.join(format!("{}.csv", T::DATASET));
    if !path.exists() {
        return Err(DatasetError::Missing {
            dataset: T::DATASET,
            path,
        });
    }

    let file = File::open(&path).map_err(|source| DatasetError::Io {
        path: path.clone(),
        source,
    })?;

    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(BufReader::new(file));

    let headers = reader
        .headers()
        .map_err(|source| DatasetError::Malformed {
            dataset: T::DATASET,
            line: 1,
            source,
        })?
        .clone();
    let present: HashSet<&str> = headers.iter().collect();
    for &column in T::REQUIRED {
        if !present.contains(column) {
            return Err(DatasetError::MissingColumn {
                dataset: T::DATASET,
                column,
                expected: T::REQUIRED.join(", "),
            });
        }
    }

    let mut rows = Vec::new();
    for (idx, result) in reader.deserialize::<T>().enumerate() {
        // Header is line 1, first record line 2
        let row = result.map_err(|source| DatasetError::Malformed {
            dataset: T::DATASET,
            line: idx + 2,
            source,
        })?;
        rows.push(row);
    }

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datasets::Manufacturer;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_load_missing_file() {
        let dir = tempdir().unwrap();
        let err = load::<Manufacturer>(dir.path()).unwrap_err();
        assert!(matches!(err, DatasetError::Missing { dataset, .. } if dataset == "manufacturers"));
    }

    #[test]
    fn test_load_missing_column() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join("manufacturers.csv"),
            "manufacturer_id,country\nMFR-001,USA\n",
        )
        .unwrap();

        let err = load::<Manufacturer>(dir.path()).unwrap_err();
        match err {
            DatasetError::MissingColumn { column, .. } => {
                assert_eq!(column, "manufacturer_name");
            }
            other => panic!("expected MissingColumn, got {other:?}"),
        }
    }

    #[test]
    fn test_load_trims_whitespace() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join("manufacturers.csv"),
            "manufacturer_id,manufacturer_name,country,stock_ticker\n MFR-001 , Lockheed Martin ,USA,LMT\n",
        )
        .unwrap();

        let rows = load::<Manufacturer>(dir.path()).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].manufacturer_id, "MFR-001");
        assert_eq!(rows[0].manufacturer_name, "Lockheed Martin");
    }

    #[test]
    fn test_load_malformed_row_reports_line() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join("ownership_stakes.csv"),
            "manufacturer_id,manufacturer_name,shareholder_name,ownership_percentage,market_value_usd_millions\n\
             MFR-001,Lockheed Martin,Vanguard,9.1,10400\n\
             MFR-001,Lockheed Martin,BlackRock,not-a-number,9800\n",
        )
        .unwrap();

        let err = load::<crate::datasets::OwnershipStake>(dir.path()).unwrap_err();
        match err {
            DatasetError::Malformed { line, .. } => assert_eq!(line, 3),
            other => panic!("expected Malformed, got {other:?}"),
        }
    }
}
