//! CSV decoding into a raw table.
//!
//! CSV carries no type information, so every decoded column is of the
//! mixed kind: fields become text cells and empty fields become the
//! missing marker. Ragged rows are a decode error, not a recoverable
//! condition.

use std::path::Path;

use tracing::debug;

use tablecast_model::{RawCell, RawColumn, RawTable};

use crate::error::{IngestError, Result};

/// Read a CSV file with a header row into a raw table.
pub fn read_csv_table(path: &Path) -> Result<RawTable> {
    let mut reader = ::csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .map_err(|e| csv_error(path, &e))?;

    let headers = reader.headers().map_err(|e| csv_error(path, &e))?.clone();
    if headers.is_empty() {
        return Err(IngestError::EmptyFile {
            path: path.to_path_buf(),
        });
    }

    let mut columns: Vec<Vec<RawCell>> = vec![Vec::new(); headers.len()];
    for record in reader.records() {
        let record = record.map_err(|e| csv_error(path, &e))?;
        if record.len() != headers.len() {
            return Err(IngestError::CsvParse {
                path: path.to_path_buf(),
                message: format!(
                    "row has {} fields, expected {}",
                    record.len(),
                    headers.len()
                ),
            });
        }
        for (column, field) in columns.iter_mut().zip(record.iter()) {
            let value = field.trim();
            column.push(if value.is_empty() {
                RawCell::Missing
            } else {
                RawCell::Text(value.to_string())
            });
        }
    }

    let columns: Vec<RawColumn> = headers
        .iter()
        .zip(columns)
        .map(|(name, cells)| RawColumn::new(name, cells))
        .collect();

    debug!(path = %path.display(), columns = columns.len(), "decoded csv");
    RawTable::new(columns).map_err(|source| IngestError::InvalidTable {
        path: path.to_path_buf(),
        source,
    })
}

fn csv_error(path: &Path, error: &::csv::Error) -> IngestError {
    IngestError::CsvParse {
        path: path.to_path_buf(),
        message: error.to_string(),
    }
}
