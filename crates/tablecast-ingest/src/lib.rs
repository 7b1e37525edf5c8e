//! File decoding for tablecast.
//!
//! Exactly two input formats are supported: comma-separated values and
//! spreadsheet workbooks. Anything else is rejected by extension before a
//! single byte is decoded. The output is a [`RawTable`] ready for the
//! inference pipeline; no typing decisions are made here beyond what the
//! file format itself encodes.

pub mod csv;
pub mod error;
pub mod workbook;

use std::path::Path;

use tracing::info;

use tablecast_model::RawTable;

pub use crate::csv::read_csv_table;
pub use crate::error::{IngestError, Result};
pub use crate::workbook::read_workbook_table;

/// Extensions accepted by [`load_table`], lowercase.
pub const SUPPORTED_EXTENSIONS: &[&str] = &["csv", "xls", "xlsx"];

/// Decode a file into a raw table, dispatching on its extension.
pub fn load_table(path: &Path) -> Result<RawTable> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase)
        .ok_or_else(|| IngestError::MissingExtension {
            path: path.to_path_buf(),
        })?;

    // Reject unknown formats before touching the file.
    if !SUPPORTED_EXTENSIONS.contains(&extension.as_str()) {
        return Err(IngestError::UnsupportedExtension { extension });
    }
    if !path.is_file() {
        return Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let table = match extension.as_str() {
        "csv" => read_csv_table(path),
        _ => read_workbook_table(path),
    }?;
    info!(
        path = %path.display(),
        columns = table.column_count(),
        rows = table.row_count(),
        "loaded table"
    );
    Ok(table)
}
