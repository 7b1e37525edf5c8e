//! Spreadsheet workbook decoding into a raw table.
//!
//! Unlike CSV, workbook cells carry types, so decoded columns can arrive
//! already numeric, boolean, or temporal; the per-column kind tag is
//! derived from the decoded cells. Only the first worksheet is read, with
//! its first row as the header.

use std::path::Path;

use calamine::{Data, DataType as _, Reader as _, open_workbook_auto};
use tracing::debug;

use tablecast_model::{RawCell, RawColumn, RawTable};

use crate::error::{IngestError, Result};

/// Read the first worksheet of an XLS/XLSX workbook into a raw table.
pub fn read_workbook_table(path: &Path) -> Result<RawTable> {
    let mut workbook = open_workbook_auto(path).map_err(|e| IngestError::WorkbookRead {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| IngestError::NoWorksheet {
            path: path.to_path_buf(),
        })?
        .map_err(|e| IngestError::WorkbookRead {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    let mut rows = range.rows();
    let Some(header_row) = rows.next() else {
        return Err(IngestError::EmptyFile {
            path: path.to_path_buf(),
        });
    };
    let names: Vec<String> = header_row
        .iter()
        .enumerate()
        .map(|(index, cell)| header_name(cell, index))
        .collect();
    if names.is_empty() {
        return Err(IngestError::EmptyFile {
            path: path.to_path_buf(),
        });
    }

    let mut columns: Vec<Vec<RawCell>> = vec![Vec::new(); names.len()];
    for row in rows {
        for (index, column) in columns.iter_mut().enumerate() {
            let cell = row.get(index).unwrap_or(&Data::Empty);
            column.push(cell_from_data(cell));
        }
    }

    let columns: Vec<RawColumn> = names
        .into_iter()
        .zip(columns)
        .map(|(name, cells)| RawColumn::new(name, cells))
        .collect();

    debug!(path = %path.display(), columns = columns.len(), "decoded workbook");
    RawTable::new(columns).map_err(|source| IngestError::InvalidTable {
        path: path.to_path_buf(),
        source,
    })
}

/// Map one decoded workbook cell to a raw cell.
pub(crate) fn cell_from_data(cell: &Data) -> RawCell {
    match cell {
        Data::Empty => RawCell::Missing,
        Data::String(s) => {
            let value = s.trim();
            if value.is_empty() {
                RawCell::Missing
            } else {
                RawCell::Text(value.to_string())
            }
        }
        Data::Int(v) => RawCell::Int(*v),
        Data::Float(v) => RawCell::Float(*v),
        Data::Bool(b) => RawCell::Bool(*b),
        Data::DateTime(_) | Data::DateTimeIso(_) => cell
            .as_datetime()
            .map_or(RawCell::Missing, RawCell::DateTime),
        Data::DurationIso(s) => RawCell::Text(s.clone()),
        // Cell-level spreadsheet errors (#DIV/0! and friends) are absent
        // values, consistent with the per-cell degradation policy.
        Data::Error(_) => RawCell::Missing,
    }
}

fn header_name(cell: &Data, index: usize) -> String {
    match cell {
        Data::String(s) if !s.trim().is_empty() => s.trim().to_string(),
        Data::Empty => format!("Unnamed: {index}"),
        other => other
            .as_string()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| format!("Unnamed: {index}")),
    }
}
