//! Missing-value normalization, the pre-inference pass.
//!
//! Runs before classification so that the classifier never sees the missing
//! marker in numeric or mixed columns: non-finite floats become missing,
//! then missing cells are filled with a kind-appropriate placeholder.
//! Columns that are neither clearly numeric nor clearly textual keep an
//! explicit "N/A" token instead, which later stages treat as ordinary text.

use tracing::debug;

use tablecast_model::{RawCell, RawColumn, RawKind, RawTable};

/// Placeholder written into columns outside the numeric and mixed kinds.
pub const PLACEHOLDER_OTHER: &str = "N/A";

/// Normalize missing values across the whole table. Shape-preserving, no I/O.
pub fn normalize(table: RawTable) -> RawTable {
    table.map_columns(normalize_column)
}

fn normalize_column(column: RawColumn) -> RawColumn {
    let RawColumn { name, kind, cells } = column;

    // Non-finite numeric values count as absent.
    let cells: Vec<RawCell> = cells
        .into_iter()
        .map(|cell| match cell {
            RawCell::Float(v) if !v.is_finite() => RawCell::Missing,
            other => other,
        })
        .collect();

    let gaps = cells.iter().filter(|c| c.is_missing()).count();
    if gaps == 0 {
        return RawColumn::with_kind(name, kind, cells);
    }

    let fill = placeholder_for(kind, &cells);
    debug!(column = %name, ?kind, gaps, "filling missing cells");
    let cells = cells
        .into_iter()
        .map(|cell| {
            if cell.is_missing() {
                fill.clone()
            } else {
                cell
            }
        })
        .collect();
    RawColumn::with_kind(name, kind, cells)
}

/// The fill value for a column of the given kind. Numeric columns get zero
/// (float zero if the column carries any float), mixed columns get the
/// empty string, everything else gets the "N/A" token.
fn placeholder_for(kind: RawKind, cells: &[RawCell]) -> RawCell {
    match kind {
        RawKind::Numeric => {
            if cells.iter().any(|c| matches!(c, RawCell::Float(_))) {
                RawCell::Float(0.0)
            } else {
                RawCell::Int(0)
            }
        }
        RawKind::Mixed => RawCell::Text(String::new()),
        RawKind::Boolean | RawKind::Temporal => RawCell::Text(PLACEHOLDER_OTHER.to_string()),
    }
}
