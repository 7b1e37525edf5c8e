//! Per-column semantic type classification.
//!
//! Candidate types are evaluated in a strict order and the first match wins:
//!
//! 1. Columns decoded as numeric or boolean are trusted and converted
//!    directly, without re-parsing.
//! 2. Numeric candidate: accepted when at least one cell parses as a
//!    number; the rest become missing. Integer family when every parsed
//!    value is integral, float otherwise, narrowed to the smallest lossless
//!    width.
//! 3. Timestamp candidate: only reached when no cell parsed as a number;
//!    accepted when at least one cell parses as a date/time.
//! 4. Text family, only for columns of the mixed kind: category when
//!    repeated values dominate, text otherwise.
//! 5. Anything left (a temporal column whose cells all failed step 3)
//!    converts in kind, unchanged.
//!
//! No per-cell failure ever aborts a column; unparseable cells degrade to
//! the missing marker.

use std::collections::HashMap;

use tracing::trace;

use tablecast_model::{
    ColumnData, FloatWidth, IntWidth, RawCell, RawColumn, RawKind, TypedColumn,
};

use crate::datetime::parse_timestamp;
use crate::numeric::{
    ParsedNumber, cell_to_number, integral_to_i64, narrow_float_width, narrow_int_width,
};

/// Distinct-to-total ratio below which a text-family column becomes a
/// category. Empirical constant carried over from the reference behavior;
/// tunable, not derived.
pub const CATEGORY_RATIO_MAX: f64 = 0.5;

/// Classify one column, producing its typed form.
pub fn classify_column(column: &RawColumn) -> TypedColumn {
    let data = classify_data(column);
    trace!(column = %column.name, ty = %data.semantic_type(), "classified");
    TypedColumn::new(&column.name, data)
}

fn classify_data(column: &RawColumn) -> ColumnData {
    // Step 1: already-typed columns are trusted as correct.
    match column.kind {
        RawKind::Numeric => return trusted_numeric(&column.cells),
        RawKind::Boolean => return trusted_boolean(&column.cells),
        RawKind::Temporal | RawKind::Mixed => {}
    }

    // Step 2: numeric candidate.
    if let Some(data) = numeric_candidate(&column.cells) {
        return data;
    }

    // Step 3: timestamp candidate, only after a numeric rejection.
    if let Some(data) = timestamp_candidate(&column.cells) {
        return data;
    }

    // Step 4: text family, gated on the generic/mixed decode kind.
    if column.kind == RawKind::Mixed {
        return text_family(&column.cells);
    }

    // Step 5: a temporal column with nothing parseable left; keep its kind.
    trusted_temporal(&column.cells)
}

fn trusted_numeric(cells: &[RawCell]) -> ColumnData {
    if cells.iter().any(|c| matches!(c, RawCell::Float(_))) {
        let values = cells
            .iter()
            .map(|cell| match cell {
                RawCell::Float(v) => Some(*v),
                RawCell::Int(v) => Some(*v as f64),
                _ => None,
            })
            .collect();
        ColumnData::Float(FloatWidth::F64, values)
    } else {
        let values = cells
            .iter()
            .map(|cell| match cell {
                RawCell::Int(v) => Some(*v),
                _ => None,
            })
            .collect();
        ColumnData::Int(IntWidth::I64, values)
    }
}

fn trusted_boolean(cells: &[RawCell]) -> ColumnData {
    let values = cells
        .iter()
        .map(|cell| match cell {
            RawCell::Bool(b) => Some(*b),
            _ => None,
        })
        .collect();
    ColumnData::Bool(values)
}

fn trusted_temporal(cells: &[RawCell]) -> ColumnData {
    let values = cells
        .iter()
        .map(|cell| match cell {
            RawCell::DateTime(dt) => Some(*dt),
            _ => None,
        })
        .collect();
    ColumnData::Timestamp(values)
}

/// Step 2: accept when at least one cell parses as a number. Integer
/// family when every parsed value is integral and fits `i64`.
fn numeric_candidate(cells: &[RawCell]) -> Option<ColumnData> {
    let parsed: Vec<Option<ParsedNumber>> = cells.iter().map(cell_to_number).collect();
    if parsed.iter().all(Option::is_none) {
        return None;
    }

    let mut ints: Vec<Option<i64>> = Vec::with_capacity(parsed.len());
    let mut all_integral = true;
    for value in &parsed {
        match value {
            None => ints.push(None),
            Some(ParsedNumber::Int(v)) => ints.push(Some(*v)),
            Some(ParsedNumber::Float(v)) => match integral_to_i64(*v) {
                Some(v) => ints.push(Some(v)),
                None => {
                    all_integral = false;
                    break;
                }
            },
        }
    }
    if all_integral {
        let width = narrow_int_width(&ints, IntWidth::I64);
        return Some(ColumnData::Int(width, ints));
    }

    let floats: Vec<Option<f64>> = parsed
        .iter()
        .map(|value| match value {
            None => None,
            Some(ParsedNumber::Int(v)) => Some(*v as f64),
            Some(ParsedNumber::Float(v)) => Some(*v),
        })
        .collect();
    let width = narrow_float_width(&floats, FloatWidth::F64);
    Some(ColumnData::Float(width, floats))
}

/// Step 3: accept when at least one cell parses as a date/time.
fn timestamp_candidate(cells: &[RawCell]) -> Option<ColumnData> {
    let values: Vec<Option<chrono::NaiveDateTime>> = cells
        .iter()
        .map(|cell| match cell {
            RawCell::DateTime(dt) => Some(*dt),
            RawCell::Text(s) => parse_timestamp(s),
            _ => None,
        })
        .collect();
    if values.iter().all(Option::is_none) {
        return None;
    }
    Some(ColumnData::Timestamp(values))
}

/// Step 4: category when repeated values dominate, text otherwise.
fn text_family(cells: &[RawCell]) -> ColumnData {
    let rendered: Vec<Option<String>> = cells.iter().map(render_cell).collect();
    let total = rendered.len();
    let mut distinct: HashMap<&str, u32> = HashMap::new();
    for value in rendered.iter().flatten() {
        let next = distinct.len() as u32;
        distinct.entry(value.as_str()).or_insert(next);
    }
    let ratio = if total == 0 {
        0.0
    } else {
        distinct.len() as f64 / total as f64
    };

    if ratio < CATEGORY_RATIO_MAX {
        let mut labels = vec![String::new(); distinct.len()];
        for (value, code) in &distinct {
            labels[*code as usize] = (*value).to_string();
        }
        let codes = rendered
            .iter()
            .map(|value| value.as_deref().map(|v| distinct[v]))
            .collect();
        ColumnData::Category { labels, codes }
    } else {
        ColumnData::Text(rendered)
    }
}

/// Coerce a cell to its string form; missing stays missing.
fn render_cell(cell: &RawCell) -> Option<String> {
    match cell {
        RawCell::Text(s) => Some(s.clone()),
        RawCell::Int(v) => Some(v.to_string()),
        RawCell::Float(v) => Some(format_float(*v)),
        RawCell::Bool(b) => Some(b.to_string()),
        RawCell::DateTime(dt) => Some(dt.format("%Y-%m-%dT%H:%M:%S").to_string()),
        RawCell::Missing => None,
    }
}

/// Format a float without trailing zeros.
fn format_float(v: f64) -> String {
    let s = format!("{v}");
    match s.find('.') {
        Some(_) => s.trim_end_matches('0').trim_end_matches('.').to_string(),
        None => s,
    }
}
