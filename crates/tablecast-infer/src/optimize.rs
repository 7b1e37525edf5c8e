//! Storage width optimization, the post-classification pass.
//!
//! Narrows every column to the smallest representation that holds its
//! values without loss, inside the semantic type family assigned by the
//! classifier. Never reassigns a column across families and keeps every
//! variant nullable. Running the pass twice is a fixed point.

use tracing::trace;

use tablecast_model::{ColumnData, TypedColumn, TypedTable};

use crate::numeric::{narrow_float_width, narrow_int_width};

/// Narrow storage widths across the whole table.
pub fn optimize(table: TypedTable) -> TypedTable {
    table.map_columns(optimize_column)
}

fn optimize_column(column: TypedColumn) -> TypedColumn {
    let TypedColumn { name, data } = column;
    let data = match data {
        ColumnData::Int(width, values) => {
            let narrowed = narrow_int_width(&values, width);
            if narrowed != width {
                trace!(column = %name, from = ?width, to = ?narrowed, "narrowed integer width");
            }
            ColumnData::Int(narrowed, values)
        }
        ColumnData::Float(width, values) => {
            let narrowed = narrow_float_width(&values, width);
            if narrowed != width {
                trace!(column = %name, from = ?width, to = ?narrowed, "narrowed float width");
            }
            ColumnData::Float(narrowed, values)
        }
        other => other,
    };
    TypedColumn { name, data }
}
