//! Schema inference core.
//!
//! Takes a decoded [`RawTable`] and produces the inferred schema plus a
//! bounded row preview. The pipeline is normalize → classify (per column,
//! columns are mutually independent) → optimize → assemble. Malformed cell
//! content never fails the pipeline; each unparseable cell degrades to the
//! missing marker. The only failure mode is structurally invalid input,
//! which [`RawTable`] construction already rejects.

pub mod assemble;
pub mod classify;
pub mod datetime;
pub mod normalize;
pub mod numeric;
pub mod optimize;

use thiserror::Error;
use tracing::debug;

use tablecast_model::{RawTable, TypedColumn, TypedTable};

pub use assemble::{PREVIEW_ROW_LIMIT, SchemaReport};
pub use classify::{CATEGORY_RATIO_MAX, classify_column};
pub use datetime::parse_timestamp;
pub use normalize::normalize;
pub use optimize::optimize;

#[derive(Debug, Error)]
pub enum InferError {
    #[error("invalid table: {0}")]
    InvalidTable(#[from] tablecast_model::ModelError),
}

pub type Result<T> = std::result::Result<T, InferError>;

/// Run the full inference pipeline, returning the typed table.
pub fn infer_table(table: RawTable) -> Result<TypedTable> {
    let columns = table.column_count();
    let rows = table.row_count();
    debug!(columns, rows, "starting schema inference");

    let table = normalize(table);
    let typed: Vec<TypedColumn> = table.columns().iter().map(classify_column).collect();
    let table = optimize(TypedTable::new(typed)?);

    debug!(columns = table.column_count(), "schema inference complete");
    Ok(table)
}

/// Infer the schema of a raw table and assemble the reported result.
pub fn infer_schema(table: RawTable) -> Result<SchemaReport> {
    let table = infer_table(table)?;
    Ok(assemble::assemble(&table))
}
