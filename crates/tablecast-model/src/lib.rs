//! Data model for tablecast.
//!
//! Two table representations flow through the system: [`RawTable`], the
//! decoded-but-untyped form a file reader produces, and [`TypedTable`], the
//! schema-inferred form the classifier produces. Both are ordered sequences
//! of row-aligned named columns; the missing marker is `RawCell::Missing`
//! on the way in and `None` inside typed storage on the way out.

pub mod cell;
pub mod column;
pub mod error;
pub mod table;
pub mod types;

pub use cell::{RawCell, RawKind};
pub use column::{ColumnData, TypedColumn, TypedTable};
pub use error::{ModelError, Result};
pub use table::{RawColumn, RawTable};
pub use types::{FloatWidth, IntWidth, SemanticType};
