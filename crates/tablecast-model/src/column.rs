//! Typed columns: the output of classification.
//!
//! Every storage variant is nullable; `None` is the missing marker. The
//! declared width on integer and float variants is the reported storage
//! width, which the optimizer may narrow in place.

use chrono::NaiveDateTime;

use crate::error::{ModelError, Result};
use crate::types::{FloatWidth, IntWidth, SemanticType};

/// Typed, nullable storage for one column.
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnData {
    Int(IntWidth, Vec<Option<i64>>),
    Float(FloatWidth, Vec<Option<f64>>),
    Bool(Vec<Option<bool>>),
    Timestamp(Vec<Option<NaiveDateTime>>),
    /// A finite label set plus a per-row back-reference into it.
    Category {
        labels: Vec<String>,
        codes: Vec<Option<u32>>,
    },
    Text(Vec<Option<String>>),
}

impl ColumnData {
    pub fn len(&self) -> usize {
        match self {
            Self::Int(_, v) => v.len(),
            Self::Float(_, v) => v.len(),
            Self::Bool(v) => v.len(),
            Self::Timestamp(v) => v.len(),
            Self::Category { codes, .. } => codes.len(),
            Self::Text(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn semantic_type(&self) -> SemanticType {
        match self {
            Self::Int(width, _) => SemanticType::Integer(*width),
            Self::Float(width, _) => SemanticType::Float(*width),
            Self::Bool(_) => SemanticType::Boolean,
            Self::Timestamp(_) => SemanticType::Timestamp,
            Self::Category { .. } => SemanticType::Category,
            Self::Text(_) => SemanticType::Text,
        }
    }

    /// Whether the value at `row` is the missing marker.
    pub fn is_missing(&self, row: usize) -> bool {
        match self {
            Self::Int(_, v) => v.get(row).is_none_or(Option::is_none),
            Self::Float(_, v) => v.get(row).is_none_or(Option::is_none),
            Self::Bool(v) => v.get(row).is_none_or(Option::is_none),
            Self::Timestamp(v) => v.get(row).is_none_or(Option::is_none),
            Self::Category { codes, .. } => codes.get(row).is_none_or(Option::is_none),
            Self::Text(v) => v.get(row).is_none_or(Option::is_none),
        }
    }

    /// Count of non-missing values.
    pub fn present_count(&self) -> usize {
        match self {
            Self::Int(_, v) => v.iter().filter(|c| c.is_some()).count(),
            Self::Float(_, v) => v.iter().filter(|c| c.is_some()).count(),
            Self::Bool(v) => v.iter().filter(|c| c.is_some()).count(),
            Self::Timestamp(v) => v.iter().filter(|c| c.is_some()).count(),
            Self::Category { codes, .. } => codes.iter().filter(|c| c.is_some()).count(),
            Self::Text(v) => v.iter().filter(|c| c.is_some()).count(),
        }
    }

    /// Resolve the label behind a category code, if the row has one.
    pub fn category_label(&self, row: usize) -> Option<&str> {
        match self {
            Self::Category { labels, codes } => {
                let code = (*codes.get(row)?)?;
                labels.get(code as usize).map(String::as_str)
            }
            _ => None,
        }
    }
}

/// A classified column: name plus typed storage.
#[derive(Debug, Clone)]
pub struct TypedColumn {
    pub name: String,
    pub data: ColumnData,
}

impl TypedColumn {
    pub fn new(name: impl Into<String>, data: ColumnData) -> Self {
        Self {
            name: name.into(),
            data,
        }
    }

    pub fn semantic_type(&self) -> SemanticType {
        self.data.semantic_type()
    }
}

/// A fully classified table, row-aligned like [`crate::RawTable`].
#[derive(Debug, Clone)]
pub struct TypedTable {
    columns: Vec<TypedColumn>,
}

impl TypedTable {
    pub fn new(columns: Vec<TypedColumn>) -> Result<Self> {
        let Some(first) = columns.first() else {
            return Err(ModelError::EmptyTable);
        };
        let expected = first.data.len();
        for column in &columns {
            if column.data.len() != expected {
                return Err(ModelError::MisalignedColumns {
                    column: column.name.clone(),
                    expected,
                    actual: column.data.len(),
                });
            }
        }
        Ok(Self { columns })
    }

    pub fn columns(&self) -> &[TypedColumn] {
        &self.columns
    }

    pub fn into_columns(self) -> Vec<TypedColumn> {
        self.columns
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn row_count(&self) -> usize {
        self.columns.first().map_or(0, |c| c.data.len())
    }

    /// Apply a transform to every column. The transform must preserve each
    /// column's length; the table's alignment invariant is not re-checked.
    pub fn map_columns(mut self, f: impl FnMut(TypedColumn) -> TypedColumn) -> Self {
        self.columns = self.columns.into_iter().map(f).collect();
        self
    }
}
