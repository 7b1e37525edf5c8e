//! Raw tables: ordered, row-aligned columns of decoded cells.

use crate::cell::{RawCell, RawKind};
use crate::error::{ModelError, Result};

/// A named column of decoded cells plus its decode-time kind tag.
#[derive(Debug, Clone)]
pub struct RawColumn {
    pub name: String,
    pub kind: RawKind,
    pub cells: Vec<RawCell>,
}

impl RawColumn {
    /// Build a column, deriving the kind tag from the cells.
    pub fn new(name: impl Into<String>, cells: Vec<RawCell>) -> Self {
        let kind = RawKind::detect(&cells);
        Self {
            name: name.into(),
            kind,
            cells,
        }
    }

    /// Build a column with an explicit kind tag.
    pub fn with_kind(name: impl Into<String>, kind: RawKind, cells: Vec<RawCell>) -> Self {
        Self {
            name: name.into(),
            kind,
            cells,
        }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// An ordered sequence of row-aligned columns.
///
/// Invariants, checked at construction: at least one column, all columns the
/// same length, no duplicate column names. Column order is preserved
/// end-to-end through the pipeline.
#[derive(Debug, Clone)]
pub struct RawTable {
    columns: Vec<RawColumn>,
}

impl RawTable {
    pub fn new(columns: Vec<RawColumn>) -> Result<Self> {
        let Some(first) = columns.first() else {
            return Err(ModelError::EmptyTable);
        };
        let expected = first.len();
        for column in &columns {
            if column.len() != expected {
                return Err(ModelError::MisalignedColumns {
                    column: column.name.clone(),
                    expected,
                    actual: column.len(),
                });
            }
        }
        for (i, column) in columns.iter().enumerate() {
            if columns[..i].iter().any(|c| c.name == column.name) {
                return Err(ModelError::DuplicateColumn {
                    column: column.name.clone(),
                });
            }
        }
        Ok(Self { columns })
    }

    pub fn columns(&self) -> &[RawColumn] {
        &self.columns
    }

    pub fn into_columns(self) -> Vec<RawColumn> {
        self.columns
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn row_count(&self) -> usize {
        self.columns.first().map_or(0, RawColumn::len)
    }

    /// Apply a transform to every column. The transform must preserve each
    /// column's length; the table's alignment invariant is not re-checked.
    pub fn map_columns(mut self, f: impl FnMut(RawColumn) -> RawColumn) -> Self {
        self.columns = self.columns.into_iter().map(f).collect();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(values: &[&str]) -> Vec<RawCell> {
        values
            .iter()
            .map(|v| RawCell::Text((*v).to_string()))
            .collect()
    }

    #[test]
    fn new_accepts_aligned_columns() {
        let table = RawTable::new(vec![
            RawColumn::new("a", text(&["1", "2"])),
            RawColumn::new("b", text(&["x", "y"])),
        ])
        .unwrap();
        assert_eq!(table.column_count(), 2);
        assert_eq!(table.row_count(), 2);
    }

    #[test]
    fn new_rejects_empty_table() {
        assert!(matches!(
            RawTable::new(Vec::new()),
            Err(ModelError::EmptyTable)
        ));
    }

    #[test]
    fn new_rejects_misaligned_columns() {
        let err = RawTable::new(vec![
            RawColumn::new("a", text(&["1", "2"])),
            RawColumn::new("b", text(&["x"])),
        ])
        .unwrap_err();
        assert!(matches!(err, ModelError::MisalignedColumns { .. }));
    }

    #[test]
    fn new_rejects_duplicate_names() {
        let err = RawTable::new(vec![
            RawColumn::new("a", text(&["1"])),
            RawColumn::new("a", text(&["2"])),
        ])
        .unwrap_err();
        assert!(matches!(err, ModelError::DuplicateColumn { .. }));
    }

    #[test]
    fn column_order_is_preserved() {
        let table = RawTable::new(vec![
            RawColumn::new("z", text(&["1"])),
            RawColumn::new("a", text(&["2"])),
        ])
        .unwrap();
        let names: Vec<&str> = table.columns().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["z", "a"]);
    }
}
