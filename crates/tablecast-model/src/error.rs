use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("table has no columns")]
    EmptyTable,
    #[error("column '{column}' has {actual} rows, expected {expected}")]
    MisalignedColumns {
        column: String,
        expected: usize,
        actual: usize,
    },
    #[error("duplicate column name '{column}'")]
    DuplicateColumn { column: String },
}

pub type Result<T> = std::result::Result<T, ModelError>;
