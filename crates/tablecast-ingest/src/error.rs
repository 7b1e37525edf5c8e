//! Error types for file ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while decoding an input file.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Input file does not exist.
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// The file extension is not one of the supported formats.
    #[error("unsupported file type '{extension}'; expected csv, xls, or xlsx")]
    UnsupportedExtension { extension: String },

    /// The path carries no extension at all.
    #[error("cannot determine file type of {path}: no extension")]
    MissingExtension { path: PathBuf },

    /// Failed to read or parse a CSV file.
    #[error("failed to parse CSV {path}: {message}")]
    CsvParse { path: PathBuf, message: String },

    /// Failed to open or read a workbook.
    #[error("failed to read workbook {path}: {message}")]
    WorkbookRead { path: PathBuf, message: String },

    /// Workbook contains no worksheet to read.
    #[error("no worksheet found in {path}")]
    NoWorksheet { path: PathBuf },

    /// The decoded file produced no columns at all.
    #[error("file has no columns: {path}")]
    EmptyFile { path: PathBuf },

    /// The decoded columns violate a table invariant.
    #[error("invalid table in {path}: {source}")]
    InvalidTable {
        path: PathBuf,
        #[source]
        source: tablecast_model::ModelError,
    },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
