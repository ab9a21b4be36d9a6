//! Error type definitions.
//!
//! This module defines all error types used throughout the application.

use std::io;
use std::path::PathBuf;

use log::SetLoggerError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// Error types for writing a KML document.
#[derive(Error, Debug)]
pub enum ExportError {
    /// The output file could not be created or opened for writing.
    ///
    /// Raised before any output is produced.
    #[error("Failed to open output file {}: {source}", .path.display())]
    Open {
        /// Destination that could not be opened
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// A write or flush failed part-way through the export.
    ///
    /// Nothing is rolled back; the output may be truncated.
    #[error("Failed to write KML output: {0}")]
    Io(#[from] io::Error),

    /// Document sections were written out of order.
    #[error("Invalid KML write sequence: {0}")]
    Sequence(&'static str),
}

/// Error types for database operations.
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// The database file does not exist.
    #[error("Database file not found: {}", .0.display())]
    MissingDatabase(PathBuf),

    /// A table or column name is not a plain SQL identifier.
    #[error("Invalid table or column name: {0:?}")]
    InvalidIdentifier(String),

    /// The table does not exist in the database.
    #[error("Table not found: {0:?}")]
    UnknownTable(String),

    /// A mapped column does not exist in the table.
    #[error("Column {column:?} not found in table {table:?}")]
    UnknownColumn {
        /// Table that was inspected
        table: String,
        /// Column name that matched nothing
        column: String,
    },

    /// SQL execution error.
    #[error("SQL error: {0}")]
    SqlError(#[from] sqlx::Error),
}
