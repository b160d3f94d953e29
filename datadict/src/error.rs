//! Error types for table decoding.
//!
//! Errors are layered the same way the decode runs:
//!
//! - [`StructuralError`] - the text is not a well-formed table
//! - [`FieldError`] - a typed read failed (latched by the cursor)
//! - [`LoadError`] - top-level failure of a record load
//! - [`ConfigError`] - invalid environment configuration
//!
//! Error conversion is automatic via `From` implementations,
//! allowing `?` to work across error boundaries.

use std::path::PathBuf;

use thiserror::Error;

use crate::cursor::CursorState;

// =============================================================================
// Structural Errors
// =============================================================================

/// The input could not be split into a header and equally wide rows.
#[derive(Debug, Error)]
pub enum StructuralError {
    /// Input has no header line.
    #[error("table has no header row")]
    MissingHeader,

    /// A data row is wider or narrower than the header.
    #[error("row {row} has {found} columns, header has {expected}")]
    ColumnCount {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// Bytes could not be decoded to text.
    #[error("failed to decode table text: {0}")]
    Encoding(String),

    /// Tokenizer failure.
    #[error("failed to tokenize table: {0}")]
    Csv(#[from] csv::Error),
}

// =============================================================================
// Field Errors
// =============================================================================

/// A failed typed read. The cursor keeps the first one it sees.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    /// The mapper asked for a column the header does not have.
    #[error("missing column '{column}'")]
    MissingColumn { column: String },

    /// A cell could not be parsed as the requested type.
    #[error("row {row}, column '{column}' (value '{value}'): {message}")]
    Decode {
        row: usize,
        column: String,
        value: String,
        message: String,
    },

    /// A read happened while the cursor was not positioned on a row.
    #[error("read of column '{column}' while cursor is {state}")]
    State { column: String, state: CursorState },
}

// =============================================================================
// Load Errors (top-level)
// =============================================================================

/// Top-level failure of a record load.
///
/// Any variant means zero records were produced.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The table itself is malformed.
    #[error("structural error: {0}")]
    Structural(#[from] StructuralError),

    /// A field read failed somewhere in the pass.
    #[error("field error: {0}")]
    Field(#[from] FieldError),

    /// The header lacks columns the record schema declares.
    #[error("{record} table is missing columns: {}", .columns.join(", "))]
    MissingColumns {
        record: &'static str,
        columns: Vec<String>,
    },

    /// The table file could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

// =============================================================================
// Config Errors
// =============================================================================

/// Invalid configuration values.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A variable is set but empty.
    #[error("environment variable {0} is set but empty")]
    EmptyVar(&'static str),

    /// A variable holds non-unicode data.
    #[error("environment variable {0} is not valid unicode")]
    NotUnicode(&'static str),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for tokenizing.
pub type TableResult<T> = Result<T, StructuralError>;

/// Result type for record loads.
pub type LoadResult<T> = Result<T, LoadError>;
