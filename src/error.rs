//! Error types for loss-graph
//!
//! Every failure is fatal and unrecovered: errors carry enough context to be
//! actionable from a CI log and surface unmodified at the process boundary.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Loss-graph error types
#[derive(Error, Debug)]
pub enum Error {
    /// Log file does not exist
    #[error("log file {} does not exist", .path.display())]
    NotFound {
        /// Path that was checked
        path: PathBuf,
    },

    /// Input is structurally unusable (directory path, missing argument)
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A log line is not a valid JSON object
    #[error("malformed log line {line}: {message}")]
    Parse {
        /// 1-based line number in the log file
        line: usize,
        /// Parser diagnostic
        message: String,
    },

    /// No record carried a usable loss value
    #[error("loss data is empty")]
    EmptyData,

    /// A selected loss value is not a floating-point number
    #[error("loss value in record {record} is not a float (got {value})")]
    TypeMismatch {
        /// 0-based index of the offending record in the parsed sequence
        record: usize,
        /// Rendering of the offending JSON value
        value: String,
    },

    /// Upload to object storage failed
    #[error("upload failed: {0}")]
    Upload(String),

    /// Chart rendering failed
    #[error("render error: {0}")]
    Render(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
