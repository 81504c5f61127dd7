//! Error types for valvespec library.
//!
//! Errors only arise at the I/O edges (reading table dumps, serializing
//! results). Table and row rejections inside the extraction pipeline are
//! not errors; see [`crate::parser::TableRejection`] and
//! [`crate::parser::RowRejection`].

use std::io;
use thiserror::Error;

/// Result type alias for valvespec operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while loading input or rendering output.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input is not a recognizable table dump.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Error during rendering (JSON).
    #[error("Rendering error: {0}")]
    Render(String),

    /// Invalid page range specification.
    #[error("Invalid page range: {0}")]
    InvalidPageRange(String),

    /// Invalid keyword configuration.
    #[error("Invalid keyword configuration: {0}")]
    InvalidKeywords(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        if err.is_io() {
            Error::Io(err.into())
        } else {
            Error::InvalidInput(err.to_string())
        }
    }
}
