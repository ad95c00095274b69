//! Error types for CSV output.
//!
//! The writer can only fail on I/O: the destination cannot be created, a
//! record fails to write, or buffered output fails to reach disk.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while writing a delimited file.
#[derive(Debug, Error)]
pub enum OutputError {
    /// Creating the destination or writing a record failed.
    #[error("write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Flushing buffered output to disk failed.
    #[error("flush {}: {source}", .path.display())]
    Flush {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for output operations.
pub type Result<T> = std::result::Result<T, OutputError>;
