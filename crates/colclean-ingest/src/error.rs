//! Error types for CSV ingestion.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading a delimited file.
#[derive(Debug, Error)]
pub enum IngestError {
    /// The file is missing or unreadable.
    #[error("read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// The content is not parseable as delimited UTF-8 text.
    #[error("parse {}: {source}", .path.display())]
    Format {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

impl IngestError {
    /// Sort a CSV-layer failure into the I/O vs malformed-content taxonomy.
    pub(crate) fn classify(path: &std::path::Path, source: csv::Error) -> Self {
        let path = path.to_path_buf();
        if source.is_io_error() {
            Self::Io { path, source }
        } else {
            Self::Format { path, source }
        }
    }
}

/// Result type for ingest operations.
pub type Result<T> = std::result::Result<T, IngestError>;
