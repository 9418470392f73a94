//! Error types for document I/O and mutation.

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by [`Document`](super::Document) operations.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// The source file could not be read.
    #[error("failed to read file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A query or removal was called with arguments it cannot act on.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// `write` was called without a path on a document not loaded from a file.
    #[error("a target path is required when the document was not loaded from a file")]
    MissingPath,
}
