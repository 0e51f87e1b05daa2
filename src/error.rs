//! Error type shared by the parser, the chunk extractor and the graph export.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for memit operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while turning documents into section trees, chunks or graphs.
#[derive(Error, Debug)]
pub enum Error {
    /// Text expected to open with a heading marker does not.
    #[error("malformed document: {0}")]
    MalformedDocument(String),

    /// A file or directory could not be opened or read.
    #[error("cannot read {}: {source}", path.display())]
    UnreadableSource {
        /// Path that failed to open or read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// The requested chunk kind has no extractor.
    #[error("unsupported chunk kind: {0}")]
    UnsupportedChunkKind(String),

    /// A section was looked up in a graph view that never assigned it an id.
    #[error("section {0} has no graph id")]
    MissingGraphId(usize),

    /// JSON encoding failed.
    #[error("serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl Error {
    #[must_use]
    /// Create a malformed document error.
    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedDocument(msg.into())
    }

    #[must_use]
    /// Wrap an I/O failure with the path it happened on.
    pub fn unreadable(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::UnreadableSource {
            path: path.into(),
            source,
        }
    }
}
