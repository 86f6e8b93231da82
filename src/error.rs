//! Corpus loading errors
//!
//! Searching itself never fails; only building a corpus from external
//! sources can.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading or assembling a corpus
#[derive(Debug, Error)]
pub enum CorpusError {
    /// Reading a corpus source failed
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Reading a JSONL stream failed
    #[error("Failed to read line {line}: {source}")]
    ReadLine {
        line: usize,
        #[source]
        source: std::io::Error,
    },

    /// A JSON corpus could not be parsed
    #[error("Failed to parse corpus JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A JSONL record could not be parsed
    #[error("Failed to parse JSON at line {line}: {source}")]
    JsonLine {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    /// Two documents share a URL
    #[error("Duplicate document url: {0}")]
    DuplicateUrl(String),

    /// A document has an empty URL
    #[error("Document '{0}' has an empty url")]
    EmptyUrl(String),

    /// A path is neither a corpus file nor a directory
    #[error("Unsupported corpus source: {0}")]
    UnsupportedSource(PathBuf),
}

pub type Result<T> = std::result::Result<T, CorpusError>;
