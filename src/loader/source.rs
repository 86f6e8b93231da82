//! Corpus source loading
//!
//! Reads documents from a `.json` page list, a `.jsonl` file, or a
//! directory tree containing either.

use super::{Document, JsonlLoader};
use crate::error::{CorpusError, Result};
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

/// Loads documents from files on disk
pub struct CorpusLoader;

impl CorpusLoader {
    /// Load documents from a file or directory
    ///
    /// Directories are walked recursively in sorted path order so the
    /// resulting corpus order is stable across runs.
    pub fn load_path<P: AsRef<Path>>(path: P) -> Result<Vec<Document>> {
        let path = path.as_ref();

        if path.is_dir() {
            let mut documents = Vec::new();
            for entry in WalkDir::new(path).sort_by_file_name() {
                let entry = entry.map_err(|e| CorpusError::Io {
                    path: e.path().map(Path::to_path_buf).unwrap_or_else(|| path.to_path_buf()),
                    source: e.into(),
                })?;
                if entry.file_type().is_file() && is_corpus_file(entry.path()) {
                    documents.extend(Self::load_file(entry.path())?);
                }
            }
            tracing::debug!("Loaded {} documents from {}", documents.len(), path.display());
            return Ok(documents);
        }

        if is_corpus_file(path) {
            return Self::load_file(path);
        }

        Err(CorpusError::UnsupportedSource(path.to_path_buf()))
    }

    /// Load a single `.json` or `.jsonl` file
    pub fn load_file(path: &Path) -> Result<Vec<Document>> {
        let content = fs::read_to_string(path).map_err(|source| CorpusError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        match extension(path).as_deref() {
            Some("jsonl") => JsonlLoader::load_from_string(&content),
            _ => Self::load_json_str(&content),
        }
    }

    /// Parse a JSON array of page records
    pub fn load_json_str(content: &str) -> Result<Vec<Document>> {
        Ok(serde_json::from_str(content)?)
    }
}

fn extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
}

fn is_corpus_file(path: &Path) -> bool {
    matches!(extension(path).as_deref(), Some("json") | Some("jsonl"))
}
