//! JSONL document loader
//!
//! Provides functionality to load documents from JSONL format (one JSON object per line).
//! This is used for stdin input and generated page lists.

use super::Document;
use crate::error::{CorpusError, Result};
use std::io::{BufRead, BufReader, Read};

/// JSONL loader for reading documents from a reader
pub struct JsonlLoader;

impl JsonlLoader {
    /// Load documents from a reader (e.g., stdin)
    ///
    /// Each line should be a valid JSON representation of a Document.
    /// Empty lines and lines starting with # are skipped.
    pub fn load_from_reader<R: Read>(reader: R) -> Result<Vec<Document>> {
        let buf_reader = BufReader::new(reader);
        let mut documents = Vec::new();

        for (idx, line_result) in buf_reader.lines().enumerate() {
            let line_number = idx + 1;
            let line = line_result.map_err(|source| CorpusError::ReadLine {
                line: line_number,
                source,
            })?;

            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            let doc: Document =
                serde_json::from_str(trimmed).map_err(|source| CorpusError::JsonLine {
                    line: line_number,
                    source,
                })?;

            documents.push(doc);
        }

        Ok(documents)
    }

    /// Load documents from a string
    pub fn load_from_string(content: &str) -> Result<Vec<Document>> {
        Self::load_from_reader(content.as_bytes())
    }
}
