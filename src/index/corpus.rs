//! Document corpus
//!
//! The immutable, ordered set of searchable pages. A corpus is built once
//! and then shared read-only (behind an `Arc`) by every search session.

use crate::error::{CorpusError, Result};
use crate::loader::{CorpusLoader, Document};
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

/// Page list compiled into the binary
const BUILTIN_CORPUS: &str = include_str!("../../data/site_corpus.json");

/// Ordered, read-only collection of documents keyed by URL
#[derive(Debug, Clone)]
pub struct Corpus {
    /// Documents in declaration order
    documents: Vec<Document>,
    /// URL to position in `documents`
    by_url: HashMap<String, usize>,
}

impl Corpus {
    /// Build a corpus, rejecting empty or duplicate URLs
    pub fn new(mut documents: Vec<Document>) -> Result<Self> {
        let mut by_url = HashMap::with_capacity(documents.len());

        for (position, doc) in documents.iter_mut().enumerate() {
            if doc.url.trim().is_empty() {
                return Err(CorpusError::EmptyUrl(doc.title.clone()));
            }
            if by_url.insert(doc.url.clone(), position).is_some() {
                return Err(CorpusError::DuplicateUrl(doc.url.clone()));
            }
            doc.dedup_keywords();
        }

        tracing::info!("Corpus loaded with {} documents", documents.len());
        Ok(Self { documents, by_url })
    }

    /// Build a shared corpus
    pub fn shared(documents: Vec<Document>) -> Result<Arc<Self>> {
        Self::new(documents).map(Arc::new)
    }

    /// Parse a JSON array of page records
    pub fn from_json_str(content: &str) -> Result<Self> {
        Self::new(CorpusLoader::load_json_str(content)?)
    }

    /// Load from a file or directory
    pub fn load_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::new(CorpusLoader::load_path(path)?)
    }

    /// The site page list embedded at build time
    pub fn builtin() -> Result<Self> {
        Self::from_json_str(BUILTIN_CORPUS)
    }

    /// Get a document by URL
    pub fn get(&self, url: &str) -> Option<&Document> {
        self.by_url.get(url).map(|&i| &self.documents[i])
    }

    /// Position of a document in declaration order
    pub fn position(&self, url: &str) -> Option<usize> {
        self.by_url.get(url).copied()
    }

    /// Check if a document exists
    pub fn contains(&self, url: &str) -> bool {
        self.by_url.contains_key(url)
    }

    /// All documents in declaration order
    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    /// Iterate documents in declaration order
    pub fn iter(&self) -> std::slice::Iter<'_, Document> {
        self.documents.iter()
    }

    /// Get all unique keywords, sorted
    pub fn all_keywords(&self) -> Vec<String> {
        let mut keywords: Vec<String> = self
            .documents
            .iter()
            .flat_map(|doc| doc.keywords().iter().cloned())
            .collect();
        keywords.sort();
        keywords.dedup();
        keywords
    }

    /// Get document count
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Check if corpus is empty
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

impl<'a> IntoIterator for &'a Corpus {
    type Item = &'a Document;
    type IntoIter = std::slice::Iter<'a, Document>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
