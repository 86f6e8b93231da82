//! Searcher implementation
//!
//! Runs normalize → match → rank → excerpt/highlight against a shared corpus.

use super::{find_matches, rank, Query, RankedResult};
use crate::config::SearchConfig;
use crate::extract::{excerpt, highlight_with};
use crate::index::Corpus;
use std::sync::Arc;

/// Pure search pipeline over a shared, read-only corpus
#[derive(Debug, Clone)]
pub struct Searcher {
    /// Document corpus
    corpus: Arc<Corpus>,
    /// Excerpt, marker and cap settings
    config: SearchConfig,
}

impl Searcher {
    /// Create a searcher with default settings
    pub fn new(corpus: Arc<Corpus>) -> Self {
        Self::with_config(corpus, SearchConfig::default())
    }

    /// Create a searcher with the given settings
    pub fn with_config(corpus: Arc<Corpus>, config: SearchConfig) -> Self {
        Self { corpus, config }
    }

    /// Search with a raw input string
    pub fn search_str(&self, raw: &str) -> Vec<RankedResult<'_>> {
        self.search(&Query::new(raw))
    }

    /// Search the corpus, returning every hit in corpus order
    ///
    /// Identical queries against the same corpus always produce identical
    /// results. Empty queries produce nothing.
    pub fn search(&self, query: &Query) -> Vec<RankedResult<'_>> {
        if query.is_empty() {
            return Vec::new();
        }

        let needle = query.normalized();
        let markers = &self.config.markers;

        let results: Vec<RankedResult<'_>> = rank(find_matches(query, &self.corpus))
            .into_iter()
            .map(|m| {
                let excerpt = excerpt(&m.document.body, needle, m.body_offset, &self.config.excerpt);
                RankedResult {
                    document: m.document,
                    fields: m.fields,
                    highlighted_title: highlight_with(m.document.title(), needle, markers),
                    highlighted_excerpt: excerpt.highlighted(needle, markers),
                    excerpt,
                }
            })
            .collect();

        tracing::debug!("Search for '{}' matched {} documents", needle, results.len());
        results
    }

    /// Get corpus reference
    pub fn corpus(&self) -> &Arc<Corpus> {
        &self.corpus
    }

    /// Get search settings
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }
}
