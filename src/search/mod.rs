//! Search module
//!
//! This module provides the match / rank / excerpt pipeline and its result types.

mod matcher;
mod query;
mod ranker;
mod searcher;

pub use matcher::find_matches;
pub use query::{normalize, Query, QueryPattern};
pub use ranker::rank;
pub use searcher::Searcher;

use crate::extract::Excerpt;
use crate::loader::Document;
use serde::Serialize;

/// Fields in which a query was found
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MatchedFields {
    pub title: bool,
    pub body: bool,
    pub keyword: bool,
}

impl MatchedFields {
    /// At least one field matched
    pub fn any(&self) -> bool {
        self.title || self.body || self.keyword
    }
}

/// A document that contains the query
#[derive(Debug, Clone, PartialEq)]
pub struct Match<'c> {
    /// Position in corpus declaration order
    pub position: usize,
    /// Matched document
    pub document: &'c Document,
    /// Which fields matched
    pub fields: MatchedFields,
    /// Char offset of the first body hit, 0 without one
    pub body_offset: usize,
}

/// A ranked match ready for display
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedResult<'c> {
    /// Matched document
    pub document: &'c Document,
    /// Which fields matched
    pub fields: MatchedFields,
    /// Window of body text around the first hit
    pub excerpt: Excerpt,
    /// Escaped title with emphasis markers
    pub highlighted_title: String,
    /// Escaped excerpt (with ellipsis markers) with emphasis markers
    pub highlighted_excerpt: String,
}

impl RankedResult<'_> {
    /// Target URL of the result
    pub fn url(&self) -> &str {
        self.document.url()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matched_fields_any() {
        assert!(!MatchedFields::default().any());
        assert!(MatchedFields {
            keyword: true,
            ..Default::default()
        }
        .any());
    }
}
