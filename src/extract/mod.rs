//! Excerpt and highlight extraction for search results
//!
//! Provides:
//! - Excerpt: a bounded window of body text around the first hit
//! - Highlight: escape-then-mark emphasis of every query occurrence

pub mod excerpt;
pub mod highlight;

pub use excerpt::{excerpt, Excerpt, ELLIPSIS};
pub use highlight::{escape_markup, highlight, highlight_with};

use serde::{Deserialize, Serialize};

/// Excerpt window configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExcerptConfig {
    /// Chars kept on each side of the first hit
    pub margin: usize,
    /// Chars kept from the body head when the body has no hit
    pub fallback_chars: usize,
}

impl Default for ExcerptConfig {
    fn default() -> Self {
        Self {
            margin: 40,
            fallback_chars: 100,
        }
    }
}

impl ExcerptConfig {
    /// Upper bound on visible chars for a query of `query_len` chars
    pub fn max_visible_chars(&self, query_len: usize) -> usize {
        (2 * self.margin + query_len).max(self.fallback_chars)
    }
}

/// Emphasis markers wrapped around matched text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighlightMarkers {
    /// Inserted before each match
    pub open: String,
    /// Inserted after each match
    pub close: String,
}

impl Default for HighlightMarkers {
    fn default() -> Self {
        Self::new("<mark>", "</mark>")
    }
}

impl HighlightMarkers {
    /// Create a marker pair
    pub fn new(open: impl Into<String>, close: impl Into<String>) -> Self {
        Self {
            open: open.into(),
            close: close.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_excerpt_config_default() {
        let config = ExcerptConfig::default();
        assert_eq!(config.margin, 40);
        assert_eq!(config.fallback_chars, 100);
    }

    #[test]
    fn test_max_visible_chars() {
        let config = ExcerptConfig::default();
        assert_eq!(config.max_visible_chars(7), 100);
        assert_eq!(config.max_visible_chars(30), 110);
    }
}
