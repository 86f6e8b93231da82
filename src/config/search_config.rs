//! Search configuration structures
//!
//! Defines the excerpt, highlight and rendering options for the search pipeline.

use crate::extract::{ExcerptConfig, HighlightMarkers};
use serde::{Deserialize, Serialize};

/// Search configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Excerpt window settings
    pub excerpt: ExcerptConfig,
    /// Emphasis markers for highlighted matches
    pub markers: HighlightMarkers,
    /// Maximum rows rendered per panel (None renders all)
    pub max_results: Option<usize>,
}

impl SearchConfig {
    /// Create a new search configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the chars kept around the first hit
    pub fn with_excerpt_margin(mut self, margin: usize) -> Self {
        self.excerpt.margin = margin;
        self
    }

    /// Set the chars kept from the body head when the body has no hit
    pub fn with_fallback_chars(mut self, chars: usize) -> Self {
        self.excerpt.fallback_chars = chars;
        self
    }

    /// Set the emphasis markers
    pub fn with_markers(mut self, markers: HighlightMarkers) -> Self {
        self.markers = markers;
        self
    }

    /// Set the rendered row cap
    pub fn with_max_results(mut self, max_results: Option<usize>) -> Self {
        self.max_results = max_results;
        self
    }
}
