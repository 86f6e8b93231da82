//! Results panel rendering
//!
//! Translates ranked results into the rows and messages a host surface
//! displays. Highlighted fields are already escaped; everything else is
//! escaped here.

use crate::extract::escape_markup;
use crate::search::{Query, RankedResult};
use serde::Serialize;

/// One clickable result entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedRow {
    /// Navigation target
    pub url: String,
    /// Escaped, highlighted title
    pub title_html: String,
    /// Escaped, highlighted excerpt
    pub excerpt_html: String,
}

/// Contents of a visible results panel
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedPanel {
    /// Query text as typed, trimmed
    pub query: String,
    /// Number of matches before any row cap
    pub total: usize,
    /// Rendered rows, possibly capped
    pub rows: Vec<RenderedRow>,
}

/// Build the panel for `results` of `query`, keeping at most `max_results` rows
pub fn render_panel(
    results: &[RankedResult<'_>],
    query: &Query,
    max_results: Option<usize>,
) -> RenderedPanel {
    let limit = max_results.unwrap_or(usize::MAX);
    RenderedPanel {
        query: query.raw().trim().to_string(),
        total: results.len(),
        rows: results
            .iter()
            .take(limit)
            .map(|r| RenderedRow {
                url: r.url().to_string(),
                title_html: r.highlighted_title.clone(),
                excerpt_html: r.highlighted_excerpt.clone(),
            })
            .collect(),
    }
}

impl RenderedPanel {
    /// Whether the panel shows the no-results message
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Result-count summary line
    pub fn summary(&self) -> String {
        let noun = if self.total == 1 { "result" } else { "results" };
        format!("Found {} {} for \"{}\"", self.total, noun, self.query)
    }

    /// Message shown when nothing matched
    pub fn no_results_message(&self) -> String {
        format!("No results found for \"{}\"", self.query)
    }

    /// Row for a URL, if rendered
    pub fn row(&self, url: &str) -> Option<&RenderedRow> {
        self.rows.iter().find(|r| r.url == url)
    }

    /// Markup handed to the host page
    pub fn to_html(&self) -> String {
        if self.is_empty() {
            return format!(
                "<div class=\"search-no-results\">{}</div>",
                escape_markup(&self.no_results_message())
            );
        }

        let mut html = format!(
            "<div class=\"search-summary\">{}</div>",
            escape_markup(&self.summary())
        );
        for row in &self.rows {
            html.push_str(&format!(
                "\n<a class=\"search-result\" href=\"{}\"><div class=\"search-result-title\">{}</div><div class=\"search-result-excerpt\">{}</div></a>",
                escape_markup(&row.url),
                row.title_html,
                row.excerpt_html
            ));
        }
        html
    }
}
