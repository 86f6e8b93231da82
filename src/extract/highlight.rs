//! Match highlighting
//!
//! Wraps every case-insensitive occurrence of the query in emphasis
//! markers. Text is escaped segment by segment and markers are inserted
//! afterwards, so markers are never escaped and escaped entities are never
//! split by a marker.

use super::HighlightMarkers;
use crate::search::QueryPattern;

/// Escape markup-sensitive characters
pub fn escape_markup(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Highlight `query` in `text` with the default `<mark>` markers
pub fn highlight(text: &str, query: &str) -> String {
    highlight_with(text, query, &HighlightMarkers::default())
}

/// Highlight `query` in `text` with custom markers
///
/// An empty query returns `text` unchanged. Matched text keeps its
/// original casing inside the markers.
pub fn highlight_with(text: &str, query: &str, markers: &HighlightMarkers) -> String {
    if query.is_empty() {
        return text.to_string();
    }

    let Some(pattern) = QueryPattern::new(query) else {
        return escape_markup(text);
    };

    let mut out = String::with_capacity(text.len() + 16);
    let mut last = 0;
    for range in pattern.find_iter(text) {
        out.push_str(&escape_markup(&text[last..range.start]));
        out.push_str(&markers.open);
        out.push_str(&escape_markup(&text[range.clone()]));
        out.push_str(&markers.close);
        last = range.end;
    }
    out.push_str(&escape_markup(&text[last..]));
    out
}
