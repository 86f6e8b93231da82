//! Query normalization and literal matching
//!
//! Queries are matched as literal, case-insensitive substrings. The same
//! compiled pattern drives matching, excerpting and highlighting so that
//! what is highlighted is exactly what matched.

use regex::{Regex, RegexBuilder};
use serde::Serialize;
use std::ops::Range;

/// Compiled pattern size cap; larger queries match nothing
const PATTERN_SIZE_LIMIT: usize = 1 << 22;

/// Trim surrounding whitespace and lower-case
///
/// Total over all inputs. An empty result means "no query".
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// A user query: raw input plus its normalized form
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Query {
    raw: String,
    normalized: String,
}

impl Query {
    /// Create a query from raw input
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let normalized = normalize(&raw);
        Self { raw, normalized }
    }

    /// Input as typed
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Trimmed, lower-cased form used for matching
    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    /// Whether this query should hide the results panel
    pub fn is_empty(&self) -> bool {
        self.normalized.is_empty()
    }

    /// Compile the matching pattern, `None` for an empty query
    pub fn pattern(&self) -> Option<QueryPattern> {
        QueryPattern::new(&self.normalized)
    }
}

/// Case-insensitive literal substring pattern
///
/// Text is folded with the same lower-casing as [`normalize`] before
/// matching, so a normalized query matches exactly where it is a substring
/// of the lower-cased text. Reported ranges are byte ranges of the original
/// text.
#[derive(Debug, Clone)]
pub struct QueryPattern {
    regex: Regex,
}

impl QueryPattern {
    /// Compile `needle` as a literal, `None` when empty or too large
    pub fn new(needle: &str) -> Option<Self> {
        if needle.is_empty() {
            return None;
        }

        match RegexBuilder::new(&regex::escape(&needle.to_lowercase()))
            .size_limit(PATTERN_SIZE_LIMIT)
            .build()
        {
            Ok(regex) => Some(Self { regex }),
            Err(e) => {
                tracing::warn!("Query pattern rejected ({} bytes): {}", needle.len(), e);
                None
            }
        }
    }

    /// Whether `text` contains the needle
    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(&text.to_lowercase())
    }

    /// Byte range of the first occurrence
    pub fn find(&self, text: &str) -> Option<Range<usize>> {
        let folded = Folded::new(text);
        self.regex
            .find(&folded.text)
            .map(|m| folded.to_source(m.range()))
    }

    /// Byte ranges of every non-overlapping occurrence, left to right
    ///
    /// Matches that fold back onto a char already covered by the previous
    /// match are skipped.
    pub fn find_iter(&self, text: &str) -> std::vec::IntoIter<Range<usize>> {
        let folded = Folded::new(text);
        let mut ranges: Vec<Range<usize>> = Vec::new();
        let mut covered = 0;
        for m in self.regex.find_iter(&folded.text) {
            let range = folded.to_source(m.range());
            if range.start >= covered {
                covered = range.end;
                ranges.push(range);
            }
        }
        ranges.into_iter()
    }
}

/// Lower-cased text with a map back to source byte offsets
struct Folded {
    text: String,
    /// Source char span of each folded byte; empty when offsets are unchanged
    source: Vec<Range<usize>>,
}

impl Folded {
    fn new(text: &str) -> Self {
        if text.is_ascii() {
            return Self {
                text: text.to_ascii_lowercase(),
                source: Vec::new(),
            };
        }

        // Context-sensitive sigma folding keeps the byte length, so per-char
        // lengths line up with `str::to_lowercase`.
        let mut source = Vec::with_capacity(text.len());
        for (start, c) in text.char_indices() {
            let span = start..start + c.len_utf8();
            let folded_len: usize = c.to_lowercase().map(char::len_utf8).sum();
            source.extend(std::iter::repeat(span).take(folded_len));
        }

        let text = text.to_lowercase();
        debug_assert_eq!(text.len(), source.len());
        Self { text, source }
    }

    /// Widen a folded range to the source chars it came from
    fn to_source(&self, range: Range<usize>) -> Range<usize> {
        if self.source.is_empty() || range.is_empty() {
            return range;
        }
        self.source[range.start].start..self.source[range.end - 1].end
    }
}
