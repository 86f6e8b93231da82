//! Body excerpts
//!
//! Cuts a bounded window of body text around the first query hit.

use super::{highlight_with, ExcerptConfig, HighlightMarkers};
use crate::search::QueryPattern;
use serde::Serialize;
use std::fmt;

/// Marker placed where an excerpt was cut
pub const ELLIPSIS: &str = "...";

/// A window of body text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Excerpt {
    /// Visible text, without markers
    pub text: String,
    /// The window starts after the beginning of the body
    pub leading: bool,
    /// The window ends before the end of the body
    pub trailing: bool,
}

impl Excerpt {
    /// Number of visible chars
    pub fn visible_chars(&self) -> usize {
        self.text.chars().count()
    }

    /// Highlighted markup; cut markers are added outside the highlighting
    pub fn highlighted(&self, query: &str, markers: &HighlightMarkers) -> String {
        let mut out = String::new();
        if self.leading {
            out.push_str(ELLIPSIS);
        }
        out.push_str(&highlight_with(&self.text, query, markers));
        if self.trailing {
            out.push_str(ELLIPSIS);
        }
        out
    }
}

impl fmt::Display for Excerpt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.leading {
            f.write_str(ELLIPSIS)?;
        }
        f.write_str(&self.text)?;
        if self.trailing {
            f.write_str(ELLIPSIS)?;
        }
        Ok(())
    }
}

/// Excerpt `body` around the char `offset` of the first `query` hit
///
/// When `query` does not occur in `body` (title or keyword matches), the
/// head of the body is returned instead.
pub fn excerpt(body: &str, query: &str, offset: usize, config: &ExcerptConfig) -> Excerpt {
    let total = body.chars().count();
    let found = QueryPattern::new(query).is_some_and(|p| p.is_match(body));

    if !found {
        return Excerpt {
            text: body.chars().take(config.fallback_chars).collect(),
            leading: false,
            trailing: total > config.fallback_chars,
        };
    }

    let query_len = query.chars().count();
    let end = offset
        .saturating_add(query_len)
        .saturating_add(config.margin)
        .min(total);
    let start = offset.saturating_sub(config.margin).min(end);

    Excerpt {
        text: body.chars().skip(start).take(end - start).collect(),
        leading: start > 0,
        trailing: end < total,
    }
}
