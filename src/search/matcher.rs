//! Corpus matcher
//!
//! Scans every document for the query in title, body and keywords.
//! Matching is plain substring matching; there is no tokenization and no
//! fuzzy tolerance.

use super::{Match, MatchedFields, Query};
use crate::index::Corpus;

/// Find every document containing the query in any field
///
/// Each document appears at most once. Empty queries match nothing.
pub fn find_matches<'c>(query: &Query, corpus: &'c Corpus) -> Vec<Match<'c>> {
    let Some(pattern) = query.pattern() else {
        return Vec::new();
    };

    corpus
        .iter()
        .enumerate()
        .filter_map(|(position, doc)| {
            let body_hit = pattern.find(&doc.body);
            let fields = MatchedFields {
                title: pattern.is_match(&doc.title),
                body: body_hit.is_some(),
                keyword: doc.keywords().iter().any(|k| pattern.is_match(k)),
            };

            if !fields.any() {
                return None;
            }

            let body_offset = body_hit
                .map(|range| doc.body[..range.start].chars().count())
                .unwrap_or(0);

            Some(Match {
                position,
                document: doc,
                fields,
                body_offset,
            })
        })
        .collect()
}
