//! Property tests for the search pipeline
//!
//! Properties:
//! - A document is returned iff the query occurs in its title, body or a keyword
//! - Repeated searches return identical results
//! - Highlighting with an empty query is the identity
//! - Highlighting never alters unmatched text
//! - Excerpts never exceed the configured window
//! - Blank queries always leave a session idle

use proptest::prelude::*;
use sitesearch::config::SessionConfig;
use sitesearch::extract::{excerpt, highlight, ExcerptConfig};
use sitesearch::index::Corpus;
use sitesearch::loader::Document;
use sitesearch::search::{find_matches, Query, QueryPattern, Searcher};
use sitesearch::session::{MemorySurface, SearchSession, SessionState};
use std::sync::Arc;
use tokio::time::Instant;

// Includes chars whose lower-case form differs in length or depends on context
fn field() -> impl Strategy<Value = String> {
    "[a-cA-CİıΣσς ]{0,12}"
}

fn documents() -> impl Strategy<Value = Vec<Document>> {
    prop::collection::vec(
        (field(), field(), prop::collection::vec("[a-cA-CİΣς]{1,4}", 0..3)),
        0..8,
    )
    .prop_map(|records| {
        records
            .into_iter()
            .enumerate()
            .map(|(i, (title, body, keywords))| {
                Document::new(title, format!("/page/{}", i), body, keywords)
            })
            .collect()
    })
}

fn contains_folded(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

proptest! {
    #[test]
    fn prop_membership_matches_substring_rule(docs in documents(), raw in "[a-cA-CİıΣσς]{1,3}") {
        let corpus = Corpus::new(docs).unwrap();
        let query = Query::new(raw);
        let needle = query.normalized();

        let matched: Vec<&str> = find_matches(&query, &corpus)
            .iter()
            .map(|m| m.document.url())
            .collect();
        let expected: Vec<&str> = corpus
            .iter()
            .filter(|d| {
                contains_folded(&d.title, needle)
                    || contains_folded(&d.body, needle)
                    || d.keywords().iter().any(|k| contains_folded(k, needle))
            })
            .map(|d| d.url())
            .collect();

        prop_assert_eq!(matched, expected);
    }

    #[test]
    fn prop_search_is_idempotent(docs in documents(), raw in "[a-cA-CİΣ ]{0,4}") {
        let searcher = Searcher::new(Arc::new(Corpus::new(docs).unwrap()));
        prop_assert_eq!(searcher.search_str(&raw), searcher.search_str(&raw));
    }

    #[test]
    fn prop_highlight_empty_query_is_identity(text in ".{0,40}") {
        prop_assert_eq!(highlight(&text, ""), text);
    }

    #[test]
    fn prop_highlight_preserves_unmatched_text(text in "[a-z ]{0,40}", query in "[a-z]{1,3}") {
        let marked = highlight(&text, &query);
        let stripped = marked.replace("<mark>", "").replace("</mark>", "");
        prop_assert_eq!(stripped, text);
    }

    #[test]
    fn prop_excerpt_is_bounded(
        body in "[a-z ]{0,300}",
        query in "[a-z]{1,5}",
        margin in 1usize..60,
        fallback_chars in 1usize..150,
    ) {
        let config = ExcerptConfig { margin, fallback_chars };
        let offset = QueryPattern::new(&query)
            .and_then(|p| p.find(&body))
            .map(|r| body[..r.start].chars().count())
            .unwrap_or(0);

        let ex = excerpt(&body, &query, offset, &config);

        prop_assert!(ex.visible_chars() <= config.max_visible_chars(query.chars().count()));
        prop_assert_eq!(ex.leading, offset > margin && body.contains(query.as_str()));
    }

    #[test]
    fn prop_blank_query_leaves_session_idle(docs in documents(), blank in "[ \t]{0,5}") {
        let searcher = Searcher::new(Arc::new(Corpus::new(docs).unwrap()));
        let mut session = SearchSession::new("desktop", searcher, SessionConfig::default(), MemorySurface::new());

        session.input(blank, Instant::now());
        session.submit();

        prop_assert_eq!(session.state(), SessionState::Idle);
        prop_assert!(!session.surface().is_visible());
        prop_assert!(session.surface().panel().is_none());
    }
}
