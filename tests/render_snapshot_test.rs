//! Rendered panel snapshots
//!
//! Pins the exact markup handed to host pages.

use sitesearch::index::Corpus;
use sitesearch::loader::Document;
use sitesearch::search::{Query, Searcher};
use sitesearch::session::render_panel;

fn searcher() -> Searcher {
    Searcher::new(
        Corpus::shared(vec![
            Document::new(
                "Privacy Policy",
                "/privacy",
                "How we protect your privacy and handle your data.",
                ["privacy", "GDPR"],
            ),
            Document::new(
                "Trust Network",
                "/docs/trust",
                "Operators vouch for each other through signed endorsements. The trust network limits which operators may propose new rounds.",
                ["trust", "endorsement"],
            ),
        ])
        .unwrap(),
    )
}

#[test]
fn test_single_result_panel_markup() {
    let searcher = searcher();
    let query = Query::new("privacy");
    let panel = render_panel(&searcher.search(&query), &query, None);

    insta::assert_snapshot!(panel.to_html(), @r#"
<div class="search-summary">Found 1 result for &quot;privacy&quot;</div>
<a class="search-result" href="/privacy"><div class="search-result-title"><mark>Privacy</mark> Policy</div><div class="search-result-excerpt">How we protect your <mark>privacy</mark> and handle your data.</div></a>
"#);
}

#[test]
fn test_truncated_excerpt_markup() {
    let searcher = searcher();
    let results = searcher.search_str("network");

    assert_eq!(results.len(), 1);
    insta::assert_snapshot!(results[0].highlighted_title, @"Trust <mark>Network</mark>");
    insta::assert_snapshot!(
        results[0].highlighted_excerpt,
        @"... through signed endorsements. The trust <mark>network</mark> limits which operators may propose new ..."
    );
}

#[test]
fn test_no_results_markup() {
    let query = Query::new("zzz-not-found");
    let panel = render_panel(&[], &query, None);

    insta::assert_snapshot!(
        panel.to_html(),
        @r#"<div class="search-no-results">No results found for &quot;zzz-not-found&quot;</div>"#
    );
}
