//! Result ordering
//!
//! Matches are emitted in corpus declaration order. No field weighting or
//! frequency scoring is applied, and no result cap.

use super::Match;

/// Order matches by their position in the corpus
pub fn rank(mut matches: Vec<Match<'_>>) -> Vec<Match<'_>> {
    matches.sort_by_key(|m| m.position);
    matches
}
