//! Ranking of match results

use std::cmp::Ordering;

use super::types::MatchResult;

/// Tier ascending, then score ascending
pub fn compare<R: ?Sized>(a: &MatchResult<'_, R>, b: &MatchResult<'_, R>) -> Ordering {
    a.classification().cmp_rank(&b.classification())
}

/// Sort results into display order
pub fn sort<R: ?Sized>(results: &mut [MatchResult<'_, R>]) {
    results.sort_by(compare);
}
