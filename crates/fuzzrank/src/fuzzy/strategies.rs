//! Similarity classifier
//!
//! Strategies run in a fixed order and the first one that accepts wins.
//! Both inputs are expected lowercased by the caller. Lengths are counted
//! in characters.

use super::distance::levenshtein;
use super::substring::longest_common_substring;
use super::types::{Classification, MatchTier};
use crate::config::Thresholds;

#[inline]
fn char_len(s: &str) -> f64 {
    s.chars().count() as f64
}

/// Keyword starts with the value (score: value length)
#[inline]
pub fn second_starts_with_first(value: &str, keyword: &str) -> Option<Classification> {
    keyword
        .starts_with(value)
        .then(|| Classification::new(MatchTier::SecondStartsWithFirst, char_len(value)))
}

/// Keyword contains the value (score: value length)
#[inline]
pub fn second_contains_first(value: &str, keyword: &str) -> Option<Classification> {
    keyword
        .contains(value)
        .then(|| Classification::new(MatchTier::SecondContainsFirst, char_len(value)))
}

/// Value starts with the keyword (score: value length)
#[inline]
pub fn first_starts_with_second(value: &str, keyword: &str) -> Option<Classification> {
    value
        .starts_with(keyword)
        .then(|| Classification::new(MatchTier::FirstStartsWithSecond, char_len(value)))
}

/// Value contains the keyword (score: value length)
#[inline]
pub fn first_contains_second(value: &str, keyword: &str) -> Option<Classification> {
    value
        .contains(keyword)
        .then(|| Classification::new(MatchTier::FirstContainsSecond, char_len(value)))
}

/// Edit distance over keyword length within `maximum` (score: that ratio)
pub fn levenshtein_check(value: &str, keyword: &str, maximum: f64) -> Option<Classification> {
    let ratio = levenshtein(value, keyword) as f64 / char_len(keyword);
    (ratio <= maximum).then(|| Classification::new(MatchTier::LevenshteinDistanceCheck, ratio))
}

/// Common substring over keyword length above `minimum`
/// (score: negated common substring over value length)
pub fn longest_common_substring_check(
    value: &str,
    keyword: &str,
    minimum: f64,
) -> Option<Classification> {
    let lcs = char_len(&longest_common_substring(value, keyword));
    let similarity = lcs / char_len(keyword);
    (similarity > minimum).then(|| {
        Classification::new(MatchTier::LongestCommonSubstringCheck, -(lcs / char_len(value)))
    })
}

/// Apply all strategies in order, return first match
pub fn classify(value: &str, keyword: &str, thresholds: &Thresholds) -> Option<Classification> {
    if value.is_empty() || keyword.is_empty() {
        return None;
    }

    // Once the prefix test fails, any hit of `contains` is past offset zero
    second_starts_with_first(value, keyword)
        .or_else(|| second_contains_first(value, keyword))
        .or_else(|| first_starts_with_second(value, keyword))
        .or_else(|| first_contains_second(value, keyword))
        .or_else(|| levenshtein_check(value, keyword, thresholds.maximum))
        .or_else(|| longest_common_substring_check(value, keyword, thresholds.minimum))
}
