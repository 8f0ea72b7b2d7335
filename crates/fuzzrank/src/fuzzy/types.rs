//! Match tiers and results

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

/// How a field value relates to the keyword, strongest first.
///
/// Tiers always outrank scores: any containment relationship sorts ahead of
/// any thresholded fuzzy match, whatever the numbers say.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchTier {
    /// The keyword starts with the value
    SecondStartsWithFirst = 1,
    /// The keyword contains the value past its start
    SecondContainsFirst = 2,
    /// The value starts with the keyword
    FirstStartsWithSecond = 3,
    /// The value contains the keyword past its start
    FirstContainsSecond = 4,
    /// Edit distance relative to the keyword length is within `maximum`
    LevenshteinDistanceCheck = 5,
    /// Longest common substring relative to the keyword length exceeds `minimum`
    LongestCommonSubstringCheck = 6,
}

impl MatchTier {
    /// Ordinal of the tier (1 = strongest)
    pub fn rank(&self) -> u8 {
        *self as u8
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SecondStartsWithFirst => "second_starts_with_first",
            Self::SecondContainsFirst => "second_contains_first",
            Self::FirstStartsWithSecond => "first_starts_with_second",
            Self::FirstContainsSecond => "first_contains_second",
            Self::LevenshteinDistanceCheck => "levenshtein_distance_check",
            Self::LongestCommonSubstringCheck => "longest_common_substring_check",
        }
    }

    /// Whether the tier came from a containment test rather than a threshold
    pub fn is_containment(&self) -> bool {
        self.rank() <= Self::FirstContainsSecond.rank()
    }
}

impl fmt::Display for MatchTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of classifying one (value, keyword) pair.
///
/// `score` depends on the tier:
/// - containment tiers: length of the value
/// - edit distance: `distance / len(keyword)`
/// - common substring: `-(len(lcs) / len(value))`, negative so longer
///   overlaps sort first
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    pub tier: MatchTier,
    pub score: f64,
}

impl Classification {
    pub fn new(tier: MatchTier, score: f64) -> Self {
        Self { tier, score }
    }

    /// Ranking order: tier ascending, then score ascending
    pub fn cmp_rank(&self, other: &Self) -> Ordering {
        self.tier
            .cmp(&other.tier)
            .then_with(|| self.score.total_cmp(&other.score))
    }
}

/// A record that matched, with the field that decided it
#[derive(Debug, Serialize)]
#[serde(bound(serialize = "R: Serialize"))]
pub struct MatchResult<'a, R: ?Sized> {
    /// Position of the record in the engine's collection
    pub index: usize,
    pub record: &'a R,
    /// First configured field whose value matched
    pub field: String,
    pub tier: MatchTier,
    pub score: f64,
}

impl<'a, R: ?Sized> MatchResult<'a, R> {
    pub(crate) fn new(
        index: usize,
        record: &'a R,
        field: &str,
        classification: Classification,
    ) -> Self {
        Self {
            index,
            record,
            field: field.to_string(),
            tier: classification.tier,
            score: classification.score,
        }
    }

    pub fn classification(&self) -> Classification {
        Classification::new(self.tier, self.score)
    }
}

// Manual impl: cloning only copies the reference, so `R: Clone` is not needed
impl<R: ?Sized> Clone for MatchResult<'_, R> {
    fn clone(&self) -> Self {
        Self {
            index: self.index,
            record: self.record,
            field: self.field.clone(),
            tier: self.tier,
            score: self.score,
        }
    }
}
