//! Engine - record search and ranking

use tracing::{debug, trace};

use super::rank;
use super::strategies;
use super::types::{Classification, MatchResult};
use crate::config::Thresholds;
use crate::record::Record;

/// Ordered field names to check on each record.
///
/// Built from a single name or from any sequence of names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldList(Vec<String>);

impl FieldList {
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for FieldList {
    fn from(field: &str) -> Self {
        Self(vec![field.to_string()])
    }
}

impl From<String> for FieldList {
    fn from(field: String) -> Self {
        Self(vec![field])
    }
}

impl From<Vec<String>> for FieldList {
    fn from(fields: Vec<String>) -> Self {
        Self(fields)
    }
}

impl From<Vec<&str>> for FieldList {
    fn from(fields: Vec<&str>) -> Self {
        fields.as_slice().into()
    }
}

impl From<&[&str]> for FieldList {
    fn from(fields: &[&str]) -> Self {
        Self(fields.iter().map(|f| f.to_string()).collect())
    }
}

impl From<&[String]> for FieldList {
    fn from(fields: &[String]) -> Self {
        Self(fields.to_vec())
    }
}

impl<const N: usize> From<[&str; N]> for FieldList {
    fn from(fields: [&str; N]) -> Self {
        fields.as_slice().into()
    }
}

/// Fuzzy search over a borrowed record collection.
///
/// Searches only read the records and the thresholds, so a shared engine can
/// serve concurrent searches as long as nobody mutates `thresholds` meanwhile.
#[derive(Debug)]
pub struct Engine<'a, R> {
    records: &'a [R],
    keyword: String,
    /// Acceptance thresholds, adjustable between searches
    pub thresholds: Thresholds,
}

impl<'a, R: Record> Engine<'a, R> {
    /// Create an engine over `records` with default thresholds
    pub fn new(records: &'a [R]) -> Self {
        Self {
            records,
            keyword: String::new(),
            thresholds: Thresholds::default(),
        }
    }

    pub fn with_thresholds(mut self, thresholds: Thresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    /// Keyword used when `search` is given an empty one
    pub fn with_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.set_keyword(keyword);
        self
    }

    pub fn set_keyword(&mut self, keyword: impl Into<String>) {
        self.keyword = keyword.into();
    }

    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    pub fn records(&self) -> &'a [R] {
        self.records
    }

    /// Rank records whose `fields` resemble `keyword`.
    ///
    /// An empty `keyword` falls back to the stored one; if that is empty too
    /// the result is empty. Each record contributes at most one match, from
    /// the first field (in order) that matches.
    pub fn search(&self, keyword: &str, fields: impl Into<FieldList>) -> Vec<MatchResult<'a, R>> {
        let keyword = if keyword.is_empty() {
            self.keyword.as_str()
        } else {
            keyword
        };
        let keyword = keyword.to_lowercase();
        if keyword.is_empty() {
            return Vec::new();
        }

        let fields = fields.into();
        let mut matches: Vec<MatchResult<'a, R>> = self
            .records
            .iter()
            .enumerate()
            .filter_map(|(index, record)| self.match_record(index, record, &keyword, &fields))
            .collect();

        rank::sort(&mut matches);

        debug!(
            keyword = %keyword,
            fields = fields.len(),
            records = self.records.len(),
            matches = matches.len(),
            "search complete"
        );
        matches
    }

    /// Classify one pair with this engine's thresholds, lowercasing both sides
    pub fn classify(&self, value: &str, keyword: &str) -> Option<Classification> {
        strategies::classify(
            &value.to_lowercase(),
            &keyword.to_lowercase(),
            &self.thresholds,
        )
    }

    fn match_record(
        &self,
        index: usize,
        record: &'a R,
        keyword_lower: &str,
        fields: &FieldList,
    ) -> Option<MatchResult<'a, R>> {
        fields.iter().find_map(|field| {
            let value = record.field(field)?.to_lowercase();
            let classification = strategies::classify(&value, keyword_lower, &self.thresholds)?;
            trace!(
                index,
                field,
                tier = %classification.tier,
                score = classification.score,
                "record matched"
            );
            Some(MatchResult::new(index, record, field, classification))
        })
    }
}
