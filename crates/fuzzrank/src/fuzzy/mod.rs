//! Fuzzy Matching Engine
//!
//! Cascade classification of (value, keyword) pairs, ranked by tier.
//!
//! # Strategies (in order of preference)
//!
//! 1. Keyword starts with value (score: value length)
//! 2. Keyword contains value (score: value length)
//! 3. Value starts with keyword (score: value length)
//! 4. Value contains keyword (score: value length)
//! 5. Levenshtein distance ratio `<= maximum` (score: ratio)
//! 6. Longest common substring ratio `> minimum` (score: negated overlap)
//!
//! # Example
//!
//! ```rust
//! use fuzzrank::fuzzy::{Engine, MatchTier};
//! use serde_json::json;
//!
//! let records = vec![
//!     json!({"title": "Rust in Action"}),
//!     json!({"title": "Programming Rust"}),
//! ];
//! let engine = Engine::new(&records);
//!
//! let matches = engine.search("rust", "title");
//! assert_eq!(matches[0].tier, MatchTier::FirstStartsWithSecond);
//! assert_eq!(matches[1].tier, MatchTier::FirstContainsSecond);
//! ```

mod engine;
mod rank;
mod strategies;
mod types;

pub mod distance;
pub mod substring;

pub use engine::{Engine, FieldList};
pub use rank::{compare, sort};
pub use strategies::classify;
pub use types::{Classification, MatchResult, MatchTier};
