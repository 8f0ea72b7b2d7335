//! Fuzzrank
//!
//! Ranks records by how closely selected string fields resemble a keyword.
//! Each record/field pair is classified into a match tier by a cascade of
//! heuristics, and the matches are ordered by tier first, then by a
//! tier-specific score.
//!
//! # Tiers (strongest first)
//!
//! 1. Keyword starts with the value
//! 2. Keyword contains the value
//! 3. Value starts with the keyword
//! 4. Value contains the keyword
//! 5. Levenshtein distance ratio within `maximum`
//! 6. Longest common substring ratio above `minimum`
//!
//! # Example
//!
//! ```rust
//! use std::collections::HashMap;
//! use fuzzrank::{Engine, MatchTier};
//!
//! let records: Vec<HashMap<String, String>> = ["Jonathan", "Jon", "Jhon"]
//!     .iter()
//!     .map(|name| HashMap::from([("name".to_string(), name.to_string())]))
//!     .collect();
//!
//! let engine = Engine::new(&records);
//! let matches = engine.search("jon", "name");
//!
//! assert_eq!(matches.len(), 2);
//! assert_eq!(matches[0].tier, MatchTier::SecondStartsWithFirst);
//! assert_eq!(matches[1].tier, MatchTier::FirstStartsWithSecond);
//! ```

pub mod config;
pub mod error;
pub mod fuzzy;
pub mod json;
pub mod logging;
pub mod record;

// Re-export main types at crate root
pub use config::Thresholds;
pub use error::{ConfigError, ConfigResult};
pub use fuzzy::{Classification, Engine, FieldList, MatchResult, MatchTier};
pub use json::search_json;
pub use record::Record;
