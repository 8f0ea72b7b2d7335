//! JSON entry point for callers outside Rust.
//!
//! Input:
//!
//! ```json
//! {"records": [{"name": "Jon"}], "keyword": "jon", "fields": ["name"],
//!  "thresholds": {"maximum": 0.3, "minimum": 0.7}}
//! ```
//!
//! `fields` may also be a single string and `thresholds` may be omitted.
//! Errors are reported as `{"error": "..."}`.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::config::Thresholds;
use crate::fuzzy::{Engine, FieldList, MatchResult};

/// Input for [`search_json`]
#[derive(Debug, Deserialize)]
pub struct SearchInput {
    pub records: Vec<Value>,
    #[serde(default)]
    pub keyword: String,
    pub fields: FieldsInput,
    #[serde(default)]
    pub thresholds: Option<Thresholds>,
}

/// One field name or several
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum FieldsInput {
    One(String),
    Many(Vec<String>),
}

impl From<FieldsInput> for FieldList {
    fn from(fields: FieldsInput) -> Self {
        match fields {
            FieldsInput::One(field) => field.into(),
            FieldsInput::Many(fields) => fields.into(),
        }
    }
}

/// Output of [`search_json`]
#[derive(Debug, Serialize)]
pub struct SearchOutput<'a> {
    pub matches: Vec<MatchResult<'a, Value>>,
    pub total: usize,
}

fn error_json(message: String) -> String {
    json!({ "error": message }).to_string()
}

/// JSON entry point: deserialize records and query, search, serialize ranked matches.
pub fn search_json(input: &str) -> String {
    let parsed: SearchInput = match serde_json::from_str(input) {
        Ok(v) => v,
        Err(e) => return error_json(format!("invalid search input: {}", e)),
    };

    let thresholds = parsed.thresholds.unwrap_or_default();
    if let Err(e) = thresholds.validate() {
        return error_json(e.to_string());
    }

    let engine = Engine::new(&parsed.records).with_thresholds(thresholds);
    let matches = engine.search(&parsed.keyword, parsed.fields);
    let total = matches.len();

    match serde_json::to_string(&SearchOutput { matches, total }) {
        Ok(json) => json,
        Err(e) => error_json(format!("serialization failed: {}", e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(output: &str) -> Value {
        serde_json::from_str(output).unwrap()
    }

    #[test]
    fn test_search_json() {
        let input = r#"{
            "records": [{"name": "Jonathan"}, {"name": "Jon"}, {"name": "Jhon"}],
            "keyword": "jon",
            "fields": "name"
        }"#;
        let out = parse(&search_json(input));
        assert_eq!(out["total"], 2);
        assert_eq!(out["matches"][0]["record"]["name"], "Jon");
        assert_eq!(out["matches"][0]["tier"], "second_starts_with_first");
        assert_eq!(out["matches"][0]["index"], 1);
        assert_eq!(out["matches"][1]["field"], "name");
    }

    #[test]
    fn test_search_json_thresholds() {
        let input = r#"{
            "records": [{"name": "Jhon"}],
            "keyword": "jon",
            "fields": ["name"],
            "thresholds": {"maximum": 0.5}
        }"#;
        let out = parse(&search_json(input));
        assert_eq!(out["total"], 1);
        assert_eq!(out["matches"][0]["tier"], "levenshtein_distance_check");
    }

    #[test]
    fn test_search_json_missing_keyword() {
        let out = parse(&search_json(r#"{"records": [{"name": "Jon"}], "fields": "name"}"#));
        assert_eq!(out["total"], 0);
    }

    #[test]
    fn test_search_json_invalid_input() {
        let out = parse(&search_json("not json"));
        assert!(out["error"]
            .as_str()
            .unwrap()
            .starts_with("invalid search input"));
    }

    #[test]
    fn test_search_json_invalid_thresholds() {
        let input = r#"{"records": [], "keyword": "a", "fields": "name",
                        "thresholds": {"maximum": -0.1}}"#;
        let out = parse(&search_json(input));
        assert!(out["error"].as_str().unwrap().contains("maximum"));
    }
}
