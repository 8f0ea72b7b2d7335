//! Acceptance thresholds for the fuzzy tiers
//!
//! Environment variables:
//! - `FUZZRANK_MAXIMUM`: largest accepted edit-distance ratio (default: 0.3)
//! - `FUZZRANK_MINIMUM`: common-substring ratio that must be exceeded (default: 0.7)

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};

/// Environment variable overriding [`Thresholds::maximum`]
pub const ENV_MAXIMUM: &str = "FUZZRANK_MAXIMUM";
/// Environment variable overriding [`Thresholds::minimum`]
pub const ENV_MINIMUM: &str = "FUZZRANK_MINIMUM";

/// Levenshtein and longest-common-substring acceptance thresholds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Thresholds {
    /// Accept an edit-distance match when `distance / len(keyword) <= maximum`
    pub maximum: f64,
    /// Accept a substring match when `len(lcs) / len(keyword) > minimum`
    pub minimum: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            maximum: 0.3,
            minimum: 0.7,
        }
    }
}

impl Thresholds {
    /// Create thresholds, validating both values
    pub fn new(maximum: f64, minimum: f64) -> ConfigResult<Self> {
        let thresholds = Self { maximum, minimum };
        thresholds.validate()?;
        Ok(thresholds)
    }

    /// Both thresholds must be finite and non-negative
    pub fn validate(&self) -> ConfigResult<()> {
        check("maximum", self.maximum)?;
        check("minimum", self.minimum)
    }

    /// Load from `FUZZRANK_MAXIMUM` / `FUZZRANK_MINIMUM`, defaulting unset values
    pub fn from_env() -> ConfigResult<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Parse a JSON object such as `{"maximum": 0.25}`; missing keys keep defaults
    pub fn from_json(input: &str) -> ConfigResult<Self> {
        let thresholds: Self = serde_json::from_str(input)?;
        thresholds.validate()?;
        Ok(thresholds)
    }

    fn from_lookup<F>(lookup: F) -> ConfigResult<Self>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        let defaults = Self::default();
        let thresholds = Self {
            maximum: parse_var(ENV_MAXIMUM, lookup(ENV_MAXIMUM), defaults.maximum)?,
            minimum: parse_var(ENV_MINIMUM, lookup(ENV_MINIMUM), defaults.minimum)?,
        };
        thresholds.validate()?;
        Ok(thresholds)
    }
}

fn parse_var(name: &'static str, raw: Option<String>, default: f64) -> ConfigResult<f64> {
    match raw {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Parse { name, value }),
    }
}

fn check(name: &'static str, value: f64) -> ConfigResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidThreshold { name, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&'static str, &str)]) -> impl Fn(&'static str) -> Option<String> {
        let vars: HashMap<&'static str, String> =
            vars.iter().map(|(k, v)| (*k, v.to_string())).collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_defaults() {
        let t = Thresholds::default();
        assert_eq!(t.maximum, 0.3);
        assert_eq!(t.minimum, 0.7);
    }

    #[test]
    fn test_lookup_unset_uses_defaults() {
        let t = Thresholds::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(t, Thresholds::default());
    }

    #[test]
    fn test_lookup_overrides() {
        let t = Thresholds::from_lookup(lookup_from(&[(ENV_MAXIMUM, " 0.5 "), (ENV_MINIMUM, "0.6")]))
            .unwrap();
        assert_eq!(t.maximum, 0.5);
        assert_eq!(t.minimum, 0.6);
    }

    #[test]
    fn test_lookup_unparsable() {
        let err = Thresholds::from_lookup(lookup_from(&[(ENV_MINIMUM, "lots")])).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { name: ENV_MINIMUM, .. }));
    }

    #[test]
    fn test_lookup_negative_rejected() {
        let err = Thresholds::from_lookup(lookup_from(&[(ENV_MAXIMUM, "-1")])).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidThreshold { name: "maximum", .. }
        ));
    }

    #[test]
    fn test_from_json_partial() {
        let t = Thresholds::from_json(r#"{"minimum": 0.5}"#).unwrap();
        assert_eq!(t.maximum, 0.3);
        assert_eq!(t.minimum, 0.5);
    }

    #[test]
    fn test_from_json_malformed() {
        assert!(matches!(
            Thresholds::from_json("{maximum"),
            Err(ConfigError::Json(_))
        ));
    }

    #[test]
    fn test_new_rejects_nan() {
        assert!(Thresholds::new(f64::NAN, 0.7).is_err());
        assert!(Thresholds::new(0.3, 0.7).is_ok());
    }
}
