// src/config/value.rs

//! Tagged configuration values and the flat configuration map

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

static ABSENT: ConfigValue = ConfigValue::Absent;

/// A single configuration value as supplied by the host
///
/// Documents decode into the narrowest variant that fits: `null` becomes
/// `Absent`, `5` becomes `Int`, `5.0` becomes `Float` and `"5"` stays a `Str`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(untagged)]
pub enum ConfigValue {
    #[default]
    Absent,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

impl ConfigValue {
    pub fn is_absent(&self) -> bool {
        matches!(self, ConfigValue::Absent)
    }

    pub fn is_set(&self) -> bool {
        !self.is_absent()
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            ConfigValue::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Human-readable type description used in diagnostics ("a string", "an integer", ...)
    pub fn kind(&self) -> &'static str {
        match self {
            ConfigValue::Absent => "absent",
            ConfigValue::Bool(_) => "a boolean",
            ConfigValue::Int(_) => "an integer",
            ConfigValue::Float(_) => "a float",
            ConfigValue::Str(_) => "a string",
        }
    }
}

impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigValue::Absent => write!(f, "None"),
            ConfigValue::Bool(b) => write!(f, "{}", b),
            ConfigValue::Int(i) => write!(f, "{}", i),
            ConfigValue::Float(x) => write!(f, "{:?}", x),
            ConfigValue::Str(s) => write!(f, "{}", s),
        }
    }
}

impl From<&str> for ConfigValue {
    fn from(value: &str) -> Self {
        ConfigValue::Str(value.to_string())
    }
}

impl From<String> for ConfigValue {
    fn from(value: String) -> Self {
        ConfigValue::Str(value)
    }
}

impl From<i64> for ConfigValue {
    fn from(value: i64) -> Self {
        ConfigValue::Int(value)
    }
}

impl From<i32> for ConfigValue {
    fn from(value: i32) -> Self {
        ConfigValue::Int(i64::from(value))
    }
}

impl From<f64> for ConfigValue {
    fn from(value: f64) -> Self {
        ConfigValue::Float(value)
    }
}

impl From<bool> for ConfigValue {
    fn from(value: bool) -> Self {
        ConfigValue::Bool(value)
    }
}

/// Flat mapping from setting key to value
///
/// Missing keys read as [`ConfigValue::Absent`], so callers never need to
/// distinguish "not supplied" from "explicitly null".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Configuration {
    values: BTreeMap<String, ConfigValue>,
}

impl Configuration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, handy for constructing configurations inline
    pub fn with(mut self, key: &str, value: impl Into<ConfigValue>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: &str, value: impl Into<ConfigValue>) {
        self.values.insert(key.to_string(), value.into());
    }

    pub fn remove(&mut self, key: &str) -> Option<ConfigValue> {
        self.values.remove(key)
    }

    pub fn get(&self, key: &str) -> &ConfigValue {
        self.values.get(key).unwrap_or(&ABSENT)
    }

    pub fn is_set(&self, key: &str) -> bool {
        self.get(key).is_set()
    }

    /// Keys whose value is not absent
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values
            .iter()
            .filter(|(_, v)| v.is_set())
            .map(|(k, _)| k.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.keys().next().is_none()
    }
}

impl<K: Into<String>, V: Into<ConfigValue>> FromIterator<(K, V)> for Configuration {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_key_is_absent() {
        let config = Configuration::new().with("feed_url", "http://example.com/");
        assert!(config.get("num_threads").is_absent());
        assert!(config.is_set("feed_url"));
    }

    #[test]
    fn test_json_values_decode_to_narrowest_variant() {
        let config: Configuration = serde_json::from_str(
            r#"{"a": null, "b": true, "c": 5, "d": 5.0, "e": "5"}"#,
        )
        .unwrap();

        assert_eq!(config.get("a"), &ConfigValue::Absent);
        assert_eq!(config.get("b"), &ConfigValue::Bool(true));
        assert_eq!(config.get("c"), &ConfigValue::Int(5));
        assert_eq!(config.get("d"), &ConfigValue::Float(5.0));
        assert_eq!(config.get("e"), &ConfigValue::Str("5".to_string()));
    }

    #[test]
    fn test_explicit_null_is_not_listed_in_keys() {
        let config: Configuration =
            serde_json::from_str(r#"{"proxy_url": null, "feed_url": "x"}"#).unwrap();
        let keys: Vec<&str> = config.keys().collect();
        assert_eq!(keys, vec!["feed_url"]);
    }

    #[test]
    fn test_display_and_kind() {
        assert_eq!(ConfigValue::from("abc").to_string(), "abc");
        assert_eq!(ConfigValue::from(3.0).to_string(), "3.0");
        assert_eq!(ConfigValue::Absent.to_string(), "None");
        assert_eq!(ConfigValue::from(7).kind(), "an integer");
        assert_eq!(ConfigValue::from(false).kind(), "a boolean");
    }
}
