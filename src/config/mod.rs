// src/config/mod.rs

//! Plugin configuration model
//!
//! Configuration reaches a plugin as loosely typed key/value pairs. This
//! module gives those values an explicit tagged type, layers the host's
//! plugin/repository/override configuration, and holds the coercion rules
//! (boolean tokens, integer casting) the validators build on.

mod coerce;
mod document;
mod layers;
mod value;

pub use coerce::{NumericCastError, cast_to_int_without_floats, coerce_bool, parse_bool};
pub use document::{DocumentFormat, load_document, parse_document};
pub use layers::PluginCallConfiguration;
pub use value::{ConfigValue, Configuration};

/// Outcome of validating a configuration
///
/// A message is present exactly when the configuration is invalid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    message: Option<String>,
}

impl ValidationResult {
    pub fn valid() -> Self {
        Self { message: None }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.message.is_none()
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// The host-facing `(is_valid, message)` pair
    pub fn into_parts(self) -> (bool, Option<String>) {
        (self.message.is_none(), self.message)
    }

    /// Convert into a library result, mapping failure to [`crate::Error::ConfigInvalid`]
    pub fn into_result(self) -> crate::Result<()> {
        match self.message {
            None => Ok(()),
            Some(msg) => Err(crate::Error::ConfigInvalid(msg)),
        }
    }
}

/// A single-field rule: `Err(message)` on failure
pub(crate) type FieldRule = fn(&Configuration) -> std::result::Result<(), String>;

/// Run `rules` in order and report the first failure
pub(crate) fn run_rules(config: &Configuration, rules: &[FieldRule]) -> ValidationResult {
    for rule in rules {
        if let Err(message) = rule(config) {
            return ValidationResult::invalid(message);
        }
    }
    ValidationResult::valid()
}

/// Shared check for flag settings (strings via boolean tokens, or native booleans)
pub(crate) fn require_boolean(config: &Configuration, key: &str) -> std::result::Result<(), String> {
    let value = config.get(key);
    if value.is_absent() || coerce_bool(value).is_some() {
        return Ok(());
    }
    Err(format!(
        "The configuration parameter <{key}> must be set to a boolean value, but is currently set to <{value}>."
    ))
}

/// Shared check for settings that must be strings when present
pub(crate) fn require_string(config: &Configuration, key: &str) -> std::result::Result<(), String> {
    match config.get(key) {
        ConfigValue::Absent | ConfigValue::Str(_) => Ok(()),
        other => Err(format!(
            "The configuration parameter <{key}> should be a string, but it was {}.",
            other.kind()
        )),
    }
}
