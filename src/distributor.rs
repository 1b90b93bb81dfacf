// src/distributor.rs

//! ISO distributor configuration
//!
//! The distributor publishes a repository's ISOs over HTTP and/or HTTPS.
//! Its configuration is two publish flags, validated with the same
//! first-failure semantics as the importer.

use crate::config::{
    Configuration, FieldRule, ValidationResult, coerce_bool, require_boolean, run_rules,
};
use crate::error::Result;
use crate::plugin::{PluginMetadata, TYPE_ID_ISO};
use serde::Serialize;
use tracing::debug;

pub const DISTRIBUTOR_TYPE_ID: &str = "iso_distributor";

pub const SERVE_HTTP: &str = "serve_http";
pub const SERVE_HTTPS: &str = "serve_https";

pub const DEFAULT_SERVE_HTTP: bool = false;
pub const DEFAULT_SERVE_HTTPS: bool = true;

const RULES: &[FieldRule] = &[validate_serve_http, validate_serve_https];

pub fn metadata() -> PluginMetadata {
    PluginMetadata {
        id: DISTRIBUTOR_TYPE_ID,
        display_name: "ISO Distributor",
        types: &[TYPE_ID_ISO],
    }
}

/// Validate a distributor configuration
pub fn validate(config: &Configuration) -> ValidationResult {
    let result = run_rules(config, RULES);
    if let Some(message) = result.message() {
        debug!("Distributor configuration rejected: {}", message);
    }
    result
}

fn validate_serve_http(config: &Configuration) -> std::result::Result<(), String> {
    require_boolean(config, SERVE_HTTP)
}

fn validate_serve_https(config: &Configuration) -> std::result::Result<(), String> {
    require_boolean(config, SERVE_HTTPS)
}

/// Effective publish settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DistributorSettings {
    pub serve_http: bool,
    pub serve_https: bool,
}

impl DistributorSettings {
    pub fn from_config(config: &Configuration) -> Result<Self> {
        validate(config).into_result()?;
        Ok(Self {
            serve_http: coerce_bool(config.get(SERVE_HTTP)).unwrap_or(DEFAULT_SERVE_HTTP),
            serve_https: coerce_bool(config.get(SERVE_HTTPS)).unwrap_or(DEFAULT_SERVE_HTTPS),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_defaults() {
        let settings = DistributorSettings::from_config(&Configuration::new()).unwrap();
        assert!(!settings.serve_http);
        assert!(settings.serve_https);
    }

    #[test]
    fn test_string_and_native_flags() {
        let config = Configuration::new()
            .with(SERVE_HTTP, "true")
            .with(SERVE_HTTPS, false);
        let settings = DistributorSettings::from_config(&config).unwrap();
        assert!(settings.serve_http);
        assert!(!settings.serve_https);
    }

    #[test]
    fn test_invalid_flag() {
        let config = Configuration::new().with(SERVE_HTTPS, "fake");
        let result = validate(&config);
        assert!(!result.is_valid());
        assert_eq!(
            result.message(),
            Some(
                "The configuration parameter <serve_https> must be set to a boolean value, but is currently set to <fake>."
            )
        );
    }

    #[test]
    fn test_serve_http_checked_first() {
        let config = Configuration::new()
            .with(SERVE_HTTP, 3)
            .with(SERVE_HTTPS, "fake");
        let err = DistributorSettings::from_config(&config).unwrap_err();
        assert!(matches!(err, Error::ConfigInvalid(ref msg) if msg.contains("<serve_http>")));
    }
}
