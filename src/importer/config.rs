// src/importer/config.rs

//! ISO importer configuration validation
//!
//! Each rule owns exactly one setting, though several encode a dependency on
//! other settings. Rules run in a fixed order and validation stops at the
//! first failure, so the operator always sees one actionable message.

use crate::config::{
    ConfigValue, Configuration, FieldRule, ValidationResult, cast_to_int_without_floats,
    require_boolean, require_string, run_rules,
};
use tracing::debug;

pub const FEED_URL: &str = "feed_url";
pub const MAX_SPEED: &str = "max_speed";
pub const NUM_THREADS: &str = "num_threads";
pub const PROXY_PASSWORD: &str = "proxy_password";
pub const PROXY_PORT: &str = "proxy_port";
pub const PROXY_URL: &str = "proxy_url";
pub const PROXY_USER: &str = "proxy_user";
pub const REMOVE_MISSING_UNITS: &str = "remove_missing_units";
pub const SSL_CA_CERT: &str = "ssl_ca_cert";
pub const SSL_CLIENT_CERT: &str = "ssl_client_cert";
pub const SSL_CLIENT_KEY: &str = "ssl_client_key";
pub const VALIDATE_UNITS: &str = "validate_units";

/// Settings that only make sense when a feed is configured
const FEED_DEPENDENT_KEYS: &[&str] = &[
    MAX_SPEED,
    NUM_THREADS,
    PROXY_PASSWORD,
    PROXY_PORT,
    PROXY_URL,
    PROXY_USER,
    REMOVE_MISSING_UNITS,
    SSL_CA_CERT,
    SSL_CLIENT_CERT,
    SSL_CLIENT_KEY,
    VALIDATE_UNITS,
];

/// Settings that only make sense when a proxy URL is configured
const PROXY_DEPENDENT_KEYS: &[&str] = &[PROXY_PASSWORD, PROXY_PORT, PROXY_USER];

/// Validation order; the first failing rule determines the reported message
const RULES: &[FieldRule] = &[
    validate_feed_url,
    validate_max_speed,
    validate_num_threads,
    validate_proxy_password,
    validate_proxy_port,
    validate_proxy_url,
    validate_proxy_user,
    validate_remove_missing_units,
    validate_ssl_ca_cert,
    validate_ssl_client_cert,
    validate_ssl_client_key,
    validate_validate_units,
];

/// Validate an importer configuration before a sync is started
pub fn validate(config: &Configuration) -> ValidationResult {
    let result = run_rules(config, RULES);
    if let Some(message) = result.message() {
        debug!("Importer configuration rejected: {}", message);
    }
    result
}

fn validate_feed_url(config: &Configuration) -> Result<(), String> {
    match config.get(FEED_URL) {
        ConfigValue::Absent => missing_feed(config),
        // An empty feed is no feed
        ConfigValue::Str(s) if s.is_empty() => missing_feed(config),
        ConfigValue::Str(_) => Ok(()),
        other => Err(format!(
            "The configuration parameter <{FEED_URL}> should be a string, but it was {}.",
            other.kind()
        )),
    }
}

fn missing_feed(config: &Configuration) -> Result<(), String> {
    if FEED_DEPENDENT_KEYS.iter().any(|key| config.is_set(key)) {
        Err(format!(
            "The configuration parameter <{FEED_URL}> is required when any of the following other parameters are defined: {}",
            FEED_DEPENDENT_KEYS.join(", ")
        ))
    } else {
        Ok(())
    }
}

fn validate_max_speed(config: &Configuration) -> Result<(), String> {
    let value = config.get(MAX_SPEED);
    let speed = match value {
        ConfigValue::Absent => return Ok(()),
        ConfigValue::Int(i) => Some(*i as f64),
        ConfigValue::Float(x) => Some(*x),
        ConfigValue::Str(s) => s.trim().parse::<f64>().ok(),
        ConfigValue::Bool(_) => None,
    };

    match speed {
        Some(speed) if speed.is_finite() && speed > 0.0 => Ok(()),
        _ => Err(format!(
            "The configuration parameter <{MAX_SPEED}> must be set to a positive numerical value, but is currently set to <{value}>."
        )),
    }
}

/// Shared rule for settings that must be positive integers
fn require_positive_integer(config: &Configuration, key: &str) -> Result<(), String> {
    let value = config.get(key);
    if value.is_absent() {
        return Ok(());
    }

    let accepted = match cast_to_int_without_floats(value) {
        Ok(n) => n >= 1,
        Err(e) => {
            debug!("Rejecting <{}>: {}", key, e);
            false
        }
    };

    if accepted {
        Ok(())
    } else {
        Err(format!(
            "The configuration parameter <{key}> must be set to a positive integer, but is currently set to <{value}>."
        ))
    }
}

fn validate_num_threads(config: &Configuration) -> Result<(), String> {
    require_positive_integer(config, NUM_THREADS)
}

fn validate_proxy_port(config: &Configuration) -> Result<(), String> {
    require_positive_integer(config, PROXY_PORT)
}

/// Reports a user without a password; the opposite gap is left to the user rule
fn validate_proxy_password(config: &Configuration) -> Result<(), String> {
    if config.is_set(PROXY_USER) && !config.is_set(PROXY_PASSWORD) {
        return Err(format!(
            "The configuration parameter <{PROXY_USER}> requires the <{PROXY_PASSWORD}> parameter to also be set."
        ));
    }
    require_string(config, PROXY_PASSWORD)
}

fn validate_proxy_url(config: &Configuration) -> Result<(), String> {
    if !config.is_set(PROXY_URL) {
        if PROXY_DEPENDENT_KEYS.iter().any(|key| config.is_set(key)) {
            return Err(format!(
                "The configuration parameter <{PROXY_URL}> is required when any of the following other parameters are defined: {}",
                PROXY_DEPENDENT_KEYS.join(", ")
            ));
        }
        return Ok(());
    }
    require_string(config, PROXY_URL)
}

/// Reports a password without a user, after port and URL have been checked
fn validate_proxy_user(config: &Configuration) -> Result<(), String> {
    if config.is_set(PROXY_PASSWORD) && !config.is_set(PROXY_USER) {
        return Err(format!(
            "The configuration parameter <{PROXY_PASSWORD}> requires the <{PROXY_USER}> parameter to also be set."
        ));
    }
    require_string(config, PROXY_USER)
}

fn validate_remove_missing_units(config: &Configuration) -> Result<(), String> {
    require_boolean(config, REMOVE_MISSING_UNITS)
}

fn validate_ssl_ca_cert(config: &Configuration) -> Result<(), String> {
    require_string(config, SSL_CA_CERT)
}

fn validate_ssl_client_cert(config: &Configuration) -> Result<(), String> {
    require_string(config, SSL_CLIENT_CERT)
}

fn validate_ssl_client_key(config: &Configuration) -> Result<(), String> {
    // A client cert may stand alone; a key without its cert cannot
    if config.is_set(SSL_CLIENT_KEY) && !config.is_set(SSL_CLIENT_CERT) {
        return Err(format!(
            "The configuration parameter <{SSL_CLIENT_KEY}> requires the <{SSL_CLIENT_CERT}> parameter to also be set."
        ));
    }
    require_string(config, SSL_CLIENT_KEY)
}

fn validate_validate_units(config: &Configuration) -> Result<(), String> {
    require_boolean(config, VALIDATE_UNITS)
}
