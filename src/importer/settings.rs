// src/importer/settings.rs

//! Typed view of a validated importer configuration
//!
//! The download subsystem wants concrete types, not tagged values. Building
//! an [`ImporterSettings`] runs the validator first, so every field here has
//! already passed the rules in [`super::config`].

use super::config::{
    self as rules, FEED_URL, MAX_SPEED, NUM_THREADS, PROXY_PASSWORD, PROXY_PORT, PROXY_URL, PROXY_USER,
    REMOVE_MISSING_UNITS, SSL_CA_CERT, SSL_CLIENT_CERT, SSL_CLIENT_KEY, VALIDATE_UNITS,
};
use crate::config::{ConfigValue, Configuration, cast_to_int_without_floats, coerce_bool};
use crate::error::{Error, Result};
use serde::Serialize;
use tracing::debug;

/// Download threads used when the configuration does not say otherwise
pub const DEFAULT_NUM_THREADS: u32 = 5;

/// Whether downloaded units are checksummed when not configured
pub const DEFAULT_VALIDATE_UNITS: bool = true;

/// Whether units missing from the feed are removed when not configured
pub const DEFAULT_REMOVE_MISSING_UNITS: bool = false;

/// Proxy connection details
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProxySettings {
    pub url: String,
    pub port: Option<u16>,
    pub user: Option<String>,
    /// Never serialized, so printed settings don't leak credentials
    #[serde(skip_serializing)]
    pub password: Option<String>,
}

/// Effective importer settings for one sync
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImporterSettings {
    pub feed_url: Option<String>,
    /// Bandwidth cap in bytes per second
    pub max_speed: Option<f64>,
    pub num_threads: u32,
    pub proxy: Option<ProxySettings>,
    pub remove_missing_units: bool,
    pub ssl_ca_cert: Option<String>,
    pub ssl_client_cert: Option<String>,
    pub ssl_client_key: Option<String>,
    pub validate_units: bool,
}

impl ImporterSettings {
    /// Validate `config` and convert it into typed settings
    pub fn from_config(config: &Configuration) -> Result<Self> {
        rules::validate(config).into_result()?;

        let proxy = match string_setting(config, PROXY_URL) {
            Some(url) => Some(ProxySettings {
                url,
                port: integer_setting(config, PROXY_PORT)?
                    .map(|port| {
                        u16::try_from(port).map_err(|_| {
                            Error::ConfigInvalid(format!(
                                "The configuration parameter <{PROXY_PORT}> must be a valid TCP port, but is currently set to <{port}>."
                            ))
                        })
                    })
                    .transpose()?,
                user: string_setting(config, PROXY_USER),
                password: string_setting(config, PROXY_PASSWORD),
            }),
            None => None,
        };

        let num_threads = match integer_setting(config, NUM_THREADS)? {
            Some(n) => u32::try_from(n).map_err(|_| {
                Error::ConfigInvalid(format!(
                    "The configuration parameter <{NUM_THREADS}> is too large: <{n}>."
                ))
            })?,
            None => DEFAULT_NUM_THREADS,
        };

        let settings = Self {
            feed_url: string_setting(config, FEED_URL).filter(|url| !url.is_empty()),
            max_speed: float_setting(config, MAX_SPEED),
            num_threads,
            proxy,
            remove_missing_units: coerce_bool(config.get(REMOVE_MISSING_UNITS))
                .unwrap_or(DEFAULT_REMOVE_MISSING_UNITS),
            ssl_ca_cert: string_setting(config, SSL_CA_CERT),
            ssl_client_cert: string_setting(config, SSL_CLIENT_CERT),
            ssl_client_key: string_setting(config, SSL_CLIENT_KEY),
            validate_units: coerce_bool(config.get(VALIDATE_UNITS))
                .unwrap_or(DEFAULT_VALIDATE_UNITS),
        };

        debug!(
            "Importer settings: feed={:?}, threads={}, proxy={}",
            settings.feed_url,
            settings.num_threads,
            settings.proxy.is_some()
        );
        Ok(settings)
    }

    /// True when a feed is configured, i.e. a sync has somewhere to pull from
    pub fn has_feed(&self) -> bool {
        self.feed_url.is_some()
    }
}

fn string_setting(config: &Configuration, key: &str) -> Option<String> {
    config.get(key).as_str().map(str::to_string)
}

fn integer_setting(config: &Configuration, key: &str) -> Result<Option<i64>> {
    match config.get(key) {
        ConfigValue::Absent => Ok(None),
        value => cast_to_int_without_floats(value)
            .map(Some)
            .map_err(|e| Error::ConfigInvalid(format!("<{key}>: {e}"))),
    }
}

fn float_setting(config: &Configuration, key: &str) -> Option<f64> {
    match config.get(key) {
        ConfigValue::Int(i) => Some(*i as f64),
        ConfigValue::Float(x) => Some(*x),
        ConfigValue::Str(s) => s.trim().parse().ok(),
        ConfigValue::Absent | ConfigValue::Bool(_) => None,
    }
}
