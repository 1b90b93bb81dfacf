// tests/importer_config.rs

//! Importer configuration rules exercised through the public API.

use isoplug::config::cast_to_int_without_floats;
use isoplug::importer::{self, config::*};
use isoplug::{ConfigValue, Configuration, PluginCallConfiguration};

const DEPENDENT_KEYS: &[&str] = &[
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

fn with_feed() -> Configuration {
    Configuration::new().with(FEED_URL, "https://cdn.example.com/isos/")
}

#[test]
fn test_no_feed_and_no_dependents_is_valid() {
    let (valid, message) = importer::validate(&Configuration::new()).into_parts();
    assert!(valid);
    assert_eq!(message, None);

    // Explicit nulls count as absent
    let nulls: Configuration = DEPENDENT_KEYS
        .iter()
        .map(|key| (*key, ConfigValue::Absent))
        .collect();
    assert!(importer::validate(&nulls).is_valid());
}

#[test]
fn test_any_dependent_without_feed_names_feed_url() {
    for key in DEPENDENT_KEYS {
        let config = Configuration::new().with(key, "x");
        let (valid, message) = importer::validate(&config).into_parts();
        assert!(!valid, "{key}");
        assert!(message.unwrap().contains("<feed_url>"), "{key}");
    }
}

#[test]
fn test_digit_strings_cast_exactly() {
    for n in [0_i64, 1, 9, 10, 42, 3128, 65535, 1_000_000] {
        let value = ConfigValue::from(n.to_string());
        assert_eq!(cast_to_int_without_floats(&value), Ok(n));
    }
    for raw in ["1.0", "1a", "a1", "1 ", "-0", "0x10", "1_000"] {
        assert!(cast_to_int_without_floats(&ConfigValue::from(raw)).is_err(), "{raw}");
    }
}

#[test]
fn test_integer_settings_reject_zero_negative_and_floats() {
    for key in [NUM_THREADS, PROXY_PORT] {
        let base = || with_feed().with(PROXY_URL, "http://proxy.example.com");
        assert!(importer::validate(&base().with(key, "5")).is_valid(), "{key}=5");

        for bad in ["0", "-1", "5.0"] {
            let result = importer::validate(&base().with(key, bad));
            assert!(!result.is_valid(), "{key}={bad}");
            assert!(result.message().unwrap().contains(&format!("<{key}>")));
            assert!(result.message().unwrap().contains(&format!("<{bad}>")));
        }
    }
}

#[test]
fn test_proxy_credentials_are_mutual() {
    let base = || with_feed().with(PROXY_URL, "http://proxy.example.com");

    let msg = importer::validate(&base().with(PROXY_USER, "u"))
        .message()
        .unwrap()
        .to_string();
    assert!(msg.contains("<proxy_user>") && msg.contains("<proxy_password>"));

    let msg = importer::validate(&base().with(PROXY_PASSWORD, "p"))
        .message()
        .unwrap()
        .to_string();
    assert!(msg.contains("<proxy_user>") && msg.contains("<proxy_password>"));

    assert!(importer::validate(&base().with(PROXY_USER, "u").with(PROXY_PASSWORD, "p")).is_valid());
}

#[test]
fn test_ssl_client_pair_is_asymmetric() {
    assert!(!importer::validate(&with_feed().with(SSL_CLIENT_KEY, "key")).is_valid());
    assert!(importer::validate(&with_feed().with(SSL_CLIENT_CERT, "cert")).is_valid());
}

#[test]
fn test_override_layer_can_break_a_valid_config() {
    let layers = PluginCallConfiguration::new(
        Configuration::new().with(NUM_THREADS, 5),
        with_feed(),
        Configuration::new().with(NUM_THREADS, "5.0"),
    );
    let result = importer::validate(&layers.flatten());
    assert!(!result.is_valid());
    assert!(result.message().unwrap().contains("<num_threads>"));
}
