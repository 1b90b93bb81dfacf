// src/config/layers.rs

//! Layered plugin call configuration
//!
//! The host hands a plugin three configuration layers on every call:
//! plugin-wide defaults, the repository's plugin configuration, and a
//! per-call override. Lookups search override, then repository, then plugin.

use super::value::{ConfigValue, Configuration};
use std::collections::BTreeSet;

#[derive(Debug, Clone, Default)]
pub struct PluginCallConfiguration {
    pub plugin_config: Configuration,
    pub repo_plugin_config: Configuration,
    pub override_config: Configuration,
}

impl PluginCallConfiguration {
    pub fn new(
        plugin_config: Configuration,
        repo_plugin_config: Configuration,
        override_config: Configuration,
    ) -> Self {
        Self {
            plugin_config,
            repo_plugin_config,
            override_config,
        }
    }

    /// Effective value for `key`: the first non-absent value in precedence order
    pub fn get(&self, key: &str) -> &ConfigValue {
        [&self.override_config, &self.repo_plugin_config]
            .into_iter()
            .map(|layer| layer.get(key))
            .find(|value| value.is_set())
            .unwrap_or_else(|| self.plugin_config.get(key))
    }

    /// Collapse the layers into the effective flat configuration
    pub fn flatten(&self) -> Configuration {
        let keys: BTreeSet<&str> = self
            .plugin_config
            .keys()
            .chain(self.repo_plugin_config.keys())
            .chain(self.override_config.keys())
            .collect();

        keys.into_iter()
            .map(|key| (key, self.get(key).clone()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layered() -> PluginCallConfiguration {
        PluginCallConfiguration::new(
            Configuration::new()
                .with("num_threads", 5)
                .with("validate_units", true),
            Configuration::new()
                .with("feed_url", "http://repo.example.com/isos/")
                .with("num_threads", 2),
            Configuration::new().with("num_threads", "8"),
        )
    }

    #[test]
    fn test_override_wins() {
        assert_eq!(layered().get("num_threads"), &ConfigValue::from("8"));
    }

    #[test]
    fn test_repo_layer_beats_plugin_defaults() {
        let mut config = layered();
        config.override_config = Configuration::new();
        assert_eq!(config.get("num_threads"), &ConfigValue::Int(2));
    }

    #[test]
    fn test_plugin_layer_is_fallback() {
        assert_eq!(layered().get("validate_units"), &ConfigValue::Bool(true));
        assert!(layered().get("proxy_url").is_absent());
    }

    #[test]
    fn test_explicit_null_does_not_mask_lower_layer() {
        let config = PluginCallConfiguration::new(
            Configuration::new().with("max_speed", 100),
            Configuration::new(),
            Configuration::new().with("max_speed", ConfigValue::Absent),
        );
        assert_eq!(config.get("max_speed"), &ConfigValue::Int(100));
    }

    #[test]
    fn test_flatten_merges_all_keys() {
        let flat = layered().flatten();
        let keys: Vec<&str> = flat.keys().collect();
        assert_eq!(keys, vec!["feed_url", "num_threads", "validate_units"]);
        assert_eq!(flat.get("num_threads"), &ConfigValue::from("8"));
    }
}
