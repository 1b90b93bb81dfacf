// src/plugin.rs

//! Static plugin descriptors queried by the host at registration time

use serde::Serialize;

/// Identifier for ISO content units
pub const TYPE_ID_ISO: &str = "iso";

/// Identifier for RPM content units
pub const TYPE_ID_RPM: &str = "rpm";

/// Descriptor the host reads once when registering a plugin
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PluginMetadata {
    pub id: &'static str,
    pub display_name: &'static str,
    /// Content types the plugin handles
    pub types: &'static [&'static str],
}

impl PluginMetadata {
    pub fn supports(&self, content_type: &str) -> bool {
        self.types.contains(&content_type)
    }
}

/// Descriptors for every plugin this crate provides
pub fn all_plugins() -> Vec<PluginMetadata> {
    vec![
        crate::importer::metadata(),
        crate::distributor::metadata(),
        crate::profiler::metadata(),
    ]
}
