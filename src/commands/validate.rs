// src/commands/validate.rs
//! Configuration validation commands

use anyhow::{Context, Result};
use isoplug::config::load_document;
use isoplug::{Configuration, DistributorSettings, ImporterSettings, PluginCallConfiguration};
use std::path::Path;
use tracing::{info, warn};

fn load_layer(path: Option<&Path>) -> Result<Configuration> {
    match path {
        Some(path) => load_document(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display())),
        None => Ok(Configuration::new()),
    }
}

/// Merge the configuration layers the way the host would hand them to the importer
fn effective_importer_config(
    config: &Path,
    plugin_defaults: Option<&Path>,
    override_config: Option<&Path>,
) -> Result<Configuration> {
    let layers = PluginCallConfiguration::new(
        load_layer(plugin_defaults)?,
        load_layer(Some(config))?,
        load_layer(override_config)?,
    );
    Ok(layers.flatten())
}

/// Validate an importer configuration and print the effective settings
pub fn cmd_validate_importer(
    config: &Path,
    plugin_defaults: Option<&Path>,
    override_config: Option<&Path>,
) -> Result<()> {
    info!("Validating importer configuration: {}", config.display());
    let effective = effective_importer_config(config, plugin_defaults, override_config)?;
    let settings = ImporterSettings::from_config(&effective)?;
    if !settings.has_feed() {
        warn!("No feed configured; syncs with this configuration will not download anything");
    }

    println!("Importer configuration is valid");
    println!("{}", serde_json::to_string_pretty(&settings)?);
    Ok(())
}

/// Validate a distributor configuration and print the effective settings
pub fn cmd_validate_distributor(config: &Path) -> Result<()> {
    info!("Validating distributor configuration: {}", config.display());
    let config = load_layer(Some(config))?;
    let settings = DistributorSettings::from_config(&config)?;

    println!("Distributor configuration is valid");
    println!("  Serve HTTP: {}", settings.serve_http);
    println!("  Serve HTTPS: {}", settings.serve_https);
    Ok(())
}
