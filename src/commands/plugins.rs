// src/commands/plugins.rs
//! Plugin descriptor listing

use anyhow::Result;

/// Print the importer, distributor and profiler descriptors
pub fn cmd_plugins() -> Result<()> {
    let plugins = isoplug::all_plugins();
    println!("{}", serde_json::to_string_pretty(&plugins)?);
    Ok(())
}
