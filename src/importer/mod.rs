// src/importer/mod.rs

//! ISO importer
//!
//! The importer pulls ISO images from a remote feed. Only its configuration
//! handling lives here: the feed/proxy/SSL/download settings are vetted
//! before the host starts a sync, and then exposed as typed settings for the
//! download subsystem.

pub mod config;
mod settings;

pub use config::validate;
pub use settings::{
    DEFAULT_NUM_THREADS, DEFAULT_REMOVE_MISSING_UNITS, DEFAULT_VALIDATE_UNITS, ImporterSettings,
    ProxySettings,
};

use crate::plugin::{PluginMetadata, TYPE_ID_ISO};

pub const IMPORTER_TYPE_ID: &str = "iso_importer";

pub fn metadata() -> PluginMetadata {
    PluginMetadata {
        id: IMPORTER_TYPE_ID,
        display_name: "ISO Importer",
        types: &[TYPE_ID_ISO],
    }
}
