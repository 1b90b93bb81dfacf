// src/cli/mod.rs
//! CLI definitions for isoplug
//!
//! This module contains the command-line interface definitions using clap.
//! The actual command implementations are in the `commands` module.
//!
//! Commands:
//! - `validate-importer` - Validate (layered) ISO importer configuration
//! - `validate-distributor` - Validate ISO distributor configuration
//! - `applicable` - Report RPM updates applicable to a consumer profile
//! - `plugins` - Show plugin descriptors

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "isoplug")]
#[command(version)]
#[command(about = "Validate ISO plugin configuration and evaluate RPM update applicability", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate an ISO importer configuration
    ///
    /// Documents are JSON or TOML (chosen by extension). Layers are merged
    /// with override > repository config > plugin defaults before validation.
    ValidateImporter {
        /// Repository importer configuration document
        config: PathBuf,

        /// Plugin-wide default configuration document
        #[arg(long, value_name = "FILE")]
        plugin_defaults: Option<PathBuf>,

        /// Per-call override configuration document
        #[arg(long = "override", value_name = "FILE")]
        override_config: Option<PathBuf>,
    },

    /// Validate an ISO distributor configuration
    ValidateDistributor {
        /// Distributor configuration document
        config: PathBuf,
    },

    /// Report RPM units that are updates for a consumer
    Applicable {
        /// Consumer document: {"id": ..., "profiles": {"rpm": [...]}, "bindings": [...]}
        #[arg(long, value_name = "FILE")]
        profile: PathBuf,

        /// Repository units document: {"repo-id": [unit keys...]}
        #[arg(long, value_name = "FILE")]
        units: PathBuf,

        /// Repository to evaluate (repeatable; defaults to the consumer's bindings)
        #[arg(long = "repo", value_name = "REPO_ID")]
        repos: Vec<String>,

        /// Content type of the units
        #[arg(long, default_value = "rpm")]
        content_type: String,

        /// Only consider units with this name (repeatable)
        #[arg(long = "name", value_name = "NAME")]
        names: Vec<String>,

        /// Only consider units with this architecture (repeatable)
        #[arg(long = "arch", value_name = "ARCH")]
        arches: Vec<String>,
    },

    /// Show plugin descriptors as JSON
    Plugins,
}
