// src/lib.rs

//! ISO content plugins
//!
//! Plugins a content-management server loads to sync, publish and evaluate
//! content:
//!
//! - Importer: vets feed/proxy/SSL/download settings before an ISO sync
//! - Distributor: vets HTTP/HTTPS publish settings
//! - Profiler: decides which RPM units are updates for a consumer
//!
//! # Architecture
//!
//! - Pure functions: validation and applicability never perform I/O
//! - Single-error validation: rules run in a fixed order, first failure wins
//! - Host seams: repository bindings and units come through `ProfilerConduit`

pub mod config;
pub mod distributor;
mod error;
pub mod importer;
pub mod plugin;
pub mod profiler;
pub mod version;

pub use config::{ConfigValue, Configuration, PluginCallConfiguration, ValidationResult};
pub use distributor::DistributorSettings;
pub use error::{Error, Result};
pub use importer::{ImporterSettings, ProxySettings};
pub use plugin::{PluginMetadata, all_plugins};
pub use profiler::{
    ApplicabilityMap, ApplicabilityReport, Consumer, PackageIdentity, ProfilerConduit,
    StaticConduit, SupersededMap, SupersededPackage, UnitFilter, UnitKey,
    rpm_applicable_to_consumer, units_applicable,
};
pub use version::{Evr, rpmvercmp};
