// src/profiler/mod.rs

//! RPM package profiler
//!
//! Compares a consumer's installed package profile against repository
//! content to decide which RPMs are applicable updates.

mod applicability;
mod conduit;
mod package;

pub use applicability::{
    ApplicabilityMap, ApplicabilityReport, Consumer, SupersededMap, SupersededPackage,
    form_lookup_table, rpm_applicable_to_consumer, units_applicable,
};
pub use conduit::{ProfilerConduit, StaticConduit, UnitFilter};
pub use package::{PackageIdentity, UnitKey, lookup_key};

use crate::plugin::{PluginMetadata, TYPE_ID_RPM};

pub const PROFILER_TYPE_ID: &str = "rpm_profiler";

pub fn metadata() -> PluginMetadata {
    PluginMetadata {
        id: PROFILER_TYPE_ID,
        display_name: "RPM Profiler",
        types: &[TYPE_ID_RPM],
    }
}
