// src/profiler/conduit.rs

//! Host query seam for the profiler
//!
//! The host owns repository bindings and content units; the profiler only
//! reads them through [`ProfilerConduit`].

use super::package::UnitKey;
use crate::error::Result;
use serde::Deserialize;
use std::collections::{BTreeMap, BTreeSet};

/// Unit-key criteria narrowing which repository units are returned
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct UnitFilter {
    /// Allowed package names; `None` allows any
    #[serde(default)]
    pub names: Option<BTreeSet<String>>,
    /// Allowed architectures; `None` allows any
    #[serde(default)]
    pub arches: Option<BTreeSet<String>>,
}

impl UnitFilter {
    pub fn matches(&self, unit: &UnitKey) -> bool {
        self.names.as_ref().is_none_or(|n| n.contains(&unit.name))
            && self.arches.as_ref().is_none_or(|a| a.contains(&unit.arch))
    }
}

/// Read-only queries the profiler makes against the host
pub trait ProfilerConduit {
    /// Repositories the consumer is bound to
    fn get_bindings(&self, consumer_id: &str) -> Result<Vec<String>>;

    /// Units available in a repository, optionally narrowed by `filter`
    fn get_units(&self, repo_id: &str, filter: Option<&UnitFilter>) -> Result<Vec<UnitKey>>;
}

/// In-memory conduit over fixed bindings and repository contents
#[derive(Debug, Clone, Default)]
pub struct StaticConduit {
    bindings: BTreeMap<String, Vec<String>>,
    units: BTreeMap<String, Vec<UnitKey>>,
}

impl StaticConduit {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_binding(mut self, consumer_id: &str, repo_id: &str) -> Self {
        self.bindings
            .entry(consumer_id.to_string())
            .or_default()
            .push(repo_id.to_string());
        self
    }

    pub fn with_units(mut self, repo_id: &str, units: Vec<UnitKey>) -> Self {
        self.units.entry(repo_id.to_string()).or_default().extend(units);
        self
    }
}

impl ProfilerConduit for StaticConduit {
    fn get_bindings(&self, consumer_id: &str) -> Result<Vec<String>> {
        Ok(self.bindings.get(consumer_id).cloned().unwrap_or_default())
    }

    fn get_units(&self, repo_id: &str, filter: Option<&UnitFilter>) -> Result<Vec<UnitKey>> {
        let units = self.units.get(repo_id).map(Vec::as_slice).unwrap_or_default();
        Ok(units
            .iter()
            .filter(|unit| filter.is_none_or(|f| f.matches(unit)))
            .cloned()
            .collect())
    }
}
