// src/profiler/applicability.rs

//! Update applicability for RPM units
//!
//! A candidate unit is applicable to a consumer when the consumer already
//! has a package with the same name and architecture installed, and the
//! candidate's epoch/version/release is strictly newer. Fresh installs are
//! never reported; neither are cross-architecture matches.

use super::conduit::{ProfilerConduit, UnitFilter};
use super::package::{PackageIdentity, UnitKey};
use crate::error::Result;
use crate::plugin::TYPE_ID_RPM;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use tracing::{debug, info, warn};

/// A registered consumer and its reported installed-package profiles
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Consumer {
    pub id: String,
    /// Content type -> installed packages
    #[serde(default)]
    pub profiles: BTreeMap<String, Vec<PackageIdentity>>,
}

impl Consumer {
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            profiles: BTreeMap::new(),
        }
    }

    pub fn with_profile(mut self, content_type: &str, packages: Vec<PackageIdentity>) -> Self {
        self.profiles.insert(content_type.to_string(), packages);
        self
    }

    /// Installed RPMs, empty when the consumer never reported any
    pub fn installed_rpms(&self) -> &[PackageIdentity] {
        self.profiles
            .get(TYPE_ID_RPM)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

/// An installed package and the repository unit that would replace it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SupersededPackage {
    pub installed: PackageIdentity,
    pub available: UnitKey,
}

/// "name arch" -> the installed package a unit supersedes
pub type SupersededMap = BTreeMap<String, SupersededPackage>;

/// One applicable unit and the installed package(s) it would replace
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApplicabilityReport {
    pub unit: UnitKey,
    pub superseded: SupersededMap,
}

/// Applicable units grouped by repository id
pub type ApplicabilityMap = BTreeMap<String, Vec<ApplicabilityReport>>;

/// Index installed packages by "name arch"
///
/// When a profile lists the same key more than once, the newest install wins.
/// Entries without a name or version cannot be compared and are left out.
pub fn form_lookup_table(installed: &[PackageIdentity]) -> BTreeMap<String, &PackageIdentity> {
    let mut table: BTreeMap<String, &PackageIdentity> = BTreeMap::new();
    for pkg in installed {
        if pkg.name.is_empty() || pkg.version.is_empty() {
            debug!("Skipping incomplete profile entry: {:?}", pkg);
            continue;
        }
        let key = pkg.lookup_key();
        match table.get(&key) {
            Some(existing) if existing.evr() >= pkg.evr() => {}
            _ => {
                table.insert(key, pkg);
            }
        }
    }
    table
}

fn applicable_against(
    lookup: &BTreeMap<String, &PackageIdentity>,
    candidate: &UnitKey,
) -> (bool, SupersededMap) {
    let key = candidate.lookup_key();
    let mut superseded = BTreeMap::new();

    let Some(installed) = lookup.get(&key) else {
        return (false, superseded);
    };

    if candidate.evr() > installed.evr() {
        debug!(
            "{} {} supersedes installed {}",
            key,
            candidate.evr(),
            installed.evr()
        );
        superseded.insert(
            key,
            SupersededPackage {
                installed: (*installed).clone(),
                available: candidate.clone(),
            },
        );
        (true, superseded)
    } else {
        (false, superseded)
    }
}

/// Decide whether a single RPM is an update for the consumer
///
/// Returns the applicability flag and the superseded package keyed by
/// "name arch"; the map is empty when the RPM is not applicable.
pub fn rpm_applicable_to_consumer(consumer: &Consumer, rpm: &UnitKey) -> (bool, SupersededMap) {
    let lookup = form_lookup_table(consumer.installed_rpms());
    applicable_against(&lookup, rpm)
}

/// Determine which units in the given repositories are updates for a consumer
///
/// Every requested repository gets one entry, empty when nothing applies.
/// With no `repo_ids`, the consumer's bound repositories are used. When
/// `unit_keys` is non-empty only those units are considered, and only if the
/// repository actually contains them.
pub fn units_applicable(
    consumer: &Consumer,
    repo_ids: &[String],
    content_type: &str,
    unit_keys: &[UnitKey],
    filter: Option<&UnitFilter>,
    conduit: &dyn ProfilerConduit,
) -> Result<ApplicabilityMap> {
    let repo_ids = if repo_ids.is_empty() {
        conduit.get_bindings(&consumer.id)?
    } else {
        repo_ids.to_vec()
    };
    let mut seen = BTreeSet::new();
    let repo_ids: Vec<String> = repo_ids
        .into_iter()
        .filter(|repo_id| seen.insert(repo_id.clone()))
        .collect();

    let mut reports: ApplicabilityMap = repo_ids
        .iter()
        .map(|repo_id| (repo_id.clone(), Vec::new()))
        .collect();

    if !super::metadata().supports(content_type) {
        warn!(
            "Applicability requested for unsupported content type '{}'; nothing applies",
            content_type
        );
        return Ok(reports);
    }

    let lookup = form_lookup_table(consumer.installed_rpms());
    let requested: BTreeSet<&UnitKey> = unit_keys.iter().collect();

    for repo_id in &repo_ids {
        let candidates = conduit.get_units(repo_id, filter)?;
        let entry = reports.entry(repo_id.clone()).or_default();

        for unit in candidates {
            if !requested.is_empty() && !requested.contains(&unit) {
                continue;
            }
            let (applicable, superseded) = applicable_against(&lookup, &unit);
            if applicable {
                entry.push(ApplicabilityReport { unit, superseded });
            }
        }

        info!(
            "Consumer {}: {} applicable unit(s) in repository {}",
            consumer.id,
            entry.len(),
            repo_id
        );
    }

    Ok(reports)
}
