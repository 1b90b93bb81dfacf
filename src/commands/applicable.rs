// src/commands/applicable.rs
//! Applicability report command

use anyhow::{Context, Result};
use isoplug::config::load_document;
use isoplug::{ApplicabilityMap, Consumer, StaticConduit, UnitFilter, UnitKey, units_applicable};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::info;

/// Consumer document: the consumer itself plus the repositories it is bound to
#[derive(Debug, Deserialize)]
struct ConsumerDocument {
    #[serde(flatten)]
    consumer: Consumer,
    #[serde(default)]
    bindings: Vec<String>,
}

fn build_filter(names: &[String], arches: &[String]) -> Option<UnitFilter> {
    if names.is_empty() && arches.is_empty() {
        return None;
    }
    Some(UnitFilter {
        names: (!names.is_empty()).then(|| names.iter().cloned().collect()),
        arches: (!arches.is_empty()).then(|| arches.iter().cloned().collect()),
    })
}

fn evaluate(
    profile: &Path,
    units: &Path,
    repos: &[String],
    content_type: &str,
    filter: Option<&UnitFilter>,
) -> Result<ApplicabilityMap> {
    let document: ConsumerDocument = load_document(profile)
        .with_context(|| format!("Failed to load consumer profile from {}", profile.display()))?;
    let repo_units: BTreeMap<String, Vec<UnitKey>> = load_document(units)
        .with_context(|| format!("Failed to load repository units from {}", units.display()))?;

    let conduit = document
        .bindings
        .iter()
        .fold(StaticConduit::new(), |conduit, repo_id| {
            conduit.with_binding(&document.consumer.id, repo_id)
        });
    let conduit = repo_units
        .into_iter()
        .fold(conduit, |conduit, (repo_id, units)| {
            conduit.with_units(&repo_id, units)
        });

    Ok(units_applicable(
        &document.consumer,
        repos,
        content_type,
        &[],
        filter,
        &conduit,
    )?)
}

/// Print the applicability report for a consumer as JSON
pub fn cmd_applicable(
    profile: &Path,
    units: &Path,
    repos: &[String],
    content_type: &str,
    names: &[String],
    arches: &[String],
) -> Result<()> {
    info!("Evaluating applicability for profile: {}", profile.display());
    let filter = build_filter(names, arches);
    let reports = evaluate(profile, units, repos, content_type, filter.as_ref())?;

    let total: usize = reports.values().map(Vec::len).sum();
    info!("{} applicable unit(s) across {} repositories", total, reports.len());
    println!("{}", serde_json::to_string_pretty(&reports)?);
    Ok(())
}
