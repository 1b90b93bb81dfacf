// tests/common/mod.rs

//! Shared test utilities and fixtures for integration tests.

#![allow(dead_code)]

use isoplug::profiler::PackageIdentity;
use isoplug::{Consumer, StaticConduit, UnitKey};

pub const CONSUMER_ID: &str = "test-consumer";
pub const REPO_ID: &str = "test-repo";

/// Installed package fixture (no epoch, as many profiles report it)
pub fn installed(name: &str, version: &str, release: &str, arch: &str) -> PackageIdentity {
    PackageIdentity {
        name: name.to_string(),
        epoch: None,
        version: version.to_string(),
        release: release.to_string(),
        arch: arch.to_string(),
        vendor: Some("Test Vendor".to_string()),
    }
}

/// Repository unit fixture with an explicit "0" epoch
pub fn rpm(name: &str, version: &str, release: &str, arch: &str) -> UnitKey {
    UnitKey {
        name: name.to_string(),
        epoch: Some("0".to_string()),
        version: version.to_string(),
        release: release.to_string(),
        arch: arch.to_string(),
        checksum: Some(format!("{}-{}-{}.{}", name, version, release, arch)),
        checksumtype: Some("sha256".to_string()),
    }
}

/// Consumer with an RPM profile
pub fn consumer_with(packages: Vec<PackageIdentity>) -> Consumer {
    Consumer::new(CONSUMER_ID).with_profile("rpm", packages)
}

/// Consumer with emoticons 0.0.1-1 installed for the given arch
pub fn emoticons_consumer(arch: &str) -> Consumer {
    consumer_with(vec![installed("emoticons", "0.0.1", "1", arch)])
}

/// Conduit binding the test consumer to one repository holding `units`
pub fn bound_repo(units: Vec<UnitKey>) -> StaticConduit {
    StaticConduit::new()
        .with_binding(CONSUMER_ID, REPO_ID)
        .with_units(REPO_ID, units)
}
