// src/profiler/package.rs

//! Package identities as reported by consumers and as stored in repositories

use crate::version::Evr;
use serde::{Deserialize, Deserializer, Serialize};

/// An installed package from a consumer's profile
///
/// Missing fields default to empty so one sparse entry cannot sink a whole
/// profile; such entries are skipped during lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageIdentity {
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "deserialize_epoch")]
    pub epoch: Option<String>,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub release: String,
    #[serde(default)]
    pub arch: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vendor: Option<String>,
}

impl PackageIdentity {
    pub fn evr(&self) -> Evr {
        Evr::new(self.epoch.as_deref(), &self.version, &self.release)
    }

    /// "name arch" key identifying the same logical package on one machine
    pub fn lookup_key(&self) -> String {
        lookup_key(&self.name, &self.arch)
    }
}

/// Unit key of an RPM in a repository
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct UnitKey {
    pub name: String,
    #[serde(default, deserialize_with = "deserialize_epoch")]
    pub epoch: Option<String>,
    pub version: String,
    #[serde(default)]
    pub release: String,
    #[serde(default)]
    pub arch: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checksum: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checksumtype: Option<String>,
}

impl UnitKey {
    pub fn evr(&self) -> Evr {
        Evr::new(self.epoch.as_deref(), &self.version, &self.release)
    }

    pub fn lookup_key(&self) -> String {
        lookup_key(&self.name, &self.arch)
    }
}

pub fn lookup_key(name: &str, arch: &str) -> String {
    format!("{} {}", name, arch)
}

/// Profiles report epochs as strings or bare integers; accept both
fn deserialize_epoch<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawEpoch {
        Int(i64),
        Str(String),
    }

    Ok(Option::<RawEpoch>::deserialize(deserializer)?.map(|raw| match raw {
        RawEpoch::Int(i) => i.to_string(),
        RawEpoch::Str(s) => s,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_epoch_accepts_int_string_null_and_missing() {
        let pkgs: Vec<PackageIdentity> = serde_json::from_str(
            r#"[
                {"name": "a", "epoch": 1, "version": "1.0", "release": "1", "arch": "noarch"},
                {"name": "b", "epoch": "2", "version": "1.0", "release": "1", "arch": "noarch"},
                {"name": "c", "epoch": null, "version": "1.0", "release": "1", "arch": "noarch"},
                {"name": "d", "version": "1.0", "release": "1", "arch": "noarch"}
            ]"#,
        )
        .unwrap();

        assert_eq!(pkgs[0].epoch.as_deref(), Some("1"));
        assert_eq!(pkgs[1].epoch.as_deref(), Some("2"));
        assert_eq!(pkgs[2].epoch, None);
        assert_eq!(pkgs[3].epoch, None);
        assert_eq!(pkgs[3].evr().epoch, "0");
    }

    #[test]
    fn test_lookup_key() {
        let unit = UnitKey {
            name: "emoticons".to_string(),
            epoch: None,
            version: "0.1".to_string(),
            release: "2".to_string(),
            arch: "x86_64".to_string(),
            checksum: None,
            checksumtype: None,
        };
        assert_eq!(unit.lookup_key(), "emoticons x86_64");
    }
}
