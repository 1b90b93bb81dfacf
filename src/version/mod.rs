// src/version/mod.rs

//! RPM version comparison
//!
//! This module provides epoch/version/release parsing and ordering with RPM
//! semantics. Version and release strings are compared segment by segment:
//!
//! - separators (anything that is not alphanumeric, `~` or `^`) are skipped
//! - a run of digits compares by magnitude, ignoring leading zeros
//! - a run of letters compares lexically
//! - a numeric segment outranks an alphabetic one
//! - when one side runs out of segments, the longer side is newer
//! - `~` sorts before anything, even the end of the string (pre-releases)
//! - `^` sorts after the end of the string but before any further segment
//!   (post-release snapshots)

use crate::error::{Error, Result};
use std::cmp::Ordering;
use std::fmt;

/// Epoch used when a package does not specify one
pub const DEFAULT_EPOCH: &str = "0";

/// Compare two version (or release) strings using RPM rules
pub fn rpmvercmp(a: &str, b: &str) -> Ordering {
    if a == b {
        return Ordering::Equal;
    }

    let mut one = a.as_bytes();
    let mut two = b.as_bytes();

    loop {
        one = skip_separators(one);
        two = skip_separators(two);

        match (one.first(), two.first()) {
            (Some(b'~'), Some(b'~')) => {
                one = &one[1..];
                two = &two[1..];
                continue;
            }
            (Some(b'~'), _) => return Ordering::Less,
            (_, Some(b'~')) => return Ordering::Greater,
            _ => {}
        }

        match (one.first(), two.first()) {
            (Some(b'^'), Some(b'^')) => {
                one = &one[1..];
                two = &two[1..];
                continue;
            }
            (None, Some(b'^')) => return Ordering::Less,
            (Some(b'^'), None) => return Ordering::Greater,
            (Some(_), Some(b'^')) => return Ordering::Greater,
            (Some(b'^'), Some(_)) => return Ordering::Less,
            _ => {}
        }

        if one.is_empty() || two.is_empty() {
            break;
        }

        let numeric = one[0].is_ascii_digit();
        let (seg1, rest1) = if numeric {
            split_run(one, u8::is_ascii_digit)
        } else {
            split_run(one, u8::is_ascii_alphabetic)
        };
        let (seg2, rest2) = if numeric {
            split_run(two, u8::is_ascii_digit)
        } else {
            split_run(two, u8::is_ascii_alphabetic)
        };

        // Segment types differ: numbers are newer than letters
        if seg2.is_empty() {
            return if numeric {
                Ordering::Greater
            } else {
                Ordering::Less
            };
        }

        let ord = if numeric {
            compare_numeric(seg1, seg2)
        } else {
            seg1.cmp(seg2)
        };
        if ord != Ordering::Equal {
            return ord;
        }

        one = rest1;
        two = rest2;
    }

    match (one.is_empty(), two.is_empty()) {
        (true, true) => Ordering::Equal,
        (false, _) => Ordering::Greater,
        (true, false) => Ordering::Less,
    }
}

fn skip_separators(s: &[u8]) -> &[u8] {
    let start = s
        .iter()
        .position(|b| b.is_ascii_alphanumeric() || *b == b'~' || *b == b'^')
        .unwrap_or(s.len());
    &s[start..]
}

fn split_run(s: &[u8], pred: fn(&u8) -> bool) -> (&[u8], &[u8]) {
    let end = s.iter().position(|b| !pred(b)).unwrap_or(s.len());
    s.split_at(end)
}

fn compare_numeric(a: &[u8], b: &[u8]) -> Ordering {
    let a = strip_leading_zeros(a);
    let b = strip_leading_zeros(b);
    // More digits means a bigger number; equal lengths compare digit-wise
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

fn strip_leading_zeros(s: &[u8]) -> &[u8] {
    let start = s.iter().position(|b| *b != b'0').unwrap_or(s.len());
    &s[start..]
}

/// An epoch/version/release triple
///
/// Equality follows RPM ordering, so `1.01` and `1.1` are equal versions.
#[derive(Debug, Clone)]
pub struct Evr {
    pub epoch: String,
    pub version: String,
    pub release: String,
}

impl Evr {
    /// Build a triple, defaulting a missing or empty epoch to `"0"`
    pub fn new(epoch: Option<&str>, version: &str, release: &str) -> Self {
        let epoch = match epoch.map(str::trim) {
            Some(e) if !e.is_empty() => e.to_string(),
            _ => DEFAULT_EPOCH.to_string(),
        };
        Self {
            epoch,
            version: version.to_string(),
            release: release.to_string(),
        }
    }

    /// Parse an EVR string
    ///
    /// Format: [epoch:]version[-release]
    /// Examples:
    /// - "1.2.3" → epoch=0, version="1.2.3", release=""
    /// - "2:1.2.3" → epoch=2, version="1.2.3", release=""
    /// - "1.2.3-4.el8" → epoch=0, version="1.2.3", release="4.el8"
    /// - "1:2.3.4-5.el8" → epoch=1, version="2.3.4", release="5.el8"
    pub fn parse(s: &str) -> Result<Self> {
        let (epoch, rest) = match s.split_once(':') {
            Some((e, r)) => (Some(e), r),
            None => (None, s),
        };

        if let Some(e) = epoch
            && !e.is_empty()
            && !e.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(Error::ParseError(format!(
                "Invalid epoch in version '{}'",
                s
            )));
        }

        // Release is everything after the last dash
        let (version, release) = rest.rsplit_once('-').unwrap_or((rest, ""));

        if version.is_empty() {
            return Err(Error::ParseError(format!(
                "Empty version component in '{}'",
                s
            )));
        }

        Ok(Self::new(epoch, version, release))
    }

    /// Compare two triples: epoch first, then version, then release
    pub fn compare(&self, other: &Evr) -> Ordering {
        rpmvercmp(&self.epoch, &other.epoch)
            .then_with(|| rpmvercmp(&self.version, &other.version))
            .then_with(|| rpmvercmp(&self.release, &other.release))
    }
}

impl fmt::Display for Evr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.epoch != DEFAULT_EPOCH {
            write!(f, "{}:", self.epoch)?;
        }
        write!(f, "{}", self.version)?;
        if !self.release.is_empty() {
            write!(f, "-{}", self.release)?;
        }
        Ok(())
    }
}

impl PartialEq for Evr {
    fn eq(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Equal
    }
}

impl Eq for Evr {}

impl Ord for Evr {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

impl PartialOrd for Evr {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
