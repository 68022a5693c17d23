//! Partial versions: version fragments with optional trailing wildcards

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::version::error::{ErrorKind, ParseError};
use crate::version::label::Label;

/// Returns true if the identifier stands for "any value": `*`, `x`, `X` or empty
pub fn is_wildcard(identifier: &str) -> bool {
    matches!(identifier, "" | "*" | "x" | "X")
}

/// A version fragment such as `1`, `1.2.x`, `*` or `1.2.3-rc.1+build.5`
///
/// Unset slots are strictly trailing: once a slot is `None`, every slot to its
/// right is `None` as well, and a version with any unset slot carries no labels.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PartialVersion {
    pub(crate) major: Option<u64>,
    pub(crate) minor: Option<u64>,
    pub(crate) patch: Option<u64>,
    pub(crate) prerelease: Option<Label>,
    pub(crate) build: Option<Label>,
}

impl PartialVersion {
    /// Parse a version fragment, allowing wildcards and omitted trailing identifiers
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        decode("PartialVersion::parse", text)
    }

    pub fn major(&self) -> Option<u64> {
        self.major
    }

    pub fn minor(&self) -> Option<u64> {
        self.minor
    }

    pub fn patch(&self) -> Option<u64> {
        self.patch
    }

    pub fn prerelease(&self) -> Option<&Label> {
        self.prerelease.as_ref()
    }

    pub fn build(&self) -> Option<&Label> {
        self.build.as_ref()
    }

    pub fn is_prerelease(&self) -> bool {
        self.prerelease.is_some()
    }

    pub fn has_build(&self) -> bool {
        self.build.is_some()
    }

    /// True when no numeric identifier is set, e.g. `*` or an empty string
    pub fn is_wildcard(&self) -> bool {
        self.major.is_none()
    }

    /// True when major, minor and patch are all set
    pub fn is_complete(&self) -> bool {
        self.patch.is_some()
    }

    pub fn cmp_major(&self, other: &PartialVersion) -> Ordering {
        self.major.cmp(&other.major)
    }

    pub fn cmp_minor(&self, other: &PartialVersion) -> Ordering {
        self.minor.cmp(&other.minor)
    }

    pub fn cmp_patch(&self, other: &PartialVersion) -> Ordering {
        self.patch.cmp(&other.patch)
    }

    /// Compare the release triple, stopping at the first unset slot of `self`
    ///
    /// This makes `1.2` equal to every `1.2.x` release, which is what range
    /// boundaries written as partial versions expect.
    pub fn cmp_release(&self, other: &PartialVersion) -> Ordering {
        let slots = [
            (self.major, other.major),
            (self.minor, other.minor),
            (self.patch, other.patch),
        ];

        for (own, theirs) in slots {
            let Some(own) = own else {
                break;
            };
            match Some(own).cmp(&theirs) {
                Ordering::Equal => continue,
                unequal => return unequal,
            }
        }

        Ordering::Equal
    }

    /// Compare prerelease labels; a release always outranks its prereleases
    pub fn cmp_prerelease(&self, other: &PartialVersion) -> Ordering {
        match (&self.prerelease, &other.prerelease) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Greater,
            (Some(_), None) => Ordering::Less,
            (Some(own), Some(theirs)) => own.cmp(theirs),
        }
    }

    /// Release comparison first, prerelease as tie-break; build is ignored
    pub fn compare(&self, other: &PartialVersion) -> Ordering {
        self.cmp_release(other)
            .then_with(|| self.cmp_prerelease(other))
    }

    /// Render only the numeric identifiers that are set, e.g. `1.2` for `1.2.x`
    pub fn release(&self) -> String {
        [self.major, self.minor, self.patch]
            .into_iter()
            .map_while(|slot| slot.map(|value| value.to_string()))
            .collect::<Vec<_>>()
            .join(".")
    }
}

/// Decode a version fragment, reporting failures under `op`
///
/// Build metadata is split off first, then the prerelease, then the release is
/// split into at most three identifiers. Release shape is validated before any
/// label content.
pub(crate) fn decode(op: &'static str, text: &str) -> Result<PartialVersion, ParseError> {
    let invalid = || ParseError::new(op, text, ErrorKind::InvalidVersion);

    let (rest, build) = match text.split_once('+') {
        Some((rest, build)) => (rest, Some(build)),
        None => (text, None),
    };
    let (release, prerelease) = match rest.split_once('-') {
        Some((release, prerelease)) => (release, Some(prerelease)),
        None => (rest, None),
    };
    let labelled = prerelease.is_some() || build.is_some();

    let identifiers: Vec<&str> = release.split('.').collect();
    if identifiers.len() > 3 {
        return Err(invalid());
    }

    let mut slots = [None; 3];
    for (index, identifier) in identifiers.iter().enumerate() {
        if is_wildcard(identifier) {
            let last = index + 1 == identifiers.len();
            // "1." and "1..2" are malformed, only a whole-empty fragment is a wildcard
            let misplaced_empty = identifier.is_empty() && index > 0;
            if !last || misplaced_empty || labelled {
                return Err(invalid());
            }
            break;
        }
        slots[index] = Some(parse_numeric(identifier).ok_or_else(invalid)?);
    }

    let [major, minor, patch] = slots;
    if patch.is_none() && labelled {
        return Err(invalid());
    }
    // a separator needs a label after it
    if prerelease == Some("") || build == Some("") {
        return Err(invalid());
    }

    let prerelease = prerelease
        .map(Label::prerelease_segment)
        .transpose()
        .map_err(|err| ParseError::wrap(op, text, err))?;
    let build = build
        .map(Label::build_segment)
        .transpose()
        .map_err(|err| ParseError::wrap(op, text, err))?;

    Ok(PartialVersion {
        major,
        minor,
        patch,
        prerelease,
        build,
    })
}

/// Numeric identifier: ASCII digits, no leading zero except `0` itself
fn parse_numeric(identifier: &str) -> Option<u64> {
    let digits_only = !identifier.is_empty() && identifier.bytes().all(|b| b.is_ascii_digit());
    let leading_zero = identifier.len() > 1 && identifier.starts_with('0');
    if !digits_only || leading_zero {
        return None;
    }
    identifier.parse().ok()
}

impl fmt::Display for PartialVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.release())?;
        if let Some(prerelease) = &self.prerelease {
            write!(f, "-{prerelease}")?;
        }
        if let Some(build) = &self.build {
            write!(f, "+{build}")?;
        }
        Ok(())
    }
}

impl FromStr for PartialVersion {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for PartialVersion {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for PartialVersion {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Self::parse(&text).map_err(serde::de::Error::custom)
    }
}
