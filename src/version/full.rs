//! Full versions: every numeric identifier present, no wildcards

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::version::error::{ErrorKind, ParseError};
use crate::version::label::Label;
use crate::version::partial::{PartialVersion, decode};

/// A concrete semantic version such as `1.2.3` or `1.2.3-rc.1+sha.5114f85`
///
/// This is what constraints are evaluated against. Equality and hashing take
/// the build label into account; [`FullVersion::compare`] (semver precedence)
/// does not.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FullVersion(PartialVersion);

impl FullVersion {
    /// Parse a complete `major.minor.patch[-prerelease][+build]` version
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        const OP: &str = "FullVersion::parse";

        let version = decode(OP, text)?;
        if !version.is_complete() {
            return Err(ParseError::new(OP, text, ErrorKind::InvalidVersion));
        }

        Ok(Self(version))
    }

    /// Build a release version from already validated numbers
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self(PartialVersion {
            major: Some(major),
            minor: Some(minor),
            patch: Some(patch),
            prerelease: None,
            build: None,
        })
    }

    /// Replace the prerelease label; an empty label removes it
    pub fn with_prerelease(mut self, label: Label) -> Self {
        self.0.prerelease = Some(label).filter(|label| !label.is_empty());
        self
    }

    /// Replace the build label; an empty label removes it
    pub fn with_build(mut self, label: Label) -> Self {
        self.0.build = Some(label).filter(|label| !label.is_empty());
        self
    }

    pub fn major(&self) -> u64 {
        self.0.major.unwrap_or_default()
    }

    pub fn minor(&self) -> u64 {
        self.0.minor.unwrap_or_default()
    }

    pub fn patch(&self) -> u64 {
        self.0.patch.unwrap_or_default()
    }

    pub fn prerelease(&self) -> Option<&Label> {
        self.0.prerelease()
    }

    pub fn build(&self) -> Option<&Label> {
        self.0.build()
    }

    pub fn is_prerelease(&self) -> bool {
        self.0.is_prerelease()
    }

    pub fn has_build(&self) -> bool {
        self.0.has_build()
    }

    /// The version viewed as a partial version, for the slot-wise comparisons
    pub fn as_partial(&self) -> &PartialVersion {
        &self.0
    }

    /// `major.minor.patch` without any label
    pub fn release(&self) -> String {
        self.0.release()
    }

    /// Semver precedence: release triple, then prerelease; build is ignored
    pub fn compare(&self, other: &FullVersion) -> Ordering {
        self.0.compare(&other.0)
    }
}

impl Ord for FullVersion {
    /// Precedence first, build label as the final tie-break
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
            .then_with(|| self.build().cmp(&other.build()))
    }
}

impl PartialOrd for FullVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl From<FullVersion> for PartialVersion {
    fn from(version: FullVersion) -> Self {
        version.0
    }
}

impl fmt::Display for FullVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for FullVersion {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for FullVersion {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for FullVersion {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Self::parse(&text).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("1.2.3", "", "", false, false)]
    #[case("1.2.3", "alpha.1", "", true, false)]
    #[case("1.2.3", "", "0096f03392876480d5ee52bada55679e", false, true)]
    #[case("1.2.3", "alpha.1", "0096f03392876480d5ee52bada55679e", true, true)]
    fn parse_splits_release_and_labels(
        #[case] release: &str,
        #[case] prerelease: &str,
        #[case] build: &str,
        #[case] is_prerelease: bool,
        #[case] has_build: bool,
    ) {
        let mut text = release.to_string();
        if !prerelease.is_empty() {
            text.push_str(&format!("-{prerelease}"));
        }
        if !build.is_empty() {
            text.push_str(&format!("+{build}"));
        }

        let version = FullVersion::parse(&text).unwrap();

        assert_eq!(version.to_string(), text);
        assert_eq!(version.release(), release);
        assert_eq!(version.is_prerelease(), is_prerelease);
        assert_eq!(version.has_build(), has_build);
        assert_eq!(
            version.prerelease().map(ToString::to_string).unwrap_or_default(),
            prerelease
        );
        assert_eq!(
            version.build().map(ToString::to_string).unwrap_or_default(),
            build
        );
    }

    #[rstest]
    #[case("1")]
    #[case("1.2")]
    #[case("aaa")]
    #[case("a.2.3")]
    #[case("1.a.3")]
    #[case("1.2.a")]
    #[case("1.2.3.4")]
    #[case("1-alpha.1")]
    #[case("1-beta+8baef20a23d16b4204f5ffc6bdb11ad1")]
    #[case("1+8baef20a23d16b4204f5ffc6bdb11ad1")]
    #[case("1.2-alpha.1")]
    #[case("1.2+8baef20a23d16b4204f5ffc6bdb11ad1")]
    #[case("1.2.x")]
    #[case("*")]
    #[case("")]
    #[case("v1.2.3")]
    fn parse_rejects_incomplete_or_malformed_versions(#[case] input: &str) {
        let err = FullVersion::parse(input).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidVersion);
        assert_eq!(err.op(), "FullVersion::parse");
    }

    #[test]
    fn programmatic_construction_matches_parsing() {
        let built = FullVersion::new(1, 2, 3)
            .with_prerelease(Label::parse_prerelease("rc.1").unwrap())
            .with_build(Label::parse_build("sha.5114f85").unwrap());

        assert_eq!(built, FullVersion::parse("1.2.3-rc.1+sha.5114f85").unwrap());
        assert_eq!((built.major(), built.minor(), built.patch()), (1, 2, 3));
    }

    #[test]
    fn empty_labels_are_dropped() {
        let version = FullVersion::new(1, 0, 0)
            .with_prerelease(Label::default())
            .with_build(Label::default());

        assert!(!version.is_prerelease());
        assert!(!version.has_build());
        assert_eq!(version.to_string(), "1.0.0");
    }

    #[rstest]
    #[case("1.0.0+build.1", "1.0.0+build.2")]
    #[case("1.0.0", "1.0.0+build")]
    fn build_metadata_does_not_affect_precedence(#[case] a: &str, #[case] b: &str) {
        let a = FullVersion::parse(a).unwrap();
        let b = FullVersion::parse(b).unwrap();

        assert_eq!(a.compare(&b), Ordering::Equal);
        assert_ne!(a, b);
        assert_eq!(a.cmp(&b), Ordering::Less);
    }

    #[test]
    fn sorting_uses_semver_precedence() {
        let mut versions: Vec<FullVersion> = [
            "1.0.0", "1.0.0-rc.1", "1.0.0-alpha", "0.9.0", "1.0.0-alpha.1", "1.0.0-beta.11",
            "1.0.0-beta.2", "1.0.0-beta", "2.0.0",
        ]
        .into_iter()
        .map(|text| FullVersion::parse(text).unwrap())
        .collect();
        versions.sort();

        let sorted: Vec<String> = versions.iter().map(ToString::to_string).collect();
        assert_eq!(
            sorted,
            [
                "0.9.0",
                "1.0.0-alpha",
                "1.0.0-alpha.1",
                "1.0.0-beta",
                "1.0.0-beta.2",
                "1.0.0-beta.11",
                "1.0.0-rc.1",
                "1.0.0",
                "2.0.0",
            ]
        );
    }

    #[test]
    fn serde_round_trips_through_strings() {
        let version: FullVersion = serde_json::from_str("\"1.2.3-rc.1\"").unwrap();
        assert_eq!(version, FullVersion::parse("1.2.3-rc.1").unwrap());
        assert_eq!(serde_json::to_string(&version).unwrap(), "\"1.2.3-rc.1\"");

        assert!(serde_json::from_str::<FullVersion>("\"1.2\"").is_err());
    }
}
