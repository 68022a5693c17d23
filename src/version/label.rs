//! Dot-separated identifier sequences used for prerelease and build metadata

use std::cmp::Ordering;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::version::error::{ErrorKind, ParseError};

/// Prerelease identifier: numeric without leading zeros, or alphanumeric with hyphens
static PRERELEASE_IDENTIFIER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:0|[1-9][0-9]*|[0-9]*[a-zA-Z-][0-9a-zA-Z-]*)$")
        .expect("prerelease identifier pattern is valid")
});

/// Build identifier: any non-empty alphanumeric/hyphen run, leading zeros allowed
static BUILD_IDENTIFIER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9a-zA-Z-]+$").expect("build identifier pattern is valid")
});

/// Ordered sequence of identifiers, e.g. `alpha.1` or `sha.5114f85`
///
/// An empty label means "no label". Versions never store an empty label, so an
/// absent prerelease and an empty one are the same thing when ordering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Label(Vec<String>);

impl Label {
    /// Parse a prerelease label, accepting an optional leading `-`
    pub fn parse_prerelease(text: &str) -> Result<Self, ParseError> {
        let body = text.strip_prefix('-').unwrap_or(text);
        Self::prerelease_segment(body)
            .map_err(|_| ParseError::new("Label::parse_prerelease", text, ErrorKind::InvalidIdentifier))
    }

    /// Parse a build label, accepting an optional leading `+`
    pub fn parse_build(text: &str) -> Result<Self, ParseError> {
        let body = text.strip_prefix('+').unwrap_or(text);
        Self::build_segment(body)
            .map_err(|_| ParseError::new("Label::parse_build", text, ErrorKind::InvalidIdentifier))
    }

    /// Prerelease text that already had its `-` separator removed by the caller
    pub(crate) fn prerelease_segment(body: &str) -> Result<Self, ParseError> {
        Self::from_identifiers("Label::parse_prerelease", body, &PRERELEASE_IDENTIFIER)
    }

    /// Build text that already had its `+` separator removed by the caller
    pub(crate) fn build_segment(body: &str) -> Result<Self, ParseError> {
        Self::from_identifiers("Label::parse_build", body, &BUILD_IDENTIFIER)
    }

    fn from_identifiers(op: &'static str, body: &str, rule: &Regex) -> Result<Self, ParseError> {
        if body.is_empty() {
            return Ok(Self::default());
        }

        body.split('.')
            .map(|identifier| {
                if rule.is_match(identifier) {
                    Ok(identifier.to_string())
                } else {
                    Err(ParseError::new(op, body, ErrorKind::InvalidIdentifier))
                }
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }

    pub fn identifiers(&self) -> &[String] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

/// Compare two identifiers at the same position
///
/// Numeric identifiers compare numerically and always sort below alphanumeric
/// ones; alphanumeric identifiers compare in ASCII order.
fn compare_identifiers(a: &str, b: &str) -> Ordering {
    let numeric = |s: &str| s.bytes().all(|b| b.is_ascii_digit());

    match (numeric(a), numeric(b)) {
        (true, true) => {
            let a_digits = a.trim_start_matches('0');
            let b_digits = b.trim_start_matches('0');
            a_digits
                .len()
                .cmp(&b_digits.len())
                .then_with(|| a_digits.cmp(b_digits))
                // "01" and "1" only appear in build labels; keep Ord consistent with Eq
                .then_with(|| a.cmp(b))
        }
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => a.cmp(b),
    }
}

impl Ord for Label {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.is_empty(), other.is_empty()) {
            (true, true) => Ordering::Equal,
            // no label outranks any label: 1.0.0 > 1.0.0-alpha
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (false, false) => self
                .0
                .iter()
                .zip(&other.0)
                .map(|(a, b)| compare_identifiers(a, b))
                .find(|ordering| ordering.is_ne())
                .unwrap_or_else(|| self.0.len().cmp(&other.0.len())),
        }
    }
}

impl PartialOrd for Label {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join("."))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn label(identifiers: &[&str]) -> Label {
        Label(identifiers.iter().map(|s| s.to_string()).collect())
    }

    #[rstest]
    #[case("", "")]
    #[case("alpha", "alpha")]
    #[case("alpha.1", "alpha.1")]
    #[case("alpha.test.1", "alpha.test.1")]
    #[case("1", "1")]
    #[case("-", "")]
    #[case("-alpha.1", "alpha.1")]
    #[case("-2", "2")]
    #[case("--01", "-01")]
    fn parse_prerelease_accepts_valid_labels(#[case] input: &str, #[case] rendered: &str) {
        let label = Label::parse_prerelease(input).unwrap();
        assert_eq!(label.to_string(), rendered);
    }

    #[rstest]
    #[case(".alpha")]
    #[case(".alpha.")]
    #[case("alpha.")]
    #[case("..alpha")]
    #[case("alpha..")]
    #[case(".alpha.1")]
    #[case("alpha.1.")]
    #[case(".")]
    #[case("01")]
    #[case("-.alpha")]
    #[case("-alpha.")]
    #[case("-..alpha..")]
    #[case("-.")]
    #[case("-01")]
    #[case("alpha.007")]
    #[case("al_pha")]
    fn parse_prerelease_rejects_invalid_labels(#[case] input: &str) {
        let err = Label::parse_prerelease(input).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidIdentifier);
        assert_eq!(err.input(), input);
    }

    #[rstest]
    #[case("", "")]
    #[case("0096f03392876480d5ee52bada55679e", "0096f03392876480d5ee52bada55679e")]
    #[case("nightly.1", "nightly.1")]
    #[case("nightly.0096f03392876480d5ee52bada55679e", "nightly.0096f03392876480d5ee52bada55679e")]
    #[case("+", "")]
    #[case("+nightly.2", "nightly.2")]
    #[case("001", "001")]
    fn parse_build_accepts_valid_labels(#[case] input: &str, #[case] rendered: &str) {
        let label = Label::parse_build(input).unwrap();
        assert_eq!(label.to_string(), rendered);
    }

    #[rstest]
    #[case(".nightly")]
    #[case("nightly.")]
    #[case("..nightly..")]
    #[case(".0096f03392876480d5ee52bada55679e.")]
    #[case(".")]
    #[case("+.nightly")]
    #[case("+nightly..")]
    #[case("+.")]
    #[case("night ly")]
    fn parse_build_rejects_invalid_labels(#[case] input: &str) {
        let err = Label::parse_build(input).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidIdentifier);
    }

    #[rstest]
    #[case(&[], &["alpha"], Ordering::Greater)]
    #[case(&[], &[], Ordering::Equal)]
    #[case(&["alpha"], &[], Ordering::Less)]
    #[case(&["alpha", "1"], &["alpha", "0"], Ordering::Greater)]
    #[case(&["alpha", "0"], &["alpha", "0"], Ordering::Equal)]
    #[case(&["alpha", "0"], &["alpha", "1"], Ordering::Less)]
    #[case(&["alpha", "1"], &["alpha"], Ordering::Greater)]
    #[case(&["alpha"], &["alpha", "1"], Ordering::Less)]
    #[case(&["alpha"], &["beta"], Ordering::Less)]
    #[case(&["rc", "1"], &["beta", "11"], Ordering::Greater)]
    fn label_ordering(
        #[case] source: &[&str],
        #[case] target: &[&str],
        #[case] expected: Ordering,
    ) {
        assert_eq!(label(source).cmp(&label(target)), expected);
    }

    // Numeric identifiers compare by value, not by their text.
    #[rstest]
    #[case(&["9"], &["10"], Ordering::Less)]
    #[case(&["alpha", "9"], &["alpha", "10"], Ordering::Less)]
    #[case(&["rc", "2"], &["rc", "11"], Ordering::Less)]
    fn numeric_identifiers_compare_by_value(
        #[case] source: &[&str],
        #[case] target: &[&str],
        #[case] expected: Ordering,
    ) {
        assert_eq!(label(source).cmp(&label(target)), expected);
    }

    // Plain string comparison would order these the other way round.
    #[rstest]
    #[case("9", "10")]
    #[case("2", "11")]
    fn numeric_identifiers_differ_from_plain_string_order(#[case] lower: &str, #[case] higher: &str) {
        assert_eq!(lower.cmp(higher), Ordering::Greater);
        assert_eq!(compare_identifiers(lower, higher), Ordering::Less);
    }

    #[rstest]
    #[case("1", "alpha")]
    #[case("999", "a")]
    #[case("0", "-")]
    fn numeric_identifiers_sort_below_alphanumeric(#[case] numeric: &str, #[case] alphanumeric: &str) {
        assert_eq!(compare_identifiers(numeric, alphanumeric), Ordering::Less);
        assert_eq!(compare_identifiers(alphanumeric, numeric), Ordering::Greater);
    }

    #[test]
    fn leading_zeros_in_build_identifiers_stay_consistent_with_equality() {
        assert_eq!(compare_identifiers("01", "1"), Ordering::Less);
        assert_eq!(compare_identifiers("1", "1"), Ordering::Equal);
    }
}
