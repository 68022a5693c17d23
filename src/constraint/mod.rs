//! Version constraints: parsing requirement strings and matching versions
//!
//! A [`Constraint`] is a closed set of matching strategies. Atomic variants own
//! a single reference [`PartialVersion`], combinators own their members.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │ "^1.2 || 3" │────▶│   Parser    │────▶│ Constraint  │
//! │   (text)    │     │ (dispatch)  │     │   (enum)    │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!                                                │
//!                                                ▼
//!                                         ┌─────────────┐
//!                                         │ Comparator  │
//!                                         │  (matches)  │
//!                                         └─────────────┘
//! ```
//!
//! Supported syntax:
//! - `*`, `x`, `X` or empty - any release
//! - `1.2.3`, `=1.2.3`, `1.2`, `1.x` - exact match on the specified slots
//! - `>1.2.3`, `>=1.2.3`, `<1.2.3`, `<=1.2.3` - comparison operators
//! - `^1.2.3` - compatible with version (leftmost non-zero slot pinned)
//! - `~1.2.3` - patch-level changes (minor pinned when specified)
//! - `1.2.3 - 2.3.4` - inclusive range
//! - `>=1.2.3 <2.0.0` - all whitespace separated members must match
//! - `^1.0.0 || ^2.0.0` - any `||` separated member must match
//!
//! # Modules
//!
//! - [`comparator`]: Matching rules for each atomic variant
//! - [`parser`]: Variant constructors and the ordered dispatch table

pub mod comparator;
pub mod parser;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::version::error::ParseError;
use crate::version::full::FullVersion;
use crate::version::partial::PartialVersion;

/// A predicate over [`FullVersion`]s
///
/// Constraints hold no mutable state; a single instance can be matched from
/// many threads at once.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Constraint {
    /// Any release (`*`)
    Any,
    /// Exact match on the slots set in the reference (`=1.2`, `1.2.3`)
    Equal(PartialVersion),
    /// Strictly higher than the reference (`>1.2.3`)
    GreaterThan(PartialVersion),
    /// Higher than or equal to the reference (`>=1.2.3`)
    GreaterEqual(PartialVersion),
    /// Strictly lower than the reference (`<1.2.3`)
    LessThan(PartialVersion),
    /// Lower than or equal to the reference (`<=1.2.3`)
    LessEqual(PartialVersion),
    /// Same leftmost non-zero slot, not lower than the reference (`^1.2.3`)
    Caret(PartialVersion),
    /// Same major and minor when specified, not lower than the reference (`~1.2.3`)
    Tilde(PartialVersion),
    /// Inclusive range between two bounds (`1.2.3 - 2.3.4`)
    Hyphen {
        lower: PartialVersion,
        upper: PartialVersion,
    },
    /// Every member must match (`>=1.0.0 <2.0.0`)
    And(Vec<Constraint>),
    /// At least one member must match (`^1.0.0 || ^2.0.0`)
    Or(Vec<Constraint>),
}

impl Constraint {
    /// Check whether `target` satisfies this constraint
    ///
    /// Prerelease targets are excluded unless `include_prerelease` is set or
    /// the constraint itself pins a prerelease of the same release.
    pub fn matches(&self, target: &FullVersion, include_prerelease: bool) -> bool {
        self.evaluate(target.as_partial(), include_prerelease)
    }

    fn evaluate(&self, target: &PartialVersion, include_prerelease: bool) -> bool {
        match self {
            Constraint::Any => comparator::any(target),
            Constraint::Equal(reference) => comparator::equal(reference, target, include_prerelease),
            Constraint::GreaterThan(reference) => {
                comparator::greater_than(reference, target, include_prerelease)
            }
            Constraint::GreaterEqual(reference) => {
                comparator::greater_equal(reference, target, include_prerelease)
            }
            Constraint::LessThan(reference) => {
                comparator::less_than(reference, target, include_prerelease)
            }
            Constraint::LessEqual(reference) => {
                comparator::less_equal(reference, target, include_prerelease)
            }
            Constraint::Caret(reference) => comparator::caret(reference, target, include_prerelease),
            Constraint::Tilde(reference) => comparator::tilde(reference, target, include_prerelease),
            Constraint::Hyphen { lower, upper } => {
                let include = include_prerelease || self.is_prerelease();
                comparator::greater_equal(lower, target, include && !lower.is_prerelease())
                    && comparator::less_equal(upper, target, include && !upper.is_prerelease())
            }
            Constraint::And(members) => {
                let include = include_prerelease || self.is_prerelease();
                members
                    .iter()
                    .all(|member| member.evaluate(target, include && !member.is_prerelease()))
            }
            Constraint::Or(members) => {
                let include = include_prerelease || self.is_prerelease();
                members
                    .iter()
                    .any(|member| member.evaluate(target, include && !member.is_prerelease()))
            }
        }
    }

    /// True if the constraint, or any of its members, references a prerelease
    pub fn is_prerelease(&self) -> bool {
        match self {
            Constraint::Any => false,
            Constraint::Equal(reference)
            | Constraint::GreaterThan(reference)
            | Constraint::GreaterEqual(reference)
            | Constraint::LessThan(reference)
            | Constraint::LessEqual(reference)
            | Constraint::Caret(reference)
            | Constraint::Tilde(reference) => reference.is_prerelease(),
            Constraint::Hyphen { lower, upper } => lower.is_prerelease() || upper.is_prerelease(),
            Constraint::And(members) | Constraint::Or(members) => {
                members.iter().any(Constraint::is_prerelease)
            }
        }
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Constraint::Any => f.write_str("*"),
            Constraint::Equal(reference) => write!(f, "={reference}"),
            Constraint::GreaterThan(reference) => write!(f, ">{reference}"),
            Constraint::GreaterEqual(reference) => write!(f, ">={reference}"),
            Constraint::LessThan(reference) => write!(f, "<{reference}"),
            Constraint::LessEqual(reference) => write!(f, "<={reference}"),
            Constraint::Caret(reference) => write!(f, "^{reference}"),
            Constraint::Tilde(reference) => write!(f, "~{reference}"),
            Constraint::Hyphen { lower, upper } => write!(f, "{lower} - {upper}"),
            Constraint::And(members) => write_joined(f, members, " "),
            Constraint::Or(members) => write_joined(f, members, " || "),
        }
    }
}

fn write_joined(f: &mut fmt::Formatter<'_>, members: &[Constraint], separator: &str) -> fmt::Result {
    for (index, member) in members.iter().enumerate() {
        if index > 0 {
            f.write_str(separator)?;
        }
        write!(f, "{member}")?;
    }
    Ok(())
}

impl FromStr for Constraint {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for Constraint {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Constraint {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Self::parse(&text).map_err(serde::de::Error::custom)
    }
}
