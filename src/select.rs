//! Candidate selection over reference names such as tags and branches
//!
//! A requirement string is either a constraint, or the name of a single
//! reference to use verbatim. For constraints, every reference name that is a
//! full version is matched and the matches are returned in version order.

use tracing::debug;

use crate::config::{SelectConfig, SortOrder};
use crate::constraint::Constraint;
use crate::version::error::{ErrorKind, ParseError};
use crate::version::full::FullVersion;

/// What a user requirement resolves to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    /// Match reference names against a constraint
    Constraint(Constraint),
    /// Use this reference name as is (e.g. `main` or `feature/foo`)
    Reference(String),
}

impl Selector {
    /// Parse a requirement string
    ///
    /// Text that is not shaped like a version at all is taken as a reference
    /// name. Text shaped like a version but carrying a malformed label is an
    /// error, since it was most likely meant as a constraint.
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        match Constraint::parse(text) {
            Ok(constraint) => Ok(Selector::Constraint(constraint)),
            Err(err) if err.kind() == ErrorKind::InvalidVersion => {
                debug!("'{}' is not a constraint, using it as a reference name", text);
                Ok(Selector::Reference(text.to_string()))
            }
            Err(err) => Err(err),
        }
    }
}

/// A reference name that parsed as a full version
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// Reference name exactly as supplied, e.g. `v1.2.3`
    pub reference: String,
    pub version: FullVersion,
}

fn parse_reference(reference: &str, config: &SelectConfig) -> Option<FullVersion> {
    let text = if config.strip_v_prefix {
        reference
            .strip_prefix('v')
            .or_else(|| reference.strip_prefix('V'))
            .unwrap_or(reference)
    } else {
        reference
    };

    FullVersion::parse(text)
        .inspect_err(|e| debug!("Skipping reference '{}': {}", reference, e))
        .ok()
}

/// Match every reference name against `constraint`
///
/// Names that are not full versions are skipped. Matches are sorted by version
/// in `config.order`.
pub fn select_candidates<I, S>(constraint: &Constraint, references: I, config: &SelectConfig) -> Vec<Candidate>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut candidates: Vec<Candidate> = references
        .into_iter()
        .filter_map(|reference| {
            let reference = reference.as_ref();
            parse_reference(reference, config).map(|version| Candidate {
                reference: reference.to_string(),
                version,
            })
        })
        .filter(|candidate| constraint.matches(&candidate.version, config.include_prerelease))
        .collect();

    candidates.sort_by(|a, b| a.version.cmp(&b.version).then_with(|| a.reference.cmp(&b.reference)));
    if config.order == SortOrder::Descending {
        candidates.reverse();
    }

    debug!("{} candidates match '{}'", candidates.len(), constraint);
    candidates
}

/// Highest version among the references that satisfy `constraint`
pub fn latest_candidate<I, S>(constraint: &Constraint, references: I, config: &SelectConfig) -> Option<Candidate>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let ascending = SelectConfig {
        order: SortOrder::Ascending,
        ..config.clone()
    };
    select_candidates(constraint, references, &ascending).pop()
}
