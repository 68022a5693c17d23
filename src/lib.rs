//! Semantic version parsing and npm-style constraint matching
//!
//! ```
//! use maker_semver::{parse_constraint, parse_version};
//!
//! let constraint = parse_constraint("^1.2.3 || >=3.1").unwrap();
//! assert!(constraint.matches(&parse_version("1.9.0").unwrap(), false));
//! assert!(!constraint.matches(&parse_version("2.0.0").unwrap(), false));
//! assert_eq!(constraint.to_string(), "^1.2.3 || >=3.1");
//! ```

pub mod config;
pub mod constraint;
pub mod select;
pub mod version;

pub use constraint::Constraint;
pub use version::{ErrorKind, FullVersion, Label, ParseError, PartialVersion};

/// Parse a concrete version such as a tag name
pub fn parse_version(text: &str) -> Result<FullVersion, ParseError> {
    FullVersion::parse(text)
}

/// Parse a version requirement such as `^1.2.3` or `>=1.0.0 <2.0.0`
pub fn parse_constraint(text: &str) -> Result<Constraint, ParseError> {
    Constraint::parse(text)
}
