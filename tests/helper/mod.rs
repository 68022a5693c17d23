//! Shared test utilities
#![allow(dead_code)]

use maker_semver::{Constraint, ErrorKind, FullVersion};
use tracing_subscriber::EnvFilter;

/// Route library events to the test output; `RUST_LOG=maker_semver=trace` shows dispatch
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .with_target(false)
        .without_time()
        .try_init();
}

/// Parse a full version and check that it renders back unchanged
pub fn version(text: &str) -> FullVersion {
    let version = FullVersion::parse(text).unwrap();
    assert_eq!(version.to_string(), text);
    version
}

/// Check every `(expected, version)` pair against `constraint` without prerelease opt-in
pub fn assert_scenario(constraint: &str, versions: &[(bool, &str)]) {
    init_tracing();

    let parsed = Constraint::parse(constraint)
        .unwrap_or_else(|e| panic!("'{}' should parse: {}", constraint, e));

    for (expected, target) in versions {
        assert_eq!(
            parsed.matches(&version(target), false),
            *expected,
            "'{}' matching '{}'",
            constraint,
            target
        );
    }
}

/// Check that `constructor` rejects `input` with `InvalidVersion`
pub fn assert_invalid<F>(constructor: F, input: &str)
where
    F: Fn(&str) -> Result<Constraint, maker_semver::ParseError>,
{
    match constructor(input) {
        Ok(constraint) => panic!("'{}' should be rejected, got '{}'", input, constraint),
        Err(e) => assert_eq!(e.kind(), ErrorKind::InvalidVersion, "'{}': {}", input, e),
    }
}
