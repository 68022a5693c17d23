//! Version model: identifiers, labels and the two version shapes
//!
//! Everything that turns text into a comparable version lives here. Constraint
//! evaluation in [`crate::constraint`] is built on the comparison primitives
//! exposed by [`PartialVersion`].
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │    Label    │────▶│   Partial   │────▶│    Full     │
//! │ (pre/build) │     │ (1.2.x, *)  │     │  (1.2.3)    │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!        │                   │                   │
//!        └───────────────────┴───────────────────┘
//!                            ▼
//!                     ┌─────────────┐
//!                     │    Error    │
//!                     │ (op, input) │
//!                     └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`error`]: `ParseError` chain and the `ErrorKind` at its root
//! - [`label`]: Prerelease and build identifier sequences with semver ordering
//! - [`partial`]: Versions with optional trailing wildcards, slot-wise comparisons
//! - [`full`]: Complete versions, the targets constraints are matched against

pub mod error;
pub mod full;
pub mod label;
pub mod partial;

pub use error::{ErrorKind, ParseError};
pub use full::FullVersion;
pub use label::Label;
pub use partial::{PartialVersion, is_wildcard};
