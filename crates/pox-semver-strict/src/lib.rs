//! Strict Semantic Versioning 2.0.0 library
//!
//! This crate parses version strings that exactly match the SemVer 2.0.0
//! grammar, formats them back canonically and orders them by precedence.
//! Nothing is normalized: `v1.2.3`, `1.2` or `01.2.3` are errors.

mod comparator;
mod operator;
mod semver;
#[cfg(feature = "serde")]
mod serde_impl;
mod version;
mod version_parser;

pub use comparator::Comparator;
pub use operator::{InvalidOperatorError, Operator};
pub use semver::Semver;
pub use version::Version;
pub use version_parser::{ParseError, Result, VersionParser};
