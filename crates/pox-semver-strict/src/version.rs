//! Parsed semantic version value

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::comparator::Comparator;
use crate::version_parser::{ParseError, VersionParser};

/// An immutable, fully validated SemVer 2.0.0 version.
///
/// Only [`VersionParser::parse`] (and the `parse`/`FromStr` shortcuts built on
/// it) can create one. The major, minor and patch numbers are `u64`; larger
/// values are rejected at parse time.
///
/// Equality, ordering and hashing all follow version precedence, so build
/// metadata is ignored by `==`, `<` and `Hash`. Use [`Version::exact_eq`] to
/// also take the metadata into account.
#[derive(Debug, Clone)]
pub struct Version {
    major: u64,
    minor: u64,
    patch: u64,
    prerelease: String,
    metadata: String,
}

impl Version {
    pub(crate) fn from_parts(
        major: u64,
        minor: u64,
        patch: u64,
        prerelease: String,
        metadata: String,
    ) -> Self {
        Version {
            major,
            minor,
            patch,
            prerelease,
            metadata,
        }
    }

    /// Parse a version string, see [`VersionParser::parse`]
    pub fn parse(version: &str) -> Result<Self, ParseError> {
        VersionParser::new().parse(version)
    }

    pub fn major(&self) -> u64 {
        self.major
    }

    pub fn minor(&self) -> u64 {
        self.minor
    }

    pub fn patch(&self) -> u64 {
        self.patch
    }

    /// Raw pre-release text without the leading `-`, empty for a release
    pub fn prerelease(&self) -> &str {
        &self.prerelease
    }

    /// Raw build metadata text without the leading `+`, empty when absent
    pub fn metadata(&self) -> &str {
        &self.metadata
    }

    /// Check if this is a pre-release version
    pub fn is_prerelease(&self) -> bool {
        !self.prerelease.is_empty()
    }

    /// Dot-separated pre-release identifiers, in order
    pub fn prerelease_identifiers(&self) -> impl Iterator<Item = &str> {
        identifiers(&self.prerelease)
    }

    /// Dot-separated build metadata identifiers, in order
    pub fn build_identifiers(&self) -> impl Iterator<Item = &str> {
        identifiers(&self.metadata)
    }

    /// Field-by-field equality, including build metadata
    pub fn exact_eq(&self, other: &Version) -> bool {
        self.major == other.major
            && self.minor == other.minor
            && self.patch == other.patch
            && self.prerelease == other.prerelease
            && self.metadata == other.metadata
    }
}

fn identifiers(raw: &str) -> impl Iterator<Item = &str> {
    raw.split('.').filter(move |_| !raw.is_empty())
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;

        if !self.prerelease.is_empty() {
            write!(f, "-{}", self.prerelease)?;
        }

        if !self.metadata.is_empty() {
            write!(f, "+{}", self.metadata)?;
        }

        Ok(())
    }
}

impl FromStr for Version {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Version::parse(s)
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        Comparator::equal_to(self, other)
    }
}

impl Eq for Version {}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        Comparator::compare(self, other)
    }
}

impl Hash for Version {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Parsed pre-release identifiers never carry leading zeros, so the raw
        // text is canonical for precedence.
        self.major.hash(state);
        self.minor.hash(state);
        self.patch.hash(state);
        self.prerelease.hash(state);
    }
}
