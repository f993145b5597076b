//! Version precedence

use std::cmp::Ordering;

use crate::operator::Operator;
use crate::version::Version;

/// Comparator for ordering versions by SemVer precedence
pub struct Comparator;

impl Comparator {
    /// Three-way precedence comparison. Build metadata never takes part.
    pub fn compare(version1: &Version, version2: &Version) -> Ordering {
        version1
            .major()
            .cmp(&version2.major())
            .then_with(|| version1.minor().cmp(&version2.minor()))
            .then_with(|| version1.patch().cmp(&version2.patch()))
            .then_with(|| compare_prerelease(version1, version2))
    }

    /// Check if version1 > version2
    pub fn greater_than(version1: &Version, version2: &Version) -> bool {
        Self::compare_with(version1, Operator::GreaterThan, version2)
    }

    /// Check if version1 >= version2
    pub fn greater_than_or_equal_to(version1: &Version, version2: &Version) -> bool {
        Self::compare_with(version1, Operator::GreaterThanOrEqual, version2)
    }

    /// Check if version1 < version2
    pub fn less_than(version1: &Version, version2: &Version) -> bool {
        Self::compare_with(version1, Operator::LessThan, version2)
    }

    /// Check if version1 <= version2
    pub fn less_than_or_equal_to(version1: &Version, version2: &Version) -> bool {
        Self::compare_with(version1, Operator::LessThanOrEqual, version2)
    }

    /// Check if version1 and version2 have the same precedence
    pub fn equal_to(version1: &Version, version2: &Version) -> bool {
        Self::compare_with(version1, Operator::Equal, version2)
    }

    /// Check if version1 and version2 differ in precedence
    pub fn not_equal_to(version1: &Version, version2: &Version) -> bool {
        Self::compare_with(version1, Operator::NotEqual, version2)
    }

    /// Compare version1 to version2 using the given operator
    pub fn compare_with(version1: &Version, operator: Operator, version2: &Version) -> bool {
        operator.accepts(Self::compare(version1, version2))
    }
}

fn compare_prerelease(version1: &Version, version2: &Version) -> Ordering {
    // A release outranks any pre-release of the same core version.
    match (version1.is_prerelease(), version2.is_prerelease()) {
        (false, false) => Ordering::Equal,
        (false, true) => Ordering::Greater,
        (true, false) => Ordering::Less,
        (true, true) => {
            let mut lhs = version1.prerelease_identifiers();
            let mut rhs = version2.prerelease_identifiers();

            loop {
                match (lhs.next(), rhs.next()) {
                    (None, None) => return Ordering::Equal,
                    (None, Some(_)) => return Ordering::Less,
                    (Some(_), None) => return Ordering::Greater,
                    (Some(a), Some(b)) => match compare_identifier(a, b) {
                        Ordering::Equal => continue,
                        ord => return ord,
                    },
                }
            }
        }
    }
}

fn compare_identifier(a: &str, b: &str) -> Ordering {
    match (is_numeric(a), is_numeric(b)) {
        (true, true) => compare_numeric(a, b),
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => a.cmp(b),
    }
}

fn is_numeric(identifier: &str) -> bool {
    !identifier.is_empty() && identifier.bytes().all(|b| b.is_ascii_digit())
}

/// Compares two all-digit strings by value, without any integer width limit.
/// Leading zeros are ignored.
fn compare_numeric(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');

    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}
