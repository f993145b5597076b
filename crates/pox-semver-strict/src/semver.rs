//! Semver facade providing high-level operations on version strings

use std::cmp::Ordering;

use crate::version_parser::{ParseError, VersionParser};
use crate::{Comparator, Operator, Version};

/// Main facade for semantic versioning operations on raw strings
pub struct Semver;

impl Semver {
    /// Parse both strings and compare them with the given operator
    pub fn compare(version1: &str, operator: Operator, version2: &str) -> Result<bool, ParseError> {
        let parser = VersionParser::new();
        let v1 = parser.parse(version1)?;
        let v2 = parser.parse(version2)?;

        Ok(Comparator::compare_with(&v1, operator, &v2))
    }

    /// Sort versions in ascending order, dropping strings that do not parse
    pub fn sort(versions: &[&str]) -> Vec<String> {
        Self::usort(versions, Ordering::Less)
    }

    /// Sort versions in descending order (reverse sort), dropping strings that do not parse
    pub fn rsort(versions: &[&str]) -> Vec<String> {
        Self::usort(versions, Ordering::Greater)
    }

    /// Highest precedence version, first one wins on ties
    pub fn max(versions: &[&str]) -> Option<String> {
        Self::usort(versions, Ordering::Greater).into_iter().next()
    }

    /// Lowest precedence version, first one wins on ties
    pub fn min(versions: &[&str]) -> Option<String> {
        Self::usort(versions, Ordering::Less).into_iter().next()
    }

    fn usort(versions: &[&str], first: Ordering) -> Vec<String> {
        let parser = VersionParser::new();

        // Keep the original index so ties (metadata-only differences) stay in input order
        let mut parsed: Vec<(Version, usize)> = versions
            .iter()
            .enumerate()
            .filter_map(|(i, v)| Some((parser.parse(v).ok()?, i)))
            .collect();

        parsed.sort_by(|(a, _), (b, _)| {
            let cmp = Comparator::compare(a, b);

            if first == Ordering::Less {
                cmp
            } else {
                cmp.reverse()
            }
        });

        parsed
            .into_iter()
            .map(|(_, i)| versions[i].to_string())
            .collect()
    }
}
