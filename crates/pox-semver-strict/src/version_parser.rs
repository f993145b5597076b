//! Version string validation and field extraction

use lazy_static::lazy_static;
use regex::{Captures, Regex};
use thiserror::Error;

use crate::version::Version;

/// Error type for version parsing
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid version string \"{0}\"")]
    InvalidFormat(String),
    #[error("Invalid version string \"{input}\": {component} version exceeds {max}", max = u64::MAX)]
    NumericOverflow { input: String, component: &'static str },
}

impl ParseError {
    /// The string that failed to parse
    pub fn input(&self) -> &str {
        match self {
            ParseError::InvalidFormat(input) => input,
            ParseError::NumericOverflow { input, .. } => input,
        }
    }
}

pub type Result<T> = std::result::Result<T, ParseError>;

lazy_static! {
    // `[0-9]` rather than `\d`: the latter matches every Unicode decimal digit.
    static ref NUMERIC_IDENTIFIER: &'static str = r"0|[1-9][0-9]*";

    static ref PRERELEASE_IDENTIFIER: String = format!(
        r"(?:{}|[0-9]*[a-zA-Z-][0-9a-zA-Z-]*)",
        *NUMERIC_IDENTIFIER
    );

    static ref BUILD_IDENTIFIER: &'static str = r"[0-9a-zA-Z-]+";

    static ref SEMVER_RE: Regex = Regex::new(&format!(
        r"^(?P<major>{num})\.(?P<minor>{num})\.(?P<patch>{num})(?:-(?P<prerelease>{pre}(?:\.{pre})*))?(?:\+(?P<metadata>{build}(?:\.{build})*))?$",
        num = *NUMERIC_IDENTIFIER,
        pre = *PRERELEASE_IDENTIFIER,
        build = *BUILD_IDENTIFIER,
    )).unwrap();
}

/// Parser for strict SemVer 2.0.0 version strings.
///
/// Input is never trimmed, prefixed or otherwise repaired: a string either
/// matches the grammar exactly or is rejected.
#[derive(Debug, Clone, Copy, Default)]
pub struct VersionParser;

impl VersionParser {
    /// Create a new version parser
    pub fn new() -> Self {
        VersionParser
    }

    /// Check if a version string is valid
    pub fn is_valid(&self, version: &str) -> bool {
        self.parse(version).is_ok()
    }

    /// Parse a version string into its five components.
    ///
    /// Fails with [`ParseError::InvalidFormat`] when the string does not match
    /// the grammar and with [`ParseError::NumericOverflow`] when a core number
    /// does not fit in a `u64`.
    pub fn parse(&self, version: &str) -> Result<Version> {
        let caps = SEMVER_RE
            .captures(version)
            .ok_or_else(|| ParseError::InvalidFormat(version.to_string()))?;

        let major = numeric_component(&caps, "major", version)?;
        let minor = numeric_component(&caps, "minor", version)?;
        let patch = numeric_component(&caps, "patch", version)?;

        let prerelease = optional_component(&caps, "prerelease");
        let metadata = optional_component(&caps, "metadata");

        log::trace!("Parsed version: {}", version);

        Ok(Version::from_parts(major, minor, patch, prerelease, metadata))
    }
}

fn numeric_component(caps: &Captures<'_>, name: &'static str, version: &str) -> Result<u64> {
    // The grammar only lets digits through, so the sole failure left is overflow.
    caps[name].parse::<u64>().map_err(|_| ParseError::NumericOverflow {
        input: version.to_string(),
        component: name,
    })
}

fn optional_component(caps: &Captures<'_>, name: &str) -> String {
    caps.name(name).map_or_else(String::new, |m| m.as_str().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(version: &str) -> Result<Version> {
        VersionParser::new().parse(version)
    }

    #[test]
    fn test_parse_core() {
        let v = parse("10.20.30").unwrap();
        assert_eq!(v.major(), 10);
        assert_eq!(v.minor(), 20);
        assert_eq!(v.patch(), 30);
        assert_eq!(v.prerelease(), "");
        assert_eq!(v.metadata(), "");
    }

    #[test]
    fn test_parse_prerelease_and_metadata() {
        let v = parse("1.1.2-prerelease+meta").unwrap();
        assert_eq!(v.prerelease(), "prerelease");
        assert_eq!(v.metadata(), "meta");

        let v = parse("1.0.0-alpha-a.b-c-somethinglong+build.1-aef.1-its-okay").unwrap();
        assert_eq!(v.prerelease(), "alpha-a.b-c-somethinglong");
        assert_eq!(v.metadata(), "build.1-aef.1-its-okay");

        let v = parse("1.2.3----RC-SNAPSHOT.12.9.1--.12+788").unwrap();
        assert_eq!(v.prerelease(), "---RC-SNAPSHOT.12.9.1--.12");
        assert_eq!(v.metadata(), "788");
    }

    #[test]
    fn test_parse_metadata_only() {
        let v = parse("1.0.0+0.build.1-rc.10000aaa-kk-0.1").unwrap();
        assert_eq!(v.prerelease(), "");
        assert_eq!(v.metadata(), "0.build.1-rc.10000aaa-kk-0.1");
    }

    #[test]
    fn test_alphanumeric_identifier_may_start_with_digits() {
        assert_eq!(parse("1.0.0-0A.is.legal").unwrap().prerelease(), "0A.is.legal");
        assert_eq!(parse("1.0.0-alpha.0valid").unwrap().prerelease(), "alpha.0valid");
    }

    #[test]
    fn test_parse_fails() {
        let invalid = [
            "",
            "1",
            "1.2",
            "1.2.3.4",
            "v1.2.3",
            " 1.2.3",
            "1.2.3 ",
            "01.1.1",
            "1.01.1",
            "1.1.01",
            "1.2.3-0123",
            "1.2.3-0123.0123",
            "1.1.2+.123",
            "+invalid",
            "-invalid",
            "alpha",
            "1.0.0-alpha_beta",
            "1.0.0-alpha..",
            "1.0.0-alpha..1",
            "1.0.0-alpha.",
            "1.0.0-",
            "1.0.0+",
            "1.0.0-.alpha",
            "9.8.7+meta+meta",
            "9.8.7-whatever+meta+meta",
            "1.2-SNAPSHOT",
            "1.2.3.DEV",
            "\u{0661}.2.3",
        ];

        for version in invalid {
            assert_eq!(
                parse(version),
                Err(ParseError::InvalidFormat(version.to_string())),
                "{} should be rejected",
                version
            );
        }
    }

    #[test]
    fn test_numeric_overflow() {
        let version = "99999999999999999999999.999999999999999999.99999999999999999";
        assert_eq!(
            parse(version),
            Err(ParseError::NumericOverflow {
                input: version.to_string(),
                component: "major",
            })
        );

        let version = "1.18446744073709551616.0";
        let err = parse(version).unwrap_err();
        assert_eq!(err.input(), version);
        assert!(matches!(err, ParseError::NumericOverflow { component: "minor", .. }));
    }

    #[test]
    fn test_u64_max_fits() {
        let v = parse("18446744073709551615.0.0").unwrap();
        assert_eq!(v.major(), u64::MAX);
    }

    #[test]
    fn test_overflow_needs_grammar_match() {
        // Leading zeros are rejected before any numeric conversion happens.
        let version = "099999999999999999999999.0.0";
        assert_eq!(parse(version), Err(ParseError::InvalidFormat(version.to_string())));
    }

    #[test]
    fn test_is_valid() {
        let parser = VersionParser::new();
        assert!(parser.is_valid("1.0.0"));
        assert!(parser.is_valid("1.0.0-rc.1+build.1"));
        assert!(!parser.is_valid("1.0"));
        assert!(!parser.is_valid("1.0.0-01"));
    }

    #[test]
    fn test_error_message() {
        let err = parse("1.2").unwrap_err();
        assert_eq!(err.to_string(), "Invalid version string \"1.2\"");
        assert_eq!(err.input(), "1.2");
    }
}
