//! OSGi-style artifact versions
//!
//! A version is `major[.minor[.micro[.qualifier]]]`. Missing numeric parts
//! default to zero, so `1` and `1.0.0` are the same version. The qualifier may
//! only contain ASCII letters, digits, `_` and `-`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{HealthCheckError, Result, invalid_version};

/// Version of a bundle or configuration resource
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub micro: u32,
    pub qualifier: String,
}

impl Version {
    pub fn new(major: u32, minor: u32, micro: u32) -> Self {
        Self {
            major,
            minor,
            micro,
            qualifier: String::new(),
        }
    }

    #[must_use]
    pub fn with_qualifier(mut self, qualifier: impl Into<String>) -> Self {
        self.qualifier = qualifier.into();
        self
    }

    /// Parse a version string.
    ///
    /// Surrounding whitespace is ignored and an empty string yields `0.0.0`.
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Ok(Self::default());
        }

        let mut parts = trimmed.splitn(4, '.');
        let major = parse_component(input, "major", parts.next())?;
        let minor = match parts.next() {
            Some(part) => parse_component(input, "minor", Some(part))?,
            None => 0,
        };
        let micro = match parts.next() {
            Some(part) => parse_component(input, "micro", Some(part))?,
            None => 0,
        };
        let qualifier = match parts.next() {
            Some(q) => {
                if q.is_empty() {
                    return Err(invalid_version(input, "empty qualifier"));
                }
                if let Some(c) = q
                    .chars()
                    .find(|c| !(c.is_ascii_alphanumeric() || *c == '_' || *c == '-'))
                {
                    return Err(invalid_version(
                        input,
                        format!("invalid character '{c}' in qualifier"),
                    ));
                }
                q.to_string()
            }
            None => String::new(),
        };

        Ok(Self {
            major,
            minor,
            micro,
            qualifier,
        })
    }
}

fn parse_component(input: &str, name: &str, part: Option<&str>) -> Result<u32> {
    let part = part.unwrap_or_default();
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid_version(
            input,
            format!("invalid {name} component '{part}'"),
        ));
    }
    part.parse::<u32>()
        .map_err(|e| invalid_version(input, format!("invalid {name} component '{part}': {e}")))
}

impl FromStr for Version {
    type Err = HealthCheckError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.micro)?;
        if !self.qualifier.is_empty() {
            write!(f, ".{}", self.qualifier)?;
        }
        Ok(())
    }
}

impl Serialize for Version {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Version {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Version::parse(&raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    macro_rules! test_parse_ok {
        ($test_name:ident, $input:expr, $expected:expr) => {
            #[test]
            fn $test_name() {
                assert_eq!(Version::parse($input).unwrap(), $expected);
            }
        };
    }

    macro_rules! test_parse_err {
        ($test_name:ident, $input:expr) => {
            #[test]
            fn $test_name() {
                let err = Version::parse($input).unwrap_err();
                assert!(matches!(err, HealthCheckError::InvalidVersion { .. }));
            }
        };
    }

    test_parse_ok!(test_parse_full, "1.2.3", Version::new(1, 2, 3));
    test_parse_ok!(test_parse_major_only, "2", Version::new(2, 0, 0));
    test_parse_ok!(test_parse_major_minor, "2.5", Version::new(2, 5, 0));
    test_parse_ok!(
        test_parse_qualifier,
        "1.0.0.SNAPSHOT",
        Version::new(1, 0, 0).with_qualifier("SNAPSHOT")
    );
    test_parse_ok!(
        test_parse_qualifier_with_dash,
        "4.1.2.r2024-01_a",
        Version::new(4, 1, 2).with_qualifier("r2024-01_a")
    );
    test_parse_ok!(test_parse_trims_whitespace, "  1.0.0 ", Version::new(1, 0, 0));
    test_parse_ok!(test_parse_empty_is_zero, "", Version::default());

    test_parse_err!(test_parse_non_numeric_major, "a.0.0");
    test_parse_err!(test_parse_non_numeric_minor, "1.x");
    test_parse_err!(test_parse_negative, "-1.0.0");
    test_parse_err!(test_parse_trailing_dot, "1.");
    test_parse_err!(test_parse_empty_component, "1..0");
    test_parse_err!(test_parse_empty_qualifier, "1.0.0.");
    test_parse_err!(test_parse_bad_qualifier_char, "1.0.0.foo+bar");
    test_parse_err!(test_parse_overflow, "99999999999.0.0");

    #[test]
    fn test_short_form_equals_long_form() {
        assert_eq!(Version::parse("1").unwrap(), Version::parse("1.0.0").unwrap());
    }

    #[test]
    fn test_qualifier_distinguishes_versions() {
        assert_ne!(
            Version::parse("1.0.0").unwrap(),
            Version::parse("1.0.0.SNAPSHOT").unwrap()
        );
    }

    #[test]
    fn test_ordering() {
        let mut versions = vec![
            Version::parse("2.0.0").unwrap(),
            Version::parse("1.10.0").unwrap(),
            Version::parse("1.2.0").unwrap(),
            Version::parse("1.2.0.beta").unwrap(),
        ];
        versions.sort();
        let rendered: Vec<String> = versions.iter().map(ToString::to_string).collect();
        assert_eq!(rendered, ["1.2.0", "1.2.0.beta", "1.10.0", "2.0.0"]);
    }

    #[test]
    fn test_display() {
        assert_eq!(Version::parse("3").unwrap().to_string(), "3.0.0");
        assert_eq!(
            Version::parse("3.1.4.RC1").unwrap().to_string(),
            "3.1.4.RC1"
        );
    }

    #[test]
    fn test_serde_as_string() {
        let version: Version = serde_json::from_str("\"1.4\"").unwrap();
        assert_eq!(version, Version::new(1, 4, 0));
        assert_eq!(serde_json::to_string(&version).unwrap(), "\"1.4.0\"");
        assert!(serde_json::from_str::<Version>("\"1.x\"").is_err());
    }
}
