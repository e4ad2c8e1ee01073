//! Dotted OS version parsing and component-wise comparison.
//!
//! macOS product versions ("10.6.6", "10.10") are sequences of non-negative
//! integers. They must be compared component by component; string
//! comparison would put "10.6.10" before "10.6.6". Missing trailing
//! components compare as zero, so "10.8" and "10.8.0" are equal.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::{CompatError, Result};

/// A parsed OS product version.
///
/// Ordering treats a shorter version as zero-padded: "10.8" == "10.8.0" and
/// "10.6.6" < "10.6.10". Malformed input is a hard parse error, never a
/// silently-wrong comparison.
#[derive(Debug, Clone)]
pub struct OsVersion {
    components: Vec<u32>,
}

impl OsVersion {
    /// Parse a dotted version string.
    ///
    /// Returns [`CompatError::MalformedVersion`] when the input is empty or
    /// any segment is not a non-negative integer.
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(CompatError::MalformedVersion {
                input: input.to_string(),
            });
        }

        let mut components = Vec::new();
        for segment in trimmed.split('.') {
            let value = segment
                .parse::<u32>()
                .map_err(|_| CompatError::MalformedVersion {
                    input: input.to_string(),
                })?;
            components.push(value);
        }

        Ok(Self { components })
    }

    /// Build a version from known-good components (release constants).
    pub fn from_components<I: IntoIterator<Item = u32>>(components: I) -> Self {
        Self {
            components: components.into_iter().collect(),
        }
    }

    /// The parsed components, in order.
    pub fn components(&self) -> &[u32] {
        &self.components
    }
}

impl PartialEq for OsVersion {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for OsVersion {}

impl PartialOrd for OsVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OsVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        let len = self.components.len().max(other.components.len());
        for i in 0..len {
            let a = self.components.get(i).copied().unwrap_or(0);
            let b = other.components.get(i).copied().unwrap_or(0);
            match a.cmp(&b) {
                Ordering::Equal => continue,
                unequal => return unequal,
            }
        }
        Ordering::Equal
    }
}

impl fmt::Display for OsVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = self
            .components
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join(".");
        write!(f, "{rendered}")
    }
}

impl FromStr for OsVersion {
    type Err = CompatError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(s: &str) -> OsVersion {
        OsVersion::parse(s).unwrap()
    }

    #[test]
    fn numeric_not_lexicographic() {
        assert!(v("10.6.6") < v("10.6.10"));
        assert!(v("10.10") > v("10.6.6"));
        assert!(v("10.9.5") < v("10.10"));
    }

    #[test]
    fn shorter_version_is_zero_padded() {
        assert_eq!(v("10.8"), v("10.8.0"));
        assert!(v("10.8") < v("10.8.1"));
        assert!(v("10.8.1") > v("10.8"));
    }

    #[test]
    fn equal_versions_compare_equal() {
        assert_eq!(v("10.13"), v("10.13"));
        assert_eq!(v("10.6.6").cmp(&v("10.6.6")), Ordering::Equal);
    }

    #[test]
    fn whitespace_is_trimmed() {
        assert_eq!(v(" 10.9.5\n"), v("10.9.5"));
    }

    #[test]
    fn malformed_input_is_an_error() {
        for input in ["", "  ", "10.x", "10..6", "ten.six", "10.6-beta"] {
            let err = OsVersion::parse(input).unwrap_err();
            assert!(
                matches!(err, CompatError::MalformedVersion { .. }),
                "expected MalformedVersion for {input:?}, got {err:?}"
            );
        }
    }

    #[test]
    fn display_round_trips() {
        assert_eq!(v("10.9.5").to_string(), "10.9.5");
        assert_eq!(v("10.10").to_string(), "10.10");
    }

    #[test]
    fn from_components_matches_parse() {
        assert_eq!(OsVersion::from_components([10, 6, 6]), v("10.6.6"));
    }
}
