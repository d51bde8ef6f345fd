//! Country code types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Error returned when parsing an invalid country code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid country code: {reason}")]
pub struct InvalidCountryCode {
    reason: &'static str,
}

/// A valid ISO-3166-1 alpha-3 country code.
///
/// Codes are always 3 uppercase ASCII letters. Whether a code is actually
/// assigned to a country is only known to a name table; this type just
/// guarantees the shape.
///
/// # Examples
///
/// ```
/// use country_names::domain::CountryCode;
///
/// let usa = CountryCode::parse("USA").unwrap();
/// assert_eq!(usa.as_str(), "USA");
///
/// // Strict parsing rejects lowercase
/// assert!(CountryCode::parse("usa").is_err());
///
/// // Normalized parsing folds case and trims
/// assert_eq!(CountryCode::parse_normalized(" usa ").unwrap(), usa);
///
/// // Wrong length is rejected either way
/// assert!(CountryCode::parse("US").is_err());
/// assert!(CountryCode::parse_normalized("USAX").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CountryCode([u8; 3]);

impl CountryCode {
    /// Parse a country code from a string.
    ///
    /// The input must be exactly 3 uppercase ASCII letters (A-Z).
    pub fn parse(s: &str) -> Result<Self, InvalidCountryCode> {
        let bytes = s.as_bytes();

        if bytes.len() != 3 {
            return Err(InvalidCountryCode {
                reason: "must be exactly 3 characters",
            });
        }

        for &b in bytes {
            if !b.is_ascii_uppercase() {
                return Err(InvalidCountryCode {
                    reason: "must be uppercase ASCII letters A-Z",
                });
            }
        }

        Ok(CountryCode([bytes[0], bytes[1], bytes[2]]))
    }

    /// Parse a country code after trimming whitespace and upper-casing
    /// ASCII letters.
    pub fn parse_normalized(s: &str) -> Result<Self, InvalidCountryCode> {
        Self::parse(&s.trim().to_ascii_uppercase())
    }

    /// Returns the code as a string slice.
    pub fn as_str(&self) -> &str {
        // Only ASCII uppercase letters are ever stored
        std::str::from_utf8(&self.0).unwrap_or_default()
    }
}

impl FromStr for CountryCode {
    type Err = InvalidCountryCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Debug for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CountryCode({})", self.as_str())
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for CountryCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for CountryCode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        CountryCode::parse(&s).map_err(serde::de::Error::custom)
    }
}
