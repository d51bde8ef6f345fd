//! Built-in locales.

use std::fmt;

/// A locale with a name table compiled into the crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    #[default]
    English,
    German,
}

/// Error returned when a locale tag has no built-in table.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown locale: {0}")]
pub struct UnknownLocale(pub String);

impl Locale {
    /// All built-in locales.
    pub const ALL: [Locale; 2] = [Locale::English, Locale::German];

    /// The primary language subtag, e.g. `"en"`.
    pub fn tag(&self) -> &'static str {
        match self {
            Locale::English => "en",
            Locale::German => "de",
        }
    }

    /// Parse a locale tag.
    ///
    /// Only the language part is considered, so `en-GB`, `de_AT` and `DE`
    /// are all accepted.
    pub fn from_tag(tag: &str) -> Result<Self, UnknownLocale> {
        let language = tag
            .trim()
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();

        match language.as_str() {
            "en" => Ok(Locale::English),
            "de" => Ok(Locale::German),
            _ => Err(UnknownLocale(tag.to_string())),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
