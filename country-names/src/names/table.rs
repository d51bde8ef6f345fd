//! Ordered code → name tables loaded from locale bundles.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::{CountryCode, Locale};

use super::error::BundleError;
use super::provider::NameProvider;

const EN_BUNDLE: &str = include_str!("../../data/locales/en.json");
const DE_BUNDLE: &str = include_str!("../../data/locales/de.json");

/// On-disk shape of a locale bundle.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BundleDto {
    pub locale: String,
    pub countries: Vec<CountryDto>,
}

/// A single bundle entry. The code is kept raw so bad entries can be reported.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CountryDto {
    pub code: String,
    pub name: String,
}

/// An ordered, validated table of country names for one locale.
///
/// Entry order is preserved from the bundle; the built-in bundles are ranked
/// by population, most populous first.
#[derive(Debug, Clone)]
pub struct NameTable {
    locale: String,
    entries: Vec<(CountryCode, String)>,
    index: HashMap<CountryCode, usize>,
}

impl NameTable {
    /// Load the table compiled in for a built-in locale.
    pub fn builtin(locale: Locale) -> Result<Self, BundleError> {
        let json = match locale {
            Locale::English => EN_BUNDLE,
            Locale::German => DE_BUNDLE,
        };
        Self::from_json_str(json)
    }

    /// Parse and validate a bundle from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self, BundleError> {
        let bundle: BundleDto = serde_json::from_str(json).map_err(|e| BundleError::Json {
            message: e.to_string(),
        })?;
        Self::from_bundle(bundle)
    }

    /// Read a bundle file from disk.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, BundleError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let table = Self::from_json_str(&json)?;
        debug!(
            path = %path.display(),
            locale = %table.locale,
            entries = table.len(),
            "loaded locale bundle"
        );
        Ok(table)
    }

    /// Build a table from `(code, name)` pairs, validating them the same way
    /// as a bundle.
    pub fn from_entries<I, C, N>(locale: impl Into<String>, entries: I) -> Result<Self, BundleError>
    where
        I: IntoIterator<Item = (C, N)>,
        C: Into<String>,
        N: Into<String>,
    {
        let countries = entries
            .into_iter()
            .map(|(code, name)| CountryDto {
                code: code.into(),
                name: name.into(),
            })
            .collect();

        Self::from_bundle(BundleDto {
            locale: locale.into(),
            countries,
        })
    }

    fn from_bundle(bundle: BundleDto) -> Result<Self, BundleError> {
        if bundle.countries.is_empty() {
            return Err(BundleError::Empty {
                locale: bundle.locale,
            });
        }

        let mut entries = Vec::with_capacity(bundle.countries.len());
        let mut index = HashMap::with_capacity(bundle.countries.len());

        for (i, dto) in bundle.countries.into_iter().enumerate() {
            let code = CountryCode::parse(&dto.code).map_err(|_| BundleError::InvalidCode {
                index: i,
                code: dto.code.clone(),
            })?;

            if dto.name.trim().is_empty() {
                return Err(BundleError::EmptyName { code: dto.code });
            }

            if index.insert(code, entries.len()).is_some() {
                return Err(BundleError::DuplicateCode { code: dto.code });
            }

            entries.push((code, dto.name));
        }

        Ok(Self {
            locale: bundle.locale,
            entries,
            index,
        })
    }

    /// Look up a name by code.
    pub fn get(&self, code: &CountryCode) -> Option<&str> {
        self.index
            .get(code)
            .map(|&i| self.entries[i].1.as_str())
    }

    /// Iterate over `(code, name)` pairs in table order.
    pub fn iter(&self) -> impl Iterator<Item = (CountryCode, &str)> {
        self.entries.iter().map(|(code, name)| (*code, name.as_str()))
    }

    /// Number of countries in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the table is empty. Validated tables never are.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl NameProvider for NameTable {
    fn locale(&self) -> &str {
        &self.locale
    }

    fn name(&self, code: &CountryCode) -> Option<String> {
        self.get(code).map(str::to_string)
    }

    fn codes(&self) -> Vec<CountryCode> {
        self.entries.iter().map(|(code, _)| *code).collect()
    }

    fn names(&self) -> Vec<String> {
        self.entries.iter().map(|(_, name)| name.clone()).collect()
    }
}
