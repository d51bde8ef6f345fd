//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::CountryCode;

/// Query for a single lookup.
#[derive(Debug, Deserialize)]
pub struct LookupRequest {
    /// Country code in any case; missing is a bad request
    pub code: Option<String>,
}

/// A resolved country.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CountryResult {
    /// Normalized country code
    pub code: CountryCode,

    /// Localized name
    pub name: String,
}

/// All supported countries in table order.
#[derive(Debug, Serialize, Deserialize)]
pub struct CountryListResponse {
    /// Locale tag of the names
    pub locale: String,

    /// Countries, most populous first for the built-in tables
    pub countries: Vec<CountryResult>,
}

/// Error response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

impl From<(CountryCode, String)> for CountryResult {
    fn from((code, name): (CountryCode, String)) -> Self {
        Self { code, name }
    }
}
