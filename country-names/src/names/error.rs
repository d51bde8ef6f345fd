//! Name lookup error types.

/// Errors returned by [`CountryNames::resolve`](super::CountryNames::resolve).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NameError {
    /// No code was given, or it was blank
    #[error("country code may not be empty")]
    InvalidArgument,

    /// The code is not in the active name table
    #[error("country code {code} not found")]
    NotFound { code: String },
}

/// Errors that can occur when loading a locale bundle.
#[derive(Debug, thiserror::Error)]
pub enum BundleError {
    /// Reading the bundle file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Bundle is not valid JSON or has the wrong shape
    #[error("JSON parse error: {message}")]
    Json { message: String },

    /// An entry has a malformed country code
    #[error("invalid code {code:?} at entry {index}")]
    InvalidCode { index: usize, code: String },

    /// The same code appears twice
    #[error("duplicate code {code}")]
    DuplicateCode { code: String },

    /// An entry has a blank name
    #[error("empty name for code {code}")]
    EmptyName { code: String },

    /// The bundle lists no countries
    #[error("bundle for locale {locale:?} has no countries")]
    Empty { locale: String },
}
