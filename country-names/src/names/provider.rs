//! The name-provider seam.

use crate::domain::CountryCode;

/// Supplies localized names for country codes.
///
/// `codes()` and `names()` must be aligned: the name at index `i` belongs
/// to the code at index `i`.
pub trait NameProvider: Send + Sync {
    /// Locale tag of the names this provider returns.
    fn locale(&self) -> &str;

    /// Look up the name for a code, or `None` if the code is unknown.
    fn name(&self, code: &CountryCode) -> Option<String>;

    /// All supported codes, in table order.
    fn codes(&self) -> Vec<CountryCode>;

    /// All supported names, aligned with [`codes`](Self::codes).
    fn names(&self) -> Vec<String>;
}
