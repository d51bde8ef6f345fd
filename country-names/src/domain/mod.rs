//! Domain types for country name lookup.
//!
//! Types enforce their invariants at construction time, so code that
//! receives a `CountryCode` can trust its shape.

mod country_code;
mod locale;

pub use country_code::{CountryCode, InvalidCountryCode};
pub use locale::{Locale, UnknownLocale};
