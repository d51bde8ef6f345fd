//! Country code → localized name lookup.
//!
//! Names come from a [`NameProvider`]; the only built-in provider is
//! [`NameTable`], an ordered table loaded from a locale bundle. Resolved
//! names are memoized per resolver in a [`NameCache`].

mod cache;
mod error;
mod provider;
mod resolver;
mod table;

#[cfg(test)]
mod resolver_tests;

pub use cache::{CacheConfig, NameCache};
pub use error::{BundleError, NameError};
pub use provider::NameProvider;
pub use resolver::CountryNames;
pub use table::{BundleDto, CountryDto, NameTable};
