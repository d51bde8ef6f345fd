//! Application state for the web layer.

use crate::names::CountryNames;

/// Shared application state.
///
/// Cloned per request; the resolver's table and cache are shared.
#[derive(Clone)]
pub struct AppState {
    /// Country name resolver
    pub names: CountryNames,
}

impl AppState {
    /// Create a new app state.
    pub fn new(names: CountryNames) -> Self {
        Self { names }
    }
}
