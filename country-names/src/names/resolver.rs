//! Country name resolution.

use std::sync::Arc;

use tracing::{debug, trace};

use crate::config::{ConfigError, ResolverConfig};
use crate::domain::{CountryCode, Locale};

use super::cache::{CacheConfig, NameCache};
use super::error::{BundleError, NameError};
use super::provider::NameProvider;
use super::table::NameTable;

/// Resolves country codes to localized names.
///
/// Wraps a [`NameProvider`] with a [`NameCache`] so each code is looked up
/// at most once per resolver. Clones share the provider and the cache.
pub struct CountryNames<P = NameTable> {
    provider: Arc<P>,
    cache: NameCache,
}

impl<P> Clone for CountryNames<P> {
    fn clone(&self) -> Self {
        Self {
            provider: Arc::clone(&self.provider),
            cache: self.cache.clone(),
        }
    }
}

impl CountryNames<NameTable> {
    /// Create a resolver over a built-in locale table.
    pub fn builtin(locale: Locale) -> Result<Self, BundleError> {
        Ok(Self::new(NameTable::builtin(locale)?))
    }

    /// Create a resolver from configuration.
    ///
    /// A configured bundle path takes precedence over the locale.
    pub fn from_config(config: &ResolverConfig) -> Result<Self, ConfigError> {
        let table = match &config.bundle_path {
            Some(path) => NameTable::from_file(path)?,
            None => NameTable::builtin(config.locale)?,
        };

        Ok(Self::with_cache(table, NameCache::new(&config.cache)))
    }
}

impl<P: NameProvider> CountryNames<P> {
    /// Create a resolver with a fresh default cache.
    pub fn new(provider: P) -> Self {
        Self::with_cache(provider, NameCache::new(&CacheConfig::default()))
    }

    /// Create a resolver that uses the given cache.
    pub fn with_cache(provider: P, cache: NameCache) -> Self {
        Self {
            provider: Arc::new(provider),
            cache,
        }
    }

    /// Look up the localized name for a country code.
    ///
    /// The code is trimmed and upper-cased before lookup, so `"usa"` and
    /// `"USA"` resolve the same. Blank input is an
    /// [`InvalidArgument`](NameError::InvalidArgument); anything that is not
    /// in the provider's table is [`NotFound`](NameError::NotFound).
    pub fn resolve(&self, code: &str) -> Result<String, NameError> {
        self.resolve_with_code(code).map(|(_, name)| name)
    }

    /// Like [`resolve`](Self::resolve), also returning the normalized code.
    pub fn resolve_with_code(&self, code: &str) -> Result<(CountryCode, String), NameError> {
        let trimmed = code.trim();
        if trimmed.is_empty() {
            return Err(NameError::InvalidArgument);
        }

        let not_found = || NameError::NotFound {
            code: trimmed.to_ascii_uppercase(),
        };

        let code = CountryCode::parse_normalized(trimmed).map_err(|_| not_found())?;

        if let Some(name) = self.cache.get(&code) {
            trace!(%code, "name cache hit");
            return Ok((code, name.to_string()));
        }

        let name = self.cache.get_or_lookup(code, || {
            debug!(%code, locale = self.provider.locale(), "looking up country name");
            self.provider.name(&code)
        });

        match name {
            Some(name) => Ok((code, name.to_string())),
            None => {
                debug!(%code, "unknown country code");
                Err(not_found())
            }
        }
    }

    /// Like [`resolve`](Self::resolve), treating an absent code as an
    /// [`InvalidArgument`](NameError::InvalidArgument).
    pub fn resolve_opt(&self, code: Option<&str>) -> Result<String, NameError> {
        match code {
            Some(code) => self.resolve(code),
            None => Err(NameError::InvalidArgument),
        }
    }

    /// All supported codes, in table order.
    pub fn supported_codes(&self) -> Vec<CountryCode> {
        self.provider.codes()
    }

    /// All supported names, aligned with [`supported_codes`](Self::supported_codes).
    pub fn supported_names(&self) -> Vec<String> {
        self.provider.names()
    }

    /// All `(code, name)` pairs, in table order.
    pub fn countries(&self) -> Vec<(CountryCode, String)> {
        self.provider
            .codes()
            .into_iter()
            .zip(self.provider.names())
            .collect()
    }

    /// Locale tag of the names being served.
    pub fn locale(&self) -> &str {
        self.provider.locale()
    }

    /// Number of names currently cached.
    pub fn cached_count(&self) -> u64 {
        self.cache.entry_count()
    }

    /// The underlying provider.
    pub fn provider(&self) -> &P {
        &self.provider
    }
}
