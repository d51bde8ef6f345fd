//! Configuration for the resolver and the lookup service.

use std::net::SocketAddr;
use std::path::PathBuf;

use crate::domain::{Locale, UnknownLocale};
use crate::names::{BundleError, CacheConfig};

/// Environment variable selecting the built-in locale.
pub const LOCALE_VAR: &str = "COUNTRY_NAMES_LOCALE";

/// Environment variable pointing at a custom bundle file.
pub const BUNDLE_VAR: &str = "COUNTRY_NAMES_BUNDLE";

/// Environment variable with the service listen address.
pub const ADDR_VAR: &str = "COUNTRY_NAMES_ADDR";

/// Default listen address for the lookup service.
const DEFAULT_ADDR: ([u8; 4], u16) = ([127, 0, 0, 1], 3000);

/// Errors from building configuration or a resolver from it.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error(transparent)]
    UnknownLocale(#[from] UnknownLocale),

    #[error("invalid listen address {value:?}: {message}")]
    InvalidAddr { value: String, message: String },

    #[error("failed to load bundle: {0}")]
    Bundle(#[from] BundleError),
}

/// Configuration for a [`CountryNames`](crate::names::CountryNames) resolver.
#[derive(Debug, Clone, Default)]
pub struct ResolverConfig {
    /// Built-in locale to use when no bundle is given.
    pub locale: Locale,

    /// Custom bundle file; overrides `locale` when set.
    pub bundle_path: Option<PathBuf>,

    /// Name cache settings.
    pub cache: CacheConfig,
}

impl ResolverConfig {
    /// Set the built-in locale.
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    /// Use a custom bundle file.
    pub fn with_bundle_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.bundle_path = Some(path.into());
        self
    }

    /// Set the cache configuration.
    pub fn with_cache(mut self, cache: CacheConfig) -> Self {
        self.cache = cache;
        self
    }

    /// Build from a variable lookup function.
    ///
    /// Unset or blank variables fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(tag) = non_blank(lookup(LOCALE_VAR)) {
            config.locale = Locale::from_tag(&tag)?;
        }

        if let Some(path) = non_blank(lookup(BUNDLE_VAR)) {
            config.bundle_path = Some(PathBuf::from(path));
        }

        Ok(config)
    }

    /// Build from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }
}

/// Configuration for the HTTP lookup service.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Address to listen on.
    pub addr: SocketAddr,

    /// Resolver settings.
    pub resolver: ResolverConfig,
}

impl ServiceConfig {
    /// Build from a variable lookup function.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let addr = match non_blank(lookup(ADDR_VAR)) {
            Some(value) => value.parse().map_err(|e: std::net::AddrParseError| {
                ConfigError::InvalidAddr {
                    message: e.to_string(),
                    value,
                }
            })?,
            None => SocketAddr::from(DEFAULT_ADDR),
        };

        Ok(Self {
            addr,
            resolver: ResolverConfig::from_lookup(lookup)?,
        })
    }

    /// Build from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(DEFAULT_ADDR),
            resolver: ResolverConfig::default(),
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
