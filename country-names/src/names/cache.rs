//! Memoization cache for resolved names.
//!
//! Entries are only ever inserted: there is no TTL, no capacity bound and no
//! invalidation, so a name stays cached for as long as the cache lives.
//! Failed lookups are never stored.

use std::sync::Arc;

use moka::sync::Cache as MokaCache;

use crate::domain::CountryCode;

/// Configuration for the name cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// Number of entries to preallocate room for.
    pub initial_capacity: usize,
}

impl CacheConfig {
    /// Create a config with the given initial capacity.
    pub fn new(initial_capacity: usize) -> Self {
        Self { initial_capacity }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            initial_capacity: 64,
        }
    }
}

/// Thread-safe, insert-only cache from code to name.
///
/// Clones share the same underlying storage.
#[derive(Clone)]
pub struct NameCache {
    names: MokaCache<CountryCode, Arc<str>>,
}

impl NameCache {
    /// Create a new, empty cache.
    pub fn new(config: &CacheConfig) -> Self {
        let names = MokaCache::builder()
            .initial_capacity(config.initial_capacity)
            .build();

        Self { names }
    }

    /// Get a cached name.
    pub fn get(&self, code: &CountryCode) -> Option<Arc<str>> {
        self.names.get(code)
    }

    /// Get a cached name, or run `lookup` and cache its result.
    ///
    /// Concurrent callers for the same code wait on a single `lookup`.
    /// A `None` from `lookup` is returned as-is and not cached.
    pub fn get_or_lookup<F>(&self, code: CountryCode, lookup: F) -> Option<Arc<str>>
    where
        F: FnOnce() -> Option<String>,
    {
        self.names
            .optionally_get_with(code, || lookup().map(Arc::from))
    }

    /// Check whether a code has a cached name.
    pub fn contains(&self, code: &CountryCode) -> bool {
        self.names.contains_key(code)
    }

    /// Number of cached entries.
    pub fn entry_count(&self) -> u64 {
        self.names.run_pending_tasks();
        self.names.entry_count()
    }
}

impl Default for NameCache {
    fn default() -> Self {
        Self::new(&CacheConfig::default())
    }
}
