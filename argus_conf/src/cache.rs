//! Canonicalizing configuration cache.
//!
//! Maps each distinct field tuple to the single `CheckConfig` instance that
//! represents it. Entries are never evicted. Lookup and insertion happen
//! under one lock acquisition, so concurrent decorations with equal fields
//! always receive the same instance.

use crate::config::{CheckConfig, ConfigFields};
use parking_lot::Mutex;
use rustc_hash::FxHashMap;
use std::collections::hash_map::Entry;
use std::sync::{Arc, OnceLock};
use tracing::{debug, trace};

/// Cache of canonical configurations keyed by their fields.
pub struct ConfigCache {
    entries: Mutex<FxHashMap<ConfigFields, Arc<CheckConfig>>>,
}

impl ConfigCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(FxHashMap::default()),
        }
    }

    /// Return the canonical configuration for `fields`, creating and
    /// registering it on first request.
    pub fn get_or_create(&self, fields: ConfigFields) -> Arc<CheckConfig> {
        let mut entries = self.entries.lock();

        match entries.entry(fields) {
            Entry::Occupied(entry) => {
                trace!(
                    debug = fields.debug,
                    strategy = %fields.strategy,
                    "conf: cache hit"
                );
                Arc::clone(entry.get())
            }
            Entry::Vacant(entry) => {
                let config = Arc::new(CheckConfig::from_fields(fields));
                debug!(
                    debug = fields.debug,
                    strategy = %fields.strategy,
                    "conf: registered canonical configuration"
                );
                Arc::clone(entry.insert(config))
            }
        }
    }

    /// Look up an existing configuration without creating one.
    pub fn get(&self, fields: &ConfigFields) -> Option<Arc<CheckConfig>> {
        self.entries.lock().get(fields).cloned()
    }

    /// Check if a configuration exists for `fields`.
    pub fn contains(&self, fields: &ConfigFields) -> bool {
        self.entries.lock().contains_key(fields)
    }

    /// Number of canonical configurations registered.
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    /// Check if no configuration has been registered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for ConfigCache {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Global Cache Access
// =============================================================================

/// Process-wide configuration cache.
static CONFIG_CACHE: OnceLock<ConfigCache> = OnceLock::new();

/// Get the process-wide configuration cache.
#[inline]
pub fn config_cache() -> &'static ConfigCache {
    CONFIG_CACHE.get_or_init(ConfigCache::new)
}

/// Initialize the process-wide cache (call at startup).
pub fn init_config_cache() {
    let _ = config_cache();
}
