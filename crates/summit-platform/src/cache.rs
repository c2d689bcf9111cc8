//! Shared string cache.
//!
//! Stands in for the platform's memcache: a handful of well-known keys
//! set by cron-style handlers and read back by endpoints. Values are
//! plain strings; there is no expiry or eviction policy.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use summit_core::{Error, Result};

/// A thread-safe string cache.
///
/// Cheap to clone; clones share the same underlying map.
#[derive(Clone, Default)]
pub struct Cache {
    inner: Arc<RwLock<HashMap<String, String>>>,
}

impl Cache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `value` under `key`, replacing any previous value.
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut map = self.inner.write().map_err(|_| Error::LockPoisoned)?;
        map.insert(key.to_string(), value.to_string());
        Ok(())
    }

    /// Returns the value stored under `key`, if any.
    pub fn get(&self, key: &str) -> Result<Option<String>> {
        let map = self.inner.read().map_err(|_| Error::LockPoisoned)?;
        Ok(map.get(key).cloned())
    }

    /// Removes the value stored under `key`.
    ///
    /// Returns `true` if a value existed and was removed.
    pub fn delete(&self, key: &str) -> Result<bool> {
        let mut map = self.inner.write().map_err(|_| Error::LockPoisoned)?;
        Ok(map.remove(key).is_some())
    }
}
