//! # Summit Store
//!
//! Record store for the Summit conference service.
//!
//! ## ⚠️ Internal Implementation Detail
//!
//! **This crate is an internal implementation detail of Summit.**
//!
//! Users should depend on the main [`summit`](https://crates.io/crates/summit)
//! crate instead, which provides the stable public API. This crate's API may
//! change without notice between minor versions.
//!
//! ---
//!
//! The store keeps every record in one sorted map keyed by its encoded
//! entity-key path, so descendants sit next to their ancestors and a whole
//! subtree shares a key prefix:
//!
//! ```text
//! Profile:n:alice
//! Profile:n:alice/Conference:i:1
//! Profile:n:alice/Conference:i:1/Session:i:1
//! Profile:n:alice/Conference:i:1/Session:i:2
//! ```
//!
//! Access is typed: records serialize through `serde`/`bincode`, queries
//! execute validated [`QueryPlan`]s, and the one cross-record mutation the
//! service needs runs through [`Datastore::transact`] with atomic commit or
//! full rollback.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};
use summit_core::query::QueryPlan;
use summit_core::{Entity, EntityKey, Error, Record, Result};
use tracing::debug;

mod codec;
mod exec;
mod txn;

pub use txn::Transaction;

use codec::{check_kind, decode, encode};

/// The record store.
///
/// Thread-safe and cheap to clone; clones share the same underlying map.
#[derive(Clone, Default)]
pub struct Datastore {
    inner: Arc<DatastoreInner>,
}

#[derive(Default)]
struct DatastoreInner {
    records: RwLock<BTreeMap<Vec<u8>, Vec<u8>>>,
    next_id: AtomicU64,
}

impl Datastore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocates a fresh numeric id for a new record key.
    ///
    /// Ids are unique per store instance and never reused.
    pub fn allocate_id(&self) -> u64 {
        self.inner.next_id.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// Inserts or replaces the record stored under `key`.
    pub fn put<R: Record>(&self, key: &EntityKey, record: &R) -> Result<()> {
        check_kind::<R>(key)?;
        let bytes = encode(record)?;
        let mut records = self.write_lock()?;
        debug!(key = %key, "put record");
        records.insert(key.storage_bytes(), bytes);
        Ok(())
    }

    /// Retrieves the record stored under `key`.
    pub fn get<R: Record>(&self, key: &EntityKey) -> Result<Option<R>> {
        check_kind::<R>(key)?;
        let records = self.read_lock()?;
        match records.get(&key.storage_bytes()) {
            Some(bytes) => Ok(Some(decode(bytes)?)),
            None => Ok(None),
        }
    }

    /// Fetches many records in one pass over the store.
    ///
    /// The result is positional: `result[i]` corresponds to `keys[i]`,
    /// `None` where nothing is stored.
    pub fn get_multi<R: Record>(&self, keys: &[EntityKey]) -> Result<Vec<Option<R>>> {
        for key in keys {
            check_kind::<R>(key)?;
        }
        let records = self.read_lock()?;
        keys.iter()
            .map(|key| match records.get(&key.storage_bytes()) {
                Some(bytes) => Ok(Some(decode(bytes)?)),
                None => Ok(None),
            })
            .collect()
    }

    /// Deletes the record stored under `key`.
    ///
    /// Returns `true` if a record existed and was deleted.
    pub fn delete(&self, key: &EntityKey) -> Result<bool> {
        let mut records = self.write_lock()?;
        debug!(key = %key, "delete record");
        Ok(records.remove(&key.storage_bytes()).is_some())
    }

    /// Executes a validated query plan.
    ///
    /// Scans records of `R`'s kind (restricted to the subtree below
    /// `ancestor` when given), applies the plan's predicates in order, and
    /// returns matches sorted by the plan's sort keys.
    pub fn query<R: Record>(
        &self,
        ancestor: Option<&EntityKey>,
        plan: &QueryPlan<R::Field>,
    ) -> Result<Vec<Entity<R>>> {
        let records = self.read_lock()?;
        let results = exec::run_query(&records, ancestor, plan)?;
        debug!(
            kind = %R::kind(),
            filters = plan.filters().len(),
            results = results.len(),
            "query executed"
        );
        Ok(results)
    }

    /// Runs `mutation` against a bounded set of records with atomic commit
    /// or full rollback.
    ///
    /// The closure stages reads and writes on the supplied [`Transaction`];
    /// when it returns `Ok` every staged write commits in one step, and when
    /// it returns `Err` none of them do. The store's write lock is held
    /// throughout, so other callers never observe a partial commit.
    pub fn transact<T, F>(&self, mutation: F) -> Result<T>
    where
        F: FnOnce(&mut Transaction<'_>) -> Result<T>,
    {
        let mut records = self.write_lock()?;
        let mut txn = Transaction::new(&records);
        let value = mutation(&mut txn)?;
        let staged = txn.into_staged();
        debug!(writes = staged.len(), "transaction committed");
        for (key, write) in staged {
            match write {
                Some(bytes) => {
                    records.insert(key, bytes);
                }
                None => {
                    records.remove(&key);
                }
            }
        }
        Ok(value)
    }

    /// Number of records in the store.
    pub fn len(&self) -> usize {
        self.inner.records.read().map(|r| r.len()).unwrap_or(0)
    }

    /// True when the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn read_lock(&self) -> Result<std::sync::RwLockReadGuard<'_, BTreeMap<Vec<u8>, Vec<u8>>>> {
        self.inner.records.read().map_err(|_| Error::LockPoisoned)
    }

    fn write_lock(&self) -> Result<std::sync::RwLockWriteGuard<'_, BTreeMap<Vec<u8>, Vec<u8>>>> {
        self.inner.records.write().map_err(|_| Error::LockPoisoned)
    }
}
