//! Atomic cross-record transactions.
//!
//! A [`Transaction`] stages writes against a snapshot of committed state;
//! nothing becomes visible until the closure passed to
//! [`Datastore::transact`](crate::Datastore::transact) returns `Ok`, and an
//! `Err` discards every staged write. The store holds its write lock for
//! the duration, so a committed transaction is observed in full or not at
//! all.

use crate::codec::{check_kind, decode, encode};
use std::collections::BTreeMap;
use summit_core::{EntityKey, Record, Result};

/// Staged view of the store inside one transaction.
pub struct Transaction<'a> {
    base: &'a BTreeMap<Vec<u8>, Vec<u8>>,
    // Staged writes; `None` marks a deletion.
    staged: BTreeMap<Vec<u8>, Option<Vec<u8>>>,
}

impl<'a> Transaction<'a> {
    pub(crate) fn new(base: &'a BTreeMap<Vec<u8>, Vec<u8>>) -> Self {
        Transaction {
            base,
            staged: BTreeMap::new(),
        }
    }

    /// Reads a record, seeing committed state plus this transaction's own
    /// staged writes.
    pub fn get<R: Record>(&self, key: &EntityKey) -> Result<Option<R>> {
        check_kind::<R>(key)?;
        let storage_key = key.storage_bytes();
        let bytes = match self.staged.get(&storage_key) {
            Some(staged) => staged.as_deref(),
            None => self.base.get(&storage_key).map(Vec::as_slice),
        };
        match bytes {
            Some(bytes) => Ok(Some(decode(bytes)?)),
            None => Ok(None),
        }
    }

    /// Stages an insert or update.
    pub fn put<R: Record>(&mut self, key: &EntityKey, record: &R) -> Result<()> {
        check_kind::<R>(key)?;
        self.staged
            .insert(key.storage_bytes(), Some(encode(record)?));
        Ok(())
    }

    /// Stages a deletion; returns whether the record currently exists in
    /// this transaction's view.
    pub fn delete(&mut self, key: &EntityKey) -> bool {
        let storage_key = key.storage_bytes();
        let existed = match self.staged.get(&storage_key) {
            Some(staged) => staged.is_some(),
            None => self.base.contains_key(&storage_key),
        };
        self.staged.insert(storage_key, None);
        existed
    }

    /// Number of staged writes.
    pub fn pending_writes(&self) -> usize {
        self.staged.len()
    }

    pub(crate) fn into_staged(self) -> BTreeMap<Vec<u8>, Option<Vec<u8>>> {
        self.staged
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use summit_core::records::Profile;
    use summit_core::{KeyId, Kind};

    fn profile_key(name: &str) -> EntityKey {
        EntityKey::root(Kind::Profile, KeyId::Name(name.to_string()))
    }

    #[test]
    fn test_reads_see_staged_writes() {
        let base = BTreeMap::new();
        let mut txn = Transaction::new(&base);
        let key = profile_key("alice");

        assert_eq!(txn.get::<Profile>(&key).unwrap(), None);

        let profile = Profile {
            display_name: "Alice".to_string(),
            ..Profile::default()
        };
        txn.put(&key, &profile).unwrap();
        assert_eq!(txn.get::<Profile>(&key).unwrap(), Some(profile));
        assert_eq!(txn.pending_writes(), 1);
    }

    #[test]
    fn test_staged_delete_shadows_base() {
        let key = profile_key("bob");
        let mut base = BTreeMap::new();
        base.insert(
            key.storage_bytes(),
            encode(&Profile::default()).unwrap(),
        );

        let mut txn = Transaction::new(&base);
        assert!(txn.delete(&key));
        assert_eq!(txn.get::<Profile>(&key).unwrap(), None);
        // Deleting again sees the staged tombstone
        assert!(!txn.delete(&key));
    }
}
