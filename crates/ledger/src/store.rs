//! Versioned state storage
//!
//! Committed state is a `BTreeMap` behind a `parking_lot::RwLock`. Every
//! committed transaction bumps a global version counter once, and all keys
//! it writes are stamped with that version.

use kvpay_core::types::AccountKey;
use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};

/// Stored bytes with the version of the transaction that wrote them
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionedValue {
    /// Raw value bytes
    pub value: Vec<u8>,
    /// Commit version that produced this value
    pub version: u64,
}

/// Committed key space of a ledger
pub struct StateStore {
    data: RwLock<BTreeMap<AccountKey, VersionedValue>>,
    /// Global version counter
    ///
    /// Monotonically increasing. Each applied batch increments by 1.
    version: AtomicU64,
}

impl StateStore {
    /// Create an empty store at version 0
    pub fn new() -> Self {
        StateStore {
            data: RwLock::new(BTreeMap::new()),
            version: AtomicU64::new(0),
        }
    }

    /// Latest committed value for `key`
    pub fn get(&self, key: &AccountKey) -> Option<VersionedValue> {
        self.data.read().get(key).cloned()
    }

    /// Get current global version
    pub fn current_version(&self) -> u64 {
        self.version.load(Ordering::SeqCst)
    }

    /// Apply a batch of writes under one new version.
    ///
    /// The write lock is held for the whole batch, so readers see either
    /// none or all of it. Returns the version assigned.
    pub fn apply<I>(&self, writes: I) -> u64
    where
        I: IntoIterator<Item = (AccountKey, Vec<u8>)>,
    {
        let mut data = self.data.write();
        let version = self.version.fetch_add(1, Ordering::SeqCst) + 1;
        for (key, value) in writes {
            data.insert(key, VersionedValue { value, version });
        }
        version
    }

    /// Number of keys with a committed value
    pub fn len(&self) -> usize {
        self.data.read().len()
    }

    /// Check if nothing has been committed
    pub fn is_empty(&self) -> bool {
        self.data.read().is_empty()
    }
}

impl Default for StateStore {
    fn default() -> Self {
        Self::new()
    }
}
