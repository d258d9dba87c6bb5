//! In-memory validated ledger
//!
//! [`MemLedger`] hands out simulation and query sessions over a
//! [`StateStore`], and applies proposals through [`MemLedger::commit`].
//!
//! ## Commit Sequence
//!
//! ```text
//! 1. Decode the write-set of every action (abort on the first malformed one)
//! 2. Take the store write lock, allocate one commit version
//! 3. Apply every write of every action, in action order
//! 4. Return the commit version
//! ```
//!
//! Endorsements are not checked and read-sets are not validated.

use std::sync::atomic::{AtomicUsize, Ordering};

use kvpay_core::error::{LedgerError, LedgerResult};
use kvpay_core::proposal::Transaction;
use kvpay_core::traits::{QueryExecutor, TxSimulator, ValidatedLedger};
use parking_lot::Mutex;
use tracing::debug;

use crate::query::MemQueryExecutor;
use crate::simulator::MemTxSimulator;
use crate::store::StateStore;
use crate::write_set::WriteSet;

/// Ledger call that an injected fault makes fail
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fault {
    /// `new_tx_simulator` fails with `Unavailable`
    OpenSimulator,
    /// `new_query_executor` fails with `Unavailable`
    OpenQuery,
    /// The next `get_state` on any session fails with `Storage`
    Read,
    /// The next `tx_simulation_results` fails with `Serialization`
    Extract,
}

/// In-memory ledger implementing [`ValidatedLedger`]
pub struct MemLedger {
    store: StateStore,
    open_contexts: AtomicUsize,
    faults: Mutex<Vec<Fault>>,
}

impl MemLedger {
    /// Create an empty ledger
    pub fn new() -> Self {
        MemLedger {
            store: StateStore::new(),
            open_contexts: AtomicUsize::new(0),
            faults: Mutex::new(Vec::new()),
        }
    }

    /// Apply every write-set carried by `tx` atomically.
    ///
    /// # Returns
    /// - Ok(commit_version) on success
    /// - Err(MalformedWriteSet) if any action payload fails to decode; nothing is applied
    pub fn commit(&self, tx: &Transaction) -> LedgerResult<u64> {
        let mut write_sets = Vec::with_capacity(tx.endorsed_actions.len());
        for (action, bytes) in tx.write_sets().enumerate() {
            let ws = WriteSet::from_bytes(bytes).map_err(|e| LedgerError::MalformedWriteSet {
                action,
                reason: e.to_string(),
            })?;
            write_sets.push(ws);
        }

        let writes: Vec<_> = write_sets
            .into_iter()
            .flat_map(|ws| ws.writes)
            .map(|w| (w.key, w.value))
            .collect();
        let write_count = writes.len();
        let version = self.store.apply(writes);
        debug!(version, writes = write_count, "transaction committed");
        Ok(version)
    }

    /// Get current commit version
    pub fn current_version(&self) -> u64 {
        self.store.current_version()
    }

    /// Number of sessions opened and not yet released
    pub fn open_contexts(&self) -> usize {
        self.open_contexts.load(Ordering::SeqCst)
    }

    /// Make the next call matching `fault` fail once.
    pub fn fail_next(&self, fault: Fault) {
        self.faults.lock().push(fault);
    }

    pub(crate) fn take_fault(&self, fault: Fault) -> bool {
        let mut faults = self.faults.lock();
        match faults.iter().position(|f| *f == fault) {
            Some(idx) => {
                faults.remove(idx);
                true
            }
            None => false,
        }
    }

    pub(crate) fn store(&self) -> &StateStore {
        &self.store
    }

    pub(crate) fn context_opened(&self) {
        self.open_contexts.fetch_add(1, Ordering::SeqCst);
    }

    pub(crate) fn context_released(&self) {
        self.open_contexts.fetch_sub(1, Ordering::SeqCst);
    }
}

impl Default for MemLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl ValidatedLedger for MemLedger {
    fn new_tx_simulator(&self) -> LedgerResult<Box<dyn TxSimulator + '_>> {
        if self.take_fault(Fault::OpenSimulator) {
            return Err(LedgerError::Unavailable(
                "injected simulator open failure".to_string(),
            ));
        }
        Ok(Box::new(MemTxSimulator::new(self)))
    }

    fn new_query_executor(&self) -> LedgerResult<Box<dyn QueryExecutor + '_>> {
        if self.take_fault(Fault::OpenQuery) {
            return Err(LedgerError::Unavailable(
                "injected query open failure".to_string(),
            ));
        }
        Ok(Box::new(MemQueryExecutor::new(self)))
    }
}
