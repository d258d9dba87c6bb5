//! Simulation sessions
//!
//! A [`MemTxSimulator`] reads committed state and buffers writes without
//! applying them. Its result is a serialized [`WriteSet`] that becomes the
//! payload of a proposal action.
//!
//! # Read-Your-Writes Semantics
//!
//! When reading a key, the session checks in order:
//! 1. **write_set**: returns the value buffered by this session
//! 2. **committed state**: returns the stored value, tracks its version in `read_set`

use std::collections::BTreeMap;

use kvpay_core::error::{LedgerError, LedgerResult};
use kvpay_core::traits::TxSimulator;
use kvpay_core::types::{AccountKey, Namespace};
use tracing::{trace, warn};

use crate::ledger::{Fault, MemLedger};
use crate::write_set::{ReadRecord, WriteRecord, WriteSet};

/// Status of a session in its lifecycle
///
/// - `Active` → `Closed` (results extracted, `done()`, or drop)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    /// Session accepts reads and writes
    Active,
    /// Session released; further calls fail with `ContextClosed`
    Closed,
}

/// Read/write session against a [`MemLedger`]
pub struct MemTxSimulator<'a> {
    ledger: &'a MemLedger,
    /// Keys read from committed state and the version observed
    ///
    /// Version 0 means the key did not exist when read.
    read_set: BTreeMap<AccountKey, u64>,
    /// Keys written with their new values (buffered)
    write_set: BTreeMap<AccountKey, Vec<u8>>,
    status: SessionStatus,
}

impl<'a> MemTxSimulator<'a> {
    pub(crate) fn new(ledger: &'a MemLedger) -> Self {
        ledger.context_opened();
        trace!("simulation session opened");
        MemTxSimulator {
            ledger,
            read_set: BTreeMap::new(),
            write_set: BTreeMap::new(),
            status: SessionStatus::Active,
        }
    }

    /// Current lifecycle status
    pub fn status(&self) -> SessionStatus {
        self.status
    }

    /// Number of distinct committed keys read
    pub fn read_count(&self) -> usize {
        self.read_set.len()
    }

    /// Number of distinct keys written
    pub fn write_count(&self) -> usize {
        self.write_set.len()
    }

    fn ensure_active(&self) -> LedgerResult<()> {
        match self.status {
            SessionStatus::Active => Ok(()),
            SessionStatus::Closed => Err(LedgerError::ContextClosed),
        }
    }

    fn close(&mut self) {
        if self.status == SessionStatus::Active {
            self.status = SessionStatus::Closed;
            self.ledger.context_released();
            trace!(
                reads = self.read_set.len(),
                writes = self.write_set.len(),
                "simulation session released"
            );
        }
    }

    fn build_write_set(&self) -> WriteSet {
        WriteSet {
            reads: self
                .read_set
                .iter()
                .map(|(key, &version)| ReadRecord {
                    key: key.clone(),
                    version,
                })
                .collect(),
            writes: self
                .write_set
                .iter()
                .map(|(key, value)| WriteRecord {
                    key: key.clone(),
                    value: value.clone(),
                })
                .collect(),
        }
    }
}

impl TxSimulator for MemTxSimulator<'_> {
    fn get_state(&mut self, namespace: &Namespace, key: &str) -> LedgerResult<Option<Vec<u8>>> {
        self.ensure_active()?;
        if self.ledger.take_fault(Fault::Read) {
            return Err(LedgerError::Storage(format!(
                "injected read failure for {}/{}",
                namespace, key
            )));
        }

        let key = AccountKey::new(namespace.clone(), key);
        if let Some(value) = self.write_set.get(&key) {
            return Ok(Some(value.clone()));
        }

        let committed = self.ledger.store().get(&key);
        let version = committed.as_ref().map_or(0, |v| v.version);
        self.read_set.entry(key).or_insert(version);
        Ok(committed.map(|v| v.value))
    }

    fn set_state(&mut self, namespace: &Namespace, key: &str, value: Vec<u8>) {
        if self.status != SessionStatus::Active {
            warn!(%namespace, key, "write after session closed ignored");
            return;
        }
        self.write_set
            .insert(AccountKey::new(namespace.clone(), key), value);
    }

    fn tx_simulation_results(&mut self) -> LedgerResult<Vec<u8>> {
        self.ensure_active()?;
        let result = if self.ledger.take_fault(Fault::Extract) {
            Err(LedgerError::Serialization(
                "injected write-set serialization failure".to_string(),
            ))
        } else {
            self.build_write_set().to_bytes()
        };
        self.close();
        result
    }

    fn done(&mut self) {
        self.close();
    }
}

impl Drop for MemTxSimulator<'_> {
    fn drop(&mut self) {
        self.close();
    }
}
