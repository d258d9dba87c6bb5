//! Read-only query sessions over committed state

use kvpay_core::error::{LedgerError, LedgerResult};
use kvpay_core::traits::QueryExecutor;
use kvpay_core::types::{AccountKey, Namespace};
use tracing::trace;

use crate::ledger::{Fault, MemLedger};

/// Read-only session against a [`MemLedger`]
///
/// Reads see the latest committed value at the time of each call.
pub struct MemQueryExecutor<'a> {
    ledger: &'a MemLedger,
    released: bool,
}

impl<'a> MemQueryExecutor<'a> {
    pub(crate) fn new(ledger: &'a MemLedger) -> Self {
        ledger.context_opened();
        trace!("query session opened");
        MemQueryExecutor {
            ledger,
            released: false,
        }
    }

    fn release(&mut self) {
        if !self.released {
            self.released = true;
            self.ledger.context_released();
            trace!("query session released");
        }
    }
}

impl QueryExecutor for MemQueryExecutor<'_> {
    fn get_state(&mut self, namespace: &Namespace, key: &str) -> LedgerResult<Option<Vec<u8>>> {
        if self.released {
            return Err(LedgerError::ContextClosed);
        }
        if self.ledger.take_fault(Fault::Read) {
            return Err(LedgerError::Storage(format!(
                "injected read failure for {}/{}",
                namespace, key
            )));
        }
        let key = AccountKey::new(namespace.clone(), key);
        Ok(self.ledger.store().get(&key).map(|v| v.value))
    }

    fn done(&mut self) {
        self.release();
    }
}

impl Drop for MemQueryExecutor<'_> {
    fn drop(&mut self) {
        self.release();
    }
}
