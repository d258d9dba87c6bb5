//! Scoped ledger sessions
//!
//! Each guard owns an open session and calls `done()` when dropped, so a
//! session is released on every exit path of an operation, including `?`
//! and early returns. Sessions must tolerate `done()` after extraction.

use kvpay_core::encoding::{decode_balance, encode_balance};
use kvpay_core::traits::{QueryExecutor, TxSimulator};
use kvpay_core::types::{Balance, Namespace};

use crate::error::{AppError, AppResult};

/// Open simulation session, released on drop
pub(crate) struct SimulationGuard<'s> {
    inner: Box<dyn TxSimulator + 's>,
}

impl<'s> SimulationGuard<'s> {
    pub(crate) fn new(inner: Box<dyn TxSimulator + 's>) -> Self {
        SimulationGuard { inner }
    }

    pub(crate) fn read_balance(&mut self, namespace: &Namespace, account: &str) -> AppResult<Balance> {
        let bytes = self
            .inner
            .get_state(namespace, account)
            .map_err(|source| AppError::ReadFailed {
                account: account.to_string(),
                source,
            })?;
        Ok(decode_balance(bytes.as_deref()))
    }

    pub(crate) fn write_balance(&mut self, namespace: &Namespace, account: &str, balance: Balance) {
        self.inner
            .set_state(namespace, account, encode_balance(balance));
    }

    pub(crate) fn extract(&mut self) -> AppResult<Vec<u8>> {
        self.inner
            .tx_simulation_results()
            .map_err(|source| AppError::SimulationExtractionFailed { source })
    }
}

impl Drop for SimulationGuard<'_> {
    fn drop(&mut self) {
        self.inner.done();
    }
}

/// Open query session, released on drop
pub(crate) struct QueryGuard<'s> {
    inner: Box<dyn QueryExecutor + 's>,
}

impl<'s> QueryGuard<'s> {
    pub(crate) fn new(inner: Box<dyn QueryExecutor + 's>) -> Self {
        QueryGuard { inner }
    }

    pub(crate) fn read_balance(&mut self, namespace: &Namespace, account: &str) -> AppResult<Balance> {
        let bytes = self
            .inner
            .get_state(namespace, account)
            .map_err(|source| AppError::ReadFailed {
                account: account.to_string(),
                source,
            })?;
        Ok(decode_balance(bytes.as_deref()))
    }
}

impl Drop for QueryGuard<'_> {
    fn drop(&mut self) {
        self.inner.done();
    }
}
