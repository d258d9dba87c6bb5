//! Ledger collaborator contract
//!
//! A payment application never touches ledger storage directly. It opens
//! sessions through a [`ValidatedLedger`]:
//! - [`TxSimulator`]: read/write session whose writes are buffered and
//!   serialized into a write-set instead of being applied
//! - [`QueryExecutor`]: read-only session over committed state
//!
//! These traits enable swapping the ledger implementation (in-memory,
//! networked, mocked) without touching the application.

use crate::error::LedgerResult;
use crate::types::Namespace;

/// Ledger able to hand out simulation and query sessions
///
/// Thread safety: implementations are shared between callers, so all
/// methods take `&self` and the trait requires `Send + Sync`.
pub trait ValidatedLedger: Send + Sync {
    /// Begin a read/write simulation session.
    ///
    /// # Errors
    ///
    /// Returns an error if the ledger cannot open a session.
    fn new_tx_simulator(&self) -> LedgerResult<Box<dyn TxSimulator + '_>>;

    /// Begin a read-only session against committed state.
    ///
    /// # Errors
    ///
    /// Returns an error if the ledger cannot open a session.
    fn new_query_executor(&self) -> LedgerResult<Box<dyn QueryExecutor + '_>>;
}

/// Scoped read/write session over versioned state
///
/// # Lifecycle
///
/// 1. **OPEN**: obtained from [`ValidatedLedger::new_tx_simulator`]
/// 2. **READ/WRITE**: `get_state()` / `set_state()`
/// 3. **EXTRACT**: `tx_simulation_results()` serializes the write-set and ends the session
/// 4. **RELEASE**: `done()`; must be safe to call after extraction and more than once
pub trait TxSimulator {
    /// Read the value stored under `key`; `Ok(None)` when absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the read fails or the session has ended.
    fn get_state(&mut self, namespace: &Namespace, key: &str) -> LedgerResult<Option<Vec<u8>>>;

    /// Buffer a write of `value` under `key`.
    ///
    /// Errors, if any, surface at extraction.
    fn set_state(&mut self, namespace: &Namespace, key: &str, value: Vec<u8>);

    /// Serialize the accumulated write-set and end the session.
    ///
    /// # Errors
    ///
    /// Returns an error if the write-set cannot be serialized.
    fn tx_simulation_results(&mut self) -> LedgerResult<Vec<u8>>;

    /// Release the session.
    fn done(&mut self);
}

/// Scoped read-only session over committed state
pub trait QueryExecutor {
    /// Read the committed value stored under `key`; `Ok(None)` when absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the read fails.
    fn get_state(&mut self, namespace: &Namespace, key: &str) -> LedgerResult<Option<Vec<u8>>>;

    /// Release the session.
    fn done(&mut self) {}
}
