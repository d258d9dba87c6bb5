//! Error types for payment operations
//!
//! Every error is returned to the caller as soon as it happens. Nothing is
//! retried and no compensating writes are issued; the only cleanup is the
//! release of the open ledger session.

use kvpay_core::error::LedgerError;
use kvpay_core::types::Balance;
use thiserror::Error;

/// Result type alias for payment operations
pub type AppResult<T> = std::result::Result<T, AppError>;

/// Errors returned by [`crate::PaymentApp`] operations
#[derive(Debug, Error)]
pub enum AppError {
    /// The ledger could not open a simulation or query session
    #[error("Ledger unavailable: {source}")]
    LedgerUnavailable {
        /// Collaborator error
        #[source]
        source: LedgerError,
    },

    /// Reading an account's balance failed (an absent account is not an error)
    #[error("Failed to read balance of account [{account}]: {source}")]
    ReadFailed {
        /// Account being read
        account: String,
        /// Collaborator error
        #[source]
        source: LedgerError,
    },

    /// The debited account cannot cover the transfer
    #[error(
        "Not enough balance in account [{account}]. Balance = [{balance}], transfer request = [{requested}]"
    )]
    InsufficientFunds {
        /// Account being debited
        account: String,
        /// Balance at simulation time
        balance: Balance,
        /// Requested transfer amount
        requested: Balance,
    },

    /// A new balance does not fit in a `Balance`
    #[error("Balance overflow in account [{account}]")]
    BalanceOverflow {
        /// Account whose new balance overflowed
        account: String,
    },

    /// The ledger could not serialize the write-set at session close
    #[error("Failed to extract simulation results: {source}")]
    SimulationExtractionFailed {
        /// Collaborator error
        #[source]
        source: LedgerError,
    },
}
