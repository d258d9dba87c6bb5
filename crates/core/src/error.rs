//! Error types for the ledger collaborator contract
//!
//! Every call a payment application makes into a ledger returns
//! [`LedgerResult`]. We use `thiserror` for automatic `Display` and `Error`
//! trait implementations.

use thiserror::Error;

/// Result type alias for ledger collaborator operations
pub type LedgerResult<T> = std::result::Result<T, LedgerError>;

/// Errors reported by a ledger collaborator
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// The ledger cannot hand out a simulation or query session
    #[error("Ledger unavailable: {0}")]
    Unavailable(String),

    /// The session was already released or its results extracted
    #[error("Context already closed")]
    ContextClosed,

    /// Write-set serialization failed
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Underlying state store failed
    #[error("Storage error: {0}")]
    Storage(String),

    /// A proposal carried a write-set the ledger could not decode
    #[error("Malformed write-set in action {action}: {reason}")]
    MalformedWriteSet {
        /// Index of the offending action within the transaction
        action: usize,
        /// Decoder message
        reason: String,
    },
}

/// Errors from transaction proposal encoding/decoding
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProposalError {
    /// Failed to serialize a proposal
    #[error("Failed to encode transaction proposal: {0}")]
    Encode(String),

    /// Failed to deserialize proposal bytes
    #[error("Failed to decode transaction proposal: {0}")]
    Decode(String),
}

impl From<rmp_serde::encode::Error> for ProposalError {
    fn from(e: rmp_serde::encode::Error) -> Self {
        ProposalError::Encode(e.to_string())
    }
}

impl From<rmp_serde::decode::Error> for ProposalError {
    fn from(e: rmp_serde::decode::Error) -> Self {
        ProposalError::Decode(e.to_string())
    }
}
