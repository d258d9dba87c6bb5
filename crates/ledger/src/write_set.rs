//! Write-set serialization
//!
//! A simulation serializes into a single `WriteSet` blob that travels as
//! the `action_bytes` of a proposal action. It records the version of
//! every committed key the simulation read, and the final value of every
//! key it wrote.
//!
//! ## Format
//!
//! MessagePack (`rmp-serde`). Reads and writes are sorted by key so the
//! same simulation always produces the same bytes.

use kvpay_core::error::{LedgerError, LedgerResult};
use kvpay_core::types::AccountKey;
use serde::{Deserialize, Serialize};

/// Committed key observed during simulation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadRecord {
    /// Key that was read
    pub key: AccountKey,
    /// Version seen (0 = key did not exist)
    pub version: u64,
}

/// Buffered write produced by simulation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WriteRecord {
    /// Key to write
    pub key: AccountKey,
    /// Value to store
    pub value: Vec<u8>,
}

/// Serialized result of one simulation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WriteSet {
    /// Read-set, sorted by key
    pub reads: Vec<ReadRecord>,
    /// Writes, sorted by key
    pub writes: Vec<WriteRecord>,
}

impl WriteSet {
    /// Check if the simulation wrote nothing
    pub fn is_empty(&self) -> bool {
        self.writes.is_empty()
    }

    /// Serialize to MessagePack bytes.
    pub fn to_bytes(&self) -> LedgerResult<Vec<u8>> {
        rmp_serde::to_vec(self).map_err(|e| LedgerError::Serialization(e.to_string()))
    }

    /// Deserialize from MessagePack bytes.
    pub fn from_bytes(bytes: &[u8]) -> LedgerResult<Self> {
        rmp_serde::from_slice(bytes).map_err(|e| LedgerError::Serialization(e.to_string()))
    }
}
