//! In-memory reference ledger for kvpay
//!
//! This crate implements the ledger collaborator contract from
//! `kvpay-core` over a versioned in-memory key space:
//! - MemLedger: hands out sessions, applies committed proposals
//! - MemTxSimulator: read/write session with read-set tracking and buffered writes
//! - MemQueryExecutor: read-only session over committed state
//! - WriteSet: MessagePack payload carried inside each proposal action
//!
//! Conflict detection is not performed: proposals are applied in the
//! order they are committed.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod ledger;
pub mod query;
pub mod simulator;
pub mod store;
pub mod write_set;

pub use ledger::{Fault, MemLedger};
pub use query::MemQueryExecutor;
pub use simulator::MemTxSimulator;
pub use store::{StateStore, VersionedValue};
pub use write_set::{ReadRecord, WriteRecord, WriteSet};
