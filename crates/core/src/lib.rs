//! Core types and traits for kvpay
//!
//! This crate defines the foundational types shared by the payment
//! application and any ledger it runs against:
//! - Namespace / AccountKey: identity of a balance holder
//! - Balance: signed integer funds
//! - Encoding: varint balance codec with a lenient decode policy
//! - Proposal: Transaction / EndorsedAction / Endorsement
//! - Traits: the ledger collaborator contract (ValidatedLedger, TxSimulator, QueryExecutor)
//! - Error: collaborator error taxonomy

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod encoding;
pub mod error;
pub mod proposal;
pub mod traits;
pub mod types;

pub use encoding::{decode_balance, decode_varint, encode_balance, encode_varint};
pub use error::{LedgerError, LedgerResult, ProposalError};
pub use proposal::{EndorsedAction, Endorsement, Transaction};
pub use traits::{QueryExecutor, TxSimulator, ValidatedLedger};
pub use types::{AccountKey, Balance, Namespace};
