//! kvpay - reference payment client for a transactional key-value ledger
//!
//! A payment application never mutates ledger state directly. Each
//! operation opens a simulation session, reads and writes balances inside
//! it, and returns the resulting write-set wrapped in an unendorsed
//! [`Transaction`] proposal for the endorsement/commit layer.
//!
//! # Quick Start
//!
//! ```
//! use std::collections::HashMap;
//! use kvpay::{MemLedger, PaymentApp};
//!
//! let ledger = MemLedger::new();
//! let app = PaymentApp::new(&ledger);
//!
//! let init = app.init(&HashMap::from([("A".to_string(), 100), ("B".to_string(), 50)])).unwrap();
//! ledger.commit(&init).unwrap();
//!
//! let transfer = app.transfer_funds("A", "B", 30).unwrap();
//! ledger.commit(&transfer).unwrap();
//!
//! assert_eq!(app.query_balances(&["A", "B"]).unwrap(), vec![70, 80]);
//! ```
//!
//! # Architecture
//!
//! - `kvpay-core`: shared types, the ledger collaborator traits, balance codec, proposals
//! - `kvpay-ledger`: [`MemLedger`], an in-memory collaborator
//! - `kvpay-app`: [`PaymentApp`] and its configuration

pub use kvpay_app::{
    AppError, AppResult, ConfigError, PaymentApp, PaymentAppConfig, CONFIG_FILE_NAME,
    DEFAULT_APP_NAME,
};
pub use kvpay_core::{
    decode_balance, encode_balance, AccountKey, Balance, EndorsedAction, Endorsement,
    LedgerError, LedgerResult, Namespace, ProposalError, QueryExecutor, Transaction,
    TxSimulator, ValidatedLedger,
};
pub use kvpay_ledger::{Fault, MemLedger, WriteSet};
