//! Payment application for kvpay
//!
//! Turns balance operations into simulated reads/writes against a
//! ledger collaborator and packages the resulting write-set as an
//! unendorsed transaction proposal:
//! - PaymentApp: init / transfer_funds / query_balances
//! - PaymentAppConfig: TOML configuration (application name)
//! - AppError: operation error taxonomy

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod app;
pub mod config;
pub mod error;
mod session;

pub use app::{PaymentApp, DEFAULT_APP_NAME};
pub use config::{ConfigError, PaymentAppConfig, CONFIG_FILE_NAME};
pub use error::{AppError, AppResult};
