//! Core identity types for balance state
//!
//! A balance lives under an [`AccountKey`]: the application's
//! [`Namespace`] plus an account identifier. Namespaces isolate one
//! application's accounts from unrelated state in the same ledger.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Integer quantity of funds held by one account
pub type Balance = i64;

/// Logical partition of keyed state, named after the owning application
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Namespace(String);

impl Namespace {
    /// Create a namespace from an application name
    pub fn new(name: impl Into<String>) -> Self {
        Namespace(name.into())
    }

    /// Application name backing this namespace
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Namespace {
    fn from(name: &str) -> Self {
        Namespace::new(name)
    }
}

/// Identity of a balance holder within a namespace
///
/// Ordering is namespace first, then account, so keys of one application
/// sort together.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AccountKey {
    /// Owning namespace
    pub namespace: Namespace,
    /// Account identifier
    pub account: String,
}

impl AccountKey {
    /// Create a key for `account` under `namespace`
    pub fn new(namespace: Namespace, account: impl Into<String>) -> Self {
        AccountKey {
            namespace,
            account: account.into(),
        }
    }
}

impl fmt::Display for AccountKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.namespace, self.account)
    }
}
