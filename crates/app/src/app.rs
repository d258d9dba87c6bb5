//! The payment application
//!
//! [`PaymentApp`] implements three operations against a ledger collaborator:
//!
//! ```text
//! init            open simulator → write each balance → extract → proposal
//! transfer_funds  open simulator → read from → check funds → read to
//!                 → write both → extract → proposal
//! query_balances  open query executor → read each account → balances
//! ```
//!
//! The application never applies state itself. A proposal only takes effect
//! once the caller has it endorsed and committed by the ledger.

use std::collections::HashMap;

use kvpay_core::proposal::Transaction;
use kvpay_core::traits::ValidatedLedger;
use kvpay_core::types::{Balance, Namespace};
use tracing::{debug, warn};

use crate::config::PaymentAppConfig;
use crate::error::{AppError, AppResult};
use crate::session::{QueryGuard, SimulationGuard};

/// Application name used when none is configured
pub const DEFAULT_APP_NAME: &str = "PaymentApp";

/// Fund transfer application bound to one ledger and one namespace
///
/// The ledger handle is borrowed, so the same ledger can serve other
/// applications and callers at the same time.
pub struct PaymentApp<'l, L: ValidatedLedger + ?Sized> {
    namespace: Namespace,
    ledger: &'l L,
}

impl<'l, L: ValidatedLedger + ?Sized> PaymentApp<'l, L> {
    /// Create an application named [`DEFAULT_APP_NAME`]
    pub fn new(ledger: &'l L) -> Self {
        Self::with_namespace(ledger, Namespace::new(DEFAULT_APP_NAME))
    }

    /// Create an application storing its accounts under `namespace`
    pub fn with_namespace(ledger: &'l L, namespace: Namespace) -> Self {
        PaymentApp { namespace, ledger }
    }

    /// Create an application from a validated config
    pub fn with_config(ledger: &'l L, config: &PaymentAppConfig) -> Self {
        Self::with_namespace(ledger, config.namespace())
    }

    /// Namespace holding this application's accounts
    pub fn namespace(&self) -> &Namespace {
        &self.namespace
    }

    /// Simulate setting the initial balance of each account.
    ///
    /// Balances are not validated; negative values are written as given.
    ///
    /// # Errors
    /// - `LedgerUnavailable` if the simulation cannot be opened
    /// - `SimulationExtractionFailed` if the write-set cannot be serialized
    pub fn init(&self, initial_balances: &HashMap<String, Balance>) -> AppResult<Transaction> {
        debug!(namespace = %self.namespace, accounts = initial_balances.len(), "init");
        let mut sim = self.open_simulator()?;
        for (account, &balance) in initial_balances {
            sim.write_balance(&self.namespace, account, balance);
        }
        self.package(&mut sim)
    }

    /// Simulate moving `amount` from `from_account` to `to_account`.
    ///
    /// No write is buffered unless the debited account can cover the
    /// amount, so the proposal carries either both new balances or nothing.
    /// `amount` is not checked for sign.
    ///
    /// Self-transfers: when `from_account == to_account` the second read is
    /// skipped and the credit is applied to the debited balance, so the
    /// account ends unchanged instead of gaining `amount`.
    ///
    /// # Errors
    /// - `LedgerUnavailable` if the simulation cannot be opened
    /// - `ReadFailed` if either balance read fails
    /// - `InsufficientFunds` if `balance(from) - amount < 0`
    /// - `BalanceOverflow` if a new balance does not fit in a `Balance`
    /// - `SimulationExtractionFailed` if the write-set cannot be serialized
    pub fn transfer_funds(
        &self,
        from_account: &str,
        to_account: &str,
        amount: Balance,
    ) -> AppResult<Transaction> {
        debug!(
            namespace = %self.namespace,
            from = from_account,
            to = to_account,
            amount,
            "transfer_funds"
        );
        let mut sim = self.open_simulator()?;

        let balance_from = sim.read_balance(&self.namespace, from_account)?;
        let remaining = match balance_from.checked_sub(amount) {
            Some(remaining) if remaining >= 0 => remaining,
            None if amount < 0 => {
                return Err(AppError::BalanceOverflow {
                    account: from_account.to_string(),
                })
            }
            _ => {
                warn!(
                    account = from_account,
                    balance = balance_from,
                    requested = amount,
                    "transfer rejected: insufficient funds"
                );
                return Err(AppError::InsufficientFunds {
                    account: from_account.to_string(),
                    balance: balance_from,
                    requested: amount,
                });
            }
        };

        let balance_to = if to_account == from_account {
            remaining
        } else {
            sim.read_balance(&self.namespace, to_account)?
        };
        let credited = balance_to
            .checked_add(amount)
            .ok_or_else(|| AppError::BalanceOverflow {
                account: to_account.to_string(),
            })?;

        sim.write_balance(&self.namespace, from_account, remaining);
        sim.write_balance(&self.namespace, to_account, credited);
        self.package(&mut sim)
    }

    /// Read committed balances, positionally aligned with `accounts`.
    ///
    /// Accounts that were never written read as zero.
    ///
    /// # Errors
    /// - `LedgerUnavailable` if the query session cannot be opened
    /// - `ReadFailed` on the first failing read; the rest of the batch is skipped
    pub fn query_balances<S: AsRef<str>>(&self, accounts: &[S]) -> AppResult<Vec<Balance>> {
        debug!(namespace = %self.namespace, accounts = accounts.len(), "query_balances");
        let mut query = QueryGuard::new(
            self.ledger
                .new_query_executor()
                .map_err(|source| AppError::LedgerUnavailable { source })?,
        );
        let mut balances = Vec::with_capacity(accounts.len());
        for account in accounts {
            balances.push(query.read_balance(&self.namespace, account.as_ref())?);
        }
        Ok(balances)
    }

    fn open_simulator(&self) -> AppResult<SimulationGuard<'l>> {
        let inner = self
            .ledger
            .new_tx_simulator()
            .map_err(|source| AppError::LedgerUnavailable { source })?;
        Ok(SimulationGuard::new(inner))
    }

    fn package(&self, sim: &mut SimulationGuard<'_>) -> AppResult<Transaction> {
        let results = sim.extract()?;
        debug!(namespace = %self.namespace, bytes = results.len(), "simulation packaged");
        Ok(Transaction::from_simulation_results(results))
    }
}
