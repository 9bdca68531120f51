//! Ledger operations over the account store.
//!
//! Every account mutation in the service runs inside a single
//! [`AccountStore::update`] call, so check-then-append sequences (the
//! withdraw balance check in particular) cannot interleave with other
//! requests touching the same account.

use chrono::{NaiveDate, Utc};
use shared::{Account, Operation};
use tracing::{info, warn};

use crate::domain::balance::balance;
use crate::store::{AccountStore, StoreError};

/// Domain failures; the display strings are the wire error messages.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum LedgerError {
    #[error("Customer already exists!")]
    DuplicateAccount,
    #[error("Cannot find customer!")]
    AccountNotFound,
    #[error("Insufficient funds!")]
    InsufficientFunds,
}

impl From<StoreError> for LedgerError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Duplicate(_) => LedgerError::DuplicateAccount,
            StoreError::NotFound(_) => LedgerError::AccountNotFound,
        }
    }
}

/// Service exposing the banking ledger operations.
#[derive(Clone, Default)]
pub struct LedgerService {
    store: AccountStore,
}

impl LedgerService {
    pub fn new(store: AccountStore) -> Self {
        Self { store }
    }

    /// Create a new account for the given nri.
    pub fn create_account(&self, nri: &str, name: &str) -> Result<Account, LedgerError> {
        info!("Creating account: nri={}, name={}", nri, name);

        let account = self.store.insert(nri, name).map_err(|err| {
            warn!("Account creation rejected, nri {} already taken", nri);
            LedgerError::from(err)
        })?;

        info!("Created account {} for nri {}", account.id, nri);
        Ok(account)
    }

    /// Resolve an account by nri.
    pub fn find_account(&self, nri: &str) -> Result<Account, LedgerError> {
        self.store.find(nri).ok_or_else(|| {
            warn!("Account not found: nri={}", nri);
            LedgerError::AccountNotFound
        })
    }

    /// Append a credit operation stamped with the current time.
    pub fn deposit(
        &self,
        nri: &str,
        description: Option<String>,
        amount: f64,
    ) -> Result<(), LedgerError> {
        info!("Deposit: nri={}, amount={}", nri, amount);

        self.store.update(nri, |account| {
            account
                .statement
                .push(Operation::credit(description, amount, Utc::now()));
        })?;
        Ok(())
    }

    /// Append a debit operation if the account balance covers it.
    pub fn withdraw(&self, nri: &str, amount: f64) -> Result<(), LedgerError> {
        info!("Withdraw: nri={}, amount={}", nri, amount);

        self.store.update(nri, |account| {
            if balance(&account.statement) < amount {
                warn!("Withdraw rejected for nri {}: insufficient funds", nri);
                return Err(LedgerError::InsufficientFunds);
            }
            account.statement.push(Operation::debit(amount, Utc::now()));
            Ok(())
        })?
    }

    /// Full statement for an account.
    pub fn statement(&self, nri: &str) -> Result<Vec<Operation>, LedgerError> {
        Ok(self.find_account(nri)?.statement)
    }

    /// Operations recorded on the given calendar date, time-of-day ignored.
    pub fn statement_on(&self, nri: &str, date: NaiveDate) -> Result<Vec<Operation>, LedgerError> {
        info!("Statement by date: nri={}, date={}", nri, date);

        let account = self.find_account(nri)?;
        Ok(account
            .statement
            .into_iter()
            .filter(|operation| operation.created_at.date_naive() == date)
            .collect())
    }

    /// Current balance for an account.
    pub fn balance(&self, nri: &str) -> Result<f64, LedgerError> {
        let account = self.find_account(nri)?;
        Ok(balance(&account.statement))
    }

    /// Change an account's display name. The nri is the immutable key and
    /// never changes.
    pub fn rename(&self, nri: &str, name: &str) -> Result<(), LedgerError> {
        info!("Renaming account: nri={}, name={}", nri, name);

        self.store.update(nri, |account| {
            account.name = name.trim().to_string();
        })?;
        Ok(())
    }

    /// Delete an account, returning the accounts that remain.
    pub fn delete_account(&self, nri: &str) -> Result<Vec<Account>, LedgerError> {
        info!("Deleting account: nri={}", nri);

        let remaining = self.store.remove(nri)?;
        info!("Deleted account for nri {}, {} accounts remain", nri, remaining.len());
        Ok(remaining)
    }
}

#[cfg(test)]
impl LedgerService {
    /// Test helper: append pre-stamped operations to an account, bypassing
    /// the clock so tests can pin calendar dates.
    pub fn seed_operations(&self, nri: &str, operations: Vec<Operation>) -> Result<(), LedgerError> {
        self.store.update(nri, |account| {
            account.statement.extend(operations);
        })?;
        Ok(())
    }
}
