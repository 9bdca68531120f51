//! In-memory account storage.
//!
//! The store owns an ordered collection of accounts behind a single mutex
//! and is cloned into application state rather than living in a global.
//! Lookup is a linear scan on `nri`; account counts here are small enough
//! that an index would not pay for itself.

use std::sync::{Arc, Mutex};

use shared::Account;

/// Storage-level failures, mapped to domain errors by the ledger service.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("account already exists for nri {0}")]
    Duplicate(String),
    #[error("no account for nri {0}")]
    NotFound(String),
}

/// Shared in-memory collection of accounts.
#[derive(Clone, Default)]
pub struct AccountStore {
    accounts: Arc<Mutex<Vec<Account>>>,
}

impl AccountStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create and insert a new account. Fails if the nri is already taken;
    /// the duplicate scan and the push happen under the same lock, so the
    /// uniqueness invariant holds even with interleaved requests.
    pub fn insert(&self, nri: &str, name: &str) -> Result<Account, StoreError> {
        let mut accounts = self.lock();
        if accounts.iter().any(|account| account.nri == nri) {
            return Err(StoreError::Duplicate(nri.to_string()));
        }
        let account = Account::new(nri.to_string(), name.to_string());
        accounts.push(account.clone());
        Ok(account)
    }

    /// Look up an account by nri, cloning it out of the store.
    pub fn find(&self, nri: &str) -> Option<Account> {
        self.lock().iter().find(|account| account.nri == nri).cloned()
    }

    /// Run a mutation against the account with the given nri while holding
    /// the store lock. Read-modify-write sequences (withdraw's balance
    /// check then append) stay atomic by going through here.
    pub fn update<R>(
        &self,
        nri: &str,
        f: impl FnOnce(&mut Account) -> R,
    ) -> Result<R, StoreError> {
        let mut accounts = self.lock();
        let account = accounts
            .iter_mut()
            .find(|account| account.nri == nri)
            .ok_or_else(|| StoreError::NotFound(nri.to_string()))?;
        Ok(f(account))
    }

    /// Remove the account with the given nri, returning the accounts that
    /// remain.
    pub fn remove(&self, nri: &str) -> Result<Vec<Account>, StoreError> {
        let mut accounts = self.lock();
        let position = accounts
            .iter()
            .position(|account| account.nri == nri)
            .ok_or_else(|| StoreError::NotFound(nri.to_string()))?;
        accounts.remove(position);
        Ok(accounts.clone())
    }

    pub fn list(&self) -> Vec<Account> {
        self.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Account>> {
        // A poisoned lock means a handler panicked mid-mutation; the data
        // is plain-old-data and still consistent, so keep serving.
        self.accounts.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use shared::Operation;

    #[test]
    fn insert_then_find_returns_account() {
        let store = AccountStore::new();
        let created = store.insert("11122233344", "Grace").unwrap();

        let found = store.find("11122233344").unwrap();
        assert_eq!(found.id, created.id);
        assert_eq!(found.name, "Grace");
    }

    #[test]
    fn insert_duplicate_nri_is_rejected_and_store_unchanged() {
        let store = AccountStore::new();
        store.insert("11122233344", "Grace").unwrap();

        let err = store.insert("11122233344", "Imposter").unwrap_err();
        assert_eq!(err, StoreError::Duplicate("11122233344".to_string()));
        assert_eq!(store.len(), 1);
        assert_eq!(store.find("11122233344").unwrap().name, "Grace");
    }

    #[test]
    fn find_missing_nri_returns_none() {
        let store = AccountStore::new();
        assert!(store.find("00000000000").is_none());
    }

    #[test]
    fn update_mutates_stored_account() {
        let store = AccountStore::new();
        store.insert("11122233344", "Grace").unwrap();

        store
            .update("11122233344", |account| {
                account
                    .statement
                    .push(Operation::credit(Some("pay".into()), 10.0, Utc::now()));
            })
            .unwrap();

        assert_eq!(store.find("11122233344").unwrap().statement.len(), 1);
    }

    #[test]
    fn update_missing_account_is_not_found() {
        let store = AccountStore::new();
        let err = store.update("00000000000", |_| ()).unwrap_err();
        assert_eq!(err, StoreError::NotFound("00000000000".to_string()));
    }

    #[test]
    fn remove_returns_remaining_accounts() {
        let store = AccountStore::new();
        store.insert("11122233344", "Grace").unwrap();
        store.insert("55566677788", "Alan").unwrap();

        let remaining = store.remove("11122233344").unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].nri, "55566677788");
        assert!(store.find("11122233344").is_none());
    }

    #[test]
    fn remove_missing_account_is_not_found() {
        let store = AccountStore::new();
        assert!(store.remove("00000000000").is_err());
    }
}
