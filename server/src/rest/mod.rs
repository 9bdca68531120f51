//! # REST API Interface Layer
//!
//! HTTP endpoints for the banking ledger. This layer handles:
//! - JSON request/response serialization
//! - Basic input validation before the domain layer runs
//! - Error translation from domain errors to 400 responses
//! - Request logging
//!
//! Business logic lives in [`crate::domain`]; the modules here are a pure
//! translation layer.

pub mod account_apis;
pub mod error;
pub mod extractors;
pub mod operation_apis;
pub mod statement_apis;

use axum::Router;

use crate::domain::LedgerService;
use crate::store::AccountStore;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub ledger: LedgerService,
}

impl AppState {
    /// Create application state over a fresh in-memory store
    pub fn new() -> Self {
        Self {
            ledger: LedgerService::new(AccountStore::new()),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Assemble the full application router
pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(account_apis::router())
        .merge(operation_apis::router())
        .merge(statement_apis::router())
        .with_state(state)
}
