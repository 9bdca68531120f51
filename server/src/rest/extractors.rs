//! Request-scoped account resolution.
//!
//! Account-scoped routes identify the customer through an `nri` header.
//! Instead of a middleware stashing the account on the request object,
//! handlers take a [`ResolvedAccount`] extractor: the lookup runs before
//! the handler body and a miss short-circuits with the canonical
//! "Cannot find customer!" response.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use shared::Account;

use crate::domain::LedgerError;
use crate::rest::error::ApiError;
use crate::rest::AppState;

pub static NRI_HEADER: &str = "nri";

/// The account resolved from the request's `nri` header.
///
/// Carries a clone taken at extraction time; mutating handlers go back
/// through the ledger service by `nri` so the actual change happens under
/// the store lock.
#[derive(Debug, Clone)]
pub struct ResolvedAccount(pub Account);

#[axum::async_trait]
impl FromRequestParts<AppState> for ResolvedAccount {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let nri = parts
            .headers
            .get(NRI_HEADER)
            .and_then(|value| value.to_str().ok())
            .ok_or(LedgerError::AccountNotFound)?;

        let account = state.ledger.find_account(nri)?;
        Ok(ResolvedAccount(account))
    }
}
