//! Account CRUD endpoints.

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use shared::{Account, CreateAccountRequest, UpdateAccountRequest};
use tracing::info;

use crate::rest::error::ApiError;
use crate::rest::extractors::ResolvedAccount;
use crate::rest::AppState;

/// Create the account API router
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/account",
        post(create_account)
            .get(get_account)
            .put(update_account)
            .delete(delete_account),
    )
}

/// POST /account - create a new account for an unused nri
pub async fn create_account(
    State(state): State<AppState>,
    Json(request): Json<CreateAccountRequest>,
) -> Result<StatusCode, ApiError> {
    info!("POST /account - nri: {}", request.nri);

    state.ledger.create_account(&request.nri, &request.name)?;
    Ok(StatusCode::CREATED)
}

/// GET /account - the resolved account itself
pub async fn get_account(ResolvedAccount(account): ResolvedAccount) -> Json<Account> {
    info!("GET /account - nri: {}", account.nri);
    Json(account)
}

/// PUT /account - rename the resolved account
pub async fn update_account(
    State(state): State<AppState>,
    ResolvedAccount(account): ResolvedAccount,
    Json(request): Json<UpdateAccountRequest>,
) -> Result<StatusCode, ApiError> {
    info!("PUT /account - nri: {}", account.nri);

    state.ledger.rename(&account.nri, &request.name)?;
    Ok(StatusCode::CREATED)
}

/// DELETE /account - remove the resolved account, answering with the
/// accounts that remain
pub async fn delete_account(
    State(state): State<AppState>,
    ResolvedAccount(account): ResolvedAccount,
) -> Result<Json<Vec<Account>>, ApiError> {
    info!("DELETE /account - nri: {}", account.nri);

    let remaining = state.ledger.delete_account(&account.nri)?;
    Ok(Json(remaining))
}
