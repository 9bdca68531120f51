//! Deposit and withdraw endpoints.

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use shared::{DepositRequest, WithdrawRequest};
use tracing::info;

use crate::rest::error::ApiError;
use crate::rest::extractors::ResolvedAccount;
use crate::rest::AppState;

/// Create the operations API router
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/deposit", post(deposit))
        .route("/withdraw", post(withdraw))
}

/// POST /deposit - append a credit operation to the resolved account
pub async fn deposit(
    State(state): State<AppState>,
    ResolvedAccount(account): ResolvedAccount,
    Json(request): Json<DepositRequest>,
) -> Result<StatusCode, ApiError> {
    info!("POST /deposit - nri: {}, amount: {}", account.nri, request.amount);

    validate_amount(request.amount)?;
    state
        .ledger
        .deposit(&account.nri, request.description, request.amount)?;
    Ok(StatusCode::CREATED)
}

/// POST /withdraw - append a debit operation if the balance covers it
pub async fn withdraw(
    State(state): State<AppState>,
    ResolvedAccount(account): ResolvedAccount,
    Json(request): Json<WithdrawRequest>,
) -> Result<StatusCode, ApiError> {
    info!("POST /withdraw - nri: {}, amount: {}", account.nri, request.amount);

    validate_amount(request.amount)?;
    state.ledger.withdraw(&account.nri, request.amount)?;
    Ok(StatusCode::CREATED)
}

/// Operation amounts must be non-negative finite numbers.
fn validate_amount(amount: f64) -> Result<(), ApiError> {
    if !amount.is_finite() || amount < 0.0 {
        return Err(ApiError::InvalidAmount);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::test_support::{body_json, request, router_with_state};
    use axum::http::{Method, StatusCode};
    use serde_json::json;
    use tower::util::ServiceExt; // for `oneshot`

    #[tokio::test]
    async fn deposit_then_balance_reflects_amount() {
        let (app, state) = router_with_state();
        state.ledger.create_account("11122233344", "Grace").unwrap();

        let response = app
            .oneshot(request(
                Method::POST,
                "/deposit",
                Some("11122233344"),
                Some(json!({"description": "salary", "amount": 100.0})),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(state.ledger.balance("11122233344").unwrap(), 100.0);
    }

    #[tokio::test]
    async fn deposit_records_credit_with_description() {
        let (app, state) = router_with_state();
        state.ledger.create_account("11122233344", "Grace").unwrap();

        app.oneshot(request(
            Method::POST,
            "/deposit",
            Some("11122233344"),
            Some(json!({"description": "salary", "amount": 100.0})),
        ))
        .await
        .unwrap();

        let statement = state.ledger.statement("11122233344").unwrap();
        assert_eq!(statement.len(), 1);
        assert_eq!(statement[0].description.as_deref(), Some("salary"));
        assert_eq!(statement[0].kind, shared::OperationKind::Credit);
    }

    #[tokio::test]
    async fn withdraw_over_balance_returns_400_and_keeps_balance() {
        let (app, state) = router_with_state();
        state.ledger.create_account("11122233344", "Grace").unwrap();
        state.ledger.deposit("11122233344", Some("pay".into()), 50.0).unwrap();

        let response = app
            .oneshot(request(
                Method::POST,
                "/withdraw",
                Some("11122233344"),
                Some(json!({"amount": 100.0})),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"], "Insufficient funds!");
        assert_eq!(state.ledger.balance("11122233344").unwrap(), 50.0);
    }

    #[tokio::test]
    async fn withdraw_within_balance_appends_debit() {
        let (app, state) = router_with_state();
        state.ledger.create_account("11122233344", "Grace").unwrap();
        state.ledger.deposit("11122233344", Some("pay".into()), 50.0).unwrap();

        let response = app
            .oneshot(request(
                Method::POST,
                "/withdraw",
                Some("11122233344"),
                Some(json!({"amount": 20.0})),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(state.ledger.balance("11122233344").unwrap(), 30.0);

        let statement = state.ledger.statement("11122233344").unwrap();
        assert_eq!(statement[1].kind, shared::OperationKind::Debit);
        assert!(statement[1].description.is_none());
    }

    #[tokio::test]
    async fn negative_deposit_amount_is_rejected() {
        let (app, state) = router_with_state();
        state.ledger.create_account("11122233344", "Grace").unwrap();

        let response = app
            .oneshot(request(
                Method::POST,
                "/deposit",
                Some("11122233344"),
                Some(json!({"description": "oops", "amount": -5.0})),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"], "Invalid amount!");
        assert!(state.ledger.statement("11122233344").unwrap().is_empty());
    }

    #[tokio::test]
    async fn deposit_for_unknown_customer_is_rejected() {
        let (app, _state) = router_with_state();

        let response = app
            .oneshot(request(
                Method::POST,
                "/deposit",
                Some("00000000000"),
                Some(json!({"description": "lost", "amount": 10.0})),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"], "Cannot find customer!");
    }
}
