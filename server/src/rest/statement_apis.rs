//! Statement and balance query endpoints.

use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use chrono::NaiveDate;
use serde::Deserialize;
use shared::{Operation, StatementResponse};
use tracing::info;

use crate::rest::error::ApiError;
use crate::rest::extractors::ResolvedAccount;
use crate::rest::AppState;

/// Create the statement API router
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/statement", get(get_statement))
        .route("/statement/date", get(get_statement_by_date))
        .route("/balance", get(get_balance))
}

/// Query parameters for the date-filtered statement endpoint
#[derive(Debug, Deserialize)]
pub struct StatementDateQuery {
    pub date: String,
}

/// GET /statement - the account's full statement
pub async fn get_statement(ResolvedAccount(account): ResolvedAccount) -> Json<StatementResponse> {
    info!("GET /statement - nri: {}", account.nri);
    Json(StatementResponse {
        statements: account.statement,
    })
}

/// GET /statement/date?date=YYYY-MM-DD - operations recorded on one
/// calendar date, time-of-day discarded
pub async fn get_statement_by_date(
    State(state): State<AppState>,
    ResolvedAccount(account): ResolvedAccount,
    Query(query): Query<StatementDateQuery>,
) -> Result<Json<Vec<Operation>>, ApiError> {
    info!("GET /statement/date - nri: {}, date: {}", account.nri, query.date);

    let date = parse_calendar_date(&query.date)?;
    let operations = state.ledger.statement_on(&account.nri, date)?;
    Ok(Json(operations))
}

/// GET /balance - the account's computed balance as a bare number
pub async fn get_balance(
    State(state): State<AppState>,
    ResolvedAccount(account): ResolvedAccount,
) -> Result<Json<f64>, ApiError> {
    info!("GET /balance - nri: {}", account.nri);

    let balance = state.ledger.balance(&account.nri)?;
    Ok(Json(balance))
}

/// Truncate the incoming value to its date part (clients may send a full
/// timestamp) and parse it as a calendar date.
fn parse_calendar_date(raw: &str) -> Result<NaiveDate, ApiError> {
    let date_part = raw.split('T').next().unwrap_or(raw);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").map_err(|_| ApiError::InvalidDate)
}
