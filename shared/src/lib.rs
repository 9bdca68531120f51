use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Kind of a statement operation, serialized as `"type": "credit" | "debit"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationKind {
    /// Money added to the account (deposit)
    Credit,
    /// Money taken out of the account (withdrawal)
    Debit,
}

/// A single credit or debit entry in an account's statement.
///
/// Operations are append-only: once pushed onto a statement they are never
/// mutated or removed individually.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Operation {
    /// Human-readable description; only deposits carry one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Non-negative amount in account currency units
    pub amount: f64,
    #[serde(rename = "type")]
    pub kind: OperationKind,
    /// Timestamp the operation was recorded (RFC 3339)
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl Operation {
    /// Build a credit operation stamped with the given time.
    pub fn credit(description: Option<String>, amount: f64, created_at: DateTime<Utc>) -> Self {
        Self {
            description,
            amount,
            kind: OperationKind::Credit,
            created_at,
        }
    }

    /// Build a debit operation stamped with the given time. Debits never
    /// carry a description.
    pub fn debit(amount: f64, created_at: DateTime<Utc>) -> Self {
        Self {
            description: None,
            amount,
            kind: OperationKind::Debit,
            created_at,
        }
    }
}

/// A customer account.
///
/// `nri` is the natural key (unique across the store, immutable after
/// creation); `id` is the opaque internal identifier generated at creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub id: Uuid,
    pub nri: String,
    pub name: String,
    pub statement: Vec<Operation>,
}

impl Account {
    pub fn new(nri: String, name: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            nri,
            name,
            statement: Vec::new(),
        }
    }
}

/// Request body for `POST /account`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateAccountRequest {
    pub nri: String,
    pub name: String,
}

/// Request body for `POST /deposit`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepositRequest {
    pub description: Option<String>,
    pub amount: f64,
}

/// Request body for `POST /withdraw`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WithdrawRequest {
    pub amount: f64,
}

/// Request body for `PUT /account`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateAccountRequest {
    pub name: String,
}

/// Response body for `GET /statement`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatementResponse {
    pub statements: Vec<Operation>,
}

/// Error body shared by every 400 response: `{"error": "..."}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
