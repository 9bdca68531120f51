//! Balance calculation over a statement.

use shared::{Operation, OperationKind};

/// Reduce a statement to its signed balance: the sum of credit amounts
/// minus the sum of debit amounts.
pub fn balance(statement: &[Operation]) -> f64 {
    statement.iter().fold(0.0, |total, operation| match operation.kind {
        OperationKind::Credit => total + operation.amount,
        OperationKind::Debit => total - operation.amount,
    })
}
