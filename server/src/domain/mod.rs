//! Domain layer: ledger operations and balance calculation.

pub mod balance;
pub mod ledger;

pub use ledger::{LedgerError, LedgerService};
