//! In-memory banking ledger served over HTTP.
//!
//! Accounts are keyed by a unique national identifier (NRI) carried in an
//! `nri` request header; statements are append-only sequences of credit
//! and debit operations. All state is process-local and lost on restart.

pub mod domain;
pub mod rest;
pub mod store;
