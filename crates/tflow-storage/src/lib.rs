//! Persistent storage for tflow
//!
//! This crate provides the savings ledger: a small JSON file of tokens saved per day.

pub mod error;
pub mod ledger;

pub use error::{Result, StorageError};
pub use ledger::SavingsLedger;
