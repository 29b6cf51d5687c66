//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `sale`: Sale records and their payment history entries
//! - `error`: Error types for the installment ledger

pub mod error;
pub mod sale;

pub use error::LedgerError;
pub use sale::{Payment, Sale};
