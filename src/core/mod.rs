//! Core business logic module
//!
//! This module contains the core ledger components:
//! - `record_store` - Ordered in-memory collection of Sale records
//! - `ledger` - Orchestration with persistence write-through
//! - `summary` - Aggregate totals over the record store

pub mod ledger;
pub mod record_store;
pub mod summary;

pub use ledger::SalesLedger;
pub use record_store::RecordStore;
pub use summary::{summarize, SalesSummary};
