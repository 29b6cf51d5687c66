//! Installment Sales Ledger Library
//! # Overview
//!
//! This library records installment-sale transactions (a mobile phone sold
//! with partial upfront payment) and tracks the remaining balance as
//! further payments arrive over time, persisting everything to a flat CSV
//! data file.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Sale, Payment, LedgerError)
//! - [`cli`] - CLI argument parsing and command dispatch
//! - [`core`] - Business logic components:
//!   - [`core::ledger`] - Orchestration with persistence write-through
//!   - [`core::record_store`] - In-memory ordered collection of sales
//!   - [`core::summary`] - Aggregate totals over the record store
//! - [`io`] - Flat-file persistence (CSV rows, JSON payment-history cells)
//!
//! # Ledger Invariants
//!
//! Every Sale maintains:
//! - `remaining + paid == mobile_rate` at all times
//! - `paid` equal to the sum of its payment history
//! - An append-only payment history in chronological order
//!
//! A payment that would overdraw the remaining balance is rejected with
//! the Sale unchanged. Every successful mutation is written through to
//! the data file before the operation returns.

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod types;

pub use crate::core::{summarize, RecordStore, SalesLedger, SalesSummary};
pub use crate::io::{write_sales_csv, SalesFile};
pub use crate::types::{LedgerError, Payment, Sale};
