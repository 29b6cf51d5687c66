//! Ledger orchestration with persistence write-through
//!
//! This module provides the SalesLedger that coordinates the in-memory
//! RecordStore with the on-disk SalesFile. Every mutating operation
//! updates the store first and then rewrites the data file, so the file
//! always reflects the last successful mutation.
//!
//! The ledger enforces the calling discipline the rest of the system
//! relies on:
//! - A rejected operation (overdrawn payment, bad index) never persists
//! - A failed save is surfaced to the caller rather than swallowed,
//!   since a silently lost write would corrupt the ledger across restarts
//! - Read-only operations (list, summarize) never touch the file

use crate::core::record_store::RecordStore;
use crate::core::summary::{summarize, SalesSummary};
use crate::io::SalesFile;
use crate::types::{LedgerError, Sale};
use chrono::NaiveDate;
use std::path::Path;

/// The installment-sales ledger
///
/// Owns the RecordStore and its backing file. There is no global state:
/// callers hold an explicit SalesLedger instance and all operations go
/// through it.
pub struct SalesLedger {
    store: RecordStore,
    file: SalesFile,
}

impl SalesLedger {
    /// Open the ledger backed by the given data file
    ///
    /// Hydrates the in-memory store from disk. A missing file is the
    /// expected first-run state and yields an empty store.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn open(path: &Path) -> Result<Self, LedgerError> {
        let file = SalesFile::new(path);
        let sales = file.load()?;

        Ok(SalesLedger {
            store: RecordStore::from_sales(sales),
            file,
        })
    }

    /// Record a new sale and persist the store
    ///
    /// The sale is appended to the end of the store; its index is
    /// `sales().len() - 1` until a deletion shifts it.
    ///
    /// # Arguments
    ///
    /// * `date` - Calendar date of the sale
    /// * `holder_name` - Name of the buyer
    /// * `mobile_name` - Name of the mobile sold
    /// * `mobile_rate` - Total price
    /// * `initial_paid` - Amount collected upfront (may be zero)
    ///
    /// # Returns
    ///
    /// A copy of the newly created Sale
    ///
    /// # Errors
    ///
    /// Returns an error only if the write-through save fails; the sale
    /// is still present in memory in that case.
    pub fn create(
        &mut self,
        date: NaiveDate,
        holder_name: String,
        mobile_name: String,
        mobile_rate: u64,
        initial_paid: u64,
    ) -> Result<Sale, LedgerError> {
        let index = self
            .store
            .create(date, holder_name, mobile_name, mobile_rate, initial_paid);
        self.file.save(self.store.sales())?;

        Ok(self.store.sales()[index].clone())
    }

    /// Apply a payment to the sale at `index` and persist the store
    ///
    /// # Errors
    ///
    /// * `IndexOutOfRange` - no sale at `index`; nothing persisted
    /// * `InsufficientRemainingBalance` - amount exceeds the sale's
    ///   remaining balance; the sale is unchanged and nothing persisted
    /// * `Io` - the write-through save failed
    pub fn apply_payment(
        &mut self,
        index: usize,
        amount: u64,
        date: NaiveDate,
    ) -> Result<(), LedgerError> {
        let count = self.store.len();
        let sale = self
            .store
            .get_mut(index)
            .ok_or_else(|| LedgerError::index_out_of_range(index, count))?;

        sale.apply_payment(amount, date)?;
        self.file.save(self.store.sales())
    }

    /// Delete the sale at `index` and persist the store
    ///
    /// Irreversible: no history is kept for the removed sale. Later
    /// indices shift down by one.
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfRange` if there is no sale at `index` (nothing
    /// persisted), or an I/O error if the save fails.
    pub fn delete(&mut self, index: usize) -> Result<Sale, LedgerError> {
        let removed = self.store.delete(index)?;
        self.file.save(self.store.sales())?;

        Ok(removed)
    }

    /// Remove all sales and persist the empty store
    ///
    /// Irreversible.
    pub fn clear_all(&mut self) -> Result<(), LedgerError> {
        self.store.clear_all();
        self.file.save(self.store.sales())
    }

    /// Read-only snapshot of all sales in creation order
    pub fn sales(&self) -> &[Sale] {
        self.store.sales()
    }

    /// Aggregate totals over the current sales
    pub fn summarize(&self) -> SalesSummary {
        summarize(self.store.sales())
    }
}
