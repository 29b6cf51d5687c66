//! In-memory sale record store
//!
//! This module provides the `RecordStore` struct which owns the ordered
//! collection of Sale records for the current session.
//!
//! The RecordStore is responsible for:
//! - Creating new sales (appended to the end of the collection)
//! - Looking up sales by index
//! - Deleting sales (later indices shift down by one)
//! - Clearing the whole collection
//!
//! Sale identity is positional: the index of a Sale in the store is its
//! identity for the lifetime of the session. The store performs no I/O;
//! persistence is layered on top by [`crate::core::SalesLedger`].

use crate::types::{LedgerError, Sale};
use chrono::NaiveDate;

/// Ordered in-memory collection of all Sale records
///
/// Insertion order is preserved, and all lookups are by position.
#[derive(Debug, Default)]
pub struct RecordStore {
    /// Sales in creation order
    sales: Vec<Sale>,
}

impl RecordStore {
    /// Create a new empty RecordStore
    pub fn new() -> Self {
        RecordStore { sales: Vec::new() }
    }

    /// Create a RecordStore from an already-hydrated list of sales
    ///
    /// Used to rebuild the store from the persisted file at process start.
    pub fn from_sales(sales: Vec<Sale>) -> Self {
        RecordStore { sales }
    }

    /// Create a new Sale and append it to the store
    ///
    /// The Sale starts with `remaining = mobile_rate - initial_paid`
    /// (clamped at zero) and a single payment-history entry for the
    /// upfront amount. Never fails: amounts are unsigned by type, so the
    /// caller contract of non-negative inputs is structural.
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
    /// The index of the newly created Sale
    pub fn create(
        &mut self,
        date: NaiveDate,
        holder_name: String,
        mobile_name: String,
        mobile_rate: u64,
        initial_paid: u64,
    ) -> usize {
        self.sales.push(Sale::new(
            date,
            holder_name,
            mobile_name,
            mobile_rate,
            initial_paid,
        ));
        self.sales.len() - 1
    }

    /// Get an immutable reference to the Sale at `index`
    pub fn get(&self, index: usize) -> Option<&Sale> {
        self.sales.get(index)
    }

    /// Get a mutable reference to the Sale at `index`
    ///
    /// Used by the ledger to apply payments in place.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Sale> {
        self.sales.get_mut(index)
    }

    /// Remove and return the Sale at `index`
    ///
    /// All later sales shift down by one position. Irreversible: no
    /// history is kept for a deleted Sale.
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfRange` if `index` is outside `[0, len)`;
    /// the store is unchanged in that case.
    pub fn delete(&mut self, index: usize) -> Result<Sale, LedgerError> {
        if index >= self.sales.len() {
            return Err(LedgerError::index_out_of_range(index, self.sales.len()));
        }
        Ok(self.sales.remove(index))
    }

    /// Remove all sales from the store
    pub fn clear_all(&mut self) {
        self.sales.clear();
    }

    /// All sales in creation order
    pub fn sales(&self) -> &[Sale] {
        &self.sales
    }

    /// Number of sales in the store
    pub fn len(&self) -> usize {
        self.sales.len()
    }

    /// Whether the store holds no sales
    pub fn is_empty(&self) -> bool {
        self.sales.is_empty()
    }
}
