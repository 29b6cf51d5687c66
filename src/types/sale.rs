//! Sale and payment types for the installment ledger
//!
//! This module defines the Sale record (one per installment transaction)
//! and the Payment entries that make up its append-only payment history.
//!
//! # Balance Invariant
//!
//! Every Sale maintains `remaining + paid == mobile_rate` at all times.
//! The only way to change `paid` or `remaining` after creation is
//! [`Sale::apply_payment`], which rejects any amount that would overdraw
//! the remaining balance and leaves the Sale untouched in that case.

use crate::types::LedgerError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single payment applied against a Sale's remaining balance
///
/// Payments are recorded in insertion order, which is also chronological
/// order. The serde field names match the on-disk payment-history encoding
/// (`{"Date": "YYYY-MM-DD", "Amount": n}`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payment {
    /// Calendar date the payment was recorded
    #[serde(rename = "Date")]
    pub date: NaiveDate,

    /// Payment amount
    ///
    /// Positive for collections; the creation-time entry may be zero,
    /// recording a sale with no upfront payment.
    #[serde(rename = "Amount")]
    pub amount: u64,
}

/// One installment-sale record
///
/// Tracks who bought which mobile at what price, how much has been
/// collected so far, and the full history of payments. The identifying
/// fields (`date`, `holder_name`, `mobile_name`, `mobile_rate`) are
/// immutable after creation; `paid`, `remaining`, and `payment_history`
/// change only through [`Sale::apply_payment`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sale {
    /// Calendar date of the sale (immutable)
    pub date: NaiveDate,

    /// Name of the buyer (immutable)
    pub holder_name: String,

    /// Name of the mobile sold (immutable)
    pub mobile_name: String,

    /// Total price of the mobile (immutable)
    pub mobile_rate: u64,

    /// Cumulative amount collected, monotonically non-decreasing
    ///
    /// Always equals the sum of all amounts in `payment_history`.
    pub paid: u64,

    /// Amount still owed
    ///
    /// Invariant: `remaining + paid == mobile_rate`.
    pub remaining: u64,

    /// Append-only payment log, insertion order = chronological order
    pub payment_history: Vec<Payment>,
}

impl Sale {
    /// Create a new Sale with one initial payment entry
    ///
    /// The upfront paid amount is recorded as the first history entry,
    /// even when it is zero. The remaining balance is
    /// `mobile_rate - initial_paid`, clamped at zero for an upfront
    /// payment that covers (or exceeds) the full rate.
    ///
    /// # Arguments
    ///
    /// * `date` - Calendar date of the sale
    /// * `holder_name` - Name of the buyer
    /// * `mobile_name` - Name of the mobile sold
    /// * `mobile_rate` - Total price
    /// * `initial_paid` - Amount collected upfront (may be zero)
    pub fn new(
        date: NaiveDate,
        holder_name: String,
        mobile_name: String,
        mobile_rate: u64,
        initial_paid: u64,
    ) -> Self {
        Sale {
            date,
            holder_name,
            mobile_name,
            mobile_rate,
            paid: initial_paid,
            remaining: mobile_rate.saturating_sub(initial_paid),
            payment_history: vec![Payment {
                date,
                amount: initial_paid,
            }],
        }
    }

    /// Apply a payment against the remaining balance
    ///
    /// On success, decreases `remaining`, increases `paid`, and appends a
    /// new entry to the payment history. A zero-amount payment is accepted
    /// and still appends a history entry, mirroring the creation-time
    /// behavior for sales with no upfront payment.
    ///
    /// # Arguments
    ///
    /// * `amount` - Amount collected (must not exceed `remaining`)
    /// * `date` - Calendar date the payment was recorded
    ///
    /// # Errors
    ///
    /// Returns `InsufficientRemainingBalance` if `amount` exceeds the
    /// remaining balance. The Sale is left completely unchanged: no
    /// balance movement and no history entry.
    pub fn apply_payment(&mut self, amount: u64, date: NaiveDate) -> Result<(), LedgerError> {
        if amount > self.remaining {
            return Err(LedgerError::insufficient_remaining_balance(
                self.remaining,
                amount,
            ));
        }

        self.remaining -= amount;
        self.paid += amount;
        self.payment_history.push(Payment { date, amount });

        Ok(())
    }
}
