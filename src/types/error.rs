//! Error types for the installment ledger
//!
//! This module defines all error types that can occur while recording
//! sales, applying payments, and persisting the ledger to disk.
//! Errors are designed to be descriptive and user-friendly for CLI output.
//!
//! # Error Categories
//!
//! - **Ledger Errors**: Overdrawn payments, references to non-existent sales
//! - **Load Errors**: Malformed CSV rows, malformed payment-history cells
//! - **I/O Errors**: Failures writing or reading the data file

use thiserror::Error;

/// Main error type for the installment ledger
///
/// Each variant carries the context needed to diagnose the failure and
/// report it to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// Payment amount exceeds a Sale's remaining balance
    ///
    /// This is a recoverable error - the payment is rejected and the
    /// Sale state remains unchanged.
    #[error("payment of {requested} exceeds the remaining amount of {remaining}")]
    InsufficientRemainingBalance {
        /// Remaining balance on the Sale
        remaining: u64,
        /// Requested payment amount
        requested: u64,
    },

    /// A sale index outside the current store bounds was referenced
    ///
    /// This is a recoverable error - the operation is rejected and the
    /// store is unchanged.
    #[error("no sale at index {index} (store holds {count} sales)")]
    IndexOutOfRange {
        /// Index that was referenced
        index: usize,
        /// Number of sales currently in the store
        count: usize,
    },

    /// A payment-history cell failed to decode during load
    ///
    /// This error never aborts a load: the affected Sale's history is
    /// reset to empty and loading continues with the next row.
    #[error("malformed payment history: {message}")]
    MalformedPaymentHistory {
        /// Description of the decode failure
        message: String,
    },

    /// CSV parsing error occurred while loading the data file
    ///
    /// This is fatal to the load - a corrupt row (beyond the
    /// payment-history cell) means the file cannot be trusted.
    #[error("CSV parse error{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    Csv {
        /// Line number where the error occurred (if available)
        line: Option<u64>,
        /// Description of the parsing error
        message: String,
    },

    /// I/O error occurred while reading or writing the data file
    ///
    /// Fatal to the save or load call it occurred in. A missing data
    /// file on load is not an error (first-run state) and is handled
    /// before this variant surfaces.
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
    },
}

// Conversion from io::Error to LedgerError
impl From<std::io::Error> for LedgerError {
    fn from(error: std::io::Error) -> Self {
        LedgerError::Io {
            message: error.to_string(),
        }
    }
}

// Conversion from csv::Error to LedgerError
impl From<csv::Error> for LedgerError {
    fn from(error: csv::Error) -> Self {
        // Extract line number if available
        let line = error.position().map(|pos| pos.line());

        LedgerError::Csv {
            line,
            message: error.to_string(),
        }
    }
}

// Helper functions for creating common errors

impl LedgerError {
    /// Create an InsufficientRemainingBalance error
    pub fn insufficient_remaining_balance(remaining: u64, requested: u64) -> Self {
        LedgerError::InsufficientRemainingBalance {
            remaining,
            requested,
        }
    }

    /// Create an IndexOutOfRange error
    pub fn index_out_of_range(index: usize, count: usize) -> Self {
        LedgerError::IndexOutOfRange { index, count }
    }

    /// Create a MalformedPaymentHistory error
    pub fn malformed_payment_history(message: impl Into<String>) -> Self {
        LedgerError::MalformedPaymentHistory {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::insufficient_balance(
        LedgerError::InsufficientRemainingBalance { remaining: 800, requested: 801 },
        "payment of 801 exceeds the remaining amount of 800"
    )]
    #[case::index_out_of_range(
        LedgerError::IndexOutOfRange { index: 5, count: 2 },
        "no sale at index 5 (store holds 2 sales)"
    )]
    #[case::malformed_history(
        LedgerError::MalformedPaymentHistory { message: "expected value at line 1".to_string() },
        "malformed payment history: expected value at line 1"
    )]
    #[case::csv_with_line(
        LedgerError::Csv { line: Some(3), message: "invalid digit".to_string() },
        "CSV parse error at line 3: invalid digit"
    )]
    #[case::csv_without_line(
        LedgerError::Csv { line: None, message: "invalid digit".to_string() },
        "CSV parse error: invalid digit"
    )]
    #[case::io_error(
        LedgerError::Io { message: "Permission denied".to_string() },
        "I/O error: Permission denied"
    )]
    fn test_error_display(#[case] error: LedgerError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[rstest]
    #[case::insufficient_balance(
        LedgerError::insufficient_remaining_balance(800, 801),
        LedgerError::InsufficientRemainingBalance { remaining: 800, requested: 801 }
    )]
    #[case::index_out_of_range(
        LedgerError::index_out_of_range(5, 2),
        LedgerError::IndexOutOfRange { index: 5, count: 2 }
    )]
    #[case::malformed_history(
        LedgerError::malformed_payment_history("bad cell"),
        LedgerError::MalformedPaymentHistory { message: "bad cell".to_string() }
    )]
    fn test_helper_functions(#[case] result: LedgerError, #[case] expected: LedgerError) {
        assert_eq!(result, expected);
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error =
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "Permission denied");
        let error: LedgerError = io_error.into();
        assert!(matches!(error, LedgerError::Io { .. }));
        assert_eq!(error.to_string(), "I/O error: Permission denied");
    }
}
