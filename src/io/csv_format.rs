//! CSV format handling for the persisted sales file
//!
//! This module centralizes all flat-file format concerns, providing:
//! - CsvRecord structure matching the on-disk column layout
//! - Conversion between CSV rows and Sale records
//! - Payment-history cell encoding (a JSON list of date/amount pairs)
//!
//! All functions are pure (no I/O) for easy testing.
//!
//! # On-Disk Layout
//!
//! One row per Sale with columns `Date`, `Holder Name`, `Mobile Name`,
//! `Mobile Rate`, `Remaining Amount`, `Paid`, `Payment History`. Dates are
//! ISO-8601 (`YYYY-MM-DD`). The `Payment History` cell holds the whole
//! payment log as JSON, e.g. `[{"Date":"2024-01-01","Amount":200}]`.
//!
//! # Schema Evolution
//!
//! Rows written by older versions may lack the `Paid` or
//! `Payment History` columns; both deserialize to their defaults
//! (`0` / empty) rather than failing the row.

use crate::types::{LedgerError, Payment, Sale};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One row of the persisted sales file
///
/// Column names are the serde renames below; column order in the file is
/// not significant because reading is header-driven.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CsvRecord {
    #[serde(rename = "Date")]
    pub date: NaiveDate,

    #[serde(rename = "Holder Name")]
    pub holder_name: String,

    #[serde(rename = "Mobile Name")]
    pub mobile_name: String,

    #[serde(rename = "Mobile Rate")]
    pub mobile_rate: u64,

    #[serde(rename = "Remaining Amount")]
    pub remaining: u64,

    /// Cumulative collected amount; missing in old files, backfilled to 0
    #[serde(rename = "Paid", default)]
    pub paid: u64,

    /// JSON-encoded payment log; missing in old files, backfilled to empty
    #[serde(rename = "Payment History", default)]
    pub payment_history: String,
}

/// Encode a payment log as the `Payment History` cell value
///
/// Produces a JSON array of `{"Date": "YYYY-MM-DD", "Amount": n}` objects
/// in history order.
pub fn encode_payment_history(history: &[Payment]) -> Result<String, LedgerError> {
    serde_json::to_string(history)
        .map_err(|e| LedgerError::malformed_payment_history(e.to_string()))
}

/// Decode a `Payment History` cell back into a payment log
///
/// An empty cell decodes to an empty log (the backfill for rows written
/// before the column existed).
///
/// # Errors
///
/// Returns `MalformedPaymentHistory` if the cell is non-empty but is not
/// a valid JSON payment list. Callers loading a file degrade this to an
/// empty log instead of aborting; see [`record_to_sale`].
pub fn decode_payment_history(cell: &str) -> Result<Vec<Payment>, LedgerError> {
    if cell.trim().is_empty() {
        return Ok(Vec::new());
    }

    serde_json::from_str(cell).map_err(|e| LedgerError::malformed_payment_history(e.to_string()))
}

/// Convert a Sale to its on-disk row
pub fn sale_to_record(sale: &Sale) -> Result<CsvRecord, LedgerError> {
    Ok(CsvRecord {
        date: sale.date,
        holder_name: sale.holder_name.clone(),
        mobile_name: sale.mobile_name.clone(),
        mobile_rate: sale.mobile_rate,
        remaining: sale.remaining,
        paid: sale.paid,
        payment_history: encode_payment_history(&sale.payment_history)?,
    })
}

/// Convert an on-disk row back to a Sale
///
/// A malformed `Payment History` cell resets that Sale's history to
/// empty instead of failing the row: losing one payment log is
/// recoverable, aborting the whole load is not. The degrade is logged.
pub fn record_to_sale(record: CsvRecord) -> Sale {
    let payment_history = match decode_payment_history(&record.payment_history) {
        Ok(history) => history,
        Err(e) => {
            tracing::warn!(
                holder_name = %record.holder_name,
                error = %e,
                "resetting unreadable payment history to empty"
            );
            Vec::new()
        }
    };

    Sale {
        date: record.date,
        holder_name: record.holder_name,
        mobile_name: record.mobile_name,
        mobile_rate: record.mobile_rate,
        paid: record.paid,
        remaining: record.remaining,
        payment_history,
    }
}

/// Write sales to a CSV sink in on-disk column layout
///
/// Used by the CLI `list` command to print the store to stdout; the
/// rows are identical to what [`crate::io::SalesFile::save`] writes.
///
/// # Arguments
///
/// * `sales` - Sales to write, in store order
/// * `output` - Mutable reference to a writer for outputting CSV
pub fn write_sales_csv(sales: &[Sale], output: &mut dyn std::io::Write) -> Result<(), LedgerError> {
    let mut writer = csv::Writer::from_writer(output);

    for sale in sales {
        writer.serialize(sale_to_record(sale)?)?;
    }

    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample_sale() -> Sale {
        let mut sale = Sale::new(
            date(2024, 1, 1),
            "A".to_string(),
            "X".to_string(),
            1000,
            200,
        );
        sale.apply_payment(300, date(2024, 2, 1)).unwrap();
        sale
    }

    #[test]
    fn test_encode_payment_history_format() {
        let history = vec![
            Payment {
                date: date(2024, 1, 1),
                amount: 200,
            },
            Payment {
                date: date(2024, 2, 1),
                amount: 300,
            },
        ];

        let cell = encode_payment_history(&history).unwrap();

        assert_eq!(
            cell,
            r#"[{"Date":"2024-01-01","Amount":200},{"Date":"2024-02-01","Amount":300}]"#
        );
    }

    #[test]
    fn test_encode_empty_history() {
        let cell = encode_payment_history(&[]).unwrap();
        assert_eq!(cell, "[]");
    }

    #[rstest]
    #[case::empty_cell("")]
    #[case::whitespace_cell("   ")]
    fn test_decode_missing_cell_backfills_empty(#[case] cell: &str) {
        let history = decode_payment_history(cell).unwrap();
        assert!(history.is_empty());
    }

    #[test]
    fn test_decode_round_trips_dates_and_amounts() {
        let history = vec![
            Payment {
                date: date(2024, 1, 1),
                amount: 200,
            },
            Payment {
                date: date(2024, 2, 1),
                amount: 0,
            },
        ];

        let cell = encode_payment_history(&history).unwrap();
        let decoded = decode_payment_history(&cell).unwrap();

        assert_eq!(decoded, history);
    }

    #[rstest]
    #[case::not_json("not json at all")]
    #[case::wrong_shape(r#"{"Date":"2024-01-01","Amount":200}"#)]
    #[case::bad_date(r#"[{"Date":"01/01/2024","Amount":200}]"#)]
    #[case::negative_amount(r#"[{"Date":"2024-01-01","Amount":-5}]"#)]
    #[case::truncated(r#"[{"Date":"2024-01-01","#)]
    fn test_decode_malformed_cell_errors(#[case] cell: &str) {
        let result = decode_payment_history(cell);
        assert!(result.is_err());
        assert!(matches!(
            result.unwrap_err(),
            LedgerError::MalformedPaymentHistory { .. }
        ));
    }

    #[test]
    fn test_write_sales_csv_output() {
        let mut output = Vec::new();

        write_sales_csv(&[sample_sale()], &mut output).unwrap();

        let text = String::from_utf8(output).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next().unwrap(),
            "Date,Holder Name,Mobile Name,Mobile Rate,Remaining Amount,Paid,Payment History"
        );
        let row = lines.next().unwrap();
        assert!(row.starts_with("2024-01-01,A,X,1000,500,500,"));
    }

    #[test]
    fn test_write_sales_csv_empty_store() {
        let mut output = Vec::new();

        write_sales_csv(&[], &mut output).unwrap();

        assert!(output.is_empty());
    }

    #[test]
    fn test_sale_round_trips_through_record() {
        let sale = sample_sale();

        let record = sale_to_record(&sale).unwrap();
        let restored = record_to_sale(record);

        assert_eq!(restored, sale);
    }

    #[test]
    fn test_record_to_sale_degrades_malformed_history() {
        let record = CsvRecord {
            date: date(2024, 1, 1),
            holder_name: "A".to_string(),
            mobile_name: "X".to_string(),
            mobile_rate: 1000,
            remaining: 800,
            paid: 200,
            payment_history: "{broken".to_string(),
        };

        let sale = record_to_sale(record);

        // Balances survive, only the unreadable history is dropped
        assert_eq!(sale.paid, 200);
        assert_eq!(sale.remaining, 800);
        assert!(sale.payment_history.is_empty());
    }

    #[test]
    fn test_record_to_sale_backfills_missing_fields() {
        // Defaults stand in for columns absent from older files
        let record = CsvRecord {
            date: date(2024, 1, 1),
            holder_name: "A".to_string(),
            mobile_name: "X".to_string(),
            mobile_rate: 1000,
            remaining: 1000,
            paid: u64::default(),
            payment_history: String::default(),
        };

        let sale = record_to_sale(record);

        assert_eq!(sale.paid, 0);
        assert!(sale.payment_history.is_empty());
    }
}
