//! I/O module
//!
//! Handles the persisted sales file.
//!
//! # Components
//!
//! - `csv_format` - Flat-file format handling (row conversion, payment-history encoding)
//! - `sales_file` - File-backed save/load of the record store

pub mod csv_format;
pub mod sales_file;

pub use csv_format::{
    decode_payment_history, encode_payment_history, record_to_sale, sale_to_record,
    write_sales_csv, CsvRecord,
};
pub use sales_file::SalesFile;
