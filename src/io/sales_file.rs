//! File-backed persistence for the record store
//!
//! Provides the SalesFile wrapper around the flat data file. Saving is a
//! whole-file rewrite on every call; loading happens once at process
//! start to hydrate the record store.
//!
//! # Error Handling
//!
//! - A missing file on load is the expected first-run state and yields
//!   an empty store, not an error
//! - A malformed payment-history cell degrades to an empty history for
//!   that row (handled in `csv_format`), with the rest of the load
//!   proceeding normally
//! - Any other read, parse, or write failure is surfaced to the caller;
//!   a silently lost write would corrupt the ledger across restarts

use crate::io::csv_format::{record_to_sale, sale_to_record, CsvRecord};
use crate::types::{LedgerError, Sale};
use csv::ReaderBuilder;
use std::fs::File;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Handle to the persisted sales file
///
/// Holds only the path; every save and load opens the file fresh, so the
/// handle itself carries no state that could go stale.
#[derive(Debug, Clone)]
pub struct SalesFile {
    path: PathBuf,
}

impl SalesFile {
    /// Create a handle for the data file at `path`
    ///
    /// The file is not touched until the first save or load.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        SalesFile { path: path.into() }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load all sales from the data file
    ///
    /// Rows are returned in file order, which is creation order.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read, or if a
    /// row fails to parse beyond its payment-history cell. A missing
    /// file yields `Ok(vec![])`.
    pub fn load(&self) -> Result<Vec<Sale>, LedgerError> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            // First run: no data file yet
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut reader = ReaderBuilder::new().flexible(true).from_reader(file);

        let mut sales = Vec::new();
        for result in reader.deserialize::<CsvRecord>() {
            sales.push(record_to_sale(result?));
        }

        Ok(sales)
    }

    /// Write all sales to the data file, replacing its previous contents
    ///
    /// Whole-file rewrite on every call; there is no partial-write
    /// recovery beyond the next successful save.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or written.
    pub fn save(&self, sales: &[Sale]) -> Result<(), LedgerError> {
        let file = File::create(&self.path)?;
        let mut writer = csv::Writer::from_writer(file);

        for sale in sales {
            writer.serialize(sale_to_record(sale)?)?;
        }

        writer.flush()?;
        Ok(())
    }
}
