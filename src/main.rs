//! Installment Sales Ledger CLI
//!
//! Command-line interface for recording mobile installment sales and
//! cash collections against a flat CSV data file.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- add --holder "A" --mobile "X" --rate 1000 --paid 200
//! cargo run -- pay 0 --amount 800
//! cargo run -- list
//! cargo run -- summary
//! cargo run -- remove 0
//! cargo run -- clear
//! cargo run -- --data-file other.csv summary
//! ```
//!
//! The data file (default `sales_data.csv`) is loaded once at startup and
//! rewritten after every mutating command.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (rejected payment, bad index, unreadable data file, etc.)

use installment_ledger::cli;
use installment_ledger::core::SalesLedger;
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    // Log to stderr so command output on stdout stays machine-readable
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    // Parse command-line arguments using clap
    let args = cli::parse_args();

    // Hydrate the ledger from the data file (missing file = first run)
    let mut ledger = match SalesLedger::open(&args.data_file) {
        Ok(ledger) => ledger,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    // Execute the requested command, writing results to stdout
    let mut output = std::io::stdout();
    if let Err(e) = cli::run(args.command, &mut ledger, &mut output) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
