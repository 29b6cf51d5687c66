// CLI module
// Command-line interface, argument parsing, and command dispatch

mod args;

pub use args::{CliArgs, Command};

use crate::core::SalesLedger;
use crate::io::write_sales_csv;
use crate::types::LedgerError;
use chrono::NaiveDate;
use clap::Parser;
use std::io::Write;

/// Parse command-line arguments using clap
///
/// If parsing fails (invalid arguments, missing required arguments, or
/// the --help flag), clap displays an error message or help text and
/// exits the process.
pub fn parse_args() -> CliArgs {
    CliArgs::parse()
}

/// Execute a single ledger command, writing human-readable results to `output`
///
/// # Arguments
///
/// * `command` - The parsed subcommand to execute
/// * `ledger` - The open sales ledger to operate on
/// * `output` - Sink for command output (stdout in the binary)
///
/// # Errors
///
/// Surfaces any ledger error (rejected payment, bad index, failed save)
/// or output write failure to the caller unchanged.
pub fn run(
    command: Command,
    ledger: &mut SalesLedger,
    output: &mut dyn Write,
) -> Result<(), LedgerError> {
    match command {
        Command::Add {
            holder,
            mobile,
            rate,
            paid,
            date,
        } => {
            let date = date.unwrap_or_else(today);
            let sale = ledger.create(date, holder, mobile, rate, paid)?;
            writeln!(
                output,
                "Saved sale of {} to {} on {} ({} paid, {} remaining)",
                sale.mobile_name, sale.holder_name, sale.date, sale.paid, sale.remaining
            )?;
        }
        Command::Pay {
            index,
            amount,
            date,
        } => {
            let date = date.unwrap_or_else(today);
            ledger.apply_payment(index, amount, date)?;
            if let Some(sale) = ledger.sales().get(index) {
                writeln!(
                    output,
                    "{} paid for {} on {} ({} remaining)",
                    amount, sale.holder_name, date, sale.remaining
                )?;
            }
        }
        Command::List => {
            write_sales_csv(ledger.sales(), output)?;
        }
        Command::Summary => {
            let summary = ledger.summarize();
            writeln!(output, "Mobiles sold: {}", summary.total_sold)?;
            writeln!(output, "Total remaining cash: {}", summary.total_remaining)?;
            writeln!(output, "Total cash collected: {}", summary.total_collected)?;
        }
        Command::Remove { index } => {
            let removed = ledger.delete(index)?;
            writeln!(
                output,
                "Removed sale of {} to {}",
                removed.mobile_name, removed.holder_name
            )?;
        }
        Command::Clear => {
            ledger.clear_all()?;
            writeln!(output, "All sales cleared")?;
        }
    }

    Ok(())
}

/// Today's date in the local timezone
///
/// Used when `add` or `pay` is invoked without an explicit date.
fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}
