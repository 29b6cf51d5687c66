use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Track installment mobile sales and cash collections
#[derive(Parser, Debug)]
#[command(name = "installment-ledger")]
#[command(about = "Track installment mobile sales and cash collections", long_about = None)]
pub struct CliArgs {
    /// Path to the sales data file
    #[arg(
        long = "data-file",
        value_name = "FILE",
        default_value = "sales_data.csv",
        global = true,
        help = "Path to the sales data file"
    )]
    pub data_file: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

/// Ledger operations available from the command line
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Record a new mobile sale
    Add {
        /// Name of the buyer
        #[arg(long, value_name = "NAME")]
        holder: String,

        /// Name of the mobile sold
        #[arg(long, value_name = "NAME")]
        mobile: String,

        /// Total price of the mobile
        #[arg(long, value_name = "AMOUNT")]
        rate: u64,

        /// Amount collected upfront
        #[arg(long, value_name = "AMOUNT", default_value_t = 0)]
        paid: u64,

        /// Date of the sale (defaults to today)
        #[arg(long, value_name = "YYYY-MM-DD")]
        date: Option<NaiveDate>,
    },

    /// Record a cash collection against an existing sale
    Pay {
        /// Index of the sale, as shown by `list`
        #[arg(value_name = "INDEX")]
        index: usize,

        /// Amount collected
        #[arg(long, value_name = "AMOUNT")]
        amount: u64,

        /// Date of the collection (defaults to today)
        #[arg(long, value_name = "YYYY-MM-DD")]
        date: Option<NaiveDate>,
    },

    /// Print all sales as CSV
    List,

    /// Print the aggregate totals
    Summary,

    /// Permanently remove the sale at the given index
    Remove {
        /// Index of the sale, as shown by `list`
        #[arg(value_name = "INDEX")]
        index: usize,
    },

    /// Permanently remove all sales
    Clear,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_data_file_defaults() {
        let parsed = CliArgs::try_parse_from(["program", "summary"]).unwrap();
        assert_eq!(parsed.data_file, PathBuf::from("sales_data.csv"));
    }

    #[test]
    fn test_data_file_is_global() {
        // The flag may follow the subcommand
        let parsed =
            CliArgs::try_parse_from(["program", "summary", "--data-file", "other.csv"]).unwrap();
        assert_eq!(parsed.data_file, PathBuf::from("other.csv"));
    }

    #[test]
    fn test_add_parses_all_fields() {
        let parsed = CliArgs::try_parse_from([
            "program", "add", "--holder", "A", "--mobile", "X", "--rate", "1000", "--paid", "200",
            "--date", "2024-01-01",
        ])
        .unwrap();

        match parsed.command {
            Command::Add {
                holder,
                mobile,
                rate,
                paid,
                date,
            } => {
                assert_eq!(holder, "A");
                assert_eq!(mobile, "X");
                assert_eq!(rate, 1000);
                assert_eq!(paid, 200);
                assert_eq!(date, NaiveDate::from_ymd_opt(2024, 1, 1));
            }
            other => panic!("Expected Add, got {:?}", other),
        }
    }

    #[test]
    fn test_add_paid_and_date_default() {
        let parsed = CliArgs::try_parse_from([
            "program", "add", "--holder", "A", "--mobile", "X", "--rate", "1000",
        ])
        .unwrap();

        match parsed.command {
            Command::Add { paid, date, .. } => {
                assert_eq!(paid, 0);
                assert!(date.is_none());
            }
            other => panic!("Expected Add, got {:?}", other),
        }
    }

    #[test]
    fn test_pay_parses_index_and_amount() {
        let parsed =
            CliArgs::try_parse_from(["program", "pay", "2", "--amount", "500"]).unwrap();

        match parsed.command {
            Command::Pay {
                index,
                amount,
                date,
            } => {
                assert_eq!(index, 2);
                assert_eq!(amount, 500);
                assert!(date.is_none());
            }
            other => panic!("Expected Pay, got {:?}", other),
        }
    }

    // Error handling tests
    #[rstest]
    #[case::no_subcommand(&["program"])]
    #[case::add_missing_rate(&["program", "add", "--holder", "A", "--mobile", "X"])]
    #[case::add_negative_rate(&["program", "add", "--holder", "A", "--mobile", "X", "--rate", "-1"])]
    #[case::add_bad_date(&["program", "add", "--holder", "A", "--mobile", "X", "--rate", "1", "--date", "01/01/2024"])]
    #[case::pay_missing_amount(&["program", "pay", "0"])]
    #[case::remove_missing_index(&["program", "remove"])]
    fn test_parsing_errors(#[case] args: &[&str]) {
        let result = CliArgs::try_parse_from(args);
        assert!(result.is_err());
    }
}
