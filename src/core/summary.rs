//! Summary aggregation over the record store
//!
//! Derives the dashboard totals (mobiles sold, cash remaining, cash
//! collected) by folding over the current sales. Pure functions only.

use crate::types::Sale;

/// Aggregate totals across all sales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SalesSummary {
    /// Number of mobiles sold (count of sales)
    pub total_sold: usize,

    /// Sum of remaining balances over all sales
    pub total_remaining: u64,

    /// Sum of collected amounts over all sales
    pub total_collected: u64,
}

/// Compute the summary totals for the given sales
///
/// Pure function of the current store state, O(n) over sales, no side
/// effects. An empty slice yields all-zero totals.
pub fn summarize(sales: &[Sale]) -> SalesSummary {
    SalesSummary {
        total_sold: sales.len(),
        total_remaining: sales.iter().map(|sale| sale.remaining).sum(),
        total_collected: sales.iter().map(|sale| sale.paid).sum(),
    }
}
