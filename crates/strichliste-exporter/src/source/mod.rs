//! Data source seam.
//!
//! The scrape path only sees `DataSource`; the MySQL implementation lives in
//! `mysql`, and tests plug in in-memory sources.

pub mod mysql;

use async_trait::async_trait;

use strichliste_core::aggregate::{RawCountRow, CHARGES, TURNOVER};
use strichliste_core::error::Result;

pub use mysql::MySqlSource;

/// The two signed amount sums reported next to the article counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BankStat {
    /// Sum of negative amounts.
    Turnover,
    /// Sum of positive amounts.
    Charges,
}

impl BankStat {
    pub fn as_str(self) -> &'static str {
        match self {
            BankStat::Turnover => TURNOVER,
            BankStat::Charges => CHARGES,
        }
    }
}

#[async_trait]
pub trait DataSource: Send + Sync {
    /// Transaction count per article over all non-deleted transactions.
    async fn article_counts(&self) -> Result<Vec<RawCountRow>>;

    /// One bank sum. `NULL` sums (no matching rows) are reported as 0.
    async fn bank_sum(&self, stat: BankStat) -> Result<i64>;
}
