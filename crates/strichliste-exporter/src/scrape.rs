//! One scrape: query the source, aggregate, or collapse into the error snapshot.
//!
//! Any failure discards everything fetched so far for this scrape; the caller
//! still gets a snapshot, so the HTTP layer always answers 200.

use strichliste_core::aggregate::{aggregate, AggregatedSnapshot, BankAggregate};
use strichliste_core::error::Result;
use strichliste_core::mapping::MappingTable;

use crate::source::{BankStat, DataSource};

pub async fn collect(source: &dyn DataSource, mapping: &MappingTable) -> AggregatedSnapshot {
    match try_collect(source, mapping).await {
        Ok(snapshot) => snapshot,
        Err(e) => {
            tracing::warn!(error = %e, "scrape failed");
            AggregatedSnapshot::from_error(&e)
        }
    }
}

async fn try_collect(
    source: &dyn DataSource,
    mapping: &MappingTable,
) -> Result<AggregatedSnapshot> {
    let rows = source.article_counts().await?;
    let bank = BankAggregate {
        turnover: source.bank_sum(BankStat::Turnover).await?,
        charges: source.bank_sum(BankStat::Charges).await?,
    };
    Ok(aggregate(rows, mapping, bank))
}
