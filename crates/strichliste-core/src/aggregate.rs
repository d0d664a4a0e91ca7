//! Snapshot aggregation.
//!
//! Every row contributes its raw count to a `counter{name="<article>"}` entry.
//! Rows whose article is mapped additionally contribute `factor * count` to the
//! `<group>{category="..", name=".."}` entry; unmapped rows bump `not_found`
//! by one per row (distinct articles, not transaction volume). Bank sums are
//! merged additively at the end. All contributions are plain sums, so the
//! result does not depend on row order.

use std::collections::BTreeMap;

use crate::error::ExporterError;
use crate::mapping::MappingTable;

pub const NOT_FOUND: &str = "not_found";
pub const TURNOVER: &str = "turnover";
pub const CHARGES: &str = "charges";

/// Per-article transaction count as returned by the data source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawCountRow {
    pub identifier: String,
    pub count: i64,
}

impl RawCountRow {
    pub fn new(identifier: impl Into<String>, count: i64) -> Self {
        Self {
            identifier: identifier.into(),
            count,
        }
    }
}

/// Signed amount sums, computed independently of the row stream.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BankAggregate {
    /// Sum of negative amounts.
    pub turnover: i64,
    /// Sum of positive amounts.
    pub charges: i64,
}

pub fn grouped_key(group: &str, category: &str, name: &str) -> String {
    format!("{group}{{category=\"{category}\", name=\"{name}\"}}")
}

pub fn counter_key(identifier: &str) -> String {
    format!("counter{{name=\"{identifier}\"}}")
}

pub fn error_key(msg: &str) -> String {
    format!("error{{msg=\"{msg}\"}}")
}

/// Metric key -> value for a single scrape.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AggregatedSnapshot {
    values: BTreeMap<String, f64>,
}

impl AggregatedSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// The single-entry snapshot reported instead of data when a scrape fails.
    pub fn from_error(err: &ExporterError) -> Self {
        let mut snap = Self::new();
        snap.values.insert(error_key(err.scrape_msg()), 1.0);
        snap
    }

    /// Add `v` to `key`, creating the entry at zero.
    pub fn add(&mut self, key: impl Into<String>, v: f64) {
        *self.values.entry(key.into()).or_insert(0.0) += v;
    }

    pub fn get(&self, key: &str) -> Option<f64> {
        self.values.get(key).copied()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.values.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

/// Incremental aggregator bound to one mapping table.
pub struct Aggregator<'a> {
    mapping: &'a MappingTable,
    snapshot: AggregatedSnapshot,
}

impl<'a> Aggregator<'a> {
    pub fn new(mapping: &'a MappingTable) -> Self {
        let mut snapshot = AggregatedSnapshot::new();
        snapshot.add(NOT_FOUND, 0.0);
        Self { mapping, snapshot }
    }

    pub fn observe(&mut self, row: &RawCountRow) {
        let count = row.count as f64;

        match self.mapping.get(&row.identifier) {
            Some(m) => {
                let def = &m.definition;
                self.snapshot.add(
                    grouped_key(&m.group, &def.category, &def.name),
                    def.factor * count,
                );
            }
            None => self.snapshot.add(NOT_FOUND, 1.0),
        }

        self.snapshot.add(counter_key(&row.identifier), count);
    }

    pub fn merge_bank(&mut self, bank: BankAggregate) {
        self.snapshot.add(TURNOVER, bank.turnover as f64);
        self.snapshot.add(CHARGES, bank.charges as f64);
    }

    pub fn finish(self) -> AggregatedSnapshot {
        self.snapshot
    }
}

/// Aggregate a full row sequence plus bank sums into a fresh snapshot.
pub fn aggregate<I>(rows: I, mapping: &MappingTable, bank: BankAggregate) -> AggregatedSnapshot
where
    I: IntoIterator<Item = RawCountRow>,
{
    let mut agg = Aggregator::new(mapping);
    for row in rows {
        agg.observe(&row);
    }
    agg.merge_bank(bank);
    agg.finish()
}
