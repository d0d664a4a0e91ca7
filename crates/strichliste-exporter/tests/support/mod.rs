//! In-memory data source shared by exporter tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]
#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use strichliste_core::aggregate::RawCountRow;
use strichliste_core::error::{ExporterError, Result};
use strichliste_exporter::config::{self, EnvOverrides, ExporterConfig};
use strichliste_exporter::source::{BankStat, DataSource};

#[derive(Debug, Clone, Copy)]
pub enum Fail {
    Connection,
    Query,
}

impl Fail {
    fn err(self) -> ExporterError {
        match self {
            Fail::Connection => ExporterError::Connection("refused".into()),
            Fail::Query => ExporterError::Query("syntax".into()),
        }
    }
}

#[derive(Default)]
pub struct FakeSource {
    pub rows: Vec<RawCountRow>,
    pub turnover: i64,
    pub charges: i64,
    pub fail_rows: Option<Fail>,
    pub fail_bank: Option<(BankStat, Fail)>,
    pub bank_calls: AtomicUsize,
}

impl FakeSource {
    pub fn bank_calls(&self) -> usize {
        self.bank_calls.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl DataSource for FakeSource {
    async fn article_counts(&self) -> Result<Vec<RawCountRow>> {
        match self.fail_rows {
            Some(f) => Err(f.err()),
            None => Ok(self.rows.clone()),
        }
    }

    async fn bank_sum(&self, stat: BankStat) -> Result<i64> {
        self.bank_calls.fetch_add(1, Ordering::Relaxed);
        if let Some((s, f)) = self.fail_bank {
            if s == stat {
                return Err(f.err());
            }
        }
        Ok(match stat {
            BankStat::Turnover => self.turnover,
            BankStat::Charges => self.charges,
        })
    }
}

pub const COFFEE_CONFIG: &str = r#"
db: "mysql://exporter@localhost/strichliste"
metrics_groups:
  drinks:
    - { name: "Coffee", article: "coffee", category: "hot", factor: 1.5 }
"#;

pub fn coffee_config() -> ExporterConfig {
    config::load_from_str(COFFEE_CONFIG, &EnvOverrides::default()).expect("config must parse")
}

pub fn coffee_source() -> FakeSource {
    FakeSource {
        rows: vec![RawCountRow::new("coffee", 3), RawCountRow::new("tea", 2)],
        turnover: -40,
        charges: 60,
        ..Default::default()
    }
}
