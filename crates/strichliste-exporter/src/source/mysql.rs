//! MySQL/MariaDB data source backed by an sqlx pool.
//!
//! Connection acquisition and query execution run under `tokio::time`
//! deadlines. An expired deadline while acquiring maps to
//! `ExporterError::Connection`, while querying to `ExporterError::Query`.
//! The timed-out future is dropped, which cancels the query.

use async_trait::async_trait;
use futures_util::TryStreamExt;
use sqlx::mysql::{MySqlPool, MySqlPoolOptions};
use sqlx::pool::PoolConnection;
use sqlx::{Connection, MySql};
use tokio::time::{timeout_at, Duration, Instant};

use strichliste_core::aggregate::RawCountRow;
use strichliste_core::error::{ExporterError, Result};

use super::{BankStat, DataSource};
use crate::config::{ExporterConfig, ExporterSection};

const ARTICLE_COUNTS_SQL: &str = r#"
    SELECT
        CAST(COUNT(t.id) AS SIGNED) AS count,
        a.name AS name
    FROM transactions t
    JOIN article a ON t.article_id = a.id
    WHERE t.deleted = 0
    GROUP BY a.id, a.name
"#;

const TURNOVER_SQL: &str =
    "SELECT CAST(COALESCE(SUM(amount), 0) AS SIGNED) FROM transactions WHERE amount < 0";
const CHARGES_SQL: &str =
    "SELECT CAST(COALESCE(SUM(amount), 0) AS SIGNED) FROM transactions WHERE amount > 0";

pub struct MySqlSource {
    pool: MySqlPool,
    row_timeout: Duration,
    bank_timeout: Duration,
}

impl MySqlSource {
    /// Open the pool and verify the database answers a ping.
    pub async fn connect(cfg: &ExporterConfig) -> Result<Self> {
        let pool = pool_options(&cfg.exporter)
            .connect(&cfg.db)
            .await
            .map_err(|e| ExporterError::Connection(format!("open database failed: {e}")))?;

        let source = Self::from_pool(pool, &cfg.exporter);
        source.ping().await?;
        Ok(source)
    }

    /// Build a source without touching the database; connections open on first use.
    pub fn connect_lazy(cfg: &ExporterConfig) -> Result<Self> {
        let pool = pool_options(&cfg.exporter)
            .connect_lazy(&cfg.db)
            .map_err(|e| ExporterError::Connection(format!("invalid database url: {e}")))?;
        Ok(Self::from_pool(pool, &cfg.exporter))
    }

    pub fn from_pool(pool: MySqlPool, section: &ExporterSection) -> Self {
        Self {
            pool,
            row_timeout: section.row_query_timeout(),
            bank_timeout: section.bank_query_timeout(),
        }
    }

    pub async fn ping(&self) -> Result<()> {
        let deadline = Instant::now() + self.bank_timeout;
        let mut conn = self.acquire(deadline).await?;
        timeout_at(deadline, conn.ping())
            .await
            .map_err(|_| ExporterError::Connection("ping timed out".into()))?
            .map_err(|e| ExporterError::Connection(format!("ping failed: {e}")))
    }

    async fn acquire(&self, deadline: Instant) -> Result<PoolConnection<MySql>> {
        timeout_at(deadline, self.pool.acquire())
            .await
            .map_err(|_| ExporterError::Connection("acquire timed out".into()))?
            .map_err(|e| ExporterError::Connection(e.to_string()))
    }
}

fn pool_options(section: &ExporterSection) -> MySqlPoolOptions {
    MySqlPoolOptions::new()
        .max_connections(section.max_connections)
        .acquire_timeout(section.bank_query_timeout())
}

#[async_trait]
impl DataSource for MySqlSource {
    async fn article_counts(&self) -> Result<Vec<RawCountRow>> {
        // one budget shared by acquire + query
        let deadline = Instant::now() + self.row_timeout;
        let mut conn = self.acquire(deadline).await?;

        let fetch = sqlx::query_as::<_, (i64, String)>(ARTICLE_COUNTS_SQL)
            .fetch(&mut *conn)
            .map_ok(|(count, name)| RawCountRow::new(name, count))
            .try_collect::<Vec<_>>();

        timeout_at(deadline, fetch)
            .await
            .map_err(|_| ExporterError::Query("article counts timed out".into()))?
            .map_err(|e| ExporterError::Query(e.to_string()))
    }

    async fn bank_sum(&self, stat: BankStat) -> Result<i64> {
        let deadline = Instant::now() + self.bank_timeout;
        let mut conn = self.acquire(deadline).await?;

        let sql = match stat {
            BankStat::Turnover => TURNOVER_SQL,
            BankStat::Charges => CHARGES_SQL,
        };
        let query = sqlx::query_scalar::<_, i64>(sql).fetch_one(&mut *conn);

        timeout_at(deadline, query)
            .await
            .map_err(|_| ExporterError::Query(format!("{} sum timed out", stat.as_str())))?
            .map_err(|e| ExporterError::Query(e.to_string()))
    }
}
