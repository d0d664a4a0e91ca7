//! Shared application state for the exporter.
//!
//! Holds the compiled mapping table and the data source. Both are built once
//! at startup and only read by scrape handlers.

use std::sync::Arc;

use strichliste_core::aggregate::AggregatedSnapshot;
use strichliste_core::error::{ExporterError, Result};
use strichliste_core::mapping::MappingTable;

use crate::config::ExporterConfig;
use crate::scrape;
use crate::source::DataSource;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    mapping: MappingTable,
    source: Arc<dyn DataSource>,
}

impl AppState {
    /// Compile the mapping table and bind it to a data source.
    /// Returns Result so duplicate articles can fail startup when configured to.
    pub fn new(cfg: &ExporterConfig, source: Arc<dyn DataSource>) -> Result<Self> {
        let mapping = MappingTable::from_groups(&cfg.metrics_groups);

        if cfg.exporter.reject_duplicate_articles && !mapping.collisions().is_empty() {
            let articles: Vec<&str> = mapping
                .collisions()
                .iter()
                .map(|c| c.article.as_str())
                .collect();
            return Err(ExporterError::Config(format!(
                "articles configured more than once: {}",
                articles.join(", ")
            )));
        }

        tracing::info!(
            articles = mapping.len(),
            groups = cfg.metrics_groups.len(),
            "mapping table built"
        );

        Ok(Self {
            inner: Arc::new(AppStateInner { mapping, source }),
        })
    }

    pub fn mapping(&self) -> &MappingTable {
        &self.inner.mapping
    }

    pub async fn scrape(&self) -> AggregatedSnapshot {
        scrape::collect(self.inner.source.as_ref(), &self.inner.mapping).await
    }
}
