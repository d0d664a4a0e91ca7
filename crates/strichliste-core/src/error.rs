//! Shared error type across strichliste crates.

use thiserror::Error;

/// Shared result type.
pub type Result<T> = std::result::Result<T, ExporterError>;

/// Unified error type used by core and exporter.
#[derive(Debug, Error)]
pub enum ExporterError {
    /// Could not obtain a database connection (including acquire timeouts).
    #[error("connection error: {0}")]
    Connection(String),
    /// A query failed or ran past its deadline.
    #[error("query error: {0}")]
    Query(String),
    /// Configuration could not be read or failed validation.
    #[error("config error: {0}")]
    Config(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl ExporterError {
    /// Label value for the `error{msg="..."}` metric emitted when a scrape fails.
    pub fn scrape_msg(&self) -> &'static str {
        match self {
            ExporterError::Connection(_) => "connection error",
            ExporterError::Query(_) => "query error",
            ExporterError::Config(_) | ExporterError::Internal(_) => "internal error",
        }
    }
}
