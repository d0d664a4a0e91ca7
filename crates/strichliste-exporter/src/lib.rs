//! strichliste exporter library entry.
//!
//! Wires config loading, the MySQL data source, and the `/metrics` endpoint
//! around the core aggregation engine. Consumed by the binary (`main.rs`) and
//! by integration tests.

pub mod app_state;
pub mod config;
pub mod ops;
pub mod router;
pub mod scrape;
pub mod source;
