//! strichliste core: article mapping, snapshot aggregation, and text exposition.
//!
//! This crate turns per-article transaction counts into a labeled metrics
//! snapshot. It carries no database, HTTP, or runtime dependencies so the
//! aggregation rules can be exercised in isolation and reused by the exporter.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths surface as `ExporterError`/`Result`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod aggregate;
pub mod error;
pub mod exposition;
pub mod mapping;

/// Shared result type.
pub use error::{ExporterError, Result};
