//! Top-level facade crate for the strichliste exporter.
//!
//! Re-exports the core engine and the exporter library so users can depend on a single crate.

pub mod core {
    pub use strichliste_core::*;
}

pub mod exporter {
    pub use strichliste_exporter::*;
}
