//! Exporter config loader (strict parsing).
//!
//! The file path comes from `CONFIG`; `DB` overrides the connection string
//! from the file. Overrides are applied before validation.

pub mod schema;

use std::fs;

use strichliste_core::error::{ExporterError, Result};

pub use schema::{ExporterConfig, ExporterSection};

pub const CONFIG_ENV: &str = "CONFIG";
pub const DB_ENV: &str = "DB";
pub const DEFAULT_CONFIG_PATH: &str = "/etc/strichliste_exporter/config.yml";

/// Values taken from the process environment that take precedence over the file.
#[derive(Debug, Clone, Default)]
pub struct EnvOverrides {
    pub db: Option<String>,
}

impl EnvOverrides {
    pub fn from_env() -> Self {
        Self {
            db: std::env::var(DB_ENV).ok(),
        }
    }
}

pub fn config_path() -> String {
    std::env::var(CONFIG_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string())
}

pub fn load_from_file(path: &str, overrides: &EnvOverrides) -> Result<ExporterConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| ExporterError::Config(format!("read config {path} failed: {e}")))?;
    load_from_str(&s, overrides)
}

pub fn load_from_str(s: &str, overrides: &EnvOverrides) -> Result<ExporterConfig> {
    let mut cfg: ExporterConfig = serde_yaml::from_str(s)
        .map_err(|e| ExporterError::Config(format!("invalid yaml: {e}")))?;
    if let Some(db) = &overrides.db {
        cfg.db = db.clone();
    }
    cfg.validate()?;
    Ok(cfg)
}
