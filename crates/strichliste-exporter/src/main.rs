//! strichliste exporter
//!
//! - Load YAML config from `$CONFIG` (`$DB` overrides the database URL)
//! - Open and ping the database; any startup failure exits the process
//! - Serve `GET /metrics`

use std::sync::Arc;

use tracing_subscriber::{fmt, EnvFilter};

use strichliste_core::error::{ExporterError, Result};
use strichliste_exporter::config::EnvOverrides;
use strichliste_exporter::{app_state, config, router, source::MySqlSource};

#[tokio::main]
async fn main() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "strichliste-exporter failed");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let path = config::config_path();
    let cfg = config::load_from_file(&path, &EnvOverrides::from_env())?;
    tracing::info!(config = %path, "config loaded");

    let listen = cfg.exporter.listen_addr()?;
    let source = MySqlSource::connect(&cfg).await?;

    let state = app_state::AppState::new(&cfg, Arc::new(source))?;
    let app = router::build_router(state);

    tracing::info!(%listen, "strichliste-exporter starting");
    let listener = tokio::net::TcpListener::bind(listen)
        .await
        .map_err(|e| ExporterError::Internal(format!("bind {listen} failed: {e}")))?;

    axum::serve(listener, app)
        .await
        .map_err(|e| ExporterError::Internal(format!("server failed: {e}")))
}
