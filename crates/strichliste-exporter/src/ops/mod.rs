//! Scrape endpoint.
//!
//! `/metrics` always answers 200; data-source failures show up as an
//! `error{msg="..."}` metric in the body instead of an HTTP error.

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use tokio::time::Instant;

use strichliste_core::exposition;

use crate::app_state::AppState;

pub async fn metrics(State(state): State<AppState>) -> Response {
    let started = Instant::now();
    let snapshot = state.scrape().await;
    let body = exposition::render(&snapshot);

    tracing::debug!(
        entries = snapshot.len(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "scrape served"
    );

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4; charset=utf-8")],
        body,
    )
        .into_response()
}
