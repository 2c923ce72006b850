use std::sync::Arc;

use axum::{middleware, Extension, Router};
use eyre::{Context as _, Result};
use log::info;
use report::Reports;

mod error;
mod logging;
mod overview;
mod stores;

pub fn app(reports: Arc<Reports>) -> Router {
    Router::new()
        .merge(stores::routes())
        .merge(overview::routes())
        .layer(Extension(reports))
        .layer(middleware::from_fn(logging::log_request))
}

pub async fn serve(reports: Arc<Reports>, addr: &str) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app(reports))
        .await
        .context("Server failed")
}
