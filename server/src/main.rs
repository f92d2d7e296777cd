#![recursion_limit = "256"]

mod config;
mod routes;
mod services;
mod state;

use std::sync::Arc;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "folio-server failed to start");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), String> {
    let config = config::SiteConfig::from_env().map_err(|e| e.to_string())?;
    let port = config.port;

    if config.blogger_credentials().is_none() {
        tracing::warn!("blogger credentials not configured; blog serves demo posts");
    }
    if let Err(var) = config.drive_credentials() {
        tracing::warn!(missing = var, "certificate listing not configured");
    }

    let source = services::fetch::HttpJsonSource::new(config.timeouts).map_err(|e| e.to_string())?;
    let state = state::AppState::new(config, Arc::new(source));

    let app = routes::leptos_app(state)?;
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .map_err(|e| format!("failed to bind port {port}: {e}"))?;

    tracing::info!(%port, "folio listening");
    axum::serve(listener, app)
        .await
        .map_err(|e| format!("server failed: {e}"))
}
