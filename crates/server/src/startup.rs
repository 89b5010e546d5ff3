use std::{sync::Arc, time::Duration};

use axum::Router;
use common::upstream::{UpstreamClient, UpstreamEndpoints};
use configs::AppConfig;
use service::{
    storage::json_map_store::JsonMapStore,
    student::{Student, StudentRegistry},
};
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::{routes, state::AppState};

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Load the registry from its snapshot file and build the upstream client.
pub async fn build_state(cfg: &AppConfig) -> anyhow::Result<AppState> {
    let store = Arc::new(JsonMapStore::<i64, Student>::new(&cfg.storage.students_file));
    let registry = Arc::new(StudentRegistry::load(store).await);

    let endpoints = UpstreamEndpoints {
        quote_url: cfg.upstream.quote_url.clone(),
        univ_url: cfg.upstream.univ_url.clone(),
        countries_url: cfg.upstream.countries_url.clone(),
    };
    let upstream = UpstreamClient::new(endpoints, cfg.upstream.timeout_secs.map(Duration::from_secs))?;

    Ok(AppState { registry, upstream: Arc::new(upstream) })
}

pub fn build_app(state: AppState) -> Router {
    routes::build_router(state, build_cors())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
    info!(event = "shutdown_signal", pid = std::process::id(), "received Ctrl+C, shutting down");
}

/// Public entry: build the app and run the HTTP server until Ctrl+C.
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    let state = build_state(&cfg).await?;
    let app = build_app(state);

    let addr = cfg.bind_addr();
    info!(%addr, students_file = %cfg.storage.students_file, "starting student registry");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}
