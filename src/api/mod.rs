//! HTTP layer exposing the prediction pipeline.

pub mod routes;
pub mod types;

use std::net::SocketAddr;

use anyhow::Result;
use axum::{
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

use crate::{artifacts::SharedBundle, config::Settings};

/// Shared state: settings plus the lazily-loaded, process-wide model bundle.
#[derive(Clone)]
pub struct AppState {
    pub settings: Settings,
    pub bundle: SharedBundle,
}

pub async fn serve(settings: Settings, host: String, port: u16) -> Result<()> {
    let state = AppState {
        settings,
        bundle: SharedBundle::new(),
    };
    let router = Router::new()
        .route("/health", get(routes::health))
        .route("/analyze", post(routes::analyze))
        .route("/diseases", get(routes::list_diseases))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state);

    let addr: SocketAddr = format!("{host}:{port}").parse()?;
    info!(%addr, "serving meditriage API");
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router.into_make_service()).await?;
    Ok(())
}
