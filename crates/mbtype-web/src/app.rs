//! Router assembly and server loop

use crate::state::AppState;
use crate::{assets, routes};
use axum::{
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use tower_http::trace::TraceLayer;

/// Build the axum application
pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/", get(routes::index))
        .route("/predict", post(routes::predict))
        .route("/api/predict", post(routes::api_predict))
        .route("/api/health", get(routes::health))
        .fallback(assets::serve_static)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Run the server
pub async fn run_server(state: AppState, addr: SocketAddr) -> anyhow::Result<()> {
    let app = build_app(state);

    tracing::info!("Starting MBType server on {}", addr);
    tracing::info!("Open http://{} in your browser", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
