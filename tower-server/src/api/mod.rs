//! HTTP/JSON API Layer
//!
//! ## Architecture
//! ```text
//! Player client
//!       ↓ HTTP, JSON body
//! Axum Router (port 8080)
//!       ↓
//! Handlers (player, round)
//!       ↓
//! GameSession / ShuffleCoordinator ──► UpstreamGateway (competition API)
//! ```
//!
//! ## Endpoints
//! - `POST /api/build`, `POST /api/shuffle`, `GET /api/towers`
//! - `GET /api/words`, `GET /api/rounds`, `GET /api/state`
//! - `GET /health`, `GET /metrics`, `GET /metrics/json`

pub mod error;
pub mod player;
pub mod round;

pub use error::ApiError;

use axum::{middleware, routing::get, Json, Router};
use serde::Serialize;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use tower_core::engine::{GameSession, ShuffleCoordinator};
use tower_core::gateway::UpstreamGateway;

use crate::metrics::ServerMetrics;

/// Shared state available to all API handlers
#[derive(Clone)]
pub struct ApiState {
    pub session: Arc<GameSession>,
    pub shuffler: Arc<ShuffleCoordinator>,
    pub gateway: Arc<dyn UpstreamGateway>,
    /// Server-wide metrics (lock-free atomics)
    pub metrics: Arc<ServerMetrics>,
}

impl ApiState {
    pub fn new(session: Arc<GameSession>, gateway: Arc<dyn UpstreamGateway>) -> Self {
        Self {
            shuffler: Arc::new(ShuffleCoordinator::new(session.clone(), gateway.clone())),
            session,
            gateway,
            metrics: ServerMetrics::new(),
        }
    }
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Build the full API router with all endpoints
pub fn build_router(state: ApiState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/metrics", get(crate::metrics::prometheus_handler))
        .route("/metrics/json", get(crate::metrics::json_metrics_handler))
        .merge(player::routes())
        .merge(round::routes())
        .layer(middleware::from_fn_with_state(
            state.clone(),
            crate::metrics::metrics_middleware,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Serve the API until `shutdown` resolves.
pub async fn start_api_server<F>(
    state: ApiState,
    port: u16,
    shutdown: F,
) -> Result<(), std::io::Error>
where
    F: std::future::Future<Output = ()> + Send + 'static,
{
    let app = build_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("API server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
}
