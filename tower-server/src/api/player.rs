//! Player endpoints — the tower being built and the word pool
//!
//! Endpoints:
//! - POST /api/build   — place words, optionally complete the tower
//! - POST /api/shuffle — spend a shuffle for a new word pool
//! - GET  /api/towers  — current snapshot

use axum::{
    extract::{rejection::JsonRejection, State},
    routing::{get, post},
    Json, Router,
};
use tracing::info;

use tower_core::model::{BuildRequest, PlayerSnapshot, ShuffleOutcome};

use super::{ApiError, ApiState};

pub fn routes() -> Router<ApiState> {
    Router::new()
        .route("/api/build", post(build))
        .route("/api/shuffle", post(shuffle))
        .route("/api/towers", get(towers))
}

async fn build(
    State(state): State<ApiState>,
    payload: Result<Json<BuildRequest>, JsonRejection>,
) -> Result<Json<PlayerSnapshot>, ApiError> {
    let Json(req) = payload?;
    let snapshot = state.session.place_words(&req.words, req.done)?;
    if req.done {
        info!(total_score = snapshot.score, towers = snapshot.done_towers.len(), "build completed tower");
    }
    Ok(Json(snapshot))
}

async fn shuffle(State(state): State<ApiState>) -> Result<Json<ShuffleOutcome>, ApiError> {
    Ok(Json(state.shuffler.shuffle().await?))
}

async fn towers(State(state): State<ApiState>) -> Json<PlayerSnapshot> {
    Json(state.session.snapshot())
}
