//! Round endpoints — upstream round listing and word metadata
//!
//! Endpoints:
//! - GET /api/words  — extended word pool; also refreshes local round metadata
//! - GET /api/rounds — upstream round list, passed through
//! - GET /api/state  — local round metadata and word pool

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;
use tracing::warn;

use tower_core::model::{ExtendedWordPool, RoundList};

use super::{ApiError, ApiState};

pub fn routes() -> Router<ApiState> {
    Router::new()
        .route("/api/words", get(words))
        .route("/api/rounds", get(rounds))
        .route("/api/state", get(local_state))
}

async fn words(State(state): State<ApiState>) -> Result<Json<ExtendedWordPool>, ApiError> {
    let pool = state.gateway.fetch_raw_words().await.inspect_err(|e| {
        warn!("word listing fetch failed: {}", e);
    })?;
    state.session.apply_extended_pool(&pool);
    Ok(Json(pool))
}

async fn rounds(State(state): State<ApiState>) -> Result<Json<RoundList>, ApiError> {
    Ok(Json(state.gateway.fetch_rounds().await?))
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalStateResponse {
    pub map_size: [i32; 3],
    pub next_turn_sec: u32,
    pub round_ends_at: String,
    pub shuffle_left: u32,
    pub turn: u32,
    pub used_indexes: Vec<u32>,
    pub words: Vec<String>,
}

/// Local view of the Game State Store, shaped like the upstream word listing.
async fn local_state(State(state): State<ApiState>) -> Json<LocalStateResponse> {
    let gs = state.session.game_state();
    Json(LocalStateResponse {
        map_size: gs.map_size,
        next_turn_sec: gs.next_turn_sec,
        round_ends_at: gs.round_ends_at.to_rfc3339(),
        shuffle_left: gs.shuffle_left,
        turn: gs.turn,
        words: gs.pool_texts(),
        used_indexes: gs.used_ids.into_iter().collect(),
    })
}
