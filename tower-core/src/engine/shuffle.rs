use std::sync::Arc;
use tracing::{info, warn};

use crate::engine::session::GameSession;
use crate::error::GameError;
use crate::gateway::UpstreamGateway;
use crate::model::ShuffleOutcome;

/// Spends a shuffle allowance to swap in a fresh word pool from upstream.
pub struct ShuffleCoordinator {
    session: Arc<GameSession>,
    gateway: Arc<dyn UpstreamGateway>,
}

impl ShuffleCoordinator {
    pub fn new(session: Arc<GameSession>, gateway: Arc<dyn UpstreamGateway>) -> Self {
        Self { session, gateway }
    }

    pub fn session(&self) -> &Arc<GameSession> {
        &self.session
    }

    /// 1. fail fast if no allowance is left (no upstream call)
    /// 2. fetch the new pool with the session unlocked
    /// 3. resolve and commit under the lock, re-checking the allowance
    ///
    /// The allowance is untouched on every failure path.
    pub async fn shuffle(&self) -> Result<ShuffleOutcome, GameError> {
        if self.session.shuffle_left() == 0 {
            info!("shuffle refused: no shuffles left");
            return Err(GameError::NoShufflesLeft);
        }

        let words = self.gateway.fetch_word_pool().await.map_err(|e| {
            warn!("shuffle word pool fetch failed: {}", e);
            GameError::from(e)
        })?;

        self.session.commit_shuffle(&words).inspect_err(|e| {
            warn!(code = e.code(), "shuffle commit failed: {}", e);
        })
    }
}
