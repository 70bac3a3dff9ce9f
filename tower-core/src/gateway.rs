//! Upstream Gateway seam
//!
//! The competition API owns rounds and word generation. The core only sees
//! it through [`UpstreamGateway`], so the HTTP client lives in the server
//! crate and tests can script responses.

use async_trait::async_trait;
use chrono::{Duration, Utc};
use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::sync::Arc;

use crate::catalog::WordCatalog;
use crate::constants::*;
use crate::error::GameError;
use crate::model::{ExtendedWordPool, Round, RoundList};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GatewayError {
    #[error("Transport error: {0}")]
    Transport(String),
    #[error("Upstream returned HTTP {status}: {body}")]
    Status { status: u16, body: String },
    #[error("Decode error: {0}")]
    Decode(String),
    #[error("Upstream unavailable: {0}")]
    Unavailable(String),
}

impl From<GatewayError> for GameError {
    fn from(err: GatewayError) -> Self {
        GameError::UpstreamUnavailable(err.to_string())
    }
}

pub type GatewayResult<T> = Result<T, GatewayError>;

#[async_trait]
pub trait UpstreamGateway: Send + Sync {
    async fn fetch_rounds(&self) -> GatewayResult<RoundList>;

    /// Asks upstream for a fresh word pool (consumes an upstream shuffle).
    async fn fetch_word_pool(&self) -> GatewayResult<Vec<String>>;

    async fn fetch_raw_words(&self) -> GatewayResult<ExtendedWordPool>;
}

// ============================================================================
// Offline gateway (local play and tests)
// ============================================================================

/// Serves random word pools drawn from the catalog and a fixed pair of rounds.
pub struct OfflineGateway {
    catalog: Arc<WordCatalog>,
    pool_size: usize,
    rng: Mutex<StdRng>,
}

impl OfflineGateway {
    pub fn new(catalog: Arc<WordCatalog>) -> Self {
        Self {
            catalog,
            pool_size: OFFLINE_POOL_SIZE,
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    pub fn with_seed(catalog: Arc<WordCatalog>, seed: u64) -> Self {
        Self {
            catalog,
            pool_size: OFFLINE_POOL_SIZE,
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    pub fn with_pool_size(mut self, pool_size: usize) -> Self {
        self.pool_size = pool_size;
        self
    }

    fn sample_words(&self) -> Vec<String> {
        let entries: Vec<_> = self.catalog.iter().collect();
        let mut rng = self.rng.lock();
        entries
            .choose_multiple(&mut *rng, self.pool_size.min(entries.len()))
            .map(|e| e.text.clone())
            .collect()
    }
}

#[async_trait]
impl UpstreamGateway for OfflineGateway {
    async fn fetch_rounds(&self) -> GatewayResult<RoundList> {
        let now = Utc::now();
        let rounds = [("round-1", 10 * 60), ("round-2", 15 * 60)]
            .into_iter()
            .map(|(name, secs)| Round {
                duration: secs,
                end_at: now + Duration::seconds(secs),
                name: name.to_string(),
                repeat: 0,
                start_at: now,
                status: "active".to_string(),
            })
            .collect();
        Ok(RoundList {
            event_id: "offline".to_string(),
            now,
            rounds,
        })
    }

    async fn fetch_word_pool(&self) -> GatewayResult<Vec<String>> {
        Ok(self.sample_words())
    }

    async fn fetch_raw_words(&self) -> GatewayResult<ExtendedWordPool> {
        Ok(ExtendedWordPool {
            map_size: DEFAULT_MAP_SIZE,
            next_turn_sec: DEFAULT_NEXT_TURN_SECS,
            round_ends_at: Utc::now() + Duration::seconds(DEFAULT_ROUND_DURATION_SECS),
            shuffle_left: DEFAULT_SHUFFLE_ALLOWANCE,
            turn: FIRST_TURN,
            used_indexes: Vec::new(),
            words: self.sample_words(),
        })
    }
}
