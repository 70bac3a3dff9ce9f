use chrono::Utc;
use parking_lot::Mutex;
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::assembly::TowerAssembly;
use crate::catalog::{WordCatalog, WordEntry};
use crate::engine::config::GameConfig;
use crate::error::GameError;
use crate::model::{ExtendedWordPool, PlacementRequest, PlayerSnapshot, ShuffleOutcome};
use crate::scoring::ScoringRule;
use crate::state::GameState;

struct SessionInner {
    state: GameState,
    assembly: TowerAssembly,
}

/// One player's game: state store plus tower assembly behind a single lock.
///
/// Every operation takes the lock once and does its whole check-then-commit
/// sequence inside it. No upstream I/O happens while the lock is held.
pub struct GameSession {
    catalog: Arc<WordCatalog>,
    scoring: Arc<dyn ScoringRule>,
    inner: Mutex<SessionInner>,
}

impl GameSession {
    pub fn new(catalog: Arc<WordCatalog>, scoring: Arc<dyn ScoringRule>, state: GameState) -> Self {
        Self {
            catalog,
            scoring,
            inner: Mutex::new(SessionInner {
                state,
                assembly: TowerAssembly::new(),
            }),
        }
    }

    pub fn from_config(catalog: Arc<WordCatalog>, config: &GameConfig) -> Self {
        Self::new(
            catalog,
            config.scoring_rule(),
            GameState::from_config(config, Utc::now()),
        )
    }

    pub fn catalog(&self) -> &Arc<WordCatalog> {
        &self.catalog
    }

    pub fn scoring(&self) -> &dyn ScoringRule {
        self.scoring.as_ref()
    }

    /// Places a batch of words and optionally completes the tower.
    ///
    /// All-or-nothing: on error neither the tower nor the used-id set change.
    pub fn place_words(
        &self,
        requests: &[PlacementRequest],
        done: bool,
    ) -> Result<PlayerSnapshot, GameError> {
        let mut inner = self.inner.lock();
        let SessionInner { state, assembly } = &mut *inner;

        let staged = match TowerAssembly::stage(
            &self.catalog,
            self.scoring.as_ref(),
            &state.used_ids,
            requests,
        ) {
            Ok(staged) => staged,
            Err(e) => {
                warn!(code = e.code(), "build rejected: {}", e);
                return Err(e);
            }
        };

        let placed = staged.len();
        let gained = staged.score();
        assembly.commit(staged, &mut state.used_ids);
        debug!(placed, gained, tower_score = assembly.current().score, "build committed");

        if done {
            let finished = assembly.finish_tower(&mut state.used_ids);
            info!(
                tower_id = finished.id,
                score = finished.tower.score,
                words = finished.tower.words.len(),
                "tower completed"
            );
        }

        Ok(assembly.snapshot())
    }

    pub fn snapshot(&self) -> PlayerSnapshot {
        self.inner.lock().assembly.snapshot()
    }

    pub fn shuffle_left(&self) -> u32 {
        self.inner.lock().state.shuffle_left
    }

    pub fn game_state(&self) -> GameState {
        self.inner.lock().state.clone()
    }

    pub fn assembly(&self) -> TowerAssembly {
        self.inner.lock().assembly.clone()
    }

    /// Replaces the word pool with `words` and consumes one shuffle.
    ///
    /// Every word must resolve in the catalog; otherwise nothing changes and
    /// the allowance is kept.
    pub fn commit_shuffle(&self, words: &[String]) -> Result<ShuffleOutcome, GameError> {
        let resolved = words
            .iter()
            .map(|text| {
                self.catalog
                    .resolve(text)
                    .cloned()
                    .ok_or_else(|| GameError::WordResolution { text: text.clone() })
            })
            .collect::<Result<Vec<WordEntry>, GameError>>()?;

        let mut inner = self.inner.lock();
        if !inner.state.take_shuffle() {
            return Err(GameError::NoShufflesLeft);
        }
        inner.state.active_word_pool = resolved;
        info!(
            shuffle_left = inner.state.shuffle_left,
            words = inner.state.active_word_pool.len(),
            "word pool shuffled"
        );

        Ok(ShuffleOutcome {
            shuffle_left: inner.state.shuffle_left,
            words: inner.state.pool_texts(),
        })
    }

    pub fn apply_extended_pool(&self, pool: &ExtendedWordPool) {
        let mut inner = self.inner.lock();
        inner.state.apply_extended_pool(pool, &self.catalog);
        debug!(
            turn = inner.state.turn,
            pool = inner.state.active_word_pool.len(),
            "round metadata refreshed"
        );
    }
}
