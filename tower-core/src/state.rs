//! Game State Store
//!
//! Round metadata, the shuffle allowance, the used-id set of the active
//! tower and the current word pool. Owned by a `GameSession`, which is the
//! only place it is mutated.

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::warn;

use crate::catalog::{WordCatalog, WordEntry};
use crate::constants::FIRST_TURN;
use crate::engine::config::GameConfig;
use crate::model::{ExtendedWordPool, Position};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub map_size: Position,
    pub next_turn_sec: u32,
    pub round_ends_at: DateTime<Utc>,
    pub shuffle_left: u32,
    pub turn: u32,
    pub used_ids: BTreeSet<u32>,
    pub active_word_pool: Vec<WordEntry>,
}

impl GameState {
    pub fn from_config(config: &GameConfig, now: DateTime<Utc>) -> Self {
        Self {
            map_size: config.map_size,
            next_turn_sec: config.next_turn_secs,
            round_ends_at: TimeDelta::try_seconds(config.round_duration_secs)
                .and_then(|d| now.checked_add_signed(d))
                .unwrap_or(DateTime::<Utc>::MAX_UTC),
            shuffle_left: config.shuffle_allowance,
            turn: FIRST_TURN,
            used_ids: BTreeSet::new(),
            active_word_pool: Vec::new(),
        }
    }

    pub fn is_used(&self, id: u32) -> bool {
        self.used_ids.contains(&id)
    }

    /// Consumes one shuffle. Returns false (and changes nothing) when none are left.
    pub fn take_shuffle(&mut self) -> bool {
        match self.shuffle_left.checked_sub(1) {
            Some(left) => {
                self.shuffle_left = left;
                true
            }
            None => false,
        }
    }

    pub fn pool_texts(&self) -> Vec<String> {
        self.active_word_pool.iter().map(|w| w.text.clone()).collect()
    }

    /// Refreshes round metadata from an upstream word listing.
    ///
    /// The allowance is only ever lowered here. Pool words missing from the
    /// catalog are skipped; `used_ids` belongs to the active tower and is left alone.
    pub fn apply_extended_pool(&mut self, pool: &ExtendedWordPool, catalog: &WordCatalog) {
        self.map_size = pool.map_size;
        self.next_turn_sec = pool.next_turn_sec;
        self.round_ends_at = pool.round_ends_at;
        self.turn = pool.turn;
        self.shuffle_left = self.shuffle_left.min(pool.shuffle_left);

        let mut resolved = Vec::with_capacity(pool.words.len());
        for text in &pool.words {
            match catalog.resolve(text) {
                Some(entry) => resolved.push(entry.clone()),
                None => warn!(word = %text, "upstream word not in catalog, skipped"),
            }
        }
        self.active_word_pool = resolved;
    }

    pub fn seconds_until_round_end(&self, now: DateTime<Utc>) -> i64 {
        (self.round_ends_at - now).num_seconds().max(0)
    }
}
