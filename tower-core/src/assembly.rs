//! Tower Assembly Engine
//!
//! Applies build batches to the active tower in two phases:
//!
//! ```text
//! stage()  : resolve ids, check used set, price each word  (read-only)
//!    │
//!    ▼
//! commit() : append words, extend used set, raise score     (infallible)
//!    │
//!    ▼ done = true
//! finish_tower() : move tower to completed list, reset used set
//! ```
//!
//! Because staging never mutates, a rejected batch leaves the tower and the
//! used-id set exactly as they were.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};
use tracing::debug;

use crate::catalog::WordCatalog;
use crate::error::GameError;
use crate::model::{
    CompletedTower, DoneTowerSummary, PlacedWord, PlacementRequest, PlayerSnapshot,
    PlayerTowerView, PlayerWordView, Tower,
};
use crate::scoring::ScoringRule;

/// A validated batch, ready to commit.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StagedBatch {
    placements: Vec<(PlacedWord, f64)>,
}

impl StagedBatch {
    pub fn len(&self) -> usize {
        self.placements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    pub fn score(&self) -> f64 {
        self.placements.iter().map(|(_, s)| s).sum()
    }

    pub fn ids(&self) -> impl Iterator<Item = u32> + '_ {
        self.placements.iter().map(|(w, _)| w.id)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TowerAssembly {
    current: Tower,
    completed: Vec<CompletedTower>,
    total_score: f64,
    next_tower_id: u64,
}

impl Default for TowerAssembly {
    fn default() -> Self {
        Self::new()
    }
}

impl TowerAssembly {
    pub fn new() -> Self {
        Self {
            current: Tower::default(),
            completed: Vec::new(),
            total_score: 0.0,
            next_tower_id: 1,
        }
    }

    pub fn current(&self) -> &Tower {
        &self.current
    }

    pub fn completed(&self) -> &[CompletedTower] {
        &self.completed
    }

    pub fn total_score(&self) -> f64 {
        self.total_score
    }

    /// Validates a batch against the catalog and the used-id set.
    ///
    /// Requests are checked in order; the first failure rejects the whole
    /// batch. An id repeated within the batch counts as already used.
    pub fn stage(
        catalog: &WordCatalog,
        scoring: &dyn ScoringRule,
        used_ids: &BTreeSet<u32>,
        requests: &[PlacementRequest],
    ) -> Result<StagedBatch, GameError> {
        let mut batch_ids = HashSet::with_capacity(requests.len());
        let mut placements = Vec::with_capacity(requests.len());

        for req in requests {
            let entry = u32::try_from(req.id)
                .ok()
                .and_then(|id| catalog.get(id))
                .ok_or(GameError::UnknownWord { id: req.id })?;

            if used_ids.contains(&entry.id) || !batch_ids.insert(entry.id) {
                return Err(GameError::WordAlreadyUsed { id: entry.id });
            }

            let contribution = scoring.score(entry, req.dir, req.pos);
            placements.push((
                PlacedWord {
                    id: entry.id,
                    text: entry.text.clone(),
                    position: req.pos,
                    direction: req.dir,
                },
                contribution,
            ));
        }

        Ok(StagedBatch { placements })
    }

    pub fn commit(&mut self, staged: StagedBatch, used_ids: &mut BTreeSet<u32>) {
        for (word, contribution) in staged.placements {
            debug!(id = word.id, text = %word.text, contribution, "word placed");
            used_ids.insert(word.id);
            self.current.words.push(word);
            self.current.score += contribution;
        }
    }

    /// Finalizes the active tower and starts a fresh one.
    pub fn finish_tower(&mut self, used_ids: &mut BTreeSet<u32>) -> &CompletedTower {
        let mut tower = std::mem::take(&mut self.current);
        tower.done = true;
        self.total_score += tower.score;

        let id = self.next_tower_id;
        self.next_tower_id += 1;
        used_ids.clear();

        self.completed.push(CompletedTower { id, tower });
        &self.completed[self.completed.len() - 1]
    }

    /// Score of the active tower recomputed from its placed words.
    pub fn recomputed_score(&self, catalog: &WordCatalog, scoring: &dyn ScoringRule) -> f64 {
        self.current
            .words
            .iter()
            .filter_map(|w| {
                catalog
                    .get(w.id)
                    .map(|entry| scoring.score(entry, w.direction, w.position))
            })
            .sum()
    }

    pub fn snapshot(&self) -> PlayerSnapshot {
        PlayerSnapshot {
            done_towers: self
                .completed
                .iter()
                .map(|t| DoneTowerSummary {
                    id: t.id,
                    score: t.tower.score,
                })
                .collect(),
            score: self.total_score,
            tower: PlayerTowerView {
                score: self.current.score,
                words: self
                    .current
                    .words
                    .iter()
                    .map(|w| PlayerWordView {
                        dir: w.direction,
                        pos: w.position,
                        text: w.text.clone(),
                    })
                    .collect(),
            },
        }
    }
}
