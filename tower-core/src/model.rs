//! Data model: placed words, towers, snapshots and the upstream DTOs.
//!
//! Wire names follow the competition API (camelCase, `dir`/`pos` shorthand)
//! so the same types serve both the caller-facing and the upstream side.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Grid coordinate (x, y, z) of a word's first letter.
pub type Position = [i32; 3];

// =====================================================
// Direction
// =====================================================

/// Axis a word is laid along. Encoded on the wire as its integer code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Direction {
    AxisNegZ = 1,
    AxisPosX = 2,
    AxisPosY = 3,
}

impl Direction {
    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn unit_vector(self) -> Position {
        match self {
            Direction::AxisNegZ => [0, 0, -1],
            Direction::AxisPosX => [1, 0, 0],
            Direction::AxisPosY => [0, 1, 0],
        }
    }

    pub fn all() -> [Direction; 3] {
        [Direction::AxisNegZ, Direction::AxisPosX, Direction::AxisPosY]
    }
}

impl TryFrom<u8> for Direction {
    type Error = String;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(Direction::AxisNegZ),
            2 => Ok(Direction::AxisPosX),
            3 => Ok(Direction::AxisPosY),
            other => Err(format!("invalid direction code {other}, expected 1, 2 or 3")),
        }
    }
}

impl From<Direction> for u8 {
    fn from(dir: Direction) -> Self {
        dir.code()
    }
}

// =====================================================
// Build requests
// =====================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacementRequest {
    /// Raw wire id. Values outside the catalog's `u32` range are unknown words.
    pub id: i64,
    pub dir: Direction,
    pub pos: Position,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BuildRequest {
    #[serde(default)]
    pub done: bool,
    #[serde(default)]
    pub words: Vec<PlacementRequest>,
}

// =====================================================
// Towers
// =====================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedWord {
    pub id: u32,
    pub text: String,
    pub position: Position,
    pub direction: Direction,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Tower {
    pub words: Vec<PlacedWord>,
    pub score: f64,
    pub done: bool,
}

impl Tower {
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// A finalized tower, kept for the life of the process.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletedTower {
    pub id: u64,
    pub tower: Tower,
}

// =====================================================
// Snapshots (caller-facing)
// =====================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DoneTowerSummary {
    pub id: u64,
    pub score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerWordView {
    pub dir: Direction,
    pub pos: Position,
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerTowerView {
    pub score: f64,
    pub words: Vec<PlayerWordView>,
}

/// Read-only rendering of score, completed towers and the active tower.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerSnapshot {
    pub done_towers: Vec<DoneTowerSummary>,
    pub score: f64,
    pub tower: PlayerTowerView,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShuffleOutcome {
    pub shuffle_left: u32,
    pub words: Vec<String>,
}

// =====================================================
// Upstream DTOs
// =====================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Round {
    pub duration: i64,
    pub end_at: DateTime<Utc>,
    pub name: String,
    pub repeat: i64,
    pub start_at: DateTime<Utc>,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundList {
    pub event_id: String,
    pub now: DateTime<Utc>,
    #[serde(default)]
    pub rounds: Vec<Round>,
}

/// Word pool plus round metadata, as served by the upstream `/words` call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtendedWordPool {
    pub map_size: Position,
    pub next_turn_sec: u32,
    pub round_ends_at: DateTime<Utc>,
    pub shuffle_left: u32,
    pub turn: u32,
    #[serde(default)]
    pub used_indexes: Vec<u32>,
    #[serde(default)]
    pub words: Vec<String>,
}

/// Body of the upstream `/shuffle` response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpstreamWordPool {
    pub shuffle_left: u32,
    #[serde(default)]
    pub words: Vec<String>,
}
