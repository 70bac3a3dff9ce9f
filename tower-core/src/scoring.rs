//! Scoring rules for placed words.
//!
//! A tower's score is the sum of per-word contributions, so any rule only
//! needs to price a single placement.

use crate::catalog::WordEntry;
use crate::model::{Direction, Position};

pub trait ScoringRule: Send + Sync {
    fn score(&self, word: &WordEntry, direction: Direction, position: Position) -> f64;

    fn name(&self) -> &'static str;
}

/// Reference rule: one point per character.
#[derive(Debug, Clone, Copy, Default)]
pub struct LengthScoring;

impl ScoringRule for LengthScoring {
    fn score(&self, word: &WordEntry, _direction: Direction, _position: Position) -> f64 {
        word.char_len() as f64
    }

    fn name(&self) -> &'static str {
        "length"
    }
}

/// Length times a per-axis multiplier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionWeightedScoring {
    pub neg_z: f64,
    pub pos_x: f64,
    pub pos_y: f64,
}

impl Default for DirectionWeightedScoring {
    fn default() -> Self {
        Self {
            neg_z: 1.5,
            pos_x: 1.0,
            pos_y: 1.0,
        }
    }
}

impl DirectionWeightedScoring {
    pub fn multiplier(&self, direction: Direction) -> f64 {
        match direction {
            Direction::AxisNegZ => self.neg_z,
            Direction::AxisPosX => self.pos_x,
            Direction::AxisPosY => self.pos_y,
        }
    }
}

impl ScoringRule for DirectionWeightedScoring {
    fn score(&self, word: &WordEntry, direction: Direction, _position: Position) -> f64 {
        // Negative multipliers would let a tower's score shrink.
        word.char_len() as f64 * self.multiplier(direction).max(0.0)
    }

    fn name(&self) -> &'static str {
        "direction_weighted"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_scoring() {
        let rule = LengthScoring;
        assert_eq!(rule.score(&WordEntry::new(1, "foo"), Direction::AxisNegZ, [0, 0, 0]), 3.0);
        assert_eq!(rule.score(&WordEntry::new(2, "брас"), Direction::AxisPosX, [1, 2, 3]), 4.0);
    }

    #[test]
    fn test_direction_weighted_scoring() {
        let rule = DirectionWeightedScoring::default();
        let word = WordEntry::new(1, "bars");
        assert_eq!(rule.score(&word, Direction::AxisNegZ, [0, 0, 0]), 6.0);
        assert_eq!(rule.score(&word, Direction::AxisPosY, [0, 0, 0]), 4.0);
    }

    #[test]
    fn test_negative_multiplier_clamped() {
        let rule = DirectionWeightedScoring {
            neg_z: -2.0,
            pos_x: 1.0,
            pos_y: 1.0,
        };
        assert_eq!(rule.score(&WordEntry::new(1, "abc"), Direction::AxisNegZ, [0, 0, 0]), 0.0);
    }
}
