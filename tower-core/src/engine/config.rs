use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;

use crate::constants::*;
use crate::scoring::{DirectionWeightedScoring, LengthScoring, ScoringRule};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("RON parse error: {0}")]
    Ron(#[from] ron::error::SpannedError),
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Per-round game settings. Values reported by the upstream API override
/// these once the first word pool has been fetched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub map_size: [i32; 3],
    pub next_turn_secs: u32,
    pub round_duration_secs: i64,
    pub shuffle_allowance: u32,
    pub scoring: ScoringMode,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            map_size: DEFAULT_MAP_SIZE,
            next_turn_secs: DEFAULT_NEXT_TURN_SECS,
            round_duration_secs: DEFAULT_ROUND_DURATION_SECS,
            shuffle_allowance: DEFAULT_SHUFFLE_ALLOWANCE,
            scoring: ScoringMode::Length,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ScoringMode {
    Length,
    DirectionWeighted { neg_z: f64, pos_x: f64, pos_y: f64 },
}

impl GameConfig {
    pub fn from_ron_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = ron::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects values that cannot describe a playable round.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0..=MAX_ROUND_DURATION_SECS).contains(&self.round_duration_secs) {
            return Err(ConfigError::Invalid {
                field: "round_duration_secs",
                reason: format!(
                    "{} is outside 0..={}",
                    self.round_duration_secs, MAX_ROUND_DURATION_SECS
                ),
            });
        }
        Ok(())
    }

    /// Loads `.ron` files as RON, anything else as JSON.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        match path.extension().and_then(|e| e.to_str()) {
            Some("ron") => Self::from_ron_str(&content),
            _ => Self::from_json_str(&content),
        }
    }

    pub fn scoring_rule(&self) -> Arc<dyn ScoringRule> {
        match self.scoring {
            ScoringMode::Length => Arc::new(LengthScoring),
            ScoringMode::DirectionWeighted {
                neg_z,
                pos_x,
                pos_y,
            } => Arc::new(DirectionWeightedScoring {
                neg_z,
                pos_x,
                pos_y,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.map_size, [30, 30, 100]);
        assert_eq!(config.shuffle_allowance, 3);
        assert_eq!(config.scoring_rule().name(), "length");
    }

    #[test]
    fn test_ron_partial_config_fills_defaults() {
        let config = GameConfig::from_ron_str("(shuffle_allowance: 5)").unwrap();
        assert_eq!(config.shuffle_allowance, 5);
        assert_eq!(config.next_turn_secs, 60);
    }

    #[test]
    fn test_ron_file_with_weighted_scoring() {
        let mut temp = tempfile::Builder::new().suffix(".ron").tempfile().unwrap();
        writeln!(
            temp,
            "(map_size: (10, 10, 40), scoring: DirectionWeighted(neg_z: 2.0, pos_x: 1.0, pos_y: 1.0))"
        )
        .unwrap();

        let config = GameConfig::from_file(temp.path()).unwrap();
        assert_eq!(config.map_size, [10, 10, 40]);
        assert_eq!(config.scoring_rule().name(), "direction_weighted");
    }

    #[test]
    fn test_json_file() {
        let mut temp = NamedTempFile::new().unwrap();
        writeln!(temp, r#"{{"next_turn_secs": 30}}"#).unwrap();

        let config = GameConfig::from_file(temp.path()).unwrap();
        assert_eq!(config.next_turn_secs, 30);
        assert_eq!(config.scoring, ScoringMode::Length);
    }

    #[test]
    fn test_round_duration_out_of_range_rejected() {
        for secs in [i64::MAX, -1, MAX_ROUND_DURATION_SECS + 1] {
            let err = GameConfig::from_ron_str(&format!("(round_duration_secs: {secs})"))
                .unwrap_err();
            assert!(
                matches!(err, ConfigError::Invalid { field: "round_duration_secs", .. }),
                "{secs}: {err}"
            );
        }

        let mut temp = NamedTempFile::new().unwrap();
        writeln!(temp, r#"{{"round_duration_secs": 9223372036854775807}}"#).unwrap();
        assert!(matches!(
            GameConfig::from_file(temp.path()),
            Err(ConfigError::Invalid { .. })
        ));

        let config = GameConfig::from_ron_str(&format!(
            "(round_duration_secs: {MAX_ROUND_DURATION_SECS})"
        ))
        .unwrap();
        assert_eq!(config.round_duration_secs, MAX_ROUND_DURATION_SECS);
    }

    #[test]
    fn test_invalid_file_errors() {
        let mut temp = NamedTempFile::new().unwrap();
        writeln!(temp, "{{invalid json").unwrap();
        assert!(matches!(
            GameConfig::from_file(temp.path()),
            Err(ConfigError::Json(_))
        ));
        assert!(matches!(
            GameConfig::from_file("/nonexistent/game.json"),
            Err(ConfigError::Io(_))
        ));
    }
}
