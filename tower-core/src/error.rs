//! Error taxonomy for build and shuffle actions.
//!
//! Every variant carries a stable numeric code that is reported to callers
//! inside a [`PublicError`] body. Nothing in the core retries on error.

use serde::{Deserialize, Serialize};

use crate::constants::*;

/// Caller-visible error body: `{"code": 1001, "message": "..."}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicError {
    pub code: u32,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GameError {
    /// Request body that could not be decoded (bad JSON, unknown direction code).
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
    #[error("Word with ID {id} not found")]
    UnknownWord { id: i64 },
    #[error("Word ID {id} already used")]
    WordAlreadyUsed { id: u32 },
    #[error("No shuffles left")]
    NoShufflesLeft,
    #[error("Word not found with string: {text}")]
    WordResolution { text: String },
    #[error("Upstream unavailable: {0}")]
    UpstreamUnavailable(String),
}

impl GameError {
    pub fn code(&self) -> u32 {
        match self {
            GameError::InvalidRequest(_) => CODE_INVALID_REQUEST,
            GameError::WordAlreadyUsed { .. } => CODE_WORD_ALREADY_USED,
            GameError::UnknownWord { .. } => CODE_UNKNOWN_WORD,
            GameError::NoShufflesLeft => CODE_NO_SHUFFLES_LEFT,
            GameError::WordResolution { .. } => CODE_WORD_RESOLUTION,
            GameError::UpstreamUnavailable(_) => CODE_UPSTREAM_UNAVAILABLE,
        }
    }

    /// Local validation failures, as opposed to upstream/resolution failures.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            GameError::InvalidRequest(_)
                | GameError::UnknownWord { .. }
                | GameError::WordAlreadyUsed { .. }
        )
    }

    pub fn to_public(&self) -> PublicError {
        PublicError {
            code: self.code(),
            message: self.to_string(),
        }
    }
}
