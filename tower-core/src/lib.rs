//! Word Tower - Core Library
//!
//! Player-side game logic for the word tower competition:
//! - Word catalog (id ↔ text lookups)
//! - Game state store (round metadata, shuffle allowance, used ids, word pool)
//! - Tower assembly (all-or-nothing build batches, tower completion, scoring)
//! - Shuffle coordination against the upstream game API
//! - Structured logging setup

pub mod assembly;
pub mod catalog;
pub mod constants;
pub mod engine;
pub mod error;
pub mod gateway;
pub mod logging;
pub mod model;
pub mod scoring;
pub mod state;

pub use catalog::{WordCatalog, WordEntry};
pub use engine::{GameConfig, GameSession, ShuffleCoordinator};
pub use error::{GameError, PublicError};
pub use gateway::{GatewayError, OfflineGateway, UpstreamGateway};
