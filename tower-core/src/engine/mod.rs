//! Game Engine — Session & Coordination Layer
//!
//! Ties the catalog, state store and tower assembly together behind one
//! lock per player, and coordinates shuffles with the upstream gateway.
//!
//! ```text
//! build / towers ──► GameSession ──► TowerAssembly + GameState
//! shuffle ─────────► ShuffleCoordinator ──► UpstreamGateway (unlocked)
//!                            └────────────► GameSession::commit_shuffle
//! ```

pub mod config;
pub mod session;
pub mod shuffle;

pub use config::{ConfigError, GameConfig, ScoringMode};
pub use session::GameSession;
pub use shuffle::ShuffleCoordinator;

// =====================================================
// Tests
// =====================================================
