//! Word Tower Server Library
//!
//! HTTP layer around the word tower core:
//! - JSON API for build / shuffle / towers plus upstream passthroughs
//! - reqwest client for the upstream competition API
//! - Environment-driven server configuration
//! - Request metrics (Prometheus + JSON export)

pub mod api; // HTTP/JSON API endpoints
pub mod config; // Server configuration from environment
pub mod metrics; // Server metrics (Prometheus + JSON export)
pub mod upstream; // reqwest-backed UpstreamGateway

pub use api::{build_router, ApiState};
pub use config::{ServerConfig, UpstreamMode};
pub use upstream::HttpGateway;
