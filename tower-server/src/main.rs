use anyhow::Context;
use std::sync::Arc;
use tracing::{error, info, warn};

use tower_core::gateway::{OfflineGateway, UpstreamGateway};
use tower_core::logging::{self, LogLevel, TracingConfig};
use tower_core::{GameConfig, GameSession, WordCatalog};
use tower_server::{api, ApiState, HttpGateway, ServerConfig, UpstreamMode};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::from_env();

    // Initialize logging (LOG_LEVEL, overridden by RUST_LOG)
    let level = config
        .as_ref()
        .ok()
        .and_then(|c| LogLevel::parse(&c.log_level))
        .unwrap_or(LogLevel::Info);
    logging::init_tracing(&TracingConfig::default().with_default_level(level));

    let config = config.context("invalid server configuration")?;
    info!("Starting Word Tower Server...");

    // ========================================================================
    // 1. Game settings and word catalog
    // ========================================================================
    let game_config = match &config.game_config_path {
        Some(path) => GameConfig::from_file(path)
            .with_context(|| format!("failed to load game config from {}", path.display()))?,
        None => GameConfig::default(),
    };
    let catalog = Arc::new(WordCatalog::builtin());
    info!(
        words = catalog.len(),
        scoring = game_config.scoring_rule().name(),
        shuffles = game_config.shuffle_allowance,
        "word catalog loaded"
    );

    // ========================================================================
    // 2. Upstream gateway
    // ========================================================================
    let gateway: Arc<dyn UpstreamGateway> = match config.upstream_mode {
        UpstreamMode::Http => {
            let token = config.auth_token.clone().unwrap_or_default();
            let gw = HttpGateway::new(&config.upstream_base_url, token, config.upstream_timeout)
                .context("failed to build upstream HTTP client")?;
            info!("Upstream API: {}", gw.base_url());
            Arc::new(gw)
        }
        UpstreamMode::Offline => {
            warn!("UPSTREAM_MODE=offline: word pools are sampled locally");
            Arc::new(OfflineGateway::new(catalog.clone()))
        }
    };

    // ========================================================================
    // 3. Game session, seeded from the upstream word listing when reachable
    // ========================================================================
    let session = Arc::new(GameSession::from_config(catalog, &game_config));
    match gateway.fetch_raw_words().await {
        Ok(pool) => {
            session.apply_extended_pool(&pool);
            info!(turn = pool.turn, words = pool.words.len(), "round metadata seeded from upstream");
        }
        Err(e) => warn!("could not seed round metadata, using defaults: {}", e),
    }

    // ========================================================================
    // 4. HTTP API (blocks until Ctrl-C)
    // ========================================================================
    let state = ApiState::new(session, gateway);
    api::start_api_server(state, config.port, shutdown_signal())
        .await
        .context("API server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => {
            error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
