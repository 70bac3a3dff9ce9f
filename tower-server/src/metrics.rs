//! Server Metrics — request counters plus game gauges, Prometheus + JSON export
//!
//! Request counters are lock-free atomics. Game gauges are read from a
//! session snapshot at scrape time.
//!
//! ## Endpoints
//! - `GET /metrics` — Prometheus text format
//! - `GET /metrics/json` — JSON format (for the load test client)

use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;

use crate::api::ApiState;

#[derive(Debug)]
pub struct ServerMetrics {
    pub total_requests: AtomicU64,
    /// 4xx + 5xx
    pub total_errors: AtomicU64,
    /// Cumulative request duration in microseconds
    pub total_duration_us: AtomicU64,
    pub start_time: Instant,
}

impl Default for ServerMetrics {
    fn default() -> Self {
        Self {
            total_requests: AtomicU64::new(0),
            total_errors: AtomicU64::new(0),
            total_duration_us: AtomicU64::new(0),
            start_time: Instant::now(),
        }
    }
}

impl ServerMetrics {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn record_request(&self, duration_us: u64, is_error: bool) {
        self.total_requests.fetch_add(1, Ordering::Relaxed);
        self.total_duration_us.fetch_add(duration_us, Ordering::Relaxed);
        if is_error {
            self.total_errors.fetch_add(1, Ordering::Relaxed);
        }
    }

    pub fn uptime_secs(&self) -> f64 {
        self.start_time.elapsed().as_secs_f64()
    }

    pub fn requests_per_second(&self) -> f64 {
        let total = self.total_requests.load(Ordering::Relaxed) as f64;
        let uptime = self.uptime_secs();
        if uptime > 0.0 { total / uptime } else { 0.0 }
    }

    pub fn avg_duration_ms(&self) -> f64 {
        let total = self.total_requests.load(Ordering::Relaxed);
        let dur_us = self.total_duration_us.load(Ordering::Relaxed);
        if total > 0 {
            (dur_us as f64 / total as f64) / 1000.0
        } else {
            0.0
        }
    }
}

// ============================================================================
// Axum Middleware — Automatic request tracking
// ============================================================================

pub async fn metrics_middleware(
    State(state): State<ApiState>,
    req: Request<Body>,
    next: Next,
) -> Response {
    let start = Instant::now();
    let resp = next.run(req).await;
    let duration_us = start.elapsed().as_micros() as u64;
    let is_error = resp.status().is_client_error() || resp.status().is_server_error();

    state.metrics.record_request(duration_us, is_error);
    resp
}

// ============================================================================
// Game gauges
// ============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct GameGauges {
    pub total_score: f64,
    pub completed_towers: usize,
    pub active_tower_score: f64,
    pub active_tower_words: usize,
    pub shuffle_left: u32,
    pub word_pool_size: usize,
}

impl GameGauges {
    pub fn capture(state: &ApiState) -> Self {
        let snap = state.session.snapshot();
        let gs = state.session.game_state();
        Self {
            total_score: snap.score,
            completed_towers: snap.done_towers.len(),
            active_tower_score: snap.tower.score,
            active_tower_words: snap.tower.words.len(),
            shuffle_left: gs.shuffle_left,
            word_pool_size: gs.active_word_pool.len(),
        }
    }
}

// ============================================================================
// GET /metrics — Prometheus text exposition format
// ============================================================================

pub async fn prometheus_handler(State(state): State<ApiState>) -> impl IntoResponse {
    let m = &state.metrics;
    let total_requests = m.total_requests.load(Ordering::Relaxed);
    let total_errors = m.total_errors.load(Ordering::Relaxed);
    let uptime = m.uptime_secs();
    let rps = m.requests_per_second();
    let avg_req_duration_s = m.avg_duration_ms() / 1000.0;
    let g = GameGauges::capture(&state);

    let body = format!(
        "# HELP wordtower_requests_total Total HTTP requests served\n\
         # TYPE wordtower_requests_total counter\n\
         wordtower_requests_total {total_requests}\n\
         \n\
         # HELP wordtower_request_errors_total Total HTTP request errors (4xx/5xx)\n\
         # TYPE wordtower_request_errors_total counter\n\
         wordtower_request_errors_total {total_errors}\n\
         \n\
         # HELP wordtower_request_duration_seconds Average request duration\n\
         # TYPE wordtower_request_duration_seconds gauge\n\
         wordtower_request_duration_seconds {avg_req_duration_s:.6}\n\
         \n\
         # HELP wordtower_requests_per_second Current request throughput\n\
         # TYPE wordtower_requests_per_second gauge\n\
         wordtower_requests_per_second {rps:.2}\n\
         \n\
         # HELP wordtower_total_score Cumulative score of completed towers\n\
         # TYPE wordtower_total_score gauge\n\
         wordtower_total_score {total_score}\n\
         \n\
         # HELP wordtower_completed_towers Completed towers\n\
         # TYPE wordtower_completed_towers gauge\n\
         wordtower_completed_towers {completed_towers}\n\
         \n\
         # HELP wordtower_active_tower_score Score of the tower under construction\n\
         # TYPE wordtower_active_tower_score gauge\n\
         wordtower_active_tower_score {active_tower_score}\n\
         \n\
         # HELP wordtower_active_tower_words Words placed in the tower under construction\n\
         # TYPE wordtower_active_tower_words gauge\n\
         wordtower_active_tower_words {active_tower_words}\n\
         \n\
         # HELP wordtower_shuffle_left Shuffles remaining this round\n\
         # TYPE wordtower_shuffle_left gauge\n\
         wordtower_shuffle_left {shuffle_left}\n\
         \n\
         # HELP wordtower_word_pool_size Words in the active pool\n\
         # TYPE wordtower_word_pool_size gauge\n\
         wordtower_word_pool_size {word_pool_size}\n\
         \n\
         # HELP wordtower_uptime_seconds Server uptime\n\
         # TYPE wordtower_uptime_seconds gauge\n\
         wordtower_uptime_seconds {uptime:.2}\n",
        total_score = g.total_score,
        completed_towers = g.completed_towers,
        active_tower_score = g.active_tower_score,
        active_tower_words = g.active_tower_words,
        shuffle_left = g.shuffle_left,
        word_pool_size = g.word_pool_size,
    );

    (
        [(
            axum::http::header::CONTENT_TYPE,
            "text/plain; version=0.0.4; charset=utf-8",
        )],
        body,
    )
}

// ============================================================================
// GET /metrics/json — JSON format for the load test client
// ============================================================================

#[derive(Serialize)]
pub struct JsonMetrics {
    pub uptime_secs: f64,
    pub total_requests: u64,
    pub total_errors: u64,
    pub rps: f64,
    pub avg_request_duration_ms: f64,
    pub game: GameGauges,
}

pub async fn json_metrics_handler(State(state): State<ApiState>) -> Json<JsonMetrics> {
    let m = &state.metrics;
    Json(JsonMetrics {
        uptime_secs: m.uptime_secs(),
        total_requests: m.total_requests.load(Ordering::Relaxed),
        total_errors: m.total_errors.load(Ordering::Relaxed),
        rps: m.requests_per_second(),
        avg_request_duration_ms: m.avg_duration_ms(),
        game: GameGauges::capture(&state),
    })
}

// ============================================================================
// Tests
// ============================================================================
