//! HTTP API Load Test
//!
//! Hammers the word-tower endpoints with concurrent requests and measures
//! latency percentiles (p50/p95/p99), throughput and error rate.
//!
//! Each worker owns a disjoint slice of word ids and places them one at a
//! time into the shared tower. After the run the server's tower must hold
//! exactly the words that were accepted, and every deliberate re-placement
//! must have been rejected with code 1001.
//!
//! Usage:
//!   cargo run --release --bin http_load_test -- --url http://localhost:8080 --concurrency 10 --duration 30
//!
//! Requires: a freshly started word-tower-server (UPSTREAM_MODE=offline works).

use reqwest::Client;
use serde_json::{json, Value};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Semaphore;
use tracing::{error, info, warn};

/// Ids of the built-in catalog.
const CATALOG_SIZE: u32 = 230;

// ============================================================================
// Request mix
// ============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Op {
    Build,
    Replay,
    Towers,
    State,
    Health,
}

impl Op {
    const ALL: [Op; 5] = [Op::Build, Op::Replay, Op::Towers, Op::State, Op::Health];

    fn name(self) -> &'static str {
        match self {
            Op::Build => "Build",
            Op::Replay => "BuildReplay",
            Op::Towers => "Towers",
            Op::State => "State",
            Op::Health => "Health",
        }
    }

    fn index(self) -> usize {
        Op::ALL.iter().position(|o| *o == self).unwrap_or(0)
    }
}

/// Ids `[start, end]` owned by one worker.
fn id_range(worker: usize, workers: usize) -> (u32, u32) {
    let workers = workers.max(1) as u32;
    let per = CATALOG_SIZE / workers;
    let start = worker as u32 * per + 1;
    let end = if worker as u32 == workers - 1 {
        CATALOG_SIZE
    } else {
        start + per - 1
    };
    (start, end)
}

fn build_body(id: u32) -> Value {
    json!({
        "done": false,
        "words": [{"id": id, "dir": 1 + (id % 3), "pos": [0, 0, id as i32]}],
    })
}

// ============================================================================
// Per-endpoint statistics
// ============================================================================

struct EndpointStats {
    name: String,
    latencies_us: parking_lot::Mutex<Vec<u64>>,
    success: AtomicU64,
    errors: AtomicU64,
}

impl EndpointStats {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            latencies_us: parking_lot::Mutex::new(Vec::with_capacity(10_000)),
            success: AtomicU64::new(0),
            errors: AtomicU64::new(0),
        }
    }

    fn record(&self, duration_us: u64, ok: bool) {
        self.latencies_us.lock().push(duration_us);
        if ok {
            self.success.fetch_add(1, Ordering::Relaxed);
        } else {
            self.errors.fetch_add(1, Ordering::Relaxed);
        }
    }

    fn count(&self) -> u64 {
        self.success.load(Ordering::Relaxed) + self.errors.load(Ordering::Relaxed)
    }

    fn percentile(&self, p: f64) -> f64 {
        let mut lat = self.latencies_us.lock().clone();
        if lat.is_empty() {
            return 0.0;
        }
        lat.sort_unstable();
        let idx = ((p / 100.0) * lat.len() as f64) as usize;
        let idx = idx.min(lat.len() - 1);
        lat[idx] as f64 / 1000.0 // ms
    }
}

// ============================================================================
// Worker
// ============================================================================

struct Worker {
    client: Client,
    base_url: String,
    stats: Arc<Vec<EndpointStats>>,
    total: Arc<AtomicU64>,
    next_id: u32,
    last_id: u32,
    last_placed: Option<u32>,
    tick: usize,
}

impl Worker {
    fn next_op(&mut self) -> Op {
        self.tick += 1;
        let building = self.next_id <= self.last_id;
        match self.tick % 6 {
            0 | 1 if building => Op::Build,
            2 if self.last_placed.is_some() => Op::Replay,
            3 => Op::State,
            4 => Op::Health,
            _ => Op::Towers,
        }
    }

    async fn step(&mut self) {
        let op = self.next_op();
        let req_start = Instant::now();

        let ok = match op {
            Op::Build => {
                let id = self.next_id;
                let accepted = self.post_build(id).await.map(|s| s == 200).unwrap_or(false);
                if accepted {
                    self.last_placed = Some(id);
                }
                self.next_id += 1;
                accepted
            }
            Op::Replay => match self.last_placed {
                Some(id) => self.replay(id).await,
                None => true,
            },
            Op::Towers => self.get_ok("/api/towers").await,
            Op::State => self.get_ok("/api/state").await,
            Op::Health => self.get_ok("/health").await,
        };

        let duration_us = req_start.elapsed().as_micros() as u64;
        self.stats[op.index()].record(duration_us, ok);
        self.total.fetch_add(1, Ordering::Relaxed);
    }

    async fn post_build(&self, id: u32) -> Option<u16> {
        self.client
            .post(format!("{}/api/build", self.base_url))
            .json(&build_body(id))
            .send()
            .await
            .ok()
            .map(|r| r.status().as_u16())
    }

    /// Re-placing an accepted id must fail with code 1001.
    async fn replay(&self, id: u32) -> bool {
        let resp = match self
            .client
            .post(format!("{}/api/build", self.base_url))
            .json(&build_body(id))
            .send()
            .await
        {
            Ok(r) => r,
            Err(_) => return false,
        };
        if resp.status().as_u16() != 400 {
            warn!("id {} accepted twice (HTTP {})", id, resp.status());
            return false;
        }
        match resp.json::<Value>().await {
            Ok(body) => body["code"] == 1001,
            Err(_) => false,
        }
    }

    async fn get_ok(&self, path: &str) -> bool {
        match self.client.get(format!("{}{}", self.base_url, path)).send().await {
            Ok(resp) => resp.status().is_success(),
            Err(_) => false,
        }
    }
}

// ============================================================================
// Main
// ============================================================================

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt().with_target(false).init();

    let args: Vec<String> = std::env::args().collect();
    let base_url = parse_str_arg(&args, "--url").unwrap_or_else(|| "http://localhost:8080".into());
    let concurrency: usize = parse_num_arg(&args, "--concurrency").unwrap_or(10).max(1);
    let duration_secs: u64 = parse_num_arg(&args, "--duration").unwrap_or(30);

    println!("=== HTTP API Load Test ===");
    println!("  Target:      {}", base_url);
    println!("  Concurrency: {}", concurrency);
    println!("  Duration:    {}s", duration_secs);
    println!();

    let client = match Client::builder().timeout(Duration::from_secs(5)).build() {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to create HTTP client: {}", e);
            std::process::exit(1);
        }
    };

    match client.get(format!("{}/health", base_url)).send().await {
        Ok(resp) if resp.status().is_success() => info!("Server health check: OK"),
        Ok(resp) => {
            error!("Server health check failed: HTTP {}", resp.status());
            std::process::exit(1);
        }
        Err(e) => {
            error!("Cannot reach server at {}: {}", base_url, e);
            std::process::exit(1);
        }
    }

    let baseline_words = tower_word_count(&client, &base_url).await.unwrap_or(0);

    let stats: Arc<Vec<EndpointStats>> =
        Arc::new(Op::ALL.iter().map(|o| EndpointStats::new(o.name())).collect());
    let semaphore = Arc::new(Semaphore::new(concurrency));
    let start = Instant::now();
    let deadline = start + Duration::from_secs(duration_secs);
    let total_requests = Arc::new(AtomicU64::new(0));

    println!("Running load test...\n");

    let mut handles = Vec::new();
    for worker_id in 0..concurrency {
        let (first, last) = id_range(worker_id, concurrency);
        let mut worker = Worker {
            client: client.clone(),
            base_url: base_url.clone(),
            stats: stats.clone(),
            total: total_requests.clone(),
            next_id: first,
            last_id: last,
            last_placed: None,
            tick: worker_id,
        };
        let sem = semaphore.clone();

        handles.push(tokio::spawn(async move {
            while Instant::now() < deadline {
                let Ok(_permit) = sem.acquire().await else { break };
                worker.step().await;
            }
        }));
    }

    // Progress reporter
    let total_clone = total_requests.clone();
    let progress = tokio::spawn(async move {
        let mut last_count = 0u64;
        loop {
            tokio::time::sleep(Duration::from_secs(5)).await;
            if Instant::now() >= deadline {
                break;
            }
            let current = total_clone.load(Ordering::Relaxed);
            let elapsed = start.elapsed().as_secs_f64();
            info!(
                "[{:.0}s] {} requests ({:.0} rps, +{} last 5s)",
                elapsed,
                current,
                current as f64 / elapsed,
                current - last_count
            );
            last_count = current;
        }
    });

    for h in handles {
        if let Err(e) = h.await {
            warn!("worker task failed: {}", e);
        }
    }
    progress.abort();

    let total_time = start.elapsed();
    let total_reqs = total_requests.load(Ordering::Relaxed);

    println!("\n=== Results ===\n");
    println!(
        "Total: {} requests in {:.2}s ({:.1} rps)\n",
        total_reqs,
        total_time.as_secs_f64(),
        total_reqs as f64 / total_time.as_secs_f64()
    );

    println!(
        "{:<25} {:>8} {:>8} {:>8} {:>8} {:>8} {:>8}",
        "Endpoint", "Count", "Errors", "p50(ms)", "p95(ms)", "p99(ms)", "Err%"
    );
    println!("{}", "-".repeat(85));

    let mut total_errors = 0u64;
    for stat in stats.iter() {
        let count = stat.count();
        let errors = stat.errors.load(Ordering::Relaxed);
        total_errors += errors;
        let err_pct = if count > 0 {
            errors as f64 / count as f64 * 100.0
        } else {
            0.0
        };

        println!(
            "{:<25} {:>8} {:>8} {:>8.2} {:>8.2} {:>8.2} {:>7.1}%",
            stat.name,
            count,
            errors,
            stat.percentile(50.0),
            stat.percentile(95.0),
            stat.percentile(99.0),
            err_pct,
        );
    }

    println!("{}", "-".repeat(85));
    println!("{:<25} {:>8} {:>8}", "TOTAL", total_reqs, total_errors);

    // Consistency: the tower holds exactly the accepted placements
    let accepted = stats[Op::Build.index()].success.load(Ordering::Relaxed);
    let final_words = tower_word_count(&client, &base_url).await;
    let consistent = final_words == Some(baseline_words + accepted);
    println!(
        "\nTower consistency: accepted {} placements, tower holds {:?} (baseline {}) -> {}",
        accepted,
        final_words,
        baseline_words,
        if consistent { "OK" } else { "MISMATCH" }
    );

    let results = json!({
        "test_config": {
            "base_url": base_url,
            "concurrency": concurrency,
            "duration_secs": duration_secs,
        },
        "summary": {
            "total_requests": total_reqs,
            "total_errors": total_errors,
            "duration_secs": total_time.as_secs_f64(),
            "rps": total_reqs as f64 / total_time.as_secs_f64(),
            "error_rate": total_errors as f64 / total_reqs.max(1) as f64,
            "accepted_placements": accepted,
            "tower_consistent": consistent,
        },
        "endpoints": stats.iter().map(|s| {
            json!({
                "name": s.name,
                "count": s.count(),
                "errors": s.errors.load(Ordering::Relaxed),
                "p50_ms": s.percentile(50.0),
                "p95_ms": s.percentile(95.0),
                "p99_ms": s.percentile(99.0),
            })
        }).collect::<Vec<_>>(),
    });

    let results_path = "load_test_results.json";
    let written = serde_json::to_string_pretty(&results)
        .map_err(|e| e.to_string())
        .and_then(|s| std::fs::write(results_path, s).map_err(|e| e.to_string()));
    match written {
        Ok(()) => println!("\nResults written to {}", results_path),
        Err(e) => error!("Failed to write results: {}", e),
    }

    let error_rate = total_errors as f64 / total_reqs.max(1) as f64;
    if error_rate > 0.10 {
        error!("Error rate {:.1}% exceeds 10% threshold", error_rate * 100.0);
        std::process::exit(1);
    }
    if !consistent {
        error!("Tower contents do not match accepted placements");
        std::process::exit(1);
    }
}

async fn tower_word_count(client: &Client, base_url: &str) -> Option<u64> {
    let body: Value = client
        .get(format!("{}/api/towers", base_url))
        .send()
        .await
        .ok()?
        .json()
        .await
        .ok()?;
    body["tower"]["words"].as_array().map(|w| w.len() as u64)
}

fn parse_str_arg(args: &[String], flag: &str) -> Option<String> {
    args.iter()
        .position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .cloned()
}

fn parse_num_arg<T: std::str::FromStr>(args: &[String], flag: &str) -> Option<T> {
    parse_str_arg(args, flag).and_then(|v| v.parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_ranges_cover_catalog_without_overlap() {
        for workers in [1usize, 3, 7, 10, 64] {
            let mut seen = std::collections::BTreeSet::new();
            for w in 0..workers {
                let (a, b) = id_range(w, workers);
                for id in a..=b {
                    assert!(seen.insert(id), "id {id} assigned twice");
                }
            }
            assert_eq!(seen.len() as u32, CATALOG_SIZE);
            assert_eq!(seen.first(), Some(&1));
        }
    }

    #[test]
    fn test_build_body_direction_is_valid() {
        for id in 1..=CATALOG_SIZE {
            let dir = build_body(id)["words"][0]["dir"].as_u64().unwrap();
            assert!((1..=3).contains(&dir));
        }
    }

    #[test]
    fn test_percentile() {
        let s = EndpointStats::new("x");
        for us in [1000, 2000, 3000, 4000] {
            s.record(us, true);
        }
        assert_eq!(s.percentile(50.0), 3.0);
        assert_eq!(s.percentile(99.0), 4.0);
        assert_eq!(s.count(), 4);
    }
}
