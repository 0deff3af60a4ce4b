//! Synthetic data generators.
//!
//! Nothing here measures a real cache. Every generator draws from the
//! caller's RNG so tests can seed it.

use rand::Rng;

use crate::analyzer::AnalysisReport;
use crate::metrics::dashboard::{CacheHit, CacheStatus};
use crate::metrics::monitor::MetricSample;
use crate::types::Timestamp;

/// Probe load times below this always count as a hit.
pub const FAST_LOAD_MS: f64 = 100.0;

/// Simulate one dashboard probe.
///
/// Draws a load time in `[20, 300)` ms. Fast loads are hits; slower ones are
/// a coin flip.
pub fn probe<R: Rng + ?Sized>(rng: &mut R, now: Timestamp) -> CacheHit {
    let load_time: f64 = rng.random_range(20.0..300.0);
    let cached = load_time < FAST_LOAD_MS || rng.random_bool(0.5);
    CacheHit {
        timestamp: now,
        status: if cached {
            CacheStatus::Hit
        } else {
            CacheStatus::Miss
        },
        load_time,
    }
}

/// Simulate one monitor reading: hit rate 70-95 %, response 30-130 ms,
/// 50-250 requests.
pub fn metric_sample<R: Rng + ?Sized>(rng: &mut R, now: Timestamp) -> MetricSample {
    MetricSample {
        timestamp: now,
        hit_rate: rng.random_range(70..=95),
        response_time_ms: rng.random_range(30..=130),
        requests: rng.random_range(50..=250),
    }
}

/// Simulate an analyzer run.
pub fn analysis_report<R: Rng + ?Sized>(rng: &mut R) -> AnalysisReport {
    AnalysisReport {
        hit_rate: rng.random_range(75..=95),
        avg_response_time_ms: rng.random_range(50..=150),
        total_requests: rng.random_range(1_000..=10_000),
        cache_efficiency: rng.random_range(80..=95),
        bandwidth_saved: rng.random_range(40..=90),
    }
}
