//! Dashboard probe history and its hit-rate / load-time aggregates.

use serde::{Deserialize, Serialize};

use super::history::{rounded_mean, BoundedLog};
use crate::types::Timestamp;

/// How many probe results the dashboard keeps.
pub const DASHBOARD_HISTORY_CAPACITY: usize = 10;

/// Outcome of a single probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CacheStatus {
    Hit,
    Miss,
}

/// One probe result as stored in the dashboard history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheHit {
    pub timestamp: Timestamp,
    pub status: CacheStatus,
    /// Load time in milliseconds.
    pub load_time: f64,
}

/// Aggregates shown above the history table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardStats {
    pub total: usize,
    pub hits: usize,
    pub misses: usize,
    /// Percentage of probes that were hits, rounded.
    pub hit_rate: u64,
    /// Mean load time in milliseconds, rounded.
    pub avg_load_time: u64,
    /// Status of the most recent probe.
    pub latest_status: Option<CacheStatus>,
}

/// Compute dashboard aggregates over a newest-first slice of probes.
pub fn summarize(history: &[CacheHit]) -> DashboardStats {
    let total = history.len();
    let hits = history
        .iter()
        .filter(|h| h.status == CacheStatus::Hit)
        .count();
    let hit_rate = if total == 0 {
        0
    } else {
        (hits as f64 / total as f64 * 100.0).round() as u64
    };
    let load_sum: f64 = history.iter().map(|h| h.load_time).sum();

    DashboardStats {
        total,
        hits,
        misses: total - hits,
        hit_rate,
        avg_load_time: rounded_mean(load_sum, total),
        latest_status: history.first().map(|h| h.status),
    }
}

/// The dashboard's probe log.
#[derive(Debug, Clone, PartialEq)]
pub struct HitHistory {
    log: BoundedLog<CacheHit>,
}

impl HitHistory {
    /// Wrap a newest-first list loaded from storage, truncating to capacity.
    pub fn from_stored(entries: Vec<CacheHit>) -> Self {
        Self {
            log: BoundedLog::from_newest_first(DASHBOARD_HISTORY_CAPACITY, entries),
        }
    }

    /// Prepend a probe result.
    pub fn record(&mut self, hit: CacheHit) {
        self.log.push(hit);
    }

    pub fn entries(&self) -> Vec<CacheHit> {
        self.log.to_vec()
    }

    pub fn len(&self) -> usize {
        self.log.len()
    }

    pub fn is_empty(&self) -> bool {
        self.log.is_empty()
    }

    pub fn stats(&self) -> DashboardStats {
        summarize(&self.entries())
    }
}

impl Default for HitHistory {
    fn default() -> Self {
        Self::from_stored(Vec::new())
    }
}
