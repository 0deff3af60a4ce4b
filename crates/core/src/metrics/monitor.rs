//! Rolling performance-monitor log with threshold alerting.
//!
//! Each sample is prepended to a 20-entry metric log and evaluated against
//! three fixed rules. Any alerts it raises are prepended, as one batch, to a
//! 10-entry alert log.

use serde::Serialize;

use super::history::{rounded_mean, BoundedLog};
use crate::alert::{AlertEvent, AlertSeverity};
use crate::types::Timestamp;

/// How many samples the monitor keeps.
pub const MONITOR_HISTORY_CAPACITY: usize = 20;

/// How many alerts the monitor keeps.
pub const ALERT_LOG_CAPACITY: usize = 10;

/// Hit rates strictly below this raise a warning.
pub const LOW_HIT_RATE_PERCENT: u32 = 75;

/// Response times strictly above this raise an error.
pub const SLOW_RESPONSE_MS: u32 = 100;

/// Hit rates strictly above this raise a success notice.
pub const EXCELLENT_HIT_RATE_PERCENT: u32 = 90;

/// One synthetic monitor reading.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricSample {
    pub timestamp: Timestamp,
    /// Percentage of requests served from cache.
    pub hit_rate: u32,
    pub response_time_ms: u32,
    /// Requests observed during the sampling interval.
    pub requests: u32,
}

/// Evaluate a sample against the alert rules.
///
/// Alerts come back in rule order: warning, error, success.
pub fn evaluate_alerts(sample: &MetricSample) -> Vec<AlertEvent> {
    let mut alerts = Vec::new();

    if sample.hit_rate < LOW_HIT_RATE_PERCENT {
        alerts.push(AlertEvent::new(
            AlertSeverity::Warning,
            1,
            format!("Cache hit rate dropped to {}%", sample.hit_rate),
            sample.timestamp,
        ));
    }

    if sample.response_time_ms > SLOW_RESPONSE_MS {
        alerts.push(AlertEvent::new(
            AlertSeverity::Error,
            2,
            format!("Response time increased to {}ms", sample.response_time_ms),
            sample.timestamp,
        ));
    }

    if sample.hit_rate > EXCELLENT_HIT_RATE_PERCENT {
        alerts.push(AlertEvent::new(
            AlertSeverity::Success,
            3,
            format!(
                "Excellent cache performance: {}% hit rate",
                sample.hit_rate
            ),
            sample.timestamp,
        ));
    }

    alerts
}

/// Latest reading, or all zeros before the first sample.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CurrentMetrics {
    pub hit_rate: u32,
    pub response_time_ms: u32,
    pub requests: u32,
}

/// Aggregates over the whole metric log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonitorSummary {
    pub current: CurrentMetrics,
    pub avg_hit_rate: u64,
    pub avg_response_time_ms: u64,
    pub sample_count: usize,
}

/// Metric and alert logs for the performance monitor.
#[derive(Debug, Clone)]
pub struct MonitorLog {
    metrics: BoundedLog<MetricSample>,
    alerts: BoundedLog<AlertEvent>,
}

impl MonitorLog {
    pub fn new() -> Self {
        Self {
            metrics: BoundedLog::new(MONITOR_HISTORY_CAPACITY),
            alerts: BoundedLog::new(ALERT_LOG_CAPACITY),
        }
    }

    /// Prepend a sample and return the alerts it raised.
    pub fn record(&mut self, sample: MetricSample) -> Vec<AlertEvent> {
        let raised = evaluate_alerts(&sample);
        self.metrics.push(sample);
        if !raised.is_empty() {
            self.alerts.push_batch(raised.clone());
        }
        raised
    }

    /// Reset the metric log to a single initial sample.
    ///
    /// Used when monitoring is switched on. Existing alerts are kept.
    pub fn restart_with(&mut self, sample: MetricSample) -> Vec<AlertEvent> {
        self.metrics.clear();
        self.record(sample)
    }

    pub fn clear_alerts(&mut self) {
        self.alerts.clear();
    }

    pub fn metrics(&self) -> Vec<MetricSample> {
        self.metrics.to_vec()
    }

    pub fn alerts(&self) -> Vec<AlertEvent> {
        self.alerts.to_vec()
    }

    pub fn current(&self) -> CurrentMetrics {
        self.metrics
            .latest()
            .map(|m| CurrentMetrics {
                hit_rate: m.hit_rate,
                response_time_ms: m.response_time_ms,
                requests: m.requests,
            })
            .unwrap_or_default()
    }

    pub fn summary(&self) -> MonitorSummary {
        let count = self.metrics.len();
        let hit_sum: f64 = self.metrics.iter().map(|m| f64::from(m.hit_rate)).sum();
        let rt_sum: f64 = self
            .metrics
            .iter()
            .map(|m| f64::from(m.response_time_ms))
            .sum();

        MonitorSummary {
            current: self.current(),
            avg_hit_rate: rounded_mean(hit_sum, count),
            avg_response_time_ms: rounded_mean(rt_sum, count),
            sample_count: count,
        }
    }
}

impl Default for MonitorLog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone, Utc};

    use super::*;

    fn sample(offset_secs: i64, hit_rate: u32, response_time_ms: u32) -> MetricSample {
        MetricSample {
            timestamp: Utc.timestamp_opt(1_700_000_000, 0).unwrap()
                + Duration::seconds(offset_secs),
            hit_rate,
            response_time_ms,
            requests: 120,
        }
    }

    #[test]
    fn excellent_sample_raises_only_success() {
        let alerts = evaluate_alerts(&sample(0, 95, 50));
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].severity, AlertSeverity::Success);
        assert_eq!(alerts[0].message, "Excellent cache performance: 95% hit rate");
    }

    #[test]
    fn healthy_sample_raises_nothing() {
        assert!(evaluate_alerts(&sample(0, 80, 100)).is_empty());
        assert!(evaluate_alerts(&sample(0, 75, 60)).is_empty());
        assert!(evaluate_alerts(&sample(0, 90, 60)).is_empty());
    }

    #[test]
    fn poor_and_slow_sample_raises_warning_then_error() {
        let alerts = evaluate_alerts(&sample(0, 70, 130));
        let severities: Vec<_> = alerts.iter().map(|a| a.severity).collect();
        assert_eq!(severities, vec![AlertSeverity::Warning, AlertSeverity::Error]);
        assert_eq!(alerts[0].message, "Cache hit rate dropped to 70%");
        assert_eq!(alerts[1].message, "Response time increased to 130ms");
    }

    #[test]
    fn alert_ids_encode_timestamp_and_rule() {
        let s = sample(0, 92, 120);
        let alerts = evaluate_alerts(&s);
        let millis = s.timestamp.timestamp_millis();
        assert_eq!(alerts[0].id, format!("alert-{millis}-2"));
        assert_eq!(alerts[1].id, format!("alert-{millis}-3"));
        assert!(alerts.iter().all(|a| a.timestamp == s.timestamp));
    }

    #[test]
    fn empty_log_summarizes_to_zero() {
        let summary = MonitorLog::new().summary();
        assert_eq!(summary.current, CurrentMetrics::default());
        assert_eq!(summary.avg_hit_rate, 0);
        assert_eq!(summary.avg_response_time_ms, 0);
        assert_eq!(summary.sample_count, 0);
    }

    #[test]
    fn metric_log_keeps_twenty_most_recent() {
        let mut log = MonitorLog::new();
        for i in 0..25 {
            log.record(sample(i, 80, 60));
        }
        let metrics = log.metrics();
        assert_eq!(metrics.len(), MONITOR_HISTORY_CAPACITY);
        assert_eq!(metrics[0].timestamp, sample(24, 0, 0).timestamp);
        assert_eq!(metrics[19].timestamp, sample(5, 0, 0).timestamp);
    }

    #[test]
    fn alert_log_is_capped_and_newest_first() {
        let mut log = MonitorLog::new();
        for i in 0..6 {
            // warning + error each time
            log.record(sample(i, 70, 120));
        }
        let alerts = log.alerts();
        assert_eq!(alerts.len(), ALERT_LOG_CAPACITY);
        assert_eq!(alerts[0].severity, AlertSeverity::Warning);
        assert_eq!(alerts[1].severity, AlertSeverity::Error);
        assert_eq!(alerts[0].timestamp, sample(5, 0, 0).timestamp);
        assert_eq!(alerts[9].timestamp, sample(1, 0, 0).timestamp);
    }

    #[test]
    fn summary_averages_are_rounded() {
        let mut log = MonitorLog::new();
        log.record(sample(0, 80, 41));
        log.record(sample(1, 85, 60));
        let summary = log.summary();
        // (80 + 85) / 2 = 82.5
        assert_eq!(summary.avg_hit_rate, 83);
        // (41 + 60) / 2 = 50.5
        assert_eq!(summary.avg_response_time_ms, 51);
        assert_eq!(summary.current.hit_rate, 85);
    }

    #[test]
    fn restart_resets_metrics_but_keeps_alerts() {
        let mut log = MonitorLog::new();
        log.record(sample(0, 70, 60));
        log.record(sample(1, 80, 60));
        log.restart_with(sample(2, 80, 60));
        assert_eq!(log.metrics().len(), 1);
        assert_eq!(log.alerts().len(), 1);

        log.clear_alerts();
        assert!(log.alerts().is_empty());
    }
}
