//! Timer-driven performance monitor.
//!
//! While monitoring is on, a spawned task draws a synthetic sample on a fixed
//! interval, records it in the shared [`MonitorLog`], and broadcasts it to
//! WebSocket clients. Stopping cancels the task's [`CancellationToken`].

use std::sync::Arc;
use std::time::Duration;

use axum::extract::ws::Message;
use cachewise_core::alert::AlertEvent;
use cachewise_core::metrics::monitor::{MetricSample, MonitorLog, MonitorSummary};
use cachewise_core::simulation;
use chrono::Utc;
use serde::Serialize;
use tokio::sync::{mpsc, Mutex};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;

use crate::ws::WsManager;

/// Everything a client needs to render the monitor.
#[derive(Debug, Clone, Serialize)]
pub struct MonitorSnapshot {
    pub is_monitoring: bool,
    pub interval_ms: u64,
    pub summary: MonitorSummary,
    pub metrics: Vec<MetricSample>,
    pub alerts: Vec<AlertEvent>,
}

/// Frames pushed over the WebSocket feed.
#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MonitorEvent<'a> {
    Snapshot(&'a MonitorSnapshot),
    MonitorSample {
        sample: &'a MetricSample,
        alerts: &'a [AlertEvent],
    },
    MonitorStopped,
}

/// How long `stop` waits for an in-flight tick to finish.
const STOP_GRACE: Duration = Duration::from_secs(1);

struct Ticker {
    cancel: CancellationToken,
    handle: JoinHandle<()>,
}

/// Shared monitor state plus the handle of the running ticker, if any.
pub struct PerformanceMonitor {
    log: Mutex<MonitorLog>,
    ticker: Mutex<Option<Ticker>>,
    interval: Duration,
    ws_manager: Arc<WsManager>,
}

impl PerformanceMonitor {
    pub fn new(interval: Duration, ws_manager: Arc<WsManager>) -> Self {
        Self {
            log: Mutex::new(MonitorLog::new()),
            ticker: Mutex::new(None),
            interval,
            ws_manager,
        }
    }

    /// Switch monitoring on.
    ///
    /// Resets the metric log to one fresh sample and spawns the ticker.
    /// Returns `false` (and changes nothing) if it was already running.
    pub async fn start(self: &Arc<Self>) -> bool {
        let mut ticker = self.ticker.lock().await;
        if ticker.as_ref().is_some_and(|t| !t.handle.is_finished()) {
            return false;
        }

        let sample = simulation::metric_sample(&mut rand::rng(), Utc::now());
        {
            let mut log = self.log.lock().await;
            let alerts = log.restart_with(sample.clone());
            self.publish(&sample, &alerts).await;
        }

        let cancel = CancellationToken::new();
        let handle = tokio::spawn(run(Arc::clone(self), cancel.clone()));
        *ticker = Some(Ticker { cancel, handle });

        tracing::info!(
            interval_ms = self.interval.as_millis() as u64,
            "Performance monitor started"
        );
        true
    }

    /// Switch monitoring off. Returns `false` if it was not running.
    ///
    /// A tick already in progress finishes before `monitor_stopped` is sent;
    /// no sample is recorded after this returns.
    pub async fn stop(&self) -> bool {
        let Some(ticker) = self.ticker.lock().await.take() else {
            return false;
        };
        halt(ticker, STOP_GRACE).await;
        self.ws_manager
            .broadcast_json(&MonitorEvent::MonitorStopped)
            .await;
        tracing::info!("Performance monitor stopped");
        true
    }

    /// Stop the ticker and wait (bounded) for its task to exit.
    pub async fn shutdown(&self, timeout: Duration) {
        if let Some(ticker) = self.ticker.lock().await.take() {
            halt(ticker, timeout).await;
        }
    }

    pub async fn is_running(&self) -> bool {
        self.ticker
            .lock()
            .await
            .as_ref()
            .is_some_and(|t| !t.handle.is_finished())
    }

    pub async fn snapshot(&self) -> MonitorSnapshot {
        let is_monitoring = self.is_running().await;
        let log = self.log.lock().await;
        self.snapshot_of(is_monitoring, &log)
    }

    /// Register a feed subscriber and queue its initial snapshot.
    ///
    /// Samples are broadcast while the log lock is held, so registering under
    /// the same lock guarantees the snapshot is the first frame the client
    /// sees and that no sample is missing from it or sent twice.
    pub async fn subscribe(&self, conn_id: String) -> mpsc::UnboundedReceiver<Message> {
        let is_monitoring = self.is_running().await;
        let log = self.log.lock().await;
        let snapshot = self.snapshot_of(is_monitoring, &log);
        let inbox = self.ws_manager.add(conn_id.clone()).await;
        if !self
            .ws_manager
            .send_json_to(&conn_id, &MonitorEvent::Snapshot(&snapshot))
            .await
        {
            tracing::debug!(conn_id = %conn_id, "Initial snapshot not queued");
        }
        inbox
    }

    fn snapshot_of(&self, is_monitoring: bool, log: &MonitorLog) -> MonitorSnapshot {
        MonitorSnapshot {
            is_monitoring,
            interval_ms: self.interval.as_millis() as u64,
            summary: log.summary(),
            metrics: log.metrics(),
            alerts: log.alerts(),
        }
    }

    pub async fn clear_alerts(&self) {
        self.log.lock().await.clear_alerts();
        tracing::debug!("Monitor alerts cleared");
    }

    /// Draw and record one sample.
    pub async fn tick(&self) {
        let sample = simulation::metric_sample(&mut rand::rng(), Utc::now());
        let mut log = self.log.lock().await;
        let alerts = log.record(sample.clone());
        if !alerts.is_empty() {
            tracing::debug!(
                count = alerts.len(),
                hit_rate = sample.hit_rate,
                response_time_ms = sample.response_time_ms,
                "Monitor alerts raised"
            );
        }
        self.publish(&sample, &alerts).await;
    }

    async fn publish(&self, sample: &MetricSample, alerts: &[AlertEvent]) {
        self.ws_manager
            .broadcast_json(&MonitorEvent::MonitorSample { sample, alerts })
            .await;
    }
}

async fn halt(ticker: Ticker, grace: Duration) {
    ticker.cancel.cancel();
    if tokio::time::timeout(grace, ticker.handle).await.is_err() {
        tracing::warn!("Performance monitor ticker did not stop in time");
    }
}

/// Ticker loop. The first tick fires one interval after start, since
/// [`PerformanceMonitor::start`] records the initial sample itself.
async fn run(monitor: Arc<PerformanceMonitor>, cancel: CancellationToken) {
    let period = monitor.interval;
    let mut interval = tokio::time::interval_at(tokio::time::Instant::now() + period, period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            _ = cancel.cancelled() => {
                tracing::debug!("Performance monitor ticker stopping");
                break;
            }
            _ = interval.tick() => {
                monitor.tick().await;
            }
        }
    }
}
