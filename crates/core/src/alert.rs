//! Performance alert types raised by the monitor threshold rules.

use serde::Serialize;

use crate::types::Timestamp;

/// Severity of a monitor alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertSeverity {
    /// Hit rate fell below the healthy floor.
    Warning,
    /// Response time exceeded the latency ceiling.
    Error,
    /// Hit rate is above the excellence mark.
    Success,
}

/// A single alert derived from one monitor sample.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlertEvent {
    /// `alert-<unix millis>-<rule number>`.
    pub id: String,
    pub severity: AlertSeverity,
    pub message: String,
    /// Timestamp of the sample that raised the alert.
    pub timestamp: Timestamp,
}

impl AlertEvent {
    pub fn new(
        severity: AlertSeverity,
        rule: u8,
        message: impl Into<String>,
        timestamp: Timestamp,
    ) -> Self {
        Self {
            id: format!("alert-{}-{rule}", timestamp.timestamp_millis()),
            severity,
            message: message.into(),
            timestamp,
        }
    }
}
