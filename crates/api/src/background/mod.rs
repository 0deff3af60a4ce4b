//! Background tasks.
//!
//! Each task is spawned via `tokio::spawn` and stopped through a
//! [`tokio_util::sync::CancellationToken`] for graceful shutdown.

pub mod performance_monitor;
