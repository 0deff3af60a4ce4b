//! Rolling metric logs and their aggregates.
//!
//! Two variants share the same bounded, newest-first log:
//! the dashboard probe history (10 entries, persisted by the caller) and the
//! performance monitor (20 samples plus a 10-entry alert log, in memory).

pub mod dashboard;
pub mod history;
pub mod monitor;
