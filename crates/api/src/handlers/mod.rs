pub mod cache_analyzer;
pub mod dashboard;
pub mod learn;
pub mod overview;
pub mod performance_monitor;
pub mod purge_calculator;
