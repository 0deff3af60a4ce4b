//! Domain logic for the cachewise service.
//!
//! Everything in this crate is pure: no HTTP, no file IO. Randomness is
//! injected through `rand::Rng` so the simulation generators stay testable.

pub mod alert;
pub mod analyzer;
pub mod error;
pub mod guide;
pub mod metrics;
pub mod purge_strategy;
pub mod simulation;
pub mod types;
