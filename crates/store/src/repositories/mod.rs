//! Typed repositories over the key-value store.

pub mod cache_hit_repo;

pub use cache_hit_repo::{CacheHitRepo, CACHE_HITS_KEY};
