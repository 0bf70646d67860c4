//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between domain entities and ports.

pub mod feed_service;

pub use feed_service::{FeedService, SearchResults};
