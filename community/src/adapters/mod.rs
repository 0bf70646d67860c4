//! Adapters layer
//!
//! Implementations of port traits. Only in-memory state exists; nothing
//! outlives the process.

pub mod memory;

pub use memory::{InMemoryFeedStore, InMemoryGroupDirectory};
