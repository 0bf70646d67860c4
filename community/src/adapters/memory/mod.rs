//! In-memory adapters
//!
//! Each adapter keeps its whole state behind a single lock so that every
//! operation is applied atomically.

mod feed_store;
mod group_directory;
pub mod seed;

pub use feed_store::InMemoryFeedStore;
pub use group_directory::InMemoryGroupDirectory;
