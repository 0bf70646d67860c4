//! Enawga community feed
//!
//! In-memory posts, comments and community groups for the Enawga safety
//! app. Uses hexagonal (ports & adapters) architecture: the domain defines
//! the `FeedStore` and `GroupDirectory` ports, `adapters` provides the
//! in-memory implementations and `app` orchestrates them.

pub mod adapters;
pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod feed;

#[cfg(test)]
mod test_utils;


pub use adapters::{InMemoryFeedStore, InMemoryGroupDirectory};
pub use app::{FeedService, SearchResults};
pub use error::{AppError, DomainError};
