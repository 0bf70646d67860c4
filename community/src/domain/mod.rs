//! Domain layer
//!
//! Contains pure business logic with no external dependencies.
//! - `entities`: Domain models for posts, comments, members and groups
//! - `ports`: Trait definitions the adapters implement

pub mod entities;
pub mod ports;
