//! Test utilities
//!
//! The in-memory adapters double as test stores, so only fixtures live
//! here.

pub mod fixtures;

pub use fixtures::*;
