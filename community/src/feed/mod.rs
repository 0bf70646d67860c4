//! Feed module
//!
//! Markdown rendering of the community feed for terminal output.

pub mod renderer;

pub use renderer::{render_feed, render_groups, render_search, render_thread};
