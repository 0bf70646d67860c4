//! Comment domain entity
//!
//! A reply attached to exactly one post.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::PostId;
use crate::error::DomainError;

/// Unique identifier for a comment
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommentId(pub String);

impl CommentId {
    pub fn new() -> Self {
        Self(format!("c-{}", Uuid::new_v4().simple()))
    }
}

impl Default for CommentId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&str> for CommentId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl std::fmt::Display for CommentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: CommentId,
    pub post_id: PostId,
    pub author_name: String,
    pub content: String,
    /// Relative label derived from `created_at`
    pub timestamp: String,
    pub created_at: DateTime<Utc>,
}

/// Reject blank comment bodies
pub fn validate_comment_body(content: &str) -> Result<(), DomainError> {
    if content.trim().is_empty() {
        return Err(DomainError::invalid_input("comment must not be empty"));
    }
    Ok(())
}
