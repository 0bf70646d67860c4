//! Post domain entity
//!
//! A single community feed entry with engagement counters and author
//! metadata. Posts are only ever mutated through their like and comment
//! counters.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Member;
use crate::error::DomainError;

/// Display name shown for anonymous authors
pub const ANONYMOUS_NAME: &str = "Anonymous";

/// Unique identifier for a post
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostId(pub String);

impl PostId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PostId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<u64> for PostId {
    fn from(n: u64) -> Self {
        Self(n.to_string())
    }
}

impl std::fmt::Display for PostId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Display identity of a post's author
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    pub name: String,
    pub avatar: String,
    pub is_anonymous: bool,
    #[serde(default)]
    pub is_verified: bool,
}

impl Author {
    /// Build the author shown for `member`, hiding it entirely when anonymous
    pub fn for_member(member: &Member, is_anonymous: bool) -> Self {
        if is_anonymous {
            Self::anonymous()
        } else {
            Self {
                name: member.name.clone(),
                avatar: member.avatar.clone(),
                is_anonymous: false,
                is_verified: member.is_verified,
            }
        }
    }

    pub fn anonymous() -> Self {
        Self {
            name: ANONYMOUS_NAME.to_string(),
            avatar: String::new(),
            is_anonymous: true,
            is_verified: false,
        }
    }
}

/// A community feed post, as seen by one member
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: PostId,
    pub author: Author,
    /// Relative label derived from `created_at` when the copy was taken
    pub time: String,
    pub content: String,
    pub likes: u32,
    /// Always equals the number of comments stored for this post
    pub comments: u32,
    pub group: String,
    /// Opaque reference to an uploaded image
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub user_has_liked: bool,
    pub created_at: DateTime<Utc>,
}

/// Data needed to create a new post
#[derive(Debug, Clone, Default)]
pub struct NewPost {
    pub content: String,
    pub is_anonymous: bool,
    pub group: String,
    pub image: Option<String>,
}

impl NewPost {
    pub fn new(content: impl Into<String>, group: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            group: group.into(),
            ..Default::default()
        }
    }

    pub fn anonymous(mut self) -> Self {
        self.is_anonymous = true;
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// Reject posts with blank content or no group
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.content.trim().is_empty() {
            return Err(DomainError::invalid_input("post content must not be empty"));
        }
        if self.group.trim().is_empty() {
            return Err(DomainError::invalid_input("a group must be selected"));
        }
        Ok(())
    }
}
