//! Repository port traits
//!
//! These traits define the interface for feed state. Not-found is
//! `Ok(None)`; `Err` is reserved for rejected input and internal faults.

use async_trait::async_trait;

use crate::domain::entities::{Comment, Group, GroupId, Member, MemberId, NewPost, Post, PostId};
use crate::error::DomainError;

/// Owner of the posts and their comments
#[async_trait]
pub trait FeedStore: Send + Sync {
    /// All posts, newest first
    async fn list_posts(&self, viewer: &MemberId) -> Result<Vec<Post>, DomainError>;

    /// Find a post by ID
    async fn get_post(&self, id: &PostId, viewer: &MemberId)
        -> Result<Option<Post>, DomainError>;

    /// Create a post at the front of the feed
    async fn create_post(&self, author: &Member, post: &NewPost) -> Result<Post, DomainError>;

    /// Toggle `member`'s like on a post
    async fn like_post(&self, id: &PostId, member: &MemberId)
        -> Result<Option<Post>, DomainError>;

    // Comments

    /// Comments on a post, newest first
    async fn get_comments(&self, post_id: &PostId) -> Result<Vec<Comment>, DomainError>;

    /// Add a comment and bump the post's comment counter
    async fn add_comment(
        &self,
        post_id: &PostId,
        author: &Member,
        content: &str,
    ) -> Result<Option<Comment>, DomainError>;
}

/// Catalog of community groups and who has joined them
#[async_trait]
pub trait GroupDirectory: Send + Sync {
    /// All groups in catalog order
    async fn list_groups(&self, viewer: &MemberId) -> Result<Vec<Group>, DomainError>;

    /// Join the group if `member` is not in it, leave otherwise
    async fn toggle_membership(
        &self,
        id: GroupId,
        member: &MemberId,
    ) -> Result<Option<Group>, DomainError>;
}
