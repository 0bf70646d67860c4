//! Feed service
//!
//! The entry point presentation code talks to. Forwards post and comment
//! operations to the feed store and adds the community page's search and
//! group views on top.

use std::sync::Arc;

use serde::Serialize;

use crate::domain::entities::{Comment, Group, GroupId, Member, MemberId, NewPost, Post, PostId};
use crate::domain::ports::{FeedStore, GroupDirectory};
use crate::error::AppError;

/// Posts and groups matching a search query
#[derive(Debug, Clone, Serialize, Default)]
pub struct SearchResults {
    pub query: String,
    pub posts: Vec<Post>,
    pub groups: Vec<Group>,
}

impl SearchResults {
    pub fn is_empty(&self) -> bool {
        self.posts.is_empty() && self.groups.is_empty()
    }
}

/// Service for reading and updating the community feed
pub struct FeedService<FS, GD>
where
    FS: FeedStore,
    GD: GroupDirectory,
{
    store: Arc<FS>,
    groups: Arc<GD>,
}

impl<FS, GD> FeedService<FS, GD>
where
    FS: FeedStore,
    GD: GroupDirectory,
{
    pub fn new(store: Arc<FS>, groups: Arc<GD>) -> Self {
        Self { store, groups }
    }

    pub async fn list_posts(&self, viewer: &MemberId) -> Result<Vec<Post>, AppError> {
        Ok(self.store.list_posts(viewer).await?)
    }

    pub async fn get_post(
        &self,
        id: &PostId,
        viewer: &MemberId,
    ) -> Result<Option<Post>, AppError> {
        Ok(self.store.get_post(id, viewer).await?)
    }

    pub async fn create_post(&self, author: &Member, post: &NewPost) -> Result<Post, AppError> {
        let post = self.store.create_post(author, post).await?;
        tracing::info!("Post {} published to {}", post.id, post.group);
        Ok(post)
    }

    /// Toggle the member's like. `None` means the post no longer exists
    /// and the caller should leave its view untouched.
    pub async fn like_post(
        &self,
        id: &PostId,
        member: &MemberId,
    ) -> Result<Option<Post>, AppError> {
        Ok(self.store.like_post(id, member).await?)
    }

    pub async fn get_comments(&self, post_id: &PostId) -> Result<Vec<Comment>, AppError> {
        Ok(self.store.get_comments(post_id).await?)
    }

    pub async fn add_comment(
        &self,
        post_id: &PostId,
        author: &Member,
        content: &str,
    ) -> Result<Option<Comment>, AppError> {
        Ok(self.store.add_comment(post_id, author, content).await?)
    }

    /// Posts filed under `group`, newest first
    pub async fn posts_in_group(
        &self,
        group: &str,
        viewer: &MemberId,
    ) -> Result<Vec<Post>, AppError> {
        let group = group.trim().to_lowercase();
        let posts = self.store.list_posts(viewer).await?;
        Ok(posts
            .into_iter()
            .filter(|p| p.group.to_lowercase() == group)
            .collect())
    }

    pub async fn list_groups(&self, viewer: &MemberId) -> Result<Vec<Group>, AppError> {
        Ok(self.groups.list_groups(viewer).await?)
    }

    pub async fn toggle_membership(
        &self,
        id: GroupId,
        member: &MemberId,
    ) -> Result<Option<Group>, AppError> {
        Ok(self.groups.toggle_membership(id, member).await?)
    }

    /// Search posts (content, group, author) and groups (name).
    /// A blank query matches everything.
    pub async fn search(&self, query: &str, viewer: &MemberId) -> Result<SearchResults, AppError> {
        let query = query.trim().to_lowercase();
        let matches = |text: &str| query.is_empty() || text.to_lowercase().contains(&query);

        let posts = self
            .store
            .list_posts(viewer)
            .await?
            .into_iter()
            .filter(|p| matches(&p.content) || matches(&p.group) || matches(&p.author.name))
            .collect::<Vec<_>>();

        let groups = self
            .groups
            .list_groups(viewer)
            .await?
            .into_iter()
            .filter(|g| matches(&g.name))
            .collect::<Vec<_>>();

        tracing::debug!(
            query = %query,
            posts = posts.len(),
            groups = groups.len(),
            "Search complete"
        );

        Ok(SearchResults {
            query,
            posts,
            groups,
        })
    }
}
