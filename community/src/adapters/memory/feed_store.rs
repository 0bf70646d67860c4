//! In-memory feed store
//!
//! Posts are kept newest-first in a vector; comments live in a map keyed
//! by post id, also newest-first. One `RwLock` guards both so the comment
//! counter and the comment list never disagree.

use std::collections::{HashMap, HashSet};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::entities::{
    relative_time_label, validate_comment_body, Author, Comment, CommentId, Member, MemberId,
    NewPost, Post, PostId,
};
use crate::domain::ports::FeedStore;
use crate::error::DomainError;

struct StoredPost {
    post: Post,
    liked_by: HashSet<MemberId>,
}

impl StoredPost {
    /// Copy of the post as `viewer` sees it at `now`
    fn view(&self, viewer: &MemberId, now: DateTime<Utc>) -> Post {
        let mut post = self.post.clone();
        post.user_has_liked = self.liked_by.contains(viewer);
        post.time = relative_time_label(post.created_at, now);
        post
    }
}

struct FeedState {
    posts: Vec<StoredPost>,
    comments: HashMap<PostId, Vec<Comment>>,
    next_id: u64,
}

impl FeedState {
    fn position(&self, id: &PostId) -> Option<usize> {
        self.posts.iter().position(|p| &p.post.id == id)
    }

    /// Next numeric id not already taken by a stored post. Wraps back to 1
    /// past `u64::MAX`.
    fn allocate_id(&mut self) -> PostId {
        loop {
            let id = PostId::from(self.next_id);
            self.next_id = self.next_id.checked_add(1).unwrap_or(1);
            if self.position(&id).is_none() {
                return id;
            }
        }
    }
}

impl Default for FeedState {
    fn default() -> Self {
        Self {
            posts: Vec::new(),
            comments: HashMap::new(),
            next_id: 1,
        }
    }
}

/// Feed store holding posts and comments for the lifetime of the process
#[derive(Default)]
pub struct InMemoryFeedStore {
    state: RwLock<FeedState>,
}

impl InMemoryFeedStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an existing post and its comments (newest first) to the end
    /// of the feed. The post's comment counter is taken from `comments`.
    /// A post whose id is already stored is replaced in place, comments
    /// included.
    pub fn with_post(mut self, mut post: Post, mut comments: Vec<Comment>) -> Self {
        {
            let state = self
                .state
                .get_mut()
                .unwrap_or_else(PoisonError::into_inner);

            for comment in &mut comments {
                comment.post_id = post.id.clone();
            }
            post.comments = comments.len() as u32;
            post.user_has_liked = false;

            if let Some(next) = post
                .id
                .as_str()
                .parse::<u64>()
                .ok()
                .and_then(|n| n.checked_add(1))
            {
                state.next_id = state.next_id.max(next);
            }

            if comments.is_empty() {
                state.comments.remove(&post.id);
            } else {
                state.comments.insert(post.id.clone(), comments);
            }

            let stored = StoredPost {
                post,
                liked_by: HashSet::new(),
            };
            match state.position(&stored.post.id) {
                Some(idx) => state.posts[idx] = stored,
                None => state.posts.push(stored),
            }
        }
        self
    }

    /// Store pre-populated with the community's starter content
    pub fn seeded() -> Self {
        super::seed::seed_feed(Utc::now())
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, FeedState>, DomainError> {
        self.state
            .read()
            .map_err(|_| DomainError::Internal("feed store lock poisoned".to_string()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, FeedState>, DomainError> {
        self.state
            .write()
            .map_err(|_| DomainError::Internal("feed store lock poisoned".to_string()))
    }
}

fn relabel(comment: &Comment, now: DateTime<Utc>) -> Comment {
    let mut comment = comment.clone();
    comment.timestamp = relative_time_label(comment.created_at, now);
    comment
}

#[async_trait]
impl FeedStore for InMemoryFeedStore {
    async fn list_posts(&self, viewer: &MemberId) -> Result<Vec<Post>, DomainError> {
        let state = self.read()?;
        let now = Utc::now();
        Ok(state.posts.iter().map(|p| p.view(viewer, now)).collect())
    }

    async fn get_post(
        &self,
        id: &PostId,
        viewer: &MemberId,
    ) -> Result<Option<Post>, DomainError> {
        let state = self.read()?;
        let now = Utc::now();
        Ok(state
            .position(id)
            .map(|idx| state.posts[idx].view(viewer, now)))
    }

    async fn create_post(&self, author: &Member, new_post: &NewPost) -> Result<Post, DomainError> {
        if let Err(e) = new_post.validate() {
            tracing::warn!(member = %author.id, "Rejected post: {}", e);
            return Err(e);
        }

        let mut state = self.write()?;
        let now = Utc::now();
        let stored = StoredPost {
            post: Post {
                id: state.allocate_id(),
                author: Author::for_member(author, new_post.is_anonymous),
                time: relative_time_label(now, now),
                content: new_post.content.clone(),
                likes: 0,
                comments: 0,
                group: new_post.group.clone(),
                image: new_post.image.clone(),
                user_has_liked: false,
                created_at: now,
            },
            liked_by: HashSet::new(),
        };
        let post = stored.view(&author.id, now);
        state.posts.insert(0, stored);

        tracing::debug!(
            post_id = %post.id,
            group = %post.group,
            anonymous = post.author.is_anonymous,
            "Created post"
        );
        Ok(post)
    }

    async fn like_post(
        &self,
        id: &PostId,
        member: &MemberId,
    ) -> Result<Option<Post>, DomainError> {
        let mut state = self.write()?;
        let Some(idx) = state.position(id) else {
            tracing::debug!(post_id = %id, "Like ignored, post not found");
            return Ok(None);
        };

        let stored = &mut state.posts[idx];
        if stored.liked_by.remove(member) {
            stored.post.likes = stored.post.likes.saturating_sub(1);
        } else {
            stored.liked_by.insert(member.clone());
            stored.post.likes = stored.post.likes.saturating_add(1);
        }

        let post = stored.view(member, Utc::now());
        tracing::debug!(
            post_id = %id,
            member = %member,
            likes = post.likes,
            liked = post.user_has_liked,
            "Toggled like"
        );
        Ok(Some(post))
    }

    async fn get_comments(&self, post_id: &PostId) -> Result<Vec<Comment>, DomainError> {
        let state = self.read()?;
        let now = Utc::now();
        Ok(state
            .comments
            .get(post_id)
            .map(|comments| comments.iter().map(|c| relabel(c, now)).collect())
            .unwrap_or_default())
    }

    async fn add_comment(
        &self,
        post_id: &PostId,
        author: &Member,
        content: &str,
    ) -> Result<Option<Comment>, DomainError> {
        if let Err(e) = validate_comment_body(content) {
            tracing::warn!(post_id = %post_id, member = %author.id, "Rejected comment: {}", e);
            return Err(e);
        }

        let mut guard = self.write()?;
        let state = &mut *guard;
        let Some(idx) = state.position(post_id) else {
            tracing::debug!(post_id = %post_id, "Comment ignored, post not found");
            return Ok(None);
        };

        let now = Utc::now();
        let comment = Comment {
            id: CommentId::new(),
            post_id: post_id.clone(),
            author_name: author.name.clone(),
            content: content.to_string(),
            timestamp: relative_time_label(now, now),
            created_at: now,
        };

        let thread = state.comments.entry(post_id.clone()).or_default();
        thread.insert(0, comment.clone());
        state.posts[idx].post.comments = thread.len() as u32;

        tracing::debug!(
            post_id = %post_id,
            comment_id = %comment.id,
            comments = thread.len(),
            "Added comment"
        );
        Ok(Some(comment))
    }
}
