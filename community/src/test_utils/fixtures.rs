//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.
//! Each fixture function creates a valid entity that can be customized.

use chrono::{Duration, Utc};

use crate::domain::entities::{
    Author, Comment, CommentId, Group, GroupId, Member, Post, PostId,
};

/// Create a test member with default values
pub fn test_member() -> Member {
    Member::new("test-member", "Test Member")
}

/// Create a test member with a specific name
pub fn test_member_named(name: &str) -> Member {
    Member::new(
        format!("member-{}", name.to_lowercase().replace(' ', "-")),
        name,
    )
}

/// Create a post posted an hour ago with no engagement
pub fn test_post(id: &str) -> Post {
    test_post_in_group(id, "General")
}

/// Create a test post filed under `group`
pub fn test_post_in_group(id: &str, group: &str) -> Post {
    Post {
        id: PostId::from(id),
        author: Author::for_member(&test_member(), false),
        time: "1 hour ago".to_string(),
        content: format!("Test post {}", id),
        likes: 0,
        comments: 0,
        group: group.to_string(),
        image: None,
        user_has_liked: false,
        created_at: Utc::now() - Duration::hours(1),
    }
}

/// Create a comment posted an hour ago. The owning post id is filled in
/// when the comment is attached to a store.
pub fn test_comment(id: &str, content: &str) -> Comment {
    Comment {
        id: CommentId::from(id),
        post_id: PostId::from(""),
        author_name: "Commenter".to_string(),
        content: content.to_string(),
        timestamp: "1 hour ago".to_string(),
        created_at: Utc::now() - Duration::hours(1),
    }
}

/// Create a group with ten members
pub fn test_group(id: u32, name: &str) -> Group {
    Group {
        id: GroupId(id),
        name: name.to_string(),
        members: 10,
        weekly_posts: 3,
        is_joined: false,
    }
}
