//! Domain entities
//!
//! Pure domain models representing the community feed.

pub mod comment;
pub mod group;
pub mod member;
pub mod post;
pub mod time_label;

pub use comment::{validate_comment_body, Comment, CommentId};
pub use group::{Group, GroupId};
pub use member::{Member, MemberId, DEFAULT_MEMBER_ID, DEFAULT_MEMBER_NAME};
pub use post::{Author, NewPost, Post, PostId, ANONYMOUS_NAME};
pub use time_label::relative_time_label;
