//! Starter content
//!
//! The feed and group directory a fresh install shows. Timestamps are
//! anchored to `now` so the relative labels read as they were written.

use chrono::{DateTime, Duration, Utc};

use super::{InMemoryFeedStore, InMemoryGroupDirectory};
use crate::domain::entities::{
    relative_time_label, Author, Comment, CommentId, Group, GroupId, MemberId, Post, PostId,
    DEFAULT_MEMBER_ID,
};

struct SeedPost {
    id: &'static str,
    author: Author,
    age: Duration,
    content: &'static str,
    likes: u32,
    group: &'static str,
    // newest first
    comments: &'static [(&'static str, &'static str, &'static str, i64)],
}

fn named(name: &str, verified: bool) -> Author {
    Author {
        name: name.to_string(),
        avatar: String::new(),
        is_anonymous: false,
        is_verified: verified,
    }
}

fn seed_posts() -> Vec<SeedPost> {
    vec![
        SeedPost {
            id: "1",
            author: named("Sarah J.", false),
            age: Duration::hours(2),
            content: "I just had my first prenatal checkup today! Feeling excited and nervous at the same time. Any advice from experienced moms?",
            likes: 24,
            group: "Pregnancy Support",
            comments: &[
                ("c2", "Jessica K.", "Stay hydrated and get plenty of rest!", 30),
                ("c1", "Emily R.", "Congrats! Make sure to take your prenatal vitamins daily.", 60),
            ],
        },
        SeedPost {
            id: "2",
            author: Author::anonymous(),
            age: Duration::days(1),
            content: "I've been experiencing harassment at my workplace but I'm afraid to report it. Has anyone dealt with a similar situation?",
            likes: 32,
            group: "Workplace Safety",
            comments: &[
                ("c4", "Legal Aid", "Our organization can provide confidential guidance. Check our resources section.", 6 * 60),
                ("c3", "Anita S.", "Document everything and consider speaking with HR.", 12 * 60),
            ],
        },
        SeedPost {
            id: "3",
            author: named("Dr. Lisa Patel", true),
            age: Duration::days(3),
            content: "Important reminder: Regular health checkups during pregnancy are essential. Don't skip your appointments, even if you feel fine!",
            likes: 87,
            group: "Health Advice",
            comments: &[("c5", "Maria G.", "Thank you for the reminder, doctor!", 2 * 24 * 60)],
        },
    ]
}

/// Feed store holding the starter posts, newest first
pub fn seed_feed(now: DateTime<Utc>) -> InMemoryFeedStore {
    seed_posts()
        .into_iter()
        .fold(InMemoryFeedStore::new(), |store, seed| {
            let post_id = PostId::from(seed.id);
            let comments = seed
                .comments
                .iter()
                .map(|&(id, author, content, minutes_ago)| {
                    let created_at = now - Duration::minutes(minutes_ago);
                    Comment {
                        id: CommentId::from(id),
                        post_id: post_id.clone(),
                        author_name: author.to_string(),
                        content: content.to_string(),
                        timestamp: relative_time_label(created_at, now),
                        created_at,
                    }
                })
                .collect();

            let created_at = now - seed.age;
            let post = Post {
                id: post_id,
                author: seed.author,
                time: relative_time_label(created_at, now),
                content: seed.content.to_string(),
                likes: seed.likes,
                comments: 0,
                group: seed.group.to_string(),
                image: None,
                user_has_liked: false,
                created_at,
            };
            store.with_post(post, comments)
        })
}

/// Group directory with the starter groups; the default member has
/// already joined two of them
pub fn seed_groups() -> InMemoryGroupDirectory {
    let groups: [(&str, u32, u32, bool); 5] = [
        ("High School Girls", 1240, 56, false),
        ("Women in Tech", 985, 32, false),
        ("Home Business", 1850, 78, false),
        ("Women's Leadership", 735, 41, true),
        ("Workplace Safety", 1120, 63, true),
    ];
    let default_member = MemberId::from(DEFAULT_MEMBER_ID);

    groups.into_iter().zip(1u32..).fold(
        InMemoryGroupDirectory::new(),
        |directory, ((name, members, weekly_posts, joined), id)| {
            let group = Group {
                id: GroupId(id),
                name: name.to_string(),
                members,
                weekly_posts,
                is_joined: false,
            };
            let joined_by: &[MemberId] = if joined {
                std::slice::from_ref(&default_member)
            } else {
                &[]
            };
            directory.with_group(group, joined_by)
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::{FeedStore, GroupDirectory};

    #[tokio::test]
    async fn seeded_feed_matches_starter_content() {
        let store = seed_feed(Utc::now());
        let viewer = MemberId::from(DEFAULT_MEMBER_ID);

        let posts = store.list_posts(&viewer).await.unwrap();
        let ids: Vec<&str> = posts.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["1", "2", "3"]);

        assert_eq!(posts[0].likes, 24);
        assert_eq!(posts[0].time, "2 hours ago");
        assert_eq!(posts[1].author.name, "Anonymous");
        assert_eq!(posts[1].time, "Yesterday");
        assert!(posts[2].author.is_verified);
        assert_eq!(posts[2].time, "3 days ago");
    }

    #[tokio::test]
    async fn seeded_comment_counters_match_threads() {
        let store = seed_feed(Utc::now());
        let viewer = MemberId::from(DEFAULT_MEMBER_ID);

        for post in store.list_posts(&viewer).await.unwrap() {
            let comments = store.get_comments(&post.id).await.unwrap();
            assert_eq!(post.comments as usize, comments.len());
        }

        let thread = store.get_comments(&PostId::from("1")).await.unwrap();
        assert_eq!(thread[0].timestamp, "30 minutes ago");
        assert_eq!(thread[1].timestamp, "1 hour ago");
    }

    #[tokio::test]
    async fn seeded_post_ids_continue_after_starters() {
        let store = seed_feed(Utc::now());
        let post = store
            .create_post(
                &crate::domain::entities::Member::default(),
                &crate::domain::entities::NewPost::new("hi", "Tech Women"),
            )
            .await
            .unwrap();
        assert_eq!(post.id, PostId::from("4"));
    }

    #[tokio::test]
    async fn default_member_starts_in_two_groups() {
        let directory = seed_groups();
        let groups = directory
            .list_groups(&MemberId::from(DEFAULT_MEMBER_ID))
            .await
            .unwrap();

        assert_eq!(groups.len(), 5);
        let joined: Vec<&str> = groups
            .iter()
            .filter(|g| g.is_joined)
            .map(|g| g.name.as_str())
            .collect();
        assert_eq!(joined, ["Women's Leadership", "Workplace Safety"]);
    }
}
