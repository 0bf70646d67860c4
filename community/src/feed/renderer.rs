//! Feed renderer
//!
//! Renders posts, comment threads and groups to markdown.

use crate::app::SearchResults;
use crate::domain::entities::{Comment, Group, Post};

/// Render the feed to markdown format
pub fn render_feed(posts: &[Post]) -> String {
    let mut buf = String::new();

    buf.push_str("# Enawga Community\n\n");
    buf.push_str("Connect, share, and support\n\n");

    if posts.is_empty() {
        buf.push_str("_No posts yet. Be the first to share._\n");
        return buf;
    }

    for post in posts {
        buf.push_str(&render_post(post));
        buf.push('\n');
    }

    buf
}

fn render_post(post: &Post) -> String {
    let mut author = post.author.name.clone();
    if post.author.is_verified {
        author.push_str(" [verified]");
    }

    let liked = if post.user_has_liked { " (liked)" } else { "" };

    let mut buf = format!(
        "## {} · {}\n_{} · post {}_\n\n{}\n",
        author, post.group, post.time, post.id, post.content
    );
    if let Some(image) = &post.image {
        buf.push_str(&format!("\n![Post]({})\n", image));
    }
    buf.push_str(&format!(
        "\n{} likes{} | {} comments\n",
        post.likes, liked, post.comments
    ));
    buf
}

fn render_comment(comment: &Comment) -> String {
    format!(
        "- **{}** ({}): {}\n",
        comment.author_name,
        comment.timestamp,
        truncate(&comment.content, 280)
    )
}

/// Render a single post with its comments
pub fn render_thread(post: &Post, comments: &[Comment]) -> String {
    let mut buf = render_post(post);

    buf.push_str("\n### Comments\n\n");
    if comments.is_empty() {
        buf.push_str("_No comments yet._\n");
    } else {
        for comment in comments {
            buf.push_str(&render_comment(comment));
        }
    }

    buf
}

/// Render the group directory
pub fn render_groups(groups: &[Group]) -> String {
    let mut buf = String::new();

    buf.push_str("# Groups\n\n");

    if groups.is_empty() {
        buf.push_str("_No groups available._\n");
        return buf;
    }

    buf.push_str("| Group | Members | Posts this week | |\n");
    buf.push_str("|-------|---------|-----------------|---|\n");
    for group in groups {
        let status = if group.is_joined { "Joined" } else { "Join" };
        buf.push_str(&format!(
            "| {} | {} | {} | {} |\n",
            group.name,
            thousands(group.members),
            group.weekly_posts,
            status
        ));
    }

    buf
}

/// Render search results
pub fn render_search(results: &SearchResults) -> String {
    let mut buf = format!("# Search: \"{}\"\n\n", results.query);

    if results.is_empty() {
        buf.push_str("_Nothing matched._\n");
        return buf;
    }

    if !results.groups.is_empty() {
        buf.push_str("## Groups\n\n");
        for group in &results.groups {
            buf.push_str(&format!(
                "- {} ({} members)\n",
                group.name,
                thousands(group.members)
            ));
        }
        buf.push('\n');
    }

    if !results.posts.is_empty() {
        buf.push_str("## Posts\n\n");
        for post in &results.posts {
            buf.push_str(&format!(
                "- [{}] {}: {}\n",
                post.id,
                post.author.name,
                truncate(&post.content, 80)
            ));
        }
    }

    buf
}

/// 1240 -> "1,240"
fn thousands(n: u32) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Truncate a string with ellipsis, on a char boundary
fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Author;
    use crate::test_utils::{test_comment, test_group, test_post};

    #[test]
    fn render_feed_empty() {
        let result = render_feed(&[]);

        assert!(result.contains("# Enawga Community"));
        assert!(result.contains("_No posts yet"));
    }

    #[test]
    fn render_feed_with_posts() {
        let mut verified = test_post("3");
        verified.author = Author {
            name: "Dr. Lisa Patel".to_string(),
            avatar: String::new(),
            is_anonymous: false,
            is_verified: true,
        };
        verified.likes = 87;
        verified.user_has_liked = true;

        let mut with_image = test_post("4");
        with_image.image = Some("blob:local/1".to_string());

        let result = render_feed(&[with_image, verified]);

        assert!(result.contains("Dr. Lisa Patel [verified]"));
        assert!(result.contains("87 likes (liked)"));
        assert!(result.contains("![Post](blob:local/1)"));
        assert!(result.find("post 4").unwrap() < result.find("post 3").unwrap());
    }

    #[test]
    fn render_thread_lists_comments_in_order() {
        let post = test_post("1");
        let comments = vec![
            test_comment("c2", "Stay hydrated and get plenty of rest!"),
            test_comment("c1", "Congrats!"),
        ];

        let result = render_thread(&post, &comments);

        assert!(result.contains("### Comments"));
        let newer = result.find("Stay hydrated").unwrap();
        let older = result.find("Congrats!").unwrap();
        assert!(newer < older);
    }

    #[test]
    fn render_thread_without_comments() {
        let result = render_thread(&test_post("1"), &[]);
        assert!(result.contains("_No comments yet._"));
    }

    #[test]
    fn render_groups_table() {
        let mut joined = test_group(4, "Women's Leadership");
        joined.members = 735;
        joined.is_joined = true;
        let mut big = test_group(1, "High School Girls");
        big.members = 1240;

        let result = render_groups(&[big, joined]);

        assert!(result.contains("| High School Girls | 1,240 | 3 | Join |"));
        assert!(result.contains("| Women's Leadership | 735 | 3 | Joined |"));
    }

    #[test]
    fn render_search_sections() {
        let results = SearchResults {
            query: "safety".to_string(),
            posts: vec![test_post("2")],
            groups: vec![test_group(5, "Workplace Safety")],
        };

        let result = render_search(&results);

        assert!(result.contains("# Search: \"safety\""));
        assert!(result.contains("## Groups"));
        assert!(result.contains("- Workplace Safety (10 members)"));
        assert!(result.contains("- [2] Test Member: Test post 2"));

        let empty = render_search(&SearchResults::default());
        assert!(empty.contains("_Nothing matched._"));
    }

    #[test]
    fn thousands_separator() {
        assert_eq!(thousands(0), "0");
        assert_eq!(thousands(985), "985");
        assert_eq!(thousands(1850), "1,850");
        assert_eq!(thousands(1234567), "1,234,567");
    }

    #[test]
    fn truncate_is_char_safe() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("héllo wörld", 8), "héllo...");
    }
}
