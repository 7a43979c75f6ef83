//! Text shown for a single post.

use crate::models::{Post, User};

/// Longest description shown on a home card before it is cut.
pub const EXCERPT_CHARS: usize = 51;

/// Per-post actions, offered to the author only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostAction {
    Edit,
    Delete,
}

impl PostAction {
    pub fn label(&self) -> &'static str {
        match self {
            PostAction::Edit => "Edit",
            PostAction::Delete => "Delete",
        }
    }
}

/// Whether `viewer` may be offered edit and delete for `post`. The server
/// makes the real decision.
pub fn can_modify(post: &Post, viewer: Option<&User>) -> bool {
    viewer.is_some_and(|user| post.is_owned_by(user))
}

pub fn post_actions(post: &Post, viewer: Option<&User>) -> Vec<PostAction> {
    if can_modify(post, viewer) {
        vec![PostAction::Edit, PostAction::Delete]
    } else {
        Vec::new()
    }
}

/// Card description: the first [`EXCERPT_CHARS`] characters followed by
/// `...` when the text is longer.
pub fn excerpt(description: &str) -> String {
    if description.chars().count() > EXCERPT_CHARS {
        let head: String = description.chars().take(EXCERPT_CHARS).collect();
        format!("{}...", head)
    } else {
        description.to_string()
    }
}

/// `author — date`, under each card.
pub fn byline(post: &Post) -> String {
    format!("{} — {}", post.author, post.date)
}

/// `category — date`, under the title on the detail screen.
pub fn detail_subtitle(post: &Post) -> String {
    format!("{} — {}", post.category, post.date)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn post(user_id: serde_json::Value) -> Post {
        serde_json::from_value(json!({
            "id": 42,
            "title": "T",
            "category": "News",
            "author": "Ada",
            "date": "5/6/2025",
            "userId": user_id
        }))
        .unwrap()
    }

    #[test]
    fn test_actions_only_for_owner() {
        let owner = User::new(7u64, "Ada", "a@x.io");
        let other = User::new(8u64, "Bob", "b@x.io");

        let p = post(json!(7));
        assert_eq!(
            post_actions(&p, Some(&owner)),
            vec![PostAction::Edit, PostAction::Delete]
        );
        assert!(post_actions(&p, Some(&other)).is_empty());
        assert!(post_actions(&p, None).is_empty());
    }

    #[test]
    fn test_owner_match_across_id_forms() {
        let owner = User::new("7", "Ada", "a@x.io");
        assert!(can_modify(&post(json!(7)), Some(&owner)));
    }

    #[test]
    fn test_excerpt_boundary() {
        let exact = "a".repeat(51);
        assert_eq!(excerpt(&exact), exact);

        let long = "b".repeat(52);
        assert_eq!(excerpt(&long), format!("{}...", "b".repeat(51)));

        assert_eq!(excerpt(""), "");
    }

    #[test]
    fn test_excerpt_counts_characters_not_bytes() {
        let text = "é".repeat(60);
        let cut = excerpt(&text);
        assert_eq!(cut.chars().count(), 54);
        assert!(cut.ends_with("..."));
    }

    #[test]
    fn test_byline_and_subtitle() {
        let p = post(json!(1));
        assert_eq!(byline(&p), "Ada — 5/6/2025");
        assert_eq!(detail_subtitle(&p), "News — 5/6/2025");
    }
}
