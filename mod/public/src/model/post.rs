use openshop_core::Page;
use serde::{Deserialize, Serialize};

use crate::model::User;

/// A blog post.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Post {
    pub id: i64,

    pub title: String,

    pub content: String,

    /// Author, embedded by the read serializer.
    pub author: User,

    pub author_id: i64,

    #[serde(default)]
    pub published: bool,

    /// RFC 3339 creation timestamp.
    pub created_at: String,
}

/// Request body for creating or replacing a post.
///
/// Writable fields only — `id`, `author` and `created_at` are server-assigned.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PostWritable {
    pub title: String,

    pub content: String,

    pub author_id: i64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published: Option<bool>,
}

/// Partial-update body. `None` fields are left untouched by the backend.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PatchedPost {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_id: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published: Option<bool>,
}

/// One page of posts.
pub type PaginatedPostList = Page<Post>;

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_post() -> Post {
        Post {
            id: 42,
            title: "Launch week".into(),
            content: "We shipped.".into(),
            author: User {
                id: 1,
                username: "alice".into(),
                email: None,
                first_name: None,
                last_name: None,
                date_joined: "2026-01-15T09:30:00Z".into(),
            },
            author_id: 1,
            published: true,
            created_at: "2026-03-01T12:00:00Z".into(),
        }
    }

    #[test]
    fn post_json_roundtrip() {
        let post = sample_post();
        let json = serde_json::to_string(&post).unwrap();
        let back: Post = serde_json::from_str(&json).unwrap();
        assert_eq!(post, back);
    }

    #[test]
    fn post_published_defaults_to_false() {
        let post: Post = serde_json::from_str(
            r#"{
                "id": 7,
                "title": "Draft",
                "content": "wip",
                "author": {"id": 1, "username": "alice", "date_joined": "2026-01-15T09:30:00Z"},
                "author_id": 1,
                "created_at": "2026-03-02T08:00:00Z"
            }"#,
        )
        .unwrap();
        assert!(!post.published);
    }

    #[test]
    fn post_writable_omits_absent_published() {
        let body = PostWritable {
            title: "Hello".into(),
            content: "world".into(),
            author_id: 1,
            published: None,
        };
        let value = serde_json::to_value(&body).unwrap();
        let obj = value.as_object().unwrap();
        assert!(!obj.contains_key("published"));
        assert_eq!(obj["title"], "Hello");
    }

    #[test]
    fn patched_post_default_is_empty_object() {
        let value = serde_json::to_value(PatchedPost::default()).unwrap();
        assert!(value.as_object().unwrap().is_empty());
    }

    #[test]
    fn paginated_post_list_shape() {
        let json = format!(
            r#"{{"count": 1, "next": null, "previous": null, "results": [{}]}}"#,
            serde_json::to_string(&sample_post()).unwrap()
        );
        let page: PaginatedPostList = serde_json::from_str(&json).unwrap();
        assert_eq!(page.count, 1);
        assert_eq!(page.results[0].title, "Launch week");
    }
}
