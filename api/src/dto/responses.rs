use crate::models::Post;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Public view of a post: `{id, title, body}`.
#[derive(Debug, Serialize)]
pub struct PostResponse {
    pub id: i64,
    pub title: String,
    pub body: String,
}

impl From<Post> for PostResponse {
    fn from(post: Post) -> Self {
        Self {
            id: post.id,
            title: post.title,
            body: post.body,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PostContent {
    pub title: String,
    pub body: String,
}

/// Response of `GET /{id}/update`: the current content to prefill an edit form.
#[derive(Debug, Serialize)]
pub struct EditPostResponse {
    pub message: String,
    pub post: PostContent,
}

impl From<Post> for EditPostResponse {
    fn from(post: Post) -> Self {
        Self {
            message: "success".to_string(),
            post: PostContent {
                title: post.title,
                body: post.body,
            },
        }
    }
}
