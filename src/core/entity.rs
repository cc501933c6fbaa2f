//! Entity records held by the blog store
//!
//! Relations between records are plain id strings (`Post::author_id`,
//! `Comment::author_id`, `Comment::post_id`). They are checked once when a
//! record is created and never again.

use serde::{Deserialize, Serialize};

/// Base trait for every stored record
pub trait Entity: Clone + Send + Sync + 'static {
    /// Singular resource name (e.g., "user", "post")
    fn resource_name() -> &'static str;

    /// Unique identifier of the record
    fn id(&self) -> &str;
}

/// A registered user (exposed as `Me` in GraphQL)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub age: Option<i32>,
}

/// A blog post written by a user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    pub title: String,
    pub body: String,
    pub published: bool,
    /// Id of the authoring user
    #[serde(rename = "author")]
    pub author_id: String,
}

/// A comment left by a user on a post
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: String,
    pub text: String,
    /// Id of the commenting user
    #[serde(rename = "author")]
    pub author_id: String,
    /// Id of the commented post
    #[serde(rename = "post")]
    pub post_id: String,
}

impl Entity for User {
    fn resource_name() -> &'static str {
        "user"
    }

    fn id(&self) -> &str {
        &self.id
    }
}

impl Entity for Post {
    fn resource_name() -> &'static str {
        "post"
    }

    fn id(&self) -> &str {
        &self.id
    }
}

impl Entity for Comment {
    fn resource_name() -> &'static str {
        "comment"
    }

    fn id(&self) -> &str {
        &self.id
    }
}

/// Payload for creating a user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub age: Option<i32>,
}

/// Payload for creating a post
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    pub title: String,
    pub body: String,
    pub published: bool,
    pub author_id: String,
}

/// Payload for creating a comment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewComment {
    pub text: String,
    pub author_id: String,
    pub post_id: String,
}

impl NewUser {
    /// Turn the payload into a record with the given id
    pub fn into_user(self, id: String) -> User {
        User {
            id,
            name: self.name,
            email: self.email,
            age: self.age,
        }
    }
}

impl NewPost {
    /// Turn the payload into a record with the given id
    pub fn into_post(self, id: String) -> Post {
        Post {
            id,
            title: self.title,
            body: self.body,
            published: self.published,
            author_id: self.author_id,
        }
    }
}

impl NewComment {
    /// Turn the payload into a record with the given id
    pub fn into_comment(self, id: String) -> Comment {
        Comment {
            id,
            text: self.text,
            author_id: self.author_id,
            post_id: self.post_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_names() {
        assert_eq!(User::resource_name(), "user");
        assert_eq!(Post::resource_name(), "post");
        assert_eq!(Comment::resource_name(), "comment");
    }

    #[test]
    fn test_post_serializes_author_reference() {
        let post = NewPost {
            title: "Judul".to_string(),
            body: "Isi".to_string(),
            published: false,
            author_id: "2".to_string(),
        }
        .into_post("p-1".to_string());

        let json = serde_json::to_value(&post).unwrap();
        assert_eq!(json["author"], "2");
        assert_eq!(json["id"], "p-1");
        assert!(json.get("author_id").is_none());
    }

    #[test]
    fn test_payloads_carry_references_into_records() {
        let comment = NewComment {
            text: "Mantap".to_string(),
            author_id: "1".to_string(),
            post_id: "2".to_string(),
        }
        .into_comment("c-1".to_string());

        assert_eq!(comment.id(), "c-1");
        assert_eq!(comment.author_id, "1");
        assert_eq!(comment.post_id, "2");

        let user = NewUser {
            name: "Rina".to_string(),
            email: "rina@mail.com".to_string(),
            age: None,
        }
        .into_user("u-1".to_string());
        assert_eq!(user.age, None);
        assert_eq!(user.email, "rina@mail.com");
    }

    #[test]
    fn test_comment_from_json() {
        let comment: Comment = serde_json::from_value(serde_json::json!({
            "id": "9",
            "text": "Mantap",
            "author": "1",
            "post": "2"
        }))
        .unwrap();

        assert_eq!(comment.author_id, "1");
        assert_eq!(comment.post_id, "2");
        assert_eq!(comment.id(), "9");
    }
}
