//! Service trait for the blog store

use crate::core::entity::{Comment, NewComment, NewPost, NewUser, Post, User};
use crate::core::error::BlogResult;
use async_trait::async_trait;

/// Repository over the three blog collections
///
/// Implementations own the records and enforce the write-time invariants:
/// unique e-mail for users, an existing author for posts, an existing author
/// and an existing published post for comments. Lists keep insertion order.
#[async_trait]
pub trait BlogStore: Send + Sync {
    /// List all users
    async fn list_users(&self) -> BlogResult<Vec<User>>;

    /// Get a user by ID
    async fn get_user(&self, id: &str) -> BlogResult<Option<User>>;

    /// List all posts
    async fn list_posts(&self) -> BlogResult<Vec<Post>>;

    /// Get a post by ID
    async fn get_post(&self, id: &str) -> BlogResult<Option<Post>>;

    /// List all comments
    async fn list_comments(&self) -> BlogResult<Vec<Comment>>;

    /// Posts written by the given user
    async fn posts_by_author(&self, user_id: &str) -> BlogResult<Vec<Post>>;

    /// Comments written by the given user
    async fn comments_by_author(&self, user_id: &str) -> BlogResult<Vec<Comment>>;

    /// Comments attached to the given post
    async fn comments_by_post(&self, post_id: &str) -> BlogResult<Vec<Comment>>;

    /// Create a user
    ///
    /// Fails with `DuplicateEmail` when the e-mail is already registered.
    async fn create_user(&self, new_user: NewUser) -> BlogResult<User>;

    /// Create a post
    ///
    /// Fails with `UserNotFound` when the author does not exist.
    async fn create_post(&self, new_post: NewPost) -> BlogResult<Post>;

    /// Create a comment
    ///
    /// Fails with `UserNotFound` when the author does not exist, then with
    /// `PostUnavailable` when the post is missing or unpublished.
    async fn create_comment(&self, new_comment: NewComment) -> BlogResult<Comment>;
}
