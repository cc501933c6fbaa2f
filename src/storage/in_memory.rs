//! In-memory implementation of BlogStore for development and testing

use crate::core::entity::{Comment, Entity, NewComment, NewPost, NewUser, Post, User};
use crate::core::error::{BlogError, BlogResult};
use crate::core::service::BlogStore;
use crate::storage::seed;
use async_trait::async_trait;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use uuid::Uuid;

/// Append-only, insertion-ordered collection of records
///
/// Lookups are linear scans over the vector.
struct Collection<T: Entity> {
    items: RwLock<Vec<T>>,
}

impl<T: Entity> Collection<T> {
    fn new(items: Vec<T>) -> Self {
        Self {
            items: RwLock::new(items),
        }
    }

    fn read(&self) -> BlogResult<RwLockReadGuard<'_, Vec<T>>> {
        self.items.read().map_err(|e| {
            BlogError::Storage(format!(
                "Failed to acquire {} read lock: {}",
                T::resource_name(),
                e
            ))
        })
    }

    fn write(&self) -> BlogResult<RwLockWriteGuard<'_, Vec<T>>> {
        self.items.write().map_err(|e| {
            BlogError::Storage(format!(
                "Failed to acquire {} write lock: {}",
                T::resource_name(),
                e
            ))
        })
    }

    fn list(&self) -> BlogResult<Vec<T>> {
        Ok(self.read()?.clone())
    }

    fn get(&self, id: &str) -> BlogResult<Option<T>> {
        Ok(self.read()?.iter().find(|item| item.id() == id).cloned())
    }

    fn filter(&self, predicate: impl Fn(&T) -> bool) -> BlogResult<Vec<T>> {
        Ok(self
            .read()?
            .iter()
            .filter(|item| predicate(item))
            .cloned()
            .collect())
    }
}

fn fresh_id() -> String {
    Uuid::new_v4().to_string()
}

/// In-memory blog store
///
/// Each collection sits behind its own RwLock. Creates hold the locks they
/// validate against for the whole check-then-append, always taken in the
/// order users, posts, comments.
#[derive(Clone)]
pub struct InMemoryBlogStore {
    users: Arc<Collection<User>>,
    posts: Arc<Collection<Post>>,
    comments: Arc<Collection<Comment>>,
}

impl InMemoryBlogStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::from_records(Vec::new(), Vec::new(), Vec::new())
    }

    /// Create a store loaded with the mock users, posts and comments
    pub fn seeded() -> Self {
        Self::from_records(seed::users(), seed::posts(), seed::comments())
    }

    /// Create a store from existing records, kept in the given order
    pub fn from_records(users: Vec<User>, posts: Vec<Post>, comments: Vec<Comment>) -> Self {
        Self {
            users: Arc::new(Collection::new(users)),
            posts: Arc::new(Collection::new(posts)),
            comments: Arc::new(Collection::new(comments)),
        }
    }
}

impl Default for InMemoryBlogStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BlogStore for InMemoryBlogStore {
    async fn list_users(&self) -> BlogResult<Vec<User>> {
        self.users.list()
    }

    async fn get_user(&self, id: &str) -> BlogResult<Option<User>> {
        self.users.get(id)
    }

    async fn list_posts(&self) -> BlogResult<Vec<Post>> {
        self.posts.list()
    }

    async fn get_post(&self, id: &str) -> BlogResult<Option<Post>> {
        self.posts.get(id)
    }

    async fn list_comments(&self) -> BlogResult<Vec<Comment>> {
        self.comments.list()
    }

    async fn posts_by_author(&self, user_id: &str) -> BlogResult<Vec<Post>> {
        self.posts.filter(|post| post.author_id == user_id)
    }

    async fn comments_by_author(&self, user_id: &str) -> BlogResult<Vec<Comment>> {
        self.comments.filter(|comment| comment.author_id == user_id)
    }

    async fn comments_by_post(&self, post_id: &str) -> BlogResult<Vec<Comment>> {
        self.comments.filter(|comment| comment.post_id == post_id)
    }

    async fn create_user(&self, new_user: NewUser) -> BlogResult<User> {
        let mut users = self.users.write()?;

        if users.iter().any(|user| user.email == new_user.email) {
            tracing::debug!(email = %new_user.email, "Rejected user with taken e-mail");
            return Err(BlogError::DuplicateEmail {
                email: new_user.email,
            });
        }

        let user = new_user.into_user(fresh_id());
        users.push(user.clone());

        tracing::info!(user_id = %user.id, "User created");
        Ok(user)
    }

    async fn create_post(&self, new_post: NewPost) -> BlogResult<Post> {
        let users = self.users.read()?;

        if !users.iter().any(|user| user.id == new_post.author_id) {
            return Err(BlogError::UserNotFound {
                id: new_post.author_id,
            });
        }

        let post = new_post.into_post(fresh_id());
        self.posts.write()?.push(post.clone());

        tracing::info!(post_id = %post.id, author_id = %post.author_id, "Post created");
        Ok(post)
    }

    async fn create_comment(&self, new_comment: NewComment) -> BlogResult<Comment> {
        let users = self.users.read()?;
        let posts = self.posts.read()?;

        if !users.iter().any(|user| user.id == new_comment.author_id) {
            return Err(BlogError::UserNotFound {
                id: new_comment.author_id,
            });
        }

        if !posts
            .iter()
            .any(|post| post.id == new_comment.post_id && post.published)
        {
            return Err(BlogError::PostUnavailable {
                id: new_comment.post_id,
            });
        }

        let comment = new_comment.into_comment(fresh_id());
        self.comments.write()?.push(comment.clone());

        tracing::info!(
            comment_id = %comment.id,
            post_id = %comment.post_id,
            "Comment created"
        );
        Ok(comment)
    }
}
