//! GraphQL object and input types
//!
//! `Me`, `Post` and `Comment` are the store records with relationship
//! fields added. Each relationship field looks the related records up in the
//! store by id; a single reference that points nowhere is reported as a
//! `DANGLING_REFERENCE` error since the schema declares it non-null.

use async_graphql::{Context, ErrorExtensions, ID, InputObject, Object, Result};

use super::schema::store;
use crate::core::entity::{Comment, Entity, NewComment, NewPost, NewUser, Post, User};
use crate::core::error::BlogError;

fn dangling<T: Entity>(id: &str) -> async_graphql::Error {
    BlogError::DanglingReference {
        entity: T::resource_name(),
        id: id.to_string(),
    }
    .extend()
}

async fn author_of(ctx: &Context<'_>, author_id: &str) -> Result<User> {
    store(ctx)?
        .get_user(author_id)
        .await
        .map_err(|e| e.extend())?
        .ok_or_else(|| dangling::<User>(author_id))
}

#[Object(name = "Me")]
impl User {
    async fn id(&self) -> ID {
        ID(self.id.clone())
    }

    async fn name(&self) -> &str {
        &self.name
    }

    async fn email(&self) -> &str {
        &self.email
    }

    async fn age(&self) -> Option<i32> {
        self.age
    }

    /// Posts written by this user
    async fn all_post(&self, ctx: &Context<'_>) -> Result<Vec<Post>> {
        store(ctx)?
            .posts_by_author(&self.id)
            .await
            .map_err(|e| e.extend())
    }

    /// Comments written by this user
    async fn all_comment(&self, ctx: &Context<'_>) -> Result<Vec<Comment>> {
        store(ctx)?
            .comments_by_author(&self.id)
            .await
            .map_err(|e| e.extend())
    }
}

#[Object]
impl Post {
    async fn id(&self) -> ID {
        ID(self.id.clone())
    }

    async fn title(&self) -> &str {
        &self.title
    }

    async fn body(&self) -> &str {
        &self.body
    }

    async fn published(&self) -> bool {
        self.published
    }

    /// The user who wrote this post
    async fn author(&self, ctx: &Context<'_>) -> Result<User> {
        author_of(ctx, &self.author_id).await
    }

    /// Comments left on this post
    async fn comments(&self, ctx: &Context<'_>) -> Result<Vec<Comment>> {
        store(ctx)?
            .comments_by_post(&self.id)
            .await
            .map_err(|e| e.extend())
    }
}

#[Object]
impl Comment {
    async fn id(&self) -> ID {
        ID(self.id.clone())
    }

    async fn text(&self) -> &str {
        &self.text
    }

    /// The user who wrote this comment
    async fn author(&self, ctx: &Context<'_>) -> Result<User> {
        author_of(ctx, &self.author_id).await
    }

    /// The post this comment belongs to
    async fn post(&self, ctx: &Context<'_>) -> Result<Post> {
        store(ctx)?
            .get_post(&self.post_id)
            .await
            .map_err(|e| e.extend())?
            .ok_or_else(|| dangling::<Post>(&self.post_id))
    }
}

#[derive(Debug, InputObject)]
pub struct CreateUserInput {
    pub name: String,
    pub email: String,
    pub age: Option<i32>,
}

#[derive(Debug, InputObject)]
pub struct CreatePostInput {
    pub title: String,
    pub body: String,
    pub published: bool,
    pub author: ID,
}

#[derive(Debug, InputObject)]
pub struct CreateCommentInput {
    pub text: String,
    pub author: ID,
    pub post: ID,
}

impl From<CreateUserInput> for NewUser {
    fn from(input: CreateUserInput) -> Self {
        Self {
            name: input.name,
            email: input.email,
            age: input.age,
        }
    }
}

impl From<CreatePostInput> for NewPost {
    fn from(input: CreatePostInput) -> Self {
        Self {
            title: input.title,
            body: input.body,
            published: input.published,
            author_id: input.author.0,
        }
    }
}

impl From<CreateCommentInput> for NewComment {
    fn from(input: CreateCommentInput) -> Self {
        Self {
            text: input.text,
            author_id: input.author.0,
            post_id: input.post.0,
        }
    }
}
