//! Mutation root resolvers
//!
//! Each mutation appends one record. A failed precondition leaves the store
//! untouched and surfaces as a GraphQL error carrying `extensions.code`.

use async_graphql::{Context, ErrorExtensions, Object, Result};

use super::schema::store;
use super::types::{CreateCommentInput, CreatePostInput, CreateUserInput};
use crate::core::entity::{Comment, Post, User};

/// Root of all write operations
pub struct MutationRoot;

#[Object]
impl MutationRoot {
    async fn create_user(&self, ctx: &Context<'_>, data: CreateUserInput) -> Result<User> {
        store(ctx)?
            .create_user(data.into())
            .await
            .map_err(|e| e.extend())
    }

    async fn create_post(&self, ctx: &Context<'_>, data: CreatePostInput) -> Result<Post> {
        store(ctx)?
            .create_post(data.into())
            .await
            .map_err(|e| e.extend())
    }

    async fn create_comment(
        &self,
        ctx: &Context<'_>,
        data: CreateCommentInput,
    ) -> Result<Comment> {
        store(ctx)?
            .create_comment(data.into())
            .await
            .map_err(|e| e.extend())
    }
}
