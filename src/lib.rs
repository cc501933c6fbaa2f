//! # blog-graphql
//!
//! A GraphQL API over an in-memory blog store of users, posts and comments.
//!
//! ## Features
//!
//! - **Collection queries**: `userCollection`, `postCollection` and `comments`
//!   with optional case-insensitive text filtering
//! - **Relationship fields**: `Post.author`, `Post.comments`, `Me.allPost`,
//!   `Me.allComment`, `Comment.author`, `Comment.post`
//! - **Create mutations**: users, posts and comments, with their
//!   write-time checks (unique e-mail, existing author, published post)
//! - **Pluggable store**: anything implementing [`core::BlogStore`]
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use blog_graphql::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     ServerBuilder::new()
//!         .with_config(ServerConfig::from_env()?)
//!         .with_store(InMemoryBlogStore::seeded())
//!         .serve()
//!         .await
//! }
//! ```

pub mod config;
pub mod core;
pub mod server;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        BlogError, BlogResult, BlogStore, Comment, Entity, NewComment, NewPost, NewUser, Post,
        TextQuery, User,
    };

    // === Storage ===
    pub use crate::storage::InMemoryBlogStore;

    // === Config ===
    pub use crate::config::ServerConfig;

    // === Server ===
    pub use crate::server::exposure::graphql::{BlogSchema, build_schema};
    pub use crate::server::{GraphQLExposure, RestExposure, ServerBuilder, ServerHost};

    // === External dependencies ===
    pub use anyhow::Result;
    pub use async_trait::async_trait;
}
