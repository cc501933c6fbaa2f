//! Query root resolvers

use async_graphql::{Context, ErrorExtensions, Object, Result};

use super::schema::store;
use crate::core::entity::{Comment, Post, User};
use crate::core::error::finite;
use crate::core::query::{TextQuery, filter_by_query};

/// Root of all read operations
pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Introduce someone, or nobody when either argument is missing
    async fn greeting(&self, name: Option<String>, position: Option<String>) -> String {
        match (name.as_deref(), position.as_deref()) {
            (Some(name), Some(position)) if !name.is_empty() && !position.is_empty() => {
                format!("hello i'm {} and my location at {}", name, position)
            }
            _ => "hello i'm from nowhere".to_string(),
        }
    }

    /// Users whose name contains `query`, or every user without one
    async fn user_collection(
        &self,
        ctx: &Context<'_>,
        query: Option<String>,
    ) -> Result<Vec<User>> {
        let users = store(ctx)?.list_users().await.map_err(|e| e.extend())?;
        let query = TextQuery::from_arg(query.as_deref());
        Ok(filter_by_query(users, query.as_ref()))
    }

    /// Posts whose title or body contains `query`, or every post without one
    async fn post_collection(
        &self,
        ctx: &Context<'_>,
        query: Option<String>,
    ) -> Result<Vec<Post>> {
        let posts = store(ctx)?.list_posts().await.map_err(|e| e.extend())?;
        let query = TextQuery::from_arg(query.as_deref());
        Ok(filter_by_query(posts, query.as_ref()))
    }

    /// Comments whose text contains `query`, or every comment without one
    async fn comments(&self, ctx: &Context<'_>, query: Option<String>) -> Result<Vec<Comment>> {
        let comments = store(ctx)?
            .list_comments()
            .await
            .map_err(|e| e.extend())?;
        let query = TextQuery::from_arg(query.as_deref());
        Ok(filter_by_query(comments, query.as_ref()))
    }

    async fn all_user(&self, ctx: &Context<'_>) -> Result<Vec<User>> {
        store(ctx)?.list_users().await.map_err(|e| e.extend())
    }

    async fn add(&self, a: f64, b: f64) -> Result<f64> {
        finite("add", a + b).map_err(|e| e.extend())
    }

    /// Sum of `numbers`, 0 for an empty list
    async fn add_arr(&self, numbers: Vec<f64>) -> Result<f64> {
        let sum = numbers.iter().fold(0.0, |acc, n| acc + n);
        finite("addArr", sum).map_err(|e| e.extend())
    }

    async fn grades(&self) -> Vec<Option<i32>> {
        (1..=5).map(Some).collect()
    }

    /// A fixed post that is not part of the store
    async fn post(&self) -> Post {
        Post {
            id: "abcd123".to_string(),
            title: "Makan Siang".to_string(),
            body: "Hari ini aku sedang makan siang".to_string(),
            published: true,
            author_id: String::new(),
        }
    }

    /// A fixed user that is not part of the store
    async fn me(&self) -> User {
        User {
            id: "bababa123".to_string(),
            name: "Helga".to_string(),
            email: "helga@mail.example.com".to_string(),
            age: Some(22),
        }
    }

    /// Always true; there is no authentication
    async fn is_login(&self) -> bool {
        true
    }
}
