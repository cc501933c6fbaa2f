//! GraphQL API exposure
//!
//! This module provides the GraphQL schema and the routes serving it.
//! It consumes a `ServerHost` and knows nothing about how the store is built.

mod mutation;
mod query;
mod schema;
mod types;

pub use mutation::MutationRoot;
pub use query::QueryRoot;
pub use schema::{BlogSchema, build_schema};
pub use types::{CreateCommentInput, CreatePostInput, CreateUserInput};

use crate::server::host::ServerHost;
use anyhow::Result;
use async_graphql::http::{GraphQLPlaygroundConfig, playground_source};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    Router,
    extract::State,
    http::header,
    response::{Html, IntoResponse},
    routing::{get, post},
};
use std::sync::Arc;

/// GraphQL API exposure implementation
pub struct GraphQLExposure;

impl GraphQLExposure {
    /// Build the GraphQL router from a host
    ///
    /// Returns an Axum router with:
    /// - `POST /graphql` - query and mutation endpoint
    /// - `GET /graphql/schema` - schema SDL
    /// - `GET /graphql/playground` - GraphQL Playground (when enabled in config)
    pub fn build_router(host: Arc<ServerHost>) -> Result<Router> {
        let playground = host.config.playground;
        let schema = build_schema(host);

        let mut router = Router::new()
            .route("/graphql", post(graphql_handler))
            .route("/graphql/schema", get(graphql_schema_sdl));

        if playground {
            router = router.route("/graphql/playground", get(graphql_playground));
        }

        tracing::debug!(playground, "GraphQL routes registered");
        Ok(router.with_state(schema))
    }
}

/// Handler for GraphQL queries and mutations
async fn graphql_handler(
    State(schema): State<BlogSchema>,
    request: GraphQLRequest,
) -> GraphQLResponse {
    let response = schema.execute(request.into_inner()).await;

    if response.is_err() {
        tracing::debug!(
            errors = response.errors.len(),
            "GraphQL request returned errors"
        );
    }

    response.into()
}

/// Handler for GraphQL playground UI
async fn graphql_playground() -> impl IntoResponse {
    Html(playground_source(GraphQLPlaygroundConfig::new("/graphql")))
}

/// Handler for GraphQL schema SDL export
async fn graphql_schema_sdl(State(schema): State<BlogSchema>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        schema.sdl(),
    )
}
