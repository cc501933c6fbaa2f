//! blog-graphql server
//!
//! Serves the GraphQL API on 127.0.0.1:4000 by default. Set
//! `BLOG_GRAPHQL_CONFIG` to a YAML file or `BLOG_GRAPHQL_PORT` to change it.

use blog_graphql::prelude::*;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let config = ServerConfig::from_env()?;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    tracing::info!(
        host = %config.host,
        port = config.port,
        seed = config.seed,
        "Starting blog-graphql"
    );

    ServerBuilder::new().with_config(config).serve().await
}
