//! ServerBuilder for fluent API to build HTTP servers

use super::exposure::{GraphQLExposure, RestExposure};
use super::host::ServerHost;
use crate::config::ServerConfig;
use crate::core::service::BlogStore;
use crate::storage::InMemoryBlogStore;
use anyhow::Result;
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Builder for creating the blog HTTP server
///
/// # Example
///
/// ```ignore
/// ServerBuilder::new()
///     .with_config(ServerConfig::from_env()?)
///     .serve()
///     .await?;
/// ```
pub struct ServerBuilder {
    config: ServerConfig,
    store: Option<Arc<dyn BlogStore>>,
    custom_routes: Vec<Router>,
}

impl ServerBuilder {
    /// Create a new ServerBuilder with the default configuration
    pub fn new() -> Self {
        Self {
            config: ServerConfig::default(),
            store: None,
            custom_routes: Vec::new(),
        }
    }

    /// Set the server configuration
    pub fn with_config(mut self, config: ServerConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the store
    ///
    /// When no store is given, an in-memory store is created, seeded with the
    /// mock records unless `seed` is disabled in the configuration.
    pub fn with_store(mut self, store: impl BlogStore + 'static) -> Self {
        self.store = Some(Arc::new(store));
        self
    }

    /// Add custom routes to the server
    pub fn with_custom_routes(mut self, routes: Router) -> Self {
        self.custom_routes.push(routes);
        self
    }

    /// Build the transport-agnostic host
    pub fn build_host(mut self) -> Result<ServerHost> {
        let store = match self.store.take() {
            Some(store) => store,
            None if self.config.seed => {
                tracing::info!("Using in-memory store with mock data");
                Arc::new(InMemoryBlogStore::seeded())
            }
            None => {
                tracing::info!("Using empty in-memory store");
                Arc::new(InMemoryBlogStore::new())
            }
        };

        Ok(ServerHost::new(self.config, store))
    }

    /// Build the final router
    ///
    /// Merges the health routes, the GraphQL routes and any custom routes,
    /// wrapped in HTTP tracing and permissive CORS.
    pub fn build(mut self) -> Result<Router> {
        let custom_routes = std::mem::take(&mut self.custom_routes);
        let host = Arc::new(self.build_host()?);

        let rest_router = RestExposure::build_router(host.clone(), custom_routes)?;
        let graphql_router = GraphQLExposure::build_router(host)?;

        Ok(rest_router
            .merge(graphql_router)
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive()))
    }

    /// Serve the application with graceful shutdown
    ///
    /// Binds to the configured address and handles SIGTERM and SIGINT
    /// (Ctrl+C) for graceful shutdown.
    pub async fn serve(self) -> Result<()> {
        let addr = self.config.bind_address();
        let app = self.build()?;
        let listener = TcpListener::bind(addr.as_str()).await?;

        tracing::info!("Server listening on http://{}/graphql", addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");
        Ok(())
    }
}

impl Default for ServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Wait for shutdown signal (SIGTERM or Ctrl+C)
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal, initiating graceful shutdown...");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM signal, initiating graceful shutdown...");
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_default_host_is_seeded() {
        let host = ServerBuilder::new().build_host().unwrap();
        assert_eq!(host.store.list_users().await.unwrap().len(), 4);
    }

    #[tokio::test]
    async fn test_seed_disabled_gives_empty_store() {
        let config = ServerConfig {
            seed: false,
            ..ServerConfig::default()
        };
        let host = ServerBuilder::new().with_config(config).build_host().unwrap();

        assert!(host.store.list_posts().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_explicit_store_wins_over_seed_flag() {
        let config = ServerConfig {
            seed: true,
            ..ServerConfig::default()
        };
        let host = ServerBuilder::new()
            .with_config(config)
            .with_store(InMemoryBlogStore::new())
            .build_host()
            .unwrap();

        assert!(host.store.list_users().await.unwrap().is_empty());
    }

    #[test]
    fn test_build_router() {
        let result = ServerBuilder::new()
            .with_custom_routes(Router::new())
            .build();
        assert!(result.is_ok());
    }
}
