//! Server host for transport-agnostic API exposure
//!
//! `ServerHost` bundles the state every exposure needs: the blog store and
//! the server configuration. The GraphQL schema receives it as context data,
//! and the health routes read the service name from it.

use crate::config::ServerConfig;
use crate::core::service::BlogStore;
use std::sync::Arc;

/// Service name reported by the health routes
pub const SERVICE_NAME: &str = "blog-graphql";

/// Host context containing all application state
pub struct ServerHost {
    /// Server configuration
    pub config: Arc<ServerConfig>,

    /// Store holding users, posts and comments
    pub store: Arc<dyn BlogStore>,
}

impl ServerHost {
    /// Build the host from its components
    pub fn new(config: ServerConfig, store: Arc<dyn BlogStore>) -> Self {
        Self {
            config: Arc::new(config),
            store,
        }
    }

    /// Name reported by the health routes
    pub fn service_name(&self) -> &'static str {
        SERVICE_NAME
    }
}
