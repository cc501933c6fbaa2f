//! REST exposure for operational endpoints
//!
//! The blog data itself is only reachable through GraphQL; this router
//! carries the health checks.

use super::super::host::ServerHost;
use anyhow::Result;
use axum::{Json, Router, extract::State, routing::get};
use serde_json::{Value, json};
use std::sync::Arc;

/// REST API exposure implementation
pub struct RestExposure;

impl RestExposure {
    /// Build the REST router from a host
    ///
    /// Returns an Axum router with the health check routes and any custom
    /// routes merged in.
    pub fn build_router(host: Arc<ServerHost>, custom_routes: Vec<Router>) -> Result<Router> {
        let mut app = Self::health_routes(host);

        for custom_router in custom_routes {
            app = app.merge(custom_router);
        }

        Ok(app)
    }

    /// Build health check routes
    fn health_routes(host: Arc<ServerHost>) -> Router {
        Router::new()
            .route("/health", get(Self::health_check))
            .route("/healthz", get(Self::health_check))
            .with_state(host)
    }

    /// Health check endpoint handler
    async fn health_check(State(host): State<Arc<ServerHost>>) -> Json<Value> {
        Json(json!({
            "status": "ok",
            "service": host.service_name()
        }))
    }
}
