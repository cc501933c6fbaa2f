//! Server module for building the HTTP server
//!
//! This module provides a `ServerBuilder` that assembles:
//! - The GraphQL endpoint, schema export and playground
//! - Health check routes

pub mod builder;
pub mod exposure;
pub mod host;

pub use builder::ServerBuilder;
pub use exposure::{GraphQLExposure, RestExposure};
pub use host::ServerHost;
