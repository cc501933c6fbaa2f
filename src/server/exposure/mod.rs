//! API exposure modules
//!
//! Each exposure consumes a `ServerHost` and produces a Router for its protocol.

pub mod graphql;
pub mod rest;

pub use graphql::GraphQLExposure;
pub use rest::RestExposure;
