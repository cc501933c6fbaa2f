//! GraphQL schema assembly

use async_graphql::{Context, EmptySubscription, Result, Schema};
use std::sync::Arc;

use super::mutation::MutationRoot;
use super::query::QueryRoot;
use crate::core::service::BlogStore;
use crate::server::host::ServerHost;

/// The executable blog schema
pub type BlogSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Build the schema with the host attached as context data
pub fn build_schema(host: Arc<ServerHost>) -> BlogSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(host)
        .finish()
}

/// Store of the host attached to the schema
pub(crate) fn store<'a>(ctx: &Context<'a>) -> Result<&'a Arc<dyn BlogStore>> {
    Ok(&ctx.data::<Arc<ServerHost>>()?.store)
}
