use crate::graphql::resolvers::{Mutation, Query};
use crate::note::NoteStore;
use crate::properties::PropertySource;
use async_graphql::{EmptySubscription, Schema};
use std::sync::Arc;

/// GraphQL context containing shared application state
pub struct GraphQLContext {
    pub properties: Arc<dyn PropertySource>,
    pub notes: NoteStore,
}

/// The complete GraphQL schema
pub type GraphQLSchema = Schema<Query, Mutation, EmptySubscription>;

/// Create a new GraphQL schema with the given property source and note store
pub fn create_schema(properties: Arc<dyn PropertySource>, notes: NoteStore) -> GraphQLSchema {
    Schema::build(Query, Mutation, EmptySubscription)
        .data(GraphQLContext { properties, notes })
        .finish()
}
