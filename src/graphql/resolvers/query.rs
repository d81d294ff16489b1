use crate::graphql::schema::GraphQLContext;
use crate::graphql::types::SystemInfo;
use async_graphql::{Context, FieldResult, Object};

/// Root query object for GraphQL
pub struct Query;

#[Object]
impl Query {
    /// Gets information about the system
    async fn system(&self, ctx: &Context<'_>) -> FieldResult<SystemInfo> {
        let context = ctx.data::<GraphQLContext>()?;
        Ok(SystemInfo::snapshot(
            context.properties.as_ref(),
            &context.notes,
        ))
    }
}
