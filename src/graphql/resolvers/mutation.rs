use crate::graphql::schema::GraphQLContext;
use async_graphql::{Context, FieldResult, Object};

/// Root mutation object for GraphQL
pub struct Mutation;

#[Object]
impl Mutation {
    /// Changes the note set for the system
    async fn edit_note(&self, ctx: &Context<'_>, note: String) -> FieldResult<bool> {
        let context = ctx.data::<GraphQLContext>()?;
        context.notes.set(note);
        tracing::info!("Updated system note");
        Ok(true)
    }
}
