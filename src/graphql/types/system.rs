use crate::error::PropertyError;
use crate::graphql::schema::GraphQLContext;
use crate::graphql::types::{JavaInfo, OperatingSystem};
use crate::note::NoteStore;
use crate::properties::PropertySource;
use async_graphql::{Context, FieldResult, Object};

/// Information about a single system.
///
/// A snapshot taken when the `system` query executes; immutable afterwards.
/// The operating-system and runtime details are deliberately not part of
/// the snapshot — they are more expensive to obtain and are resolved only
/// when the caller selects the corresponding field.
pub struct SystemInfo {
    username: Option<String>,
    timezone: Option<String>,
    note: Option<String>,
}

impl SystemInfo {
    /// Capture the ambient environment and the current note.
    pub fn snapshot(properties: &dyn PropertySource, notes: &NoteStore) -> Self {
        Self {
            username: properties.current_user(),
            timezone: properties.current_timezone(),
            note: notes.get(),
        }
    }
}

#[Object]
impl SystemInfo {
    /// Login name of the user running the server process
    async fn username(&self) -> FieldResult<&str> {
        self.username
            .as_deref()
            .ok_or(PropertyError::Missing("user name"))
            .map_err(Into::into)
    }

    /// The server's timezone, if the environment declares one
    async fn timezone(&self) -> Option<&str> {
        self.timezone.as_deref()
    }

    /// The note currently set for the system
    async fn note(&self) -> Option<&str> {
        self.note.as_deref()
    }

    /// Operating system details, re-read from the environment on each call
    async fn operating_system(&self, ctx: &Context<'_>) -> FieldResult<OperatingSystem> {
        let context = ctx.data::<GraphQLContext>()?;
        Ok(OperatingSystem::snapshot(context.properties.as_ref()))
    }

    /// Identity of the runtime hosting the server
    async fn java(&self, ctx: &Context<'_>) -> FieldResult<JavaInfo> {
        let context = ctx.data::<GraphQLContext>()?;
        Ok(JavaInfo::snapshot(context.properties.as_ref()))
    }
}
