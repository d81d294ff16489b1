use crate::error::PropertyError;
use crate::properties::PropertySource;
use async_graphql::{FieldResult, Object};

/// Runtime identity for a system, snapshotted at resolution time.
///
/// The field keeps the `java`/`vendor`/`version` names the published
/// schema contract requires; the values describe whatever runtime is
/// actually hosting the server.
pub struct JavaInfo {
    vendor: Option<String>,
    version: Option<String>,
}

impl JavaInfo {
    pub fn snapshot(properties: &dyn PropertySource) -> Self {
        let runtime = properties.runtime_info();
        Self {
            vendor: runtime.vendor,
            version: runtime.version,
        }
    }
}

#[Object]
impl JavaInfo {
    /// Vendor of the hosting runtime
    async fn vendor(&self) -> FieldResult<&str> {
        self.vendor
            .as_deref()
            .ok_or(PropertyError::Missing("runtime vendor"))
            .map_err(Into::into)
    }

    /// Version of the hosting runtime
    async fn version(&self) -> FieldResult<&str> {
        self.version
            .as_deref()
            .ok_or(PropertyError::Missing("runtime version"))
            .map_err(Into::into)
    }
}
