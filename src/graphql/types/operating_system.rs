use crate::error::PropertyError;
use crate::properties::PropertySource;
use async_graphql::{FieldResult, Object};

/// Operating system details for a system, snapshotted at resolution time.
pub struct OperatingSystem {
    name: Option<String>,
    version: Option<String>,
    architecture: Option<String>,
}

impl OperatingSystem {
    pub fn snapshot(properties: &dyn PropertySource) -> Self {
        let os = properties.operating_system_info();
        Self {
            name: os.name,
            version: os.version,
            architecture: os.architecture,
        }
    }
}

#[Object]
impl OperatingSystem {
    /// Name of the operating system
    async fn name(&self) -> FieldResult<&str> {
        self.name
            .as_deref()
            .ok_or(PropertyError::Missing("operating system name"))
            .map_err(Into::into)
    }

    /// Operating system version
    async fn version(&self) -> FieldResult<&str> {
        self.version
            .as_deref()
            .ok_or(PropertyError::Missing("operating system version"))
            .map_err(Into::into)
    }

    /// Processor architecture the server runs on
    async fn architecture(&self) -> FieldResult<&str> {
        self.architecture
            .as_deref()
            .ok_or(PropertyError::Missing("processor architecture"))
            .map_err(Into::into)
    }
}
