use sysinfo::System;

/// Operating system identity as reported by the host at one point in time.
#[derive(Debug, Clone)]
pub struct OsProperties {
    pub name: Option<String>,
    pub version: Option<String>,
    pub architecture: Option<String>,
}

/// Identity of the runtime hosting the server process.
#[derive(Debug, Clone)]
pub struct RuntimeProperties {
    pub vendor: Option<String>,
    pub version: Option<String>,
}

/// Read-only view over the ambient process environment.
///
/// Lookups that the environment does not provide yield `None`; nothing here
/// fails or has side effects. The OS and runtime lookups are kept separate
/// from the user/timezone ones because they are more expensive and are only
/// performed when the corresponding nested field is actually selected.
pub trait PropertySource: Send + Sync {
    fn current_user(&self) -> Option<String>;
    fn current_timezone(&self) -> Option<String>;
    fn operating_system_info(&self) -> OsProperties;
    fn runtime_info(&self) -> RuntimeProperties;
}

/// `PropertySource` backed by the live process environment.
pub struct EnvPropertySource;

impl PropertySource for EnvPropertySource {
    fn current_user(&self) -> Option<String> {
        // USERNAME is the Windows spelling
        std::env::var("USER")
            .or_else(|_| std::env::var("USERNAME"))
            .ok()
    }

    fn current_timezone(&self) -> Option<String> {
        std::env::var("TZ").ok()
    }

    fn operating_system_info(&self) -> OsProperties {
        OsProperties {
            name: System::name(),
            version: System::os_version(),
            architecture: Some(std::env::consts::ARCH.to_string()),
        }
    }

    fn runtime_info(&self) -> RuntimeProperties {
        RuntimeProperties {
            vendor: Some("rust-lang".to_string()),
            version: Some(env!("CARGO_PKG_RUST_VERSION").to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn architecture_is_always_reported() {
        let os = EnvPropertySource.operating_system_info();
        assert!(os.architecture.is_some());
        assert!(!os.architecture.unwrap().is_empty());
    }

    #[test]
    fn runtime_identity_is_always_reported() {
        let runtime = EnvPropertySource.runtime_info();
        assert_eq!(runtime.vendor.as_deref(), Some("rust-lang"));
        assert!(!runtime.version.unwrap().is_empty());
    }
}
