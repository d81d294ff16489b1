pub mod java;
pub mod operating_system;
pub mod system;

pub use java::JavaInfo;
pub use operating_system::OperatingSystem;
pub use system::SystemInfo;
