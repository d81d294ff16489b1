pub mod error;
pub mod graphql;
pub mod logging;
pub mod note;
pub mod properties;
pub mod server;
