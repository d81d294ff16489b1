use thiserror::Error;

#[derive(Error, Debug)]
pub enum PropertyError {
    /// A field the schema declares non-null has no value in the
    /// environment. Surfaced as a field-resolution error; sibling fields
    /// in the same response still resolve.
    #[error("environment does not provide a value for {0}")]
    Missing(&'static str),
}
