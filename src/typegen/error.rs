use crate::metadata::ParseError;
use thiserror::Error;

/// Ways a generation or regeneration request can end without declarations
#[derive(Debug, Error)]
pub enum GenerateError {
    /// No source was given; nothing is written
    #[error("No OData source given")]
    InputCancelled,
    /// The document has no settings header to regenerate from
    #[error("Did not find odata source in document")]
    HeaderNotFound,
    #[error("Failed to fetch metadata: {0:#}")]
    Fetch(anyhow::Error),
    #[error(transparent)]
    Parse(#[from] ParseError),
}
