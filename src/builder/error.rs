//! Errors raised while defining validators.

use crate::core::PropertyError;
use thiserror::Error;

/// Configuration mistakes detected when a validator is defined, before any
/// entity is validated.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error(transparent)]
    Property(#[from] PropertyError),

    #[error("Invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}
