//! Error types for color construction.
//!
//! Every failure is synchronous and shape-related: text that matches no
//! grammar, a channel map whose key set fits no model, or an unknown model
//! name. Out-of-range *values* are never errors — they are silently clamped
//! by the channel limiters.

use thiserror::Error;

/// Result type alias using [`ColorError`] as the error type.
pub type Result<T> = std::result::Result<T, ColorError>;

/// Errors that can occur while constructing a color.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// Input text matched none of the recognized CSS notations.
    #[error("unable to parse color from string: {0}")]
    UnparseableString(String),

    /// A channel map whose sorted key set matches no model signature.
    #[error("unable to parse color from object: {0}")]
    UnparseableMap(String),

    /// An explicit model name that is neither known nor skip-listed.
    #[error("unknown model: {0}")]
    UnknownModel(String),
}
