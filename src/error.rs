//! Error types.
//!
//! Measure and layout cannot fail. The only fallible surface is reading
//! layout parameters and container props out of markup attributes.

use thiserror::Error;

/// Failure while reading markup attributes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AttributeError {
    /// A required attribute was not supplied.
    #[error("you must supply a `{0}` attribute")]
    Missing(&'static str),

    /// The value is not a number with a known unit.
    #[error("invalid dimension `{value}` for attribute `{name}`")]
    InvalidDimension { name: String, value: String },

    /// The value is neither a size keyword nor a non-negative dimension.
    #[error("invalid size `{value}` for attribute `{name}`, expected match_parent, wrap_content or a dimension")]
    InvalidSizeRequest { name: String, value: String },

    /// The markup text could not be split into `name="value"` pairs.
    #[error("malformed attribute markup near `{0}`")]
    Malformed(String),
}

/// Result alias for attribute parsing.
pub type Result<T> = std::result::Result<T, AttributeError>;
