//! Error types for money-mask
//!
//! Only construction of a formatter can fail. Every per-edit operation is total.

use thiserror::Error;

/// Errors raised while building a [`FormatConfig`](crate::FormatConfig)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// The decimal separator and the thousand separator are the same character
    #[error("invalid configuration: decimal and thousand separator are both '{separator}'")]
    InvalidConfiguration { separator: char },
    /// A configuration key has the wrong type or shape
    #[error("invalid value for `{field}`: {reason}")]
    InvalidField { field: &'static str, reason: String },
    /// The configuration document could not be parsed
    #[error("error parsing configuration: {0}")]
    Parse(String),
}

pub type Result<T> = std::result::Result<T, FormatError>;
