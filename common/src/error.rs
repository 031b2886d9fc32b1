//! # Expansion Errors
//!
//! Everything that can go wrong while turning a host expression into hosts.
//! None of these are transient: the same input always fails the same way.

use thiserror::Error;

/// Why a single host expression could not be expanded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExpandError {
    /// The bracket syntax is broken (unbalanced, nested or empty).
    #[error("malformed expression: {reason}")]
    MalformedExpression { reason: &'static str },

    /// A comma-separated element is neither `N` nor `LO-HI` with decimal digits.
    #[error("invalid token '{token}': {reason}")]
    InvalidToken { token: String, reason: &'static str },

    /// A range whose low bound is above its high bound.
    #[error("reversed range '{lo}-{hi}': descending ranges are not supported")]
    ReversedRange { lo: String, hi: String },

    /// Strict mode only: a bracket-less expression that does not end in a number.
    #[error("no host number found (strict mode requires every host to end in a number)")]
    MissingNumber,
}

impl ExpandError {
    pub fn malformed(reason: &'static str) -> Self {
        Self::MalformedExpression { reason }
    }
}

/// An [`ExpandError`] tagged with the raw expression that caused it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("'{expression}': {source}")]
pub struct HostError {
    pub expression: String,
    #[source]
    pub source: ExpandError,
}

impl HostError {
    pub fn new(expression: impl Into<String>, source: ExpandError) -> Self {
        Self {
            expression: expression.into(),
            source,
        }
    }
}
