//! Domain validation errors.

use std::fmt;

/// Errors that can occur while building a canonical phone number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A matched candidate does not reduce to a 10-digit domestic number.
    MalformedCandidate(String),

    /// The provided string is not in `+7(XXX)XXX-XX-XX` form.
    InvalidCanonical(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedCandidate(raw) => write!(f, "Malformed phone candidate: {}", raw),
            Self::InvalidCanonical(value) => {
                write!(f, "Not a canonical phone number: {}", value)
            }
        }
    }
}

impl std::error::Error for ValidationError {}
