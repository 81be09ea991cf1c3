//! Error types for the web shell core.

use std::fmt;

/// Errors reported by a viewport host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewportError {
    /// The host rejected the attribute write.
    AttributeRejected { reason: String },
}

impl fmt::Display for ViewportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AttributeRejected { reason } => {
                write!(f, "viewport meta update rejected: {reason}")
            }
        }
    }
}

impl std::error::Error for ViewportError {}
