//! Error types for view generation.

use thiserror::Error;

/// Result type alias for conversion operations.
pub type Result<T> = std::result::Result<T, ConvertError>;

/// Errors that can occur during conversion.
///
/// Data-shape anomalies (unknown controls, ambiguous names, children under
/// self-closing controls) are never errors; they degrade the output instead.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConvertError {
    /// A single root was requested from an empty node list.
    #[error("Cannot build a tree from an empty selection")]
    EmptySelection,

    /// Input handed over by the host could not be decoded.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ConvertError::EmptySelection.to_string(),
            "Cannot build a tree from an empty selection"
        );
        assert_eq!(
            ConvertError::InvalidInput("missing name".into()).to_string(),
            "Invalid input: missing name"
        );
    }
}
