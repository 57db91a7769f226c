// ============================================================================
// Validation Errors
// Error types for rejected validator constraints
// ============================================================================

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Errors that can occur while constructing a validator.
///
/// Each variant names exactly one violated invariant, so callers can match on
/// the rule instead of parsing the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ConstructionError {
    /// Precision was zero or negative
    NonPositivePrecision { precision: i64 },
    /// Scale was negative
    NegativeScale { scale: i64 },
    /// Scale was equal to or greater than precision
    ScaleNotLessThanPrecision { precision: i64, scale: i64 },
}

impl fmt::Display for ConstructionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConstructionError::NonPositivePrecision { precision } => {
                write!(f, "precision must be a positive number (got {})", precision)
            },
            ConstructionError::NegativeScale { scale } => write!(
                f,
                "scale must be a non-negative number less or equal than precision (got {})",
                scale
            ),
            ConstructionError::ScaleNotLessThanPrecision { precision, scale } => write!(
                f,
                "scale must be a non-negative number less or equal than precision \
                 (got scale {}, precision {})",
                scale, precision
            ),
        }
    }
}

impl std::error::Error for ConstructionError {}

/// Result type alias for validator construction
pub type ValidationResult<T> = Result<T, ConstructionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            ConstructionError::NonPositivePrecision { precision: 0 }.to_string(),
            "precision must be a positive number (got 0)"
        );
        assert!(ConstructionError::NegativeScale { scale: -1 }
            .to_string()
            .contains("non-negative"));
        assert!(ConstructionError::ScaleNotLessThanPrecision {
            precision: 1,
            scale: 1
        }
        .to_string()
        .contains("less or equal"));
    }

    #[test]
    fn test_messages_are_distinguishable() {
        let precision = ConstructionError::NonPositivePrecision { precision: -3 }.to_string();
        let negative = ConstructionError::NegativeScale { scale: -3 }.to_string();

        assert!(precision.contains("positive"));
        assert!(!precision.contains("non-negative"));
        assert!(!precision.contains("less or equal"));
        assert!(negative.contains("non-negative"));
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(
            ConstructionError::NegativeScale { scale: -1 },
            ConstructionError::NegativeScale { scale: -1 }
        );
        assert_ne!(
            ConstructionError::NegativeScale { scale: -1 },
            ConstructionError::NegativeScale { scale: -2 }
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_error_serializes() {
        let json = serde_json::to_string(&ConstructionError::NegativeScale { scale: -1 }).unwrap();
        assert_eq!(json, r#"{"NegativeScale":{"scale":-1}}"#);
    }
}
