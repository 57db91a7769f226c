// ============================================================================
// Number Validator Library
// Structural validation of decimal strings against precision and scale rules
// ============================================================================

//! # Number Validator
//!
//! Checks whether a string is a decimal number that fits a column-style
//! `(precision, scale)` definition, optionally rejecting negative values.
//!
//! ## Features
//!
//! - **Construction-time checking**: invalid constraints never produce a validator
//! - **Total classification**: absent, empty or malformed input is simply `false`
//! - **Either separator**: `.` and `,` are accepted interchangeably
//! - **Thread-safe**: validators are immutable `Copy` values
//! - **Diagnostics**: [`NumberValidator::classify`](validation::NumberValidator::classify)
//!   reports which rule an input broke
//!
//! ## Example
//!
//! ```rust
//! use number_validator::prelude::*;
//!
//! // Up to 5 positions, at most 2 after the separator, negatives rejected
//! let validator = NumberValidator::new(5, 2, true).unwrap();
//!
//! assert!(validator.is_valid_number(Some("123.45")));
//! assert!(validator.is_valid_number(Some("12,34")));
//! assert!(!validator.is_valid_number(Some("-1.5")));
//! assert!(!validator.is_valid_number(Some("1.234")));
//! assert!(!validator.is_valid_number(None));
//!
//! // Constraints are checked once, up front
//! let err = NumberValidator::new(2, 2, false).unwrap_err();
//! assert!(err.to_string().contains("less or equal"));
//! ```

#[cfg(feature = "logging")]
pub mod utils;
pub mod validation;

// Re-exports for convenience
pub mod prelude {
    pub use crate::validation::{
        ConstructionError, NumberShape, NumberValidator, Rejection, Separator, Sign,
        ValidationConstraints, ValidationResult,
    };
}

#[cfg(test)]
mod integration_tests {
    use super::prelude::*;
    use std::sync::Arc;

    #[test]
    fn test_end_to_end_validation() {
        let constraints = ValidationConstraints::new(6, 2).only_positive(true);
        let validator = NumberValidator::from_constraints(constraints).unwrap();

        let inputs = [
            (Some("1234.56"), true),
            (Some("+123.4"), true),
            (Some("0,01"), true),
            (Some("-1"), false),
            (Some("12345.67"), false),
            (Some("1.234"), false),
            (Some("1.2a"), false),
            (Some(""), false),
            (None, false),
        ];

        for (input, expected) in inputs {
            assert_eq!(
                validator.is_valid_number(input),
                expected,
                "input {:?}",
                input
            );
        }
    }

    #[test]
    fn test_shared_across_threads() {
        let validator = Arc::new(NumberValidator::new(10, 4, false).unwrap());

        crossbeam::scope(|scope| {
            for _ in 0..8 {
                let validator = Arc::clone(&validator);
                scope.spawn(move |_| {
                    for _ in 0..1_000 {
                        assert!(validator.is_valid("-12345.6789"));
                        assert!(!validator.is_valid("1.23456"));
                        assert!(!validator.is_valid_number(None));
                    }
                });
            }
        })
        .unwrap();
    }
}
