// ============================================================================
// Validation Module
// Structural validation of decimal number strings
// ============================================================================
//
// This module provides:
// - NumberValidator: immutable validator built from precision/scale/sign rules
// - ValidationConstraints: the rules, checkable on their own
// - NumberShape: single-pass scan of the number grammar
// - ConstructionError / Rejection: why a validator or an input was refused
//
// Design principles:
// - Invalid constraints never produce a validator
// - Invalid input is a `false` answer, never a panic
// - No allocation on the validation path

mod constraints;
mod errors;
mod grammar;
mod number_validator;

pub use constraints::ValidationConstraints;
pub use errors::{ConstructionError, ValidationResult};
pub use grammar::{NumberShape, Separator, Sign};
pub use number_validator::{NumberValidator, Rejection};
