// ============================================================================
// Number Validator
// Classifies decimal strings against precision, scale and sign constraints
// ============================================================================

use super::constraints::ValidationConstraints;
use super::errors::ValidationResult;
use super::grammar::NumberShape;
use std::fmt;

/// Reason an input was classified as invalid.
///
/// This is an ordinary outcome of validation, not an error condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rejection {
    /// Input was absent or empty
    Missing,
    /// Input does not match the number grammar
    Malformed,
    /// Sign and digits need more positions than the precision allows
    PrecisionExceeded { required: usize, allowed: usize },
    /// Fractional part is longer than the scale allows
    ScaleExceeded { required: usize, allowed: usize },
    /// Leading minus sign while only positive values are accepted
    NegativeNotAllowed,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::Missing => write!(f, "no value"),
            Rejection::Malformed => write!(f, "not a decimal number"),
            Rejection::PrecisionExceeded { required, allowed } => write!(
                f,
                "needs {} positions, precision allows {}",
                required, allowed
            ),
            Rejection::ScaleExceeded { required, allowed } => write!(
                f,
                "has {} fractional digits, scale allows {}",
                required, allowed
            ),
            Rejection::NegativeNotAllowed => write!(f, "negative values are not allowed"),
        }
    }
}

/// Validator for decimal number strings.
///
/// Constraints are checked once at construction and never change, so a
/// validator can be copied or shared between threads freely.
///
/// # Example
/// ```
/// use number_validator::prelude::*;
///
/// let validator = NumberValidator::new(5, 2, false)?;
/// assert!(validator.is_valid_number(Some("12,34")));
/// assert!(!validator.is_valid_number(Some("1.234")));
/// assert!(!validator.is_valid_number(None));
/// # Ok::<(), ConstructionError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NumberValidator {
    constraints: ValidationConstraints,
    max_width: usize,
    max_fraction: usize,
}

impl NumberValidator {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Create a validator.
    ///
    /// # Errors
    /// - `NonPositivePrecision` if `precision <= 0`
    /// - `NegativeScale` if `scale < 0`
    /// - `ScaleNotLessThanPrecision` if `scale >= precision`
    pub fn new(precision: i64, scale: i64, only_positive: bool) -> ValidationResult<Self> {
        let constraints = ValidationConstraints::new(precision, scale).only_positive(only_positive);
        Self::from_constraints(constraints)
    }

    /// Create a validator for whole numbers of either sign.
    ///
    /// Equivalent to `new(precision, 0, false)`.
    pub fn with_precision(precision: i64) -> ValidationResult<Self> {
        Self::new(precision, 0, false)
    }

    /// Create a validator from prepared constraints, checking them first.
    pub fn from_constraints(constraints: ValidationConstraints) -> ValidationResult<Self> {
        if let Err(err) = constraints.validate() {
            tracing::debug!(
                precision = constraints.precision,
                scale = constraints.scale,
                "Rejected validator constraints: {}",
                err
            );
            return Err(err);
        }

        // Both are non-negative after validation; saturate on narrow targets
        let max_width = usize::try_from(constraints.precision).unwrap_or(usize::MAX);
        let max_fraction = usize::try_from(constraints.scale).unwrap_or(usize::MAX);

        Ok(Self {
            constraints,
            max_width,
            max_fraction,
        })
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    #[inline]
    pub const fn constraints(&self) -> &ValidationConstraints {
        &self.constraints
    }

    #[inline]
    pub const fn precision(&self) -> i64 {
        self.constraints.precision
    }

    #[inline]
    pub const fn scale(&self) -> i64 {
        self.constraints.scale
    }

    #[inline]
    pub const fn only_positive(&self) -> bool {
        self.constraints.only_positive
    }

    // ========================================================================
    // Validation
    // ========================================================================

    /// Check whether `input` is a valid number under this validator's constraints.
    ///
    /// Absent, empty and malformed input yield `false`; this never panics.
    #[inline]
    pub fn is_valid_number(&self, input: Option<&str>) -> bool {
        self.classify(input).is_ok()
    }

    /// Shorthand for `is_valid_number(Some(input))`.
    #[inline]
    pub fn is_valid(&self, input: &str) -> bool {
        self.is_valid_number(Some(input))
    }

    /// Classify `input`, returning its shape or the first rule it breaks.
    ///
    /// Rules are applied in order: presence, grammar, precision, scale, sign.
    pub fn classify(&self, input: Option<&str>) -> Result<NumberShape, Rejection> {
        let result = self.check(input);
        if let Err(rejection) = &result {
            tracing::trace!(
                input_len = input.map_or(0, str::len),
                input_prefix = ?input.map(preview),
                %rejection,
                "Rejected number"
            );
        }
        result
    }

    fn check(&self, input: Option<&str>) -> Result<NumberShape, Rejection> {
        let input = match input {
            Some(s) if !s.is_empty() => s,
            _ => return Err(Rejection::Missing),
        };

        let shape = NumberShape::scan(input).ok_or(Rejection::Malformed)?;

        if shape.width() > self.max_width {
            return Err(Rejection::PrecisionExceeded {
                required: shape.width(),
                allowed: self.max_width,
            });
        }

        if shape.fraction_digits > self.max_fraction {
            return Err(Rejection::ScaleExceeded {
                required: shape.fraction_digits,
                allowed: self.max_fraction,
            });
        }

        if self.constraints.only_positive && shape.is_negative() {
            return Err(Rejection::NegativeNotAllowed);
        }

        Ok(shape)
    }
}

/// Characters of a rejected input kept in trace output
const PREVIEW_CHARS: usize = 32;

/// Leading `PREVIEW_CHARS` characters of `input`, cut on a char boundary
fn preview(input: &str) -> &str {
    match input.char_indices().nth(PREVIEW_CHARS) {
        Some((end, _)) => &input[..end],
        None => input,
    }
}

// ============================================================================
// Tests
// ============================================================================
