// ============================================================================
// Validation Constraints
// Precision, scale and sign rules a validator is built from
// ============================================================================

use super::errors::{ConstructionError, ValidationResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Numeric constraints applied to every candidate string.
///
/// A `ValidationConstraints` value may hold any numbers; the invariants are
/// checked by [`ValidationConstraints::validate`] and by every validator
/// constructor, so a validator never carries constraints that fail them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ValidationConstraints {
    /// Maximum number of digit positions (integer + fraction, plus an explicit sign)
    pub precision: i64,

    /// Maximum number of digits after the decimal separator
    #[cfg_attr(feature = "serde", serde(default))]
    pub scale: i64,

    /// Reject values written with a leading minus sign
    #[cfg_attr(feature = "serde", serde(default))]
    pub only_positive: bool,
}

impl ValidationConstraints {
    /// Create constraints that allow negative values
    pub fn new(precision: i64, scale: i64) -> Self {
        Self {
            precision,
            scale,
            only_positive: false,
        }
    }

    /// Builder method: Set whether a leading minus sign is rejected
    pub fn only_positive(mut self, only_positive: bool) -> Self {
        self.only_positive = only_positive;
        self
    }

    /// Validate the constraints.
    ///
    /// Rules are checked in order and the first violation is reported:
    /// 1. `precision > 0`
    /// 2. `scale >= 0`
    /// 3. `scale < precision`
    pub fn validate(&self) -> ValidationResult<()> {
        if self.precision <= 0 {
            return Err(ConstructionError::NonPositivePrecision {
                precision: self.precision,
            });
        }

        if self.scale < 0 {
            return Err(ConstructionError::NegativeScale { scale: self.scale });
        }

        if self.scale >= self.precision {
            return Err(ConstructionError::ScaleNotLessThanPrecision {
                precision: self.precision,
                scale: self.scale,
            });
        }

        Ok(())
    }

    /// Parse constraints from a JSON document.
    ///
    /// Only the shape is checked here; invariants are enforced when the
    /// constraints are handed to a validator.
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
