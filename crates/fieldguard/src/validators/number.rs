//! Numeric range validator

use crate::foundation::{Number, Validate, ValidationError, Value};

/// Accepts integers and floats within optional inclusive bounds.
///
/// Checks run in order and the first failure is reported:
///
/// 1. the value must be `Int` or `Float` (booleans are not numbers),
/// 2. `value >= min` when a minimum is configured,
/// 3. `value <= max` when a maximum is configured.
///
/// A NaN candidate fails whichever bound is checked first; with no bounds
/// it passes like any other float. A NaN bound orders against nothing, so it
/// constrains nothing: `number_range(f64::NAN, 10)` behaves like
/// `NumberRange::at_most(10)`.
///
/// # Examples
///
/// ```
/// use fieldguard::prelude::*;
///
/// let range = NumberRange::new().min(-100).max(100);
/// assert!(range.check(-100).is_ok());
/// assert!(range.check(99.5).is_ok());
/// assert!(range.check(200).unwrap_err().is_constraint());
/// assert!(range.check("x").unwrap_err().is_type_mismatch());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct NumberRange {
    min: Option<Number>,
    max: Option<Number>,
}

impl NumberRange {
    /// Creates a range with no bounds; every number passes.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Range with only a lower bound.
    #[must_use]
    pub fn at_least(min: impl Into<Number>) -> Self {
        Self::new().min(min)
    }

    /// Range with only an upper bound.
    #[must_use]
    pub fn at_most(max: impl Into<Number>) -> Self {
        Self::new().max(max)
    }

    /// Sets the inclusive lower bound.
    #[must_use = "builder methods must be chained or built"]
    pub fn min(mut self, min: impl Into<Number>) -> Self {
        self.min = Some(min.into());
        self
    }

    /// Sets the inclusive upper bound.
    #[must_use = "builder methods must be chained or built"]
    pub fn max(mut self, max: impl Into<Number>) -> Self {
        self.max = Some(max.into());
        self
    }

    /// The configured lower bound.
    pub fn min_value(&self) -> Option<Number> {
        self.min
    }

    /// The configured upper bound.
    pub fn max_value(&self) -> Option<Number> {
        self.max
    }
}

impl Validate for NumberRange {
    type Input = Value;

    // `!(a >= b)` rather than `a < b` so an unordered NaN fails the bound
    #[allow(clippy::neg_cmp_op_on_partial_ord)]
    fn validate(&self, input: &Value) -> Result<(), ValidationError> {
        let Some(number) = input.as_number() else {
            return Err(ValidationError::type_mismatch(
                "an int or float",
                input,
                input.type_name(),
            ));
        };

        if let Some(min) = self.min.filter(|min| !min.is_nan()) {
            if !(number >= min) {
                return Err(ValidationError::constraint(
                    "min",
                    format!("Expected {number} to be at least {min}"),
                )
                .with_param("min", min.to_string())
                .with_param("actual", number.to_string()));
            }
        }

        if let Some(max) = self.max.filter(|max| !max.is_nan()) {
            if !(number <= max) {
                return Err(ValidationError::constraint(
                    "max",
                    format!("Expected {number} to be no more than {max}"),
                )
                .with_param("max", max.to_string())
                .with_param("actual", number.to_string()));
            }
        }

        Ok(())
    }
}

/// Creates a [`NumberRange`] with both bounds set.
#[must_use]
pub fn number_range(min: impl Into<Number>, max: impl Into<Number>) -> NumberRange {
    NumberRange::new().min(min).max(max)
}

// ============================================================================
// TESTS
// ============================================================================
