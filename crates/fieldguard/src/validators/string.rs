//! String shape validator
//!
//! Length is measured in Unicode scalar values (chars) by default.
//! Use [`StringShape::bytes`] for byte-length counting when the input is
//! known to be ASCII or a storage limit is expressed in bytes.

use crate::foundation::{Predicate, Validate, ValidationError, Value};

// ============================================================================
// LENGTH MODE
// ============================================================================

/// How to count string length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LengthMode {
    /// Count bytes (fastest, ASCII-only correct).
    Bytes,
    /// Count Unicode scalar values (correct for all text).
    #[default]
    Chars,
}

impl LengthMode {
    /// Measures the length of a string according to this mode.
    #[inline]
    pub fn measure(self, input: &str) -> usize {
        match self {
            LengthMode::Bytes => input.len(),
            LengthMode::Chars => input.chars().count(),
        }
    }
}

// ============================================================================
// STRING SHAPE
// ============================================================================

/// Accepts text with optional length bounds and an optional predicate.
///
/// Checks run in order and the first failure is reported:
///
/// 1. the value must be `Text`,
/// 2. `len >= min_length` when configured,
/// 3. `len <= max_length` when configured,
/// 4. the predicate must return `true` when configured.
///
/// # Examples
///
/// ```
/// use fieldguard::prelude::*;
///
/// let shape = StringShape::new()
///     .min_length(2)
///     .max_length(6)
///     .predicate_named("is_lowercase", |s: &str| !s.chars().any(char::is_uppercase));
///
/// assert!(shape.check("abc").is_ok());
/// assert!(shape.check("ABCDEF").unwrap_err().is_constraint());
/// assert!(shape.check("a").unwrap_err().is_constraint());
/// assert!(shape.check(123).unwrap_err().is_type_mismatch());
/// ```
#[derive(Debug, Clone, Default)]
pub struct StringShape {
    min_length: Option<usize>,
    max_length: Option<usize>,
    predicate: Option<Predicate<str>>,
    mode: LengthMode,
}

impl StringShape {
    /// Creates a shape with no constraints; any text passes.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the inclusive minimum length.
    #[must_use = "builder methods must be chained or built"]
    pub fn min_length(mut self, min: usize) -> Self {
        self.min_length = Some(min);
        self
    }

    /// Sets the inclusive maximum length.
    #[must_use = "builder methods must be chained or built"]
    pub fn max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    /// Requires `test` to return `true`.
    #[must_use = "builder methods must be chained or built"]
    pub fn predicate<F>(mut self, test: F) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        self.predicate = Some(Predicate::new(test));
        self
    }

    /// Requires `test` to return `true`; `label` names it in errors.
    #[must_use = "builder methods must be chained or built"]
    pub fn predicate_named<F>(mut self, label: &str, test: F) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        self.predicate = Some(Predicate::named(label, test));
        self
    }

    /// Counts length in bytes instead of chars.
    #[must_use = "builder methods must be chained or built"]
    pub fn bytes(mut self) -> Self {
        self.mode = LengthMode::Bytes;
        self
    }

    /// The length counting mode.
    pub fn mode(&self) -> LengthMode {
        self.mode
    }

    /// Runs the length and predicate checks on text.
    pub fn validate_str(&self, input: &str) -> Result<(), ValidationError> {
        let length = self.mode.measure(input);

        if let Some(min) = self.min_length {
            if length < min {
                return Err(ValidationError::constraint(
                    "min_length",
                    format!("Expected {input:?} to be no smaller than {min}"),
                )
                .with_param("min", min.to_string())
                .with_param("actual", length.to_string()));
            }
        }

        if let Some(max) = self.max_length {
            if length > max {
                return Err(ValidationError::constraint(
                    "max_length",
                    format!("Expected {input:?} to be no bigger than {max}"),
                )
                .with_param("max", max.to_string())
                .with_param("actual", length.to_string()));
            }
        }

        if let Some(predicate) = &self.predicate {
            if !predicate.test(input) {
                return Err(ValidationError::constraint(
                    "predicate",
                    format!("Expected {} to be true for {input:?}", predicate.label()),
                )
                .with_param("predicate", predicate.label().to_owned()));
            }
        }

        Ok(())
    }
}

impl Validate for StringShape {
    type Input = Value;

    fn validate(&self, input: &Value) -> Result<(), ValidationError> {
        match input.as_text() {
            Some(text) => self.validate_str(text),
            None => Err(ValidationError::type_mismatch(
                "a str",
                input,
                input.type_name(),
            )),
        }
    }
}

/// Creates an unconstrained [`StringShape`], ready for builder calls.
#[must_use]
pub fn string_shape() -> StringShape {
    StringShape::new()
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn lowercase(s: &str) -> bool {
        !s.chars().any(char::is_uppercase)
    }

    fn shape() -> StringShape {
        StringShape::new()
            .min_length(2)
            .max_length(6)
            .predicate_named("is_lowercase", lowercase)
    }

    #[rstest]
    #[case::too_long("abcdefghi", "max_length")]
    #[case::too_short("a", "min_length")]
    #[case::predicate("ABCDEF", "predicate")]
    fn test_constraint_failures(#[case] input: &str, #[case] code: &str) {
        let err = shape().check(input).unwrap_err();
        assert!(err.is_constraint());
        assert_eq!(err.code, code);
    }

    #[rstest]
    #[case(Value::from(123))]
    #[case(Value::from(5.5))]
    #[case(Value::from(std::path::Path::new("abc")))]
    fn test_non_text_is_type_mismatch(#[case] input: Value) {
        assert!(shape().validate(&input).unwrap_err().is_type_mismatch());
    }

    #[test]
    fn test_bounds_are_inclusive() {
        assert!(shape().check("ab").is_ok());
        assert!(shape().check("abcdef").is_ok());
    }

    #[test]
    fn test_length_checked_before_predicate() {
        let err = shape().check("A").unwrap_err();
        assert_eq!(err.code, "min_length");
    }

    #[test]
    fn test_no_constraints() {
        assert!(string_shape().check("").is_ok());
        assert!(string_shape().check("ANYTHING at all").is_ok());
    }

    #[test]
    fn test_char_and_byte_length() {
        let chars = StringShape::new().max_length(3);
        let bytes = StringShape::new().max_length(3).bytes();
        assert!(chars.check("日本語").is_ok());
        assert!(bytes.check("日本語").is_err());
        assert_eq!(bytes.mode(), LengthMode::Bytes);
    }

    #[test]
    fn test_predicate_error_names_predicate() {
        let err = shape().check("ABC").unwrap_err();
        assert_eq!(err.param("predicate"), Some("is_lowercase"));
        assert_eq!(err.message, "Expected is_lowercase to be true for \"ABC\"");
    }
}
