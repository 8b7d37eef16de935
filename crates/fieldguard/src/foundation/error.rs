//! Error types for validation failures
//!
//! Every rejected value produces one [`ValidationError`]. The error carries
//! an [`ErrorKind`] that callers branch on, plus a stable `code`, a
//! human-readable message and ordered parameters describing the constraint
//! that failed.
//!
//! All string fields use `Cow<'static, str>` so static codes and messages
//! do not allocate.

use std::borrow::Cow;
use std::fmt;

use smallvec::SmallVec;

// ============================================================================
// ERROR KIND
// ============================================================================

/// The class of a validation failure.
///
/// The kind and the condition that triggers it are part of the contract;
/// message wording is not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ErrorKind {
    /// The value's type cannot be checked by the rule at all
    /// (not a number, not text, not text or path).
    TypeMismatch,
    /// The value has the right type but breaks a configured bound,
    /// membership, predicate or suffix check.
    Constraint,
    /// The referenced filesystem path does not exist.
    NotFound,
}

impl ErrorKind {
    /// Stable lowercase name, used in logs and JSON output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            ErrorKind::TypeMismatch => "type_mismatch",
            ErrorKind::Constraint => "constraint",
            ErrorKind::NotFound => "not_found",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// VALIDATION ERROR
// ============================================================================

type Params = SmallVec<[(Cow<'static, str>, Cow<'static, str>); 4]>;

/// A structured validation error.
///
/// # Examples
///
/// ```
/// use fieldguard::foundation::{ErrorKind, ValidationError};
///
/// let error = ValidationError::constraint("min", "Expected 3 to be at least 5")
///     .with_field("count")
///     .with_param("min", "5")
///     .with_param("actual", "3");
///
/// assert_eq!(error.kind, ErrorKind::Constraint);
/// assert_eq!(error.param("min"), Some("5"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Failure class.
    pub kind: ErrorKind,

    /// Error code for programmatic handling.
    ///
    /// Examples: "one_of", "min_length", "suffix"
    pub code: Cow<'static, str>,

    /// Human-readable message naming the rejected value.
    pub message: Cow<'static, str>,

    /// Name of the field whose write was rejected, if known.
    pub field: Option<Cow<'static, str>>,

    /// Ordered key-value pairs describing the constraint
    /// (typically 1-3 params).
    pub params: Params,
}

impl ValidationError {
    /// Creates a new validation error.
    pub fn new(
        kind: ErrorKind,
        code: impl Into<Cow<'static, str>>,
        message: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            kind,
            code: code.into(),
            message: message.into(),
            field: None,
            params: SmallVec::new(),
        }
    }

    /// Creates a [`ErrorKind::Constraint`] error.
    pub fn constraint(
        code: impl Into<Cow<'static, str>>,
        message: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self::new(ErrorKind::Constraint, code, message)
    }

    /// Creates a "type_mismatch" error.
    ///
    /// `actual` is the rendered rejected value, `type_name` its type.
    pub fn type_mismatch(
        expected: impl Into<Cow<'static, str>>,
        actual: impl fmt::Display,
        type_name: impl Into<Cow<'static, str>>,
    ) -> Self {
        let expected = expected.into();
        Self::new(
            ErrorKind::TypeMismatch,
            "type_mismatch",
            format!("Expected {actual} to be {expected}"),
        )
        .with_param("expected", expected)
        .with_param("actual", type_name)
    }

    /// Creates a "not_found" error for a missing filesystem path.
    pub fn not_found(path: impl fmt::Display) -> Self {
        let path = path.to_string();
        Self::new(
            ErrorKind::NotFound,
            "not_found",
            format!("Path {path:?} doesn't exist"),
        )
        .with_param("path", path)
    }

    /// Sets the field name for this error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_field(mut self, field: impl Into<Cow<'static, str>>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Adds a parameter to the error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Looks up a parameter value by key.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_ref())
    }

    /// True for [`ErrorKind::TypeMismatch`].
    #[must_use]
    pub fn is_type_mismatch(&self) -> bool {
        self.kind == ErrorKind::TypeMismatch
    }

    /// True for [`ErrorKind::Constraint`].
    #[must_use]
    pub fn is_constraint(&self) -> bool {
        self.kind == ErrorKind::Constraint
    }

    /// True for [`ErrorKind::NotFound`].
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.kind == ErrorKind::NotFound
    }

    /// Converts the error to a JSON structure.
    #[cfg(feature = "serde")]
    pub fn to_json_value(&self) -> serde_json::Value {
        use serde_json::json;

        let params: serde_json::Map<String, serde_json::Value> = self
            .params
            .iter()
            .map(|(k, v)| (k.to_string(), serde_json::Value::String(v.to_string())))
            .collect();

        json!({
            "kind": self.kind.as_str(),
            "code": self.code,
            "message": self.message,
            "field": self.field,
            "params": params,
        })
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(field) = &self.field {
            write!(f, "[{}] {}: {}", field, self.code, self.message)?;
        } else {
            write!(f, "{}: {}", self.code, self.message)?;
        }

        if !self.params.is_empty() {
            write!(f, " (params: [")?;
            for (i, (k, v)) in self.params.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{k}={v}")?;
            }
            write!(f, "])")?;
        }

        Ok(())
    }
}

impl std::error::Error for ValidationError {}

// ============================================================================
// ERROR COLLECTION
// ============================================================================

/// A collection of validation errors.
///
/// Used when several fields are assigned at once and every failure should
/// be reported, not only the first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
}

impl ValidationErrors {
    /// Creates a new empty error collection.
    #[must_use]
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Adds an error to the collection.
    pub fn add(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// Records the error of a failed result, discarding the success value.
    pub fn record<T>(&mut self, result: Result<T, ValidationError>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(error) => {
                self.add(error);
                None
            }
        }
    }

    /// Returns true if there are any errors.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Returns the number of errors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns true if empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns all errors.
    #[must_use]
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Converts to a Result.
    #[must_use = "result must be used"]
    pub fn into_result<T>(self, ok_value: T) -> Result<T, ValidationErrors> {
        if self.is_empty() {
            Ok(ok_value)
        } else {
            Err(self)
        }
    }
}

impl FromIterator<ValidationError> for ValidationErrors {
    fn from_iter<I: IntoIterator<Item = ValidationError>>(iter: I) -> Self {
        Self {
            errors: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for ValidationErrors {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl From<ValidationError> for ValidationErrors {
    fn from(error: ValidationError) -> Self {
        Self {
            errors: vec![error],
        }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Validation failed with {} error(s):", self.errors.len())?;
        for (i, error) in self.errors.iter().enumerate() {
            writeln!(f, "  {}. {}", i + 1, error)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constraint_error() {
        let error = ValidationError::constraint("one_of", "not allowed");
        assert_eq!(error.kind, ErrorKind::Constraint);
        assert_eq!(error.code, "one_of");
        assert!(error.is_constraint());
    }

    #[test]
    fn test_type_mismatch_params() {
        let error = ValidationError::type_mismatch("an int or float", "\"x\"", "text");
        assert!(error.is_type_mismatch());
        assert_eq!(error.param("expected"), Some("an int or float"));
        assert_eq!(error.param("actual"), Some("text"));
        assert_eq!(error.message, "Expected \"x\" to be an int or float");
    }

    #[test]
    fn test_not_found_quotes_path() {
        let error = ValidationError::not_found("missing.py");
        assert!(error.is_not_found());
        assert_eq!(error.param("path"), Some("missing.py"));
        assert_eq!(error.message, "Path \"missing.py\" doesn't exist");
    }

    #[test]
    fn test_display_with_field_and_params() {
        let error = ValidationError::constraint("max", "Expected 200 to be no more than 100")
            .with_field("number")
            .with_param("max", "100");
        assert_eq!(
            error.to_string(),
            "[number] max: Expected 200 to be no more than 100 (params: [max=100])"
        );
    }

    #[test]
    fn test_zero_alloc_static_strings() {
        let error = ValidationError::constraint("predicate", "predicate failed");
        assert!(matches!(error.code, Cow::Borrowed(_)));
        assert!(matches!(error.message, Cow::Borrowed(_)));
    }

    #[test]
    fn test_error_collection() {
        let mut errors = ValidationErrors::new();
        assert_eq!(errors.record(Ok::<_, ValidationError>(1)), Some(1));
        errors.add(ValidationError::constraint("a", "first"));
        errors.record::<()>(Err(ValidationError::not_found("x")));

        assert_eq!(errors.len(), 2);
        assert!(errors.has_errors());
        assert!(errors.clone().into_result(()).is_err());
        assert!(ValidationErrors::new().into_result(7).is_ok());
    }

    #[test]
    fn test_error_collection_conversions() {
        let errors = ValidationErrors::from(ValidationError::constraint("min", "too small"));
        assert_eq!(errors.len(), 1);

        let codes: Vec<_> = errors
            .into_iter()
            .chain([ValidationError::not_found("x")])
            .map(|e| e.code)
            .collect();
        assert_eq!(codes, ["min", "not_found"]);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_to_json_value() {
        let error = ValidationError::constraint("suffix", "bad suffix")
            .with_field("path")
            .with_param("suffixes", "{\".py\"}");
        let json = error.to_json_value();
        assert_eq!(json["kind"], "constraint");
        assert_eq!(json["field"], "path");
        assert_eq!(json["params"]["suffixes"], "{\".py\"}");
    }
}
