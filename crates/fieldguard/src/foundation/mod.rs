//! Core validation types and traits
//!
//! This module contains the building blocks every rule is written against:
//!
//! - **Traits**: [`Validate`]
//! - **Values**: [`Value`], [`Number`]
//! - **Predicates**: [`Predicate`]
//! - **Errors**: [`ValidationError`], [`ErrorKind`], [`ValidationErrors`]
//!
//! # Error kinds
//!
//! Every failure falls in one of three classes:
//!
//! ```
//! use fieldguard::prelude::*;
//!
//! let range = number_range(-100, 100);
//! assert_eq!(range.check("x").unwrap_err().kind, ErrorKind::TypeMismatch);
//! assert_eq!(range.check(200).unwrap_err().kind, ErrorKind::Constraint);
//!
//! let path = PathShape::new();
//! assert_eq!(path.check("no/such/file").unwrap_err().kind, ErrorKind::NotFound);
//! ```

pub mod error;
pub mod predicate;
pub mod traits;
pub mod value;

pub use error::{ErrorKind, ValidationError, ValidationErrors};
pub use predicate::Predicate;
pub use traits::{DynValidate, Validate};
pub use value::{Number, Value};

// ============================================================================
// UTILITIES
// ============================================================================

/// Validates a value with several rules, reporting every failure.
///
/// # Examples
///
/// ```
/// use fieldguard::foundation::{DynValidate, Value, validate_all};
/// use fieldguard::validators::{number_range, one_of};
///
/// let small = number_range(0, 10);
/// let listed = one_of([1, 2, 3]);
/// let rules: [&DynValidate; 2] = [&small, &listed];
///
/// assert!(validate_all(&Value::from(2), &rules).is_ok());
/// assert_eq!(validate_all(&Value::from(20), &rules).unwrap_err().len(), 2);
/// ```
pub fn validate_all<V>(value: &V::Input, validators: &[&V]) -> Result<(), ValidationErrors>
where
    V: Validate + ?Sized,
{
    validators
        .iter()
        .filter_map(|validator| validator.validate(value).err())
        .collect::<ValidationErrors>()
        .into_result(())
}

/// Validates a value with several rules; at least one must pass.
///
/// On failure every rule's error is returned.
pub fn validate_any<V>(value: &V::Input, validators: &[&V]) -> Result<(), ValidationErrors>
where
    V: Validate + ?Sized,
{
    let mut errors = ValidationErrors::new();

    for validator in validators {
        match validator.validate(value) {
            Ok(()) => return Ok(()),
            Err(e) => errors.add(e),
        }
    }

    Err(errors)
}

// ============================================================================
// TESTS
// ============================================================================
