//! Core traits for the validation system
//!
//! This module defines the trait every validation rule implements.

use std::sync::Arc;

use crate::foundation::ValidationError;

// ============================================================================
// CORE VALIDATOR TRAIT
// ============================================================================

/// The trait that all validation rules implement.
///
/// A rule is configured once at construction and then only answers one
/// question: is this value acceptable? `validate` never mutates the rule or
/// the candidate, so calling it twice on the same value (and the same
/// filesystem state) gives the same answer.
///
/// # Type Parameters
///
/// * `Input` - The type being validated (can be `?Sized` for DSTs like `str`)
///
/// # Examples
///
/// ```
/// use fieldguard::foundation::{Validate, ValidationError};
///
/// struct Even;
///
/// impl Validate for Even {
///     type Input = i64;
///
///     fn validate(&self, input: &i64) -> Result<(), ValidationError> {
///         if input % 2 == 0 {
///             Ok(())
///         } else {
///             Err(ValidationError::constraint("even", format!("Expected {input} to be even")))
///         }
///     }
/// }
///
/// assert!(Even.validate(&4).is_ok());
/// assert!(Even.check(3_i64).is_err());
/// ```
pub trait Validate {
    /// The type of input being validated.
    type Input: ?Sized;

    /// Validates the input value.
    ///
    /// # Returns
    ///
    /// * `Ok(())` if validation succeeds
    /// * `Err(ValidationError)` describing the first failing check
    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError>;

    /// Validates anything convertible into `Self::Input`.
    ///
    /// Saves callers from building a [`Value`](crate::foundation::Value)
    /// by hand: `rule.check(4)`, `rule.check("a")`.
    fn check<S>(&self, value: S) -> Result<(), ValidationError>
    where
        Self: Sized,
        S: Into<Self::Input>,
        Self::Input: Sized,
    {
        self.validate(&value.into())
    }
}

impl<V: Validate + ?Sized> Validate for &V {
    type Input = V::Input;

    #[inline]
    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        (**self).validate(input)
    }
}

impl<V: Validate + ?Sized> Validate for Box<V> {
    type Input = V::Input;

    #[inline]
    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        (**self).validate(input)
    }
}

impl<V: Validate + ?Sized> Validate for Arc<V> {
    type Input = V::Input;

    #[inline]
    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        (**self).validate(input)
    }
}

/// A type-erased rule over [`Value`](crate::foundation::Value).
pub type DynValidate = dyn Validate<Input = crate::foundation::Value> + Send + Sync;

// ============================================================================
// TESTS
// ============================================================================
