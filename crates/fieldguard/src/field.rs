//! Validated fields
//!
//! A [`FieldRule`] binds one rule to one named field of a containing type.
//! It is created once per field, typically in a `static`, and hands out
//! [`ValidatedField`] slots to every instance. Each slot shares the rule and
//! owns its own backing value:
//!
//! - [`ValidatedField::get`] returns the stored value as is,
//! - [`ValidatedField::set`] validates first and stores only on success,
//!   so a rejected write leaves the previous value in place.
//!
//! # Examples
//!
//! ```
//! use std::sync::LazyLock;
//! use fieldguard::prelude::*;
//!
//! static NUMBER: LazyLock<FieldRule<NumberRange>> =
//!     LazyLock::new(|| FieldRule::new("number", number_range(-100, 100)));
//!
//! struct Gauge {
//!     number: ValidatedField<NumberRange>,
//! }
//!
//! impl Gauge {
//!     fn new(number: impl Into<Value>) -> Result<Self, ValidationError> {
//!         Ok(Self { number: NUMBER.init(number)? })
//!     }
//! }
//!
//! let mut gauge = Gauge::new(50).unwrap();
//! assert!(gauge.number.set(200).is_err());
//! assert_eq!(gauge.number.get(), Some(&Value::from(50)));
//! ```

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use crate::foundation::{Validate, ValidationError};

// ============================================================================
// FIELD RULE
// ============================================================================

/// A rule bound to a field name, shared by every instance of a type.
pub struct FieldRule<R> {
    name: Cow<'static, str>,
    rule: Arc<R>,
}

impl<R> FieldRule<R> {
    /// Binds `rule` to the field called `name`.
    pub fn new(name: impl Into<Cow<'static, str>>, rule: R) -> Self {
        Self::shared(name, Arc::new(rule))
    }

    /// Binds an already shared rule.
    pub fn shared(name: impl Into<Cow<'static, str>>, rule: Arc<R>) -> Self {
        Self {
            name: name.into(),
            rule,
        }
    }

    /// The field name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The bound rule.
    pub fn rule(&self) -> &R {
        &self.rule
    }
}

impl<R> FieldRule<R>
where
    R: Validate,
    R::Input: Sized,
{
    /// An unset slot for a new instance.
    pub fn empty(&self) -> ValidatedField<R> {
        ValidatedField {
            name: self.name.clone(),
            rule: Arc::clone(&self.rule),
            value: None,
        }
    }

    /// A slot holding `value`, validated the same way as a later
    /// [`ValidatedField::set`].
    pub fn init(&self, value: impl Into<R::Input>) -> Result<ValidatedField<R>, ValidationError> {
        let mut field = self.empty();
        field.set(value)?;
        Ok(field)
    }
}

// Clone impl - manual because R need not be Clone
impl<R> Clone for FieldRule<R> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            rule: Arc::clone(&self.rule),
        }
    }
}

impl<R: fmt::Debug> fmt::Debug for FieldRule<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldRule")
            .field("name", &self.name)
            .field("rule", &self.rule)
            .finish()
    }
}

// ============================================================================
// VALIDATED FIELD
// ============================================================================

/// One instance's slot for a validated field.
pub struct ValidatedField<R>
where
    R: Validate,
    R::Input: Sized,
{
    name: Cow<'static, str>,
    rule: Arc<R>,
    value: Option<R::Input>,
}

impl<R> ValidatedField<R>
where
    R: Validate,
    R::Input: Sized,
{
    /// The stored value, or `None` if nothing was assigned yet.
    ///
    /// Reading does not re-run validation.
    #[inline]
    pub fn get(&self) -> Option<&R::Input> {
        self.value.as_ref()
    }

    /// Validates `value` and stores it.
    ///
    /// On failure the error is tagged with the field name and the
    /// previously stored value is kept.
    pub fn set(&mut self, value: impl Into<R::Input>) -> Result<(), ValidationError> {
        let value = value.into();
        match self.rule.validate(&value) {
            Ok(()) => {
                tracing::trace!(field = %self.name, "accepted write");
                self.value = Some(value);
                Ok(())
            }
            Err(error) => {
                tracing::debug!(
                    field = %self.name,
                    code = %error.code,
                    kind = %error.kind,
                    "rejected write"
                );
                Err(error.with_field(self.name.clone()))
            }
        }
    }

    /// Returns true once a value has been stored.
    pub fn is_set(&self) -> bool {
        self.value.is_some()
    }

    /// The field name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The shared rule.
    pub fn rule(&self) -> &Arc<R> {
        &self.rule
    }

    /// Consumes the slot, returning the stored value.
    pub fn into_inner(self) -> Option<R::Input> {
        self.value
    }
}

impl<R> Clone for ValidatedField<R>
where
    R: Validate,
    R::Input: Clone,
{
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            rule: Arc::clone(&self.rule),
            value: self.value.clone(),
        }
    }
}

impl<R> fmt::Debug for ValidatedField<R>
where
    R: Validate,
    R::Input: Sized + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidatedField")
            .field("name", &self.name)
            .field("value", &self.value)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// TESTS
// ============================================================================
