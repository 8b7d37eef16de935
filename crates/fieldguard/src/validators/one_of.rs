//! Membership validator

use std::fmt;
use std::hash::Hash;

use indexmap::IndexSet;

use crate::foundation::{Validate, ValidationError, Value};

/// Accepts a value only if it is one of a fixed set of options.
///
/// Options keep their first insertion order (error messages are stable) and
/// duplicates collapse. Membership uses `T`'s `Hash` + `Eq`; for [`Value`]
/// that means `1` and `1.0` are the same option while `true` is not `1`.
///
/// # Examples
///
/// ```
/// use fieldguard::prelude::*;
///
/// let kind = one_of(["wood", "metal", "plastic"]);
/// assert!(kind.check("wood").is_ok());
/// assert!(kind.check("aluminum").is_err());
/// assert!(kind.check(5.5).is_err());
///
/// // typed options work too
/// let typed: OneOf<char> = OneOf::new(['a', 'b']);
/// assert!(typed.validate(&'a').is_ok());
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct OneOf<T = Value>
where
    T: Hash + Eq,
{
    options: IndexSet<T>,
}

impl<T> OneOf<T>
where
    T: Hash + Eq,
{
    /// Creates a membership validator from any collection of options.
    pub fn new<I>(options: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<T>,
    {
        Self {
            options: options.into_iter().map(Into::into).collect(),
        }
    }

    /// The acceptable values, in first-insertion order.
    pub fn options(&self) -> &IndexSet<T> {
        &self.options
    }

    /// Returns true if `value` is an acceptable option.
    pub fn contains(&self, value: &T) -> bool {
        self.options.contains(value)
    }

    /// Number of distinct options.
    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// Returns true if no option is configured; every value is rejected.
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}

impl<T> Validate for OneOf<T>
where
    T: Hash + Eq + fmt::Debug,
{
    type Input = T;

    fn validate(&self, input: &T) -> Result<(), ValidationError> {
        if self.options.contains(input) {
            return Ok(());
        }
        let options = format!("{:?}", self.options);
        Err(ValidationError::constraint(
            "one_of",
            format!("Expected {input:?} to be one of {options}"),
        )
        .with_param("options", options)
        .with_param("actual", format!("{input:?}")))
    }
}

impl<T> fmt::Debug for OneOf<T>
where
    T: Hash + Eq + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("OneOf").field(&self.options).finish()
    }
}

/// Creates a [`OneOf`] over dynamic [`Value`]s.
///
/// ```
/// use fieldguard::prelude::*;
///
/// let v = one_of([Value::from(1), Value::from(2), Value::from("a")]);
/// assert!(v.check("a").is_ok());
/// assert!(v.check(4).is_err());
/// ```
#[must_use]
pub fn one_of<I>(options: I) -> OneOf<Value>
where
    I: IntoIterator,
    I::Item: Into<Value>,
{
    OneOf::new(options)
}

// ============================================================================
// TESTS
// ============================================================================
