//! Prelude module for convenient imports.
//!
//! Provides a single `use fieldguard::prelude::*;` import that brings in the
//! trait, value and error types, the four rules and the field binding types.
//!
//! # Examples
//!
//! ```rust
//! use fieldguard::prelude::*;
//!
//! let num = number_range(-100, 100);
//! let desc = string_shape().min_length(5).max_length(10);
//! assert!(num.check(-55).is_ok());
//! assert!(desc.check("hi").is_err());
//! ```

pub use crate::foundation::{
    DynValidate, ErrorKind, Number, Predicate, Validate, ValidationError, ValidationErrors,
    Value, validate_all, validate_any,
};

pub use crate::validators::{
    LengthMode, NumberRange, OneOf, PathShape, StringShape, number_range, one_of, path_shape,
    split_extension, string_shape,
};

pub use crate::field::{FieldRule, ValidatedField};
