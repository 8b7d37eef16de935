//! # fieldguard
//!
//! Validated struct fields: attach a rule to a field once, and every write
//! to that field is checked before it is stored.
//!
//! ## Quick Start
//!
//! ```rust
//! use fieldguard::prelude::*;
//!
//! let kind = FieldRule::new("kind", one_of(["wood", "metal", "plastic"]));
//!
//! let mut field = kind.init("wood").unwrap();
//! assert!(field.set("aluminum").is_err());
//! assert_eq!(field.get(), Some(&Value::from("wood")));
//! ```
//!
//! ## Built-in Rules
//!
//! - [`OneOf`](validators::OneOf): membership in a fixed set
//! - [`NumberRange`](validators::NumberRange): int or float within inclusive bounds
//! - [`StringShape`](validators::StringShape): text length bounds and a predicate
//! - [`PathShape`](validators::PathShape): an existing path, with suffix and predicate
//!
//! Implement [`Validate`](foundation::Validate) for anything else.
//!
//! ## Errors
//!
//! Every failure is a [`ValidationError`](foundation::ValidationError) with
//! one of three [`ErrorKind`](foundation::ErrorKind)s: a type mismatch, a
//! constraint violation, or a missing path.
//!
//! ## Features
//!
//! - `serde` (default): `Serialize`/`Deserialize` for values and error
//!   kinds, conversion from `serde_json::Value`, and
//!   `ValidationError::to_json_value`.

// ValidationError is the one error type of every rule; boxing it would add
// indirection to every write for no practical benefit.
#![allow(clippy::result_large_err)]

pub mod field;
pub mod foundation;
pub mod prelude;
pub mod validators;
