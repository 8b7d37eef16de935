//! Built-in validators
//!
//! Four rules cover the constraints a validated field usually needs:
//!
//! - **Membership**: [`OneOf`]
//! - **Numeric**: [`NumberRange`]
//! - **String**: [`StringShape`]
//! - **Filesystem**: [`PathShape`]
//!
//! # Examples
//!
//! ```
//! use fieldguard::prelude::*;
//!
//! let kind = one_of(["wood", "metal", "plastic"]);
//! let num = number_range(-100, 100);
//! let desc = string_shape().min_length(5).max_length(10);
//!
//! assert!(kind.check("wood").is_ok());
//! assert!(num.check(-55).is_ok());
//! assert!(desc.check("ABCDEF").is_ok());
//! ```

pub mod number;
pub mod one_of;
pub mod path;
pub mod string;

pub use number::{NumberRange, number_range};
pub use one_of::{OneOf, one_of};
pub use path::{PathShape, path_shape, split_extension};
pub use string::{LengthMode, StringShape, string_shape};
