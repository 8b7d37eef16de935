//! Dynamic values checked by the built-in rules.
//!
//! A validated field can receive a value of the wrong type, and reporting
//! that is part of each rule's contract. [`Value`] is the closed set of
//! types a rule may see; [`Number`] is the numeric subset used for range
//! bounds.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::path::{Path, PathBuf};

// ============================================================================
// NUMBER
// ============================================================================

/// An integer or floating-point number.
///
/// Ordering between the two representations is exact: `i64::MAX` compares
/// greater than `9.223372036854775e18` even though the cast `i64::MAX as
/// f64` would round them together. NaN is unordered.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Number {
    /// Signed integer.
    Int(i64),
    /// Double-precision float.
    Float(f64),
}

/// `2^63` as an `f64`; every float strictly below it and at or above
/// `-2^63` truncates to an `i64` without saturation.
const I64_EDGE: f64 = 9_223_372_036_854_775_808.0;

fn cmp_int_float(int: i64, float: f64) -> Option<Ordering> {
    if float.is_nan() {
        return None;
    }
    if float >= I64_EDGE {
        return Some(Ordering::Less);
    }
    if float < -I64_EDGE {
        return Some(Ordering::Greater);
    }
    let whole = float.trunc();
    match int.cmp(&(whole as i64)) {
        Ordering::Equal => 0.0_f64.partial_cmp(&(float - whole)),
        ordering => Some(ordering),
    }
}

impl Number {
    /// Returns true for a float NaN.
    #[must_use]
    pub fn is_nan(self) -> bool {
        matches!(self, Number::Float(f) if f.is_nan())
    }

    /// The integer this number is exactly equal to, if any.
    fn as_exact_int(self) -> Option<i64> {
        match self {
            Number::Int(i) => Some(i),
            Number::Float(f) if f.fract() == 0.0 && f >= -I64_EDGE && f < I64_EDGE => {
                Some(f as i64)
            }
            Number::Float(_) => None,
        }
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        self.partial_cmp(other) == Some(Ordering::Equal)
    }
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (*self, *other) {
            (Number::Int(a), Number::Int(b)) => Some(a.cmp(&b)),
            (Number::Float(a), Number::Float(b)) => a.partial_cmp(&b),
            (Number::Int(a), Number::Float(b)) => cmp_int_float(a, b),
            (Number::Float(a), Number::Int(b)) => cmp_int_float(b, a).map(Ordering::reverse),
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(i) => write!(f, "{i}"),
            // `{:?}` keeps the trailing `.0` so `1.0` is not shown as `1`
            Number::Float(x) => write!(f, "{x:?}"),
        }
    }
}

macro_rules! number_from {
    ($variant:ident as $target:ty: $($ty:ty),+) => {
        $(
            impl From<$ty> for Number {
                fn from(value: $ty) -> Self {
                    Number::$variant(<$target>::from(value))
                }
            }
        )+
    };
}

number_from!(Int as i64: i8, i16, i32, i64, u8, u16, u32);
number_from!(Float as f64: f32, f64);

// ============================================================================
// VALUE
// ============================================================================

/// A dynamically typed candidate value.
///
/// # Equality
///
/// `Int` and `Float` compare numerically, so `Value::Int(1) ==
/// Value::Float(1.0)`. Unlike plain `f64`, a NaN float equals itself so it
/// can sit in an option set. `Bool` never equals a number, and `Text` never
/// equals `Path` even when they spell the same location. [`Hash`] agrees
/// with this equality.
///
/// # Examples
///
/// ```
/// use fieldguard::foundation::Value;
///
/// assert_eq!(Value::from(1), Value::from(1.0));
/// assert_ne!(Value::from(true), Value::from(1));
/// assert_eq!(Value::from("wood").type_name(), "text");
/// ```
#[derive(Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Value {
    /// Absence of a value.
    #[default]
    Null,
    /// Boolean. Not a number.
    Bool(bool),
    /// Signed integer.
    Int(i64),
    /// Double-precision float.
    Float(f64),
    /// Text.
    Text(String),
    /// Structured filesystem path, distinct from its text form.
    Path(PathBuf),
}

impl Value {
    /// Short name of the value's type, used in type-mismatch errors.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Text(_) => "text",
            Value::Path(_) => "path",
        }
    }

    /// The numeric view of an `Int` or `Float`.
    #[must_use]
    pub const fn as_number(&self) -> Option<Number> {
        match self {
            Value::Int(i) => Some(Number::Int(*i)),
            Value::Float(f) => Some(Number::Float(*f)),
            _ => None,
        }
    }

    /// The text of a `Text` value.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// The path of a `Path` value.
    #[must_use]
    pub fn as_path(&self) -> Option<&Path> {
        match self {
            Value::Path(p) => Some(p),
            _ => None,
        }
    }

    /// Returns true for `Null`.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Text(a), Value::Text(b)) => a == b,
            (Value::Path(a), Value::Path(b)) => a == b,
            (Value::Float(a), Value::Float(b)) if a.is_nan() && b.is_nan() => true,
            _ => match (self.as_number(), other.as_number()) {
                (Some(a), Some(b)) => a == b,
                _ => false,
            },
        }
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Value::Null => state.write_u8(0),
            Value::Bool(b) => {
                state.write_u8(1);
                b.hash(state);
            }
            Value::Int(_) | Value::Float(_) => {
                state.write_u8(2);
                let number = self.as_number();
                match number.and_then(Number::as_exact_int) {
                    Some(int) => int.hash(state),
                    None => match number {
                        Some(Number::Float(f)) if f.is_nan() => state.write_u8(0xff),
                        Some(Number::Float(f)) => f.to_bits().hash(state),
                        _ => {}
                    },
                }
            }
            Value::Text(s) => {
                state.write_u8(3);
                s.hash(state);
            }
            Value::Path(p) => {
                state.write_u8(4);
                p.hash(state);
            }
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(i) => write!(f, "{i}"),
            Value::Float(x) => write!(f, "{x:?}"),
            Value::Text(s) => write!(f, "{s:?}"),
            Value::Path(p) => write!(f, "Path({:?})", p.display().to_string()),
        }
    }
}

// Debug matches Display so rejected values read naturally in error params.
impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

// ============================================================================
// CONVERSIONS
// ============================================================================

macro_rules! value_from {
    ($variant:ident as $target:ty: $($ty:ty),+) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value::$variant(<$target>::from(value))
                }
            }
        )+
    };
}

value_from!(Int as i64: i8, i16, i32, i64, u8, u16, u32);
value_from!(Float as f64: f32, f64);
value_from!(Bool as bool: bool);
value_from!(Text as String: String, &str, char);
value_from!(Path as PathBuf: PathBuf, &Path);

impl From<Number> for Value {
    fn from(number: Number) -> Self {
        match number {
            Number::Int(i) => Value::Int(i),
            Number::Float(f) => Value::Float(f),
        }
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

#[cfg(feature = "serde")]
impl TryFrom<serde_json::Value> for Value {
    type Error = crate::foundation::ValidationError;

    /// Converts JSON scalars. Arrays, objects and integers beyond `i64`
    /// that are not representable as `f64` are a type mismatch.
    fn try_from(json: serde_json::Value) -> Result<Self, Self::Error> {
        use serde_json::Value as Json;

        match json {
            Json::Null => Ok(Value::Null),
            Json::Bool(b) => Ok(Value::Bool(b)),
            Json::String(s) => Ok(Value::Text(s)),
            Json::Number(n) => n
                .as_i64()
                .map(Value::Int)
                .or_else(|| n.as_f64().map(Value::Float))
                .ok_or_else(|| {
                    crate::foundation::ValidationError::type_mismatch(
                        "a number representable as i64 or f64",
                        n,
                        "number",
                    )
                }),
            Json::Array(_) => Err(crate::foundation::ValidationError::type_mismatch(
                "a scalar",
                "array",
                "array",
            )),
            Json::Object(_) => Err(crate::foundation::ValidationError::type_mismatch(
                "a scalar",
                "object",
                "object",
            )),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_mixed_number_ordering() {
        assert!(Number::Int(1) < Number::Float(1.5));
        assert!(Number::Float(-0.5) < Number::Int(0));
        assert!(Number::Int(-1) < Number::Float(-0.5));
        assert_eq!(Number::Int(3), Number::Float(3.0));
        assert!(Number::Int(i64::MAX) < Number::Float(I64_EDGE));
        assert!(Number::Int(i64::MIN) > Number::Float(-1e300));
        assert_eq!(Number::Int(1).partial_cmp(&Number::Float(f64::NAN)), None);
    }

    #[test]
    fn test_int_float_equality_and_hash() {
        let mut set = HashSet::new();
        set.insert(Value::Int(1));
        assert!(set.contains(&Value::Float(1.0)));
        assert!(!set.contains(&Value::Bool(true)));
        assert!(!set.contains(&Value::Float(1.5)));
    }

    #[test]
    fn test_nan_is_a_member_of_its_own_set() {
        let mut set = HashSet::new();
        set.insert(Value::Float(f64::NAN));
        assert!(set.contains(&Value::Float(f64::NAN)));
    }

    #[test]
    fn test_signed_zero() {
        let mut set = HashSet::new();
        set.insert(Value::Float(-0.0));
        assert!(set.contains(&Value::Float(0.0)));
        assert!(set.contains(&Value::Int(0)));
    }

    #[test]
    fn test_text_is_not_path() {
        assert_ne!(Value::from("a.py"), Value::from(Path::new("a.py")));
        assert_eq!(Value::from(Path::new("a.py")).as_path(), Some(Path::new("a.py")));
        assert_eq!(Value::from("a.py").as_path(), None);
        assert_eq!(Value::from("a.py").as_text(), Some("a.py"));
    }

    #[test]
    fn test_number_nan() {
        assert!(Number::Float(f64::NAN).is_nan());
        assert!(!Number::Float(1.5).is_nan());
        assert!(!Number::Int(0).is_nan());
    }

    #[test]
    fn test_display() {
        assert_eq!(Value::from("a").to_string(), "\"a\"");
        assert_eq!(Value::from(1.0).to_string(), "1.0");
        assert_eq!(Value::from(4).to_string(), "4");
        assert_eq!(Value::from(Path::new("x.py")).to_string(), "Path(\"x.py\")");
        assert_eq!(Value::from(None::<i32>).to_string(), "null");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_try_from_json() {
        use serde_json::json;

        assert_eq!(Value::try_from(json!(5)).ok(), Some(Value::Int(5)));
        assert_eq!(Value::try_from(json!(2.5)).ok(), Some(Value::Float(2.5)));
        assert_eq!(Value::try_from(json!("a")).ok(), Some(Value::from("a")));
        let err = Value::try_from(json!([1, 2])).unwrap_err();
        assert!(err.is_type_mismatch());
    }
}
