//! End-to-end checks of each rule against the reference scenarios.

use std::fs::File;
use std::path::Path;

use fieldguard::prelude::*;
use pretty_assertions::assert_eq;
use rstest::rstest;

// ============================================================================
// ONE OF
// ============================================================================

fn mixed_options() -> OneOf {
    one_of([
        Value::from(1),
        Value::from(2),
        Value::from(3),
        Value::from("a"),
        Value::from("b"),
    ])
}

#[rstest]
#[case::int(Value::from(4))]
#[case::text(Value::from("value4"))]
#[case::float(Value::from(3.5))]
#[case::bool(Value::from(true))]
fn one_of_rejects_non_members(#[case] value: Value) {
    let err = mixed_options().validate(&value).unwrap_err();
    assert_eq!(err.kind, ErrorKind::Constraint);
}

#[rstest]
#[case(Value::from("a"))]
#[case(Value::from(1))]
#[case(Value::from(3.0))]
fn one_of_accepts_members(#[case] value: Value) {
    assert!(mixed_options().validate(&value).is_ok());
}

// ============================================================================
// NUMBER RANGE
// ============================================================================

#[rstest]
#[case::above(Value::from(200), ErrorKind::Constraint)]
#[case::below(Value::from(-200), ErrorKind::Constraint)]
#[case::text(Value::from("x"), ErrorKind::TypeMismatch)]
#[case::text_digits(Value::from("55"), ErrorKind::TypeMismatch)]
#[case::bool(Value::from(false), ErrorKind::TypeMismatch)]
fn number_range_failures(#[case] value: Value, #[case] kind: ErrorKind) {
    let err = number_range(-100, 100).validate(&value).unwrap_err();
    assert_eq!(err.kind, kind);
}

#[rstest]
#[case(-100)]
#[case(0)]
#[case(100)]
fn number_range_inclusive_boundaries(#[case] value: i64) {
    assert!(number_range(-100, 100).check(value).is_ok());
}

// ============================================================================
// STRING SHAPE
// ============================================================================

fn lowercase_2_to_6() -> StringShape {
    string_shape()
        .min_length(2)
        .max_length(6)
        .predicate_named("is_lowercase", |s: &str| !s.chars().any(char::is_uppercase))
}

#[rstest]
#[case::predicate(Value::from("ABCDEF"), ErrorKind::Constraint, "predicate")]
#[case::too_short(Value::from("a"), ErrorKind::Constraint, "min_length")]
#[case::too_long(Value::from("abcdefghi"), ErrorKind::Constraint, "max_length")]
#[case::int(Value::from(123), ErrorKind::TypeMismatch, "type_mismatch")]
fn string_shape_failures(#[case] value: Value, #[case] kind: ErrorKind, #[case] code: &str) {
    let err = lowercase_2_to_6().validate(&value).unwrap_err();
    assert_eq!((err.kind, &*err.code), (kind, code));
}

#[test]
fn string_shape_accepts_lowercase_in_bounds() {
    assert!(lowercase_2_to_6().check("def").is_ok());
}

// ============================================================================
// PATH SHAPE
// ============================================================================

struct Workspace {
    dir: tempfile::TempDir,
}

impl Workspace {
    fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        File::create(dir.path().join("script.py")).unwrap();
        File::create(dir.path().join("script.txt")).unwrap();
        std::fs::create_dir(dir.path().join("package.py")).unwrap();
        Self { dir }
    }

    fn path(&self, name: &str) -> Value {
        Value::from(self.dir.path().join(name))
    }

    fn text(&self, name: &str) -> Value {
        Value::from(self.dir.path().join(name).to_str().unwrap())
    }
}

fn python_files() -> PathShape {
    path_shape([".py"]).predicate_named("is_file", Path::is_file)
}

#[test]
fn path_shape_accepts_existing_file_with_suffix() {
    let ws = Workspace::new();
    assert!(python_files().validate(&ws.text("script.py")).is_ok());
    assert!(python_files().validate(&ws.path("script.py")).is_ok());
}

#[rstest]
#[case::suffix("script.txt", ErrorKind::Constraint, "suffix")]
#[case::missing("missing.py", ErrorKind::NotFound, "not_found")]
#[case::missing_wrong_suffix("missing.abc", ErrorKind::NotFound, "not_found")]
#[case::directory("package.py", ErrorKind::Constraint, "predicate")]
fn path_shape_failures(#[case] name: &str, #[case] kind: ErrorKind, #[case] code: &str) {
    let ws = Workspace::new();
    for value in [ws.text(name), ws.path(name)] {
        let err = python_files().validate(&value).unwrap_err();
        assert_eq!((err.kind, &*err.code), (kind, code), "{value}");
    }
}

#[test]
fn path_shape_rejects_non_paths() {
    let err = python_files().check(123).unwrap_err();
    assert_eq!(err.kind, ErrorKind::TypeMismatch);
    assert_eq!(err.param("actual"), Some("int"));
}

// ============================================================================
// TYPE ERASURE
// ============================================================================

#[test]
fn rules_share_one_object_type() {
    let rules: Vec<Box<DynValidate>> = vec![
        Box::new(mixed_options()),
        Box::new(number_range(-100, 100)),
        Box::new(lowercase_2_to_6()),
        Box::new(PathShape::new()),
    ];
    let value = Value::from("a");
    let outcomes: Vec<Option<ErrorKind>> = rules
        .iter()
        .map(|rule| rule.validate(&value).err().map(|e| e.kind))
        .collect();

    assert_eq!(
        outcomes,
        [
            None,
            Some(ErrorKind::TypeMismatch),
            Some(ErrorKind::Constraint),
            Some(ErrorKind::NotFound),
        ]
    );
}
