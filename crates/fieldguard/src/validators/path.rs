//! Filesystem path validator

use std::path::{Path, is_separator};

use indexmap::IndexSet;

use crate::foundation::{Predicate, Validate, ValidationError, Value};

// ============================================================================
// EXTENSION SPLITTING
// ============================================================================

/// Returns the extension of the final path segment, dot included.
///
/// The extension is everything from the last `.` of the final segment.
/// Leading dots of the segment do not start an extension, so `.bashrc` has
/// none. Returns `""` when there is no extension. Separators follow the
/// host platform ([`std::path::is_separator`]).
///
/// Unlike [`Path::extension`], a trailing dot counts: `"file."` yields `"."`.
///
/// # Examples
///
/// ```
/// use fieldguard::validators::split_extension;
///
/// assert_eq!(split_extension("src/main.rs"), ".rs");
/// assert_eq!(split_extension("archive.tar.gz"), ".gz");
/// assert_eq!(split_extension("dir.d/README"), "");
/// assert_eq!(split_extension(".bashrc"), "");
/// ```
pub fn split_extension(path: &str) -> &str {
    let name_start = path
        .char_indices()
        .rev()
        .find(|&(_, c)| is_separator(c))
        .map_or(0, |(i, c)| i + c.len_utf8());
    let name = &path[name_start..];

    match name.rfind('.') {
        Some(dot) if name[..dot].bytes().any(|b| b != b'.') => &name[dot..],
        _ => "",
    }
}

fn normalize_suffix(suffix: &str) -> String {
    if suffix.is_empty() || suffix.starts_with('.') {
        suffix.to_owned()
    } else {
        format!(".{suffix}")
    }
}

// ============================================================================
// PATH SHAPE
// ============================================================================

/// Accepts an existing filesystem path, optionally restricted by suffix and
/// a predicate.
///
/// Checks run in order and the first failure is reported:
///
/// 1. the value must be `Text` or `Path`; a `Path` is converted to its text
///    form once, and a path that is not valid UTF-8 is a type mismatch,
/// 2. the path must exist (a synchronous filesystem probe),
/// 3. the predicate must return `true` when configured,
/// 4. the extension must be one of the suffixes when any are configured.
///
/// Suffixes are normalized to start with a dot, so `"py"` and `".py"` are
/// the same suffix. The empty suffix `""` accepts paths with no extension.
///
/// # Examples
///
/// ```no_run
/// use std::path::Path;
/// use fieldguard::prelude::*;
///
/// let scripts = PathShape::new().suffix(".py").predicate(Path::is_file);
/// assert!(scripts.check("script.py").is_ok());
/// assert!(scripts.check("script.txt").unwrap_err().is_constraint());
/// assert!(scripts.check("missing.py").unwrap_err().is_not_found());
/// ```
#[derive(Debug, Clone, Default)]
pub struct PathShape {
    suffixes: IndexSet<String>,
    predicate: Option<Predicate<Path>>,
}

impl PathShape {
    /// Creates a shape that only requires the path to exist.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one acceptable suffix.
    #[must_use = "builder methods must be chained or built"]
    pub fn suffix(mut self, suffix: &str) -> Self {
        self.suffixes.insert(normalize_suffix(suffix));
        self
    }

    /// Adds several acceptable suffixes.
    #[must_use = "builder methods must be chained or built"]
    pub fn suffixes<I, S>(mut self, suffixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.suffixes
            .extend(suffixes.into_iter().map(|s| normalize_suffix(s.as_ref())));
        self
    }

    /// Requires `test` to return `true` for the path.
    #[must_use = "builder methods must be chained or built"]
    pub fn predicate<F>(mut self, test: F) -> Self
    where
        F: Fn(&Path) -> bool + Send + Sync + 'static,
    {
        self.predicate = Some(Predicate::new(test));
        self
    }

    /// Requires `test` to return `true`; `label` names it in errors.
    #[must_use = "builder methods must be chained or built"]
    pub fn predicate_named<F>(mut self, label: &str, test: F) -> Self
    where
        F: Fn(&Path) -> bool + Send + Sync + 'static,
    {
        self.predicate = Some(Predicate::named(label, test));
        self
    }

    /// The configured suffixes, dot-prefixed, in insertion order.
    pub fn suffix_set(&self) -> &IndexSet<String> {
        &self.suffixes
    }

    /// Runs the existence, predicate and suffix checks on a text path.
    pub fn validate_str(&self, input: &str) -> Result<(), ValidationError> {
        let path = Path::new(input);

        let exists = path.exists();
        tracing::trace!(path = input, exists, "probed path");
        if !exists {
            return Err(ValidationError::not_found(input));
        }

        if let Some(predicate) = &self.predicate {
            if !predicate.test(path) {
                return Err(ValidationError::constraint(
                    "predicate",
                    format!("Expected {} to be true for {input:?}", predicate.label()),
                )
                .with_param("predicate", predicate.label().to_owned()));
            }
        }

        if !self.suffixes.is_empty() {
            let extension = split_extension(input);
            if !self.suffixes.contains(extension) {
                let suffixes = format!("{:?}", self.suffixes);
                return Err(ValidationError::constraint(
                    "suffix",
                    format!("Expected {input:?} to be {suffixes} file"),
                )
                .with_param("suffixes", suffixes)
                .with_param("actual", extension.to_owned()));
            }
        }

        Ok(())
    }
}

impl Validate for PathShape {
    type Input = Value;

    fn validate(&self, input: &Value) -> Result<(), ValidationError> {
        let text = match input {
            Value::Text(text) => text.as_str(),
            Value::Path(path) => path.to_str().ok_or_else(|| {
                ValidationError::type_mismatch("a UTF-8 path", input, "path")
            })?,
            _ => {
                return Err(ValidationError::type_mismatch(
                    "a str or path",
                    input,
                    input.type_name(),
                ));
            }
        };
        self.validate_str(text)
    }
}

/// Creates a [`PathShape`] restricted to the given suffixes.
#[must_use]
pub fn path_shape<I, S>(suffixes: I) -> PathShape
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    PathShape::new().suffixes(suffixes)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::fs::File;
    use std::path::PathBuf;

    #[rstest]
    #[case("script.py", ".py")]
    #[case("dir/script.py", ".py")]
    #[case("dir.d/script", "")]
    #[case("archive.tar.gz", ".gz")]
    #[case(".bashrc", "")]
    #[case("..hidden", "")]
    #[case("dir/.config.toml", ".toml")]
    #[case("file.", ".")]
    #[case("", "")]
    #[case("dir/", "")]
    fn test_split_extension(#[case] path: &str, #[case] expected: &str) {
        assert_eq!(split_extension(path), expected);
    }

    #[test]
    fn test_suffix_normalization() {
        let shape = PathShape::new().suffix("py").suffixes([".py", "rs", ""]);
        let got: Vec<&str> = shape.suffix_set().iter().map(String::as_str).collect();
        assert_eq!(got, [".py", ".rs", ""]);
    }

    fn fixture() -> (tempfile::TempDir, PathBuf, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let script = dir.path().join("script.py");
        let notes = dir.path().join("script.txt");
        File::create(&script).unwrap();
        File::create(&notes).unwrap();
        (dir, script, notes)
    }

    fn text(path: &Path) -> Value {
        Value::from(path.to_str().unwrap())
    }

    #[test]
    fn test_existing_matching_file_passes() {
        let (_dir, script, _) = fixture();
        let shape = path_shape([".py"]).predicate(Path::is_file);
        assert!(shape.validate(&text(&script)).is_ok());
        assert!(shape.check(script).is_ok());
    }

    #[test]
    fn test_suffix_mismatch() {
        let (_dir, _, notes) = fixture();
        let err = path_shape([".py"]).check(notes).unwrap_err();
        assert!(err.is_constraint());
        assert_eq!(err.code, "suffix");
        assert_eq!(err.param("actual"), Some(".txt"));
    }

    #[test]
    fn test_missing_path_is_not_found_before_other_checks() {
        let (dir, _, _) = fixture();
        let missing = dir.path().join("missing.txt");
        let shape = path_shape([".py"]).predicate(|_: &Path| false);
        assert!(shape.check(missing).unwrap_err().is_not_found());
    }

    #[test]
    fn test_predicate_checked_before_suffix() {
        let (dir, _, _) = fixture();
        let err = path_shape([".py"])
            .predicate_named("is_file", Path::is_file)
            .check(dir.path())
            .unwrap_err();
        assert_eq!(err.code, "predicate");
    }

    #[test]
    fn test_no_suffixes_accepts_any_existing_path() {
        let (dir, _, notes) = fixture();
        assert!(PathShape::new().check(notes).is_ok());
        assert!(PathShape::new().check(dir.path()).is_ok());
    }

    #[rstest]
    #[case(Value::from(123))]
    #[case(Value::from(true))]
    #[case(Value::Null)]
    fn test_non_path_is_type_mismatch(#[case] input: Value) {
        assert!(PathShape::new().validate(&input).unwrap_err().is_type_mismatch());
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_path_is_type_mismatch() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let path = Path::new(OsStr::from_bytes(b"bad\xff.py"));
        let err = PathShape::new().check(path).unwrap_err();
        assert!(err.is_type_mismatch());
        assert_eq!(err.param("expected"), Some("a UTF-8 path"));
    }
}
