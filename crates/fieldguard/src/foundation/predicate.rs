//! Injected predicate functions.

use std::fmt;
use std::sync::Arc;

/// A shareable boolean test over `T`, with a label for error messages.
///
/// Any `Fn(&T) -> bool` works, including plain function items such as
/// `str::is_empty` or `Path::is_file`. The label defaults to the closure's
/// type name; use [`Predicate::named`] for something readable.
pub struct Predicate<T: ?Sized> {
    label: Arc<str>,
    test: Arc<dyn Fn(&T) -> bool + Send + Sync>,
}

impl<T: ?Sized> Predicate<T> {
    /// Wraps a function, labelling it with its type name.
    pub fn new<F>(test: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        Self::named(std::any::type_name::<F>(), test)
    }

    /// Wraps a function under an explicit label.
    pub fn named<F>(label: impl Into<Arc<str>>, test: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        Self {
            label: label.into(),
            test: Arc::new(test),
        }
    }

    /// Runs the predicate.
    #[inline]
    pub fn test(&self, value: &T) -> bool {
        (self.test)(value)
    }

    /// The label shown in error messages.
    pub fn label(&self) -> &str {
        &self.label
    }
}

// Clone impl - manual because `T` itself need not be Clone
impl<T: ?Sized> Clone for Predicate<T> {
    fn clone(&self) -> Self {
        Self {
            label: Arc::clone(&self.label),
            test: Arc::clone(&self.test),
        }
    }
}

impl<T: ?Sized> fmt::Debug for Predicate<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Predicate").field(&self.label).finish()
    }
}
