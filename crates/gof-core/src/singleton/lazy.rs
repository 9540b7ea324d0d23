//! The deferred holder: one-time initialisation delegated to
//! [`OnceLock`](std::sync::OnceLock).
//!
//! This is the variant to reach for. The other holders exist to make the
//! trade-offs visible; this one simply hands the at-most-once guarantee to
//! the standard library and keeps no unsafe code of its own.

use std::fmt;
use std::sync::{Arc, OnceLock};

use super::Singleton;

/// A lazily-initialised holder backed by a [`OnceLock`](std::sync::OnceLock).
///
/// The first accessor to arrive constructs the instance; racing callers
/// block until construction completes and then share the same handle. The
/// factory runs at most once.
///
/// # Example
/// ```
/// use gof_core::singleton::{LazySingleton, Singleton};
/// use std::sync::Arc;
///
/// static LABELS: LazySingleton<Vec<&'static str>> =
///     LazySingleton::new(|| vec!["a", "b"]);
///
/// assert!(!LABELS.is_initialized());
/// let first = LABELS.instance();
/// assert!(Arc::ptr_eq(&first, &LABELS.instance()));
/// ```
pub struct LazySingleton<T, F = fn() -> T> {
    cell: OnceLock<Arc<T>>,
    init: F,
}

impl<T, F> LazySingleton<T, F> {
    /// Create an empty holder that constructs the instance with `init`.
    ///
    /// `const`, so the holder can live in a `static`.
    pub const fn new(init: F) -> Self {
        Self {
            cell: OnceLock::new(),
            init,
        }
    }

    /// Peek at the instance without constructing one.
    pub fn get(&self) -> Option<Arc<T>> {
        self.cell.get().cloned()
    }

    /// `true` once the instance has been constructed.
    pub fn is_initialized(&self) -> bool {
        self.cell.get().is_some()
    }
}

impl<T, F: Fn() -> T> Singleton<T> for LazySingleton<T, F> {
    fn instance(&self) -> Arc<T> {
        self.cell
            .get_or_init(|| Arc::new((self.init)()))
            .clone()
    }
}

impl<T, F> fmt::Debug for LazySingleton<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LazySingleton")
            .field("initialized", &self.is_initialized())
            .finish_non_exhaustive()
    }
}

/// Define a process-wide singleton as a `static` [`LazySingleton`].
///
/// Expands to a `static` holder whose instance is constructed from the
/// given expression on first access. The expression must not capture
/// locals; it runs once, lazily, behind the holder's one-time cell.
///
/// # Example
/// ```
/// use gof_core::{define_singleton, singleton::Singleton};
/// use std::sync::Arc;
///
/// define_singleton! {
///     /// Widget names every screen agrees on.
///     static REGISTRY: Vec<&'static str> = vec!["button", "status-bar"];
/// }
///
/// let names = REGISTRY.instance();
/// assert_eq!(names.len(), 2);
/// assert!(Arc::ptr_eq(&names, &REGISTRY.instance()));
/// ```
#[macro_export]
macro_rules! define_singleton {
    ($(#[$meta:meta])* $vis:vis static $name:ident: $ty:ty = $init:expr;) => {
        $(#[$meta])*
        $vis static $name: $crate::singleton::LazySingleton<$ty> =
            $crate::singleton::LazySingleton::new(|| $init);
    };
}
