//! The eager holder: the instance already exists by the time the holder
//! can be shared.

use std::fmt;
use std::sync::Arc;

use super::Singleton;

/// A holder whose instance is constructed up front, when the holder itself
/// is built, rather than on first access.
///
/// Because `new` takes the finished value, construction precedes every
/// accessor call in program order, and handing the holder to another thread
/// establishes the happens-before edge for free. The accessor is a pure
/// read — one `Arc` clone, no branch, no lock. The price is that
/// construction cost is paid unconditionally, even if `instance` is never
/// called.
///
/// # Example
/// ```
/// use gof_core::singleton::{EagerSingleton, Singleton};
/// use std::sync::Arc;
///
/// let holder = EagerSingleton::new(String::from("ready"));
/// assert!(holder.is_initialized()); // before any instance() call
/// let a = holder.instance();
/// let b = holder.instance();
/// assert!(Arc::ptr_eq(&a, &b));
/// ```
pub struct EagerSingleton<T> {
    instance: Arc<T>,
}

impl<T> EagerSingleton<T> {
    /// Build the holder around the already-constructed value.
    pub fn new(value: T) -> Self {
        Self {
            instance: Arc::new(value),
        }
    }

    /// Build the holder around an existing shared handle.
    pub fn from_arc(instance: Arc<T>) -> Self {
        Self { instance }
    }

    /// Always `Some`: this holder cannot exist without its instance.
    pub fn get(&self) -> Option<Arc<T>> {
        Some(self.instance.clone())
    }

    /// Always `true`.
    pub fn is_initialized(&self) -> bool {
        true
    }
}

impl<T> Singleton<T> for EagerSingleton<T> {
    fn instance(&self) -> Arc<T> {
        self.instance.clone()
    }
}

impl<T: fmt::Debug> fmt::Debug for EagerSingleton<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EagerSingleton")
            .field("instance", &self.instance)
            .finish()
    }
}
