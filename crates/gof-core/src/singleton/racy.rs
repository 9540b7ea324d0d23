//! The naive holder: lazy construction with nothing guarding the gap
//! between the emptiness check and the publish.

use std::fmt;
use std::sync::{Arc, Mutex};

use super::Singleton;

/// A lazily-initialised holder that checks and publishes as two separate
/// steps, with no guard across the gap.
///
/// Under concurrent first access several threads can each find the slot
/// empty, each run the factory, and each publish its own instance — the
/// last write wins, and callers that lost the race walk away holding their
/// own, now-orphaned instances. Two concurrent calls to
/// [`instance`](Singleton::instance) are therefore **not** guaranteed to
/// agree. This is the textbook broken singleton, kept on purpose as the
/// contrast case; reach for [`DoubleCheckedSingleton`] or [`LazySingleton`]
/// when you want the guarantee.
///
/// The textbook defect is an unsynchronized field write, which Rust's
/// aliasing rules refuse outright, so the slot sits behind a `Mutex` taken
/// once for the check and once for the publish. The observable behavior —
/// distinct instances under contention, last write wins — is unchanged,
/// while orphaned instances are reclaimed as soon as their last handle
/// drops.
///
/// [`DoubleCheckedSingleton`]: super::DoubleCheckedSingleton
/// [`LazySingleton`]: super::LazySingleton
///
/// # Example
/// ```
/// use gof_core::singleton::{RacySingleton, Singleton};
/// use std::sync::Arc;
///
/// let holder = RacySingleton::new(|| vec![1, 2, 3]);
/// let first = holder.instance();
/// // Sequential callers do agree; only concurrent first access races.
/// assert!(Arc::ptr_eq(&first, &holder.instance()));
/// ```
pub struct RacySingleton<T, F = fn() -> T> {
    slot: Mutex<Option<Arc<T>>>,
    init: F,
}

impl<T, F: Fn() -> T> RacySingleton<T, F> {
    /// Create an empty holder that constructs instances with `init`.
    ///
    /// `const`, so the holder can live in a `static`.
    pub const fn new(init: F) -> Self {
        Self {
            slot: Mutex::new(None),
            init,
        }
    }

    /// Peek at the currently-published instance without constructing one.
    pub fn get(&self) -> Option<Arc<T>> {
        self.slot
            .lock()
            .expect("RacySingleton mutex poisoned")
            .clone()
    }

    /// `true` once some instance has been published.
    pub fn is_initialized(&self) -> bool {
        self.get().is_some()
    }
}

impl<T, F: Fn() -> T> Singleton<T> for RacySingleton<T, F> {
    fn instance(&self) -> Arc<T> {
        // The lock covers only this read and is released before the factory
        // runs, so the check and the publish do not form a unit.
        if let Some(existing) = self.get() {
            return existing;
        }
        let fresh = Arc::new((self.init)());
        // Unconditional publish: whatever a racing thread stored first is
        // silently replaced.
        *self.slot.lock().expect("RacySingleton mutex poisoned") = Some(fresh.clone());
        fresh
    }
}

impl<T, F> fmt::Debug for RacySingleton<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RacySingleton")
            .field(
                "initialized",
                &self
                    .slot
                    .lock()
                    .expect("RacySingleton mutex poisoned")
                    .is_some(),
            )
            .finish_non_exhaustive()
    }
}
