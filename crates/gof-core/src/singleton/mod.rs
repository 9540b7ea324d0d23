//! The singleton holder family.
//!
//! A singleton holder owns at most one instance of `T` for its whole
//! lifetime and hands that instance out as a shared [`Arc<T>`] handle.
//! The four holders in this module answer to one accessor contract — the
//! [`Singleton`] trait — and differ only in *when* the instance is created
//! and *how* concurrent first access is synchronized:
//!
//! | Holder | Creation | Synchronization |
//! |--------|----------|-----------------|
//! | [`RacySingleton`] | first access | none across the check/publish window |
//! | [`EagerSingleton`] | holder construction | construction precedes sharing |
//! | [`DoubleCheckedSingleton`] | first access | check–lock–check, Release/Acquire publication |
//! | [`LazySingleton`] | first access | [`OnceLock`](std::sync::OnceLock) one-time initialization |
//!
//! Once any accessor call has returned — in every holder except
//! [`RacySingleton`] — all later calls from any thread return a handle to
//! the same underlying object. `RacySingleton` deliberately reproduces the
//! classic unsynchronized-singleton defect and can mint distinct instances
//! under contention; it exists for contrast, and its tests demonstrate the
//! broken invariant rather than rely on it.
//!
//! Holders are ordinary values: construct one, share it (`&` or inside an
//! `Arc`), and every accessor observes the same instance. The lazy holders
//! have `const fn new`, so they can just as well live in a `static`; the
//! [`define_singleton!`](crate::define_singleton) macro writes that
//! declaration for you.

pub mod double_checked;
pub mod eager;
pub mod lazy;
pub mod racy;

use std::sync::Arc;

pub use double_checked::DoubleCheckedSingleton;
pub use eager::EagerSingleton;
pub use lazy::LazySingleton;
pub use racy::RacySingleton;

/// The accessor contract shared by every holder in this module.
///
/// Implementations never fail and may be called from any number of threads
/// at once. Identity is the observable: two handles refer to the same
/// instance exactly when [`Arc::ptr_eq`] says so.
pub trait Singleton<T> {
    /// Return a shared handle to the instance, constructing it on first use.
    ///
    /// At most one call constructs (non-deterministically chosen among
    /// racing first callers); every other call returns the already-shared
    /// instance. [`RacySingleton`] is the documented exception: it may
    /// construct more than once under contention.
    fn instance(&self) -> Arc<T>;
}
