//! The double-checked holder: lock-free reads after a mutex-guarded first
//! construction.
//!
//! The one `unsafe` corner of the catalog lives here. Publication goes
//! through a raw pointer minted by [`Arc::into_raw`] and stored with
//! `Release` ordering; the unlocked fast path reads it back with `Acquire`.
//! That pairing is the whole idiom: a thread that observes the non-null
//! pointer also observes the fully-constructed instance behind it, so the
//! classic construct-then-publish reordering hazard cannot occur.

#![allow(unsafe_code)]

use std::fmt;
use std::marker::PhantomData;
use std::ptr;
use std::sync::atomic::{AtomicPtr, Ordering};
use std::sync::{Arc, Mutex};

use super::Singleton;

/// A lazily-initialised holder built on the double-checked-locking idiom.
///
/// The accessor runs a two-checkpoint state machine:
///
/// 1. **Fast path** — load the pointer with `Acquire`; if already published,
///    return a handle without touching the lock.
/// 2. **Slow path** — take the holder's mutex, re-check (another thread may
///    have finished construction while this one waited), construct and
///    publish with a `Release` store only if the slot is still empty, and
///    release the lock on every exit path.
///
/// Initializing reentrantly — calling the accessor from inside the factory —
/// deadlocks, the same way [`OnceLock`](std::sync::OnceLock) does.
///
/// # Example
/// ```
/// use gof_core::singleton::{DoubleCheckedSingleton, Singleton};
/// use std::sync::Arc;
///
/// static BUFFER: DoubleCheckedSingleton<Vec<u8>> =
///     DoubleCheckedSingleton::new(|| vec![0; 64]);
///
/// let a = BUFFER.instance();
/// let b = BUFFER.instance();
/// assert!(Arc::ptr_eq(&a, &b));
/// ```
pub struct DoubleCheckedSingleton<T, F = fn() -> T> {
    /// Null until first construction completes; afterwards a pointer minted
    /// by `Arc::into_raw`, never replaced and never freed before the holder
    /// drops.
    slot: AtomicPtr<T>,
    lock: Mutex<()>,
    init: F,
    ghost: PhantomData<Option<Arc<T>>>,
}

impl<T, F> DoubleCheckedSingleton<T, F> {
    /// Create an empty holder that constructs the instance with `init`.
    ///
    /// `const`, so the holder can live in a `static`.
    pub const fn new(init: F) -> Self {
        Self {
            slot: AtomicPtr::new(ptr::null_mut()),
            lock: Mutex::new(()),
            init,
            ghost: PhantomData,
        }
    }

    /// Peek at the instance without constructing one.
    pub fn get(&self) -> Option<Arc<T>> {
        let published = self.slot.load(Ordering::Acquire);
        if published.is_null() {
            None
        } else {
            // SAFETY: a non-null slot was published from `Arc::into_raw` and
            // its strong count stays owned by the holder until `drop`, so
            // minting another handle is sound.
            Some(unsafe { revive(published) })
        }
    }

    /// `true` once the instance has been published.
    pub fn is_initialized(&self) -> bool {
        !self.slot.load(Ordering::Acquire).is_null()
    }

    /// Like [`instance`](Singleton::instance), but constructs with `init`
    /// instead of the holder's own factory if this call wins first
    /// construction.
    ///
    /// Exactly one closure among any number of racing first calls runs;
    /// which one is not specified. A seed captured by the closure therefore
    /// reaches the shared instance for one non-deterministically chosen
    /// caller, and every handle returned — then or later — refers to that
    /// winner's instance.
    pub fn instance_or_init(&self, init: impl FnOnce() -> T) -> Arc<T> {
        // Fast path: no lock once published.
        if let Some(existing) = self.get() {
            return existing;
        }
        let _guard = self
            .lock
            .lock()
            .expect("DoubleCheckedSingleton mutex poisoned");
        // Second check, under the lock: another thread may have published
        // while this one waited.
        if let Some(existing) = self.get() {
            return existing;
        }
        let fresh = Arc::new(init());
        // One strong count transfers to the slot; `drop` reclaims it. The
        // Release store pairs with the Acquire loads above.
        let raw = Arc::into_raw(fresh.clone()) as *mut T;
        self.slot.store(raw, Ordering::Release);
        fresh
    }
}

impl<T, F: Fn() -> T> Singleton<T> for DoubleCheckedSingleton<T, F> {
    fn instance(&self) -> Arc<T> {
        self.instance_or_init(&self.init)
    }
}

impl<T, F> Drop for DoubleCheckedSingleton<T, F> {
    fn drop(&mut self) {
        let published = *self.slot.get_mut();
        if !published.is_null() {
            // SAFETY: the slot owns the strong count transferred at publish
            // time; rebuilding the `Arc` here releases the holder's share,
            // leaving live caller handles to keep the instance alive.
            drop(unsafe { Arc::from_raw(published) });
        }
    }
}

// SAFETY: the holder hands out `Arc<T>` handles across threads, which is
// only sound when `T: Send + Sync`; the factory is invoked through a shared
// reference and so must be `Sync` for the holder to be `Sync`.
unsafe impl<T: Send + Sync, F: Sync> Sync for DoubleCheckedSingleton<T, F> {}

// SAFETY: moving the holder moves its share of the instance and the factory.
unsafe impl<T: Send + Sync, F: Send> Send for DoubleCheckedSingleton<T, F> {}

impl<T, F> fmt::Debug for DoubleCheckedSingleton<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DoubleCheckedSingleton")
            .field("initialized", &self.is_initialized())
            .finish_non_exhaustive()
    }
}

/// Mint a new `Arc` handle from a pointer previously produced by
/// [`Arc::into_raw`].
///
/// # Safety
/// `ptr` must originate from `Arc::into_raw`, and the strong count it
/// represents must still be live (the holder has not dropped).
unsafe fn revive<T>(ptr: *const T) -> Arc<T> {
    // SAFETY: deferred to the caller; the increment balances the count that
    // the new handle releases when it drops.
    unsafe {
        Arc::increment_strong_count(ptr);
        Arc::from_raw(ptr)
    }
}
