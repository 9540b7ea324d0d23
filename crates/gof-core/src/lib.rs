//! # gof-core
//!
//! Core building blocks for the `gof` pattern catalog: the error hierarchy
//! and the singleton holder family.
//!
//! The singleton family is the heart of the catalog — four process-wide
//! holders sharing one accessor contract, with four different answers to
//! *when* the shared instance is created and *how* concurrent first access
//! is synchronized. See [`singleton`] for the variant table.

#![warn(missing_docs)]
#![deny(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` / `fail!` / `ensure_post!` macros.
pub mod errors;

/// The singleton holder family: racy, eager, double-checked, lazy.
pub mod singleton;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
pub use singleton::{
    DoubleCheckedSingleton, EagerSingleton, LazySingleton, RacySingleton, Singleton,
};
