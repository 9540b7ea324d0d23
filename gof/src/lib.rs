//! # gof
//!
//! The classic Gang-of-Four design patterns, rebuilt in idiomatic Rust.
//!
//! This crate is a **façade** that re-exports the public items from the
//! underlying workspace crates. Application code should depend on this
//! crate rather than the individual `gof-*` crates.
//!
//! The catalog is organised the way the book is: creational patterns
//! decide *who constructs what*, structural patterns fit interfaces
//! together. The singleton holder family in [`core`] gets the deepest
//! treatment — four variants of the same contract, from the classic racy
//! mistake up to lock-free double-checked publication.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! gof = "0.1"
//! ```
//!
//! ```rust
//! use gof::core::singleton::{LazySingleton, Singleton};
//! use std::sync::Arc;
//!
//! static THEMES: LazySingleton<Vec<&'static str>> =
//!     LazySingleton::new(|| vec!["light", "dark"]);
//!
//! let themes = THEMES.instance();
//! assert!(Arc::ptr_eq(&themes, &THEMES.instance()));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error types and the singleton holder family.
pub use gof_core as core;

/// Factory method, abstract factory, builder, prototype.
pub use gof_creational as creational;

/// Adapter.
pub use gof_structural as structural;
