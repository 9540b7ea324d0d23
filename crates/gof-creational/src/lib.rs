//! # gof-creational
//!
//! Creational patterns: ways to decouple *what* gets constructed from *who*
//! constructs it.
//!
//! Each module is a self-contained worked example built on a small concrete
//! domain (documents, themed widgets, workstations, blueprints) rather than
//! `FooA`/`FooB` placeholders, so the pattern's moving parts have names a
//! reader can hold on to.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Families of widgets that only make sense together (abstract factory).
pub mod abstract_factory;

/// Step-wise assembly of a multi-part product (builder).
pub mod builder;

/// A deferred constructor chosen by subtype or by parsed name (factory method).
pub mod factory_method;

/// Copy-to-create, deep or deliberately aliased (prototype).
pub mod prototype;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use abstract_factory::{compose_screen, Button, StatusBar, Theme, WidgetFactory};
pub use builder::{Director, StandardBuilder, Workstation, WorkstationBuilder};
pub use factory_method::{Document, DocumentCreator, DocumentKind, DocumentRegistry};
pub use prototype::{Blueprint, Prototype, Revision, SharedRevisionBlueprint};
