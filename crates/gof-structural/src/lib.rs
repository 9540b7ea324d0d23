//! # gof-structural
//!
//! Structural patterns: ways to fit interfaces together after the fact.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Wrap an incompatible interface behind the one clients expect (adapter).
pub mod adapter;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use adapter::{dashboard_line, CelsiusSensor, FahrenheitProbe, ProbeAdapter, TemperatureSource};
