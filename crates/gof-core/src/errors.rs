//! Error types for the gof catalog.
//!
//! Every fallible operation across the workspace reports through a single
//! `thiserror`-derived [`Error`] enum. The `ensure!` and `fail!` macros give
//! guard clauses the shape of assertions; `ensure_post!` does the same for
//! result checks. Singleton accessors are deliberately infallible and never
//! touch this module — the error stack serves the assembly-style operations
//! (builders, factory lookups).

use thiserror::Error;

/// The top-level error type used throughout the catalog.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// General runtime error.
    #[error("{0}")]
    Runtime(String),

    /// Precondition violated.
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// Postcondition violated.
    #[error("postcondition not satisfied: {0}")]
    Postcondition(String),

    /// A name did not resolve to any known variant (factory lookups).
    #[error("unknown variant `{name}`, expected one of: {expected}")]
    UnknownVariant {
        /// The name that failed to resolve.
        name: String,
        /// Comma-separated list of accepted names.
        expected: String,
    },

    /// A required component was never supplied (builder assembly).
    #[error("missing component: {0}")]
    MissingComponent(String),
}

/// Shorthand `Result` type used throughout the catalog.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Guard a precondition, returning `Err(Error::Precondition(...))` when the
/// condition is false.
///
/// # Example
/// ```
/// use gof_core::ensure;
/// fn take_parts(parts: &[String]) -> gof_core::errors::Result<usize> {
///     ensure!(!parts.is_empty(), "at least one part is required");
///     Ok(parts.len())
/// }
/// assert!(take_parts(&["chassis".into()]).is_ok());
/// assert!(take_parts(&[]).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}

/// Guard a postcondition, returning `Err(Error::Postcondition(...))` when
/// the condition is false.
///
/// # Example
/// ```
/// use gof_core::ensure_post;
/// fn assemble(count: usize) -> gof_core::errors::Result<Vec<u8>> {
///     let built = vec![0u8; count];
///     ensure_post!(built.len() == count, "assembly produced {} parts", built.len());
///     Ok(built)
/// }
/// assert!(assemble(3).is_ok());
/// ```
#[macro_export]
macro_rules! ensure_post {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Postcondition(
                format!($($msg)*)
            ));
        }
    };
}

/// Bail out immediately with `Err(Error::Runtime(...))`.
///
/// # Example
/// ```
/// use gof_core::fail;
/// fn unsupported() -> gof_core::errors::Result<()> {
///     fail!("this recipe is not supported");
/// }
/// assert!(unsupported().is_err());
/// ```
#[macro_export]
macro_rules! fail {
    ($($msg:tt)*) => {
        return Err($crate::errors::Error::Runtime(format!($($msg)*)))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        let err = Error::UnknownVariant {
            name: "psd".into(),
            expected: "pdf, text, spreadsheet".into(),
        };
        assert_eq!(
            err.to_string(),
            "unknown variant `psd`, expected one of: pdf, text, spreadsheet"
        );

        let err = Error::MissingComponent("processor".into());
        assert_eq!(err.to_string(), "missing component: processor");
    }

    #[test]
    fn ensure_returns_precondition() {
        fn guarded(flag: bool) -> Result<()> {
            ensure!(flag, "flag must be set");
            Ok(())
        }
        assert_eq!(
            guarded(false),
            Err(Error::Precondition("flag must be set".into()))
        );
        assert!(guarded(true).is_ok());
    }

    #[test]
    fn fail_is_runtime() {
        fn always() -> Result<()> {
            fail!("nope: {}", 7);
        }
        assert_eq!(always(), Err(Error::Runtime("nope: 7".into())));
    }
}
