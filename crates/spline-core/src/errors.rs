//! Error types for the spline algebra workspace.
//!
//! One variant per classified failure kind named in the core's error
//! handling design. The `ensure!`/`fail!` macros mirror the early-return
//! convention used throughout the workspace: construction and evaluation
//! routines surface a classified error rather than panicking or silently
//! propagating NaN.

use thiserror::Error;

/// The error type used throughout the spline algebra workspace.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// `Interval::make` called with `end < start`.
    #[error("invalid interval: end ({end}) < start ({start})")]
    InvalidInterval {
        /// The requested start.
        start: f64,
        /// The requested end.
        end: f64,
    },

    /// `to_cubic_scalars` called with too few scalars, an illegal stride,
    /// or a sequence length not aligned to the stride.
    #[error("invalid chunking: {0}")]
    InvalidChunking(String),

    /// A curve `position_at` input outside `[0, 1]`, a point missing an
    /// axis, or a non-finite value reaching a public constructor.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// `solve_system` when the coefficient determinant rounds to zero.
    #[error("singular matrix: determinant rounds to zero")]
    SingularMatrix,

    /// `solve_where` requested on an axis whose monotonicity is `none` (or
    /// `constant`, which cannot be inverted either).
    #[error("axis is not monotone over the curve domain")]
    NonMonotonicAxis,

    /// `solve_where` found no parameter in `[0, 1]` mapping to the
    /// requested position.
    #[error("no parameter in [0, 1] solves for the requested position")]
    RootUnsolvable,
}

/// Shorthand `Result` type used throughout the spline algebra workspace.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err(Error::InvalidInput(...))` if `$cond` is false.
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::InvalidInput(format!($($msg)*)));
        }
    };
}

/// Return `Err(Error::InvalidInput(...))` immediately.
#[macro_export]
macro_rules! fail {
    ($($msg:tt)*) => {
        return Err($crate::errors::Error::InvalidInput(format!($($msg)*)))
    };
}
