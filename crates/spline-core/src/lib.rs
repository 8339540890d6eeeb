//! # spline-core
//!
//! Shared scalar aliases and the error hierarchy for the spline algebra
//! workspace. No algebra lives in this crate — see `spline-math` for
//! polynomials/vectors/matrices and `spline-geometry` for the characteristic
//! matrices and curve factory.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod errors;

/// Floating-point type used throughout the workspace.
pub type Real = f64;

/// Number of decimal places retained by `round`; travels with every
/// numeric value in the core.
pub type Precision = u32;

/// Default rounding precision (decimal places).
pub const PRECISION_DEFAULT: Precision = 12;

/// Maximum supported rounding precision. `round` may short-circuit at this
/// precision and return its input unchanged.
pub const PRECISION_MAX: Precision = 12;

/// Require that `value` is finite, per the "NaN/±∞ are programmer errors"
/// rule in the core's error handling design.
pub fn require_finite(value: Real, what: &str) -> errors::Result<Real> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(errors::Error::InvalidInput(format!(
            "{what} must be finite, got {value}"
        )))
    }
}
