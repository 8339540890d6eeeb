//! # splines
//!
//! Parametric cubic spline algebra: polynomials, characteristic
//! matrices, and arc-length curves.
//!
//! This crate is a **façade** that re-exports all public items from the
//! underlying workspace crates. Application code should depend on this
//! crate rather than the individual `spline-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! splines = "0.1"
//! ```
//!
//! ```rust
//! use approx::assert_abs_diff_eq;
//! use splines::math::polynomial::quadratic::Quadratic;
//!
//! let p = Quadratic::make(0.0, 1.0, 2.0);
//! assert_abs_diff_eq!(p.solve(0.0), 0.0, epsilon = f64::EPSILON);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core types, aliases, and error definitions.
pub use spline_core as core;

/// Rounding, vectors, matrices, intervals, polynomials, and quadrature.
pub use spline_math as math;

/// Characteristic matrices, segment chunking, the spline factory, and
/// arc-length curves.
pub use spline_geometry as geometry;
