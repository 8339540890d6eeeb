//! Polynomial representations — `Linear`, `Quadratic`, `Cubic` — with
//! evaluation, inverse evaluation, calculus, monotonicity, domain/range,
//! and arc length (spec §4.5–§4.7).
//!
//! Degree degeneracy (a higher-degree routine whose leading coefficient is
//! zero) is handled by explicit dispatch to the lower-degree
//! implementation at every call site that can encounter it — see the
//! `Design Notes` entry in DESIGN.md. The three types live in one module
//! because `Linear::antiderivative` returns a `Quadratic` and
//! `Quadratic::antiderivative` returns a `Cubic`, mirroring the circular
//! coupling the teacher's own source notes between `cubic`/`quadratic`/
//! `linear`.

pub mod cubic;
pub mod linear;
pub mod quadratic;

pub use cubic::Cubic;
pub use linear::Linear;
pub use quadratic::Quadratic;

use crate::rounding::round;
use spline_core::{Precision, Real};

/// An ordered, deduplicated sequence of 0 to 3 real roots.
///
/// Used for both "zero to two" (quadratic) and "zero to three" (cubic)
/// solution sets — Rust's `Vec` already represents "zero or more" without
/// needing a distinct type per upper bound; the producing function's doc
/// comment states the bound it actually respects.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Roots(Vec<Real>);

impl Roots {
    /// Build from already-ascending, already-deduplicated values — only
    /// used internally by the constructors below.
    fn from_sorted(values: Vec<Real>) -> Self {
        Self(values)
    }

    /// Build a root sequence from raw (possibly unordered, possibly
    /// duplicate) values: sorts ascending, rounds to `precision`, and
    /// collapses exact ties.
    pub fn collect(mut values: Vec<Real>, precision: Precision) -> Self {
        for v in values.iter_mut() {
            *v = round(*v, precision);
        }
        values.sort_by(|a, b| a.partial_cmp(b).expect("roots must be finite"));
        values.dedup_by(|a, b| a == b);
        Self::from_sorted(values)
    }

    /// The empty root set.
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    /// The roots in ascending order.
    pub fn as_slice(&self) -> &[Real] {
        &self.0
    }

    /// Consume into the underlying ascending `Vec`.
    pub fn into_vec(self) -> Vec<Real> {
        self.0
    }

    /// Number of distinct roots.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether there are no roots.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<Real>> for Roots {
    fn from(values: Vec<Real>) -> Self {
        Self(values)
    }
}

/// Build `Interval::make(min(a, b), max(a, b))`, used by every `domain`/
/// `range` implementation since solving or evaluating at the two ends of
/// an interval need not preserve ordering (e.g. a decreasing linear map).
pub(crate) fn ordered_interval(
    values: &[Real],
    precision: Precision,
) -> crate::interval::Interval {
    let min = values.iter().cloned().fold(Real::INFINITY, Real::min);
    let max = values.iter().cloned().fold(Real::NEG_INFINITY, Real::max);
    crate::interval::Interval::new(min, max, precision)
        .expect("min <= max by construction, so Interval::new cannot fail")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roots_collect_sorts_and_dedupes() {
        let r = Roots::collect(vec![2.0, -1.0, 2.0, 0.0], 6);
        assert_eq!(r.as_slice(), &[-1.0, 0.0, 2.0]);
    }

    #[test]
    fn roots_collect_rounds_before_dedup() {
        let r = Roots::collect(vec![1.000000001, 1.0000000015], 6);
        assert_eq!(r.len(), 1);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use approx::abs_diff_eq;
    use proptest::prelude::*;
    use spline_core::PRECISION_DEFAULT;

    const COEFF: std::ops::Range<Real> = -100.0..100.0;

    proptest! {
        #[test]
        fn linear_solve_matches_direct_formula(c0 in COEFF, c1 in COEFF, x in COEFF) {
            let p = Linear::make(c0, c1);
            prop_assert!(abs_diff_eq!(p.solve(x), c0 + c1 * x, epsilon = 1e-6));
        }

        #[test]
        fn quadratic_solve_matches_direct_formula(c0 in COEFF, c1 in COEFF, c2 in COEFF, x in COEFF) {
            let p = Quadratic::make(c0, c1, c2);
            prop_assert!(abs_diff_eq!(p.solve(x), c0 + c1 * x + c2 * x * x, epsilon = 1e-3));
        }

        #[test]
        fn linear_solve_inverse_round_trips(c0 in COEFF, c1 in -100.0..-1.0_f64, y in COEFF) {
            let p = Linear::make(c0, c1);
            if let Some(x) = p.solve_inverse(y) {
                prop_assert!(abs_diff_eq!(p.solve(x), y, epsilon = 1e-6));
            }
        }

        #[test]
        fn quadratic_solve_inverse_round_trips(c0 in COEFF, c1 in COEFF, c2 in 1.0..100.0_f64, y in COEFF) {
            let p = Quadratic::make(c0, c1, c2);
            for &x in p.solve_inverse(y).as_slice() {
                prop_assert!(abs_diff_eq!(p.solve(x), y, epsilon = 1e-3));
            }
        }

        #[test]
        fn linear_derivative_of_antiderivative_is_identity(c0 in COEFF, c1 in COEFF, k in COEFF) {
            let p = Linear::make(c0, c1);
            let back = p.antiderivative(k).derivative();
            prop_assert!(abs_diff_eq!(back.c0(), p.c0(), epsilon = 1e-6));
            prop_assert!(abs_diff_eq!(back.c1(), p.c1(), epsilon = 1e-6));
        }

        #[test]
        fn quadratic_derivative_of_antiderivative_is_identity(c0 in COEFF, c1 in COEFF, c2 in COEFF, k in COEFF) {
            let p = Quadratic::make(c0, c1, c2);
            let back = p.antiderivative(k).derivative();
            prop_assert!(abs_diff_eq!(back.c0(), p.c0(), epsilon = 1e-3));
            prop_assert!(abs_diff_eq!(back.c1(), p.c1(), epsilon = 1e-3));
            prop_assert!(abs_diff_eq!(back.c2(), p.c2(), epsilon = 1e-3));
        }

        #[test]
        fn linear_antiderivative_solves_to_k_at_zero(c0 in COEFF, c1 in COEFF, k in COEFF) {
            let p = Linear::make(c0, c1);
            prop_assert!(abs_diff_eq!(p.antiderivative(k).solve(0.0), round(k, PRECISION_DEFAULT), epsilon = 1e-6));
        }

        #[test]
        fn quadratic_antiderivative_solves_to_k_at_zero(c0 in COEFF, c1 in COEFF, c2 in COEFF, k in COEFF) {
            let p = Quadratic::make(c0, c1, c2);
            prop_assert!(abs_diff_eq!(p.antiderivative(k).solve(0.0), round(k, PRECISION_DEFAULT), epsilon = 1e-6));
        }

        #[test]
        fn quadratic_extreme_satisfies_derivative_zero(c0 in COEFF, c1 in COEFF, c2 in 1.0..100.0_f64) {
            let p = Quadratic::make(c0, c1, c2);
            let e = p.extreme().expect("c2 != 0");
            prop_assert!(abs_diff_eq!(p.derivative().solve(e), 0.0, epsilon = 1e-3));
        }
    }
}
