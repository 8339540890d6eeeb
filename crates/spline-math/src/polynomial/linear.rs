//! `Linear` — `p(x) = c0 + c1*x` (spec §4.5).

use super::ordered_interval;
use super::quadratic::Quadratic;
use crate::interval::Interval;
use crate::monotonicity::Monotonicity;
use crate::rounding::round;
use spline_core::{Precision, Real, PRECISION_DEFAULT};

/// `p(x) = c0 + c1*x`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Linear {
    c0: Real,
    c1: Real,
    precision: Precision,
}

impl Linear {
    /// Construct at an explicit precision.
    pub fn new(c0: Real, c1: Real, precision: Precision) -> Self {
        Self {
            c0: round(c0, precision),
            c1: round(c1, precision),
            precision,
        }
    }

    /// Construct at the default precision.
    pub fn make(c0: Real, c1: Real) -> Self {
        Self::new(c0, c1, PRECISION_DEFAULT)
    }

    /// Build from `[c0, c1]`.
    pub fn from_vector(components: [Real; 2], precision: Precision) -> Self {
        Self::new(components[0], components[1], precision)
    }

    /// The constant term.
    pub fn c0(&self) -> Real {
        self.c0
    }

    /// The linear coefficient.
    pub fn c1(&self) -> Real {
        self.c1
    }

    /// This polynomial's precision.
    pub fn precision(&self) -> Precision {
        self.precision
    }

    /// `p(x) = c0 + c1*x`, rounded to `precision`.
    pub fn solve(&self, x: Real) -> Real {
        round(self.c0 + self.c1 * x, self.precision)
    }

    /// A closure evaluating `p` at its argument.
    pub fn to_solver(&self) -> impl Fn(Real) -> Real + '_ {
        move |x| self.solve(x)
    }

    /// The unique root of `p(x) = y`, or `None` when `c1 == 0` (the
    /// equation is then either unsatisfiable or universally satisfied;
    /// universal satisfiability is deliberately not signaled as a root).
    pub fn solve_inverse(&self, y: Real) -> Option<Real> {
        if self.c1 == 0.0 {
            None
        } else {
            Some(round((y - self.c0) / self.c1, self.precision))
        }
    }

    /// A closure solving `p(x) = y` for its argument `y`.
    pub fn to_inverse_solver(&self) -> impl Fn(Real) -> Option<Real> + '_ {
        move |y| self.solve_inverse(y)
    }

    /// `root(p) = solveInverse(p, 0)`.
    pub fn root(&self) -> Option<Real> {
        self.solve_inverse(0.0)
    }

    /// The constant-coefficient polynomial `c1`, represented as a
    /// `Linear` with a zero slope.
    pub fn derivative(&self) -> Linear {
        Linear::new(self.c1, 0.0, self.precision)
    }

    /// `antiderivative(p, k) = Quadratic(k, c0, c1/2)`.
    pub fn antiderivative(&self, k: Real) -> Quadratic {
        Quadratic::new(k, self.c0, self.c1 / 2.0, self.precision)
    }

    /// `increasing` if `c1 > 0`, `decreasing` if `c1 < 0`, `constant` if
    /// `c1 == 0`.
    pub fn monotonicity(&self) -> Monotonicity {
        if self.c1 > 0.0 {
            Monotonicity::Increasing
        } else if self.c1 < 0.0 {
            Monotonicity::Decreasing
        } else {
            Monotonicity::Constant
        }
    }

    /// The interval whose endpoints are `solveInverse` at `y_range`'s
    /// start and end, ordered. `None` when `c1 == 0` (no inverse exists).
    pub fn domain(&self, y_range: &Interval) -> Option<Interval> {
        let a = self.solve_inverse(y_range.start())?;
        let b = self.solve_inverse(y_range.end())?;
        Some(ordered_interval(&[a, b], self.precision))
    }

    /// The interval from `solve(x_domain.start)` to `solve(x_domain.end)`,
    /// ordered.
    pub fn range(&self, x_domain: &Interval) -> Interval {
        let a = self.solve(x_domain.start());
        let b = self.solve(x_domain.end());
        ordered_interval(&[a, b], self.precision)
    }

    /// `sqrt(1 + c1^2) * size(x_domain)`, rounded.
    pub fn length(&self, x_domain: &Interval) -> Real {
        round((1.0 + self.c1 * self.c1).sqrt() * x_domain.size(), self.precision)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn solve_evaluates_linear() {
        let p = Linear::make(1.0, 2.0);
        assert_abs_diff_eq!(p.solve(3.0), 7.0, epsilon = 1e-12);
    }

    #[test]
    fn solve_inverse_unique_root() {
        let p = Linear::make(1.0, 2.0);
        assert_abs_diff_eq!(p.solve_inverse(7.0).unwrap(), 3.0, epsilon = 1e-12);
    }

    #[test]
    fn solve_inverse_none_when_flat() {
        let p = Linear::make(5.0, 0.0);
        assert_eq!(p.solve_inverse(5.0), None);
        assert_eq!(p.solve_inverse(6.0), None);
    }

    #[test]
    fn derivative_is_constant_linear() {
        let p = Linear::make(1.0, 3.0);
        let d = p.derivative();
        assert_eq!(d.c0(), 3.0);
        assert_eq!(d.c1(), 0.0);
    }

    #[test]
    fn antiderivative_sets_c0_to_k() {
        let p = Linear::make(1.0, 4.0);
        let a = p.antiderivative(10.0);
        assert_eq!(a.solve(0.0), 10.0);
    }

    #[test]
    fn monotonicity_by_sign_of_c1() {
        assert_eq!(Linear::make(0.0, 1.0).monotonicity(), Monotonicity::Increasing);
        assert_eq!(Linear::make(0.0, -1.0).monotonicity(), Monotonicity::Decreasing);
        assert_eq!(Linear::make(5.0, 0.0).monotonicity(), Monotonicity::Constant);
    }

    #[test]
    fn length_matches_hypotenuse_formula() {
        let p = Linear::make(0.0, 1.0);
        let dom = Interval::make(0.0, 1.0).unwrap();
        assert_abs_diff_eq!(p.length(&dom), 2.0_f64.sqrt(), epsilon = 1e-9);
    }

    #[test]
    fn range_orders_endpoints_for_decreasing_line() {
        let p = Linear::make(0.0, -1.0);
        let dom = Interval::make(0.0, 2.0).unwrap();
        let r = p.range(&dom);
        assert_eq!(r.start(), -2.0);
        assert_eq!(r.end(), 0.0);
    }
}
