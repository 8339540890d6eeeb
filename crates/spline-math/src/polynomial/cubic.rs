//! `Cubic` — `p(x) = c0 + c1*x + c2*x^2 + c3*x^3` (spec §4.7).

use super::quadratic::Quadratic;
use super::{ordered_interval, Roots};
use crate::interval::{ContainsOptions, Interval};
use crate::monotonicity::Monotonicity;
use crate::quadrature;
use crate::rounding::round;
use spline_core::{Precision, Real, PRECISION_DEFAULT};
use std::f64::consts::PI;

/// `p(x) = c0 + c1*x + c2*x^2 + c3*x^3`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cubic {
    c0: Real,
    c1: Real,
    c2: Real,
    c3: Real,
    precision: Precision,
}

impl Cubic {
    /// Construct at an explicit precision.
    pub fn new(c0: Real, c1: Real, c2: Real, c3: Real, precision: Precision) -> Self {
        Self {
            c0: round(c0, precision),
            c1: round(c1, precision),
            c2: round(c2, precision),
            c3: round(c3, precision),
            precision,
        }
    }

    /// Construct at the default precision.
    pub fn make(c0: Real, c1: Real, c2: Real, c3: Real) -> Self {
        Self::new(c0, c1, c2, c3, PRECISION_DEFAULT)
    }

    /// Build from `[c0, c1, c2, c3]`.
    pub fn from_vector(components: [Real; 4], precision: Precision) -> Self {
        Self::new(
            components[0],
            components[1],
            components[2],
            components[3],
            precision,
        )
    }

    /// The constant term.
    pub fn c0(&self) -> Real {
        self.c0
    }

    /// The linear coefficient.
    pub fn c1(&self) -> Real {
        self.c1
    }

    /// The quadratic coefficient.
    pub fn c2(&self) -> Real {
        self.c2
    }

    /// The cubic coefficient.
    pub fn c3(&self) -> Real {
        self.c3
    }

    /// This polynomial's precision.
    pub fn precision(&self) -> Precision {
        self.precision
    }

    /// `p(x) = c0 + c1*x + c2*x^2 + c3*x^3`, rounded to `precision`.
    pub fn solve(&self, x: Real) -> Real {
        round(
            self.c0 + x * (self.c1 + x * (self.c2 + x * self.c3)),
            self.precision,
        )
    }

    /// A closure evaluating `p` at its argument.
    pub fn to_solver(&self) -> impl Fn(Real) -> Real + '_ {
        move |x| self.solve(x)
    }

    /// Degenerate view as a `Quadratic` when `c3 == 0`.
    fn as_quadratic(&self) -> Quadratic {
        Quadratic::new(self.c0, self.c1, self.c2, self.precision)
    }

    /// Roots of `p(x) = y`. Delegates to `Quadratic::solve_inverse` when
    /// `c3 == 0`; otherwise reduces to a depressed cubic and classifies by
    /// the sign of the discriminant `Δ = -4p^3 - 27q^2`.
    pub fn solve_inverse(&self, y: Real) -> Roots {
        if self.c3 == 0.0 {
            return self.as_quadratic().solve_inverse(y);
        }

        let a = self.c3;
        let b = self.c2;
        let c = self.c1;
        let d = self.c0 - y;

        let shift = b / (3.0 * a);
        let p2 = b / a;
        let p1 = c / a;
        let p0 = d / a;

        let p = p1 - p2 * p2 / 3.0;
        let q = (2.0 * p2.powi(3)) / 27.0 - (p2 * p1) / 3.0 + p0;

        let delta = -4.0 * p.powi(3) - 27.0 * q * q;

        // Δ is the difference of two O(p³)/O(q²) terms; at a true repeated
        // root it can cancel to a value that is nonzero only by
        // catastrophic cancellation (e.g. p=-16/3, q=128/27 leaves
        // Δ ≈ -1.14e-13, not 0.0). Scale the zero-test by the magnitude of
        // the terms being subtracted instead of comparing against a bare 0.
        let scale = (4.0 * p.abs().powi(3) + 27.0 * q * q).max(1.0);
        let tol = 1e-9 * scale;

        let ts: Vec<Real> = if delta > tol {
            let r = 2.0 * (-p / 3.0).sqrt();
            let phi = (1.0 / 3.0) * ((3.0 * q) / (2.0 * p) * (-3.0 / p).sqrt()).acos();
            (0..3)
                .map(|k| r * (phi - 2.0 * PI * (k as Real) / 3.0).cos())
                .collect()
        } else if delta.abs() <= tol {
            if p == 0.0 && q == 0.0 {
                vec![0.0]
            } else {
                vec![3.0 * q / p, -3.0 * q / (2.0 * p)]
            }
        } else {
            let inner = (q * q / 4.0 + p.powi(3) / 27.0).sqrt();
            let t = (-q / 2.0 + inner).cbrt() + (-q / 2.0 - inner).cbrt();
            vec![t]
        };

        let xs: Vec<Real> = ts.into_iter().map(|t| t - shift).collect();
        Roots::collect(xs, self.precision)
    }

    /// A closure solving `p(x) = y` for its argument `y`.
    pub fn to_inverse_solver(&self) -> impl Fn(Real) -> Roots + '_ {
        move |y| self.solve_inverse(y)
    }

    /// `Quadratic(c1, 2*c2, 3*c3)`.
    pub fn derivative(&self) -> Quadratic {
        Quadratic::new(self.c1, 2.0 * self.c2, 3.0 * self.c3, self.precision)
    }

    /// Roots of the derivative (0, 1, or 2 values).
    pub fn extrema(&self) -> Roots {
        self.derivative().solve_inverse(0.0)
    }

    /// Classify monotonicity, optionally over `interval`. Delegates to
    /// `Quadratic::monotonicity` when `c3 == 0`.
    pub fn monotonicity(&self, interval: Option<&Interval>) -> Monotonicity {
        if self.c3 == 0.0 {
            return self.as_quadratic().monotonicity(interval);
        }
        let Some(i) = interval else {
            return Monotonicity::None;
        };
        if i.size() == 0.0 {
            return Monotonicity::Constant;
        }
        let extrema = self.extrema();
        let inside_count = extrema
            .as_slice()
            .iter()
            .filter(|&&e| {
                i.contains(
                    e,
                    ContainsOptions {
                        include_start: false,
                        include_end: false,
                    },
                )
            })
            .count();
        if inside_count > 0 {
            return Monotonicity::None;
        }
        crate::monotonicity::guaranteed_monotonicity_from_comparison(
            self.solve(i.start()),
            self.solve(i.end()),
        )
    }

    /// Union of `solveInverse` at `y_range`'s start and end; `None` when
    /// both are empty.
    pub fn domain(&self, y_range: &Interval) -> Option<Interval> {
        let mut values = self.solve_inverse(y_range.start()).into_vec();
        values.extend(self.solve_inverse(y_range.end()).into_vec());
        if values.is_empty() {
            None
        } else {
            Some(ordered_interval(&values, self.precision))
        }
    }

    /// Min/max over the domain endpoints, plus every extremum that lies
    /// inside `x_domain`.
    pub fn range(&self, x_domain: &Interval) -> Interval {
        let mut values = vec![self.solve(x_domain.start()), self.solve(x_domain.end())];
        for &e in self.extrema().as_slice() {
            if x_domain.contains(e, ContainsOptions::default()) {
                values.push(self.solve(e));
            }
        }
        ordered_interval(&values, self.precision)
    }

    /// Arc length via the fixed 9-point Gauss-Legendre quadrature of
    /// `sqrt(1 + p'(x)^2)`. Delegates to `Quadratic::length` when
    /// `c3 == 0`.
    pub fn length(&self, x_domain: &Interval) -> Real {
        if self.c3 == 0.0 {
            return self.as_quadratic().length(x_domain);
        }
        let derivative = self.derivative();
        let integrand = |x: Real| {
            let d = derivative.solve(x);
            (1.0 + d * d).sqrt()
        };
        round(
            quadrature::integrate(integrand, x_domain.start(), x_domain.end()),
            self.precision,
        )
    }
}
