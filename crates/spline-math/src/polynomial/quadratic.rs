//! `Quadratic` — `p(x) = c0 + c1*x + c2*x^2` (spec §4.6).

use super::cubic::Cubic;
use super::linear::Linear;
use super::{ordered_interval, Roots};
use crate::interval::Interval;
use crate::monotonicity::{guaranteed_monotonicity_from_comparison, Monotonicity};
use crate::rounding::round;
use spline_core::{Precision, Real, PRECISION_DEFAULT};

/// `p(x) = c0 + c1*x + c2*x^2`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quadratic {
    c0: Real,
    c1: Real,
    c2: Real,
    precision: Precision,
}

impl Quadratic {
    /// Construct at an explicit precision.
    pub fn new(c0: Real, c1: Real, c2: Real, precision: Precision) -> Self {
        Self {
            c0: round(c0, precision),
            c1: round(c1, precision),
            c2: round(c2, precision),
            precision,
        }
    }

    /// Construct at the default precision.
    pub fn make(c0: Real, c1: Real, c2: Real) -> Self {
        Self::new(c0, c1, c2, PRECISION_DEFAULT)
    }

    /// Build from `[c0, c1, c2]`.
    pub fn from_vector(components: [Real; 3], precision: Precision) -> Self {
        Self::new(components[0], components[1], components[2], precision)
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

    /// This polynomial's precision.
    pub fn precision(&self) -> Precision {
        self.precision
    }

    /// `p(x) = c0 + c1*x + c2*x^2`, rounded to `precision`.
    pub fn solve(&self, x: Real) -> Real {
        round(self.c0 + self.c1 * x + self.c2 * x * x, self.precision)
    }

    /// A closure evaluating `p` at its argument.
    pub fn to_solver(&self) -> impl Fn(Real) -> Real + '_ {
        move |x| self.solve(x)
    }

    /// Degenerate view as a `Linear` when `c2 == 0`.
    fn as_linear(&self) -> Linear {
        Linear::new(self.c0, self.c1, self.precision)
    }

    /// Roots of `p(x) = y`, classified by the discriminant
    /// `D = c1^2 - 4*c2*(c0 - y)`. Delegates to `Linear::solve_inverse`
    /// when `c2 == 0`.
    pub fn solve_inverse(&self, y: Real) -> Roots {
        if self.c2 == 0.0 {
            return match self.as_linear().solve_inverse(y) {
                Some(r) => Roots::collect(vec![r], self.precision),
                None => Roots::empty(),
            };
        }
        let d = self.c1 * self.c1 - 4.0 * self.c2 * (self.c0 - y);
        if d < 0.0 {
            Roots::empty()
        } else if d == 0.0 {
            Roots::collect(vec![-self.c1 / (2.0 * self.c2)], self.precision)
        } else {
            let sqrt_d = d.sqrt();
            let r1 = (-self.c1 - sqrt_d) / (2.0 * self.c2);
            let r2 = (-self.c1 + sqrt_d) / (2.0 * self.c2);
            Roots::collect(vec![r1, r2], self.precision)
        }
    }

    /// A closure solving `p(x) = y` for its argument `y`.
    pub fn to_inverse_solver(&self) -> impl Fn(Real) -> Roots + '_ {
        move |y| self.solve_inverse(y)
    }

    /// `Linear(c1, 2*c2)`.
    pub fn derivative(&self) -> Linear {
        Linear::new(self.c1, 2.0 * self.c2, self.precision)
    }

    /// `Cubic(k, c0, c1/2, c2/3)`.
    pub fn antiderivative(&self, k: Real) -> Cubic {
        Cubic::new(k, self.c0, self.c1 / 2.0, self.c2 / 3.0, self.precision)
    }

    /// The root of the derivative: `None` when both `c1 == 0` and
    /// `c2 == 0`, `Some(0.0)` when only `c2 == 0`, else `-c1/(2*c2)`.
    pub fn extreme(&self) -> Option<Real> {
        if self.c1 == 0.0 && self.c2 == 0.0 {
            None
        } else if self.c2 == 0.0 {
            Some(0.0)
        } else {
            Some(round(-self.c1 / (2.0 * self.c2), self.precision))
        }
    }

    /// Classify monotonicity, optionally over `interval`.
    pub fn monotonicity(&self, interval: Option<&Interval>) -> Monotonicity {
        if self.c1 == 0.0 && self.c2 == 0.0 {
            return Monotonicity::Constant;
        }
        if self.c2 == 0.0 {
            return self.as_linear().monotonicity();
        }
        let Some(i) = interval else {
            return Monotonicity::None;
        };
        if i.size() == 0.0 {
            return Monotonicity::Constant;
        }
        let extreme = self.extreme();
        let inside = extreme.is_some_and(|e| {
            i.contains(
                e,
                crate::interval::ContainsOptions {
                    include_start: false,
                    include_end: false,
                },
            )
        });
        if inside {
            return Monotonicity::None;
        }
        guaranteed_monotonicity_from_comparison(self.solve(i.start()), self.solve(i.end()))
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

    /// Min/max over the domain endpoints, plus the extreme when it lies
    /// inside `x_domain`.
    pub fn range(&self, x_domain: &Interval) -> Interval {
        let mut values = vec![self.solve(x_domain.start()), self.solve(x_domain.end())];
        if let Some(e) = self.extreme() {
            if x_domain.contains(e, crate::interval::ContainsOptions::default()) {
                values.push(self.solve(e));
            }
        }
        ordered_interval(&values, self.precision)
    }

    /// Closed-form arc length. Delegates to `Linear::length` when
    /// `c2 == 0`; returns `0` when `x_domain` has zero size.
    pub fn length(&self, x_domain: &Interval) -> Real {
        if x_domain.size() == 0.0 {
            return 0.0;
        }
        if self.c2 == 0.0 {
            return self.as_linear().length(x_domain);
        }
        let f = |x: Real| {
            let d = self.c1 + 2.0 * self.c2 * x;
            let root = (1.0 + d * d).sqrt();
            (d * root + (d + root).abs().ln()) / (4.0 * self.c2)
        };
        round(f(x_domain.end()) - f(x_domain.start()), self.precision)
    }
}
