//! Closed interval `[start, end]` (spec §4.4).

use crate::rounding::round;
use spline_core::errors::{Error, Result};
use spline_core::{Precision, Real, PRECISION_DEFAULT};

/// Controls which endpoints `contains` treats as part of the interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContainsOptions {
    /// Whether `start` itself counts as contained.
    pub include_start: bool,
    /// Whether `end` itself counts as contained.
    pub include_end: bool,
}

impl Default for ContainsOptions {
    fn default() -> Self {
        Self {
            include_start: true,
            include_end: true,
        }
    }
}

/// A closed interval `[start, end]` with `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    start: Real,
    end: Real,
    precision: Precision,
}

impl Interval {
    /// Construct `[start, end]`. Fails with `InvalidInterval` if `end < start`.
    pub fn new(start: Real, end: Real, precision: Precision) -> Result<Self> {
        if end < start {
            return Err(Error::InvalidInterval { start, end });
        }
        Ok(Self {
            start: round(start, precision),
            end: round(end, precision),
            precision,
        })
    }

    /// Construct `[start, end]` at the default precision.
    pub fn make(start: Real, end: Real) -> Result<Self> {
        Self::new(start, end, PRECISION_DEFAULT)
    }

    /// Construct a degenerate, zero-size interval `[start, start]`.
    pub fn point(start: Real) -> Self {
        Self {
            start: round(start, PRECISION_DEFAULT),
            end: round(start, PRECISION_DEFAULT),
            precision: PRECISION_DEFAULT,
        }
    }

    /// The lower endpoint.
    pub fn start(&self) -> Real {
        self.start
    }

    /// The upper endpoint.
    pub fn end(&self) -> Real {
        self.end
    }

    /// This interval's precision.
    pub fn precision(&self) -> Precision {
        self.precision
    }

    /// `end - start`.
    pub fn size(&self) -> Real {
        round(self.end - self.start, self.precision)
    }

    /// Whether `x` lies within the interval, per `options`.
    pub fn contains(&self, x: Real, options: ContainsOptions) -> bool {
        let lower_ok = if options.include_start {
            x >= self.start
        } else {
            x > self.start
        };
        let upper_ok = if options.include_end {
            x <= self.end
        } else {
            x < self.end
        };
        lower_ok && upper_ok
    }

    /// Clamp `x` into `[start, end]`.
    pub fn clamp(&self, x: Real) -> Real {
        x.max(self.start).min(self.end)
    }

    /// `start + t * size`.
    pub fn lerp(&self, t: Real) -> Real {
        round(self.start + t * self.size(), self.precision)
    }

    /// `(x - start) / size`.
    pub fn normalize(&self, x: Real) -> Real {
        round((x - self.start) / self.size(), self.precision)
    }

    /// `to.lerp(self.normalize(x))` — remap `x` from this interval into `to`.
    pub fn remap(&self, x: Real, to: &Interval) -> Real {
        to.lerp(self.normalize(x))
    }

    /// Retain the elements of `seq` that fall within this interval,
    /// preserving input order.
    pub fn filter(&self, seq: &[Real]) -> Vec<Real> {
        seq.iter()
            .copied()
            .filter(|&x| self.contains(x, ContainsOptions::default()))
            .collect()
    }

    /// Construct `[min(values), max(values)]`.
    ///
    /// Fails with `InvalidInterval` if `values` is empty (there is no
    /// `start`/`end` to derive).
    pub fn from_min_max(values: &[Real]) -> Result<Self> {
        if values.is_empty() {
            return Err(Error::InvalidInterval {
                start: Real::NAN,
                end: Real::NAN,
            });
        }
        let min = values.iter().cloned().fold(Real::INFINITY, Real::min);
        let max = values.iter().cloned().fold(Real::NEG_INFINITY, Real::max);
        Self::make(min, max)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn clamp_result_is_always_contained(
            start in -1000.0..1000.0_f64,
            width in 0.0..1000.0_f64,
            x in -10_000.0..10_000.0_f64,
        ) {
            let i = Interval::make(start, start + width).unwrap();
            prop_assert!(i.contains(i.clamp(x), ContainsOptions::default()));
        }
    }
}
