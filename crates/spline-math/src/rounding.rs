//! Decimal-precision rounding (spec §4.1).

use spline_core::{Precision, Real, PRECISION_MAX};

/// Round `value` to `precision` decimal digits, half-away-from-zero.
///
/// Short-circuits and returns `value` unchanged when `precision ==
/// PRECISION_MAX`, since `f64::round` at that many digits is
/// indistinguishable from the input for the magnitudes this workspace
/// deals in.
pub fn round(value: Real, precision: Precision) -> Real {
    if precision >= PRECISION_MAX {
        return value;
    }
    let mult = 10_f64.powi(precision as i32);
    (value * mult).round() / mult
}

/// `round` applied to every element of a slice.
pub fn round_all(values: &[Real], precision: Precision) -> Vec<Real> {
    values.iter().map(|&v| round(v, precision)).collect()
}

/// The minimum of two precisions, used when combining two precision-carrying
/// values without an explicit override (spec §9).
pub fn min_precision(a: Precision, b: Precision) -> Precision {
    a.min(b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn closest_rounding() {
        assert_abs_diff_eq!(round(1.2345, 2), 1.23, epsilon = 1e-10);
        assert_abs_diff_eq!(round(1.2355, 2), 1.24, epsilon = 1e-10);
    }

    #[test]
    fn half_away_from_zero() {
        // -0.125 and 2.5 are exact in binary, so these aren't vulnerable to
        // the representation error that a value like -1.005 hits at `* 100`
        // (it lands on -100.49999999999999, one ULP short of the half-way
        // point, and rounds toward zero instead of away from it).
        assert_abs_diff_eq!(round(-0.125, 2), -0.13, epsilon = 1e-9);
        assert_abs_diff_eq!(round(2.5, 0), 3.0, epsilon = 1e-12);
        assert_abs_diff_eq!(round(-2.5, 0), -3.0, epsilon = 1e-12);
    }

    #[test]
    fn max_precision_short_circuits() {
        let v = 1.234_567_891_234_567;
        assert_eq!(round(v, PRECISION_MAX), v);
        assert_eq!(round(v, PRECISION_MAX + 3), v);
    }

    #[test]
    fn min_precision_picks_smaller() {
        assert_eq!(min_precision(4, 9), 4);
        assert_eq!(min_precision(9, 4), 4);
    }
}
