//! Fixed 9-point Gauss-Legendre quadrature, used for cubic arc length
//! (spec §4.7, §9).
//!
//! The order is fixed, so the nodes/weights are tabulated as constants
//! rather than recomputed via Golub-Welsch at call time the way the
//! teacher's general-order `GaussLegendreIntegration::new` does — this
//! core only ever needs one order.

use spline_core::Real;

/// Quadrature nodes on `[-1, 1]`.
pub const NODES: [Real; 9] = [
    0.0,
    -0.324_253_423_403_809,
    0.324_253_423_403_809,
    -0.613_371_432_700_590,
    0.613_371_432_700_590,
    -0.836_031_107_326_636,
    0.836_031_107_326_636,
    -0.968_160_239_507_626,
    0.968_160_239_507_626,
];

/// Weights corresponding to `NODES`.
pub const WEIGHTS: [Real; 9] = [
    0.330_239_355_001_260,
    0.312_347_077_040_003,
    0.312_347_077_040_003,
    0.260_610_696_402_935,
    0.260_610_696_402_935,
    0.180_648_160_694_857,
    0.180_648_160_694_857,
    0.081_274_388_361_574,
    0.081_274_388_361_574,
];

/// Integrate `f` over `[a, b]` using the fixed 9-point Gauss-Legendre rule,
/// mapping `[-1, 1]` onto `[a, b]`.
pub fn integrate<F: Fn(Real) -> Real>(f: F, a: Real, b: Real) -> Real {
    let half = 0.5 * (b - a);
    let mid = 0.5 * (a + b);
    let sum: Real = NODES
        .iter()
        .zip(WEIGHTS.iter())
        .map(|(&xi, &wi)| wi * f(mid + half * xi))
        .sum();
    sum * half
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn weights_sum_to_two() {
        let sum: Real = WEIGHTS.iter().sum();
        assert_abs_diff_eq!(sum, 2.0, epsilon = 1e-12);
    }

    #[test]
    fn integrates_constant_exactly() {
        let v = integrate(|_| 1.0, 0.0, 3.0);
        assert_abs_diff_eq!(v, 3.0, epsilon = 1e-12);
    }

    #[test]
    fn integrates_polynomial_exactly() {
        // 9-point Gauss-Legendre is exact for polynomials up to degree 17.
        let v = integrate(|x| x * x * x, 0.0, 2.0);
        assert_abs_diff_eq!(v, 4.0, epsilon = 1e-9);
    }

    #[test]
    fn integrates_sqrt_one_plus_x_squared() {
        // Matches the arc-length integrand shape used by cubic length.
        let v = integrate(|x: Real| (1.0 + x * x).sqrt(), 0.0, 1.0);
        let expected = 1.147_793_574_696_019_1;
        assert_abs_diff_eq!(v, expected, epsilon = 1e-8);
    }
}
