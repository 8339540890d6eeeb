//! Fixed 4×4 characteristic matrices for the five spline families
//! (spec §4.9).
//!
//! Each matrix `M` maps a family's 4-control-point vector to the
//! coefficient vector of the corresponding cubic: `[c0 c1 c2 c3]ᵀ = M ·
//! control`.

use spline_math::matrix::Matrix4x4;

/// The Bezier characteristic matrix. Stride 3.
pub fn bezier() -> Matrix4x4 {
    Matrix4x4::make([
        1.0, 0.0, 0.0, 0.0, //
        -3.0, 3.0, 0.0, 0.0, //
        3.0, -6.0, 3.0, 0.0, //
        -1.0, 3.0, -3.0, 1.0,
    ])
}

/// The Hermite characteristic matrix (control = `[p0, m0, p1, m1]`). Stride 2.
pub fn hermite() -> Matrix4x4 {
    Matrix4x4::make([
        1.0, 0.0, 0.0, 0.0, //
        0.0, 1.0, 0.0, 0.0, //
        -3.0, -2.0, 3.0, -1.0, //
        2.0, 1.0, -2.0, 1.0,
    ])
}

/// The Cardinal characteristic matrix with tension `a`. Stride 1.
///
/// `catmull_rom() == cardinal(0.5)`.
pub fn cardinal(a: f64) -> Matrix4x4 {
    Matrix4x4::make([
        0.0, 1.0, 0.0, 0.0, //
        -a, 0.0, a, 0.0, //
        2.0 * a, a - 3.0, 3.0 - 2.0 * a, -a, //
        -a, 2.0 - a, a - 2.0, a,
    ])
}

/// The Catmull-Rom characteristic matrix, i.e. `cardinal(0.5)`. Stride 1.
pub fn catmull_rom() -> Matrix4x4 {
    cardinal(0.5)
}

/// The B-spline (basis) characteristic matrix. Stride 1.
pub fn basis() -> Matrix4x4 {
    let sixth = 1.0 / 6.0;
    Matrix4x4::make([
        1.0 * sixth,
        4.0 * sixth,
        1.0 * sixth,
        0.0,
        -3.0 * sixth,
        0.0,
        3.0 * sixth,
        0.0,
        3.0 * sixth,
        -6.0 * sixth,
        3.0 * sixth,
        0.0,
        -1.0 * sixth,
        3.0 * sixth,
        -3.0 * sixth,
        1.0 * sixth,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn scenario_i_cardinal_half_matches_table() {
        let m = cardinal(0.5);
        let expected = [
            0.0, 1.0, 0.0, 0.0, -0.5, 0.0, 0.5, 0.0, 1.0, -2.5, 2.0, -0.5, -0.5, 1.5, -1.5, 0.5,
        ];
        for i in 0..4 {
            for j in 0..4 {
                assert_abs_diff_eq!(m.mij(i, j), expected[i * 4 + j], epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn catmull_rom_is_cardinal_half() {
        assert_eq!(catmull_rom(), cardinal(0.5));
    }

    #[test]
    fn bezier_endpoint_row_is_identity_like() {
        let m = bezier();
        assert_eq!(m.mij(0, 0), 1.0);
        assert_eq!(m.mij(0, 1), 0.0);
        assert_eq!(m.mij(0, 2), 0.0);
        assert_eq!(m.mij(0, 3), 0.0);
    }

    #[test]
    fn basis_matrix_rows_sum_correctly() {
        let m = basis();
        // Row 0 sums to 1 (partition of unity at t=0 for a uniform basis spline).
        let row0_sum = (0..4).map(|j| m.mij(0, j)).sum::<f64>();
        assert_abs_diff_eq!(row0_sum, 1.0, epsilon = 1e-9);
    }
}
