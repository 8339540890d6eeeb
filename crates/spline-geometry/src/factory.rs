//! The parametric spline factory — composing a family's characteristic
//! matrix with chunked control scalars into a chain of cubics (spec
//! §4.11).

use crate::characteristic;
use crate::chunking;
use spline_core::errors::Result;
use spline_core::{Precision, Real};
use spline_math::matrix::Matrix4x4;
use spline_math::polynomial::cubic::Cubic;
use spline_math::vector::Vector4;

/// Which spline family to build a chain for.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SplineFamily {
    /// Bezier, stride 3, no endpoint duplication.
    Bezier,
    /// Hermite, stride 2 (controls alternate `p, m, p, m, ...`), no
    /// endpoint duplication.
    Hermite,
    /// Cardinal with tension `a`, stride 1, single endpoint duplication.
    Cardinal(f64),
    /// Catmull-Rom, i.e. `Cardinal(0.5)`, stride 1, single endpoint
    /// duplication.
    CatmullRom,
    /// Uniform B-spline (basis), stride 1, double endpoint duplication.
    Basis,
}

impl SplineFamily {
    fn stride(self) -> usize {
        match self {
            SplineFamily::Bezier => 3,
            SplineFamily::Hermite => 2,
            SplineFamily::Cardinal(_) | SplineFamily::CatmullRom => 1,
            SplineFamily::Basis => 1,
        }
    }

    fn characteristic_matrix(self) -> Matrix4x4 {
        match self {
            SplineFamily::Bezier => characteristic::bezier(),
            SplineFamily::Hermite => characteristic::hermite(),
            SplineFamily::Cardinal(a) => characteristic::cardinal(a),
            SplineFamily::CatmullRom => characteristic::catmull_rom(),
            SplineFamily::Basis => characteristic::basis(),
        }
    }

    /// Duplicate endpoints so a stride-1 family has a defined tangent at
    /// the first and last control point. Cardinal/Catmull-Rom duplicate
    /// each endpoint once; basis duplicates each endpoint twice so the
    /// chain interpolates the first and last control point exactly.
    fn prepare_controls(self, seq: &[Real]) -> Vec<Real> {
        match self {
            SplineFamily::Bezier | SplineFamily::Hermite => seq.to_vec(),
            SplineFamily::Cardinal(_) | SplineFamily::CatmullRom => {
                let mut out = Vec::with_capacity(seq.len() + 2);
                if let Some(&first) = seq.first() {
                    out.push(first);
                }
                out.extend_from_slice(seq);
                if let Some(&last) = seq.last() {
                    out.push(last);
                }
                out
            }
            SplineFamily::Basis => {
                let mut out = Vec::with_capacity(seq.len() + 4);
                if let Some(&first) = seq.first() {
                    out.push(first);
                    out.push(first);
                }
                out.extend_from_slice(seq);
                if let Some(&last) = seq.last() {
                    out.push(last);
                    out.push(last);
                }
                out
            }
        }
    }

    /// This family's chunking helper, applied after endpoint preparation.
    fn chunk(self, prepared: &[Real]) -> Result<Vec<[Real; 4]>> {
        chunking::to_cubic_scalars(prepared, self.stride())
    }
}

/// Build a chain of cubics for one scalar axis: duplicate endpoints per
/// family policy, chunk into overlapping windows of 4, and multiply each
/// window by the family's characteristic matrix to get that segment's
/// coefficient vector.
pub fn build_chain(family: SplineFamily, seq: &[Real], precision: Precision) -> Result<Vec<Cubic>> {
    let prepared = family.prepare_controls(seq);
    let chunks = family.chunk(&prepared)?;
    let m = family.characteristic_matrix();
    Ok(chunks
        .into_iter()
        .map(|chunk| {
            let control = Vector4::from_array(chunk);
            let coeffs = m.vector_product_left(&control);
            Cubic::from_vector(coeffs.components(), precision)
        })
        .collect())
}

/// `splines.bezier.chunkCoefficients(controls)` — named per-family entry
/// points mirroring the external interface, each a thin specialization of
/// `build_chain`.
pub fn bezier_chunk_coefficients(controls: &[Real], precision: Precision) -> Result<Vec<Cubic>> {
    build_chain(SplineFamily::Bezier, controls, precision)
}

/// `splines.hermite.chunkCoefficients(controls)`.
pub fn hermite_chunk_coefficients(controls: &[Real], precision: Precision) -> Result<Vec<Cubic>> {
    build_chain(SplineFamily::Hermite, controls, precision)
}

/// `splines.cardinal(a).chunkCoefficients(controls)`.
pub fn cardinal_chunk_coefficients(
    controls: &[Real],
    a: f64,
    precision: Precision,
) -> Result<Vec<Cubic>> {
    build_chain(SplineFamily::Cardinal(a), controls, precision)
}

/// `splines.catmullRom.chunkCoefficients(controls)`.
pub fn catmull_rom_chunk_coefficients(
    controls: &[Real],
    precision: Precision,
) -> Result<Vec<Cubic>> {
    build_chain(SplineFamily::CatmullRom, controls, precision)
}

/// `splines.basis.chunkCoefficients(controls)`.
pub fn basis_chunk_coefficients(controls: &[Real], precision: Precision) -> Result<Vec<Cubic>> {
    build_chain(SplineFamily::Basis, controls, precision)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use spline_core::PRECISION_DEFAULT;

    #[test]
    fn named_entry_points_match_build_chain() {
        let controls = [0.0, 1.0, 2.0, 3.0];
        assert_eq!(
            bezier_chunk_coefficients(&controls, PRECISION_DEFAULT).unwrap(),
            build_chain(SplineFamily::Bezier, &controls, PRECISION_DEFAULT).unwrap()
        );
    }

    #[test]
    fn bezier_chain_interpolates_endpoints() {
        let controls = [0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        let chain = build_chain(SplineFamily::Bezier, &controls, PRECISION_DEFAULT).unwrap();
        assert_eq!(chain.len(), 2);
        assert_abs_diff_eq!(chain[0].solve(0.0), 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(chain[0].solve(1.0), 3.0, epsilon = 1e-9);
        assert_abs_diff_eq!(chain[1].solve(0.0), 3.0, epsilon = 1e-9);
        assert_abs_diff_eq!(chain[1].solve(1.0), 6.0, epsilon = 1e-9);
    }

    #[test]
    fn hermite_chain_has_one_segment_for_four_controls() {
        let controls = [0.0, 1.0, 1.0, 1.0]; // p0=0, m0=1, p1=1, m1=1
        let chain = build_chain(SplineFamily::Hermite, &controls, PRECISION_DEFAULT).unwrap();
        assert_eq!(chain.len(), 1);
        assert_abs_diff_eq!(chain[0].solve(0.0), 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(chain[0].solve(1.0), 1.0, epsilon = 1e-9);
    }

    #[test]
    fn catmull_rom_chain_interpolates_interior_controls() {
        let controls = [0.0, 1.0, 2.0, 4.0];
        let chain = build_chain(SplineFamily::CatmullRom, &controls, PRECISION_DEFAULT).unwrap();
        // Prepared: [0, 0, 1, 2, 4, 4] -> stride-1 windows of 4 -> 3 segments.
        assert_eq!(chain.len(), 3);
        // The middle segment should interpolate the true interior controls.
        assert_abs_diff_eq!(chain[1].solve(0.0), 1.0, epsilon = 1e-9);
        assert_abs_diff_eq!(chain[1].solve(1.0), 2.0, epsilon = 1e-9);
    }

    #[test]
    fn basis_chain_interpolates_first_and_last_control() {
        let controls = [0.0, 3.0, 6.0, 9.0];
        let chain = build_chain(SplineFamily::Basis, &controls, PRECISION_DEFAULT).unwrap();
        assert_abs_diff_eq!(chain.first().unwrap().solve(0.0), 0.0, epsilon = 1e-6);
        assert_abs_diff_eq!(chain.last().unwrap().solve(1.0), 9.0, epsilon = 1e-6);
    }

    #[test]
    fn too_few_controls_fails() {
        let controls = [0.0, 1.0];
        assert!(build_chain(SplineFamily::Bezier, &controls, PRECISION_DEFAULT).is_err());
    }
}
