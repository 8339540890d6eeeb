//! Multi-axis curves — the thin facade grouping per-axis cubic chains
//! behind `positionAt`/`solveWhere` (spec §6).

use std::collections::BTreeMap;

use crate::factory::{self, SplineFamily};
use crate::length_table::LengthTable;
use spline_core::errors::{Error, Result};
use spline_core::{Precision, Real};
use spline_math::interval::{ContainsOptions, Interval};
use spline_math::monotonicity::Monotonicity;
use spline_math::polynomial::cubic::Cubic;
use spline_math::rounding::round;

/// A parametric curve built from one cubic chain per labeled axis,
/// sharing a single global parameter `t ∈ [0, 1]` and an eagerly-built
/// arc-length table.
#[derive(Debug, Clone)]
pub struct Curve {
    axes: BTreeMap<String, Vec<Cubic>>,
    length_table: LengthTable,
    precision: Precision,
}

impl Curve {
    /// Build a curve from one chain per axis. Fails with `InvalidInput`
    /// when there are no axes, or when the axes' segment counts disagree.
    fn new(axes: BTreeMap<String, Vec<Cubic>>, precision: Precision) -> Result<Self> {
        if axes.is_empty() {
            return Err(Error::InvalidInput("a curve needs at least one axis".into()));
        }
        let segment_count = axes.values().next().unwrap().len();
        if !axes.values().all(|chain| chain.len() == segment_count) {
            return Err(Error::InvalidInput(
                "all axes of a curve must have the same segment count".into(),
            ));
        }
        let chains: Vec<&[Cubic]> = axes.values().map(|v| v.as_slice()).collect();
        let length_table = LengthTable::build(&chains, precision);
        Ok(Self {
            axes,
            length_table,
            precision,
        })
    }

    /// The curve's axis names, in a stable (sorted) order.
    pub fn axes(&self) -> impl Iterator<Item = &str> {
        self.axes.keys().map(String::as_str)
    }

    fn evaluate_axis(chain: &[Cubic], t: Real, precision: Precision) -> Real {
        let segment_count = chain.len();
        let seg_idx = ((t * segment_count as Real).floor() as usize).min(segment_count - 1);
        let local_t = t * segment_count as Real - seg_idx as Real;
        round(chain[seg_idx].solve(local_t), precision)
    }

    /// Evaluate every axis at the parameter obtained by blending the raw
    /// input against its length-normalized lookup: `t = (1 - normalize) *
    /// input + normalize * lookup(input)`.
    ///
    /// Fails with `InvalidInput` when `input` is outside `[0, 1]`.
    pub fn position_at(
        &self,
        input: Real,
        normalize: Real,
        precision: Precision,
    ) -> Result<BTreeMap<String, Real>> {
        if !(0.0..=1.0).contains(&input) {
            return Err(Error::InvalidInput(format!(
                "curve input {input} is outside [0, 1]"
            )));
        }
        let raw_t = input;
        let length_t = self.length_table.invert(input);
        let t = (1.0 - normalize) * raw_t + normalize * length_t;
        Ok(self
            .axes
            .iter()
            .map(|(name, chain)| (name.clone(), Self::evaluate_axis(chain, t, precision)))
            .collect())
    }

    /// Classify an axis's monotonicity across the whole `t ∈ [0, 1]`
    /// domain: `None` if any segment is `None`, or if segments disagree
    /// in direction; `Constant` if every segment is constant; otherwise
    /// the shared direction.
    fn axis_monotonicity(chain: &[Cubic], precision: Precision) -> Monotonicity {
        let local = Interval::new(0.0, 1.0, precision).expect("0 <= 1");
        let mut direction = None;
        for segment in chain {
            match segment.monotonicity(Some(&local)) {
                Monotonicity::None => return Monotonicity::None,
                Monotonicity::Constant => continue,
                m => match direction {
                    None => direction = Some(m),
                    Some(prev) if prev == m => {}
                    Some(_) => return Monotonicity::None,
                },
            }
        }
        direction.unwrap_or(Monotonicity::Constant)
    }

    /// Invert `axis` at `position`: require the axis be strictly monotone
    /// over the whole curve, then scan segments in order for the first
    /// local root in `[0, 1]` and evaluate every axis there.
    ///
    /// Fails with `InvalidInput` when `axis` is unknown, `NonMonotonicAxis`
    /// when the axis is not strictly monotone, and `RootUnsolvable` when no
    /// parameter solves for `position`.
    pub fn solve_where(
        &self,
        axis: &str,
        position: Real,
        precision: Precision,
    ) -> Result<BTreeMap<String, Real>> {
        let chain = self
            .axes
            .get(axis)
            .ok_or_else(|| Error::InvalidInput(format!("unknown axis {axis}")))?;

        if !Self::axis_monotonicity(chain, self.precision).is_strictly_monotone() {
            return Err(Error::NonMonotonicAxis);
        }

        let segment_count = chain.len();
        for (seg_idx, segment) in chain.iter().enumerate() {
            let roots = segment.solve_inverse(position);
            for &local_t in roots.as_slice() {
                if Interval::new(0.0, 1.0, self.precision)
                    .expect("0 <= 1")
                    .contains(local_t, ContainsOptions::default())
                {
                    let t = (seg_idx as Real + local_t) / segment_count as Real;
                    return Ok(self
                        .axes
                        .iter()
                        .map(|(name, c)| (name.clone(), Self::evaluate_axis(c, t, precision)))
                        .collect());
                }
            }
        }
        Err(Error::RootUnsolvable)
    }
}

fn build_curve(
    family_for: impl Fn() -> SplineFamily,
    axes: &BTreeMap<String, Vec<Real>>,
    precision: Precision,
) -> Result<Curve> {
    if axes.is_empty() {
        return Err(Error::InvalidInput("a curve needs at least one axis".into()));
    }
    let mut chains = BTreeMap::new();
    for (name, controls) in axes {
        let chain = factory::build_chain(family_for(), controls, precision)?;
        chains.insert(name.clone(), chain);
    }
    Curve::new(chains, precision)
}

/// Build a Bezier curve: stride-3 chunking, no endpoint duplication.
pub fn create_bezier_curve(axes: &BTreeMap<String, Vec<Real>>, precision: Precision) -> Result<Curve> {
    build_curve(|| SplineFamily::Bezier, axes, precision)
}

/// Build a Hermite curve: stride-2 chunking, controls alternate
/// `p, m, p, m, ...`.
pub fn create_hermite_curve(axes: &BTreeMap<String, Vec<Real>>, precision: Precision) -> Result<Curve> {
    build_curve(|| SplineFamily::Hermite, axes, precision)
}

/// Build a Cardinal curve with tension `a`: stride-1 chunking, single
/// endpoint duplication.
pub fn create_cardinal_curve(
    axes: &BTreeMap<String, Vec<Real>>,
    a: f64,
    precision: Precision,
) -> Result<Curve> {
    build_curve(|| SplineFamily::Cardinal(a), axes, precision)
}

/// Build a Catmull-Rom curve, i.e. `createCardinalCurve` at tension 0.5.
pub fn create_catmull_rom_curve(
    axes: &BTreeMap<String, Vec<Real>>,
    precision: Precision,
) -> Result<Curve> {
    build_curve(|| SplineFamily::CatmullRom, axes, precision)
}

/// Build a uniform B-spline (basis) curve: stride-1 chunking, double
/// endpoint duplication.
pub fn create_basis_curve(axes: &BTreeMap<String, Vec<Real>>, precision: Precision) -> Result<Curve> {
    build_curve(|| SplineFamily::Basis, axes, precision)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use spline_core::PRECISION_DEFAULT;

    fn single_axis(name: &str, controls: Vec<Real>) -> BTreeMap<String, Vec<Real>> {
        let mut m = BTreeMap::new();
        m.insert(name.to_string(), controls);
        m
    }

    #[test]
    fn bezier_curve_interpolates_endpoints() {
        let axes = single_axis("x", vec![0.0, 1.0, 2.0, 3.0]);
        let curve = create_bezier_curve(&axes, PRECISION_DEFAULT).unwrap();
        let start = curve.position_at(0.0, 0.0, PRECISION_DEFAULT).unwrap();
        let end = curve.position_at(1.0, 0.0, PRECISION_DEFAULT).unwrap();
        assert_abs_diff_eq!(start["x"], 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(end["x"], 3.0, epsilon = 1e-9);
    }

    #[test]
    fn position_at_rejects_out_of_range_input() {
        let axes = single_axis("x", vec![0.0, 1.0, 2.0, 3.0]);
        let curve = create_bezier_curve(&axes, PRECISION_DEFAULT).unwrap();
        assert!(curve.position_at(1.5, 0.0, PRECISION_DEFAULT).is_err());
    }

    #[test]
    fn solve_where_inverts_monotone_axis() {
        let axes = single_axis("x", vec![0.0, 1.0, 2.0, 3.0]);
        let curve = create_bezier_curve(&axes, PRECISION_DEFAULT).unwrap();
        let hit = curve.solve_where("x", 1.5, PRECISION_DEFAULT).unwrap();
        assert_abs_diff_eq!(hit["x"], 1.5, epsilon = 1e-6);
    }

    #[test]
    fn solve_where_fails_on_unknown_axis() {
        let axes = single_axis("x", vec![0.0, 1.0, 2.0, 3.0]);
        let curve = create_bezier_curve(&axes, PRECISION_DEFAULT).unwrap();
        assert!(curve.solve_where("y", 0.0, PRECISION_DEFAULT).is_err());
    }

    #[test]
    fn solve_where_fails_on_nonmonotonic_axis() {
        // A Bezier curve shaped like a hump: up then down.
        let axes = single_axis("y", vec![0.0, 4.0, 4.0, 0.0]);
        let curve = create_bezier_curve(&axes, PRECISION_DEFAULT).unwrap();
        assert_eq!(
            curve.solve_where("y", 2.0, PRECISION_DEFAULT),
            Err(Error::NonMonotonicAxis)
        );
    }

    #[test]
    fn solve_where_fails_with_rootunsolvable_outside_range() {
        let axes = single_axis("x", vec![0.0, 1.0, 2.0, 3.0]);
        let curve = create_bezier_curve(&axes, PRECISION_DEFAULT).unwrap();
        assert_eq!(
            curve.solve_where("x", 10.0, PRECISION_DEFAULT),
            Err(Error::RootUnsolvable)
        );
    }

    #[test]
    fn mismatched_axis_segment_counts_fail() {
        let mut axes = BTreeMap::new();
        axes.insert("x".to_string(), vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0]); // 2 bezier segments
        axes.insert("y".to_string(), vec![0.0, 1.0, 2.0, 3.0]); // 1 bezier segment
        assert!(create_bezier_curve(&axes, PRECISION_DEFAULT).is_err());
    }

    #[test]
    fn multi_axis_curve_evaluates_all_axes_together() {
        let mut axes = BTreeMap::new();
        axes.insert("x".to_string(), vec![0.0, 1.0, 2.0, 3.0]);
        axes.insert("y".to_string(), vec![0.0, 0.0, 0.0, 0.0]);
        let curve = create_bezier_curve(&axes, PRECISION_DEFAULT).unwrap();
        let mid = curve.position_at(0.5, 0.0, PRECISION_DEFAULT).unwrap();
        assert_abs_diff_eq!(mid["y"], 0.0, epsilon = 1e-9);
        assert!(mid.contains_key("x"));
    }
}
