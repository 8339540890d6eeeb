//! Arc-length table and t↔s inversion (spec §4.12).
//!
//! Built once, eagerly, at curve construction; treated as immutable
//! thereafter (per the concurrency model in spec §5 — the only derived
//! cache in the whole core).

use spline_core::{Precision, Real};
use spline_math::interval::Interval;
use spline_math::polynomial::cubic::Cubic;

/// Samples taken per cubic segment when building the table. Higher values
/// trade table-construction cost for inversion accuracy.
const SAMPLES_PER_SEGMENT: usize = 16;

/// A monotone mapping from normalized arc-length fraction `s ∈ [0, 1]` to
/// curve parameter `t ∈ [0, 1]`, built by sampling cumulative length at a
/// fixed resolution proportional to the segment count.
#[derive(Debug, Clone)]
pub struct LengthTable {
    /// `(t, s)` knots, both columns ascending.
    knots: Vec<(Real, Real)>,
}

impl LengthTable {
    /// Build a table for a multi-axis chain. Total length at a given `t`
    /// is the sum, across axes, of that axis's segment arc lengths up to
    /// `t` — the per-polynomial `length` defined in §4.5–4.7, not a true
    /// multi-dimensional Euclidean arc length.
    pub fn build(axes: &[&[Cubic]], precision: Precision) -> Self {
        let segment_count = axes.iter().map(|chain| chain.len()).max().unwrap_or(0);
        if segment_count == 0 {
            return Self {
                knots: vec![(0.0, 0.0), (1.0, 1.0)],
            };
        }

        let segment_lengths: Vec<Real> = (0..segment_count)
            .map(|seg_idx| {
                let full = Interval::new(0.0, 1.0, precision).expect("0 <= 1");
                axes.iter()
                    .filter_map(|chain| chain.get(seg_idx))
                    .map(|seg| seg.length(&full))
                    .sum()
            })
            .collect();

        let mut cumulative_before = vec![0.0; segment_count + 1];
        for i in 0..segment_count {
            cumulative_before[i + 1] = cumulative_before[i] + segment_lengths[i];
        }
        let total_length = cumulative_before[segment_count];

        let total_samples = segment_count * SAMPLES_PER_SEGMENT;
        let mut knots = Vec::with_capacity(total_samples + 1);
        for k in 0..=total_samples {
            let global_t = k as Real / total_samples as Real;
            let seg_idx = ((global_t * segment_count as Real).floor() as usize).min(segment_count - 1);
            let local_t = global_t * segment_count as Real - seg_idx as Real;
            let partial: Real = Interval::new(0.0, local_t, precision)
                .ok()
                .map(|local| {
                    axes.iter()
                        .filter_map(|chain| chain.get(seg_idx))
                        .map(|seg| seg.length(&local))
                        .sum()
                })
                .unwrap_or(0.0);
            let cumulative = cumulative_before[seg_idx] + partial;
            let s = if total_length > 0.0 {
                cumulative / total_length
            } else {
                global_t
            };
            knots.push((global_t, s));
        }
        Self { knots }
    }

    /// Invert the table: given arc-length fraction `s`, find the
    /// parameter `t` by binary search on the monotone `s` column plus
    /// linear interpolation between the bracketing knots.
    pub fn invert(&self, s: Real) -> Real {
        let s = s.clamp(0.0, 1.0);
        let mut lo = 0usize;
        let mut hi = self.knots.len() - 1;
        while lo + 1 < hi {
            let mid = (lo + hi) / 2;
            if self.knots[mid].1 <= s {
                lo = mid;
            } else {
                hi = mid;
            }
        }
        let (t0, s0) = self.knots[lo];
        let (t1, s1) = self.knots[hi];
        if (s1 - s0).abs() < 1e-15 {
            return t0;
        }
        let frac = (s - s0) / (s1 - s0);
        t0 + frac * (t1 - t0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn empty_chain_yields_identity_table() {
        let table = LengthTable::build(&[], 12);
        assert_abs_diff_eq!(table.invert(0.5), 0.5, epsilon = 1e-9);
    }

    #[test]
    fn uniform_speed_line_has_identity_table() {
        // p(t) = t for a single segment: arc length accumulates linearly,
        // so s and t coincide.
        let seg = Cubic::make(0.0, 1.0, 0.0, 0.0);
        let chain = vec![seg];
        let table = LengthTable::build(&[&chain], 12);
        for &s in &[0.0, 0.25, 0.5, 0.75, 1.0] {
            assert_abs_diff_eq!(table.invert(s), s, epsilon = 1e-2);
        }
    }

    #[test]
    fn invert_is_monotone_nondecreasing() {
        let seg0 = Cubic::make(0.0, 2.0, 0.0, 0.0);
        let seg1 = Cubic::make(2.0, 0.5, 0.0, 0.0);
        let chain = vec![seg0, seg1];
        let table = LengthTable::build(&[&chain], 12);
        let mut prev = table.invert(0.0);
        for i in 1..=20 {
            let s = i as Real / 20.0;
            let t = table.invert(s);
            assert!(t >= prev - 1e-9);
            prev = t;
        }
    }
}
