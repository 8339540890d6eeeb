//! Segment chunking — splitting a flat control sequence into overlapping
//! windows of 4 scalars, advancing by a family-specific stride (spec
//! §4.10).

use spline_core::errors::{Error, Result};
use spline_core::Real;

/// Partition `seq` into overlapping windows of 4 scalars, advancing by
/// `stride`.
///
/// Fails with `InvalidChunking` when `seq.len() < 4`, `stride` is not in
/// `{1, 2, 3}`, or `(seq.len() - 4) % stride != 0`.
pub fn to_cubic_scalars(seq: &[Real], stride: usize) -> Result<Vec<[Real; 4]>> {
    if seq.len() < 4 {
        return Err(Error::InvalidChunking(format!(
            "need at least 4 control scalars, got {}",
            seq.len()
        )));
    }
    if !(1..=3).contains(&stride) {
        return Err(Error::InvalidChunking(format!(
            "stride must be 1, 2, or 3, got {stride}"
        )));
    }
    if (seq.len() - 4) % stride != 0 {
        return Err(Error::InvalidChunking(format!(
            "sequence length {} is not aligned to stride {stride} (length - 4 must be a multiple of stride)",
            seq.len()
        )));
    }
    let mut chunks = Vec::new();
    let mut start = 0;
    while start + 4 <= seq.len() {
        chunks.push([seq[start], seq[start + 1], seq[start + 2], seq[start + 3]]);
        start += stride;
    }
    Ok(chunks)
}

/// Bezier segments: stride 3.
pub fn to_bezier_segments(seq: &[Real]) -> Result<Vec<[Real; 4]>> {
    to_cubic_scalars(seq, 3)
}

/// Hermite segments: stride 2.
pub fn to_hermite_segments(seq: &[Real]) -> Result<Vec<[Real; 4]>> {
    to_cubic_scalars(seq, 2)
}

/// Cardinal segments: stride 1.
pub fn to_cardinal_segments(seq: &[Real]) -> Result<Vec<[Real; 4]>> {
    to_cubic_scalars(seq, 1)
}

/// Catmull-Rom segments: stride 1.
pub fn to_catmull_rom_segments(seq: &[Real]) -> Result<Vec<[Real; 4]>> {
    to_cubic_scalars(seq, 1)
}

/// B-spline (basis) segments: stride 1.
pub fn to_bspline_segments(seq: &[Real]) -> Result<Vec<[Real; 4]>> {
    to_cubic_scalars(seq, 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scenario_h_bezier_segments() {
        let seq = [0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        let chunks = to_bezier_segments(&seq).unwrap();
        assert_eq!(chunks, vec![[0.0, 1.0, 2.0, 3.0], [3.0, 4.0, 5.0, 6.0]]);
    }

    #[test]
    fn scenario_h_stride_mismatch_fails() {
        // length 7, stride 2 -> (7-4) % 2 == 1 != 0
        let seq = [0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        assert!(to_hermite_segments(&seq).is_err());
    }

    #[test]
    fn too_few_scalars_fails() {
        assert!(to_cubic_scalars(&[0.0, 1.0, 2.0], 1).is_err());
    }

    #[test]
    fn illegal_stride_fails() {
        let seq = [0.0, 1.0, 2.0, 3.0, 4.0];
        assert!(to_cubic_scalars(&seq, 4).is_err());
        assert!(to_cubic_scalars(&seq, 0).is_err());
    }

    #[test]
    fn cardinal_stride_one_overlaps_by_three() {
        let seq = [0.0, 1.0, 2.0, 3.0, 4.0, 5.0];
        let chunks = to_cardinal_segments(&seq).unwrap();
        assert_eq!(
            chunks,
            vec![[0.0, 1.0, 2.0, 3.0], [1.0, 2.0, 3.0, 4.0], [2.0, 3.0, 4.0, 5.0]]
        );
    }

    #[test]
    fn exact_four_scalars_yields_one_chunk_any_stride() {
        let seq = [0.0, 1.0, 2.0, 3.0];
        assert_eq!(to_bezier_segments(&seq).unwrap(), vec![[0.0, 1.0, 2.0, 3.0]]);
        assert_eq!(to_hermite_segments(&seq).unwrap(), vec![[0.0, 1.0, 2.0, 3.0]]);
        assert_eq!(to_cardinal_segments(&seq).unwrap(), vec![[0.0, 1.0, 2.0, 3.0]]);
    }
}
