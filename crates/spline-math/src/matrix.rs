//! `Matrix2x2`/`Matrix3x3`/`Matrix4x4` — fixed-size square matrices with
//! determinants, minors/cofactors, row/column views, and Cramer's-rule
//! linear-system solving (spec §4.3).
//!
//! The spec's vectors and matrices are fixed at 2, 3, or 4 dimensions, so
//! — unlike the teacher's `Matrix`, a thin wrapper around
//! `nalgebra::DMatrix` sized at runtime — these are plain fixed arrays.
//! Cramer's rule over a fixed 2/3/4-element cofactor expansion is simpler
//! and exactly as precise as a general decomposition at these sizes, and
//! it is what the spec names explicitly (`solveSystem` "via Cramer's
//! rule").

use crate::rounding::{min_precision, round};
use crate::vector::{Vector2, Vector3, Vector4};
use spline_core::errors::{Error, Result};
use spline_core::{Precision, Real, PRECISION_DEFAULT};

// ── Matrix2x2 ─────────────────────────────────────────────────────────────────

/// A row-major 2×2 matrix of reals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix2x2 {
    m: [[Real; 2]; 2],
    precision: Precision,
}

impl Matrix2x2 {
    /// Construct from row-major entries at an explicit precision.
    pub fn new(m00: Real, m01: Real, m10: Real, m11: Real, precision: Precision) -> Self {
        Self {
            m: [
                [round(m00, precision), round(m01, precision)],
                [round(m10, precision), round(m11, precision)],
            ],
            precision,
        }
    }

    /// Construct from row-major entries at the default precision.
    pub fn make(m00: Real, m01: Real, m10: Real, m11: Real) -> Self {
        Self::new(m00, m01, m10, m11, PRECISION_DEFAULT)
    }

    /// Build from two row vectors.
    pub fn from_rows(r0: Vector2, r1: Vector2) -> Self {
        let precision = min_precision(r0.precision(), r1.precision());
        Self::new(r0.v0(), r0.v1(), r1.v0(), r1.v1(), precision)
    }

    /// Build from two column vectors.
    pub fn from_columns(c0: Vector2, c1: Vector2) -> Self {
        let precision = min_precision(c0.precision(), c1.precision());
        Self::new(c0.v0(), c1.v0(), c0.v1(), c1.v1(), precision)
    }

    /// Rows as vectors.
    pub fn to_rows(&self) -> [Vector2; 2] {
        [
            Vector2::make(self.m[0][0], self.m[0][1]),
            Vector2::make(self.m[1][0], self.m[1][1]),
        ]
    }

    /// Columns as vectors.
    pub fn to_columns(&self) -> [Vector2; 2] {
        [
            Vector2::make(self.m[0][0], self.m[1][0]),
            Vector2::make(self.m[0][1], self.m[1][1]),
        ]
    }

    /// Element `(i, j)`, zero-indexed.
    pub fn mij(&self, i: usize, j: usize) -> Real {
        self.m[i][j]
    }

    /// This matrix's precision.
    pub fn precision(&self) -> Precision {
        self.precision
    }

    /// Replace row `i`, returning a new matrix.
    pub fn set_row(&self, i: usize, row: Vector2) -> Self {
        let mut rows = self.to_rows();
        rows[i] = row;
        Self::from_rows(rows[0], rows[1])
    }

    /// Replace column `j`, returning a new matrix.
    pub fn set_column(&self, j: usize, col: Vector2) -> Self {
        let mut cols = self.to_columns();
        cols[j] = col;
        Self::from_columns(cols[0], cols[1])
    }

    /// Determinant `m00*m11 - m01*m10`.
    pub fn determinant(&self) -> Real {
        round(
            self.m[0][0] * self.m[1][1] - self.m[0][1] * self.m[1][0],
            self.precision,
        )
    }

    /// The `1×1` minor obtained by deleting row `row` and column `col`,
    /// represented as the remaining scalar entry.
    pub fn minor(&self, row: usize, col: usize) -> Real {
        let ri = 1 - row;
        let ci = 1 - col;
        self.m[ri][ci]
    }

    /// `M · v`.
    pub fn vector_product_left(&self, v: &Vector2) -> Vector2 {
        let precision = min_precision(self.precision, v.precision());
        Vector2::new2(
            self.m[0][0] * v.v0() + self.m[0][1] * v.v1(),
            self.m[1][0] * v.v0() + self.m[1][1] * v.v1(),
            precision,
        )
    }

    /// `v · M` (row vector times matrix).
    pub fn vector_product_right(&self, v: &Vector2) -> Vector2 {
        let precision = min_precision(self.precision, v.precision());
        Vector2::new2(
            v.v0() * self.m[0][0] + v.v1() * self.m[1][0],
            v.v0() * self.m[0][1] + v.v1() * self.m[1][1],
            precision,
        )
    }

    /// Solve `M · x = v` via Cramer's rule.
    ///
    /// Fails with `SingularMatrix` when the determinant rounds to zero.
    pub fn solve_system(&self, v: &Vector2) -> Result<Vector2> {
        let det = self.determinant();
        if det == 0.0 || !(1.0 / det).is_finite() {
            return Err(Error::SingularMatrix);
        }
        let precision = min_precision(self.precision, v.precision());
        let mx = self.set_column(0, *v).determinant();
        let my = self.set_column(1, *v).determinant();
        Ok(Vector2::new2(
            round(mx / det, precision),
            round(my / det, precision),
            precision,
        ))
    }
}

// ── Matrix3x3 ─────────────────────────────────────────────────────────────────

/// A row-major 3×3 matrix of reals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix3x3 {
    m: [[Real; 3]; 3],
    precision: Precision,
}

impl Matrix3x3 {
    /// Construct from 9 row-major entries at an explicit precision.
    #[allow(clippy::too_many_arguments)]
    pub fn new(entries: [Real; 9], precision: Precision) -> Self {
        let mut m = [[0.0; 3]; 3];
        for i in 0..3 {
            for j in 0..3 {
                m[i][j] = round(entries[i * 3 + j], precision);
            }
        }
        Self { m, precision }
    }

    /// Construct from 9 row-major entries at the default precision.
    pub fn make(entries: [Real; 9]) -> Self {
        Self::new(entries, PRECISION_DEFAULT)
    }

    /// Build from three row vectors.
    pub fn from_rows(rows: [Vector3; 3]) -> Self {
        let precision = rows
            .iter()
            .map(|r| r.precision())
            .fold(PRECISION_DEFAULT, min_precision);
        let mut entries = [0.0; 9];
        for (i, r) in rows.iter().enumerate() {
            entries[i * 3] = r.v0();
            entries[i * 3 + 1] = r.v1();
            entries[i * 3 + 2] = r.v2();
        }
        Self::new(entries, precision)
    }

    /// Build from three column vectors.
    pub fn from_columns(cols: [Vector3; 3]) -> Self {
        let precision = cols
            .iter()
            .map(|c| c.precision())
            .fold(PRECISION_DEFAULT, min_precision);
        let mut entries = [0.0; 9];
        for j in 0..3 {
            entries[j] = cols[j].v0();
            entries[3 + j] = cols[j].v1();
            entries[6 + j] = cols[j].v2();
        }
        Self::new(entries, precision)
    }

    /// Rows as vectors.
    pub fn to_rows(&self) -> [Vector3; 3] {
        [
            Vector3::make(self.m[0][0], self.m[0][1], self.m[0][2]),
            Vector3::make(self.m[1][0], self.m[1][1], self.m[1][2]),
            Vector3::make(self.m[2][0], self.m[2][1], self.m[2][2]),
        ]
    }

    /// Columns as vectors.
    pub fn to_columns(&self) -> [Vector3; 3] {
        [
            Vector3::make(self.m[0][0], self.m[1][0], self.m[2][0]),
            Vector3::make(self.m[0][1], self.m[1][1], self.m[2][1]),
            Vector3::make(self.m[0][2], self.m[1][2], self.m[2][2]),
        ]
    }

    /// Element `(i, j)`, zero-indexed.
    pub fn mij(&self, i: usize, j: usize) -> Real {
        self.m[i][j]
    }

    /// This matrix's precision.
    pub fn precision(&self) -> Precision {
        self.precision
    }

    /// Replace row `i`, returning a new matrix.
    pub fn set_row(&self, i: usize, row: Vector3) -> Self {
        let mut rows = self.to_rows();
        rows[i] = row;
        Self::from_rows(rows)
    }

    /// Replace column `j`, returning a new matrix.
    pub fn set_column(&self, j: usize, col: Vector3) -> Self {
        let mut cols = self.to_columns();
        cols[j] = col;
        Self::from_columns(cols)
    }

    /// The 2×2 minor obtained by deleting row `row` and column `col`.
    pub fn minor(&self, row: usize, col: usize) -> Matrix2x2 {
        let rows: Vec<usize> = (0..3).filter(|&r| r != row).collect();
        let cols: Vec<usize> = (0..3).filter(|&c| c != col).collect();
        Matrix2x2::make(
            self.m[rows[0]][cols[0]],
            self.m[rows[0]][cols[1]],
            self.m[rows[1]][cols[0]],
            self.m[rows[1]][cols[1]],
        )
    }

    /// Cofactor `(-1)^(row+col) * minor(row, col).determinant()`.
    fn cofactor(&self, row: usize, col: usize) -> Real {
        let sign = if (row + col) % 2 == 0 { 1.0 } else { -1.0 };
        sign * self.minor(row, col).determinant()
    }

    /// Determinant via cofactor expansion along the first row.
    pub fn determinant(&self) -> Real {
        let raw = (0..3).map(|j| self.m[0][j] * self.cofactor(0, j)).sum();
        round(raw, self.precision)
    }

    /// `M · v`.
    pub fn vector_product_left(&self, v: &Vector3) -> Vector3 {
        let precision = min_precision(self.precision, v.precision());
        let c = v.components();
        let mut out = [0.0; 3];
        for i in 0..3 {
            out[i] = (0..3).map(|j| self.m[i][j] * c[j]).sum();
        }
        Vector3::new3(out[0], out[1], out[2], precision)
    }

    /// `v · M` (row vector times matrix).
    pub fn vector_product_right(&self, v: &Vector3) -> Vector3 {
        let precision = min_precision(self.precision, v.precision());
        let c = v.components();
        let mut out = [0.0; 3];
        for j in 0..3 {
            out[j] = (0..3).map(|i| c[i] * self.m[i][j]).sum();
        }
        Vector3::new3(out[0], out[1], out[2], precision)
    }

    /// Solve `M · x = v` via Cramer's rule.
    pub fn solve_system(&self, v: &Vector3) -> Result<Vector3> {
        let det = self.determinant();
        if det == 0.0 || !(1.0 / det).is_finite() {
            return Err(Error::SingularMatrix);
        }
        let precision = min_precision(self.precision, v.precision());
        let mut out = [0.0; 3];
        for j in 0..3 {
            out[j] = round(self.set_column(j, *v).determinant() / det, precision);
        }
        Ok(Vector3::new3(out[0], out[1], out[2], precision))
    }
}

// ── Matrix4x4 ─────────────────────────────────────────────────────────────────

/// A row-major 4×4 matrix of reals.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix4x4 {
    m: [[Real; 4]; 4],
    precision: Precision,
}

impl Matrix4x4 {
    /// Construct from 16 row-major entries at an explicit precision.
    pub fn new(entries: [Real; 16], precision: Precision) -> Self {
        let mut m = [[0.0; 4]; 4];
        for i in 0..4 {
            for j in 0..4 {
                m[i][j] = round(entries[i * 4 + j], precision);
            }
        }
        Self { m, precision }
    }

    /// Construct from 16 row-major entries at the default precision.
    pub fn make(entries: [Real; 16]) -> Self {
        Self::new(entries, PRECISION_DEFAULT)
    }

    /// Build from four row vectors.
    pub fn from_rows(rows: [Vector4; 4]) -> Self {
        let precision = rows
            .iter()
            .map(|r| r.precision())
            .fold(PRECISION_DEFAULT, min_precision);
        let mut entries = [0.0; 16];
        for (i, r) in rows.iter().enumerate() {
            let c = r.components();
            entries[i * 4..i * 4 + 4].copy_from_slice(&c);
        }
        Self::new(entries, precision)
    }

    /// Build from four column vectors.
    pub fn from_columns(cols: [Vector4; 4]) -> Self {
        let precision = cols
            .iter()
            .map(|c| c.precision())
            .fold(PRECISION_DEFAULT, min_precision);
        let mut entries = [0.0; 16];
        for j in 0..4 {
            let c = cols[j].components();
            for i in 0..4 {
                entries[i * 4 + j] = c[i];
            }
        }
        Self::new(entries, precision)
    }

    /// Rows as vectors.
    pub fn to_rows(&self) -> [Vector4; 4] {
        let mut out = [Vector4::make(0.0, 0.0, 0.0, 0.0); 4];
        for i in 0..4 {
            out[i] = Vector4::from_array(self.m[i]);
        }
        out
    }

    /// Columns as vectors.
    pub fn to_columns(&self) -> [Vector4; 4] {
        let mut out = [Vector4::make(0.0, 0.0, 0.0, 0.0); 4];
        for j in 0..4 {
            out[j] = Vector4::from_array([self.m[0][j], self.m[1][j], self.m[2][j], self.m[3][j]]);
        }
        out
    }

    /// Element `(i, j)`, zero-indexed.
    pub fn mij(&self, i: usize, j: usize) -> Real {
        self.m[i][j]
    }

    /// This matrix's precision.
    pub fn precision(&self) -> Precision {
        self.precision
    }

    /// Replace row `i`, returning a new matrix.
    pub fn set_row(&self, i: usize, row: Vector4) -> Self {
        let mut rows = self.to_rows();
        rows[i] = row;
        Self::from_rows(rows)
    }

    /// Replace column `j`, returning a new matrix.
    pub fn set_column(&self, j: usize, col: Vector4) -> Self {
        let mut cols = self.to_columns();
        cols[j] = col;
        Self::from_columns(cols)
    }

    /// The 3×3 minor obtained by deleting row `row` and column `col`.
    pub fn minor(&self, row: usize, col: usize) -> Matrix3x3 {
        let rows: Vec<usize> = (0..4).filter(|&r| r != row).collect();
        let cols: Vec<usize> = (0..4).filter(|&c| c != col).collect();
        let mut entries = [0.0; 9];
        for (i, &r) in rows.iter().enumerate() {
            for (j, &c) in cols.iter().enumerate() {
                entries[i * 3 + j] = self.m[r][c];
            }
        }
        Matrix3x3::make(entries)
    }

    fn cofactor(&self, row: usize, col: usize) -> Real {
        let sign = if (row + col) % 2 == 0 { 1.0 } else { -1.0 };
        sign * self.minor(row, col).determinant()
    }

    /// Determinant via cofactor expansion along the first row.
    pub fn determinant(&self) -> Real {
        let raw = (0..4).map(|j| self.m[0][j] * self.cofactor(0, j)).sum();
        round(raw, self.precision)
    }

    /// `M · v`.
    pub fn vector_product_left(&self, v: &Vector4) -> Vector4 {
        let precision = min_precision(self.precision, v.precision());
        let c = v.components();
        let mut out = [0.0; 4];
        for i in 0..4 {
            out[i] = (0..4).map(|j| self.m[i][j] * c[j]).sum();
        }
        Vector4::new4(out[0], out[1], out[2], out[3], precision)
    }

    /// `v · M` (row vector times matrix).
    pub fn vector_product_right(&self, v: &Vector4) -> Vector4 {
        let precision = min_precision(self.precision, v.precision());
        let c = v.components();
        let mut out = [0.0; 4];
        for j in 0..4 {
            out[j] = (0..4).map(|i| c[i] * self.m[i][j]).sum();
        }
        Vector4::new4(out[0], out[1], out[2], out[3], precision)
    }

    /// Solve `M · x = v` via Cramer's rule.
    pub fn solve_system(&self, v: &Vector4) -> Result<Vector4> {
        let det = self.determinant();
        if det == 0.0 || !(1.0 / det).is_finite() {
            return Err(Error::SingularMatrix);
        }
        let precision = min_precision(self.precision, v.precision());
        let mut out = [0.0; 4];
        for j in 0..4 {
            out[j] = round(self.set_column(j, *v).determinant() / det, precision);
        }
        Ok(Vector4::new4(out[0], out[1], out[2], out[3], precision))
    }
}
