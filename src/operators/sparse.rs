// Copyright 2026 QubitOS Contributors
// SPDX-License-Identifier: Apache-2.0

//! Sparse complex operator assembly.

use std::ops::Range;

use ndarray::{Array2, ArrayView1, ArrayView2};
use num_complex::Complex64;
use sprs::{CsMat, TriMat};

/// Sparse complex operator in CSR storage.
pub type SparseMatrix = CsMat<Complex64>;

/// Accumulates block writes as triplets and compresses them once.
///
/// Exact zeros are never stored. Writes to the same position are summed.
pub struct BlockAssembler {
    triplets: TriMat<Complex64>,
}

impl BlockAssembler {
    pub fn new(dim: usize) -> Self {
        Self {
            triplets: TriMat::new((dim, dim)),
        }
    }

    /// Add `scale * block` at `rows × cols`.
    pub fn add_block(
        &mut self,
        rows: Range<usize>,
        cols: Range<usize>,
        block: ArrayView2<'_, Complex64>,
        scale: Complex64,
    ) {
        debug_assert_eq!(block.dim(), (rows.len(), cols.len()));
        for ((r, c), &z) in block.indexed_iter() {
            self.push(rows.start + r, cols.start + c, scale * z);
        }
    }

    /// Add `scale * column` down `rows` in column `col`.
    pub fn add_column(
        &mut self,
        rows: Range<usize>,
        col: usize,
        column: ArrayView1<'_, Complex64>,
        scale: Complex64,
    ) {
        debug_assert_eq!(column.len(), rows.len());
        for (r, &z) in rows.zip(column.iter()) {
            self.push(r, col, scale * z);
        }
    }

    /// Add `scale * block` at `rows × cols` and its adjoint at `cols × rows`.
    ///
    /// The two ranges must be disjoint so no diagonal entry is doubled.
    pub fn add_hermitian_block(
        &mut self,
        rows: Range<usize>,
        cols: Range<usize>,
        block: ArrayView2<'_, Complex64>,
        scale: Complex64,
    ) {
        debug_assert_eq!(block.dim(), (rows.len(), cols.len()));
        for ((r, c), &z) in block.indexed_iter() {
            self.add_hermitian_pair(rows.start + r, cols.start + c, scale * z);
        }
    }

    /// Add `value` at `(row, col)` together with its conjugate at `(col, row)`.
    pub fn add_hermitian_pair(&mut self, row: usize, col: usize, value: Complex64) {
        self.push(row, col, value);
        self.push(col, row, value.conj());
    }

    pub fn push(&mut self, row: usize, col: usize, value: Complex64) {
        if value != Complex64::new(0.0, 0.0) {
            self.triplets.add_triplet(row, col, value);
        }
    }

    pub fn finish(self) -> SparseMatrix {
        self.triplets.to_csr()
    }
}

/// Conjugate transpose (dagger) of a sparse operator.
pub fn adjoint(m: &SparseMatrix) -> SparseMatrix {
    let mut triplets = TriMat::new((m.cols(), m.rows()));
    for (&z, (r, c)) in m.iter() {
        triplets.add_triplet(c, r, z.conj());
    }
    triplets.to_csr()
}

/// Entrywise sum of `dim × dim` operators.
pub fn sum_operators(ops: &[SparseMatrix], dim: usize) -> SparseMatrix {
    let mut asm = BlockAssembler::new(dim);
    for op in ops {
        for (&z, (r, c)) in op.iter() {
            asm.push(r, c, z);
        }
    }
    asm.finish()
}

/// Dense copy of a sparse operator.
pub fn to_dense(m: &SparseMatrix) -> Array2<Complex64> {
    let mut dense = Array2::zeros((m.rows(), m.cols()));
    for (&z, (r, c)) in m.iter() {
        dense[[r, c]] += z;
    }
    dense
}

/// Whether `m` equals its conjugate transpose within `tol` per entry.
pub fn is_hermitian(m: &SparseMatrix, tol: f64) -> bool {
    if m.rows() != m.cols() {
        return false;
    }
    for (&z, (r, c)) in m.iter() {
        let mirror = m.get(c, r).copied().unwrap_or_default();
        if (z - mirror.conj()).norm() > tol {
            return false;
        }
    }
    true
}
