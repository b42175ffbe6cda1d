// Copyright 2026 QubitOS Contributors
// SPDX-License-Identifier: Apache-2.0

//! Local Hamiltonian: block-diagonal over vertex subspaces.

use num_complex::Complex64;
use tracing::debug;

use super::blocks::{
    expand_degree_blocks, resolve_vertex_blocks, DegreeBlocks, VertexBlockMap, VertexBlocks,
};
use super::defaults::default_local_hamiltonian;
use super::sparse::{BlockAssembler, SparseMatrix};
use crate::error::Result;
use crate::graph::VertexSet;

/// Build the local Hamiltonian of `vset`.
///
/// Places the block of vertex `v` at `subspace(v) × subspace(v)`. With
/// [`VertexBlocks::Default`] each block is [`default_local_hamiltonian`] of
/// the vertex dimension. Hermiticity is not enforced; it follows from the
/// supplied blocks.
pub fn local_hamiltonian(vset: &VertexSet, blocks: &VertexBlocks) -> Result<SparseMatrix> {
    let by_vertex = blocks.to_vertex_map(vset, default_local_hamiltonian)?;
    local_hamiltonian_by_vertex(vset, &by_vertex)
}

/// Local Hamiltonian with one block per distinct vertex dimension.
pub fn local_hamiltonian_by_degree(
    vset: &VertexSet,
    by_degree: &DegreeBlocks,
) -> Result<SparseMatrix> {
    local_hamiltonian_by_vertex(vset, &expand_degree_blocks(vset, by_degree)?)
}

/// Local Hamiltonian with one block per vertex.
pub fn local_hamiltonian_by_vertex(
    vset: &VertexSet,
    by_vertex: &VertexBlockMap,
) -> Result<SparseMatrix> {
    let resolved = resolve_vertex_blocks(vset, by_vertex)?;

    let mut asm = BlockAssembler::new(vset.size());
    for (i, block) in resolved.iter().enumerate() {
        if let Some(block) = block {
            let sub = vset.subspace(i);
            asm.add_block(sub.clone(), sub, block.view(), Complex64::new(1.0, 0.0));
        }
    }
    let h = asm.finish();

    debug!(
        vertices = vset.len(),
        dim = vset.size(),
        nnz = h.nnz(),
        "assembled local Hamiltonian"
    );
    Ok(h)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::graph::Vertex;
    use crate::operators::sparse::{is_hermitian, to_dense};
    use ndarray::{array, s, Array2};

    fn c(re: f64, im: f64) -> Complex64 {
        Complex64::new(re, im)
    }

    #[test]
    fn test_by_degree_block_diagonal() {
        let vset = VertexSet::from_indices(vec![vec![1, 2], vec![3, 4]]).unwrap();
        let a = array![[c(1.0, 0.0), c(2.0, 1.0)], [c(2.0, -1.0), c(3.0, 0.0)]];
        let mut by_degree = DegreeBlocks::new();
        by_degree.insert(2, a.clone());

        let h = to_dense(&local_hamiltonian_by_degree(&vset, &by_degree).unwrap());
        let mut expected = Array2::zeros((4, 4));
        expected.slice_mut(s![0..2, 0..2]).assign(&a);
        expected.slice_mut(s![2..4, 2..4]).assign(&a);
        assert_eq!(h, expected);
    }

    #[test]
    fn test_default_blocks() {
        let vset = VertexSet::from_indices(vec![vec![1], vec![2, 3], vec![4]]).unwrap();
        let h = local_hamiltonian(&vset, &VertexBlocks::Default).unwrap();
        assert_eq!(h.rows(), 4);
        assert_eq!(h.nnz(), 2);
        let dense = to_dense(&h);
        assert_eq!(dense[[1, 2]], c(0.0, 1.0));
        assert_eq!(dense[[2, 1]], c(0.0, -1.0));
        assert!(is_hermitian(&h, 0.0));
    }

    #[test]
    fn test_by_vertex_restriction_matches_block() {
        let vset = VertexSet::from_indices(vec![vec![1], vec![2, 3]]).unwrap();
        let v0 = Vertex::new(vec![1]).unwrap();
        let v1 = Vertex::new(vec![2, 3]).unwrap();
        let b1 = array![[c(0.5, 0.0), c(0.0, 1.0)], [c(0.0, -1.0), c(-0.5, 0.0)]];
        let mut by_vertex = VertexBlockMap::new();
        by_vertex.insert(v0, array![[c(7.0, 0.0)]]);
        by_vertex.insert(v1, b1.clone());

        let h = to_dense(&local_hamiltonian_by_vertex(&vset, &by_vertex).unwrap());
        assert_eq!(h[[0, 0]], c(7.0, 0.0));
        assert_eq!(h.slice(s![1..3, 1..3]), b1);
        assert_eq!(h[[0, 1]], c(0.0, 0.0));
    }

    #[test]
    fn test_missing_degree_fails() {
        let vset = VertexSet::from_indices(vec![vec![1], vec![2, 3]]).unwrap();
        let mut by_degree = DegreeBlocks::new();
        by_degree.insert(1, array![[c(1.0, 0.0)]]);
        let err = local_hamiltonian_by_degree(&vset, &by_degree).unwrap_err();
        assert!(matches!(err, Error::MissingKey(_)));
    }

    #[test]
    fn test_empty_vertex_is_vacuous() {
        let vset = VertexSet::from_indices(vec![vec![], vec![1, 2]]).unwrap();
        let h = local_hamiltonian(&vset, &VertexBlocks::Default).unwrap();
        assert_eq!(h.shape(), (2, 2));
        assert_eq!(h.nnz(), 2);
    }

    #[test]
    fn test_empty_vertex_set() {
        let vset = VertexSet::from_indices(vec![]).unwrap();
        let h = local_hamiltonian(&vset, &VertexBlocks::Default).unwrap();
        assert_eq!(h.shape(), (0, 0));
    }
}
