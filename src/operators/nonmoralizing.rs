// Copyright 2026 QubitOS Contributors
// SPDX-License-Identifier: Apache-2.0

//! Nonmoralizing Lindbladian.
//!
//! Demoralization gives vertex `i` a subspace of dimension `in_degree(i)`.
//! Each incoming edge `j → i`, at position `p` of row `i`'s reversed
//! incidence list, maps every basis state of vertex `j` to column `p` of
//! vertex `i`'s elementary matrix `E_i`, scaled by `A[i, j]`:
//!
//!   L[subspace(i), k] = A[i, j] · E_i[:, p]   for every k ∈ subspace(j)
//!
//! Distinct columns of `E_i` keep amplitudes arriving from different sources
//! orthogonal. Orthogonality of `E_i` is the caller's obligation and is not
//! checked.
//!
//! Ref: Domino, Glos, Ostaszewski (2017), "Superdiffusive quantum stochastic
//!   walk definable on arbitrary directed graph", Quantum Inf. Comput. 17.

use ndarray::Array2;
use num_complex::Complex64;
use tracing::debug;

use super::blocks::{
    expand_degree_blocks, resolve_vertex_blocks, DegreeBlocks, VertexBlockMap, VertexBlocks,
};
use super::defaults::fourier_matrix;
use super::sparse::{BlockAssembler, SparseMatrix};
use crate::error::Result;
use crate::graph::{Adjacency, Incidence, VertexSet};

/// Build the nonmoralizing Lindbladian of `adjacency`.
///
/// With [`VertexBlocks::Default`] the elementary matrix of a vertex of
/// dimension `d` is [`fourier_matrix`]`(d)`. Returns the operator together
/// with the induced vertex set, which downstream measurement needs.
pub fn nonmoralizing_lindbladian<A: Adjacency>(
    adjacency: &A,
    blocks: &VertexBlocks,
    epsilon: Option<f64>,
) -> Result<(SparseMatrix, VertexSet)> {
    let incidence = Incidence::from_adjacency(adjacency, epsilon)?;
    let vset = incidence.vertex_set();
    let by_vertex = blocks.to_vertex_map(&vset, fourier_matrix)?;
    let l = assemble(&incidence, &vset, &by_vertex)?;
    Ok((l, vset))
}

/// Nonmoralizing Lindbladian with one elementary matrix per in-degree.
pub fn nonmoralizing_lindbladian_by_degree<A: Adjacency>(
    adjacency: &A,
    by_degree: &DegreeBlocks,
    epsilon: Option<f64>,
) -> Result<(SparseMatrix, VertexSet)> {
    let incidence = Incidence::from_adjacency(adjacency, epsilon)?;
    let vset = incidence.vertex_set();
    let by_vertex = expand_degree_blocks(&vset, by_degree)?;
    let l = assemble(&incidence, &vset, &by_vertex)?;
    Ok((l, vset))
}

/// Nonmoralizing Lindbladian with one elementary matrix per vertex.
pub fn nonmoralizing_lindbladian_by_vertex<A: Adjacency>(
    adjacency: &A,
    by_vertex: &VertexBlockMap,
    epsilon: Option<f64>,
) -> Result<(SparseMatrix, VertexSet)> {
    let incidence = Incidence::from_adjacency(adjacency, epsilon)?;
    let vset = incidence.vertex_set();
    let l = assemble(&incidence, &vset, by_vertex)?;
    Ok((l, vset))
}

fn assemble(
    incidence: &Incidence,
    vset: &VertexSet,
    by_vertex: &VertexBlockMap,
) -> Result<SparseMatrix> {
    let elementary = resolve_vertex_blocks(vset, by_vertex)?;

    let mut asm = BlockAssembler::new(vset.size());
    for (i, e) in elementary.iter().enumerate() {
        if let Some(e) = e {
            add_vertex_jumps(&mut asm, incidence, vset, i, e);
        }
    }
    let l = asm.finish();

    debug!(
        vertices = vset.len(),
        dim = vset.size(),
        nnz = l.nnz(),
        "assembled nonmoralizing Lindbladian"
    );
    Ok(l)
}

/// One jump operator per vertex: the rows of the nonmoralizing Lindbladian
/// owned by that vertex.
///
/// The operators sum to [`nonmoralizing_lindbladian`]. Vertices of
/// dimension 0 yield a zero operator, so the list is aligned with the
/// returned vertex set.
pub fn nonmoralizing_local_lindbladians<A: Adjacency>(
    adjacency: &A,
    blocks: &VertexBlocks,
    epsilon: Option<f64>,
) -> Result<(Vec<SparseMatrix>, VertexSet)> {
    let incidence = Incidence::from_adjacency(adjacency, epsilon)?;
    let vset = incidence.vertex_set();
    let by_vertex = blocks.to_vertex_map(&vset, fourier_matrix)?;
    let elementary = resolve_vertex_blocks(&vset, &by_vertex)?;

    let ops = elementary
        .iter()
        .enumerate()
        .map(|(i, e)| {
            let mut asm = BlockAssembler::new(vset.size());
            if let Some(e) = e {
                add_vertex_jumps(&mut asm, &incidence, &vset, i, e);
            }
            asm.finish()
        })
        .collect::<Vec<_>>();

    debug!(
        vertices = vset.len(),
        dim = vset.size(),
        "assembled nonmoralizing local Lindbladians"
    );
    Ok((ops, vset))
}

/// Write the jumps into vertex `i` from all of its incoming neighbours.
fn add_vertex_jumps(
    asm: &mut BlockAssembler,
    incidence: &Incidence,
    vset: &VertexSet,
    i: usize,
    elementary: &Array2<Complex64>,
) {
    let rows = vset.subspace(i);
    for (pos, &(j, weight)) in incidence.neighbors[i].iter().enumerate() {
        let column = elementary.column(pos);
        for k in vset.subspace(j) {
            asm.add_column(rows.clone(), k, column, weight);
        }
    }
}
