// Copyright 2026 QubitOS Contributors
// SPDX-License-Identifier: Apache-2.0

//! Global Hamiltonian: coupling between demoralized vertex subspaces.
//!
//! Vertex `i` couples to vertex `j` when `i < j` and `j` appears in the
//! reversed incidence list of row `i`, i.e. `A[i, j]` is significant. The
//! coupling block `B` is placed, scaled by `A[i, j]`, at
//! `subspace(i) × subspace(j)`, and the result is symmetrized as `H + H†`.
//! The output is therefore exactly Hermitian whatever blocks are supplied.

use std::borrow::Cow;
use std::collections::HashMap;

use ndarray::Array2;
use num_complex::Complex64;
use tracing::debug;

use super::blocks::{PairBlocks, ShapeBlocks, VertexPairBlocks};
use super::defaults::ones_block;
use super::sparse::{BlockAssembler, SparseMatrix};
use crate::error::{Error, Result};
use crate::graph::{Adjacency, Incidence, VertexSet};
use crate::validation::validate_block;

/// A coupled vertex pair `(from, to)` with `from < to`.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Coupling {
    from: usize,
    to: usize,
    weight: Complex64,
}

/// Vertex pairs demanding a coupling block, in row-major order.
///
/// Pairs touching a vertex of dimension 0 are skipped: their block is empty.
fn couplings(incidence: &Incidence, vset: &VertexSet) -> Vec<Coupling> {
    let mut out = Vec::new();
    for (from, row) in incidence.neighbors.iter().enumerate() {
        for &(to, weight) in row {
            if from < to && !vset[from].is_empty() && !vset[to].is_empty() {
                out.push(Coupling { from, to, weight });
            }
        }
    }
    out
}

/// Build the global Hamiltonian of `adjacency`.
///
/// With [`PairBlocks::Default`] every coupling block is all ones.
pub fn global_hamiltonian<A: Adjacency>(
    adjacency: &A,
    blocks: &PairBlocks,
    epsilon: Option<f64>,
) -> Result<SparseMatrix> {
    let incidence = Incidence::from_adjacency(adjacency, epsilon)?;
    let vset = incidence.vertex_set();
    let pairs = couplings(&incidence, &vset);

    let by_pair = match blocks {
        PairBlocks::Default => {
            let mut by_shape = ShapeBlocks::new();
            for c in &pairs {
                let shape = (vset[c.from].len(), vset[c.to].len());
                if !by_shape.contains_key(&shape) {
                    by_shape.insert(shape, ones_block(shape.0, shape.1)?);
                }
            }
            Cow::Owned(expand_shape_blocks(&vset, &pairs, &by_shape)?)
        }
        PairBlocks::ByShape(by_shape) => Cow::Owned(expand_shape_blocks(&vset, &pairs, by_shape)?),
        PairBlocks::ByVertexPair(by_pair) => Cow::Borrowed(by_pair),
    };

    assemble(&vset, &pairs, &by_pair)
}

/// Global Hamiltonian with one coupling block per `(dim_i, dim_j)` shape.
pub fn global_hamiltonian_by_shape<A: Adjacency>(
    adjacency: &A,
    by_shape: &ShapeBlocks,
    epsilon: Option<f64>,
) -> Result<SparseMatrix> {
    let incidence = Incidence::from_adjacency(adjacency, epsilon)?;
    let vset = incidence.vertex_set();
    let pairs = couplings(&incidence, &vset);
    assemble(&vset, &pairs, &expand_shape_blocks(&vset, &pairs, by_shape)?)
}

/// Global Hamiltonian with one coupling block per vertex pair.
///
/// The block for `(v_i, v_j)` has shape `len(v_i) × len(v_j)`. When only
/// the reversed key `(v_j, v_i)` is present, its transpose is used.
pub fn global_hamiltonian_by_vertex_pair<A: Adjacency>(
    adjacency: &A,
    by_pair: &VertexPairBlocks,
    epsilon: Option<f64>,
) -> Result<SparseMatrix> {
    let incidence = Incidence::from_adjacency(adjacency, epsilon)?;
    let vset = incidence.vertex_set();
    let pairs = couplings(&incidence, &vset);
    assemble(&vset, &pairs, by_pair)
}

/// Expand a by-shape map into a by-vertex-pair map over `pairs`.
fn expand_shape_blocks(
    vset: &VertexSet,
    pairs: &[Coupling],
    by_shape: &ShapeBlocks,
) -> Result<VertexPairBlocks> {
    for (&shape, block) in by_shape {
        validate_block(&format!("shape {:?}", shape), block, shape)?;
    }

    let mut by_pair = HashMap::with_capacity(pairs.len());
    for c in pairs {
        let (v, w) = (&vset[c.from], &vset[c.to]);
        let block = by_shape
            .get(&(v.len(), w.len()))
            .ok_or_else(|| Error::MissingKey(format!("shape ({}, {})", v.len(), w.len())))?;
        by_pair.insert((v.clone(), w.clone()), block.clone());
    }
    Ok(by_pair)
}

/// Validate `by_pair`, look up every coupling and assemble `H + H†`.
fn assemble(
    vset: &VertexSet,
    pairs: &[Coupling],
    by_pair: &VertexPairBlocks,
) -> Result<SparseMatrix> {
    for ((v, w), block) in by_pair {
        validate_block(
            &format!("vertex pair ({}, {})", v, w),
            block,
            (v.len(), w.len()),
        )?;
    }

    let mut resolved: Vec<Cow<'_, Array2<Complex64>>> = Vec::with_capacity(pairs.len());
    for c in pairs {
        let (v, w) = (&vset[c.from], &vset[c.to]);
        let key = (v.clone(), w.clone());
        if let Some(block) = by_pair.get(&key) {
            resolved.push(Cow::Borrowed(block));
        } else if let Some(block) = by_pair.get(&(key.1, key.0)) {
            resolved.push(Cow::Owned(block.t().to_owned()));
        } else {
            return Err(Error::MissingKey(format!("vertex pair ({}, {})", v, w)));
        }
    }

    let mut asm = BlockAssembler::new(vset.size());
    for (c, block) in pairs.iter().zip(&resolved) {
        asm.add_hermitian_block(
            vset.subspace(c.from),
            vset.subspace(c.to),
            block.view(),
            c.weight,
        );
    }
    let h = asm.finish();

    debug!(
        vertices = vset.len(),
        dim = vset.size(),
        couplings = pairs.len(),
        nnz = h.nnz(),
        "assembled global Hamiltonian"
    );
    Ok(h)
}
