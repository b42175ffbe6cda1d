// Copyright 2026 QubitOS Contributors
// SPDX-License-Identifier: Apache-2.0

//! Lindbladians of the standard (moralizing) quantum stochastic walk.
//!
//! Here every graph vertex is a single basis state, so the operators are
//! `N × N` with `N` the number of graph vertices.

use tracing::debug;

use super::sparse::{BlockAssembler, SparseMatrix};
use crate::error::Result;
use crate::graph::{Adjacency, Incidence};

/// One jump operator `A[i, j]·|i⟩⟨j|` per significant entry, in row-major
/// order.
///
/// This is the classical random walk embedded as a set of local jumps.
pub fn classical_local_lindbladians<A: Adjacency>(
    adjacency: &A,
    epsilon: Option<f64>,
) -> Result<Vec<SparseMatrix>> {
    let incidence = Incidence::from_adjacency(adjacency, epsilon)?;
    let n = incidence.len();

    let ops = incidence
        .neighbors
        .iter()
        .enumerate()
        .flat_map(|(i, row)| row.iter().map(move |&(j, w)| (i, j, w)))
        .map(|(i, j, w)| {
            let mut asm = BlockAssembler::new(n);
            asm.push(i, j, w);
            asm.finish()
        })
        .collect::<Vec<_>>();

    debug!(vertices = n, operators = ops.len(), "assembled classical local Lindbladians");
    Ok(ops)
}

/// The adjacency matrix itself, restricted to significant entries, as a
/// single global jump operator.
pub fn classical_global_lindbladian<A: Adjacency>(
    adjacency: &A,
    epsilon: Option<f64>,
) -> Result<SparseMatrix> {
    let incidence = Incidence::from_adjacency(adjacency, epsilon)?;
    let n = incidence.len();

    let mut asm = BlockAssembler::new(n);
    for (i, row) in incidence.neighbors.iter().enumerate() {
        for &(j, w) in row {
            asm.push(i, j, w);
        }
    }
    let l = asm.finish();

    debug!(vertices = n, nnz = l.nnz(), "assembled classical global Lindbladian");
    Ok(l)
}
