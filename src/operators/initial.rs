// Copyright 2026 QubitOS Contributors
// SPDX-License-Identifier: Apache-2.0

//! Initial density operators on a demoralized space.
//!
//! Probability assigned to a vertex is spread uniformly over its subspace,
//! giving a diagonal density operator of dimension `vertexsetsize`.

use std::collections::HashSet;

use num_complex::Complex64;

use super::sparse::{BlockAssembler, SparseMatrix};
use crate::error::{Error, Result};
use crate::graph::VertexSet;

/// Allowed deviation of a probability distribution's total from 1.
const NORMALIZATION_TOLERANCE: f64 = 1e-10;

/// Density operator with equal probability on each listed vertex
/// (0-based vertex positions in `vset`).
pub fn nonmoralizing_initial_state(vset: &VertexSet, vertices: &[usize]) -> Result<SparseMatrix> {
    if vertices.is_empty() {
        return Err(Error::InvalidArgument(
            "at least one initial vertex is required".into(),
        ));
    }
    let mut seen = HashSet::with_capacity(vertices.len());
    for &v in vertices {
        if v >= vset.len() {
            return Err(Error::InvalidArgument(format!(
                "initial vertex {} out of range for {} vertices",
                v,
                vset.len()
            )));
        }
        if !seen.insert(v) {
            return Err(Error::InvalidArgument(format!(
                "initial vertex {} listed more than once",
                v
            )));
        }
    }

    let mut probabilities = vec![0.0; vset.len()];
    let p = 1.0 / vertices.len() as f64;
    for &v in vertices {
        probabilities[v] = p;
    }
    nonmoralizing_initial_state_from_distribution(vset, &probabilities)
}

/// Density operator for an arbitrary probability distribution over the
/// vertices of `vset`.
pub fn nonmoralizing_initial_state_from_distribution(
    vset: &VertexSet,
    probabilities: &[f64],
) -> Result<SparseMatrix> {
    if probabilities.len() != vset.len() {
        return Err(Error::InvalidArgument(format!(
            "expected {} probabilities, got {}",
            vset.len(),
            probabilities.len()
        )));
    }
    for (v, &p) in probabilities.iter().enumerate() {
        if !p.is_finite() || p < 0.0 {
            return Err(Error::InvalidArgument(format!(
                "probability of vertex {} must be finite and nonnegative, got {}",
                v, p
            )));
        }
        if p > 0.0 && vset[v].is_empty() {
            return Err(Error::InvalidArgument(format!(
                "vertex {} has no incoming edges and cannot carry probability",
                v
            )));
        }
    }
    let total: f64 = probabilities.iter().sum();
    if (total - 1.0).abs() > NORMALIZATION_TOLERANCE {
        return Err(Error::InvalidArgument(format!(
            "probabilities must sum to 1, got {}",
            total
        )));
    }

    let mut asm = BlockAssembler::new(vset.size());
    for (v, &p) in probabilities.iter().enumerate() {
        let sub = vset.subspace(v);
        if sub.is_empty() {
            continue;
        }
        let value = Complex64::new(p / sub.len() as f64, 0.0);
        for k in sub {
            asm.push(k, k, value);
        }
    }
    Ok(asm.finish())
}
