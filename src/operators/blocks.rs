// Copyright 2026 QubitOS Contributors
// SPDX-License-Identifier: Apache-2.0

//! Caller-supplied operator blocks.
//!
//! Builders accept blocks in one of three forms: a default rule, a map keyed
//! by vertex dimension, or a map keyed by vertex (pair). Every form is
//! expanded to the per-vertex map before validation and assembly, so the
//! builders implement one canonical operation.
//!
//! Vertices of dimension 0 own no basis states. They never demand a key and
//! are skipped during assembly.

use std::borrow::Cow;
use std::collections::{BTreeSet, HashMap};

use ndarray::Array2;
use num_complex::Complex64;

use crate::error::{Error, Result};
use crate::graph::{Vertex, VertexSet};
use crate::validation::validate_block;

/// Blocks keyed by vertex dimension.
pub type DegreeBlocks = HashMap<usize, Array2<Complex64>>;

/// Blocks keyed by vertex.
pub type VertexBlockMap = HashMap<Vertex, Array2<Complex64>>;

/// Coupling blocks keyed by `(rows, cols)` shape.
pub type ShapeBlocks = HashMap<(usize, usize), Array2<Complex64>>;

/// Coupling blocks keyed by ordered vertex pair.
pub type VertexPairBlocks = HashMap<(Vertex, Vertex), Array2<Complex64>>;

/// One square block per vertex.
#[derive(Debug, Clone, Default)]
pub enum VertexBlocks {
    /// Builder-specific default rule, parametrized by dimension.
    #[default]
    Default,
    /// One `d × d` block per distinct vertex dimension `d`.
    ByDegree(DegreeBlocks),
    /// One `len(v) × len(v)` block per vertex `v`.
    ByVertex(VertexBlockMap),
}

impl VertexBlocks {
    /// Expand to the per-vertex form.
    ///
    /// `default_rule` builds the block for a dimension when `self` is
    /// [`VertexBlocks::Default`].
    pub fn to_vertex_map<'a, F>(
        &'a self,
        vset: &VertexSet,
        default_rule: F,
    ) -> Result<Cow<'a, VertexBlockMap>>
    where
        F: Fn(usize) -> Result<Array2<Complex64>>,
    {
        match self {
            VertexBlocks::Default => {
                let by_degree = distinct_dimensions(vset)
                    .into_iter()
                    .map(|d| Ok((d, default_rule(d)?)))
                    .collect::<Result<DegreeBlocks>>()?;
                Ok(Cow::Owned(expand_degree_blocks(vset, &by_degree)?))
            }
            VertexBlocks::ByDegree(by_degree) => {
                Ok(Cow::Owned(expand_degree_blocks(vset, by_degree)?))
            }
            VertexBlocks::ByVertex(by_vertex) => Ok(Cow::Borrowed(by_vertex)),
        }
    }
}

/// Coupling blocks for pairs of vertices.
#[derive(Debug, Clone, Default)]
pub enum PairBlocks {
    /// All-ones block of the shape each pair demands.
    #[default]
    Default,
    /// One `d_i × d_j` block per distinct shape.
    ByShape(ShapeBlocks),
    /// One `len(v) × len(w)` block per vertex pair `(v, w)`.
    ByVertexPair(VertexPairBlocks),
}

/// Distinct nonzero vertex dimensions, ascending.
pub fn distinct_dimensions(vset: &VertexSet) -> BTreeSet<usize> {
    vset.iter().map(Vertex::len).filter(|&d| d > 0).collect()
}

/// Expand a by-degree map into a by-vertex map.
///
/// Every supplied block is checked against its key, and every nonzero
/// dimension present in `vset` must have a block.
pub fn expand_degree_blocks(vset: &VertexSet, by_degree: &DegreeBlocks) -> Result<VertexBlockMap> {
    for (&d, block) in by_degree {
        validate_block(&format!("degree {}", d), block, (d, d))?;
    }
    for d in distinct_dimensions(vset) {
        if !by_degree.contains_key(&d) {
            return Err(Error::MissingKey(format!("degree {}", d)));
        }
    }

    let mut by_vertex = HashMap::with_capacity(vset.len());
    for v in vset.iter().filter(|v| !v.is_empty()) {
        by_vertex
            .entry(v.clone())
            .or_insert_with(|| by_degree[&v.len()].clone());
    }
    Ok(by_vertex)
}

/// Look up the block of every vertex, in vertex order.
///
/// Entries are `None` for vertices of dimension 0. Every supplied block is
/// checked against its key before any lookup.
pub fn resolve_vertex_blocks<'a>(
    vset: &VertexSet,
    by_vertex: &'a VertexBlockMap,
) -> Result<Vec<Option<&'a Array2<Complex64>>>> {
    for (v, block) in by_vertex {
        validate_block(&format!("vertex {}", v), block, (v.len(), v.len()))?;
    }
    vset.iter()
        .map(|v| {
            if v.is_empty() {
                return Ok(None);
            }
            by_vertex
                .get(v)
                .map(Some)
                .ok_or_else(|| Error::MissingKey(format!("vertex {}", v)))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operators::defaults::default_local_hamiltonian;

    fn vset() -> VertexSet {
        VertexSet::from_indices(vec![vec![1], vec![2, 3], vec![], vec![4, 5]]).unwrap()
    }

    #[test]
    fn test_distinct_dimensions_skip_empty() {
        assert_eq!(
            distinct_dimensions(&vset()).into_iter().collect::<Vec<_>>(),
            vec![1, 2]
        );
    }

    #[test]
    fn test_default_expands_per_vertex() {
        let blocks = VertexBlocks::Default;
        let vset = vset();
        let map = blocks
            .to_vertex_map(&vset, default_local_hamiltonian)
            .unwrap();
        assert_eq!(map.len(), 3);
        let v = Vertex::new(vec![4, 5]).unwrap();
        assert_eq!(map[&v], default_local_hamiltonian(2).unwrap());
    }

    #[test]
    fn test_by_degree_missing_key() {
        let mut by_degree = DegreeBlocks::new();
        by_degree.insert(1, Array2::zeros((1, 1)));
        let err = expand_degree_blocks(&vset(), &by_degree).unwrap_err();
        assert!(matches!(err, Error::MissingKey(_)));
        assert_eq!(err.to_string(), "Missing key: degree 2");
    }

    #[test]
    fn test_by_degree_shape_checked_even_if_unused() {
        let mut by_degree = DegreeBlocks::new();
        by_degree.insert(1, Array2::zeros((1, 1)));
        by_degree.insert(2, Array2::zeros((2, 2)));
        by_degree.insert(7, Array2::zeros((3, 3)));
        let err = expand_degree_blocks(&vset(), &by_degree).unwrap_err();
        assert!(matches!(err, Error::ShapeMismatch { .. }));
    }

    #[test]
    fn test_resolve_by_vertex() {
        let vset = vset();
        let by_vertex: VertexBlockMap = vset
            .iter()
            .filter(|v| !v.is_empty())
            .map(|v| (v.clone(), Array2::eye(v.len())))
            .collect();
        let resolved = resolve_vertex_blocks(&vset, &by_vertex).unwrap();
        assert_eq!(resolved.len(), 4);
        assert!(resolved[2].is_none());
        assert_eq!(resolved[1].map(|b| b.dim()), Some((2, 2)));
    }

    #[test]
    fn test_resolve_by_vertex_missing_key_names_vertex() {
        let vset = vset();
        let mut by_vertex = VertexBlockMap::new();
        by_vertex.insert(Vertex::new(vec![1]).unwrap(), Array2::zeros((1, 1)));
        let err = resolve_vertex_blocks(&vset, &by_vertex).unwrap_err();
        assert_eq!(err.to_string(), "Missing key: vertex [2, 3]");
    }

    #[test]
    fn test_resolve_by_vertex_shape_mismatch() {
        let vset = vset();
        let mut by_vertex = VertexBlockMap::new();
        by_vertex.insert(Vertex::new(vec![2, 3]).unwrap(), Array2::zeros((1, 1)));
        let err = resolve_vertex_blocks(&vset, &by_vertex).unwrap_err();
        assert!(matches!(err, Error::ShapeMismatch { expected: (2, 2), .. }));
    }
}
