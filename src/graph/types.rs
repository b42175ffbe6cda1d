// Copyright 2026 QubitOS Contributors
// SPDX-License-Identifier: Apache-2.0

//! Demoralized vertex types.
//!
//! A [`Vertex`] owns an ordered list of 1-based global basis indices (its
//! subspace). A [`VertexSet`] is an ordered partition of `1..=N` into
//! vertices, where concatenating the vertices in order yields exactly
//! `1, 2, ..., N`.

use std::collections::HashSet;
use std::fmt;
use std::ops::{Index, Range};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A demoralized graph vertex: the ordered basis indices it occupies.
///
/// Equality and hashing depend only on the index sequence, so copies of a
/// vertex can be used interchangeably as map keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "Vec<usize>", into = "Vec<usize>")]
pub struct Vertex {
    indices: Vec<usize>,
}

impl Vertex {
    /// Create a vertex from 1-based subspace indices.
    ///
    /// Fails if any index is zero or repeated. An empty index list is
    /// accepted: it stands for a vertex without incoming edges, which owns
    /// no basis states.
    pub fn new(indices: Vec<usize>) -> Result<Self> {
        if let Some(pos) = indices.iter().position(|&k| k == 0) {
            return Err(Error::InvalidArgument(format!(
                "invalid vertex {:?}: index at position {} is not positive",
                indices, pos
            )));
        }
        let mut seen = HashSet::with_capacity(indices.len());
        for &k in &indices {
            if !seen.insert(k) {
                return Err(Error::InvalidArgument(format!(
                    "invalid vertex {:?}: index {} appears more than once",
                    indices, k
                )));
            }
        }
        Ok(Self { indices })
    }

    /// Dimension of the vertex subspace.
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// The `i`-th subspace index (0-based position), if present.
    pub fn get(&self, i: usize) -> Option<usize> {
        self.indices.get(i).copied()
    }

    /// The raw 1-based index sequence.
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    pub fn into_indices(self) -> Vec<usize> {
        self.indices
    }

    /// 0-based matrix rows/columns owned by this vertex.
    pub fn subspace(&self) -> impl Iterator<Item = usize> + '_ {
        self.indices.iter().map(|&k| k - 1)
    }
}

impl Index<usize> for Vertex {
    type Output = usize;

    fn index(&self, i: usize) -> &usize {
        &self.indices[i]
    }
}

impl TryFrom<Vec<usize>> for Vertex {
    type Error = Error;

    fn try_from(indices: Vec<usize>) -> Result<Self> {
        Vertex::new(indices)
    }
}

impl From<Vertex> for Vec<usize> {
    fn from(v: Vertex) -> Self {
        v.indices
    }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.indices)
    }
}

/// Ordered partition of the global basis `1..=N` into vertices.
///
/// Offsets are computed once at construction, so [`VertexSet::subspace`] is
/// O(1).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vertex>", into = "Vec<Vertex>")]
pub struct VertexSet {
    vertices: Vec<Vertex>,
    offsets: Vec<usize>,
}

impl VertexSet {
    /// Create a vertex set, checking that the vertices concatenate to
    /// exactly `1, 2, ..., N`.
    pub fn new(vertices: Vec<Vertex>) -> Result<Self> {
        let mut offsets = Vec::with_capacity(vertices.len() + 1);
        let mut next = 1;
        offsets.push(0);
        for (pos, v) in vertices.iter().enumerate() {
            for &k in v.indices() {
                if k != next {
                    return Err(Error::InvalidArgument(format!(
                        "invalid vertex set: vertex {} ({}) holds index {} where {} was expected",
                        pos, v, k, next
                    )));
                }
                next += 1;
            }
            offsets.push(next - 1);
        }
        Ok(Self { vertices, offsets })
    }

    /// Create a vertex set from raw 1-based index lists.
    pub fn from_indices(lists: Vec<Vec<usize>>) -> Result<Self> {
        let vertices = lists
            .into_iter()
            .map(Vertex::new)
            .collect::<Result<Vec<_>>>()?;
        Self::new(vertices)
    }

    /// Create a vertex set whose `i`-th vertex has dimension `dims[i]`.
    ///
    /// Always valid: subspaces are laid out contiguously in order.
    pub fn from_dimensions(dims: &[usize]) -> Self {
        let mut vertices = Vec::with_capacity(dims.len());
        let mut offsets = Vec::with_capacity(dims.len() + 1);
        let mut start = 0;
        offsets.push(0);
        for &d in dims {
            vertices.push(Vertex {
                indices: (start + 1..=start + d).collect(),
            });
            start += d;
            offsets.push(start);
        }
        Self { vertices, offsets }
    }

    /// Number of vertices.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Total dimension `N` of the partitioned space.
    pub fn size(&self) -> usize {
        self.offsets.last().copied().unwrap_or(0)
    }

    pub fn get(&self, i: usize) -> Option<&Vertex> {
        self.vertices.get(i)
    }

    /// Borrow a contiguous run of vertices.
    ///
    /// The run does not in general start at index 1, so it is returned as a
    /// slice rather than as another `VertexSet`.
    pub fn slice(&self, range: Range<usize>) -> &[Vertex] {
        &self.vertices[range]
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Vertex> {
        self.vertices.iter()
    }

    /// Dimension of every vertex, in order.
    pub fn dimensions(&self) -> Vec<usize> {
        self.vertices.iter().map(Vertex::len).collect()
    }

    /// 0-based row range owned by the `i`-th vertex.
    ///
    /// # Panics
    /// Panics if `i >= self.len()`.
    pub fn subspace(&self, i: usize) -> Range<usize> {
        self.offsets[i]..self.offsets[i + 1]
    }

    /// Position of `vertex` in this set, if it is a member.
    pub fn position(&self, vertex: &Vertex) -> Option<usize> {
        match vertex.indices().first() {
            // Indices are contiguous, so the first index pins the position.
            Some(&first) => {
                let pos = self.offsets.partition_point(|&o| o < first) - 1;
                (self.vertices.get(pos) == Some(vertex)).then_some(pos)
            }
            None => self.vertices.iter().position(|v| v.is_empty()),
        }
    }
}

impl Index<usize> for VertexSet {
    type Output = Vertex;

    fn index(&self, i: usize) -> &Vertex {
        &self.vertices[i]
    }
}

impl<'a> IntoIterator for &'a VertexSet {
    type Item = &'a Vertex;
    type IntoIter = std::slice::Iter<'a, Vertex>;

    fn into_iter(self) -> Self::IntoIter {
        self.vertices.iter()
    }
}

impl TryFrom<Vec<Vertex>> for VertexSet {
    type Error = Error;

    fn try_from(vertices: Vec<Vertex>) -> Result<Self> {
        VertexSet::new(vertices)
    }
}

impl From<VertexSet> for Vec<Vertex> {
    fn from(vset: VertexSet) -> Self {
        vset.vertices
    }
}
