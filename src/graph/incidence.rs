// Copyright 2026 QubitOS Contributors
// SPDX-License-Identifier: Apache-2.0

//! Reversed incidence lists and the vertex sets they induce.
//!
//! Row `i` of an adjacency matrix lists the sources `j` of edges `j → i`.
//! An entry is significant when `|A[i, j]| ≥ ε`. Demoralization gives vertex
//! `i` a subspace whose dimension is the length of its incidence list.

use ndarray::{ArrayBase, Data, Ix2};
use num_complex::{Complex32, Complex64};
use sprs::CsMat;
use tracing::trace;

use super::types::VertexSet;
use crate::error::{Error, Result};
use crate::validation::validate_epsilon;

/// Scalar types accepted as adjacency weights.
pub trait Weight: Copy {
    /// Machine epsilon of the scalar type, used as the default threshold.
    const EPSILON: f64;

    /// Absolute value (modulus for complex scalars).
    fn modulus(&self) -> f64;

    fn to_complex(&self) -> Complex64;

    fn is_finite(&self) -> bool;
}

macro_rules! impl_real_weight {
    ($t:ty, $eps:expr) => {
        impl Weight for $t {
            const EPSILON: f64 = $eps;

            fn modulus(&self) -> f64 {
                (*self as f64).abs()
            }

            fn to_complex(&self) -> Complex64 {
                Complex64::new(*self as f64, 0.0)
            }

            fn is_finite(&self) -> bool {
                (*self as f64).is_finite()
            }
        }
    };
}

impl_real_weight!(f64, f64::EPSILON);
impl_real_weight!(f32, f32::EPSILON as f64);
// Integers have no machine epsilon; any nonzero entry is significant.
impl_real_weight!(i64, f64::EPSILON);
impl_real_weight!(i32, f64::EPSILON);

impl Weight for Complex64 {
    const EPSILON: f64 = f64::EPSILON;

    fn modulus(&self) -> f64 {
        self.norm()
    }

    fn to_complex(&self) -> Complex64 {
        *self
    }

    fn is_finite(&self) -> bool {
        self.re.is_finite() && self.im.is_finite()
    }
}

impl Weight for Complex32 {
    const EPSILON: f64 = f32::EPSILON as f64;

    fn modulus(&self) -> f64 {
        self.norm() as f64
    }

    fn to_complex(&self) -> Complex64 {
        Complex64::new(self.re as f64, self.im as f64)
    }

    fn is_finite(&self) -> bool {
        self.re.is_finite() && self.im.is_finite()
    }
}

/// A weighted directed adjacency matrix, dense or sparse.
///
/// Entry `(i, j)` is the weight of the edge `j → i`.
pub trait Adjacency {
    type Scalar: Weight;

    fn shape(&self) -> (usize, usize);

    /// Visit every stored entry as `(row, col, value)`, in any order.
    fn for_each_entry<F: FnMut(usize, usize, Self::Scalar)>(&self, f: F);

    /// Threshold used when the caller does not supply one.
    fn default_epsilon(&self) -> f64 {
        Self::Scalar::EPSILON
    }
}

impl<S, T> Adjacency for ArrayBase<S, Ix2>
where
    S: Data<Elem = T>,
    T: Weight,
{
    type Scalar = T;

    fn shape(&self) -> (usize, usize) {
        self.dim()
    }

    fn for_each_entry<F: FnMut(usize, usize, T)>(&self, mut f: F) {
        for ((i, j), &value) in self.indexed_iter() {
            f(i, j, value);
        }
    }
}

impl<T> Adjacency for CsMat<T>
where
    T: Weight,
{
    type Scalar = T;

    fn shape(&self) -> (usize, usize) {
        (self.rows(), self.cols())
    }

    fn for_each_entry<F: FnMut(usize, usize, T)>(&self, mut f: F) {
        for (&value, (i, j)) in self.iter() {
            f(i, j, value);
        }
    }
}

/// Significant incoming neighbours of every row, with their weights.
///
/// `neighbors[i]` is sorted by ascending column index.
#[derive(Debug, Clone, PartialEq)]
pub struct Incidence {
    pub neighbors: Vec<Vec<(usize, Complex64)>>,
}

impl Incidence {
    /// Extract the weighted reversed incidence list of `adjacency`.
    ///
    /// Diagonal entries are kept when significant. Any non-finite entry is
    /// rejected, significant or not. With `epsilon == 0` every position is
    /// significant, whether or not a sparse input stores it.
    pub fn from_adjacency<A: Adjacency>(adjacency: &A, epsilon: Option<f64>) -> Result<Self> {
        let epsilon = epsilon.unwrap_or_else(|| adjacency.default_epsilon());
        validate_epsilon(epsilon)?;

        let (rows, cols) = adjacency.shape();
        if rows != cols {
            return Err(Error::InvalidArgument(format!(
                "adjacency matrix must be square, got {} × {}",
                rows, cols
            )));
        }

        let mut neighbors = vec![Vec::new(); rows];
        let mut bad_entry = None;
        adjacency.for_each_entry(|i, j, value| {
            if !value.is_finite() {
                bad_entry.get_or_insert((i, j));
            } else if value.modulus() >= epsilon {
                neighbors[i].push((j, value.to_complex()));
            }
        });
        if let Some((i, j)) = bad_entry {
            return Err(Error::TypeMismatch(format!(
                "adjacency entry ({}, {}) is not a finite number",
                i, j
            )));
        }

        if epsilon == 0.0 {
            // `0 ≥ 0`: positions a sparse matrix leaves implicit count too.
            for row in &mut neighbors {
                let mut full: Vec<(usize, Complex64)> =
                    (0..cols).map(|j| (j, Complex64::new(0.0, 0.0))).collect();
                for &(j, w) in row.iter() {
                    full[j].1 += w;
                }
                *row = full;
            }
        } else {
            for row in &mut neighbors {
                row.sort_by_key(|&(j, _)| j);
            }
        }

        trace!(
            vertices = rows,
            edges = neighbors.iter().map(Vec::len).sum::<usize>(),
            epsilon,
            "extracted reversed incidence list"
        );

        Ok(Self { neighbors })
    }

    /// Number of rows (graph vertices).
    pub fn len(&self) -> usize {
        self.neighbors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.neighbors.is_empty()
    }

    /// In-degree of every row.
    pub fn in_degrees(&self) -> Vec<usize> {
        self.neighbors.iter().map(Vec::len).collect()
    }

    /// Drop the weights, keeping only neighbour indices.
    pub fn to_lists(&self) -> Vec<Vec<usize>> {
        self.neighbors
            .iter()
            .map(|row| row.iter().map(|&(j, _)| j).collect())
            .collect()
    }

    /// The demoralized vertex set: row `i` becomes a vertex of dimension
    /// `in_degree(i)`, laid out contiguously in row order.
    pub fn vertex_set(&self) -> VertexSet {
        VertexSet::from_dimensions(&self.in_degrees())
    }
}

/// Reversed incidence list of `adjacency`: for each row, the ascending
/// 0-based columns holding significant entries.
pub fn reversed_incidence_list<A: Adjacency>(
    adjacency: &A,
    epsilon: Option<f64>,
) -> Result<Vec<Vec<usize>>> {
    Ok(Incidence::from_adjacency(adjacency, epsilon)?.to_lists())
}

/// Vertex set induced by a reversed incidence list.
pub fn revinc_to_vertex_set(lists: &[Vec<usize>]) -> VertexSet {
    let dims: Vec<usize> = lists.iter().map(Vec::len).collect();
    VertexSet::from_dimensions(&dims)
}

/// Demoralized vertex set of `adjacency`.
///
/// `epsilon` defaults to the machine epsilon of the adjacency scalar type.
pub fn make_vertex_set<A: Adjacency>(adjacency: &A, epsilon: Option<f64>) -> Result<VertexSet> {
    Ok(Incidence::from_adjacency(adjacency, epsilon)?.vertex_set())
}
