// Copyright 2026 QubitOS Contributors
// SPDX-License-Identifier: Apache-2.0

//! Shared test fixtures.

use ndarray::Array2;

/// Undirected path graph `0 — 1 — … — (n−1)` with unit weights.
pub fn path_graph(n: usize) -> Array2<f64> {
    let mut a = Array2::zeros((n, n));
    for i in 1..n {
        a[[i - 1, i]] = 1.0;
        a[[i, i - 1]] = 1.0;
    }
    a
}

/// Directed star with edges `0 → i` for every `i > 0`.
///
/// The centre has no incoming edges, so it demoralizes to an empty subspace.
pub fn star_graph(n: usize) -> Array2<f64> {
    let mut a = Array2::zeros((n, n));
    for i in 1..n {
        a[[i, 0]] = 1.0;
    }
    a
}

/// Directed cycle `0 → 1 → … → (n−1) → 0`.
pub fn cycle_graph(n: usize) -> Array2<f64> {
    let mut a = Array2::zeros((n, n));
    for i in 0..n {
        a[[(i + 1) % n, i]] = 1.0;
    }
    a
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_graph_is_symmetric() {
        let a = path_graph(4);
        assert_eq!(a, a.t());
        assert_eq!(a.sum(), 6.0);
    }

    #[test]
    fn test_star_graph_edges_point_outward() {
        let a = star_graph(3);
        assert_eq!(a[[1, 0]], 1.0);
        assert_eq!(a[[0, 1]], 0.0);
    }

    #[test]
    fn test_cycle_graph_in_degrees() {
        let a = cycle_graph(5);
        for row in a.rows() {
            assert_eq!(row.sum(), 1.0);
        }
    }
}
