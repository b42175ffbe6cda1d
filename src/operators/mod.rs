// Copyright 2026 QubitOS Contributors
// SPDX-License-Identifier: Apache-2.0

//! Generators of nonmoralizing quantum stochastic walks.
//!
//! A walk on a directed graph evolves under the GKSL master equation
//!
//!   dρ/dt = -i(1 − ω)[H, ρ] + ω Σ_k (L_k ρ L_k† − ½{L_k†L_k, ρ}) − iω[H_loc, ρ]
//!
//! This module builds its generators on the demoralized space:
//! - [`global_hamiltonian`]: coupling between vertex subspaces
//! - [`local_hamiltonian`]: block-diagonal rotation inside each subspace
//! - [`nonmoralizing_lindbladian`]: jumps between subspaces
//!
//! plus the classical jump operators of the standard walk and initial
//! states. Integration of the master equation is left to the caller.
//!
//! # Example
//!
//! ```
//! use ndarray::array;
//! use qswalk::operators::{
//!     global_hamiltonian, local_hamiltonian, nonmoralizing_lindbladian, PairBlocks,
//!     VertexBlocks,
//! };
//!
//! let a = array![[0.0, 1.0, 0.0], [1.0, 0.0, 1.0], [0.0, 1.0, 0.0]];
//! let (l, vset) = nonmoralizing_lindbladian(&a, &VertexBlocks::Default, None).unwrap();
//! let h = global_hamiltonian(&a, &PairBlocks::Default, None).unwrap();
//! let h_loc = local_hamiltonian(&vset, &VertexBlocks::Default).unwrap();
//! assert_eq!(vset.size(), 4);
//! assert_eq!(l.shape(), h.shape());
//! assert_eq!(h_loc.shape(), (4, 4));
//! ```

pub mod blocks;
pub mod defaults;
pub mod global;
pub mod initial;
pub mod local;
pub mod moralizing;
pub mod nonmoralizing;
pub mod sparse;

pub use blocks::{
    DegreeBlocks, PairBlocks, ShapeBlocks, VertexBlockMap, VertexBlocks, VertexPairBlocks,
};
pub use defaults::{default_local_hamiltonian, fourier_matrix, ones_block};
pub use global::{
    global_hamiltonian, global_hamiltonian_by_shape, global_hamiltonian_by_vertex_pair,
};
pub use initial::{nonmoralizing_initial_state, nonmoralizing_initial_state_from_distribution};
pub use local::{local_hamiltonian, local_hamiltonian_by_degree, local_hamiltonian_by_vertex};
pub use moralizing::{classical_global_lindbladian, classical_local_lindbladians};
pub use nonmoralizing::{
    nonmoralizing_lindbladian, nonmoralizing_lindbladian_by_degree,
    nonmoralizing_lindbladian_by_vertex, nonmoralizing_local_lindbladians,
};
pub use sparse::{adjoint, is_hermitian, sum_operators, to_dense, SparseMatrix};
