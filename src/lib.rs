// Copyright 2026 QubitOS Contributors
// SPDX-License-Identifier: Apache-2.0

//! Nonmoralizing quantum stochastic walks on directed graphs.
//!
//! This crate builds the generators of open quantum walks on arbitrary
//! directed graphs. Each graph vertex is demoralized into a subspace whose
//! dimension equals its in-degree, and the Hamiltonians and Lindbladians are
//! assembled as sparse block operators over that partition.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │         adjacency matrix (dense/sparse)      │
//! ├──────────────────────────────────────────────┤
//! │   reversed incidence list → VertexSet        │
//! ├───────────────┬───────────────┬──────────────┤
//! │ local         │ global        │ nonmoralizing│
//! │ Hamiltonian   │ Hamiltonian   │ Lindbladian  │
//! └───────────────┴───────────────┴──────────────┘
//!          sparse complex operators (sprs)
//! ```
//!
//! # Modules
//!
//! - [`graph`]: vertices, vertex sets and incidence extraction
//! - [`operators`]: Hamiltonian and Lindbladian builders
//! - [`validation`]: Input validation utilities
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod config;
pub mod error;
pub mod graph;
pub mod operators;
pub mod validation;

pub use config::Config;
pub use error::{Error, Result};
pub use graph::{make_vertex_set, Vertex, VertexSet};
pub use operators::SparseMatrix;

#[cfg(test)]
pub mod test_utils;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
