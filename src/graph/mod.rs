// Copyright 2026 QubitOS Contributors
// SPDX-License-Identifier: Apache-2.0

//! Directed graphs as demoralized vertex sets.
//!
//! - [`types`]: [`Vertex`] and [`VertexSet`]
//! - [`incidence`]: reversed incidence lists extracted from an adjacency
//!   matrix, and the vertex sets they induce

pub mod incidence;
pub mod types;

pub use incidence::{
    make_vertex_set, reversed_incidence_list, revinc_to_vertex_set, Adjacency, Incidence, Weight,
};
pub use types::{Vertex, VertexSet};
