// Copyright 2026 QubitOS Contributors
// SPDX-License-Identifier: Apache-2.0

//! Serde representation of vertices and vertex sets.

use qswalk::{Vertex, VertexSet};

#[test]
fn test_vertex_serializes_as_index_list() {
    let v = Vertex::new(vec![2, 3]).unwrap();
    assert_eq!(serde_json::to_string(&v).unwrap(), "[2,3]");
    let back: Vertex = serde_json::from_str("[2,3]").unwrap();
    assert_eq!(back, v);
}

#[test]
fn test_vertex_set_serializes_as_nested_lists() {
    let vset = VertexSet::from_indices(vec![vec![1], vec![], vec![2, 3]]).unwrap();
    let json = serde_json::to_string(&vset).unwrap();
    assert_eq!(json, "[[1],[],[2,3]]");

    let back: VertexSet = serde_json::from_str(&json).unwrap();
    assert_eq!(back, vset);
    assert_eq!(back.subspace(2), 1..3);
}

#[test]
fn test_invalid_vertex_rejected_on_deserialize() {
    let err = serde_json::from_str::<Vertex>("[1,0]").unwrap_err();
    assert!(err.to_string().contains("not positive"));
    assert!(serde_json::from_str::<Vertex>("[4,4]").is_err());
}

#[test]
fn test_invalid_vertex_set_rejected_on_deserialize() {
    let err = serde_json::from_str::<VertexSet>("[[1],[3]]").unwrap_err();
    assert!(err.to_string().contains("where 2 was expected"));
    assert!(serde_json::from_str::<VertexSet>("[[2,1]]").is_err());
}

#[test]
fn test_vertex_set_from_yaml() {
    let vset: VertexSet = serde_yaml::from_str("- [1, 2]\n- [3]\n").unwrap();
    assert_eq!(vset.dimensions(), vec![2, 1]);
}
