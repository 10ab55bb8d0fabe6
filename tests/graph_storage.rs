//! Storage engine tests: tables, adjacency indexes, cascade removal.

use edgewise::graph::{AdjListGraph, GraphStore};
use edgewise::types::{EdgeAssociation, EdgeId, GraphError};

fn empty() -> AdjListGraph<&'static str, &'static str> {
    AdjListGraph::new()
}

// ==================== Vertex Table ====================

#[test]
fn inserted_vertex_is_retrievable_by_id() {
    let mut graph = empty();
    let vertex = graph.insert_vertex("a").clone();

    assert_eq!(vertex.id, 1);
    assert_eq!(graph.get_vertex_by_id(vertex.id), Some(&vertex));
    assert_eq!(graph.vertex_count(), 1);
}

#[test]
fn vertex_ids_are_monotonic_and_never_reused() {
    let mut graph = empty();
    let a = graph.insert_vertex("a").id;
    let b = graph.insert_vertex("b").id;
    let c = graph.insert_vertex("c").id;
    assert_eq!((a, b, c), (1, 2, 3));

    graph.remove_vertex(b);
    let d = graph.insert_vertex("d").id;
    assert_eq!(d, 4);
    assert!(graph.get_vertex_by_id(b).is_none());
}

#[test]
fn removing_an_absent_vertex_returns_none() {
    let mut graph = empty();
    assert!(graph.remove_vertex(42).is_none());
}

#[test]
fn vertices_enumerates_all_stored_records() {
    let mut graph = empty();
    for name in ["a", "b", "c"] {
        graph.insert_vertex(name);
    }
    let mut names: Vec<&str> = graph.vertices().map(|vertex| vertex.inner).collect();
    names.sort_unstable();
    assert_eq!(names, vec!["a", "b", "c"]);
}

#[test]
#[should_panic(expected = "not implemented")]
fn payload_lookup_is_unsupported_by_default() {
    let mut graph = empty();
    graph.insert_vertex("a");
    graph.get_vertex_by_inner(&"a");
}

// ==================== Edge Table ====================

#[test]
fn inserted_edge_is_retrievable_by_id() {
    let mut graph = empty();
    let a = graph.insert_vertex("a").id;
    let b = graph.insert_vertex("b").id;

    let edge = graph.insert_edge("ab", a, b).unwrap().clone();
    assert_eq!(edge.id, 1);
    assert_eq!(edge.source, a);
    assert_eq!(edge.dest, b);
    assert_eq!(graph.get_edge_by_id(edge.id), Some(&edge));
    assert_eq!(graph.edge_count(), 1);
}

#[test]
fn missing_source_is_reported_before_missing_dest() {
    let mut graph = empty();
    let a = graph.insert_vertex("a").id;

    assert_eq!(
        graph.insert_edge("x", 98, 99),
        Err(GraphError::VertexNotFound(98))
    );
    assert_eq!(
        graph.insert_edge("x", 99, a),
        Err(GraphError::VertexNotFound(99))
    );
    assert_eq!(
        graph.insert_edge("x", a, 99),
        Err(GraphError::VertexNotFound(99))
    );
}

#[test]
fn failed_edge_insert_mutates_nothing() {
    let mut graph = empty();
    let a = graph.insert_vertex("a").id;

    assert!(graph.insert_edge("x", a, 99).is_err());
    assert_eq!(graph.edge_count(), 0);
    assert_eq!(graph.edges().count(), 0);
    assert_eq!(
        graph
            .edges_associated_with_vertex(a, EdgeAssociation::All)
            .count(),
        0
    );

    // The id counter is untouched by the failed attempt.
    let b = graph.insert_vertex("b").id;
    assert_eq!(graph.insert_edge("ab", a, b).unwrap().id, 1);
}

#[test]
fn removed_edge_returns_snapshot_and_clears_indexes() {
    let mut graph = empty();
    let a = graph.insert_vertex("a").id;
    let b = graph.insert_vertex("b").id;
    let edge_id = graph.insert_edge("ab", a, b).unwrap().id;

    let removed = graph.remove_edge(edge_id).unwrap();
    assert_eq!(removed.inner, "ab");
    assert!(graph.get_edge_by_id(edge_id).is_none());
    assert_eq!(
        graph
            .edges_associated_with_vertex(a, EdgeAssociation::All)
            .count(),
        0
    );
    assert_eq!(
        graph
            .edges_associated_with_vertex(b, EdgeAssociation::All)
            .count(),
        0
    );

    assert!(graph.remove_edge(edge_id).is_none());
}

#[test]
fn edge_ids_are_never_reused() {
    let mut graph = empty();
    let a = graph.insert_vertex("a").id;
    let b = graph.insert_vertex("b").id;

    let first = graph.insert_edge("e1", a, b).unwrap().id;
    graph.remove_edge(first);
    let second = graph.insert_edge("e2", a, b).unwrap().id;
    assert_eq!(second, first + 1);
}

// ==================== Cascade Removal ====================

#[test]
fn removing_a_vertex_removes_every_touching_edge() {
    let mut graph = empty();
    let a = graph.insert_vertex("a").id;
    let b = graph.insert_vertex("b").id;
    let c = graph.insert_vertex("c").id;

    let ab = graph.insert_edge("ab", a, b).unwrap().id;
    let bc = graph.insert_edge("bc", b, c).unwrap().id;
    let cb = graph.insert_edge("cb", c, b).unwrap().id;
    let ac = graph.insert_edge("ac", a, c).unwrap().id;

    let removed = graph.remove_vertex(b).unwrap();
    assert_eq!(removed.inner, "b");

    for edge_id in [ab, bc, cb] {
        assert!(graph.get_edge_by_id(edge_id).is_none());
    }
    assert_eq!(graph.get_edge_by_id(ac).map(|edge| edge.id), Some(ac));
    assert_eq!(graph.edge_count(), 1);
    assert_eq!(graph.vertex_count(), 2);

    // No adjacency index still mentions the removed vertex.
    assert_eq!(
        graph
            .edges_associated_with_vertex(a, EdgeAssociation::All)
            .map(|edge| edge.id)
            .collect::<Vec<_>>(),
        vec![ac]
    );
    assert_eq!(
        graph
            .edges_associated_with_vertex(c, EdgeAssociation::All)
            .map(|edge| edge.id)
            .collect::<Vec<_>>(),
        vec![ac]
    );
    assert_eq!(
        graph
            .edges_associated_with_vertex(b, EdgeAssociation::All)
            .count(),
        0
    );
}

#[test]
fn self_loop_survives_insertion_and_cascades_once() {
    let mut graph = empty();
    let a = graph.insert_vertex("a").id;
    let loop_id = graph.insert_edge("aa", a, a).unwrap().id;

    // The loop sits in both of the vertex's role lists.
    let associated: Vec<EdgeId> = graph
        .edges_associated_with_vertex(a, EdgeAssociation::All)
        .map(|edge| edge.id)
        .collect();
    assert_eq!(associated, vec![loop_id, loop_id]);

    graph.remove_vertex(a).unwrap();
    assert!(graph.get_edge_by_id(loop_id).is_none());
    assert_eq!(graph.edge_count(), 0);
}

// ==================== Between-Vertices Queries ====================

#[test]
fn between_vertices_is_directed() {
    let mut graph = empty();
    let a = graph.insert_vertex("a").id;
    let b = graph.insert_vertex("b").id;

    let ab = graph.insert_edge("ab", a, b).unwrap().id;
    let ba = graph.insert_edge("ba", b, a).unwrap().id;

    let forward: Vec<EdgeId> = graph
        .get_all_edges_between_vertices(a, b)
        .map(|edge| edge.id)
        .collect();
    let backward: Vec<EdgeId> = graph
        .get_all_edges_between_vertices(b, a)
        .map(|edge| edge.id)
        .collect();

    assert_eq!(forward, vec![ab]);
    assert_eq!(backward, vec![ba]);
}

#[test]
fn between_vertices_returns_parallel_edges_in_order() {
    let mut graph = empty();
    let a = graph.insert_vertex("a").id;
    let b = graph.insert_vertex("b").id;
    let c = graph.insert_vertex("c").id;

    let first = graph.insert_edge("e1", a, b).unwrap().id;
    let second = graph.insert_edge("e2", a, b).unwrap().id;
    graph.insert_edge("cb", c, b).unwrap();

    let found: Vec<EdgeId> = graph
        .get_all_edges_between_vertices(a, b)
        .map(|edge| edge.id)
        .collect();
    assert_eq!(found, vec![first, second]);
}

#[test]
fn between_vertices_with_no_lists_is_empty() {
    let mut graph = empty();
    let a = graph.insert_vertex("a").id;
    let b = graph.insert_vertex("b").id;

    assert_eq!(graph.get_all_edges_between_vertices(a, b).count(), 0);

    // One-sided case: a gains an outgoing list, b→a never exists.
    graph.insert_edge("ab", a, b).unwrap();
    assert_eq!(graph.get_all_edges_between_vertices(b, a).count(), 0);
}

#[test]
fn remove_all_edges_between_vertices_spares_the_reverse_direction() {
    let mut graph = empty();
    let a = graph.insert_vertex("a").id;
    let b = graph.insert_vertex("b").id;

    graph.insert_edge("e1", a, b).unwrap();
    graph.insert_edge("e2", a, b).unwrap();
    let ba = graph.insert_edge("ba", b, a).unwrap().id;

    graph.remove_all_edges_between_vertices(a, b);
    assert_eq!(graph.edge_count(), 1);
    assert_eq!(graph.get_edge_by_id(ba).map(|edge| edge.id), Some(ba));
    assert_eq!(graph.get_all_edges_between_vertices(a, b).count(), 0);
}

// ==================== Association Queries ====================

#[test]
fn associations_split_by_role_and_concatenate_for_all() {
    let mut graph = empty();
    let a = graph.insert_vertex("a").id;
    let b = graph.insert_vertex("b").id;
    let c = graph.insert_vertex("c").id;

    let out1 = graph.insert_edge("out1", a, b).unwrap().id;
    let out2 = graph.insert_edge("out2", a, c).unwrap().id;
    let inc1 = graph.insert_edge("inc1", b, a).unwrap().id;

    let outgoing: Vec<EdgeId> = graph
        .edges_associated_with_vertex(a, EdgeAssociation::Outgoing)
        .map(|edge| edge.id)
        .collect();
    let incoming: Vec<EdgeId> = graph
        .edges_associated_with_vertex(a, EdgeAssociation::Incoming)
        .map(|edge| edge.id)
        .collect();
    let all: Vec<EdgeId> = graph
        .edges_associated_with_vertex(a, EdgeAssociation::All)
        .map(|edge| edge.id)
        .collect();

    assert_eq!(outgoing, vec![out1, out2]);
    assert_eq!(incoming, vec![inc1]);
    assert_eq!(all, vec![out1, out2, inc1]);
}

#[test]
fn association_query_on_untouched_vertex_is_empty() {
    let mut graph = empty();
    let a = graph.insert_vertex("a").id;

    for association in [
        EdgeAssociation::Outgoing,
        EdgeAssociation::Incoming,
        EdgeAssociation::All,
    ] {
        assert_eq!(graph.edges_associated_with_vertex(a, association).count(), 0);
    }
}

#[test]
fn adjacent_vertices_map_edges_to_the_far_endpoint() {
    let mut graph = empty();
    let a = graph.insert_vertex("a").id;
    let b = graph.insert_vertex("b").id;
    let c = graph.insert_vertex("c").id;

    graph.insert_edge("ab", a, b).unwrap();
    graph.insert_edge("ca", c, a).unwrap();

    let outgoing: Vec<&str> = graph
        .adjacent_vertices_for_vertex(a, EdgeAssociation::Outgoing)
        .map(|vertex| vertex.inner)
        .collect();
    let all: Vec<&str> = graph
        .adjacent_vertices_for_vertex(a, EdgeAssociation::All)
        .map(|vertex| vertex.inner)
        .collect();

    assert_eq!(outgoing, vec!["b"]);
    assert_eq!(all, vec!["b", "c"]);
}
