//! Edgewise — generic in-memory directed graph storage and traversal.
//!
//! Stores caller-supplied vertex and edge payloads in an adjacency-list
//! engine whose per-vertex edge lists are intrusive doubly-linked lists
//! threaded through the edge records, and runs breadth- and depth-first
//! traversals (with cycle signaling) over any backend implementing the
//! [`GraphStore`] contract.

pub mod cli;
pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use graph::{
    traverse, AdjListGraph, CycleFound, GraphCodec, GraphStore, Traversal, TraversalItem,
    TraversalIter, TraversalKind, Visit,
};
pub use types::{Edge, EdgeAssociation, EdgeId, GraphError, GraphResult, Vertex, VertexId};
