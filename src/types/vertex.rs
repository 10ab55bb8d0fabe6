//! The vertex record.

use super::VertexId;

/// A stored vertex: an engine-assigned id plus the caller's payload.
///
/// The payload is immutable once stored; there is no update operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vertex<V> {
    /// Identifier assigned at insertion.
    pub id: VertexId,
    /// Caller-supplied payload.
    pub inner: V,
}

impl<V> Vertex<V> {
    /// Build a vertex record. Only storage backends should mint these;
    /// consumers receive them from [`crate::graph::GraphStore`] methods.
    pub fn new(id: VertexId, inner: V) -> Self {
        Self { id, inner }
    }
}
