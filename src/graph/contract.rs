//! The storage and serialization capability contracts.

use crate::types::{Edge, EdgeAssociation, EdgeId, GraphResult, Vertex, VertexId};

/// Storage capability contract for a directed graph over caller-supplied
/// edge payloads `E` and vertex payloads `V`.
///
/// The traversal engine consumes this trait and nothing else, so any
/// backend implementing it can be substituted transparently. Query
/// methods return lazy sequences borrowing the store; mutating the graph
/// while such a sequence is still being consumed is not supported, and
/// callers that need to remove while iterating must collect ids first.
pub trait GraphStore<E, V> {
    /// Every stored vertex, in unspecified order.
    fn vertices<'a>(&'a self) -> Box<dyn Iterator<Item = &'a Vertex<V>> + 'a>;

    /// Every stored edge, in unspecified order.
    fn edges<'a>(&'a self) -> Box<dyn Iterator<Item = &'a Edge<E>> + 'a>;

    /// Store a new vertex carrying `inner` and return it. Ids are
    /// allocated monotonically and never reused. Cannot fail.
    fn insert_vertex(&mut self, inner: V) -> &Vertex<V>;

    /// Look a vertex up by id.
    fn get_vertex_by_id(&self, vertex_id: VertexId) -> Option<&Vertex<V>>;

    /// Look a vertex up by payload.
    ///
    /// Unsupported unless a concrete backend overrides it; the default
    /// panics with `unimplemented!` rather than pretending an empty
    /// result.
    fn get_vertex_by_inner(&self, _inner: &V) -> Option<&Vertex<V>> {
        unimplemented!("payload lookup requires backend support")
    }

    /// Remove a vertex together with every edge touching it. Returns the
    /// removed record, or `None` when no vertex has that id.
    fn remove_vertex(&mut self, vertex_id: VertexId) -> Option<Vertex<V>>;

    /// Store a new edge running `source_id` → `dest_id`.
    ///
    /// Fails with [`GraphError::VertexNotFound`] when either endpoint is
    /// missing; the source is checked first, so a missing source wins
    /// the report even when both are missing. Nothing is mutated on
    /// failure.
    ///
    /// [`GraphError::VertexNotFound`]: crate::types::GraphError::VertexNotFound
    fn insert_edge(
        &mut self,
        inner: E,
        source_id: VertexId,
        dest_id: VertexId,
    ) -> GraphResult<&Edge<E>>;

    /// Look an edge up by id.
    fn get_edge_by_id(&self, edge_id: EdgeId) -> Option<&Edge<E>>;

    /// Remove an edge. Returns the removed record, or `None` when no
    /// edge has that id.
    fn remove_edge(&mut self, edge_id: EdgeId) -> Option<Edge<E>>;

    /// Edges running `source_id` → `dest_id`. Directed: the reverse
    /// edges are not included.
    fn get_all_edges_between_vertices<'a>(
        &'a self,
        source_id: VertexId,
        dest_id: VertexId,
    ) -> Box<dyn Iterator<Item = &'a Edge<E>> + 'a>;

    /// Remove every edge running `source_id` → `dest_id`.
    fn remove_all_edges_between_vertices(&mut self, source_id: VertexId, dest_id: VertexId) {
        let doomed: Vec<EdgeId> = self
            .get_all_edges_between_vertices(source_id, dest_id)
            .map(|edge| edge.id)
            .collect();
        for edge_id in doomed {
            self.remove_edge(edge_id);
        }
    }

    /// Edges touching `vertex_id` under the given direction filter.
    /// `All` yields the outgoing edges in list order followed by the
    /// incoming edges in list order. A vertex without adjacency lists
    /// yields an empty sequence rather than failing.
    fn edges_associated_with_vertex<'a>(
        &'a self,
        vertex_id: VertexId,
        edge_association: EdgeAssociation,
    ) -> Box<dyn Iterator<Item = &'a Edge<E>> + 'a>;

    /// Vertices one edge away from `vertex_id` under the given direction
    /// filter: each associated edge mapped to the endpoint that is not
    /// `vertex_id`.
    fn adjacent_vertices_for_vertex<'a>(
        &'a self,
        vertex_id: VertexId,
        edge_association: EdgeAssociation,
    ) -> Box<dyn Iterator<Item = &'a Vertex<V>> + 'a>
    where
        E: 'a,
    {
        Box::new(
            self.edges_associated_with_vertex(vertex_id, edge_association)
                .filter_map(move |edge| self.get_vertex_by_id(edge.other_vertex(vertex_id))),
        )
    }
}

/// Serialization capability contract.
///
/// Declared so integrating systems can supply graph codecs; this crate
/// ships no implementation and leaves the representation, encoding and
/// error type entirely to the implementer.
pub trait GraphCodec<E, V> {
    /// External representation produced and consumed by this codec.
    type Repr;
    /// Codec-specific error type.
    type Error;
    /// Storage backend the codec materializes into.
    type Store: GraphStore<E, V>;

    /// Build a graph from its external representation.
    fn deserialize(&self, input: Self::Repr) -> Result<Self::Store, Self::Error>;

    /// Render a graph into its external representation.
    fn serialize(&self, graph: &Self::Store) -> Result<Self::Repr, Self::Error>;
}
