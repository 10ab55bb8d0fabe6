//! The in-memory adjacency-list storage engine.

use std::collections::HashMap;

use log::{debug, trace};

use crate::graph::contract::GraphStore;
use crate::graph::intrusive::{DestRole, EdgeList, Link, LinkArena, SourceRole};
use crate::types::{Edge, EdgeAssociation, EdgeId, GraphError, GraphResult, Vertex, VertexId};

/// An edge plus the two intrusive links threading it into its source
/// vertex's outgoing list and its dest vertex's incoming list.
#[derive(Debug)]
struct EdgeRecord<E> {
    edge: Edge<E>,
    source_link: Link<SourceRole>,
    dest_link: Link<DestRole>,
}

impl<E> EdgeRecord<E> {
    fn new(edge: Edge<E>) -> Self {
        Self {
            edge,
            source_link: Link::new(),
            dest_link: Link::new(),
        }
    }
}

type EdgeTable<E> = HashMap<EdgeId, EdgeRecord<E>>;

impl<E> LinkArena<SourceRole> for EdgeTable<E> {
    fn link(&self, edge_id: EdgeId) -> Option<&Link<SourceRole>> {
        self.get(&edge_id).map(|record| &record.source_link)
    }
    fn link_mut(&mut self, edge_id: EdgeId) -> Option<&mut Link<SourceRole>> {
        self.get_mut(&edge_id).map(|record| &mut record.source_link)
    }
}

impl<E> LinkArena<DestRole> for EdgeTable<E> {
    fn link(&self, edge_id: EdgeId) -> Option<&Link<DestRole>> {
        self.get(&edge_id).map(|record| &record.dest_link)
    }
    fn link_mut(&mut self, edge_id: EdgeId) -> Option<&mut Link<DestRole>> {
        self.get_mut(&edge_id).map(|record| &mut record.dest_link)
    }
}

/// In-memory adjacency-list implementation of [`GraphStore`].
///
/// Four tables: vertex records, edge records, and the per-vertex
/// source-role and dest-role list headers. Adjacency headers are created
/// on first edge insert and die with their vertex. Identifier counters
/// only ever increase, so ids are never reused within one graph's
/// lifetime.
///
/// Single-threaded by design: a host embedding this engine under
/// multiple threads must serialize all mutation externally and must not
/// mutate while a lazy query sequence is still being consumed.
#[derive(Debug)]
pub struct AdjListGraph<E, V> {
    vertex_table: HashMap<VertexId, Vertex<V>>,
    edge_table: EdgeTable<E>,
    source_lists: HashMap<VertexId, EdgeList<SourceRole>>,
    dest_lists: HashMap<VertexId, EdgeList<DestRole>>,
    highest_vertex_id: VertexId,
    highest_edge_id: EdgeId,
}

impl<E, V> AdjListGraph<E, V> {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self {
            vertex_table: HashMap::new(),
            edge_table: HashMap::new(),
            source_lists: HashMap::new(),
            dest_lists: HashMap::new(),
            highest_vertex_id: 0,
            highest_edge_id: 0,
        }
    }

    /// Number of stored vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertex_table.len()
    }

    /// Number of stored edges.
    pub fn edge_count(&self) -> usize {
        self.edge_table.len()
    }

    fn outgoing_edges(&self, vertex_id: VertexId) -> impl Iterator<Item = &Edge<E>> + '_ {
        self.source_lists
            .get(&vertex_id)
            .into_iter()
            .flat_map(move |list| list.iter(&self.edge_table))
            .filter_map(move |edge_id| self.edge_table.get(&edge_id).map(|record| &record.edge))
    }

    fn incoming_edges(&self, vertex_id: VertexId) -> impl Iterator<Item = &Edge<E>> + '_ {
        self.dest_lists
            .get(&vertex_id)
            .into_iter()
            .flat_map(move |list| list.iter(&self.edge_table))
            .filter_map(move |edge_id| self.edge_table.get(&edge_id).map(|record| &record.edge))
    }
}

impl<E, V> Default for AdjListGraph<E, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E, V> GraphStore<E, V> for AdjListGraph<E, V> {
    fn vertices<'a>(&'a self) -> Box<dyn Iterator<Item = &'a Vertex<V>> + 'a> {
        Box::new(self.vertex_table.values())
    }

    fn edges<'a>(&'a self) -> Box<dyn Iterator<Item = &'a Edge<E>> + 'a> {
        Box::new(self.edge_table.values().map(|record| &record.edge))
    }

    fn insert_vertex(&mut self, inner: V) -> &Vertex<V> {
        let id = self.highest_vertex_id + 1;
        self.highest_vertex_id = id;
        trace!("insert vertex {id}");
        self.vertex_table
            .entry(id)
            .or_insert_with(|| Vertex::new(id, inner))
    }

    fn get_vertex_by_id(&self, vertex_id: VertexId) -> Option<&Vertex<V>> {
        self.vertex_table.get(&vertex_id)
    }

    fn remove_vertex(&mut self, vertex_id: VertexId) -> Option<Vertex<V>> {
        if !self.vertex_table.contains_key(&vertex_id) {
            return None;
        }

        // Materialize before removing anything: remove_edge relinks the
        // very lists a live walk would be standing on.
        let doomed: Vec<EdgeId> = self
            .edges_associated_with_vertex(vertex_id, EdgeAssociation::All)
            .map(|edge| edge.id)
            .collect();
        for edge_id in doomed {
            self.remove_edge(edge_id);
        }

        self.source_lists.remove(&vertex_id);
        self.dest_lists.remove(&vertex_id);
        debug!("removed vertex {vertex_id}");
        self.vertex_table.remove(&vertex_id)
    }

    fn insert_edge(
        &mut self,
        inner: E,
        source_id: VertexId,
        dest_id: VertexId,
    ) -> GraphResult<&Edge<E>> {
        // Both endpoints are validated before any mutation; the source
        // is checked first and wins the report when both are missing.
        if !self.vertex_table.contains_key(&source_id) {
            return Err(GraphError::VertexNotFound(source_id));
        }
        if !self.vertex_table.contains_key(&dest_id) {
            return Err(GraphError::VertexNotFound(dest_id));
        }

        let id = self.highest_edge_id + 1;
        self.highest_edge_id = id;

        self.edge_table
            .insert(id, EdgeRecord::new(Edge::new(id, inner, source_id, dest_id)));
        self.source_lists
            .entry(source_id)
            .or_default()
            .push_back(&mut self.edge_table, id);
        self.dest_lists
            .entry(dest_id)
            .or_default()
            .push_back(&mut self.edge_table, id);

        trace!("insert edge {id}: {source_id} -> {dest_id}");
        Ok(&self.edge_table[&id].edge)
    }

    fn get_edge_by_id(&self, edge_id: EdgeId) -> Option<&Edge<E>> {
        self.edge_table.get(&edge_id).map(|record| &record.edge)
    }

    fn remove_edge(&mut self, edge_id: EdgeId) -> Option<Edge<E>> {
        let (source_id, dest_id) = {
            let record = self.edge_table.get(&edge_id)?;
            (record.edge.source, record.edge.dest)
        };

        // Unlink both roles before discarding the record. A header may
        // already be gone if the owning vertex was removed out of order.
        if let Some(list) = self.source_lists.get_mut(&source_id) {
            list.remove(&mut self.edge_table, edge_id);
        }
        if let Some(list) = self.dest_lists.get_mut(&dest_id) {
            list.remove(&mut self.edge_table, edge_id);
        }

        trace!("removed edge {edge_id}");
        self.edge_table.remove(&edge_id).map(|record| record.edge)
    }

    fn get_all_edges_between_vertices<'a>(
        &'a self,
        source_id: VertexId,
        dest_id: VertexId,
    ) -> Box<dyn Iterator<Item = &'a Edge<E>> + 'a> {
        // Scan whichever candidate list is shorter; a tie goes to the
        // dest vertex's incoming list.
        let scan_source = match (self.source_lists.get(&source_id), self.dest_lists.get(&dest_id))
        {
            (None, None) => return Box::new(std::iter::empty()),
            (Some(_), None) => true,
            (None, Some(_)) => false,
            (Some(source_list), Some(dest_list)) => source_list.len() < dest_list.len(),
        };

        if scan_source {
            Box::new(
                self.outgoing_edges(source_id)
                    .filter(move |edge| edge.dest == dest_id),
            )
        } else {
            Box::new(
                self.incoming_edges(dest_id)
                    .filter(move |edge| edge.source == source_id),
            )
        }
    }

    fn edges_associated_with_vertex<'a>(
        &'a self,
        vertex_id: VertexId,
        edge_association: EdgeAssociation,
    ) -> Box<dyn Iterator<Item = &'a Edge<E>> + 'a> {
        match edge_association {
            EdgeAssociation::Outgoing => Box::new(self.outgoing_edges(vertex_id)),
            EdgeAssociation::Incoming => Box::new(self.incoming_edges(vertex_id)),
            EdgeAssociation::All => Box::new(
                self.outgoing_edges(vertex_id)
                    .chain(self.incoming_edges(vertex_id)),
            ),
        }
    }
}
