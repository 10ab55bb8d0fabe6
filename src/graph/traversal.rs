//! Unified breadth-/depth-first traversal over any [`GraphStore`].
//!
//! Both orders run over a single double-ended work queue; depth-first
//! pushes new work at the front, breadth-first at the back. Vertices are
//! marked visited when popped, not when discovered, and back-edges to
//! visited vertices surface as in-band cycle signals under depth-first
//! directional traversal.

use std::collections::{HashSet, VecDeque};

use log::trace;

use crate::graph::contract::GraphStore;
use crate::types::{EdgeAssociation, GraphError, GraphResult, Vertex, VertexId};

/// Which discipline the traversal queue follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraversalKind {
    /// Depth-first: new work goes to the front of the deque.
    Dfs,
    /// Breadth-first: new work goes to the back.
    Bfs,
}

/// Traversal configuration: queue discipline plus direction filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Traversal {
    pub kind: TraversalKind,
    pub edge_association: EdgeAssociation,
}

/// One successful traversal step: the vertex reached, the vertex it was
/// reached from, and the payload of the edge traversed to get there.
/// The start vertex carries neither parent nor edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Visit<'g, E, V> {
    pub vertex: &'g Vertex<V>,
    pub parent: Option<&'g Vertex<V>>,
    pub edge: Option<&'g E>,
}

/// In-band signal that a back-edge reached an already-visited vertex.
///
/// Not a failure: the traversal continues after emitting it. Only
/// depth-first traversal over `Outgoing` or `Incoming` edges signals
/// cycles; breadth-first and `All`-association revisits (shared
/// ancestors and the like) are silently skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CycleFound {
    pub repeating_vertex_id: VertexId,
}

/// One element of the traversal sequence.
pub type TraversalItem<'g, E, V> = Result<Visit<'g, E, V>, CycleFound>;

/// Start a traversal at `start_vertex_id`.
///
/// The seed is validated eagerly: a missing start vertex fails with
/// [`GraphError::VertexNotFound`] before any sequence exists, and
/// pulling from the returned iterator cannot itself fail with it. The
/// sequence is single-pass and finite for any finite graph; the graph
/// must not be mutated until the iterator is dropped.
pub fn traverse<'g, E, V, G>(
    graph: &'g G,
    start_vertex_id: VertexId,
    traversal: Traversal,
) -> GraphResult<TraversalIter<'g, E, V, G>>
where
    G: GraphStore<E, V> + ?Sized,
{
    let start_vertex = graph
        .get_vertex_by_id(start_vertex_id)
        .ok_or(GraphError::VertexNotFound(start_vertex_id))?;

    let mut queue = VecDeque::new();
    queue.push_back(Visit {
        vertex: start_vertex,
        parent: None,
        edge: None,
    });

    Ok(TraversalIter {
        graph,
        traversal,
        queue,
        visited: HashSet::new(),
        cycle_signals: VecDeque::new(),
    })
}

/// Lazy traversal sequence produced by [`traverse`].
///
/// Each pull pops one work item, yields it, and expands its associated
/// edges; cycle signals raised during the expansion are delivered before
/// the next visit.
pub struct TraversalIter<'g, E, V, G: ?Sized> {
    graph: &'g G,
    traversal: Traversal,
    queue: VecDeque<Visit<'g, E, V>>,
    visited: HashSet<VertexId>,
    cycle_signals: VecDeque<CycleFound>,
}

impl<'g, E, V, G> Iterator for TraversalIter<'g, E, V, G>
where
    G: GraphStore<E, V> + ?Sized,
{
    type Item = TraversalItem<'g, E, V>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(signal) = self.cycle_signals.pop_front() {
            return Some(Err(signal));
        }

        let graph = self.graph;
        let visit = self.queue.pop_front()?;
        let vertex_id = visit.vertex.id;

        // Marked at pop time, not discovery time. A vertex queued by two
        // parents before its first pop is popped, and yielded, twice.
        self.visited.insert(vertex_id);
        trace!("visiting vertex {vertex_id}");

        let signals_cycles = self.traversal.kind == TraversalKind::Dfs
            && self.traversal.edge_association != EdgeAssociation::All;

        for edge in
            graph.edges_associated_with_vertex(vertex_id, self.traversal.edge_association)
        {
            let adjacent_id = edge.other_vertex(vertex_id);

            if self.visited.contains(&adjacent_id) {
                if signals_cycles {
                    self.cycle_signals.push_back(CycleFound {
                        repeating_vertex_id: adjacent_id,
                    });
                }
                continue;
            }

            let Some(adjacent) = graph.get_vertex_by_id(adjacent_id) else {
                continue;
            };

            let next_visit = Visit {
                vertex: adjacent,
                parent: Some(visit.vertex),
                edge: Some(&edge.inner),
            };
            match self.traversal.kind {
                TraversalKind::Dfs => self.queue.push_front(next_visit),
                TraversalKind::Bfs => self.queue.push_back(next_visit),
            }
        }

        Some(Ok(visit))
    }
}
