//! Plain-text edge-list loading.
//!
//! One edge per line: `source dest [label]`, whitespace-separated, with
//! everything after the dest joined into the edge label. Vertex names
//! are the payloads and are inserted on first mention; `#` starts a
//! comment and blank lines are skipped.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use log::debug;

use crate::graph::{AdjListGraph, GraphStore};
use crate::types::VertexId;

use super::{CliError, CliResult};

/// A graph built from an edge list, plus the name → id index the core
/// engine deliberately does not provide.
#[derive(Debug)]
pub struct LoadedGraph {
    pub graph: AdjListGraph<String, String>,
    pub ids_by_name: HashMap<String, VertexId>,
}

impl LoadedGraph {
    /// Resolve a vertex name from the file to its id.
    pub fn vertex_id(&self, name: &str) -> CliResult<VertexId> {
        self.ids_by_name
            .get(name)
            .copied()
            .ok_or_else(|| CliError::UnknownVertex(name.to_string()))
    }

    /// The stored name of a vertex, by id.
    pub fn vertex_name(&self, vertex_id: VertexId) -> Option<&str> {
        self.graph
            .get_vertex_by_id(vertex_id)
            .map(|vertex| vertex.inner.as_str())
    }
}

/// Load an edge-list file into a graph.
pub fn load_edge_list(path: &Path) -> CliResult<LoadedGraph> {
    parse_edge_list(&fs::read_to_string(path)?)
}

/// Parse edge-list text into a graph.
pub fn parse_edge_list(input: &str) -> CliResult<LoadedGraph> {
    let mut graph = AdjListGraph::new();
    let mut ids_by_name: HashMap<String, VertexId> = HashMap::new();

    for (line_no, raw) in input.lines().enumerate() {
        let line = raw.split('#').next().unwrap_or("").trim();
        if line.is_empty() {
            continue;
        }

        let mut fields = line.split_whitespace();
        let (source, dest) = match (fields.next(), fields.next()) {
            (Some(source), Some(dest)) => (source, dest),
            _ => {
                return Err(CliError::MalformedLine {
                    line: line_no + 1,
                    got: raw.to_string(),
                })
            }
        };
        let label = fields.collect::<Vec<_>>().join(" ");

        let source_id = intern(&mut graph, &mut ids_by_name, source);
        let dest_id = intern(&mut graph, &mut ids_by_name, dest);
        graph.insert_edge(label, source_id, dest_id)?;
    }

    debug!(
        "loaded {} vertices, {} edges",
        graph.vertex_count(),
        graph.edge_count()
    );
    Ok(LoadedGraph {
        graph,
        ids_by_name,
    })
}

fn intern(
    graph: &mut AdjListGraph<String, String>,
    ids_by_name: &mut HashMap<String, VertexId>,
    name: &str,
) -> VertexId {
    if let Some(&id) = ids_by_name.get(name) {
        return id;
    }
    let id = graph.insert_vertex(name.to_string()).id;
    ids_by_name.insert(name.to_string(), id);
    id
}
