//! CLI command implementations.

use std::path::Path;

use serde::Serialize;

use crate::graph::{traverse, GraphStore, Traversal, TraversalKind};
use crate::types::{Edge, EdgeAssociation};

use super::edge_list::{load_edge_list, LoadedGraph};
use super::CliResult;

#[derive(Serialize)]
struct EdgeOut<'a> {
    id: u64,
    source: &'a str,
    dest: &'a str,
    label: &'a str,
}

impl<'a> EdgeOut<'a> {
    fn new(loaded: &'a LoadedGraph, edge: &'a Edge<String>) -> Self {
        Self {
            id: edge.id,
            source: loaded.vertex_name(edge.source).unwrap_or("?"),
            dest: loaded.vertex_name(edge.dest).unwrap_or("?"),
            label: &edge.inner,
        }
    }
}

/// Summarize an edge-list file.
pub fn cmd_info(path: &Path, json: bool) -> CliResult<()> {
    let loaded = load_edge_list(path)?;
    let graph = &loaded.graph;

    if json {
        let info = serde_json::json!({
            "file": path.display().to_string(),
            "vertices": graph.vertex_count(),
            "edges": graph.edge_count(),
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&info).unwrap_or_default()
        );
    } else {
        println!("File: {}", path.display());
        println!("Vertices: {}", graph.vertex_count());
        println!("Edges: {}", graph.edge_count());
    }
    Ok(())
}

/// List the vertices adjacent to a vertex.
pub fn cmd_neighbors(
    path: &Path,
    name: &str,
    association: EdgeAssociation,
    json: bool,
) -> CliResult<()> {
    let loaded = load_edge_list(path)?;
    let vertex_id = loaded.vertex_id(name)?;
    let neighbors: Vec<&str> = loaded
        .graph
        .adjacent_vertices_for_vertex(vertex_id, association)
        .map(|vertex| vertex.inner.as_str())
        .collect();

    if json {
        let out = serde_json::json!({ "vertex": name, "neighbors": neighbors });
        println!("{}", serde_json::to_string_pretty(&out).unwrap_or_default());
    } else {
        for neighbor in neighbors {
            println!("{neighbor}");
        }
    }
    Ok(())
}

/// List the edges running from one vertex to another.
pub fn cmd_between(path: &Path, source: &str, dest: &str, json: bool) -> CliResult<()> {
    let loaded = load_edge_list(path)?;
    let source_id = loaded.vertex_id(source)?;
    let dest_id = loaded.vertex_id(dest)?;
    let edges: Vec<EdgeOut> = loaded
        .graph
        .get_all_edges_between_vertices(source_id, dest_id)
        .map(|edge| EdgeOut::new(&loaded, edge))
        .collect();

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&edges).unwrap_or_default()
        );
    } else {
        for edge in edges {
            if edge.label.is_empty() {
                println!("{} -> {}", edge.source, edge.dest);
            } else {
                println!("{} -> {} [{}]", edge.source, edge.dest, edge.label);
            }
        }
    }
    Ok(())
}

/// Walk the graph from a starting vertex, printing each visit and cycle
/// signal in order.
pub fn cmd_traverse(
    path: &Path,
    start: &str,
    kind: TraversalKind,
    association: EdgeAssociation,
    json: bool,
) -> CliResult<()> {
    let loaded = load_edge_list(path)?;
    let start_id = loaded.vertex_id(start)?;
    let items = traverse(
        &loaded.graph,
        start_id,
        Traversal {
            kind,
            edge_association: association,
        },
    )?;

    if json {
        let out: Vec<serde_json::Value> = items
            .map(|item| match item {
                Ok(visit) => serde_json::json!({
                    "vertex": visit.vertex.inner,
                    "parent": visit.parent.map(|parent| parent.inner.as_str()),
                    "edge": visit.edge,
                }),
                Err(cycle) => serde_json::json!({
                    "cycle": loaded.vertex_name(cycle.repeating_vertex_id),
                }),
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&out).unwrap_or_default());
    } else {
        for item in items {
            match item {
                Ok(visit) => match visit.parent {
                    Some(parent) => println!("{} (from {})", visit.vertex.inner, parent.inner),
                    None => println!("{}", visit.vertex.inner),
                },
                Err(cycle) => println!(
                    "cycle back to {}",
                    loaded.vertex_name(cycle.repeating_vertex_id).unwrap_or("?")
                ),
            }
        }
    }
    Ok(())
}
