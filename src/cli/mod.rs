//! Command-line front end.
//!
//! An external collaborator on top of the core: it only calls the
//! storage and traversal contracts. Graphs come from plain-text edge
//! lists; the wire format belongs to this layer, not to the core, whose
//! serialization contract stays abstract.

pub mod commands;
pub mod edge_list;

pub use edge_list::{load_edge_list, parse_edge_list, LoadedGraph};

use thiserror::Error;

use crate::types::GraphError;

/// Errors surfaced by the CLI layer.
#[derive(Error, Debug)]
pub enum CliError {
    /// IO error reading an edge-list file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A line of the edge list did not parse.
    #[error("Line {line}: expected `source dest [label]`, got {got:?}")]
    MalformedLine { line: usize, got: String },

    /// A vertex name that never appeared in the edge list.
    #[error("Unknown vertex {0:?}")]
    UnknownVertex(String),

    /// An error from the core engine.
    #[error(transparent)]
    Graph(#[from] GraphError),
}

/// Convenience result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;
