//! Error types for the edgewise library.

use thiserror::Error;

use super::VertexId;

/// All errors that can occur in the edgewise library.
///
/// Removal of an absent id is not an error (those operations return
/// `None`), and a cycle signal during traversal is an in-band item, not
/// a `GraphError`.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphError {
    /// An operation referenced a vertex id with no stored record.
    #[error("Vertex ID {0} not found")]
    VertexNotFound(VertexId),
}

/// Convenience result type for edgewise operations.
pub type GraphResult<T> = Result<T, GraphError>;
