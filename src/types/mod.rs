//! All data types for the edgewise library.

pub mod edge;
pub mod error;
pub mod vertex;

pub use edge::{Edge, EdgeAssociation};
pub use error::{GraphError, GraphResult};
pub use vertex::Vertex;

/// Vertex identifier, unique within a graph instance for its whole
/// lifetime. Allocated monotonically starting at 1; never reused, so a
/// stale external reference stays detectably stale.
pub type VertexId = u64;

/// Edge identifier, with the same allocation guarantees as [`VertexId`].
pub type EdgeId = u64;
