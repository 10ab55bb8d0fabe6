//! In-memory graph storage and traversal — the core of the crate.

pub mod adj_list;
pub mod contract;
pub(crate) mod intrusive;
pub mod traversal;

pub use adj_list::AdjListGraph;
pub use contract::{GraphCodec, GraphStore};
pub use traversal::{
    traverse, CycleFound, Traversal, TraversalItem, TraversalIter, TraversalKind, Visit,
};
