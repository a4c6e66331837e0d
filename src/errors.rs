//! Error types for graph construction and min-cut computation.
//!
//! Every variant is a precondition violation on the caller's side; the
//! engine never retries or recovers internally. `add_edge` and `merge`
//! validate before mutating, so a failed call leaves the graph unchanged.

use thiserror::Error;

use crate::node::{EdgeId, VertexId};

/// Canonical error type for [`HyperGraph`](crate::graph::HyperGraph)
/// operations.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// An edge with this identifier is already present in the graph.
    #[error("edge {0} is already present in the graph")]
    DuplicateEdge(EdgeId),

    /// A hyperedge must connect at least two vertices.
    #[error("edge {0} must connect at least two vertices")]
    UnderconnectedEdge(EdgeId),

    /// Hyperedge weights must be strictly positive.
    #[error("edge {0} must carry a positive weight")]
    NonPositiveWeight(EdgeId),

    /// The referenced vertex is not (or no longer) part of the graph.
    #[error("vertex {0} is not present in the graph")]
    UnknownVertex(VertexId),

    /// A vertex cannot be merged with itself.
    #[error("cannot merge vertex {0} with itself")]
    SelfMerge(VertexId),

    /// Both sides of a cut must be non-empty.
    #[error("a cut must leave both sides non-empty")]
    DegenerateCut,

    /// The minimum cut of a graph with fewer than two vertices is undefined.
    #[error("minimum cut requires a graph with at least two vertices")]
    EmptyGraph,
}
