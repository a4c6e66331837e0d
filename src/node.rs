use std::collections::BTreeSet;

/// Identifier of a vertex.
///
/// Identifiers are assigned by the caller and are never reused within the
/// lifetime of a graph: once a vertex has been absorbed by a
/// [`merge`](crate::graph::HyperGraph::merge), its identifier only survives
/// inside the absorption history of the surviving vertex.
pub type VertexId = u32;

/// Identifier of a hyperedge, assigned by the caller on
/// [`add_edge`](crate::graph::HyperGraph::add_edge).
pub type EdgeId = u32;

/// There can be at most `2^32 - 1` vertices in a graph.
pub type NumVertices = u32;

/// There can be at most `2^32 - 1` hyperedges in a graph.
pub type NumEdges = u32;

/// Weight of a hyperedge. Weights are strictly positive; cut values are
/// sums of weights and share the type.
pub type Weight = u64;

/// An ordered set of vertices.
///
/// Ordered containers keep iteration deterministic, which in turn makes the
/// whole min-cut computation reproducible for identical input.
pub type VertexSet = BTreeSet<VertexId>;

/// An ordered set of hyperedges.
pub type EdgeSet = BTreeSet<EdgeId>;
