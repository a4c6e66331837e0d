/*!
`hypercut` computes **minimum-weight cuts of weighted hypergraphs**: given
hyperedges that each join two or more vertices and carry a positive integer
weight, it finds a partition of the vertex set into two non-empty sides
minimizing the total weight of hyperedges touching both sides. Among cuts
of equal weight, the more balanced one is preferred.

# Representation

Vertices and hyperedges are identified by caller-assigned `u32` ids and
stored in ordered maps with bi-directional adjacency, so runs over
identical input are fully deterministic. See the [`node`] module for the
identifier and weight types and the [`graph`] module for the data
structure.

# Algorithm

The engine implements the Klimmek–Wagner algorithm: each phase computes a
maximum-adjacency ordering of the current vertices, records the cut
isolating the last-ordered vertex, and contracts the last two. Vertex
tightness scores are kept in an addressable Fibonacci [`heap`] so a phase
costs O(E + V log V); the whole computation runs V - 1 phases.

# Usage

```
use hypercut::prelude::*;

let mut graph = HyperGraph::new();
graph.add_edge(0, VertexSet::from([1, 2]), 1)?;
graph.add_edge(1, VertexSet::from([1, 2, 3]), 2)?;
graph.add_edge(2, VertexSet::from([3, 4]), 4)?;

// `mincut` contracts the graph, so clone when reusing it.
let cut = graph.clone().mincut()?;
assert_eq!(cut.value, 2);
assert_eq!(cut.left, VertexSet::from([3, 4]));
assert_eq!(cut.right, VertexSet::from([1, 2]));
# Ok::<(), GraphError>(())
```

Random instances for benchmarks and property tests are available through
the [`gens`] module.
*/

pub mod algo;
pub mod cut;
pub mod errors;
pub mod gens;
pub mod graph;
pub mod heap;
pub mod node;

/// `hypercut::prelude` includes the identifier types, the graph, the cut
/// value object and the error type.
pub mod prelude {
    pub use super::{cut::Cut, errors::GraphError, graph::HyperGraph, node::*};
}
