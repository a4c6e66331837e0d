/*!
# Weighted Hypergraphs

The mutable hypergraph the min-cut engine operates on. Vertices and
hyperedges are stored in ordered maps keyed by caller-assigned identifiers,
with bi-directional adjacency: every vertex knows its incident edges and
every edge knows its endpoints.

Vertices come into existence lazily, when an added edge first references
them. Both vertices and edges are destroyed only by [`HyperGraph::merge`]:
the absorbed vertex disappears from the graph (but stays on the survivor's
absorption history), and edges contracted down to a single endpoint are
deleted outright.
*/

use std::collections::BTreeMap;

use smallvec::SmallVec;

use crate::{
    algo::KlimmekWagner,
    cut::Cut,
    errors::GraphError,
    node::{EdgeId, EdgeSet, NumEdges, NumVertices, VertexId, VertexSet, Weight},
};

#[derive(Debug, Clone, Default)]
struct Vertex {
    /// Identifiers of the incident hyperedges.
    edges: EdgeSet,
    /// Vertices absorbed into this one, in absorption order, flattened
    /// transitively.
    merged_with: SmallVec<[VertexId; 4]>,
}

#[derive(Debug, Clone)]
struct HyperEdge {
    /// Endpoints; at least two while the edge exists.
    vertices: VertexSet,
    weight: Weight,
}

/// A hypergraph with positively weighted hyperedges of arbitrary arity.
///
/// # Examples
/// ```
/// use hypercut::prelude::*;
///
/// let mut graph = HyperGraph::new();
/// graph.add_edge(0, VertexSet::from([1, 2]), 1)?;
/// graph.add_edge(1, VertexSet::from([2, 3]), 2)?;
/// graph.add_edge(2, VertexSet::from([1, 3]), 3)?;
///
/// let cut = graph.mincut()?;
/// assert_eq!(cut.value, 3);
/// assert_eq!(cut.left, VertexSet::from([2]));
/// # Ok::<(), GraphError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct HyperGraph {
    vertices: BTreeMap<VertexId, Vertex>,
    edges: BTreeMap<EdgeId, HyperEdge>,
}

impl HyperGraph {
    /// Creates an empty hypergraph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers hyperedge `e` over the given endpoints, creating any
    /// endpoint vertex that does not exist yet.
    ///
    /// Fails without touching the graph if the edge has fewer than two
    /// endpoints, a zero weight, or an already-used identifier.
    pub fn add_edge(
        &mut self,
        e: EdgeId,
        vertices: VertexSet,
        weight: Weight,
    ) -> Result<(), GraphError> {
        if vertices.len() < 2 {
            return Err(GraphError::UnderconnectedEdge(e));
        }
        if weight == 0 {
            return Err(GraphError::NonPositiveWeight(e));
        }
        if self.edges.contains_key(&e) {
            return Err(GraphError::DuplicateEdge(e));
        }

        for &v in &vertices {
            self.vertices.entry(v).or_default().edges.insert(e);
        }
        self.edges.insert(e, HyperEdge { vertices, weight });
        Ok(())
    }

    /// Evaluates the cut that puts `left` on one side and every other
    /// vertex on the other: the value is the total weight of hyperedges
    /// touching both sides.
    ///
    /// No unmerging is applied; the returned sides contain currently
    /// present identifiers only.
    pub fn cut(&self, left: &VertexSet) -> Result<Cut, GraphError> {
        if let Some(&missing) = left.iter().find(|v| !self.vertices.contains_key(*v)) {
            return Err(GraphError::UnknownVertex(missing));
        }

        let right: VertexSet = self
            .vertices
            .keys()
            .filter(|v| !left.contains(*v))
            .copied()
            .collect();
        if left.is_empty() || right.is_empty() {
            return Err(GraphError::DegenerateCut);
        }

        let value = self
            .edges
            .values()
            .filter(|edge| !edge.vertices.is_disjoint(left) && !edge.vertices.is_disjoint(&right))
            .map(|edge| edge.weight)
            .sum();

        Ok(Cut {
            value,
            left: left.clone(),
            right,
        })
    }

    /// Contracts `b` into `a`: `a` survives, takes over `b`'s incident
    /// edges and prepends `b` to the absorbed history it inherits.
    ///
    /// Edges left with a single endpoint by the contraction are deleted
    /// from the graph and from every vertex still referencing them.
    /// Parallel hyperedges (identical endpoint sets after contraction) are
    /// kept separate; each keeps contributing its own weight to cuts.
    pub fn merge(&mut self, a: VertexId, b: VertexId) -> Result<(), GraphError> {
        if a == b {
            return Err(GraphError::SelfMerge(a));
        }
        if !self.vertices.contains_key(&a) {
            return Err(GraphError::UnknownVertex(a));
        }
        let absorbed = self.vertices.remove(&b).ok_or(GraphError::UnknownVertex(b))?;

        let survivor = self.vertices.get_mut(&a).unwrap();
        survivor.merged_with.push(b);
        survivor.merged_with.extend(absorbed.merged_with);

        for e in absorbed.edges {
            let edge = self.edges.get_mut(&e).unwrap();
            edge.vertices.remove(&b);
            edge.vertices.insert(a);
            if edge.vertices.len() <= 1 {
                let collapsed = self.edges.remove(&e).unwrap();
                for v in collapsed.vertices {
                    if let Some(vertex) = self.vertices.get_mut(&v) {
                        vertex.edges.remove(&e);
                    }
                }
            } else {
                self.vertices.get_mut(&a).unwrap().edges.insert(e);
            }
        }
        Ok(())
    }

    /// Computes a minimum-weight cut, preferring the more balanced cut
    /// among cuts of equal weight.
    ///
    /// The computation contracts the graph down to a single vertex, which
    /// is why it takes the graph by value; clone first to keep the
    /// original around.
    pub fn mincut(self) -> Result<Cut, GraphError> {
        KlimmekWagner::new(self).run()
    }

    /// Number of vertices currently present.
    pub fn number_of_vertices(&self) -> NumVertices {
        self.vertices.len() as NumVertices
    }

    /// Number of hyperedges currently present.
    pub fn number_of_edges(&self) -> NumEdges {
        self.edges.len() as NumEdges
    }

    /// Iterates over the present vertex identifiers in ascending order.
    pub fn vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.vertices.keys().copied()
    }

    /// Returns `true` if `v` is currently present.
    pub fn contains_vertex(&self, v: VertexId) -> bool {
        self.vertices.contains_key(&v)
    }

    /// Iterates over the hyperedges incident to `v`, in ascending id
    /// order. Empty for an absent vertex.
    pub fn incident_edges(&self, v: VertexId) -> impl Iterator<Item = EdgeId> + '_ {
        self.vertices
            .get(&v)
            .into_iter()
            .flat_map(|vertex| vertex.edges.iter().copied())
    }

    /// Returns the endpoints and weight of hyperedge `e`.
    pub fn edge(&self, e: EdgeId) -> Option<(&VertexSet, Weight)> {
        self.edges.get(&e).map(|edge| (&edge.vertices, edge.weight))
    }

    /// Owned snapshot of every hyperedge's endpoint set.
    pub fn edge_sets(&self) -> BTreeMap<EdgeId, VertexSet> {
        self.edges
            .iter()
            .map(|(&e, edge)| (e, edge.vertices.clone()))
            .collect()
    }

    /// The vertices absorbed into `v` so far, in absorption order, or
    /// `None` if `v` is not present.
    pub fn merged_with(&self, v: VertexId) -> Option<&[VertexId]> {
        self.vertices.get(&v).map(|vertex| vertex.merged_with.as_slice())
    }
}

#[cfg(test)]
mod tests {
    use rand::{seq::IteratorRandom, Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    use super::*;
    use crate::gens::{NumEdgesGen, NumVerticesGen, UniformHyperGraph};

    /// Checks the structural invariants: bi-directional adjacency, arity
    /// at least two, and absorbed identifiers absent from the vertex map.
    fn assert_consistent(graph: &HyperGraph) {
        for (e, edge) in &graph.edges {
            assert!(edge.vertices.len() >= 2, "edge {e} has collapsed");
            assert!(edge.weight > 0);
            for v in &edge.vertices {
                assert!(
                    graph.vertices[v].edges.contains(e),
                    "edge {e} missing from vertex {v}"
                );
            }
        }
        for (v, vertex) in &graph.vertices {
            for e in &vertex.edges {
                assert!(
                    graph.edges[e].vertices.contains(v),
                    "vertex {v} missing from edge {e}"
                );
            }
            for absorbed in &vertex.merged_with {
                assert!(!graph.vertices.contains_key(absorbed));
            }
        }
    }

    fn triangle() -> HyperGraph {
        let mut graph = HyperGraph::new();
        graph.add_edge(0, VertexSet::from([1, 2]), 1).unwrap();
        graph.add_edge(1, VertexSet::from([2, 3]), 2).unwrap();
        graph.add_edge(2, VertexSet::from([1, 3]), 3).unwrap();
        graph
    }

    #[test]
    fn add_edge_validates_input() {
        let mut graph = HyperGraph::new();
        assert_eq!(
            graph.add_edge(0, VertexSet::from([7]), 1),
            Err(GraphError::UnderconnectedEdge(0))
        );
        assert_eq!(
            graph.add_edge(0, VertexSet::from([1, 2]), 0),
            Err(GraphError::NonPositiveWeight(0))
        );
        graph.add_edge(0, VertexSet::from([1, 2]), 1).unwrap();
        assert_eq!(
            graph.add_edge(0, VertexSet::from([3, 4]), 1),
            Err(GraphError::DuplicateEdge(0))
        );
        // The failed calls must not have created vertices.
        assert_eq!(graph.number_of_vertices(), 2);
        assert_consistent(&graph);
    }

    #[test]
    fn add_edge_creates_vertices_lazily() {
        let mut graph = HyperGraph::new();
        graph.add_edge(5, VertexSet::from([10, 20, 30]), 4).unwrap();
        assert_eq!(graph.number_of_vertices(), 3);
        assert_eq!(graph.number_of_edges(), 1);
        assert!(graph.contains_vertex(20));
        assert_eq!(graph.incident_edges(20).collect::<Vec<_>>(), vec![5]);
        assert_eq!(
            graph.edge_sets(),
            BTreeMap::from([(5, VertexSet::from([10, 20, 30]))])
        );
        assert_consistent(&graph);
    }

    #[test]
    fn cut_sums_crossing_weights() {
        let graph = triangle();
        let cut = graph.cut(&VertexSet::from([2])).unwrap();
        assert_eq!(cut.value, 3);
        assert_eq!(cut.right, VertexSet::from([1, 3]));

        let cut = graph.cut(&VertexSet::from([1, 2])).unwrap();
        assert_eq!(cut.value, 5);
    }

    #[test]
    fn cut_rejects_bad_sides() {
        let graph = triangle();
        assert_eq!(
            graph.cut(&VertexSet::from([9])),
            Err(GraphError::UnknownVertex(9))
        );
        assert_eq!(graph.cut(&VertexSet::new()), Err(GraphError::DegenerateCut));
        assert_eq!(
            graph.cut(&VertexSet::from([1, 2, 3])),
            Err(GraphError::DegenerateCut)
        );
    }

    #[test]
    fn merge_rewrites_and_collapses_edges() {
        let mut graph = triangle();
        graph.merge(1, 2).unwrap();

        // Edge 0 joined exactly {1, 2} and must be gone; the two others
        // now join {1, 3} as parallel edges.
        assert_eq!(graph.number_of_vertices(), 2);
        assert_eq!(
            graph.edge_sets(),
            BTreeMap::from([(1, VertexSet::from([1, 3])), (2, VertexSet::from([1, 3]))])
        );
        assert_eq!(graph.merged_with(1), Some(&[2][..]));
        assert_consistent(&graph);

        // Both parallel edges keep contributing to the cut weight.
        let cut = graph.cut(&VertexSet::from([3])).unwrap();
        assert_eq!(cut.value, 5);
    }

    #[test]
    fn merge_flattens_absorption_history() {
        let mut graph = HyperGraph::new();
        graph.add_edge(0, VertexSet::from([1, 2]), 1).unwrap();
        graph.add_edge(1, VertexSet::from([2, 3]), 1).unwrap();
        graph.add_edge(2, VertexSet::from([3, 4]), 1).unwrap();

        graph.merge(2, 3).unwrap();
        graph.merge(1, 2).unwrap();
        assert_eq!(graph.merged_with(1), Some(&[2, 3][..]));
        assert_consistent(&graph);
    }

    #[test]
    fn merge_rejects_bad_vertices() {
        let mut graph = triangle();
        assert_eq!(graph.merge(1, 1), Err(GraphError::SelfMerge(1)));
        assert_eq!(graph.merge(9, 1), Err(GraphError::UnknownVertex(9)));
        assert_eq!(graph.merge(1, 9), Err(GraphError::UnknownVertex(9)));
        assert_consistent(&graph);
    }

    // Start from the triangle, contract, cut, and expand back to the
    // original identifiers.
    #[test]
    fn unmerge_restores_original_vertices() {
        let mut graph = triangle();
        graph.merge(1, 2).unwrap();

        let cut = graph.cut(&VertexSet::from([3])).unwrap();
        let expanded = cut.unmerge(&graph);
        assert_eq!(expanded.value, cut.value);
        assert_eq!(expanded.left, VertexSet::from([3]));
        assert_eq!(expanded.right, VertexSet::from([1, 2]));
    }

    #[test]
    fn merge_of_hyperedge_endpoints_shrinks_arity() {
        let mut graph = HyperGraph::new();
        graph.add_edge(0, VertexSet::from([1, 2, 3, 4]), 5).unwrap();
        graph.merge(1, 2).unwrap();
        assert_eq!(
            graph.edge_sets(),
            BTreeMap::from([(0, VertexSet::from([1, 3, 4]))])
        );
        graph.merge(1, 3).unwrap();
        graph.merge(1, 4).unwrap();
        // All endpoints fused: the edge has collapsed and is gone.
        assert_eq!(graph.number_of_edges(), 0);
        assert_eq!(graph.number_of_vertices(), 1);
        assert_consistent(&graph);
    }

    /// Merging two vertices on the same side of a partition never changes
    /// the partition's cut weight.
    #[test]
    fn merge_conserves_cut_weights() {
        let rng = &mut Pcg64Mcg::seed_from_u64(7);

        for _ in 0..30 {
            let n = rng.random_range(4..10u32);
            let graph = UniformHyperGraph::new()
                .vertices(n)
                .edges(n + 3)
                .generate(rng);

            // A random partition with both sides non-empty.
            let ids: Vec<VertexId> = graph.vertices().collect();
            if ids.len() < 3 {
                continue;
            }
            let split = rng.random_range(1..ids.len());
            let left: VertexSet = ids[..split].iter().copied().collect();
            let before = graph.cut(&left).unwrap().value;

            // Contract inside whichever side has room.
            let (side, inside) = if split >= 2 {
                (true, ids[..split].iter().copied().choose_multiple(rng, 2))
            } else {
                (false, ids[split..].iter().copied().choose_multiple(rng, 2))
            };
            let mut merged = graph.clone();
            merged.merge(inside[0], inside[1]).unwrap();
            assert_consistent(&merged);

            let shrunk: VertexSet = if side {
                left.iter().copied().filter(|&v| v != inside[1]).collect()
            } else {
                left.clone()
            };
            assert_eq!(merged.cut(&shrunk).unwrap().value, before);
        }
    }

    /// Random merge sequences keep the structural invariants intact, and
    /// expanding any cut afterwards restores the full original vertex set.
    #[test]
    fn random_merges_stay_consistent() {
        let rng = &mut Pcg64Mcg::seed_from_u64(11);

        for _ in 0..30 {
            let n = rng.random_range(4..12u32);
            let mut graph = UniformHyperGraph::new()
                .vertices(n)
                .edges(2 * n)
                .max_weight(5)
                .generate(rng);
            let original: VertexSet = graph.vertices().collect();

            while graph.number_of_vertices() > 2 {
                let pair = graph.vertices().choose_multiple(rng, 2);
                graph.merge(pair[0], pair[1]).unwrap();
                assert_consistent(&graph);

                let some_vertex = graph.vertices().next().unwrap();
                let cut = graph.cut(&VertexSet::from([some_vertex])).unwrap();
                let expanded = cut.unmerge(&graph);
                assert!(expanded.left.is_disjoint(&expanded.right));
                let union: VertexSet = expanded.left.union(&expanded.right).copied().collect();
                assert_eq!(union, original);
            }
        }
    }
}
