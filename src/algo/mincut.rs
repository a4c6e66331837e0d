/*!
# Minimum Cut (Klimmek–Wagner)

Computes a minimum-weight cut of a weighted hypergraph by repeated
*maximum-adjacency orderings*: each phase orders the current vertices so
that every next vertex is the one most tightly connected to the already
ordered set, evaluates the cut isolating the last-ordered vertex, and then
contracts the last two ordered vertices. The cut of each phase is provably
a minimum cut between those two vertices, so the best cut over all phases
is a global minimum.

Among cuts of equal weight the driver keeps the more balanced one (smaller
larger side).

## Tightness scoring

The score of an unordered vertex is the total weight of hyperedges that
connect it to the ordered set. A hyperedge must contribute its weight to
each outside endpoint **once per phase**, when its first endpoint enters
the ordering; re-contributing on later endpoints would overcount edges of
arity above two. The driver enforces this with a per-phase marked-edge set.

Scores live in an addressable [`MaxHeap`], one handle per unordered
vertex, so a score bump is an O(1) `increase_key` and picking the most
tightly connected vertex is a `pop_max`.
*/

use fxhash::{FxHashMap, FxHashSet};

use crate::{
    cut::Cut,
    errors::GraphError,
    graph::HyperGraph,
    heap::{Handle, MaxHeap},
    node::{EdgeId, VertexId, VertexSet},
};

/// Driver for the Klimmek–Wagner min-cut computation.
///
/// Owns the graph for the duration of the run and contracts it down to a
/// single vertex; [`HyperGraph::mincut`] is the convenience entry point.
pub struct KlimmekWagner {
    graph: HyperGraph,
    best: Option<Cut>,
}

impl KlimmekWagner {
    /// Prepares a run over `graph`.
    pub fn new(graph: HyperGraph) -> Self {
        Self { graph, best: None }
    }

    /// Runs phases until a single vertex remains and returns the best cut
    /// seen, expressed in the vertex identifiers of the original graph.
    ///
    /// Fails with [`GraphError::EmptyGraph`] if the graph holds fewer than
    /// two vertices.
    pub fn run(mut self) -> Result<Cut, GraphError> {
        if self.graph.number_of_vertices() < 2 {
            return Err(GraphError::EmptyGraph);
        }
        while self.graph.number_of_vertices() > 1 {
            self.phase()?;
        }
        // At least one phase ran, and every phase can only improve on the
        // first recorded cut.
        Ok(self.best.unwrap())
    }

    /// One maximum-adjacency ordering: score, order, evaluate the cut of
    /// the phase, and contract the last two ordered vertices.
    fn phase(&mut self) -> Result<(), GraphError> {
        let n = self.graph.number_of_vertices() as usize;

        let mut heap = MaxHeap::with_capacity(n);
        let mut handles: FxHashMap<VertexId, Handle> = FxHashMap::default();
        for v in self.graph.vertices() {
            handles.insert(v, heap.push(0, v));
        }
        let mut marked: FxHashSet<EdgeId> = FxHashSet::default();

        // Each phase seeds the ordering afresh with the smallest current
        // vertex; the choice does not affect the cut weights found.
        let seed = self.graph.vertices().next().unwrap();
        Self::score_neighbors(&self.graph, seed, &mut heap, &handles, &mut marked);
        heap.remove(handles.remove(&seed).unwrap());

        let mut added_before = seed;
        let mut added_last = seed;
        for _ in 0..n - 1 {
            let (_, mtc) = heap.pop_max().unwrap();
            handles.remove(&mtc);
            Self::score_neighbors(&self.graph, mtc, &mut heap, &handles, &mut marked);
            added_before = added_last;
            added_last = mtc;
        }

        // The cut of the phase isolates the vertex ordered last; it is a
        // minimum cut separating the two vertices ordered last.
        let cut = self.graph.cut(&VertexSet::from([added_last]))?;
        log::trace!(
            "phase over {n} vertices: cut value {} isolating {added_last}",
            cut.value
        );

        if self.best.as_ref().is_none_or(|best| cut.value <= best.value) {
            let expanded = cut.unmerge(&self.graph);
            if self.best.as_ref().is_none_or(|best| expanded.improves(best)) {
                log::debug!(
                    "new best cut: value {}, balance {}",
                    expanded.value,
                    expanded.balance()
                );
                self.best = Some(expanded);
            }
        }

        self.graph.merge(added_before, added_last)
    }

    /// Marks the not-yet-marked hyperedges of `v` and raises the score of
    /// each of their other endpoints still awaiting ordering.
    fn score_neighbors(
        graph: &HyperGraph,
        v: VertexId,
        heap: &mut MaxHeap<VertexId>,
        handles: &FxHashMap<VertexId, Handle>,
        marked: &mut FxHashSet<EdgeId>,
    ) {
        for e in graph.incident_edges(v) {
            if !marked.insert(e) {
                continue;
            }
            let (endpoints, weight) = graph.edge(e).unwrap();
            for &u in endpoints {
                if u == v {
                    continue;
                }
                // Already-ordered endpoints have no handle anymore; their
                // edges were marked when they entered the ordering.
                if let Some(&handle) = handles.get(&u) {
                    let score = heap.key(handle);
                    heap.increase_key(handle, score + weight);
                }
            }
        }
    }
}
