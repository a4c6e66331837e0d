/*!
# Uniform Random Hypergraphs

A simple random model: `n` vertices with identifiers `0..n`, `m`
hyperedges with identifiers `0..m`, where each hyperedge draws an arity
uniformly from a configurable range, its endpoints as a uniform sample of
distinct vertices, and its weight uniformly from `1..=max_weight`.

Vertices come into existence lazily when an edge touches them, so for
sparse configurations the generated graph may hold fewer than `n`
vertices.
*/

use std::ops::RangeInclusive;

use rand::{seq::IteratorRandom, Rng};

use super::{NumEdgesGen, NumVerticesGen};
use crate::{
    graph::HyperGraph,
    node::{NumEdges, NumVertices, VertexSet, Weight},
};

/// Generator for uniform random weighted hypergraphs.
///
/// Defaults: arity range `2..=4`, weights `1..=10`. Vertex and edge counts
/// must be configured through [`NumVerticesGen`] / [`NumEdgesGen`].
#[derive(Debug, Clone)]
pub struct UniformHyperGraph {
    n: NumVertices,
    m: NumEdges,
    arity: RangeInclusive<NumVertices>,
    max_weight: Weight,
}

impl Default for UniformHyperGraph {
    fn default() -> Self {
        Self {
            n: 0,
            m: 0,
            arity: 2..=4,
            max_weight: 10,
        }
    }
}

impl NumVerticesGen for UniformHyperGraph {
    fn set_vertices(&mut self, n: NumVertices) {
        self.n = n;
    }
}

impl NumEdgesGen for UniformHyperGraph {
    fn set_edges(&mut self, m: NumEdges) {
        self.m = m;
    }
}

impl UniformHyperGraph {
    /// Creates a new generator with default parameters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the inclusive arity range hyperedges draw from.
    ///
    /// # Panics
    /// Panics if the range is empty or starts below two.
    pub fn set_arity(&mut self, arity: RangeInclusive<NumVertices>) {
        assert!(
            !arity.is_empty() && *arity.start() >= 2,
            "hyperedges need at least two endpoints"
        );
        self.arity = arity;
    }

    /// Chainable version of [`Self::set_arity`].
    pub fn arity(mut self, arity: RangeInclusive<NumVertices>) -> Self {
        self.set_arity(arity);
        self
    }

    /// Sets the largest weight a hyperedge may draw (weights are uniform
    /// over `1..=max_weight`).
    ///
    /// # Panics
    /// Panics if `max_weight` is zero.
    pub fn set_max_weight(&mut self, max_weight: Weight) {
        assert!(max_weight > 0, "weights are strictly positive");
        self.max_weight = max_weight;
    }

    /// Chainable version of [`Self::set_max_weight`].
    pub fn max_weight(mut self, max_weight: Weight) -> Self {
        self.set_max_weight(max_weight);
        self
    }

    /// Generates a hypergraph. A seeded RNG yields the same graph on
    /// every run.
    ///
    /// # Panics
    /// Panics if fewer than two vertices are configured.
    pub fn generate<R>(&self, rng: &mut R) -> HyperGraph
    where
        R: Rng,
    {
        assert!(
            self.n >= 2,
            "a hypergraph needs at least two vertices to carry edges"
        );

        // Clamp the arity range to the vertex count; `lo` stays at two or
        // above because `hi >= 2` is guaranteed by the assert.
        let hi = (*self.arity.end()).min(self.n);
        let lo = (*self.arity.start()).min(hi);

        let mut graph = HyperGraph::new();
        for e in 0..self.m {
            let k = rng.random_range(lo..=hi);
            let endpoints: VertexSet = (0..self.n)
                .choose_multiple(rng, k as usize)
                .into_iter()
                .collect();
            let weight = rng.random_range(1..=self.max_weight);
            // Arity, weight and identifier are valid by construction.
            graph.add_edge(e, endpoints, weight).unwrap();
        }
        graph
    }
}
