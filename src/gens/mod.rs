/*!
# Hypergraph Generators

Random instances for exercising the min-cut engine.

Generators are configured builder-style before producing a graph:

```
use hypercut::gens::*;
use rand::SeedableRng;
use rand_pcg::Pcg64Mcg;

let rng = &mut Pcg64Mcg::seed_from_u64(42);
let graph = UniformHyperGraph::new()
    .vertices(20)
    .edges(35)
    .arity(2..=5)
    .generate(rng);
assert_eq!(graph.number_of_edges(), 35);
```
*/

use crate::node::{NumEdges, NumVertices};

pub mod uniform;

pub use uniform::*;

/// Trait for generators that allow specifying the number of vertices.
pub trait NumVerticesGen: Sized {
    /// Sets the number of vertices in the generator (mutable setter).
    fn set_vertices(&mut self, n: NumVertices);

    /// Sets the number of vertices and returns the generator (builder
    /// style).
    fn vertices(mut self, n: NumVertices) -> Self {
        self.set_vertices(n);
        self
    }

    /// Constructs a generator with `n` vertices using `Default` + builder
    /// pattern.
    fn with_vertices(n: NumVertices) -> Self
    where
        Self: Default,
    {
        Self::default().vertices(n)
    }
}

/// Trait for generators that allow specifying the number of hyperedges.
pub trait NumEdgesGen: Sized {
    /// Sets the number of hyperedges in the generator (mutable setter).
    fn set_edges(&mut self, m: NumEdges);

    /// Sets the number of hyperedges and returns the generator (builder
    /// style).
    fn edges(mut self, m: NumEdges) -> Self {
        self.set_edges(m);
        self
    }

    /// Constructs a generator with `m` hyperedges using `Default` +
    /// builder pattern.
    fn with_edges(m: NumEdges) -> Self
    where
        Self: Default,
    {
        Self::default().edges(m)
    }
}
