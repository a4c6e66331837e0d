/*!
# Cuts

A [`Cut`] is the result of bipartitioning a hypergraph: the two sides of
the partition and the total weight of the hyperedges crossing it.

Cuts produced while the graph is being contracted refer to the surviving
vertex identifiers only; [`Cut::unmerge`] expands such a cut back to the
identifiers of the original, uncontracted graph.
*/

use crate::{
    graph::HyperGraph,
    node::{VertexSet, Weight},
};

/// A bipartition of a hypergraph's vertex set together with the weight of
/// the hyperedges touching both sides.
///
/// Two cuts are equal when they describe the same partition; the value is
/// derived data and takes no part in equality.
#[derive(Debug, Clone, Eq)]
pub struct Cut {
    /// Total weight of the crossing hyperedges.
    pub value: Weight,
    /// One side of the partition. Non-empty.
    pub left: VertexSet,
    /// The other side. Non-empty and disjoint from `left`.
    pub right: VertexSet,
}

impl PartialEq for Cut {
    fn eq(&self, other: &Self) -> bool {
        self.left == other.left && self.right == other.right
    }
}

impl Cut {
    /// Size of the larger side. Smaller is better: a cut of balance
    /// `n / 2` splits the graph evenly, one of balance `n - 1` merely
    /// chips off a single vertex.
    pub fn balance(&self) -> usize {
        self.left.len().max(self.right.len())
    }

    /// Returns `true` if this cut should replace `incumbent` as the best
    /// cut found so far: strictly lower weight, or equal weight and a more
    /// even split.
    pub fn improves(&self, incumbent: &Cut) -> bool {
        (self.value, self.balance()) < (incumbent.value, incumbent.balance())
    }

    /// Expands a cut over a contracted graph back to original vertex
    /// identifiers by folding in the absorption history recorded in
    /// `graph`. The value carries over unchanged.
    pub fn unmerge(&self, graph: &HyperGraph) -> Cut {
        let expand = |side: &VertexSet| {
            let mut out = VertexSet::new();
            for &v in side {
                out.insert(v);
                out.extend(graph.merged_with(v).unwrap_or_default().iter().copied());
            }
            out
        };

        Cut {
            value: self.value,
            left: expand(&self.left),
            right: expand(&self.right),
        }
    }
}
