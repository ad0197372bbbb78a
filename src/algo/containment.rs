/*!
# Containment

A graph `P` is *contained* in a graph `H` if `P` has at most as many nodes as `H` and there are
offsets `(i, j)` such that every non-zero cell `[k][l]` of `P` equals the cell `[i + k][j + l]`
of `H`. Zero cells of `P` are unconstrained. This is a pattern match on the matrices, not a
subgraph isomorphism: node order and exact weights matter.

The search strategy is abstracted by [`SubMatrixMatcher`]; [`Containment`] uses
[`BruteForceMatcher`] unless told otherwise.
*/

use super::*;

/// Strategy for locating a pattern matrix inside a host matrix.
pub trait SubMatrixMatcher {
    /// Returns the smallest offset `(i, j)` (in lexicographic order) at which `pattern`
    /// is found in `host`, or `None` if there is none.
    fn find_placement<P, H>(&self, pattern: &P, host: &H) -> Option<(Node, Node)>
    where
        P: WeightedAdjacency,
        H: WeightedAdjacency;
}

/// Tries every offset and compares all edges of the pattern, i.e. `O(n_H^2 * m_P)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BruteForceMatcher;

impl SubMatrixMatcher for BruteForceMatcher {
    fn find_placement<P, H>(&self, pattern: &P, host: &H) -> Option<(Node, Node)>
    where
        P: WeightedAdjacency,
        H: WeightedAdjacency,
    {
        let slack = host.number_of_nodes().checked_sub(pattern.number_of_nodes())?;
        let edges = pattern.weighted_edges().collect_vec();

        (0..=slack).cartesian_product(0..=slack).find(|&(i, j)| {
            edges
                .iter()
                .all(|&WeightedEdge(k, l, w)| host.edge_weight(i + k, j + l) == w)
        })
    }
}

/// Containment queries on graphs.
pub trait Containment: WeightedAdjacency + Sized {
    /// Returns the offset at which `self` is found in `host`, see [`BruteForceMatcher`].
    fn placement_in<H>(&self, host: &H) -> Option<(Node, Node)>
    where
        H: WeightedAdjacency,
    {
        BruteForceMatcher.find_placement(self, host)
    }

    /// Returns *true* if `self` is contained in `host`.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let pattern = WeightMatrix::from_rows(&[[0, 2], [0, 0]]).unwrap();
    /// let host = WeightMatrix::from_rows(&[[0, 0, 0], [0, 0, 2], [1, 0, 0]]).unwrap();
    /// assert!(pattern.is_contained_in(&host));
    /// assert_eq!(pattern.placement_in(&host), Some((1, 1)));
    /// assert!(!host.is_contained_in(&pattern));
    /// ```
    fn is_contained_in<H>(&self, host: &H) -> bool
    where
        H: WeightedAdjacency,
    {
        self.placement_in(host).is_some()
    }

    /// Same as [`Containment::is_contained_in`] using a custom matcher
    fn is_contained_in_with<H, M>(&self, host: &H, matcher: &M) -> bool
    where
        H: WeightedAdjacency,
        M: SubMatrixMatcher,
    {
        matcher.find_placement(self, host).is_some()
    }
}

impl<G: WeightedAdjacency> Containment for G {}
