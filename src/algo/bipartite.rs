/*!
# Bipartite Graph Algorithms

Two-coloring of graphs where every edge, regardless of its orientation, demands that
its endpoints receive different colors.

Every connected component is colored by a BFS from its smallest node, which is put into
class `A`. A graph where one of the classes stays empty (i.e. a graph without edges) is
*not* considered bipartite here.
*/

use std::fmt::Display;

use tracing::instrument;

use super::*;

/// A partition of the nodes into class `A` and class `B`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bipartition {
    /// Bit `u` is set iff `u` is in class `B`
    class_b: NodeBitSet,
}

impl Bipartition {
    /// Creates a partition of `n` nodes from the members of class `B`; all other nodes are in `A`
    pub fn from_class_b<I>(n: NumNodes, class_b: I) -> Self
    where
        I: IntoIterator<Item = Node>,
    {
        let mut bits = NodeBitSet::with_capacity(n as usize);
        bits.extend(class_b.into_iter().map(|u| u as usize));
        Self { class_b: bits }
    }

    /// Returns `true` if the node is in class `A`.
    pub fn is_in_a(&self, u: Node) -> bool {
        !self.is_in_b(u)
    }

    /// Returns `true` if the node is in class `B`.
    pub fn is_in_b(&self, u: Node) -> bool {
        self.class_b.contains(u as usize)
    }

    /// Members of class `A` in ascending order
    pub fn class_a(&self) -> Vec<Node> {
        (0..self.class_b.len())
            .filter(|&u| !self.class_b.contains(u))
            .map(|u| u as Node)
            .collect()
    }

    /// Members of class `B` in ascending order
    pub fn class_b(&self) -> Vec<Node> {
        self.class_b.ones().map(|u| u as Node).collect()
    }
}

impl Display for Bipartition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "A={{{}}}, B={{{}}}",
            self.class_a().iter().join(", "),
            self.class_b().iter().join(", ")
        )
    }
}

/// Outcome of a bipartiteness check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Bipartiteness {
    Bipartite(Bipartition),
    NotBipartite,
}

impl Bipartiteness {
    pub fn is_bipartite(&self) -> bool {
        matches!(self, Bipartiteness::Bipartite(_))
    }

    pub fn bipartition(&self) -> Option<&Bipartition> {
        match self {
            Bipartiteness::Bipartite(b) => Some(b),
            Bipartiteness::NotBipartite => None,
        }
    }
}

impl Display for Bipartiteness {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Bipartiteness::Bipartite(b) => write!(f, "The graph is bipartite: {b}."),
            Bipartiteness::NotBipartite => write!(f, "The graph isn't bipartite."),
        }
    }
}

/// A trait for testing and computing bipartitions in graphs.
pub trait BipartiteTest {
    /// Tests whether every edge crosses the given partition.
    fn is_bipartition(&self, bipartition: &Bipartition) -> bool;

    /// Computes a bipartition of the graph if one exists and both classes are non-empty.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let square = WeightMatrix::from_rows(&[[0, 1, 0, 0], [0, 0, 1, 0], [0, 0, 0, 1], [1, 0, 0, 0]]).unwrap();
    /// let bip = square.compute_bipartition().unwrap();
    /// assert_eq!(bip.class_a(), vec![0, 2]);
    /// assert_eq!(bip.class_b(), vec![1, 3]);
    /// ```
    fn compute_bipartition(&self) -> Option<Bipartition>;

    /// Same as [`BipartiteTest::compute_bipartition`] as a printable report.
    fn bipartiteness(&self) -> Bipartiteness {
        match self.compute_bipartition() {
            Some(b) => Bipartiteness::Bipartite(b),
            None => Bipartiteness::NotBipartite,
        }
    }

    /// Tests whether the graph is bipartite.
    fn is_bipartite(&self) -> bool {
        self.compute_bipartition().is_some()
    }
}

impl<G> BipartiteTest for G
where
    G: Traversal,
{
    fn is_bipartition(&self, bipartition: &Bipartition) -> bool {
        self.weighted_edges()
            .all(|e| bipartition.is_in_b(e.0) != bipartition.is_in_b(e.1))
    }

    #[instrument(skip_all, fields(nodes = self.number_of_nodes()))]
    fn compute_bipartition(&self) -> Option<Bipartition> {
        if self.is_empty() {
            return None;
        }

        let bipartition = propose_possibly_illegal_bipartition(self);
        if !self.is_bipartition(&bipartition) {
            return None;
        }

        // an empty class is only possible without any edges
        let size_b = bipartition.class_b.count_ones(..);
        (size_b > 0 && size_b < self.len()).then_some(bipartition)
    }
}

/// Colors every component by a BFS from its smallest node (class `A`),
/// alternating classes along BFS-tree edges.
///
/// - If the graph is bipartite, the returned partition is valid
/// - If the graph is not bipartite, the returned partition has at least one monochromatic edge
fn propose_possibly_illegal_bipartition<G>(graph: &G) -> Bipartition
where
    G: Traversal,
{
    let mut bfs = graph.undirected_bfs_with_predecessor(0);
    let mut class_b = graph.vertex_bitset_unset();

    loop {
        for (node, pred) in bfs
            .by_ref()
            .filter_map(|x| Some((x.item(), x.predecessor()?)))
        {
            if !class_b.contains(pred as usize) {
                class_b.insert(node as usize);
            }
        }

        if !bfs.try_restart_at_unvisited() {
            break;
        }
    }

    Bipartition { class_b }
}
