/*!
# Bellman-Ford

Single-source shortest distances for graphs with arbitrary (also negative) edge weights.

[`BellmanFord`] relaxes every edge in `n - 1` rounds (stopping early once a round changes
nothing) and afterwards checks whether some edge leaving a reached node can still be relaxed.
Such an edge proves a negative cycle reachable from the source; in that case distances and
predecessors are meaningless and [`Relaxation::path_to`] refuses to reconstruct paths.

Negative cycles that cannot be reached from the source are invisible to this check.
*/

use std::fmt::Display;

use tracing::{debug, trace};

use super::*;

/// Configuration of a Bellman-Ford run. The default source is node `0`.
///
/// # Examples
/// ```
/// use wgraphs::{prelude::*, algo::*};
///
/// let graph = WeightMatrix::from_rows(&[[0, 4, 1], [0, 0, 0], [0, -2, 0]]).unwrap();
/// let relaxation = BellmanFord::new(&graph).source(0).run();
///
/// assert_eq!(relaxation.distance_to(1), Some(-1));
/// assert_eq!(relaxation.path_to(1), Some(vec![0, 2, 1]));
/// assert!(!relaxation.has_negative_cycle());
/// ```
#[derive(Debug, Clone)]
pub struct BellmanFord<'a, G> {
    graph: &'a G,
    source: Node,
}

impl<'a, G> BellmanFord<'a, G>
where
    G: WeightedAdjacency,
{
    pub fn new(graph: &'a G) -> Self {
        Self { graph, source: 0 }
    }

    /// Sets the node all distances are measured from
    pub fn source(mut self, source: Node) -> Self {
        self.source = source;
        self
    }

    /// Computes distances and predecessors from the source.
    /// An empty graph yields an empty relaxation.
    /// ** Panics if the source is not a node of a non-empty graph **
    pub fn run(&self) -> Relaxation {
        let n = self.graph.len();
        if n == 0 {
            return Relaxation::default();
        }
        assert!(self.graph.contains_node(self.source));

        let edges = self.graph.weighted_edges().collect_vec();
        let mut distances: Vec<Option<Distance>> = vec![None; n];
        let mut predecessors: Vec<Option<OptionalNode>> = vec![None; n];
        distances[self.source as usize] = Some(0);

        for round in 1..n {
            let mut relaxed = 0usize;
            for &WeightedEdge(u, v, w) in &edges {
                if let Some(candidate) = improves(&distances, u, v, w) {
                    distances[v as usize] = Some(candidate);
                    predecessors[v as usize] = OptionalNode::new(u);
                    relaxed += 1;
                }
            }

            trace!(round, relaxed, "relaxation round");
            if relaxed == 0 {
                break;
            }
        }

        let relaxable_edge = edges
            .iter()
            .copied()
            .find(|&WeightedEdge(u, v, w)| improves(&distances, u, v, w).is_some());

        if let Some(edge) = relaxable_edge {
            debug!(source = self.source, %edge, "negative cycle reachable from source");
        }

        Relaxation {
            source: self.source,
            distances,
            predecessors,
            relaxable_edge,
        }
    }
}

/// Returns the new distance of `v` if the edge `(u, v)` with weight `w` improves it
#[inline]
fn improves(distances: &[Option<Distance>], u: Node, v: Node, w: Weight) -> Option<Distance> {
    let candidate = distances[u as usize]? + Distance::from(w);
    distances[v as usize]
        .is_none_or(|current| candidate < current)
        .then_some(candidate)
}

/// Result of a [`BellmanFord`] run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Relaxation {
    source: Node,
    distances: Vec<Option<Distance>>,
    predecessors: Vec<Option<OptionalNode>>,
    relaxable_edge: Option<WeightedEdge>,
}

impl Relaxation {
    pub fn source(&self) -> Node {
        self.source
    }

    /// Distance from the source to `u` or `None` if `u` was not reached
    /// ** Panics if `u >= n` **
    pub fn distance_to(&self, u: Node) -> Option<Distance> {
        self.distances[u as usize]
    }

    /// Last node before `u` on the best known path from the source
    /// ** Panics if `u >= n` **
    pub fn predecessor_of(&self, u: Node) -> Option<Node> {
        self.predecessors[u as usize].map(|p| p.get())
    }

    /// Returns *true* if a negative cycle is reachable from the source
    pub fn has_negative_cycle(&self) -> bool {
        self.relaxable_edge.is_some()
    }

    /// An edge that could still be relaxed after `n - 1` rounds, if any
    pub fn relaxable_edge(&self) -> Option<WeightedEdge> {
        self.relaxable_edge
    }

    /// Reconstructs the path from the source to `end` by following predecessors.
    /// Returns `None` if `end` was not reached or a negative cycle was detected.
    /// ** Panics if `end >= n` **
    pub fn path_to(&self, end: Node) -> Option<Vec<Node>> {
        if self.has_negative_cycle() {
            return None;
        }
        self.distance_to(end)?;

        let mut path = vec![end];
        let mut current = end;
        while current != self.source {
            current = self.predecessor_of(current)?;
            path.push(current);

            // predecessor loops only exist alongside negative cycles
            if path.len() > self.distances.len() {
                return None;
            }
        }

        path.reverse();
        Some(path)
    }
}

/// Outcome of [`NegativeCycleDetection::negative_cycle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NegativeCycleReport {
    Found,
    NotFound,
}

impl Display for NegativeCycleReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NegativeCycleReport::Found => write!(f, "Negative cycle found"),
            NegativeCycleReport::NotFound => write!(f, "No negative cycle found"),
        }
    }
}

/// Detection of negative cycles reachable from node `0`.
pub trait NegativeCycleDetection {
    /// Returns *true* if a cycle of negative total weight is reachable from node `0`.
    /// Always *false* for the empty store.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let triangle = WeightMatrix::from_rows(&[[0, -1, 0], [0, 0, -1], [-1, 0, 0]]).unwrap();
    /// assert!(triangle.has_negative_cycle());
    /// assert_eq!(triangle.negative_cycle().to_string(), "Negative cycle found");
    /// ```
    fn has_negative_cycle(&self) -> bool;

    /// Same as [`NegativeCycleDetection::has_negative_cycle`] as a printable report.
    fn negative_cycle(&self) -> NegativeCycleReport {
        if self.has_negative_cycle() {
            NegativeCycleReport::Found
        } else {
            NegativeCycleReport::NotFound
        }
    }
}

impl<G> NegativeCycleDetection for G
where
    G: WeightedAdjacency,
{
    fn has_negative_cycle(&self) -> bool {
        BellmanFord::new(self).run().has_negative_cycle()
    }
}

#[cfg(test)]
mod test {
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    use super::*;
    use crate::testing::{init_logging, random_graph};

    fn graph<R: AsRef<[Weight]>>(rows: &[R]) -> WeightMatrix {
        WeightMatrix::from_rows(rows).unwrap()
    }

    #[test]
    fn distances_with_negative_edges() {
        init_logging();
        let g = graph(&[
            [0, 6, 7, 0, 0],
            [0, 0, 8, 5, -4],
            [0, 0, 0, -3, 9],
            [0, -2, 0, 0, 0],
            [2, 0, 0, 7, 0],
        ]);

        let relaxation = BellmanFord::new(&g).run();
        assert!(!relaxation.has_negative_cycle());
        assert_eq!(
            g.vertices_range()
                .map(|u| relaxation.distance_to(u))
                .collect_vec(),
            vec![Some(0), Some(2), Some(7), Some(4), Some(-2)]
        );
        assert_eq!(relaxation.path_to(4), Some(vec![0, 2, 3, 1, 4]));
        assert_eq!(relaxation.predecessor_of(0), None);
        assert_eq!(relaxation.path_to(0), Some(vec![0]));
    }

    #[test]
    fn unreached_nodes() {
        let g = graph(&[[0, 0, 0], [5, 0, 0], [0, 0, 0]]);
        let relaxation = BellmanFord::new(&g).source(1).run();

        assert_eq!(relaxation.source(), 1);
        assert_eq!(relaxation.distance_to(0), Some(5));
        assert_eq!(relaxation.distance_to(2), None);
        assert_eq!(relaxation.path_to(2), None);
    }

    #[test]
    fn negative_cycle_must_be_reachable() {
        init_logging();

        // 1 <-> 2 with total weight -1, reachable from 0
        let reachable = graph(&[[0, 1, 0], [0, 0, -3], [0, 2, 0]]);
        assert!(reachable.has_negative_cycle());
        assert_eq!(reachable.negative_cycle(), NegativeCycleReport::Found);
        let relaxation = BellmanFord::new(&reachable).run();
        assert!(relaxation.relaxable_edge().is_some());
        assert_eq!(relaxation.path_to(1), None);

        // same cycle without the edge from 0
        let unreachable = graph(&[[0, 0, 0], [0, 0, -3], [0, 2, 0]]);
        assert!(!unreachable.has_negative_cycle());
        assert_eq!(
            unreachable.negative_cycle().to_string(),
            "No negative cycle found"
        );
        assert!(BellmanFord::new(&unreachable).source(1).run().has_negative_cycle());
    }

    #[test]
    fn trivial_graphs() {
        assert!(!WeightMatrix::default().has_negative_cycle());
        assert_eq!(BellmanFord::new(&WeightMatrix::default()).run(), Relaxation::default());
        assert!(!graph(&[[0]]).has_negative_cycle());
    }

    #[test]
    fn non_negative_graphs_have_no_negative_cycle() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);

        for n in 1..20 {
            let g = random_graph(rng, n, 0.3, 10, false);
            let relaxation = BellmanFord::new(&g).run();
            assert!(!relaxation.has_negative_cycle());

            // every reached node has a path whose weight equals its distance
            for u in g.vertices_range() {
                let Some(path) = relaxation.path_to(u) else {
                    assert_eq!(relaxation.distance_to(u), None);
                    continue;
                };
                let weight: Distance = path
                    .iter()
                    .tuple_windows()
                    .map(|(&a, &b)| Distance::from(g.edge_weight(a, b)))
                    .sum();
                assert_eq!(relaxation.distance_to(u), Some(weight));
            }
        }
    }
}
