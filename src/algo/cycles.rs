/*!
# Cycle Detection

A *structural* cycle is found by an iterative DFS following directed edges, which keeps the
nodes of the current DFS path on an explicit stack. Roots are tried in ascending order and the
neighbors of a node in ascending column order, so the reported cycle is deterministic.

An edge `u -> v` closes a cycle if `v` is on the current path and is not the DFS-tree parent of
`u`. Going straight back to the parent is the other half of a symmetric pair `{u, v}`, which
encodes a single undirected edge rather than a cycle.

If no structural cycle exists, [`CycleDetection::find_cycle`] falls back to
[`NegativeCycleDetection`] before reporting that there is no cycle.
*/

use std::fmt::Display;

use tracing::{debug, instrument};

use super::*;

/// Outcome of [`CycleDetection::find_cycle`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CycleReport {
    /// The nodes of the cycle, with its first node repeated at the end
    Cycle(Vec<Node>),
    NegativeCycle,
    NoCycle,
}

impl CycleReport {
    /// Returns *false* iff the report is [`CycleReport::NoCycle`]
    pub fn is_cycle(&self) -> bool {
        !matches!(self, CycleReport::NoCycle)
    }
}

impl Display for CycleReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CycleReport::Cycle(nodes) => {
                write!(f, "The graph contains a cycle: {}", format_walk(nodes))
            }
            CycleReport::NegativeCycle => write!(f, "Negative cycle found"),
            CycleReport::NoCycle => write!(f, "No cycle found"),
        }
    }
}

/// Detection of cycles in directed graphs.
pub trait CycleDetection: AdjacencyTest + NegativeCycleDetection {
    /// Returns the first structural cycle as `v -> ... -> u -> v` or `None` if there is none.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let triangle = WeightMatrix::from_rows(&[[0, 1, 0], [0, 0, 1], [1, 0, 0]]).unwrap();
    /// assert_eq!(triangle.find_structural_cycle(), Some(vec![0, 1, 2, 0]));
    ///
    /// let path = WeightMatrix::from_rows(&[[0, 1, 0], [1, 0, 1], [0, 1, 0]]).unwrap();
    /// assert_eq!(path.find_structural_cycle(), None);
    /// ```
    fn find_structural_cycle(&self) -> Option<Vec<Node>> {
        let n = self.number_of_nodes();
        let mut visited = self.vertex_bitset_unset();
        let mut on_path = self.vertex_bitset_unset();

        // (node, next column to inspect)
        let mut stack: Vec<(Node, Node)> = Vec::new();

        for root in self.vertices_range() {
            if visited.put(root as usize) {
                continue;
            }
            on_path.insert(root as usize);
            stack.push((root, 0));

            while let Some(frame) = stack.last_mut() {
                let u = frame.0;
                let Some(v) = (frame.1..n).find(|&v| self.has_edge(u, v)) else {
                    on_path.set(u as usize, false);
                    stack.pop();
                    continue;
                };
                frame.1 = v + 1;

                if on_path.contains(v as usize) {
                    let parent = stack.len().checked_sub(2).map(|i| stack[i].0);
                    if parent == Some(v) {
                        continue;
                    }

                    if let Some(start) = stack.iter().position(|&(x, _)| x == v) {
                        let mut cycle = stack[start..].iter().map(|&(x, _)| x).collect_vec();
                        cycle.push(v);
                        return Some(cycle);
                    }
                } else if !visited.put(v as usize) {
                    on_path.insert(v as usize);
                    stack.push((v, 0));
                }
            }
        }

        None
    }

    /// Reports the first structural cycle, otherwise whether a negative cycle is
    /// reachable from node `0`.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let triangle = WeightMatrix::from_rows(&[[0, 1, 0], [0, 0, 1], [1, 0, 0]]).unwrap();
    /// assert_eq!(triangle.find_cycle().to_string(), "The graph contains a cycle: 0->1->2->0");
    /// ```
    #[instrument(skip_all, fields(nodes = self.number_of_nodes()))]
    fn find_cycle(&self) -> CycleReport {
        if let Some(cycle) = self.find_structural_cycle() {
            debug!(length = cycle.len() - 1, "found structural cycle");
            return CycleReport::Cycle(cycle);
        }

        if self.has_negative_cycle() {
            CycleReport::NegativeCycle
        } else {
            CycleReport::NoCycle
        }
    }

    /// Returns *true* if [`CycleDetection::find_cycle`] reports any cycle
    fn contains_cycle(&self) -> bool {
        self.find_cycle().is_cycle()
    }
}

impl<G> CycleDetection for G where G: WeightedAdjacency {}

#[cfg(test)]
mod test {
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    use super::*;
    use crate::testing::random_graph;

    fn graph<R: AsRef<[Weight]>>(rows: &[R]) -> WeightMatrix {
        WeightMatrix::from_rows(rows).unwrap()
    }

    #[test]
    fn directed_cycles() {
        let triangle = graph(&[[0, 1, 0], [0, 0, 1], [1, 0, 0]]);
        assert_eq!(triangle.find_cycle(), CycleReport::Cycle(vec![0, 1, 2, 0]));

        let complete = graph(&[[0, 1, 1], [1, 0, 1], [1, 1, 0]]);
        assert_eq!(complete.find_cycle(), CycleReport::Cycle(vec![0, 1, 2, 0]));

        // the DFS enters the cycle at node 1 from the tail 0 -> 1
        let lasso = graph(&[
            [0, 1, 0, 0, 0],
            [0, 0, 1, 0, 0],
            [0, 0, 0, 1, 0],
            [0, 0, 0, 0, 1],
            [0, 1, 0, 0, 0],
        ]);
        assert_eq!(
            lasso.find_cycle().to_string(),
            "The graph contains a cycle: 1->2->3->4->1"
        );
    }

    #[test]
    fn cycle_in_later_component() {
        let g = graph(&[[0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 3], [0, 0, 7, 0]]);
        // a symmetric pair is not a cycle
        assert_eq!(g.find_cycle(), CycleReport::NoCycle);

        let g = graph(&[[0, 0, 0, 0], [0, 0, 1, 0], [0, 0, 0, 1], [0, 1, 0, 0]]);
        assert_eq!(g.find_structural_cycle(), Some(vec![1, 2, 3, 1]));
        assert!(g.contains_cycle());
    }

    #[test]
    fn acyclic_graphs() {
        let path = graph(&[[0, 1, 0], [1, 0, 1], [0, 1, 0]]);
        assert_eq!(path.find_cycle().to_string(), "No cycle found");
        assert!(!path.contains_cycle());

        // diamond: two paths 0 -> 3 but no cycle
        let diamond = graph(&[[0, 1, 1, 0], [0, 0, 0, 1], [0, 0, 0, 1], [0, 0, 0, 0]]);
        assert_eq!(diamond.find_cycle(), CycleReport::NoCycle);

        assert_eq!(graph(&[[0]]).find_cycle(), CycleReport::NoCycle);
        assert_eq!(WeightMatrix::default().find_cycle(), CycleReport::NoCycle);
    }

    #[test]
    fn falls_back_to_negative_cycles() {
        let g = graph(&[[0, -1, 0], [-1, 0, -1], [0, -1, 0]]);
        assert_eq!(g.find_structural_cycle(), None);
        assert_eq!(g.find_cycle(), CycleReport::NegativeCycle);
        assert_eq!(g.find_cycle().to_string(), "Negative cycle found");
        assert!(g.contains_cycle());
    }

    #[test]
    fn reported_cycles_are_closed_walks() {
        let rng = &mut Pcg64Mcg::seed_from_u64(11);

        for n in 3..25 {
            let g = random_graph(rng, n, 0.1, 5, false);
            let Some(cycle) = g.find_structural_cycle() else {
                continue;
            };

            assert!(cycle.len() >= 4);
            assert_eq!(cycle.first(), cycle.last());
            assert!(cycle.iter().tuple_windows().all(|(&u, &v)| g.has_edge(u, v)));
            assert!(cycle[..cycle.len() - 1].iter().all_unique());
        }
    }
}
