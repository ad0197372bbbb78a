use super::*;

/// Connectivity of the graph when edge orientations are ignored.
pub trait Connectivity: Traversal {
    /// Returns *true* if every node can be reached from node `0` when edges are
    /// treated as undirected (an edge in either direction counts as adjacency).
    ///
    /// A graph with a single node is connected; so is the empty store.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let graph = WeightMatrix::from_rows(&[[0, 0, 0], [3, 0, 0], [0, 0, 0]]).unwrap();
    /// assert!(!graph.is_connected());
    /// ```
    fn is_connected(&self) -> bool {
        self.is_empty() || self.undirected_bfs(0).count() == self.len()
    }

    /// Returns the (weakly) connected components in order of their smallest node.
    /// Each component lists its nodes in ascending order.
    fn connected_components(&self) -> Vec<Vec<Node>> {
        if self.is_empty() {
            return Vec::new();
        }

        let mut components = Vec::new();
        let mut bfs = self.undirected_bfs(0);
        loop {
            let mut component = bfs.by_ref().collect_vec();
            component.sort_unstable();
            components.push(component);

            if !bfs.try_restart_at_unvisited() {
                break;
            }
        }
        components
    }
}

impl<G: Traversal> Connectivity for G {}
