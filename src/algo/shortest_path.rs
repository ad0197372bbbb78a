use std::fmt::Display;

use tracing::{debug, instrument};

use super::*;

/// Answer to a valid shortest-path request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShortestPath {
    /// Nodes of a shortest path including both endpoints and its total weight
    Path { nodes: Vec<Node>, length: Distance },
    NoPath { start: Node, end: Node },
    /// A negative cycle is reachable from the start, so shortest paths are undefined
    NegativeCycle,
}

impl ShortestPath {
    /// Returns the nodes of the path if there is one
    pub fn nodes(&self) -> Option<&[Node]> {
        match self {
            ShortestPath::Path { nodes, .. } => Some(nodes),
            _ => None,
        }
    }

    /// Returns the total weight of the path if there is one
    pub fn length(&self) -> Option<Distance> {
        match self {
            ShortestPath::Path { length, .. } => Some(*length),
            _ => None,
        }
    }
}

impl Display for ShortestPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShortestPath::Path { nodes, .. } => write!(f, "{}", format_walk(nodes)),
            ShortestPath::NoPath { start, end } => {
                write!(f, "There is no path between {start} and {end}")
            }
            ShortestPath::NegativeCycle => write!(f, "Negative cycle detected"),
        }
    }
}

/// Shortest paths by Bellman-Ford, so edges may have negative weights.
pub trait ShortestPaths {
    /// Computes a shortest path from `start` to `end`.
    ///
    /// # Errors
    /// [`QueryError::PathToItself`] if `start == end`, otherwise
    /// [`QueryError::InvalidVertex`] if either node is not in the graph.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::{prelude::*, algo::*};
    ///
    /// let graph = WeightMatrix::from_rows(&[[0, 1, 0], [1, 0, 1], [0, 1, 0]]).unwrap();
    /// assert_eq!(graph.shortest_path(0, 2).unwrap().to_string(), "0->1->2");
    /// assert_eq!(graph.shortest_path(1, 1), Err(QueryError::PathToItself));
    /// ```
    fn shortest_path(&self, start: Node, end: Node) -> Result<ShortestPath, QueryError>;
}

impl<G> ShortestPaths for G
where
    G: WeightedAdjacency,
{
    #[instrument(skip(self), fields(nodes = self.number_of_nodes()))]
    fn shortest_path(&self, start: Node, end: Node) -> Result<ShortestPath, QueryError> {
        if start == end {
            return Err(QueryError::PathToItself);
        }
        if !self.contains_node(start) || !self.contains_node(end) {
            return Err(QueryError::InvalidVertex { start, end });
        }

        let relaxation = BellmanFord::new(self).source(start).run();
        if relaxation.has_negative_cycle() {
            return Ok(ShortestPath::NegativeCycle);
        }

        let path = relaxation
            .path_to(end)
            .zip(relaxation.distance_to(end))
            .map_or(ShortestPath::NoPath { start, end }, |(nodes, length)| {
                ShortestPath::Path { nodes, length }
            });

        debug!(%path, "shortest path query");
        Ok(path)
    }
}
