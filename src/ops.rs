use std::ops::Range;

use crate::*;

/// Provides getters pertaining to the node-size of a graph
pub trait GraphNodeOrder {
    /// Returns the number of nodes of the graph
    fn number_of_nodes(&self) -> NumNodes;

    /// Return the number of nodes as usize
    fn len(&self) -> usize {
        self.number_of_nodes() as usize
    }

    /// Returns a range over all vertices `0..n`.
    /// The range does not borrow `self`.
    fn vertices_range(&self) -> Range<Node> {
        0..self.number_of_nodes()
    }

    /// Returns empty bitset with one entry per node
    fn vertex_bitset_unset(&self) -> NodeBitSet {
        NodeBitSet::with_capacity(self.len())
    }

    /// Returns *true* if `u` is a row of the matrix
    fn contains_node(&self, u: Node) -> bool {
        u < self.number_of_nodes()
    }

    /// Returns *true* if the graph has no nodes (and thus no edges)
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Provides getters pertaining to the edge-size of a graph
pub trait GraphEdgeOrder {
    /// Returns the number of (directed) edges of the graph
    fn number_of_edges(&self) -> NumEdges;

    /// Returns *true* if the graph has no edges
    fn is_singleton_graph(&self) -> bool {
        self.number_of_edges() == 0
    }
}

/// Read access to the weights of a dense graph.
///
/// Every other adjacency query is derived from [`WeightedAdjacency::edge_weight`],
/// so that algorithms only need a single cell lookup from a representation.
pub trait WeightedAdjacency: GraphNodeOrder {
    /// Returns the weight of the edge `(u, v)` or `0` if it does not exist.
    /// ** Panics if `u >= n || v >= n` **
    fn edge_weight(&self, u: Node, v: Node) -> Weight;

    /// Returns an iterator over all `v` with an edge `(u, v)` in ascending order.
    /// ** Panics if `u >= n` **
    fn out_neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.vertices_range()
            .filter(move |&v| self.edge_weight(u, v) != 0)
    }

    /// Returns an iterator over all `v` with an edge `(v, u)` in ascending order.
    /// ** Panics if `u >= n` **
    fn in_neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.vertices_range()
            .filter(move |&v| self.edge_weight(v, u) != 0)
    }

    /// Returns an iterator over all `v` with an edge `(u, v)` *or* `(v, u)` in ascending order,
    /// i.e. the neighborhood of `u` when directions are ignored.
    /// ** Panics if `u >= n` **
    fn undirected_neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.vertices_range()
            .filter(move |&v| self.edge_weight(u, v) != 0 || self.edge_weight(v, u) != 0)
    }

    /// Returns an iterator over the outgoing edges of `u` including their weights.
    /// ** Panics if `u >= n` **
    fn weighted_edges_of(&self, u: Node) -> impl Iterator<Item = WeightedEdge> + '_ {
        self.out_neighbors_of(u)
            .map(move |v| WeightedEdge(u, v, self.edge_weight(u, v)))
    }

    /// Returns an iterator over all edges in row-major order (sorted by source, then target).
    fn weighted_edges(&self) -> impl Iterator<Item = WeightedEdge> + '_ {
        self.vertices_range()
            .flat_map(move |u| self.weighted_edges_of(u))
    }
}

/// Trait to test existence of certain structures in a graph.
pub trait AdjacencyTest: GraphNodeOrder {
    /// Returns *true* if the egde (u,v) exists in the graph.
    /// ** Panics if `u >= n || v >= n` **
    fn has_edge(&self, u: Node, v: Node) -> bool;

    /// Returns *true* if there exists an edge (u,v) as well as (v,u) in the graph.
    /// ** Panics if `u >= n || v >= n` **
    fn has_bidirected_edge(&self, u: Node, v: Node) -> bool {
        self.has_edge(u, v) && self.has_edge(v, u)
    }

    /// Returns *true* if (u,v) or (v,u) exists in the graph.
    /// ** Panics if `u >= n || v >= n` **
    fn has_undirected_edge(&self, u: Node, v: Node) -> bool {
        self.has_edge(u, v) || self.has_edge(v, u)
    }
}

impl<G: WeightedAdjacency> AdjacencyTest for G {
    #[inline]
    fn has_edge(&self, u: Node, v: Node) -> bool {
        self.edge_weight(u, v) != 0
    }
}
