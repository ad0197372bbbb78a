/*!
Graph traversal iterators.

This module provides a generic traversal iterator, [`TraversalSearch`], whose order
(BFS or DFS) is determined by its frontier and which can follow edges in either orientation.
The [`Traversal`] trait exposes the common configurations directly on graphs.

Nodes are yielded in the order in which they are *discovered*; neighbors of a node are
discovered in ascending order.
*/

use std::{collections::VecDeque, marker::PhantomData};

use super::*;

/// Which edges of a node are followed during a traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EdgeDirection {
    /// Follow `u -> v`
    #[default]
    Outgoing,
    /// Follow `v -> u` backwards
    Incoming,
    /// Follow both, i.e. treat every edge as undirected
    Undirected,
}

/// Abstraction for items yielded by a traversal iterator.
///
/// Two implementations are provided:
/// - [`Node`] — stores only the node (no predecessor information).
/// - [`PredecessorOfNode`] — stores `(predecessor, node)` pairs.
pub trait SequencedItem: Clone + Copy {
    /// Constructs a new item with a predecessor.
    fn new_with_predecessor(predecessor: Node, item: Node) -> Self;

    /// Constructs a new item without predecessor information.
    fn new_without_predecessor(item: Node) -> Self;

    /// Returns the node represented by this item.
    fn item(&self) -> Node;

    /// Returns the predecessor of this node, if any.
    fn predecessor(&self) -> Option<Node>;
}

impl SequencedItem for Node {
    fn new_with_predecessor(_: Node, item: Node) -> Self {
        item
    }
    fn new_without_predecessor(item: Node) -> Self {
        item
    }
    fn item(&self) -> Node {
        *self
    }
    fn predecessor(&self) -> Option<Node> {
        None
    }
}

/// Compact representation of `(predecessor, node)` used for
/// traversals with parent tracking.
///
/// Roots have no predecessor, which is encoded by setting both entries to the same node.
/// This is unambiguous as graphs cannot contain self-loops.
pub type PredecessorOfNode = (Node, Node);

impl SequencedItem for PredecessorOfNode {
    fn new_with_predecessor(predecessor: Node, item: Node) -> Self {
        (predecessor, item)
    }
    fn new_without_predecessor(item: Node) -> Self {
        (item, item)
    }
    fn item(&self) -> Node {
        self.1
    }
    fn predecessor(&self) -> Option<Node> {
        if self.0 == self.1 { None } else { Some(self.0) }
    }
}

/// Abstraction for the traversal frontier data structure.
///
/// - [`VecDeque`] -> queue semantics -> **BFS**
/// - [`Vec`] -> stack semantics -> **DFS**-like order
pub trait NodeSequencer<T> {
    /// Creates a new sequencer initialized with a single node.
    fn init(u: T) -> Self;

    /// Pushes a node into the frontier.
    fn push(&mut self, item: T);

    /// Removes and returns the next node from the frontier.
    fn pop(&mut self) -> Option<T>;

    /// Returns the number of items currently in the frontier.
    fn cardinality(&self) -> usize;
}

impl<T> NodeSequencer<T> for VecDeque<T> {
    fn init(u: T) -> Self {
        Self::from([u])
    }
    fn push(&mut self, u: T) {
        self.push_back(u)
    }
    fn pop(&mut self) -> Option<T> {
        self.pop_front()
    }
    fn cardinality(&self) -> usize {
        self.len()
    }
}

impl<T> NodeSequencer<T> for Vec<T> {
    fn init(u: T) -> Self {
        vec![u]
    }
    fn push(&mut self, u: T) {
        self.push(u)
    }
    fn pop(&mut self) -> Option<T> {
        self.pop()
    }
    fn cardinality(&self) -> usize {
        self.len()
    }
}

/// Generic traversal iterator.
///
/// Maintains an explicit frontier (queue or stack) of nodes to visit and
/// a bitset of discovered nodes. A node is marked as discovered when it is pushed,
/// so every node is yielded at most once.
pub struct TraversalSearch<'a, G, S, I>
where
    G: WeightedAdjacency,
    S: NodeSequencer<I>,
    I: SequencedItem,
{
    graph: &'a G,
    visited: NodeBitSet,
    sequencer: S,
    direction: EdgeDirection,
    _item: PhantomData<I>,
}

/// A breadth-first search iterator.
pub type BFS<'a, G> = TraversalSearch<'a, G, VecDeque<Node>, Node>;

/// A BFS iterator that yields `(predecessor, node)` pairs.
pub type BFSWithPredecessor<'a, G> =
    TraversalSearch<'a, G, VecDeque<PredecessorOfNode>, PredecessorOfNode>;

/// A stack-based search iterator.
pub type DFS<'a, G> = TraversalSearch<'a, G, Vec<Node>, Node>;

impl<'a, G, S, I> TraversalSearch<'a, G, S, I>
where
    G: WeightedAdjacency,
    S: NodeSequencer<I>,
    I: SequencedItem,
{
    /// Creates a new traversal iterator starting from `start` following outgoing edges.
    /// ** Panics if `start >= n` **
    pub fn new(graph: &'a G, start: Node) -> Self {
        assert!(graph.contains_node(start));
        let mut visited = graph.vertex_bitset_unset();
        visited.insert(start as usize);
        Self {
            graph,
            visited,
            sequencer: S::init(I::new_without_predecessor(start)),
            direction: EdgeDirection::Outgoing,
            _item: PhantomData,
        }
    }

    /// Sets which edges are followed
    pub fn direction(mut self, direction: EdgeDirection) -> Self {
        self.direction = direction;
        self
    }

    /// Returns *true* if `u` was discovered so far
    pub fn did_visit_node(&self, u: Node) -> bool {
        self.visited.contains(u as usize)
    }

    /// Returns the number of nodes discovered so far
    pub fn number_of_visited_nodes(&self) -> usize {
        self.visited.count_ones(..)
    }

    /// Tries to restart the search at the smallest yet undiscovered node and returns
    /// *true* iff successful. Requires that the search came to a hold earlier,
    /// i.e. `self.next()` returned `None`.
    pub fn try_restart_at_unvisited(&mut self) -> bool {
        assert_eq!(self.sequencer.cardinality(), 0);
        match self.graph.vertices_range().find(|&u| !self.did_visit_node(u)) {
            None => false,
            Some(x) => {
                self.visited.insert(x as usize);
                self.sequencer.push(I::new_without_predecessor(x));
                true
            }
        }
    }

    fn discover(&mut self, u: Node, v: Node) {
        if !self.visited.put(v as usize) {
            self.sequencer.push(I::new_with_predecessor(u, v));
        }
    }
}

impl<G, S, I> Iterator for TraversalSearch<'_, G, S, I>
where
    G: WeightedAdjacency,
    S: NodeSequencer<I>,
    I: SequencedItem,
{
    type Item = I;

    fn next(&mut self) -> Option<Self::Item> {
        let popped = self.sequencer.pop()?;
        let u = popped.item();

        let graph = self.graph;
        match self.direction {
            EdgeDirection::Outgoing => graph.out_neighbors_of(u).for_each(|v| self.discover(u, v)),
            EdgeDirection::Incoming => graph.in_neighbors_of(u).for_each(|v| self.discover(u, v)),
            EdgeDirection::Undirected => graph
                .undirected_neighbors_of(u)
                .for_each(|v| self.discover(u, v)),
        }

        Some(popped)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (
            self.sequencer.cardinality(),
            Some(self.graph.len() - self.number_of_visited_nodes() + self.sequencer.cardinality()),
        )
    }
}

/// Exposes traversals directly on graphs.
pub trait Traversal: WeightedAdjacency + Sized {
    /// Returns an iterator traversing nodes reachable from `start` in breadth-first-search order
    /// ** Panics if `start >= n` **
    fn bfs(&self, start: Node) -> BFS<'_, Self> {
        BFS::new(self, start)
    }

    /// Returns an iterator traversing nodes reachable from `start` in depth-first-search order
    /// ** Panics if `start >= n` **
    fn dfs(&self, start: Node) -> DFS<'_, Self> {
        DFS::new(self, start)
    }

    /// Returns an iterator traversing nodes connected to `start` (ignoring edge orientation)
    /// in breadth-first-search order
    /// ** Panics if `start >= n` **
    fn undirected_bfs(&self, start: Node) -> BFS<'_, Self> {
        BFS::new(self, start).direction(EdgeDirection::Undirected)
    }

    /// Same as [`Traversal::undirected_bfs`] but also yields the BFS-tree predecessor of every node
    /// ** Panics if `start >= n` **
    fn undirected_bfs_with_predecessor(&self, start: Node) -> BFSWithPredecessor<'_, Self> {
        BFSWithPredecessor::new(self, start).direction(EdgeDirection::Undirected)
    }

    /// Returns *true* if there is a directed path from `u` to `v`
    /// ** Panics if `u >= n || v >= n` **
    fn is_node_reachable(&self, u: Node, v: Node) -> bool {
        self.bfs(u).any(|x| x == v)
    }
}

impl<G: WeightedAdjacency> Traversal for G {}
