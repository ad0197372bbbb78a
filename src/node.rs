/*!
# Node Representation

Nodes are plain `u32` indices into the adjacency matrix, i.e. row `u` of the matrix
holds the outgoing weights of node `u`. Dense matrices with more than `2^32` rows
would not fit into memory anyway, so `u32` is never the limiting factor.
*/

use std::num::NonZero;

use fixedbitset::FixedBitSet;

/// Nodes can be any unsigned integer from `0` to `Node::MAX - 1`
pub type Node = u32;

/// Node-Value that is considered invalid
pub const INVALID_NODE: Node = Node::MAX;

/// There can be at most `2^32 - 1` nodes in a graph!
pub type NumNodes = Node;

/// BitSet for Nodes (visited-markers, on-path-markers, ...)
pub type NodeBitSet = FixedBitSet;

/// `Option<Node>` needs padding, which doubles the size of predecessor arrays.
/// This uses the `NonZero`-niche instead so that `Option<OptionalNode>` stays 4 bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct OptionalNodeImpl<const N: Node>(NonZero<Node>);

/// `INVALID_NODE` is never a legal row index and thus safe to pick as the `None`-Value
pub type OptionalNode = OptionalNodeImpl<INVALID_NODE>;

impl<const N: Node> OptionalNodeImpl<N> {
    /// Returns `Some(OptionalNodeImpl)` if `n != N` and `None` otherwise
    pub const fn new(n: Node) -> Option<Self> {
        match NonZero::new(n ^ N) {
            Some(inner) => Some(OptionalNodeImpl(inner)),
            None => None,
        }
    }

    /// Gets the underlying Node-Value
    pub const fn get(&self) -> Node {
        self.0.get() ^ N
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn optional_node_roundtrips_every_legal_node() {
        for u in [0, 1, 7, 1 << 20, INVALID_NODE - 1] {
            assert_eq!(OptionalNode::new(u).map(|x| x.get()), Some(u));
        }
        assert!(OptionalNode::new(INVALID_NODE).is_none());
        assert_eq!(size_of::<Option<OptionalNode>>(), size_of::<Node>());
    }
}
