use std::fmt::{Debug, Display};

use crate::Node;

/// Signed edge weight as stored in a matrix cell. `0` encodes the absence of an edge.
pub type Weight = i32;

/// Accumulated path length. Wider than [`Weight`] so that `n - 1` relaxations can never overflow.
pub type Distance = i64;

/// Number of non-zero off-diagonal cells; `n^2` cells fit into `u64` for every `n: u32`.
pub type NumEdges = u64;

/// A directed edge `(u, v)` together with the weight of matrix cell `[u][v]`.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WeightedEdge(pub Node, pub Node, pub Weight);

impl WeightedEdge {
    pub fn weight(&self) -> Weight {
        self.2
    }
}

impl Display for WeightedEdge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{}:{})", self.0, self.1, self.2)
    }
}

impl Debug for WeightedEdge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}

impl From<(Node, Node, Weight)> for WeightedEdge {
    fn from(value: (Node, Node, Weight)) -> Self {
        WeightedEdge(value.0, value.1, value.2)
    }
}
