/*!
# Graph Algorithms

This module provides the **graph algorithms** of this crate. Every algorithm is exposed as a trait
that is implemented for all graphs providing [`WeightedAdjacency`], so after
```rust
use wgraphs::algo::*;
```
queries such as `graph.is_connected()`, `graph.find_cycle()` or `graph.shortest_path(0, 2)` are available.

All algorithms only read the graph. Algorithms with explicit state or configuration
([`TraversalSearch`], [`BellmanFord`]) are also available as structs.
*/

mod bellman_ford;
mod bipartite;
mod connectivity;
mod containment;
mod cycles;
mod shortest_path;
mod traversal;

use itertools::Itertools;

use crate::prelude::*;

pub use bellman_ford::*;
pub use bipartite::*;
pub use connectivity::*;
pub use containment::*;
pub use cycles::*;
pub use shortest_path::*;
pub use traversal::*;

/// Renders a walk as `u0->u1->...->uk`
pub(crate) fn format_walk(nodes: &[Node]) -> String {
    nodes.iter().join("->")
}
