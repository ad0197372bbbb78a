/*!
`wgraphs` is a small library for **w**eighted directed graphs stored as dense adjacency matrices.

# Representation

We represent **nodes** as `u32` in the range `0..n` where `n` is the number of rows of the matrix.
Cell `[u][v]` holds the signed [`Weight`] of the edge `u -> v`, where `0` means *no edge*.
Self-loops cannot be represented: the diagonal of a graph is always zero.

The only representation is [`WeightMatrix`](crate::repr::WeightMatrix). It is loaded once from
a list of rows (replace-or-fail) and is afterwards only changed by the graph algebra
(`+`, `-`, `*`, negation, increment/decrement), every operation of which validates
its result before committing it.

# Design

All algorithms are implemented as traits on the graph itself, making them usable without
any setup, e.g. `graph.is_connected()` or `graph.shortest_path(0, 2)`.
Algorithms with knobs (such as [`BellmanFord`](crate::algo::BellmanFord)) are also available as
configurable structs using the *Builder* pattern.
Queries only ever borrow the graph immutably.

Results that are meant to be shown to a human (cycles, paths, bipartitions) are returned as
typed values implementing `Display`, so callers can either inspect them or print them directly.

# Usage

There are *3* submodules you probably want to interact with:
- [`prelude`] includes definitions for nodes, edges, errors, basic graph operations, and the matrix representation,
- [`algo`] includes the algorithm traits: connectivity, bipartiteness, cycle detection, Bellman-Ford shortest paths, containment,
- [`io`] includes readers/writers for plain matrix files and GraphViz, as well as textual summaries.

In most use-cases, `use wgraphs::{prelude::*, algo::*};` suffices for your needs.

```
use wgraphs::{prelude::*, algo::*};

let graph = WeightMatrix::from_rows(&[[0, 1, 0], [1, 0, 1], [0, 1, 0]]).unwrap();

assert!(graph.is_connected());
assert_eq!(graph.shortest_path(0, 2).unwrap().to_string(), "0->1->2");
assert_eq!(graph.bipartiteness().to_string(), "The graph is bipartite: A={0, 2}, B={1}.");
```
*/

pub mod algo;
pub mod edge;
pub mod error;
pub mod io;
pub mod node;
pub mod ops;
pub mod repr;
#[cfg(test)]
pub(crate) mod testing;

pub use edge::*;
pub use node::*;

/// `wgraphs::prelude` includes definitions for nodes and edges, errors, all basic graph operation traits as well as the matrix representation.
pub mod prelude {
    pub use super::{
        edge::*,
        error::{GraphError, QueryError, ValidationError},
        node::*,
        ops::*,
        repr::*,
    };
}
