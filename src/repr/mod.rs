/*!
# Graph Representation

Graphs are stored as a dense, row-major adjacency matrix of signed weights, see [`WeightMatrix`].

The graph algebra (`+`, `-`, `*`, negation, increment/decrement) and the containment-based
ordering of graphs are implemented in the `algebra` submodule on the same type.
*/

use crate::{error::*, ops::*, *};

mod algebra;
mod matrix;

pub use matrix::*;
