//! Error types for loading, editing and querying graphs.
//!
//! - **`ValidationError`**: a matrix violates the structural rules of a graph
//!   (empty, not square, self-loop on the diagonal).
//! - **`GraphError`**: failures of the graph algebra, wrapping `ValidationError`.
//! - **`QueryError`**: a shortest-path request that cannot be answered at all.
//!
//! None of these are recoverable internally. A failed operation never leaves
//! its receiver partially modified.

use thiserror::Error;

use crate::{Node, NumNodes, Weight};

/// Result type for graph loading and graph algebra.
pub type Result<T> = std::result::Result<T, GraphError>;

/// A matrix that cannot be interpreted as a graph.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Invalid graph: The graph is empty.")]
    Empty,

    #[error("Invalid graph: The graph is not a square matrix (row {row} has {found} entries, expected {expected}).")]
    NotSquare {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("Invalid graph: The graph contains non-zero diagonal elements (node {node} has weight {weight}).")]
    NonZeroDiagonal { node: Node, weight: Weight },
}

/// Failure of a graph algebra operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Graphs must have the same dimensions ({left} vs. {right} vertices).")]
    DimensionMismatch { left: NumNodes, right: NumNodes },

    #[error("Weight overflow during {0}.")]
    Overflow(&'static str),
}

/// A shortest-path request rejected before any work is done.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("Invalid request - path to itself")]
    PathToItself,

    #[error("Invalid start or end vertex")]
    InvalidVertex { start: Node, end: Node },
}
