//! # Display
//!
//! Human-readable output of a graph:
//! - [`GraphSummary`] prints the size of the graph in a single sentence.
//! - [`MatrixView`] prints the matrix with row and column indices, e.g.
//! ```text
//!  |  0  1  2
//! -----------
//! 0|  0  1  0
//! 1|  1  0  1
//! 2|  0 -3  0
//! ```
//! Columns are right-aligned to a common width.

use std::fmt::Display;

use itertools::Itertools;

use super::*;

/// Displays the number of vertices and edges of a graph.
///
/// # Examples
/// ```
/// use wgraphs::{prelude::*, io::*};
///
/// let graph = WeightMatrix::from_rows(&[[0, 1], [1, 0]]).unwrap();
/// assert_eq!(GraphSummary(&graph).to_string(), "Graph with 2 vertices and 2 edges.");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct GraphSummary<'a, G>(pub &'a G);

impl<G> Display for GraphSummary<'_, G>
where
    G: GraphNodeOrder + GraphEdgeOrder,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Graph with {} vertices and {} edges.",
            self.0.number_of_nodes(),
            self.0.number_of_edges()
        )
    }
}

/// Writes a matrix with row and column indices.
#[derive(Debug, Clone, Copy, Default)]
pub struct MatrixView {
    /// Minimum width of a column
    width: usize,
}

impl MatrixView {
    /// Shorthand for default
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the minimum width of every column; wider entries still widen the column
    pub fn width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Renders the view into a string
    pub fn render<G>(&self, graph: &G) -> String
    where
        G: WeightedAdjacency,
    {
        let mut buffer = Vec::new();
        // writing into a `Vec` never fails
        let _ = self.try_write_graph(graph, &mut buffer);
        String::from_utf8_lossy(&buffer).into_owned()
    }
}

impl<G> GraphWriter<G> for MatrixView
where
    G: WeightedAdjacency,
{
    fn try_write_graph<W: Write>(&self, graph: &G, mut writer: W) -> Result<()> {
        let label_width = graph.number_of_nodes().saturating_sub(1).to_string().len();
        let width = graph
            .weighted_edges()
            .map(|e| e.weight().to_string().len())
            .chain(std::iter::once(label_width))
            .max()
            .unwrap_or(1)
            .max(self.width);

        let header = format!(
            "{:label_width$}| {}",
            "",
            graph
                .vertices_range()
                .map(|v| format!("{v:>width$}"))
                .join(" ")
        );
        writeln!(writer, "{}", header.trim_end())?;
        writeln!(writer, "{}", "-".repeat(header.len()))?;

        for u in graph.vertices_range() {
            let row = graph
                .vertices_range()
                .map(|v| format!("{:>width$}", graph.edge_weight(u, v)))
                .join(" ");
            writeln!(writer, "{u:>label_width$}| {row}")?;
        }

        writer.flush()
    }
}
