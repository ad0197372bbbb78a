//! # Dot
//!
//! The Dot-Format is a very extensive format used by [GraphViz](https://graphviz.org/) to allow
//! for detailed visualizations. We only use basic functionality to draw (colored) nodes and
//! weighted edges; every edge is labelled with its weight.
//!
//! For example, drawing a graph where a shortest path is highlighted in red can be achieved via
//! ```
//! use wgraphs::{prelude::*, algo::*, io::*};
//!
//! let graph = WeightMatrix::from_rows(&[[0, 2, 9], [0, 0, 3], [0, 0, 0]]).unwrap();
//! let path = graph.shortest_path(0, 2).unwrap();
//!
//! let mut writer = Vec::new();
//! let dot_writer = DotWriter::default();
//! dot_writer.start_graph(&mut writer).unwrap();
//! dot_writer.write_edges(&mut writer, graph.weighted_edges(), None).unwrap();
//! dot_writer.highlight_path(&mut writer, &graph, path.nodes().unwrap(), DotColor::Red).unwrap();
//! dot_writer.finish_graph(&mut writer).unwrap();
//! ```
//!
//! Note that for nodes, the latest coloring is the one that will be applied in a visualizer,
//! whereas for edges, each new colored edge adds another edge to the graph.

use std::{fmt::Display, io::Write};

use itertools::Itertools;

use super::*;

/// A writer for the Dot-Format
#[derive(Debug, Clone)]
pub struct DotWriter {
    /// Increment nodes by 1 before writing
    inc_nodes: bool,
    /// Prefix of a node (default: 'v')
    prefix: String,
}

impl Default for DotWriter {
    fn default() -> Self {
        Self {
            inc_nodes: false,
            prefix: "v".to_string(),
        }
    }
}

impl DotWriter {
    /// Shorthand for default
    pub fn new() -> Self {
        Self::default()
    }

    /// If *true*, nodes are written 1-indexed
    pub fn inc_nodes(mut self, inc_nodes: bool) -> Self {
        self.inc_nodes = inc_nodes;
        self
    }

    /// Set the prefix of a node (`v` by default)
    pub fn node_prefix<S>(mut self, prefix: S) -> DotWriter
    where
        S: Into<String>,
    {
        self.prefix = prefix.into();
        self
    }

    /// Writes the opening brackets of the (always directed) graph
    pub fn start_graph<W>(&self, writer: &mut W) -> Result<()>
    where
        W: Write,
    {
        writeln!(writer, "digraph {{")
    }

    /// Formats a node depending on `self.prefix, self.inc_nodes`
    fn format_node(&self, u: Node) -> String {
        let u = u + self.inc_nodes as Node;
        format!("{}{u}", self.prefix)
    }

    /// Writes every node, so that isolated nodes are drawn as well
    pub fn write_nodes<W, I>(&self, writer: &mut W, nodes: I) -> Result<()>
    where
        W: Write,
        I: IntoIterator<Item = Node>,
    {
        let nodes = nodes.into_iter().map(|u| self.format_node(u)).join(";");
        writeln!(writer, "{nodes};")
    }

    /// Writes an iterator of weighted edges to `writer`, labelled with their weights
    pub fn write_edges<W, I>(&self, writer: &mut W, edges: I, color: Option<DotColor>) -> Result<()>
    where
        W: Write,
        I: IntoIterator<Item = WeightedEdge>,
    {
        let edge_color = match color {
            Some(c) => format!(", color={c}"),
            None => String::new(),
        };

        for WeightedEdge(u, v, w) in edges {
            write!(
                writer,
                "{}->{}[label=\"{w}\"{edge_color}];",
                self.format_node(u),
                self.format_node(v)
            )?;
        }
        writeln!(writer)
    }

    /// Draws the walk `nodes` on top of the graph: its nodes are filled and its edges
    /// are redrawn in `color`.
    /// ** Panics if a node of the walk is not in `graph` **
    pub fn highlight_path<W, G>(
        &self,
        writer: &mut W,
        graph: &G,
        nodes: &[Node],
        color: DotColor,
    ) -> Result<()>
    where
        W: Write,
        G: WeightedAdjacency,
    {
        self.color_nodes(writer, nodes.iter().copied(), color)?;
        self.write_edges(
            writer,
            nodes
                .iter()
                .tuple_windows()
                .map(|(&u, &v)| WeightedEdge(u, v, graph.edge_weight(u, v))),
            Some(color),
        )
    }

    /// Writes a list of colored nodes to `writer`.
    pub fn color_nodes<W, I>(&self, writer: &mut W, nodes: I, color: DotColor) -> Result<()>
    where
        W: Write,
        I: IntoIterator<Item = Node>,
    {
        for u in nodes {
            write!(
                writer,
                "{}[style=filled, color={color}];",
                self.format_node(u)
            )?;
        }
        writeln!(writer)
    }

    /// Closes the Dot-Graph, thus finishing the graph
    pub fn finish_graph<W>(&self, writer: &mut W) -> Result<()>
    where
        W: Write,
    {
        writeln!(writer, "}}")
    }
}

impl<G> GraphWriter<G> for DotWriter
where
    G: WeightedAdjacency,
{
    fn try_write_graph<W>(&self, graph: &G, mut writer: W) -> Result<()>
    where
        W: Write,
    {
        self.start_graph(&mut writer)?;
        if !graph.is_empty() {
            self.write_nodes(&mut writer, graph.vertices_range())?;
        }
        self.write_edges(&mut writer, graph.weighted_edges(), None)?;
        self.finish_graph(&mut writer)
    }
}

/// Trait for writing a graph to a writer in the Dot-Format.
/// Shorthand for default settings.
pub trait DotWrite {
    /// Tries to write the graph to a writer
    fn try_write_dot<W>(&self, writer: W) -> Result<()>
    where
        W: Write;

    /// Tries to write the graph to a file
    fn try_write_dot_file<P>(&self, path: P) -> Result<()>
    where
        P: AsRef<Path>,
    {
        let writer = BufWriter::new(File::create(path)?);
        self.try_write_dot(writer)
    }
}

impl<G> DotWrite for G
where
    G: WeightedAdjacency,
{
    fn try_write_dot<W>(&self, writer: W) -> Result<()>
    where
        W: Write,
    {
        DotWriter::default().try_write_graph(self, writer)
    }
}

impl Display for DotColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", format!("{self:?}").to_lowercase())
    }
}

/// A selection of the colors known to Svg-Dot, see
/// `https://graphviz.gitlab.io/doc/info/colors.html#svg`
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum DotColor {
    Black,
    Blue,
    Crimson,
    DarkGreen,
    Gold,
    Gray,
    Green,
    LightBlue,
    Orange,
    Purple,
    Red,
    Teal,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn write_weighted_digraph() {
        let graph = WeightMatrix::from_rows(&[[0, 4, 0], [-1, 0, 0], [0, 0, 0]]).unwrap();

        let mut buffer = Vec::new();
        graph.try_write_dot(&mut buffer).unwrap();
        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "digraph {\nv0;v1;v2;\nv0->v1[label=\"4\"];v1->v0[label=\"-1\"];\n}\n"
        );
    }

    #[test]
    fn prefix_and_highlighting() {
        let graph = WeightMatrix::from_rows(&[[0, 2], [0, 0]]).unwrap();
        let dot_writer = DotWriter::new().node_prefix("n").inc_nodes(true);

        let mut buffer = Vec::new();
        dot_writer.start_graph(&mut buffer).unwrap();
        dot_writer
            .highlight_path(&mut buffer, &graph, &[0, 1], DotColor::DarkGreen)
            .unwrap();
        dot_writer.finish_graph(&mut buffer).unwrap();

        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "digraph {\n\
             n1[style=filled, color=darkgreen];n2[style=filled, color=darkgreen];\n\
             n1->n2[label=\"2\", color=darkgreen];\n\
             }\n"
        );
    }
}
