//! # Matrix
//!
//! The plain matrix format stores row `u` of the adjacency matrix in the `u`-th non-comment line,
//! e.g. the path `0 - 1 - 2` is
//! ```text
//! # path on three nodes
//! 0 1 0
//! 1 0 1
//! 0 1 0
//! ```
//! Weights are separated by whitespace unless a separator is configured.
//! The matrix is validated like [`WeightMatrix::from_rows`]; violations are reported as
//! [`ErrorKind::InvalidData`].

use itertools::{Either, Itertools};
use tracing::debug;

use super::*;

/// A GraphReader for the Matrix-Format
#[derive(Debug, Clone)]
pub struct MatrixReader {
    /// Lines starting with `comment_identifier` are skipped when reading
    comment_identifier: String,
    /// Splits weights at this char instead of at whitespace
    separator: Option<char>,
}

impl Default for MatrixReader {
    fn default() -> Self {
        Self {
            comment_identifier: "#".to_string(),
            separator: None,
        }
    }
}

impl MatrixReader {
    /// Creates a new (default) reader
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the comment identifier
    pub fn comment_identifier<S: Into<String>>(mut self, c: S) -> MatrixReader {
        self.comment_identifier = c.into();
        self
    }

    /// Splits rows at `separator` (surrounding whitespace is ignored)
    pub fn separator(mut self, separator: char) -> MatrixReader {
        self.separator = Some(separator);
        self
    }

    /// Parses a single row; `line_number` is only used in error messages
    fn parse_row(&self, line: &str, line_number: usize) -> Result<Vec<Weight>> {
        let tokens = match self.separator {
            Some(sep) => Either::Left(line.split(sep).map(str::trim)),
            None => Either::Right(line.split_whitespace()),
        };

        tokens
            .map(|token| {
                token.parse::<Weight>().map_err(|err| {
                    io_error!(
                        ErrorKind::InvalidData,
                        format!("Cannot parse weight '{token}' in line {line_number}: {err}")
                    )
                })
            })
            .collect()
    }
}

impl GraphReader<WeightMatrix> for MatrixReader {
    fn try_read_graph<R: BufRead>(&self, reader: R) -> Result<WeightMatrix> {
        let mut rows = Vec::new();
        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            let content = line.trim();
            if content.is_empty() || content.starts_with(&self.comment_identifier) {
                continue;
            }
            rows.push(self.parse_row(content, index + 1)?);
        }

        raise_error_unless!(
            !rows.is_empty(),
            ErrorKind::InvalidData,
            ValidationError::Empty
        );

        let graph = WeightMatrix::from_rows(&rows)
            .map_err(|err| io_error!(ErrorKind::InvalidData, err))?;
        debug!(
            nodes = graph.number_of_nodes(),
            edges = graph.number_of_edges(),
            "read adjacency matrix"
        );
        Ok(graph)
    }
}

/// Trait for creating graphs from a MatrixReader.
/// Used as shorthand for default MatrixReader settings
pub trait MatrixRead: Sized {
    /// Tries to read the graph from a given reader
    fn try_read_matrix<R: BufRead>(reader: R) -> Result<Self>;

    /// Tries to read the graph from a given file
    fn try_read_matrix_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::try_read_matrix(BufReader::new(File::open(path)?))
    }
}

impl MatrixRead for WeightMatrix {
    fn try_read_matrix<R: BufRead>(reader: R) -> Result<Self> {
        MatrixReader::default().try_read_graph(reader)
    }
}

/// A writer for the Matrix-Format
#[derive(Debug, Clone)]
pub struct MatrixWriter {
    separator: String,
}

impl Default for MatrixWriter {
    fn default() -> Self {
        Self {
            separator: " ".to_string(),
        }
    }
}

impl MatrixWriter {
    /// Shorthand for default
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the string written between two weights of a row (`" "` by default)
    pub fn separator<S: Into<String>>(mut self, separator: S) -> MatrixWriter {
        self.separator = separator.into();
        self
    }
}

impl<G: WeightedAdjacency> GraphWriter<G> for MatrixWriter {
    fn try_write_graph<W: Write>(&self, graph: &G, mut writer: W) -> Result<()> {
        for u in graph.vertices_range() {
            let row = graph
                .vertices_range()
                .map(|v| graph.edge_weight(u, v))
                .join(&self.separator);
            writeln!(writer, "{row}")?;
        }
        writer.flush()
    }
}

/// Trait for writing a graph to a writer in the Matrix-Format.
/// Shorthand for default settings.
pub trait MatrixWrite {
    /// Tries to write the graph to a writer
    fn try_write_matrix<W: Write>(&self, writer: W) -> Result<()>;

    /// Tries to write the graph to a file
    fn try_write_matrix_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let writer = BufWriter::new(File::create(path)?);
        self.try_write_matrix(writer)
    }
}

impl<G: WeightedAdjacency> MatrixWrite for G {
    fn try_write_matrix<W: Write>(&self, writer: W) -> Result<()> {
        MatrixWriter::default().try_write_graph(self, writer)
    }
}
