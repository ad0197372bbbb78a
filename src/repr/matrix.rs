use std::fmt::Debug;

use tracing::debug;

use super::*;

/// A directed, weighted graph stored as a dense `n x n` matrix.
///
/// - Cell `[u][v]` is the weight of the edge `u -> v`, `0` meaning no edge.
/// - The diagonal is always zero, i.e. there are no self-loops.
/// - `number_of_edges` always equals the number of non-zero cells.
///
/// The default value is the empty `0 x 0` store which has to be populated via
/// [`WeightMatrix::load`] before it becomes a graph.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct WeightMatrix {
    n: NumNodes,
    cells: Vec<Weight>,
    num_edges: NumEdges,
}

impl WeightMatrix {
    /// Creates a graph from a list of rows.
    ///
    /// # Errors
    /// Fails if `rows` is empty, not square, or has a non-zero diagonal entry.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::prelude::*;
    ///
    /// let graph = WeightMatrix::from_rows(&[[0, 4], [-2, 0]]).unwrap();
    /// assert_eq!(graph.number_of_nodes(), 2);
    /// assert_eq!(graph.number_of_edges(), 2);
    /// assert_eq!(graph.edge_weight(1, 0), -2);
    ///
    /// assert!(WeightMatrix::from_rows(&[[1, 0], [0, 0]]).is_err());
    /// ```
    pub fn from_rows<R>(rows: &[R]) -> std::result::Result<Self, ValidationError>
    where
        R: AsRef<[Weight]>,
    {
        let n = rows.len();
        if n == 0 {
            return Err(ValidationError::Empty);
        }

        let mut cells = Vec::with_capacity(n * n);
        for (row, weights) in rows.iter().enumerate() {
            let weights = weights.as_ref();
            if weights.len() != n {
                return Err(ValidationError::NotSquare {
                    row,
                    expected: n,
                    found: weights.len(),
                });
            }
            cells.extend_from_slice(weights);
        }

        Self::try_from_cells(n as NumNodes, cells)
    }

    /// Validates `cells` as a row-major `n x n` matrix and computes the number of edges.
    pub(crate) fn try_from_cells(
        n: NumNodes,
        cells: Vec<Weight>,
    ) -> std::result::Result<Self, ValidationError> {
        debug_assert_eq!(cells.len(), (n as usize) * (n as usize));
        if n == 0 {
            return Err(ValidationError::Empty);
        }

        let stride = n as usize + 1;
        if let Some(node) = (0..n).find(|&u| cells[u as usize * stride] != 0) {
            return Err(ValidationError::NonZeroDiagonal {
                node,
                weight: cells[node as usize * stride],
            });
        }

        let num_edges = cells.iter().filter(|&&w| w != 0).count() as NumEdges;
        Ok(Self {
            n,
            cells,
            num_edges,
        })
    }

    /// Replaces the whole matrix by `rows`.
    ///
    /// The matrix is only replaced if `rows` is a valid graph;
    /// otherwise `self` is left untouched and the error is returned.
    pub fn load<R>(&mut self, rows: &[R]) -> std::result::Result<(), ValidationError>
    where
        R: AsRef<[Weight]>,
    {
        let graph = Self::from_rows(rows).inspect_err(|err| debug!(%err, "rejected matrix"))?;
        debug!(
            nodes = graph.n,
            edges = graph.num_edges,
            "loaded adjacency matrix"
        );
        *self = graph;
        Ok(())
    }

    /// Returns the outgoing weights of `u`, i.e. row `u` of the matrix.
    /// ** Panics if `u >= n` **
    pub fn row(&self, u: Node) -> &[Weight] {
        assert!(u < self.n);
        let n = self.n as usize;
        &self.cells[u as usize * n..(u as usize + 1) * n]
    }

    /// Returns an iterator over all rows of the matrix.
    pub fn rows(&self) -> impl Iterator<Item = &[Weight]> + '_ {
        self.cells.chunks(self.len().max(1))
    }

    /// Copies the matrix into a list of rows
    pub fn to_rows(&self) -> Vec<Vec<Weight>> {
        self.rows().map(<[Weight]>::to_vec).collect()
    }

    /// Row-major view of all cells
    pub(crate) fn cells(&self) -> &[Weight] {
        &self.cells
    }
}

impl GraphNodeOrder for WeightMatrix {
    fn number_of_nodes(&self) -> NumNodes {
        self.n
    }
}

impl GraphEdgeOrder for WeightMatrix {
    fn number_of_edges(&self) -> NumEdges {
        self.num_edges
    }
}

impl WeightedAdjacency for WeightMatrix {
    #[inline]
    fn edge_weight(&self, u: Node, v: Node) -> Weight {
        assert!(u < self.n && v < self.n);
        self.cells[u as usize * self.n as usize + v as usize]
    }

    // The row is contiguous, so there is no need to go through `edge_weight` for every cell
    fn out_neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.row(u)
            .iter()
            .enumerate()
            .filter_map(|(v, &w)| (w != 0).then_some(v as Node))
    }
}

impl Debug for WeightMatrix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.rows()).finish()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn load_rejects_malformed_matrices() {
        let empty: [[Weight; 0]; 0] = [];
        assert_eq!(
            WeightMatrix::from_rows(&empty),
            Err(ValidationError::Empty)
        );

        let diagonal = [[1, 0, 0], [0, 1, 0], [0, 0, 1]];
        assert_eq!(
            WeightMatrix::from_rows(&diagonal),
            Err(ValidationError::NonZeroDiagonal { node: 0, weight: 1 })
        );

        let not_square = vec![vec![0, 0, 0], vec![0, 0, 0]];
        assert!(matches!(
            WeightMatrix::from_rows(&not_square),
            Err(ValidationError::NotSquare { .. })
        ));

        let ragged = vec![vec![0, 1], vec![1, 0, 0]];
        assert_eq!(
            WeightMatrix::from_rows(&ragged),
            Err(ValidationError::NotSquare {
                row: 1,
                expected: 2,
                found: 3
            })
        );
    }

    #[test]
    fn load_counts_directed_edges() {
        for n in 1..10 {
            let rows: Vec<Vec<Weight>> = (0..n)
                .map(|u| (0..n).map(|v| if u == v { 0 } else { 1 }).collect())
                .collect();
            let graph = WeightMatrix::from_rows(&rows).unwrap();

            assert_eq!(graph.number_of_nodes(), n as NumNodes);
            assert_eq!(graph.number_of_edges(), (n * (n - 1)) as NumEdges);
            assert_eq!(graph.to_rows(), rows);
        }

        let graph = WeightMatrix::from_rows(&[[0, -3, 0], [-3, 0, 0], [0, 5, 0]]).unwrap();
        assert_eq!(graph.number_of_edges(), 3);
        assert_eq!(graph.out_neighbors_of(1).collect::<Vec<_>>(), vec![0]);
        assert_eq!(graph.in_neighbors_of(1).collect::<Vec<_>>(), vec![0, 2]);
        assert_eq!(graph.undirected_neighbors_of(2).collect::<Vec<_>>(), vec![1]);
        assert!(graph.has_bidirected_edge(0, 1));
        assert!(!graph.has_bidirected_edge(1, 2));
        assert!(graph.has_undirected_edge(1, 2));
    }

    #[test]
    fn failed_load_keeps_previous_graph() {
        let mut graph = WeightMatrix::default();
        assert!(graph.is_empty());
        assert_eq!(graph.number_of_edges(), 0);

        graph.load(&[[0, 2], [0, 0]]).unwrap();
        let before = graph.clone();

        assert!(graph.load(&[[0, 1], [1, 7]]).is_err());
        assert!(graph.load(&[[0, 1, 0], [1, 0, 1]]).is_err());
        assert_eq!(graph, before);

        graph.load(&[[0]]).unwrap();
        assert_eq!(graph.number_of_nodes(), 1);
        assert_eq!(graph.number_of_edges(), 0);
    }

    #[test]
    fn rows_of_empty_store() {
        let graph = WeightMatrix::default();
        assert_eq!(graph.rows().count(), 0);
        assert!(graph.to_rows().is_empty());
        assert_eq!(format!("{graph:?}"), "[]");
    }
}
