use std::{
    cmp::Ordering,
    ops::{Add, Mul, Neg, Sub},
};

use tracing::debug;

use super::*;
use crate::algo::Containment;

impl WeightMatrix {
    fn ensure_same_order(&self, other: &Self) -> Result<()> {
        if self.number_of_nodes() != other.number_of_nodes() {
            return Err(GraphError::DimensionMismatch {
                left: self.number_of_nodes(),
                right: other.number_of_nodes(),
            });
        }
        Ok(())
    }

    /// Builds a new graph by applying `op` to every cell; `None` signals an overflow.
    /// The result is validated before it is returned.
    fn map_cells<F>(&self, operation: &'static str, op: F) -> Result<Self>
    where
        F: Fn(Weight) -> Option<Weight>,
    {
        let cells = self
            .cells()
            .iter()
            .map(|&w| op(w))
            .collect::<Option<Vec<_>>>()
            .ok_or(GraphError::Overflow(operation))?;
        Self::validated(self.number_of_nodes(), cells, operation)
    }

    /// Builds a new graph by combining corresponding cells of `self` and `other`.
    fn zip_cells<F>(&self, other: &Self, operation: &'static str, op: F) -> Result<Self>
    where
        F: Fn(Weight, Weight) -> Option<Weight>,
    {
        self.ensure_same_order(other)?;
        let cells = self
            .cells()
            .iter()
            .zip(other.cells())
            .map(|(&a, &b)| op(a, b))
            .collect::<Option<Vec<_>>>()
            .ok_or(GraphError::Overflow(operation))?;
        Self::validated(self.number_of_nodes(), cells, operation)
    }

    fn validated(n: NumNodes, cells: Vec<Weight>, operation: &'static str) -> Result<Self> {
        Self::try_from_cells(n, cells).map_err(|err| {
            debug!(%err, operation, "graph algebra produced an invalid graph");
            err.into()
        })
    }

    /// Element-wise sum of two graphs of equal order.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::prelude::*;
    ///
    /// let a = WeightMatrix::from_rows(&[[0, 1], [0, 0]]).unwrap();
    /// let b = WeightMatrix::from_rows(&[[0, 2], [3, 0]]).unwrap();
    /// assert_eq!((&a + &b).unwrap().to_rows(), vec![vec![0, 3], vec![3, 0]]);
    /// ```
    pub fn try_add(&self, other: &Self) -> Result<Self> {
        self.zip_cells(other, "addition", Weight::checked_add)
    }

    /// Element-wise difference of two graphs of equal order.
    pub fn try_sub(&self, other: &Self) -> Result<Self> {
        self.zip_cells(other, "subtraction", Weight::checked_sub)
    }

    /// In-place version of [`WeightMatrix::try_add`]; `self` is unchanged on failure.
    pub fn try_add_assign(&mut self, other: &Self) -> Result<()> {
        *self = self.try_add(other)?;
        Ok(())
    }

    /// In-place version of [`WeightMatrix::try_sub`]; `self` is unchanged on failure.
    pub fn try_sub_assign(&mut self, other: &Self) -> Result<()> {
        *self = self.try_sub(other)?;
        Ok(())
    }

    /// Negates every weight.
    pub fn negated(&self) -> Result<Self> {
        self.map_cells("unary minus", Weight::checked_neg)
    }

    /// Returns a copy with every weight multiplied by `scalar`.
    pub fn scaled(&self, scalar: Weight) -> Result<Self> {
        self.map_cells("scalar multiplication", |w| w.checked_mul(scalar))
    }

    /// Multiplies every weight by `scalar` in place; `self` is unchanged on failure.
    /// Scaling by `0` removes all edges.
    pub fn scale(&mut self, scalar: Weight) -> Result<()> {
        *self = self.scaled(scalar)?;
        Ok(())
    }

    /// Matrix product of two graphs of equal order.
    /// The diagonal of the product is cleared, as self-loops are not representable.
    ///
    /// # Examples
    /// ```
    /// use wgraphs::prelude::*;
    ///
    /// let a = WeightMatrix::from_rows(&[[0, 1, 0], [0, 0, 2], [3, 0, 0]]).unwrap();
    /// let square = (&a * &a).unwrap();
    /// assert_eq!(square.to_rows(), vec![vec![0, 0, 2], vec![6, 0, 0], vec![0, 3, 0]]);
    /// ```
    pub fn try_mul(&self, other: &Self) -> Result<Self> {
        const OPERATION: &str = "matrix multiplication";
        self.ensure_same_order(other)?;

        let n = self.number_of_nodes();
        let mut cells = Vec::with_capacity(self.cells().len());
        for u in 0..n {
            for v in 0..n {
                if u == v {
                    cells.push(0);
                    continue;
                }

                // `n` products of two `i32` cannot overflow `i128`
                let sum: i128 = (0..n)
                    .map(|k| i128::from(self.edge_weight(u, k)) * i128::from(other.edge_weight(k, v)))
                    .sum();
                cells.push(Weight::try_from(sum).map_err(|_| GraphError::Overflow(OPERATION))?);
            }
        }

        Self::validated(n, cells, OPERATION)
    }

    /// Adds `1` to the weight of every existing edge; absent edges stay absent.
    /// An edge of weight `-1` becomes `0` and thus disappears.
    pub fn increment(&mut self) -> Result<()> {
        *self = self.map_cells("increment", |w| {
            if w == 0 { Some(0) } else { w.checked_add(1) }
        })?;
        Ok(())
    }

    /// Subtracts `1` from the weight of every existing edge; absent edges stay absent.
    /// An edge of weight `1` becomes `0` and thus disappears.
    pub fn decrement(&mut self) -> Result<()> {
        *self = self.map_cells("decrement", |w| {
            if w == 0 { Some(0) } else { w.checked_sub(1) }
        })?;
        Ok(())
    }
}

impl Add for &WeightMatrix {
    type Output = Result<WeightMatrix>;

    fn add(self, rhs: Self) -> Self::Output {
        self.try_add(rhs)
    }
}

impl Sub for &WeightMatrix {
    type Output = Result<WeightMatrix>;

    fn sub(self, rhs: Self) -> Self::Output {
        self.try_sub(rhs)
    }
}

impl Neg for &WeightMatrix {
    type Output = Result<WeightMatrix>;

    fn neg(self) -> Self::Output {
        self.negated()
    }
}

impl Mul<Weight> for &WeightMatrix {
    type Output = Result<WeightMatrix>;

    fn mul(self, rhs: Weight) -> Self::Output {
        self.scaled(rhs)
    }
}

impl Mul for &WeightMatrix {
    type Output = Result<WeightMatrix>;

    fn mul(self, rhs: Self) -> Self::Output {
        self.try_mul(rhs)
    }
}

/// Graphs are ordered by containment first: if `a` is found (as a weighted pattern) inside `b`,
/// then `a < b`. If neither contains the other, the graph with fewer edges is smaller.
/// Graphs with the same number of edges and no containment in either direction are incomparable.
///
/// # Examples
/// ```
/// use wgraphs::prelude::*;
///
/// let small = WeightMatrix::from_rows(&[[0, 5], [0, 0]]).unwrap();
/// let large = WeightMatrix::from_rows(&[[0, 0, 0], [0, 0, 5], [1, 0, 0]]).unwrap();
/// assert!(small < large);
/// assert!(large >= small);
/// ```
impl PartialOrd for WeightMatrix {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self == other {
            return Some(Ordering::Equal);
        }

        if self.is_contained_in(other) {
            return Some(Ordering::Less);
        }

        if other.is_contained_in(self) {
            return Some(Ordering::Greater);
        }

        match self.number_of_edges().cmp(&other.number_of_edges()) {
            Ordering::Equal => None,
            ord => Some(ord),
        }
    }
}
