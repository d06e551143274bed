/*!
# Adjacency-Matrix Representation

A [`MatrixGraph`] stores a square `n x n` matrix of [`Cell`]s in row-major order.
Cell `(u, v)` is `None` if there is no edge from `u` to `v` and `Some(weight)` otherwise.
It suits dense graphs and uniform per-cell transforms.

The matrix is validated eagerly on construction and on every mutation:
- it is square,
- present cells are homogeneous: either all [`EdgeWeight::Unweighted`] or all numeric.

Absent cells never take part in the homogeneity check. A matrix without any present cell
has no weighting yet; the first edge set on it decides (unless a weighting was declared via
[`MatrixGraph::with_weighting`]). This weighting only governs which cells are admissible;
[`GraphWeighting::is_weighted`] is derived from the present cells.

A matrix is **undirected** iff it is symmetric.
*/

use std::fmt::Display;

use itertools::Itertools;
use log::{debug, trace};

use super::*;

/// Content of a single matrix entry: `None` encodes "no edge"
pub type Cell = Option<EdgeWeight>;

/// Conversion of plain values into matrix cells.
///
/// `false` is the absent edge, `true` an unweighted edge, and a number a weighted edge.
pub trait IntoCell {
    fn into_cell(self) -> Cell;
}

impl IntoCell for bool {
    fn into_cell(self) -> Cell {
        self.then_some(EdgeWeight::Unweighted)
    }
}

impl IntoCell for f64 {
    fn into_cell(self) -> Cell {
        Some(EdgeWeight::Weighted(self))
    }
}

impl IntoCell for EdgeWeight {
    fn into_cell(self) -> Cell {
        Some(self)
    }
}

impl IntoCell for Cell {
    fn into_cell(self) -> Cell {
        self
    }
}

/// A graph stored as a validated square adjacency matrix
#[derive(Debug, Clone, PartialEq)]
pub struct MatrixGraph {
    n: NumNodes,
    cells: Vec<Cell>,
    weighting: Option<Weighting>,
}

impl MatrixGraph {
    /// Creates a matrix of `n` nodes without edges and without weighting
    pub fn new(n: NumNodes) -> Self {
        Self {
            n,
            cells: vec![None; (n as usize) * (n as usize)],
            weighting: None,
        }
    }

    /// Creates a matrix of `n` nodes without edges that only accepts edges of the given weighting
    pub fn with_weighting(n: NumNodes, weighting: Weighting) -> Self {
        Self {
            weighting: Some(weighting),
            ..Self::new(n)
        }
    }

    /// Creates a matrix from its rows.
    ///
    /// # Errors
    /// - [`GraphError::NotSquare`] if a row does not have exactly as many cells as there are rows,
    /// - [`GraphError::MixedWeighting`] if numeric and unweighted cells are mixed,
    /// - [`GraphError::InvalidWeight`] if a weight is NaN.
    pub fn from_rows<R, C>(rows: impl IntoIterator<Item = R>) -> Result<Self>
    where
        R: IntoIterator<Item = C>,
        C: IntoCell,
    {
        let rows = rows
            .into_iter()
            .map(|row| row.into_iter().map(IntoCell::into_cell).collect_vec())
            .collect_vec();

        let n = rows.len();
        if let Some((row, cells)) = rows.iter().enumerate().find(|(_, r)| r.len() != n) {
            return Err(GraphError::NotSquare {
                row,
                len: cells.len(),
                expected: n,
            });
        }

        let graph = Self::from_cells(n as NumNodes, rows.into_iter().flatten().collect(), None)?;
        debug!(
            "Created MatrixGraph with {} vertices and {} present cells",
            graph.n,
            graph.number_of_edges()
        );
        Ok(graph)
    }

    /// Wraps row-major `cells` after checking their homogeneity.
    /// If no cell is present, the weighting falls back to `fallback`.
    fn from_cells(n: NumNodes, cells: Vec<Cell>, fallback: Option<Weighting>) -> Result<Self> {
        debug_assert_eq!(cells.len(), (n as usize) * (n as usize));
        let weighting = common_weighting(cells.iter().flatten())?.or(fallback);
        Ok(Self {
            n,
            cells,
            weighting,
        })
    }

    /// Builds a new `n x n` cell vector where cell `(u, v)` is `f(u, v)`
    fn build_cells<F>(&self, mut f: F) -> Vec<Cell>
    where
        F: FnMut(Node, Node) -> Cell,
    {
        self.vertices_range()
            .cartesian_product(self.vertices_range())
            .map(|(u, v)| f(u, v))
            .collect()
    }

    #[inline]
    fn index(&self, u: Node, v: Node) -> usize {
        (u as usize) * (self.n as usize) + (v as usize)
    }

    fn check_range(&self, u: Node, v: Node) -> Result<()> {
        if self.is_valid_edge(u, v) {
            Ok(())
        } else {
            Err(GraphError::VertexOutOfRange { u, v, n: self.n })
        }
    }

    /// Returns the number of vertices
    pub fn cardinality(&self) -> NumNodes {
        self.n
    }

    /// Returns the weighting of the matrix, `None` if it was not decided yet
    pub fn weighting(&self) -> Option<Weighting> {
        self.weighting
    }

    /// Returns the cell `(u, v)`.
    /// ** Panics if `u >= n || v >= n` **
    pub fn cell(&self, u: Node, v: Node) -> Cell {
        assert!(self.is_valid_edge(u, v));
        self.cells[self.index(u, v)]
    }

    /// Returns the cell `(u, v)` or a range error if it does not exist
    pub fn get_edge(&self, u: Node, v: Node) -> Result<Cell> {
        self.check_range(u, v)?;
        Ok(self.cells[self.index(u, v)])
    }

    /// Returns the weight of the edge `(u, v)`, `None` if there is no such edge.
    ///
    /// # Errors
    /// - [`GraphError::VertexOutOfRange`] if `u` or `v` do not exist,
    /// - [`GraphError::NotWeighted`] if the matrix does not admit weighted edges.
    pub fn get_weight(&self, u: Node, v: Node) -> Result<Option<f64>> {
        let cell = self.get_edge(u, v)?;
        if self.weighting != Some(Weighting::Weighted) {
            return Err(GraphError::NotWeighted { u, v });
        }
        Ok(cell.and_then(|w| w.value()))
    }

    /// Sets the cell `(u, v)`.
    ///
    /// # Errors
    /// - [`GraphError::VertexOutOfRange`] if `u` or `v` do not exist,
    /// - [`GraphError::MixedWeighting`] if a present cell does not match the weighting of the matrix,
    /// - [`GraphError::InvalidWeight`] if the weight is NaN.
    pub fn set_edge<C>(&mut self, u: Node, v: Node, cell: C) -> Result<()>
    where
        C: IntoCell,
    {
        self.check_range(u, v)?;

        let cell = cell.into_cell();
        if let Some(weight) = &cell {
            weight.check(self.weighting)?;
            self.weighting = Some(weight.weighting());
        }

        trace!("Set cell ({u}, {v}) to {cell:?}");
        self.put(u, v, cell);
        Ok(())
    }

    /// Overwrites a cell without validation
    pub(crate) fn put(&mut self, u: Node, v: Node, cell: Cell) {
        let idx = self.index(u, v);
        self.cells[idx] = cell;
    }

    /// Removes the edge `(u, v)`; equivalent to `set_edge(u, v, false)`
    pub fn remove_edge(&mut self, u: Node, v: Node) -> Result<()> {
        self.set_edge(u, v, false)
    }

    /// Returns *true* if the cell `(u, v)` exists and holds an edge
    pub fn is_connected(&self, u: Node, v: Node) -> bool {
        self.is_valid_edge(u, v) && self.cells[self.index(u, v)].is_some()
    }

    /// Returns an iterator over the rows of the matrix
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        // `chunks` panics on zero-sized chunks
        self.cells.chunks(self.len().max(1))
    }

    /// Builds a new matrix where cell `(u, v)` is `f(u, v)`.
    ///
    /// `f` is evaluated against `self`, never against the matrix under construction.
    /// If the result has no present cell, it keeps the weighting of `self`.
    ///
    /// # Errors
    /// Returns an error if the produced cells are not homogeneous.
    pub fn transform<F, C>(&self, mut f: F) -> Result<Self>
    where
        F: FnMut(Node, Node) -> C,
        C: IntoCell,
    {
        let cells = self.build_cells(|u, v| f(u, v).into_cell());
        Self::from_cells(self.n, cells, self.weighting)
    }

    /// Returns a matrix where every present edge becomes an unweighted edge
    pub fn unweighted(&self) -> Self {
        let cells = self.build_cells(|u, v| self.is_connected(u, v).into_cell());
        self.derived(cells, Some(Weighting::Unweighted))
    }

    /// Returns the symmetric closure of the matrix: `(u, v)` is present iff `(u, v)` or `(v, u)` is.
    ///
    /// The result is unweighted as one cell cannot represent two different weights.
    pub fn undirected(&self) -> Self {
        let cells = self.build_cells(|u, v| {
            (self.is_connected(u, v) || self.is_connected(v, u)).into_cell()
        });
        self.derived(cells, Some(Weighting::Unweighted))
    }

    /// Returns a copy of the matrix with an empty diagonal; all other cells keep their weights
    pub fn deloop(&self) -> Self {
        let cells = self.build_cells(|u, v| if u == v { None } else { self.cell(u, v) });
        self.derived(cells, self.weighting)
    }

    /// Wraps cells whose homogeneity follows from construction
    fn derived(&self, cells: Vec<Cell>, weighting: Option<Weighting>) -> Self {
        debug!("Derived MatrixGraph with {} vertices", self.n);
        Self {
            n: self.n,
            cells,
            weighting,
        }
    }
}

impl GraphNodeOrder for MatrixGraph {
    fn number_of_nodes(&self) -> NumNodes {
        self.n
    }
}

impl GraphEdgeOrder for MatrixGraph {
    /// Returns the number of present cells. Note that an undirected edge `{u, v}` with `u != v`
    /// occupies two cells.
    fn number_of_edges(&self) -> NumEdges {
        self.cells.iter().filter(|c| c.is_some()).count() as NumEdges
    }
}

impl GraphWeighting for MatrixGraph {
    /// Returns *true* if a present cell carries a number
    fn is_weighted(&self) -> bool {
        self.cells.iter().flatten().any(EdgeWeight::is_weighted)
    }
}

impl GraphDirection for MatrixGraph {
    /// A matrix is directed iff it is not symmetric (weights included)
    fn is_directed(&self) -> bool {
        self.vertices_range()
            .any(|u| (0..u).any(|v| self.cell(u, v) != self.cell(v, u)))
    }
}

impl GraphLoops for MatrixGraph {
    fn has_loops(&self) -> bool {
        self.vertices_range().any(|u| self.cell(u, u).is_some())
    }
}

impl AdjacencyList for MatrixGraph {
    fn successor_lists(&self) -> Vec<Vec<Node>> {
        self.rows()
            .take(self.len())
            .map(|row| {
                row.iter()
                    .positions(|c| c.is_some())
                    .map(|v| v as Node)
                    .collect_vec()
            })
            .collect()
    }
}

impl Display for MatrixGraph {
    /// Renders one bracketed row per line.
    ///
    /// Unweighted edges are drawn as `1`, weighted edges as their weight right-aligned to the
    /// widest weight of the matrix, and absent edges as underscores of that width.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let width = self
            .cells
            .iter()
            .flatten()
            .map(|w| w.to_string().len())
            .max()
            .unwrap_or(1);

        let render = |cell: &Cell| match cell {
            None => "_".repeat(width),
            Some(EdgeWeight::Unweighted) => "1".to_string(),
            Some(w @ EdgeWeight::Weighted(_)) => format!("{:_>width$}", w.to_string()),
        };

        let text = self
            .rows()
            .take(self.len())
            .map(|row| format!("[{}]", row.iter().map(render).join(" ")))
            .join("\n");
        write!(f, "{text}")
    }
}
