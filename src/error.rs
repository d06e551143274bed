/*!
# Errors

Every invariant violation is reported synchronously by the operation that detects it.
Nothing is retried or repaired internally; the caller decides what to do with the error.

Errors fall into four classes (see [`ErrorKind`]):
- **Shape**: the input is not a square matrix (ragged rows, non-array input),
- **Type**: a cell or weight of an unsupported kind, or mixed weighting within one graph,
- **Range**: a vertex index outside of `0..n`,
- **Consistency**: an edge whose own directedness contradicts the graph it lives in.

Failures of the underlying reader, writer or file system are none of these and are
classified as **Io**.
*/

use thiserror::Error;

use crate::node::{Node, NumNodes};

/// Result type alias for all fallible graph operations.
pub type Result<T> = std::result::Result<T, GraphError>;

/// Coarse classification of a [`GraphError`]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Shape,
    Type,
    Range,
    Consistency,
    Io,
}

/// Error type for all graph operations.
#[derive(Error, Debug)]
pub enum GraphError {
    /// A row of the matrix does not have as many cells as there are rows
    #[error("Matrix is not square: row {row} has {len} cells, expected {expected}")]
    NotSquare {
        row: usize,
        len: usize,
        expected: usize,
    },

    /// The input (or one of its rows) is not an array
    #[error("Expected an array of arrays, found {found}")]
    NotAnArray { found: String },

    /// A cell is neither boolean nor numeric
    #[error("Cell ({row}, {col}) must be either boolean or numeric, found {found}")]
    InvalidCell {
        row: usize,
        col: usize,
        found: String,
    },

    /// Weighted and unweighted edges within one graph
    #[error("Mixed weighted and unweighted edges")]
    MixedWeighting,

    /// A weight that cannot be compared against other weights
    #[error("Edge weight {weight} is not a comparable number")]
    InvalidWeight { weight: f64 },

    /// A weight was requested from a graph without weights
    #[error("Graph is unweighted: edge ({u}, {v}) carries no weight")]
    NotWeighted { u: Node, v: Node },

    /// At least one endpoint does not exist
    #[error("Vertices ({u}, {v}) do not exist in a graph with {n} vertices")]
    VertexOutOfRange { u: Node, v: Node, n: NumNodes },

    /// An undirected edge was found while the graph is classified as directed
    #[error("Undirected edge {edge} in a directed graph")]
    UndirectedEdgeInDirectedGraph { edge: String },

    /// Malformed JSON input
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Opening, reading or writing a file failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl GraphError {
    /// Returns the class of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Json(e) if e.is_io() => ErrorKind::Io,
            Self::NotSquare { .. } | Self::NotAnArray { .. } | Self::Json(_) => ErrorKind::Shape,
            Self::InvalidCell { .. }
            | Self::MixedWeighting
            | Self::InvalidWeight { .. }
            | Self::NotWeighted { .. } => ErrorKind::Type,
            Self::VertexOutOfRange { .. } => ErrorKind::Range,
            Self::UndirectedEdgeInDirectedGraph { .. } => ErrorKind::Consistency,
            Self::Io(_) => ErrorKind::Io,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_square_error() {
        let err = GraphError::NotSquare {
            row: 1,
            len: 3,
            expected: 2,
        };
        assert_eq!(
            err.to_string(),
            "Matrix is not square: row 1 has 3 cells, expected 2"
        );
        assert_eq!(err.kind(), ErrorKind::Shape);
    }

    #[test]
    fn test_error_kinds() {
        assert_eq!(GraphError::MixedWeighting.kind(), ErrorKind::Type);
        assert_eq!(
            GraphError::NotWeighted { u: 0, v: 1 }.kind(),
            ErrorKind::Type
        );
        assert_eq!(
            GraphError::VertexOutOfRange { u: 4, v: 0, n: 3 }.kind(),
            ErrorKind::Range
        );
        assert_eq!(
            GraphError::UndirectedEdgeInDirectedGraph {
                edge: "(0,1)".to_string()
            }
            .kind(),
            ErrorKind::Consistency
        );
    }

    #[test]
    fn test_io_errors_have_their_own_kind() {
        let err = GraphError::from(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "graph.json",
        ));
        assert_eq!(err.kind(), ErrorKind::Io);
        assert_eq!(err.to_string(), "IO error: graph.json");

        let err = GraphError::from(serde_json::Error::io(std::io::Error::other("broken pipe")));
        assert_eq!(err.kind(), ErrorKind::Io);
    }

    #[test]
    fn test_out_of_range_message() {
        let err = GraphError::VertexOutOfRange { u: 4, v: 0, n: 3 };
        assert_eq!(
            err.to_string(),
            "Vertices (4, 0) do not exist in a graph with 3 vertices"
        );
    }
}
