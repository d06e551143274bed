//! # JSON
//!
//! Readers and writers for both representations.
//!
//! ```
//! use wdgraphs::{prelude::*, io::*};
//!
//! let m: MatrixGraph = "[[false, 1], [1, false]]".parse().unwrap();
//! assert!(m.is_weighted());
//! assert!(m.is_undirected());
//!
//! let unweighted = m.unweighted().to_json();
//! assert_eq!(unweighted.to_string(), "[[false,true],[true,false]]");
//! ```

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::json;

use super::*;

/// Describes the kind of a JSON value for error messages
fn describe(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => format!("boolean {b}"),
        Value::Number(x) => format!("number {x}"),
        Value::String(s) => format!("string {s:?}"),
        Value::Array(_) => "an array".to_string(),
        Value::Object(_) => "an object".to_string(),
    }
}

/// Converts a single JSON cell
fn parse_cell(value: &Value, row: usize, col: usize) -> Result<Cell> {
    let invalid = || GraphError::InvalidCell {
        row,
        col,
        found: describe(value),
    };

    match value {
        Value::Bool(b) => Ok(b.into_cell()),
        Value::Number(x) => x.as_f64().map(IntoCell::into_cell).ok_or_else(invalid),
        _ => Err(invalid()),
    }
}

impl JsonRead for MatrixGraph {
    fn try_from_json(value: &Value) -> Result<Self> {
        let not_an_array = |v: &Value| GraphError::NotAnArray { found: describe(v) };

        let rows = value.as_array().ok_or_else(|| not_an_array(value))?;
        let n = rows.len();

        let rows = rows
            .iter()
            .enumerate()
            .map(|(i, row)| {
                let cells = row.as_array().ok_or_else(|| not_an_array(row))?;
                if cells.len() != n {
                    return Err(GraphError::NotSquare {
                        row: i,
                        len: cells.len(),
                        expected: n,
                    });
                }

                cells
                    .iter()
                    .enumerate()
                    .map(|(j, cell)| parse_cell(cell, i, j))
                    .collect::<Result<Vec<_>>>()
            })
            .collect::<Result<Vec<_>>>()?;

        MatrixGraph::from_rows(rows)
    }
}

impl JsonWrite for MatrixGraph {
    fn to_json(&self) -> Value {
        let cell = |c: &Cell| match c {
            None => json!(false),
            Some(EdgeWeight::Unweighted) => json!(true),
            Some(EdgeWeight::Weighted(w)) => json!(w),
        };

        Value::Array(
            self.rows()
                .map(|row| Value::Array(row.iter().map(cell).collect()))
                .collect(),
        )
    }
}

impl FromStr for MatrixGraph {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self> {
        Self::try_from_json_str(s)
    }
}

/// Weight as found in JSON input; booleans denote unweighted edges
#[derive(Deserialize)]
#[serde(untagged)]
enum JsonWeight {
    Flag(bool),
    Number(f64),
}

#[derive(Deserialize)]
struct JsonEdgeIn {
    from: Node,
    to: Node,
    #[serde(default)]
    weight: Option<JsonWeight>,
    #[serde(default)]
    directed: bool,
}

#[derive(Deserialize)]
struct JsonListIn {
    vertices: Vec<String>,
    edges: Vec<JsonEdgeIn>,
}

#[derive(Serialize)]
struct JsonListOut<'a> {
    vertices: Vec<&'a str>,
    edges: &'a [Edge],
}

impl JsonRead for ListGraph {
    fn try_from_json(value: &Value) -> Result<Self> {
        let raw = JsonListIn::deserialize(value)?;

        let edges = raw.edges.into_iter().map(|e| {
            let edge = Edge::new(e.from, e.to);
            let edge = match e.weight {
                Some(JsonWeight::Number(w)) => edge.with_weight(w),
                Some(JsonWeight::Flag(_)) | None => edge,
            };
            if e.directed { edge.directed() } else { edge }
        });

        ListGraph::new(raw.vertices, edges)
    }
}

impl JsonWrite for ListGraph {
    fn to_json(&self) -> Value {
        let out = JsonListOut {
            vertices: self.vertices().iter().map(|v| v.name()).collect(),
            edges: self.edges(),
        };
        json!(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matrix_example() {
        let m: MatrixGraph = "[[false, 1], [1, false]]".parse().unwrap();
        assert!(m.is_weighted());
        assert!(m.is_undirected());
        assert_eq!(
            m.unweighted(),
            MatrixGraph::from_rows([[false, true], [true, false]]).unwrap()
        );
    }

    #[test]
    fn matrix_shape_errors() {
        let err = MatrixGraph::try_from_json_str("[[false, true], [true]]").unwrap_err();
        assert!(matches!(err, GraphError::NotSquare { row: 1, .. }));
        assert_eq!(err.kind(), ErrorKind::Shape);

        let err = MatrixGraph::try_from_json_str("{\"a\": 1}").unwrap_err();
        assert!(matches!(err, GraphError::NotAnArray { .. }));

        let err = MatrixGraph::try_from_json_str("[[false, true], 3]").unwrap_err();
        assert!(matches!(err, GraphError::NotAnArray { .. }));

        let err = MatrixGraph::try_from_json_str("[[false,").unwrap_err();
        assert!(matches!(err, GraphError::Json(_)));
    }

    #[test]
    fn matrix_type_errors() {
        let err = MatrixGraph::try_from_json_str("[[false, 2], [true, false]]").unwrap_err();
        assert!(matches!(err, GraphError::MixedWeighting));
        assert_eq!(err.kind(), ErrorKind::Type);

        let err = MatrixGraph::try_from_json_str("[[false, \"x\"], [true, false]]").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Type);
        assert_eq!(
            err.to_string(),
            "Cell (0, 1) must be either boolean or numeric, found string \"x\""
        );
    }

    #[test]
    fn false_cells_are_orthogonal_to_weighting() {
        let m = MatrixGraph::try_from_json_str("[[false, false], [false, false]]").unwrap();
        assert_eq!(m.weighting(), None);

        let w = MatrixGraph::try_from_json_str("[[false, 0], [false, false]]").unwrap();
        assert!(w.is_weighted());
        assert!(w.is_connected(0, 1));
    }

    #[test]
    fn matrix_writes_back() {
        let src = "[[false,1.5],[2.0,false]]";
        let m = MatrixGraph::try_from_json_str(src).unwrap();
        assert_eq!(m.to_json().to_string(), src);

        let mut buffer = Vec::new();
        m.try_write_json(&mut buffer).unwrap();
        assert_eq!(MatrixGraph::try_read_json(buffer.as_slice()).unwrap(), m);
    }

    #[test]
    fn list_round_trip() {
        let g = ListGraph::new(
            ["A", "B", "C"],
            [
                Edge::new(0, 1).with_weight(3.0),
                Edge::new(2, 1).with_weight(1.0).directed(),
            ],
        )
        .unwrap();

        let json = g.to_json();
        assert_eq!(json["vertices"], json!(["A", "B", "C"]));
        assert_eq!(
            json["edges"][1],
            json!({"from": 2, "to": 1, "weight": 1.0, "directed": true})
        );
        assert_eq!(ListGraph::try_from_json(&json).unwrap(), g);
    }

    #[test]
    fn list_defaults_and_validation() {
        let g = ListGraph::try_from_json_str(
            r#"{"vertices": ["A", "B"], "edges": [{"from": 0, "to": 1}, {"from": 1, "to": 1, "weight": true}]}"#,
        )
        .unwrap();
        assert!(g.is_unweighted());
        assert!(g.is_undirected());
        assert!(g.has_loops());

        let err = ListGraph::try_from_json_str(
            r#"{"vertices": ["A"], "edges": [{"from": 0, "to": 1}]}"#,
        )
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Range);

        let err = ListGraph::try_from_json_str(r#"{"vertices": "A", "edges": []}"#).unwrap_err();
        assert!(matches!(err, GraphError::Json(_)));
    }

    #[test]
    fn file_errors_are_io() {
        let missing = std::env::temp_dir()
            .join("wdgraphs-no-such-dir")
            .join("graph.json");

        let err = MatrixGraph::try_read_json_file(&missing).unwrap_err();
        assert!(matches!(err, GraphError::Io(_)));
        assert_eq!(err.kind(), ErrorKind::Io);

        let err = MatrixGraph::new(1).try_write_json_file(&missing).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Io);
    }

    #[test]
    fn file_round_trip() {
        let path = std::env::temp_dir().join(format!("wdgraphs-{}.json", std::process::id()));
        let m = MatrixGraph::try_from_json_str("[[false, 2], [3, false]]").unwrap();

        m.try_write_json_file(&path).unwrap();
        let read = MatrixGraph::try_read_json_file(&path);
        std::fs::remove_file(&path).unwrap();
        assert_eq!(read.unwrap(), m);
    }
}
