/*!
# Conversions between representations

- [`ListGraph`] -> [`MatrixGraph`]: every edge fills its cell; undirected edges fill both
  `(u, v)` and `(v, u)`. Parallel edges collapse like in [`ListGraph::unparalleled`]:
  the first unweighted edge wins, a weighted edge replaces a cell holding a weight `>=` its own.
- [`MatrixGraph`] -> [`ListGraph`]: vertices are labelled by their index. A symmetric matrix
  yields one undirected edge per present lower-triangle cell, any other matrix one directed
  edge per present cell.

Round trips preserve weighted-ness, loops, spanning-ness and connectivity. Directedness is
preserved unless a directed list graph happens to be symmetric.
*/

use super::*;

impl From<&ListGraph> for MatrixGraph {
    fn from(graph: &ListGraph) -> Self {
        let n = graph.number_of_nodes();
        let mut matrix = match graph.weighting() {
            Some(weighting) => MatrixGraph::with_weighting(n, weighting),
            None => MatrixGraph::new(n),
        };

        let mut place = |u: Node, v: Node, weight: EdgeWeight| {
            let keep = matrix
                .cell(u, v)
                .is_some_and(|current| !weight.supersedes(&current));
            if !keep {
                // endpoints and weighting were validated when `graph` was built
                matrix.put(u, v, Some(weight));
            }
        };

        for edge in graph.edges() {
            place(edge.from, edge.to, edge.weight);
            if !edge.directed && !edge.is_loop() {
                place(edge.to, edge.from, edge.weight);
            }
        }

        matrix
    }
}

impl From<&MatrixGraph> for ListGraph {
    fn from(matrix: &MatrixGraph) -> Self {
        let directed = matrix.is_directed();

        let edges = matrix
            .vertices_range()
            .flat_map(|u| {
                let upto = if directed { matrix.number_of_nodes() } else { u + 1 };
                (0..upto).filter_map(move |v| {
                    matrix.cell(u, v).map(|weight| Edge {
                        from: u,
                        to: v,
                        weight,
                        directed,
                    })
                })
            })
            .collect();

        // cells of a matrix are in range and homogeneous
        ListGraph::from_parts(
            matrix.vertices_range().map(|u| Vertex::new(u.to_string())),
            edges,
        )
    }
}
