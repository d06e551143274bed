//! Random graph generators shared by the unit tests

use rand::Rng;

use crate::prelude::*;

/// Creates a list graph with `n` vertices and `m` random edges.
///
/// The graph is either weighted or unweighted as a whole; every edge is directed with
/// probability `1/2` unless the whole graph is chosen to be undirected.
pub(crate) fn random_list_graph<R: Rng>(rng: &mut R, n: NumNodes, m: NumNodes) -> ListGraph {
    let weighted = rng.random_bool(0.5);
    let directed_prob = if rng.random_bool(0.5) { 0.0 } else { 0.5 };

    let edges = (0..m)
        .map(|_| {
            let mut edge = Edge::new(rng.random_range(0..n), rng.random_range(0..n));
            if weighted {
                edge = edge.with_weight(rng.random_range(0..10) as f64);
            }
            if rng.random_bool(directed_prob) {
                edge = edge.directed();
            }
            edge
        })
        .collect::<Vec<_>>();

    ListGraph::new((0..n).map(|u| Vertex::new(format!("v{u}"))), edges).unwrap()
}

/// Creates a matrix graph with `n` vertices where every cell is present with probability `p`.
///
/// With probability `1/2` the matrix is symmetric.
pub(crate) fn random_matrix_graph<R: Rng>(rng: &mut R, n: NumNodes, p: f64) -> MatrixGraph {
    let weighted = rng.random_bool(0.5);
    let symmetric = rng.random_bool(0.5);

    let mut matrix = MatrixGraph::new(n);
    for u in 0..n {
        let upto = if symmetric { u + 1 } else { n };
        for v in 0..upto {
            if !rng.random_bool(p) {
                continue;
            }

            let cell = if weighted {
                EdgeWeight::Weighted(rng.random_range(0..10) as f64)
            } else {
                EdgeWeight::Unweighted
            };
            matrix.set_edge(u, v, cell).unwrap();
            if symmetric {
                matrix.set_edge(v, u, cell).unwrap();
            }
        }
    }
    matrix
}
