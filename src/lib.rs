/*!
`wdgraphs` is a small graph library for graphs that are
- **w**eighted or unweighted : every edge either carries an `f64` weight or none does
- **d**irected or undirected : the direction is stored per edge
- labelled : vertices carry a name and are numbered `0` to `n - 1`

Loops and parallel edges are allowed and can be removed on demand.

# Representation

We represent **nodes** as `u32` in the range `0..n` where `n` is the number of vertices in the graph.
An [`Edge`] holds its two endpoints, an [`EdgeWeight`] and a directedness flag.

### Available Representations

See the [`repr`] module for both representations:

- [`ListGraph`](crate::repr::ListGraph): labelled vertices plus an edge list
- [`MatrixGraph`](crate::repr::MatrixGraph): a square matrix of optional weights

Both can be converted into each other and answer the same queries through the traits of [`ops`]
and [`algo`]. Transforms never mutate their input unless the method name says so
(`sort_edges`, `make_unweighted`, `make_undirected`, `set_edge`, `remove_edge`).

# Errors

Every fallible operation returns [`Result`], whose [`GraphError`] can be classified via
[`GraphError::kind`] into shape, type, range and consistency errors.

# Usage

- [`prelude`] includes definitions for vertices, edges, weights, errors, basic graph operations and both representations,
- [`algo`] includes traversals and connectivity checks,
- [`io`] includes JSON readers and writers.

In most use-cases, `use wdgraphs::prelude::*;` suffices for your needs.

```
use wdgraphs::prelude::*;

let g = ListGraph::new(
    ["A", "B", "C"],
    [Edge::new(0, 1).directed(), Edge::new(1, 2).directed()],
)
.unwrap();

assert!(g.is_spanning());
assert!(g.is_weakly_connected());
assert!(!g.is_strongly_connected());

let m = MatrixGraph::from(&g);
assert!(m.is_directed());
assert_eq!(m.to_string(), "[_ 1 _]\n[_ _ 1]\n[_ _ _]");
```
*/

pub mod algo;
pub mod edge;
pub mod error;
pub mod io;
pub mod node;
pub mod ops;
pub mod repr;
#[cfg(test)]
pub(crate) mod testing;
pub mod weight;

pub use edge::*;
pub use error::*;
pub use node::*;
pub use weight::*;

/// `wdgraphs::prelude` includes definitions for vertices, edges and weights, the error type,
/// all basic graph operation traits, both representations and the connectivity checks.
pub mod prelude {
    pub use super::{
        algo::Connectivity, edge::*, error::*, node::*, ops::*, repr::*, weight::*,
    };
}
