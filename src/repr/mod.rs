/*!
# Graph Representations

Two interchangeable representations of a finite, possibly weighted, possibly directed graph:

- [`ListGraph`]: vertices plus an edge list; suited for sparse graphs.
- [`MatrixGraph`]: a validated square adjacency matrix; suited for dense graphs and per-cell transforms.

Both implement the traits of [`ops`](crate::ops) and can be converted into each other
(see `From<&ListGraph> for MatrixGraph` and `From<&MatrixGraph> for ListGraph`).
*/

use crate::{ops::*, weight::common_weighting, *};

mod convert;
mod list;
mod matrix;

pub use list::*;
pub use matrix::*;
