/*!
# Node Representation

We choose `Node = u32` as almost all use-cases involve less than `2^32` nodes.
A node is the positional index of a vertex: graphs never store vertex references,
only indices into their vertex sequence.

A [`Vertex`] is the (opaque) identity behind an index. Indices are assigned
when a [`ListGraph`](crate::repr::ListGraph) is built and are reassigned whenever
a vertex sequence is rebuilt, so they are not persistent identifiers across graphs.
*/

use std::fmt::Display;

use bit_vec::BitVec;

/// Nodes can be any unsigned integer from `0` to `Node::MAX - 1`
pub type Node = u32;

/// There can be at most `2^32 - 1` nodes in a graph!
pub type NumNodes = Node;

/// BitSet with one entry per node
pub type NodeBitSet = BitVec;

/// Returns an empty bitset with one entry per node
pub fn node_bitset_unset(n: NumNodes) -> NodeBitSet {
    BitVec::from_elem(n as usize, false)
}

/// A labelled vertex together with its position in the owning vertex sequence
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Vertex {
    name: String,
    index: Node,
}

impl Vertex {
    /// Creates a new vertex. The index is assigned once the vertex becomes part of a graph.
    pub fn new<S>(name: S) -> Self
    where
        S: Into<String>,
    {
        Self {
            name: name.into(),
            index: 0,
        }
    }

    /// Returns the label of the vertex
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the position of the vertex in its graph
    pub fn index(&self) -> Node {
        self.index
    }

    pub(crate) fn with_index(mut self, index: Node) -> Self {
        self.index = index;
        self
    }
}

impl Display for Vertex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}#{}", self.name, self.index)
    }
}

impl From<&str> for Vertex {
    fn from(value: &str) -> Self {
        Vertex::new(value)
    }
}

impl From<String> for Vertex {
    fn from(value: String) -> Self {
        Vertex::new(value)
    }
}
