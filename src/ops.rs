use std::ops::Range;

use crate::*;

/// Vertex count and index range of a graph
pub trait GraphNodeOrder {
    /// Returns the cardinality `n` of the graph
    fn number_of_nodes(&self) -> NumNodes;

    /// Returns `n` as `usize`, e.g. for indexing per-vertex vectors
    fn len(&self) -> usize {
        self.number_of_nodes() as usize
    }

    /// Returns the range `0..n` of all vertex indices.
    /// In contrast to an iterator borrowing `self`, the range may be held across mutations.
    fn vertices_range(&self) -> Range<Node> {
        0..self.number_of_nodes()
    }

    /// Returns a cleared bitset with one bit per vertex
    fn vertex_bitset_unset(&self) -> NodeBitSet {
        node_bitset_unset(self.number_of_nodes())
    }

    /// Returns *true* if `n == 0`
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns *true* if both endpoints lie in `0..n`
    fn is_valid_edge(&self, u: Node, v: Node) -> bool {
        u < self.number_of_nodes() && v < self.number_of_nodes()
    }
}

/// Edge count of a graph
pub trait GraphEdgeOrder {
    /// Returns the number of stored edges (matrices count present cells)
    fn number_of_edges(&self) -> NumEdges;

    /// Returns *true* if no edge is stored
    fn is_edgeless(&self) -> bool {
        self.number_of_edges() == 0
    }
}

/// Weighted-ness of a graph
pub trait GraphWeighting {
    /// Returns *true* if the edges of the graph carry numeric weights
    fn is_weighted(&self) -> bool;

    /// Negation of [`GraphWeighting::is_weighted`]
    fn is_unweighted(&self) -> bool {
        !self.is_weighted()
    }
}

/// Directed-ness of a graph
pub trait GraphDirection {
    /// Returns *true* if the graph has to be interpreted as directed
    fn is_directed(&self) -> bool;

    /// Negation of [`GraphDirection::is_directed`]
    fn is_undirected(&self) -> bool {
        !self.is_directed()
    }
}

/// Self-loop inspection
pub trait GraphLoops {
    /// Returns *true* if any edge has equal endpoints
    fn has_loops(&self) -> bool;
}

/// Neighborhood access shared by all representations.
///
/// Undirected edges contribute to the neighborhoods of both endpoints, directed edges only
/// to the out-neighborhood of their source and the in-neighborhood of their target.
pub trait AdjacencyList: GraphNodeOrder + Sized {
    /// Returns the out-neighbors of every node, indexed by node
    fn successor_lists(&self) -> Vec<Vec<Node>>;

    /// Returns the in-neighbors of every node, indexed by node
    fn predecessor_lists(&self) -> Vec<Vec<Node>> {
        let mut predecessors = vec![Vec::new(); self.len()];
        for (u, successors) in self.successor_lists().into_iter().enumerate() {
            for v in successors {
                predecessors[v as usize].push(u as Node);
            }
        }
        predecessors
    }

    /// Returns the union of in- and out-neighbors of every node, i.e. the neighborhoods
    /// of the graph with all directions ignored
    fn symmetric_lists(&self) -> Vec<Vec<Node>> {
        let mut neighbors = self.successor_lists();
        for (u, predecessors) in self.predecessor_lists().into_iter().enumerate() {
            neighbors[u].extend(predecessors);
        }
        neighbors
    }

    /// Returns a bitset where bit `u` is set iff `u` is the endpoint of some edge
    fn touched_vertices(&self) -> NodeBitSet {
        let mut touched = self.vertex_bitset_unset();
        for (u, successors) in self.successor_lists().iter().enumerate() {
            if !successors.is_empty() {
                touched.set(u, true);
            }
            for &v in successors {
                touched.set(v as usize, true);
            }
        }
        touched
    }
}
