use super::*;

/// Spanning and connectivity checks.
///
/// Implemented for every [`AdjacencyList`], so a [`ListGraph`] and the [`MatrixGraph`] obtained
/// from it answer identically.
pub trait Connectivity: AdjacencyList {
    /// Returns *true* iff every vertex is the endpoint of at least one edge.
    ///
    /// All `n` positions are checked explicitly; the number of touched vertices has to equal
    /// the number of nodes exactly. A graph without nodes is not spanning.
    fn is_spanning(&self) -> bool {
        if self.is_empty() {
            return false;
        }
        let touched = self.touched_vertices();
        touched.len() == self.len() && touched.all()
    }

    /// Returns *true* iff every vertex can reach every other vertex following edge directions.
    ///
    /// Undirected edges can be followed both ways. The check fails early if the graph is empty or
    /// not spanning; otherwise it searches forward and backward from vertex `0`.
    fn is_strongly_connected(&self) -> bool {
        if !self.is_spanning() {
            return false;
        }

        reachable_from(&self.successor_lists(), 0).all()
            && reachable_from(&self.predecessor_lists(), 0).all()
    }

    /// Returns *true* iff the graph is strongly connected once all directions are ignored
    fn is_weakly_connected(&self) -> bool {
        if !self.is_spanning() {
            return false;
        }

        reachable_from(&self.symmetric_lists(), 0).all()
    }
}

impl<G> Connectivity for G where G: AdjacencyList {}
