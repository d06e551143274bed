/*!
Graph traversal over materialized neighborhoods.

Both representations can produce their neighborhoods as lists (see [`AdjacencyList`]);
traversals run on these lists, so one implementation serves edge lists and matrices alike.
The frontier container determines the order:

- [`VecDeque`] -> queue semantics -> **BFS**
- [`Vec`] -> stack semantics -> **DFS**
*/

use std::collections::VecDeque;

use super::*;

/// Frontier of a traversal; its pop order decides between BFS and DFS.
pub trait NodeSequencer {
    /// Frontier holding only `u`
    fn init(u: Node) -> Self;

    /// Schedules `u` for a later visit
    fn push(&mut self, u: Node);

    /// Takes the node to visit next
    fn pop(&mut self) -> Option<Node>;

    /// Number of scheduled but not yet visited nodes
    fn cardinality(&self) -> usize;
}

impl NodeSequencer for VecDeque<Node> {
    fn init(u: Node) -> Self {
        Self::from(vec![u])
    }
    fn push(&mut self, u: Node) {
        self.push_back(u)
    }
    fn pop(&mut self) -> Option<Node> {
        self.pop_front()
    }
    fn cardinality(&self) -> usize {
        self.len()
    }
}

impl NodeSequencer for Vec<Node> {
    fn init(u: Node) -> Self {
        vec![u]
    }
    fn push(&mut self, u: Node) {
        self.push(u)
    }
    fn pop(&mut self) -> Option<Node> {
        self.pop()
    }
    fn cardinality(&self) -> usize {
        self.len()
    }
}

/// Generic traversal iterator over neighborhood lists.
///
/// Nodes are marked as visited when they are pushed onto the frontier,
/// so every reachable node is yielded exactly once.
pub struct TraversalSearch<'a, S>
where
    S: NodeSequencer,
{
    neighbors: &'a [Vec<Node>],
    visited: NodeBitSet,
    sequencer: S,
}

/// A BFS traversal iterator visiting nodes in breadth-first order from a given starting node.
pub type BFS<'a> = TraversalSearch<'a, VecDeque<Node>>;

/// A DFS traversal iterator visiting nodes in depth-first order from a given starting node.
pub type DFS<'a> = TraversalSearch<'a, Vec<Node>>;

impl<'a, S> TraversalSearch<'a, S>
where
    S: NodeSequencer,
{
    /// Starts a traversal at `start`, which counts as visited.
    /// ** Panics if `start >= neighbors.len()` **
    pub fn new(neighbors: &'a [Vec<Node>], start: Node) -> Self {
        let mut visited = node_bitset_unset(neighbors.len() as NumNodes);
        visited.set(start as usize, true);
        Self {
            neighbors,
            visited,
            sequencer: S::init(start),
        }
    }

    /// Returns *true* if `u` was already discovered
    pub fn did_visit_node(&self, u: Node) -> bool {
        self.visited.get(u as usize).unwrap_or(false)
    }

    /// Consumes the search and returns the set of all nodes reachable from the start node
    pub fn into_visited(mut self) -> NodeBitSet {
        while self.next().is_some() {}
        self.visited
    }
}

impl<S> Iterator for TraversalSearch<'_, S>
where
    S: NodeSequencer,
{
    type Item = Node;

    fn next(&mut self) -> Option<Self::Item> {
        let u = self.sequencer.pop()?;

        for &v in &self.neighbors[u as usize] {
            if !self.visited[v as usize] {
                self.visited.set(v as usize, true);
                self.sequencer.push(v);
            }
        }

        Some(u)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let discovered = self.visited.iter().filter(|&b| b).count();
        (
            self.sequencer.cardinality(),
            Some(self.sequencer.cardinality() + self.neighbors.len() - discovered),
        )
    }
}

/// Returns a bitset of all nodes reachable from `start` (including `start` itself)
pub fn reachable_from(neighbors: &[Vec<Node>], start: Node) -> NodeBitSet {
    DFS::new(neighbors, start).into_visited()
}
