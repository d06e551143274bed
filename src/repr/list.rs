/*!
# Edge-List Representation

A [`ListGraph`] owns a vertex sequence and an edge sequence. It suits sparse graphs and
algorithms that walk neighbors. Every property (weighted-ness, directedness, loops,
parallel edges) is derived from the edges on demand with a single `O(|E|)` scan; nothing
is cached, so there is no stored state that could drift from the edges.

Edges carry their own directedness flag. A graph is **directed** as soon as one edge is
directed; graphs mixing both kinds are admissible and only rejected where the mix has no
defined meaning ([`ListGraph::unparalleled`]).

Weighting is homogeneous: all edges of a graph are weighted or all are unweighted.
Hence "any edge carries a number" and "all edges carry a number" coincide.

Transformations are pure: they return a new graph sharing the vertex sequence of `self`
and owning a new edge sequence. The only mutating operations are [`ListGraph::sort_edges`],
[`ListGraph::make_unweighted`] and [`ListGraph::make_undirected`].
*/

use std::{collections::hash_map::Entry, fmt::Display, sync::Arc};

use itertools::Itertools;
use log::debug;
use rustc_hash::{FxHashMap, FxHashSet};

use super::*;

/// A graph stored as vertex and edge sequences
#[derive(Debug, Clone, PartialEq)]
pub struct ListGraph {
    vertices: Arc<[Vertex]>,
    edges: Vec<Edge>,
}

impl ListGraph {
    /// Creates a new graph. Vertices are indexed by their position in `vertices`.
    ///
    /// # Errors
    /// - [`GraphError::VertexOutOfRange`] if an edge references a non-existing vertex,
    /// - [`GraphError::MixedWeighting`] if weighted and unweighted edges are mixed,
    /// - [`GraphError::InvalidWeight`] if a weight is NaN.
    pub fn new<V, E>(
        vertices: impl IntoIterator<Item = V>,
        edges: impl IntoIterator<Item = E>,
    ) -> Result<Self>
    where
        V: Into<Vertex>,
        E: Into<Edge>,
    {
        let graph = Self::from_parts(vertices, edges.into_iter().map(|e| e.into()).collect());
        graph.validate()?;

        debug!(
            "Created ListGraph with {} vertices and {} edges",
            graph.number_of_nodes(),
            graph.number_of_edges()
        );
        Ok(graph)
    }

    /// Assigns vertex indices without validating `edges`
    pub(crate) fn from_parts<V>(vertices: impl IntoIterator<Item = V>, edges: Vec<Edge>) -> Self
    where
        V: Into<Vertex>,
    {
        Self {
            vertices: vertices
                .into_iter()
                .enumerate()
                .map(|(i, v)| v.into().with_index(i as Node))
                .collect(),
            edges,
        }
    }

    /// Checks endpoints and weighting of all edges
    fn validate(&self) -> Result<()> {
        let n = self.number_of_nodes();
        if let Some(edge) = self.edges.iter().find(|e| !self.is_valid_edge(e.from, e.to)) {
            return Err(GraphError::VertexOutOfRange {
                u: edge.from,
                v: edge.to,
                n,
            });
        }

        common_weighting(self.edges.iter().map(|e| &e.weight))?;
        Ok(())
    }

    /// Creates a graph over the same vertex sequence as `self`.
    /// `edges` must be derived from the edges of `self`.
    fn with_edges(&self, edges: Vec<Edge>) -> Self {
        Self {
            vertices: Arc::clone(&self.vertices),
            edges,
        }
    }

    /// Returns the vertex sequence
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Returns the vertex at position `u` if it exists
    pub fn vertex(&self, u: Node) -> Option<&Vertex> {
        self.vertices.get(u as usize)
    }

    /// Returns the edge sequence in its current order
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Returns *true* if `other` shares the vertex sequence of `self` (not merely an equal one)
    pub fn shares_vertices_with(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.vertices, &other.vertices)
    }

    /// Returns the weighting of the edges, `None` if there are no edges
    pub fn weighting(&self) -> Option<Weighting> {
        self.edges.first().map(|e| e.weight.weighting())
    }

    /// Returns *true* if two edges connect the same pair of vertices.
    ///
    /// Pairs are ordered if the graph is directed and unordered otherwise
    /// (see [`Edge::key`]). Runs in `O(|E|)` expected time.
    pub fn has_parallels(&self) -> bool {
        let directed = self.is_directed();
        let mut seen = FxHashSet::default();
        self.edges.iter().any(|e| !seen.insert(e.key(directed)))
    }

    /// Sorts the edges by `from` and then by `to`, keeping the relative order of edges
    /// with equal endpoints.
    ///
    /// This mutates `self` in place and returns it for chaining.
    pub fn sort_edges(&mut self) -> &mut Self {
        self.edges.sort_by_key(|e| (e.from, e.to));
        self
    }

    /// Returns a copy of the graph where every edge is unweighted
    pub fn unweighted(&self) -> Self {
        let mut graph = self.clone();
        graph.make_unweighted();
        graph
    }

    /// Drops the weight of every edge in place
    pub fn make_unweighted(&mut self) -> &mut Self {
        for edge in &mut self.edges {
            edge.weight = EdgeWeight::Unweighted;
        }
        self
    }

    /// Returns a copy of the graph where every edge is undirected.
    /// No edge is removed; only the directedness flags are cleared.
    pub fn undirected(&self) -> Self {
        let mut graph = self.clone();
        graph.make_undirected();
        graph
    }

    /// Clears the directedness flag of every edge in place
    pub fn make_undirected(&mut self) -> &mut Self {
        for edge in &mut self.edges {
            edge.directed = false;
        }
        self
    }

    /// Returns a copy of the graph without self-loops
    pub fn unlooped(&self) -> Self {
        self.with_edges(self.edges.iter().filter(|e| !e.is_loop()).copied().collect())
    }

    /// Collapses every group of parallel edges into a single edge.
    ///
    /// Edges are grouped by [`Edge::key`] with the directedness of the graph. Within a group
    /// the first edge wins in unweighted graphs; in weighted graphs a later edge replaces the
    /// kept one if its weight is less or equal. The kept edges are returned ordered by key.
    ///
    /// # Errors
    /// Returns [`GraphError::UndirectedEdgeInDirectedGraph`] if the graph is directed but
    /// contains an undirected edge.
    pub fn unparalleled(&self) -> Result<Self> {
        let directed = self.is_directed();
        let mut slots: FxHashMap<(Node, Node), usize> = FxHashMap::default();

        for (i, edge) in self.edges.iter().enumerate() {
            if directed && !edge.directed {
                return Err(GraphError::UndirectedEdgeInDirectedGraph {
                    edge: edge.to_string(),
                });
            }

            match slots.entry(edge.key(directed)) {
                Entry::Vacant(slot) => {
                    slot.insert(i);
                }
                Entry::Occupied(mut slot) => {
                    if edge.weight.supersedes(&self.edges[*slot.get()].weight) {
                        slot.insert(i);
                    }
                }
            }
        }

        let edges = slots
            .into_iter()
            .sorted_unstable_by_key(|&(key, _)| key)
            .map(|(_, i)| self.edges[i])
            .collect_vec();

        debug!(
            "Collapsed {} edges into {} without parallels",
            self.edges.len(),
            edges.len()
        );
        Ok(self.with_edges(edges))
    }
}

impl GraphNodeOrder for ListGraph {
    fn number_of_nodes(&self) -> NumNodes {
        self.vertices.len() as NumNodes
    }
}

impl GraphEdgeOrder for ListGraph {
    fn number_of_edges(&self) -> NumEdges {
        self.edges.len() as NumEdges
    }
}

impl GraphWeighting for ListGraph {
    fn is_weighted(&self) -> bool {
        self.edges.iter().any(|e| e.weight.is_weighted())
    }
}

impl GraphDirection for ListGraph {
    fn is_directed(&self) -> bool {
        self.edges.iter().any(|e| e.directed)
    }
}

impl GraphLoops for ListGraph {
    fn has_loops(&self) -> bool {
        self.edges.iter().any(|e| e.is_loop())
    }
}

impl AdjacencyList for ListGraph {
    fn successor_lists(&self) -> Vec<Vec<Node>> {
        let mut successors = vec![Vec::new(); self.len()];
        for edge in &self.edges {
            successors[edge.from as usize].push(edge.to);
            if !edge.directed && !edge.is_loop() {
                successors[edge.to as usize].push(edge.from);
            }
        }
        successors
    }
}

impl Display for ListGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.edges.iter().join(", "))
    }
}
