use std::fmt::{Debug, Display};

use serde::Serialize;

use crate::{EdgeWeight, Node};

/// We limit the number of edges to `2^32 - 1`.
pub type NumEdges = u32;

/// An edge of a [`ListGraph`](crate::repr::ListGraph): two endpoints, a weight and a directedness flag.
///
/// Endpoints are vertex indices of the graph the edge is part of.
/// An undirected edge `(u, v)` connects the same pair as `(v, u)`.
#[derive(Copy, Clone, PartialEq, Serialize)]
pub struct Edge {
    pub from: Node,
    pub to: Node,
    pub weight: EdgeWeight,
    pub directed: bool,
}

impl Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let arrow = if self.directed { "->" } else { "," };
        write!(f, "({}{arrow}{}", self.from, self.to)?;
        if let EdgeWeight::Weighted(w) = self.weight {
            write!(f, ";{w}")?;
        }
        write!(f, ")")
    }
}

impl Debug for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}

impl Edge {
    /// Creates an unweighted, undirected edge between `from` and `to`
    pub fn new(from: Node, to: Node) -> Self {
        Self {
            from,
            to,
            weight: EdgeWeight::Unweighted,
            directed: false,
        }
    }

    /// Sets the weight of the edge
    pub fn with_weight<W>(mut self, weight: W) -> Self
    where
        W: Into<EdgeWeight>,
    {
        self.weight = weight.into();
        self
    }

    /// Marks the edge as directed (from `from` to `to`)
    pub fn directed(mut self) -> Self {
        self.directed = true;
        self
    }

    /// Returns the endpoints as a tuple
    pub fn endpoints(&self) -> (Node, Node) {
        (self.from, self.to)
    }

    /// Normalizes the edge such that the endpoint with smaller value comes first
    pub fn normalized(&self) -> Self {
        Self {
            from: self.from.min(self.to),
            to: self.from.max(self.to),
            ..*self
        }
    }

    /// Returns true if the endpoint with smaller index comes first
    pub fn is_normalized(&self) -> bool {
        self.from <= self.to
    }

    /// Returns true if both endpoints are equal
    pub fn is_loop(&self) -> bool {
        self.from == self.to
    }

    /// Reverses the edge by switching the endpoints
    pub fn reverse(&self) -> Self {
        Self {
            from: self.to,
            to: self.from,
            ..*self
        }
    }

    /// Returns the pair this edge connects when deciding whether two edges are parallel.
    ///
    /// Under a directed interpretation this is `(from, to)`; otherwise the unordered pair is
    /// canonicalized as `(max, min)`.
    pub fn key(&self, directed: bool) -> (Node, Node) {
        if directed {
            (self.from, self.to)
        } else {
            (self.from.max(self.to), self.from.min(self.to))
        }
    }
}

impl From<(Node, Node)> for Edge {
    fn from(value: (Node, Node)) -> Self {
        Edge::new(value.0, value.1)
    }
}

impl From<(Node, Node, f64)> for Edge {
    fn from(value: (Node, Node, f64)) -> Self {
        Edge::new(value.0, value.1).with_weight(value.2)
    }
}

impl From<&Edge> for Edge {
    fn from(value: &Edge) -> Self {
        *value
    }
}
