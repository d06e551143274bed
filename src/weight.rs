/*!
# Edge Weights

An edge is either **unweighted** (it is present, nothing more) or **weighted** with a number.
Within one graph all present edges share the same [`Weighting`]; mixing both kinds is
rejected at construction and on every mutation.

Absence of an edge is never encoded as a weight: matrices store `Option<EdgeWeight>` cells
where `None` is the "no edge" sentinel. As a consequence, absent cells never take part in
the homogeneity check and a weight of `0` is a present edge.
*/

use std::fmt::Display;

use serde::{Serialize, Serializer};

use crate::error::*;

/// Weighting mode of a graph
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Weighting {
    Unweighted,
    Weighted,
}

/// Tagged weight of a present edge
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub enum EdgeWeight {
    /// Presence only
    #[default]
    Unweighted,
    /// Presence with a numeric weight
    Weighted(f64),
}

impl EdgeWeight {
    /// Creates a numeric weight.
    /// Returns an error if `weight` is NaN as it cannot be compared to other weights.
    pub fn weighted(weight: f64) -> Result<Self> {
        if weight.is_nan() {
            return Err(GraphError::InvalidWeight { weight });
        }
        Ok(Self::Weighted(weight))
    }

    /// Returns the numeric weight if present
    pub fn value(&self) -> Option<f64> {
        match self {
            Self::Unweighted => None,
            Self::Weighted(w) => Some(*w),
        }
    }

    /// Returns *true* if the weight carries a number
    pub fn is_weighted(&self) -> bool {
        matches!(self, Self::Weighted(_))
    }

    /// Returns the weighting mode this weight belongs to
    pub fn weighting(&self) -> Weighting {
        match self {
            Self::Unweighted => Weighting::Unweighted,
            Self::Weighted(_) => Weighting::Weighted,
        }
    }

    /// Returns *true* if `self` should replace `current` when collapsing parallel edges.
    /// Unweighted edges never replace an existing one; weighted edges replace it on `<=`.
    pub(crate) fn supersedes(&self, current: &Self) -> bool {
        match (self, current) {
            (Self::Weighted(new), Self::Weighted(old)) => new <= old,
            _ => false,
        }
    }

    /// Checks that the weight is admissible in a graph of the given weighting.
    /// If the graph has no weighting yet (`None`), any valid weight is admissible.
    pub(crate) fn check(&self, weighting: Option<Weighting>) -> Result<()> {
        if let Self::Weighted(w) = self {
            if w.is_nan() {
                return Err(GraphError::InvalidWeight { weight: *w });
            }
        }

        match weighting {
            Some(mode) if mode != self.weighting() => Err(GraphError::MixedWeighting),
            _ => Ok(()),
        }
    }
}

impl From<f64> for EdgeWeight {
    fn from(value: f64) -> Self {
        Self::Weighted(value)
    }
}

impl Display for EdgeWeight {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unweighted => write!(f, "1"),
            Self::Weighted(w) => write!(f, "{w}"),
        }
    }
}

// Unweighted edges are written as `true`, weighted ones as their number
impl Serialize for EdgeWeight {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Unweighted => serializer.serialize_bool(true),
            Self::Weighted(w) => serializer.serialize_f64(*w),
        }
    }
}

/// Returns the common weighting of all given weights, `None` if there are none.
/// Returns an error if the weights are not homogeneous.
pub(crate) fn common_weighting<'a, I>(weights: I) -> Result<Option<Weighting>>
where
    I: IntoIterator<Item = &'a EdgeWeight>,
{
    let mut mode = None;
    for weight in weights {
        weight.check(mode)?;
        mode = Some(weight.weighting());
    }
    Ok(mode)
}
