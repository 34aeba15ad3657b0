//! Data types for the search: labels, per-node state, the graph capability,
//! configuration and the reported outcome.
//!
//! Kept small and explicit to make `heap`, `registry` and `engine` easy to read.

use std::collections::BTreeMap;

use serde::Serialize;
use thiserror::Error;

/// Opaque integer naming a point in the problem space. Uniqueness is the
/// caller's contract.
pub type Label = i64;

/// Edge and path cost. Must be non-negative. A route whose cost reaches
/// `f64::MAX` (e.g. through an edge of cost `f64::MAX` or `f64::INFINITY`) is
/// never taken.
pub type Cost = f64;

/// Adjacent labels with the cost of moving to each of them.
///
/// A `BTreeMap` so that relaxation visits neighbours in ascending label order;
/// ties between equal-cost alternatives are therefore reproducible.
pub type Neighbors = BTreeMap<Label, Cost>;

/// Failure reported by [`Graph::neighbors`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LookupError {
    #[error("unknown label {0}")]
    UnknownLabel(Label),
    #[error("neighbours of {label} unavailable: {reason}")]
    Unavailable { label: Label, reason: String },
}

/// The problem space as seen by the search.
///
/// Implementations are only read from; sharing one across threads running
/// independent searches is fine as long as the implementation itself is `Sync`.
pub trait Graph {
    /// Adjacent labels of `label` with their (non-negative) edge costs.
    fn neighbors(&self, label: Label) -> Result<Neighbors, LookupError>;

    /// Heuristic cost from `from` to the goal `to` (h in the literature).
    ///
    /// Optimality of the returned route requires this to be admissible and
    /// consistent; neither is checked.
    fn estimate(&self, from: Label, to: Label) -> Cost;
}

/// Index of a [`SearchNode`] inside the registry arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) struct NodeId(pub usize);

/// Per-label search state, created the first time the label is seen.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct SearchNode {
    pub label: Label,
    /// Slot in the open set, `None` when not queued.
    pub position: Option<usize>,
    /// Best known cost from the start (g).
    pub g: Cost,
    /// Estimated total cost through this node to the goal (f = g + h).
    pub f: Cost,
    /// Set once the node has been popped at least once.
    pub expanded: bool,
}

impl SearchNode {
    pub fn unseen(label: Label) -> Self {
        Self {
            label,
            position: None,
            g: Cost::INFINITY,
            f: Cost::INFINITY,
            expanded: false,
        }
    }

    #[inline]
    pub fn is_queued(&self) -> bool {
        self.position.is_some()
    }
}

/// Search configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchCfg {
    /// Never relax a node again once it has been expanded.
    ///
    /// Off by default: the plain algorithm re-opens a node whenever a cheaper
    /// route to it turns up, which together with a consistent heuristic is
    /// what the optimality guarantee rests on. Turning this on changes revisit
    /// order and may lose optimality for inconsistent heuristics.
    pub closed_set: bool,
}

/// Counters collected during one search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    /// Nodes popped from the open set.
    pub expansions: usize,
    /// Successful relaxations (strictly cheaper routes recorded).
    pub relaxations: usize,
    /// Relaxations that pushed an already expanded node back into the open set.
    pub reopened: usize,
    /// Neighbour lookups that failed and were treated as empty.
    pub lookup_failures: usize,
    /// Largest open-set size observed.
    pub peak_open: usize,
}

/// Outcome of [`find_with`](super::find_with).
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Search {
    /// Labels from start to goal inclusive; empty when no route exists.
    pub route: Vec<Label>,
    /// Total cost of `route`, `None` when no route exists.
    pub cost: Option<Cost>,
    pub stats: SearchStats,
}

impl Search {
    #[inline]
    pub fn found(&self) -> bool {
        !self.route.is_empty()
    }
}
