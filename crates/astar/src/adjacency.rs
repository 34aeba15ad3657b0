//! Explicit adjacency-map graph.
//!
//! A small concrete `Graph` for callers that already hold an edge list. The
//! heuristic is zero everywhere (plain Dijkstra ordering), which is trivially
//! admissible and consistent.

use std::collections::HashMap;

use serde::Deserialize;

use crate::search::{Cost, Graph, Label, LookupError, Neighbors};

/// Whether an edge `i → j` also yields `j → i`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Kind {
    Directed,
    #[default]
    Undirected,
}

/// One weighted edge, as read from an edge list.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct Edge {
    pub from: Label,
    pub to: Label,
    pub cost: Cost,
}

#[derive(Clone, Debug, Default)]
pub struct AdjacencyGraph {
    kind: Kind,
    adjacency: HashMap<Label, Neighbors>,
}

impl AdjacencyGraph {
    pub fn new(kind: Kind) -> Self {
        Self {
            kind,
            adjacency: HashMap::new(),
        }
    }

    pub fn from_edges<I: IntoIterator<Item = Edge>>(kind: Kind, edges: I) -> Self {
        let mut g = Self::new(kind);
        for e in edges {
            g.edge(e.from, e.to, e.cost);
        }
        g
    }

    /// Add or overwrite the edge `i → j` (and `j → i` when undirected).
    /// Both endpoints become known vertices.
    pub fn edge(&mut self, i: Label, j: Label, cost: Cost) {
        self.adjacency.entry(i).or_default().insert(j, cost);
        let back = self.adjacency.entry(j).or_default();
        if self.kind == Kind::Undirected {
            back.insert(i, cost);
        }
    }

    #[inline]
    pub fn contains(&self, label: Label) -> bool {
        self.adjacency.contains_key(&label)
    }

    /// Number of known vertices.
    #[inline]
    pub fn len(&self) -> usize {
        self.adjacency.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }
}

impl Graph for AdjacencyGraph {
    fn neighbors(&self, label: Label) -> Result<Neighbors, LookupError> {
        self.adjacency
            .get(&label)
            .cloned()
            .ok_or(LookupError::UnknownLabel(label))
    }

    fn estimate(&self, _from: Label, _to: Label) -> Cost {
        0.0
    }
}
