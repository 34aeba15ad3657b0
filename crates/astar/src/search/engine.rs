//! Best-first expansion loop.
//!
//! Nodes are implicitly unseen (no registry entry), open (queued) or expanded
//! (popped, not queued). Without `SearchCfg::closed_set` an expanded node is
//! pushed again whenever a strictly cheaper route to it is found; with a
//! consistent heuristic this never happens, with an inconsistent one it keeps
//! the result optimal at the price of re-expansion.

use std::collections::HashMap;

use super::heap::IndexedMinHeap;
use super::registry::NodeRegistry;
use super::route::reconstruct;
use super::types::{Cost, Graph, Label, Neighbors, Search, SearchCfg, SearchStats};

/// Cheapest route from `start` to `goal`, or an empty vector if `goal` is
/// unreachable.
///
/// `find(g, x, x)` is `[x]`.
pub fn find<G: Graph + ?Sized>(graph: &G, start: Label, goal: Label) -> Vec<Label> {
    find_with(graph, start, goal, SearchCfg::default()).route
}

/// Like [`find`], also reporting the route cost and search counters.
pub fn find_with<G: Graph + ?Sized>(
    graph: &G,
    start: Label,
    goal: Label,
    cfg: SearchCfg,
) -> Search {
    SearchRunner::new(graph, goal, cfg).run(start)
}

/// State owned by a single search invocation.
struct SearchRunner<'a, G: ?Sized> {
    graph: &'a G,
    goal: Label,
    cfg: SearchCfg,
    registry: NodeRegistry,
    open: IndexedMinHeap,
    predecessor: HashMap<Label, Label>,
    stats: SearchStats,
}

impl<'a, G: Graph + ?Sized> SearchRunner<'a, G> {
    fn new(graph: &'a G, goal: Label, cfg: SearchCfg) -> Self {
        Self {
            graph,
            goal,
            cfg,
            registry: NodeRegistry::new(),
            open: IndexedMinHeap::new(),
            predecessor: HashMap::new(),
            stats: SearchStats::default(),
        }
    }

    fn run(mut self, start: Label) -> Search {
        let id = self.registry.get_or_create(start);
        let h = self.graph.estimate(start, self.goal);
        let node = self.registry.node_mut(id);
        node.g = 0.0;
        node.f = h;
        self.open.push(self.registry.nodes_mut(), id);
        self.stats.peak_open = 1;

        while let Some(current) = self.open.pop_min(self.registry.nodes_mut()) {
            self.check_open();
            self.stats.expansions += 1;
            let node = self.registry.node_mut(current);
            node.expanded = true;
            let (label, g) = (node.label, node.g);
            tracing::trace!(label, g, open = self.open.len(), "expand");
            if label == self.goal {
                return self.finish(Some(g));
            }
            for (next, cost) in self.adjacency(label) {
                self.relax(label, g, next, cost);
                self.check_open();
            }
        }
        self.finish(None)
    }

    /// Neighbours of `label`. A failed lookup counts as a node without
    /// outgoing edges: the failure is recorded and the search carries on.
    fn adjacency(&mut self, label: Label) -> Neighbors {
        match self.graph.neighbors(label) {
            Ok(neighbors) => neighbors,
            Err(err) => {
                self.stats.lookup_failures += 1;
                tracing::debug!(label, %err, "neighbour lookup failed, treating as no neighbours");
                Neighbors::new()
            }
        }
    }

    fn relax(&mut self, from: Label, from_g: Cost, to: Label, cost: Cost) {
        let id = self.registry.get_or_create(to);
        let node = self.registry.node(id);
        if self.cfg.closed_set && node.expanded {
            return;
        }
        let candidate = from_g + cost;
        // `Cost::MAX` and above is impassable.
        if candidate < node.g && candidate < Cost::MAX {
            let (queued, reopened) = (node.is_queued(), node.expanded);
            self.predecessor.insert(to, from);
            let h = self.graph.estimate(to, self.goal);
            let node = self.registry.node_mut(id);
            node.g = candidate;
            node.f = candidate + h;
            self.stats.relaxations += 1;
            if queued {
                self.open.fix(self.registry.nodes_mut(), id);
            } else {
                if reopened {
                    self.stats.reopened += 1;
                }
                self.open.push(self.registry.nodes_mut(), id);
                self.stats.peak_open = self.stats.peak_open.max(self.open.len());
            }
        }
    }

    /// Heap order and back-pointers are verified after every step in tests.
    #[inline]
    fn check_open(&self) {
        #[cfg(test)]
        assert!(
            self.open.is_valid(self.registry.nodes()),
            "open set out of order"
        );
    }

    fn finish(self, cost: Option<Cost>) -> Search {
        let route = match cost {
            Some(_) => reconstruct(self.goal, &self.predecessor),
            None => Vec::new(),
        };
        tracing::debug!(
            goal = self.goal,
            found = cost.is_some(),
            hops = route.len(),
            expansions = self.stats.expansions,
            discovered = self.registry.len(),
            lookup_failures = self.stats.lookup_failures,
            "search finished"
        );
        Search {
            route,
            cost,
            stats: self.stats,
        }
    }
}
