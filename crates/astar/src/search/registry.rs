//! Label → node arena. One registry per search; nodes are created on first
//! sight and live until the search returns.

use std::collections::HashMap;

use super::types::{Label, NodeId, SearchNode};

#[derive(Clone, Debug, Default)]
pub(crate) struct NodeRegistry {
    nodes: Vec<SearchNode>,
    ids: HashMap<Label, NodeId>,
}

impl NodeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Id of the node for `label`, creating an unseen node (g = +inf, not
    /// queued) on first reference.
    pub fn get_or_create(&mut self, label: Label) -> NodeId {
        let nodes = &mut self.nodes;
        *self.ids.entry(label).or_insert_with(|| {
            nodes.push(SearchNode::unseen(label));
            NodeId(nodes.len() - 1)
        })
    }

    #[inline]
    pub fn node(&self, id: NodeId) -> &SearchNode {
        &self.nodes[id.0]
    }

    #[inline]
    pub fn node_mut(&mut self, id: NodeId) -> &mut SearchNode {
        &mut self.nodes[id.0]
    }

    /// The whole arena, for the heap to update positions in place.
    #[inline]
    pub fn nodes_mut(&mut self) -> &mut [SearchNode] {
        &mut self.nodes
    }

    #[cfg(test)]
    pub fn nodes(&self) -> &[SearchNode] {
        &self.nodes
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }
}
