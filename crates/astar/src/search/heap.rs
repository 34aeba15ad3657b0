//! Indexed binary min-heap over registry nodes, ordered by `f`.
//!
//! The heap stores arena ids; every swap writes the new slot back into the
//! node's `position`, so decrease-key finds its element without scanning.
//! Order among equal `f` is whatever the sift sequence produces and is not part
//! of any contract.

use super::types::{NodeId, SearchNode};

#[derive(Clone, Debug, Default)]
pub(crate) struct IndexedMinHeap {
    slots: Vec<NodeId>,
}

impl IndexedMinHeap {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Insert `id`, which must not already be queued.
    pub fn push(&mut self, nodes: &mut [SearchNode], id: NodeId) {
        debug_assert!(!nodes[id.0].is_queued(), "node pushed twice");
        let slot = self.slots.len();
        nodes[id.0].position = Some(slot);
        self.slots.push(id);
        self.sift_up(nodes, slot);
    }

    /// Remove the node with the smallest `f` and mark it as not queued.
    pub fn pop_min(&mut self, nodes: &mut [SearchNode]) -> Option<NodeId> {
        let last = self.slots.len().checked_sub(1)?;
        self.swap(nodes, 0, last);
        self.sift_down(nodes, 0, last);
        let id = self.slots.pop()?;
        nodes[id.0].position = None;
        Some(id)
    }

    /// Restore order after the `f` of an already queued node decreased.
    pub fn fix(&mut self, nodes: &mut [SearchNode], id: NodeId) {
        if let Some(slot) = nodes[id.0].position {
            self.sift_up(nodes, slot);
        }
    }

    /// True if every parent's `f` is at most its children's and every stored
    /// position points back at its own slot.
    #[cfg(test)]
    pub fn is_valid(&self, nodes: &[SearchNode]) -> bool {
        self.slots.iter().enumerate().all(|(i, id)| {
            let node = &nodes[id.0];
            let parent_ok = i == 0 || nodes[self.slots[(i - 1) / 2].0].f <= node.f;
            parent_ok && node.position == Some(i)
        })
    }

    #[inline]
    fn less(&self, nodes: &[SearchNode], i: usize, j: usize) -> bool {
        nodes[self.slots[i].0].f < nodes[self.slots[j].0].f
    }

    #[inline]
    fn swap(&mut self, nodes: &mut [SearchNode], i: usize, j: usize) {
        self.slots.swap(i, j);
        nodes[self.slots[i].0].position = Some(i);
        nodes[self.slots[j].0].position = Some(j);
    }

    fn sift_up(&mut self, nodes: &mut [SearchNode], mut j: usize) {
        while j > 0 {
            let parent = (j - 1) / 2;
            if !self.less(nodes, j, parent) {
                break;
            }
            self.swap(nodes, parent, j);
            j = parent;
        }
    }

    /// Sift within `slots[..n]`.
    fn sift_down(&mut self, nodes: &mut [SearchNode], mut i: usize, n: usize) {
        loop {
            let left = 2 * i + 1;
            if left >= n {
                break;
            }
            let mut child = left;
            let right = left + 1;
            if right < n && self.less(nodes, right, left) {
                child = right;
            }
            if !self.less(nodes, child, i) {
                break;
            }
            self.swap(nodes, i, child);
            i = child;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arena(fs: &[f64]) -> Vec<SearchNode> {
        fs.iter()
            .enumerate()
            .map(|(i, &f)| {
                let mut n = SearchNode::unseen(i as i64);
                n.f = f;
                n
            })
            .collect()
    }

    #[test]
    fn pops_in_ascending_f_and_clears_positions() {
        let mut nodes = arena(&[5.0, 1.0, 4.0, 2.0, 3.0]);
        let mut heap = IndexedMinHeap::new();
        for i in 0..nodes.len() {
            heap.push(&mut nodes, NodeId(i));
            assert!(heap.is_valid(&nodes));
        }
        let mut out = Vec::new();
        while let Some(id) = heap.pop_min(&mut nodes) {
            assert!(heap.is_valid(&nodes));
            assert_eq!(nodes[id.0].position, None);
            out.push(nodes[id.0].f);
        }
        assert_eq!(out, vec![1.0, 2.0, 3.0, 4.0, 5.0]);
        assert_eq!(heap.len(), 0);
    }

    #[test]
    fn fix_moves_decreased_node_to_root() {
        let mut nodes = arena(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        let mut heap = IndexedMinHeap::new();
        for i in 0..nodes.len() {
            heap.push(&mut nodes, NodeId(i));
        }
        nodes[5].f = 0.5;
        heap.fix(&mut nodes, NodeId(5));
        assert!(heap.is_valid(&nodes));
        assert_eq!(nodes[5].position, Some(0));
        assert_eq!(heap.pop_min(&mut nodes), Some(NodeId(5)));
    }

    #[test]
    fn pop_on_empty_is_none() {
        let mut nodes = arena(&[]);
        let mut heap = IndexedMinHeap::new();
        assert_eq!(heap.pop_min(&mut nodes), None);
        assert_eq!(heap.len(), 0);
    }
}
