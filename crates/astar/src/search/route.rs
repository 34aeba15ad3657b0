//! Route reconstruction from the predecessor map.

use std::collections::HashMap;

use super::types::Label;

/// Walk `predecessor` back from `goal` until a label without predecessor (the
/// start) and return the labels in forward order.
///
/// Terminates as long as the map is acyclic, which strictly-improving
/// relaxation guarantees for non-negative costs.
pub(crate) fn reconstruct(goal: Label, predecessor: &HashMap<Label, Label>) -> Vec<Label> {
    let mut route = vec![goal];
    let mut label = goal;
    while let Some(&prev) = predecessor.get(&label) {
        route.push(prev);
        label = prev;
    }
    route.reverse();
    route
}
