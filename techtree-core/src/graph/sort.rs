//! Topological Sort
//!
//! Orders the whole tech tree so that every node comes before all of the
//! nodes that require it.
//!
//! # Algorithm
//!
//! Kahn's algorithm over the node arena:
//!
//! 1. Count in-degrees from every node's `children` list
//! 2. Seed a FIFO queue with the zero in-degree nodes, in arena order
//! 3. Pop a node, append it, and decrement each of its children in order
//! 4. Enqueue any child whose in-degree reaches zero
//!
//! Nodes on a cycle never reach zero, so a result shorter than the node
//! count means the edge set is cyclic. The graph relies on this to reject
//! edges after trying them.
//!
//! Seeding in arena order makes the output fully deterministic: ties between
//! simultaneously available nodes are broken by insertion order.

use std::collections::VecDeque;

use indexmap::IndexMap;

use super::node::{Node, NodeId};

/// Perform a topological sort of every node in `nodes`.
///
/// Returns fewer than `nodes.len()` ids if the edges contain a cycle.
pub(crate) fn topological_sort(nodes: &IndexMap<String, Node>) -> Vec<NodeId> {
    let mut in_degree = vec![0usize; nodes.len()];
    for node in nodes.values() {
        for child in node.children() {
            if let Some(degree) = in_degree.get_mut(child.raw()) {
                *degree += 1;
            }
        }
    }

    let mut queue: VecDeque<NodeId> = in_degree
        .iter()
        .enumerate()
        .filter(|(_, degree)| **degree == 0)
        .map(|(index, _)| NodeId::from(index))
        .collect();
    let mut result = Vec::with_capacity(nodes.len());

    while let Some(node_id) = queue.pop_front() {
        result.push(node_id);

        if let Some((_, node)) = nodes.get_index(node_id.raw()) {
            for &child in node.children() {
                if let Some(degree) = in_degree.get_mut(child.raw()) {
                    *degree = degree.saturating_sub(1);
                    if *degree == 0 {
                        queue.push_back(child);
                    }
                }
            }
        }
    }

    result
}

/// Check whether `order` is a valid linearisation of the edges in `nodes`.
///
/// Every node must appear exactly once and before all of its children.
pub(crate) fn is_topological(nodes: &IndexMap<String, Node>, order: &[NodeId]) -> bool {
    if order.len() != nodes.len() {
        return false;
    }

    let mut position = vec![None; nodes.len()];
    for (index, id) in order.iter().enumerate() {
        match position.get_mut(id.raw()) {
            Some(slot) if slot.is_none() => *slot = Some(index),
            _ => return false,
        }
    }

    nodes.values().enumerate().all(|(parent, node)| {
        node.children()
            .iter()
            .all(|child| position.get(parent) < position.get(child.raw()))
    })
}
