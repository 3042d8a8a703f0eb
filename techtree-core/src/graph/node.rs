//! Graph Nodes
//!
//! This module defines the node type that lives in the tech tree.

use std::fmt;

use smallvec::SmallVec;

/// Handle to a node in the tech tree.
///
/// The handle is the node's slot in the graph's arena. Nodes are never
/// removed, so a handle stays valid for the lifetime of the graph that
/// issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// Get the raw arena index.
    pub fn raw(&self) -> usize {
        self.0
    }
}

impl From<usize> for NodeId {
    fn from(index: usize) -> Self {
        Self(index)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Outgoing edges of a node. Most technologies unlock only a few others.
pub type Children = SmallVec<[NodeId; 4]>;

/// A node in the tech tree.
#[derive(Debug, Clone)]
pub struct Node {
    /// Unique name, the external key of the node.
    name: String,

    /// Whether the technology is currently enabled.
    enabled: bool,

    /// Nodes that require this node (children in the DAG), in insertion order.
    children: Children,
}

impl Node {
    /// Create a new enabled node with no children.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            enabled: true,
            children: Children::new(),
        }
    }

    /// Get the node's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Check if the node is enabled.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Get the node's children.
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Check whether `child` is a direct child of this node.
    pub fn has_child(&self, child: NodeId) -> bool {
        self.children.contains(&child)
    }

    pub(crate) fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub(crate) fn push_child(&mut self, child: NodeId) {
        self.children.push(child);
    }

    pub(crate) fn pop_child(&mut self) -> Option<NodeId> {
        self.children.pop()
    }
}
