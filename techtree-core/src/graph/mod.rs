//! Tech Tree Graph
//!
//! This module implements the prerequisite graph that backs the tech tree.
//!
//! # Overview
//!
//! The graph is a directed acyclic graph (DAG) where:
//!
//! - Nodes represent technologies, keyed by a unique name
//! - Edges represent prerequisites: if B requires A, there is an edge from A to B
//!
//! Disabling a node disables everything reachable from it. Enabling a node
//! only touches that node, and only succeeds if none of its direct parents
//! are disabled.
//!
//! # Design Decisions
//!
//! 1. Nodes live in a single name-keyed arena (`IndexMap`). A node's index
//!    in the arena is its `NodeId`, and `children` lists store ids rather
//!    than references. Nodes are never removed, so ids stay valid.
//!
//! 2. Only forward edges are stored. Parent lookups scan the arena, which
//!    is linear in the node count but only happens on enable.
//!
//! 3. The topological order is cached and replaced after every structural
//!    change. Edge insertion is tried first and reverted if the re-sort
//!    comes up short, which is the only cycle check the graph needs.

mod node;
mod sort;

use std::fmt::Write as _;
use std::io;

use indexmap::IndexMap;
use tracing::{debug, warn};

use crate::error::{GraphError, Result};

pub use node::{Children, Node, NodeId};

/// The tech tree: owns every node and the cached topological order.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    /// All nodes, indexed by name. The entry index is the node's id.
    nodes: IndexMap<String, Node>,

    /// Cached topological order over `nodes`.
    order: Vec<NodeId>,
}

impl Graph {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node with the given name.
    ///
    /// Adding a name that already exists is a no-op that returns the
    /// existing node's id.
    pub fn add_node(&mut self, name: &str) -> Result<NodeId> {
        if name.is_empty() {
            warn!("node name should not be empty");
            return Err(GraphError::EmptyName);
        }

        if name.chars().any(char::is_whitespace) {
            warn!(node = name, "node name should not contain whitespace");
            return Err(GraphError::InvalidName(name.to_owned()));
        }

        if let Some(index) = self.nodes.get_index_of(name) {
            debug!(node = name, "node exists, skip add node");
            return Ok(NodeId::from(index));
        }

        let (index, _) = self.nodes.insert_full(name.to_owned(), Node::new(name));
        self.order = sort::topological_sort(&self.nodes);
        debug!(node = name, "node added");
        Ok(NodeId::from(index))
    }

    /// Add an edge: `child` requires `parent`.
    ///
    /// The edge is appended, the whole graph re-sorted, and the edge removed
    /// again if the sort shows a cycle. On any error the graph is unchanged.
    pub fn add_edge(&mut self, parent: &str, child: &str) -> Result<()> {
        let (Some(parent_index), Some(child_index)) =
            (self.nodes.get_index_of(parent), self.nodes.get_index_of(child))
        else {
            warn!(%parent, %child, "node not found, skip add edge");
            let missing = if self.nodes.contains_key(parent) { child } else { parent };
            return Err(GraphError::UnknownNode(missing.to_owned()));
        };
        let child_id = NodeId::from(child_index);

        if self.nodes[parent_index].has_child(child_id) {
            warn!(%parent, %child, "edge already exists");
            return Err(GraphError::DuplicateEdge {
                parent: parent.to_owned(),
                child: child.to_owned(),
            });
        }

        self.nodes[parent_index].push_child(child_id);
        let order = sort::topological_sort(&self.nodes);
        if order.len() != self.nodes.len() {
            self.nodes[parent_index].pop_child();
            warn!(%parent, %child, "there is a cycle in the DAG, skip add edge");
            return Err(GraphError::Cycle {
                parent: parent.to_owned(),
                child: child.to_owned(),
            });
        }

        self.order = order;
        debug!(%parent, %child, "edge added");
        Ok(())
    }

    /// Disable a node and everything that depends on it.
    pub fn disable_node(&mut self, name: &str) -> Result<()> {
        let Some(index) = self.nodes.get_index_of(name) else {
            warn!(node = name, "node not found, skip disable node");
            return Err(GraphError::UnknownNode(name.to_owned()));
        };
        self.disable_subtree(NodeId::from(index));
        Ok(())
    }

    /// Enable a single node.
    ///
    /// Refused while any direct parent is disabled. Children are left as
    /// they are; enabling never cascades.
    pub fn enable_node(&mut self, name: &str) -> Result<()> {
        let Some(index) = self.nodes.get_index_of(name) else {
            warn!(node = name, "node not found, skip enable node");
            return Err(GraphError::UnknownNode(name.to_owned()));
        };

        if let Some(parent) = self.disabled_parent(NodeId::from(index)) {
            warn!(node = name, blocked_by = parent.name(), "node cannot be enabled");
            return Err(GraphError::ParentDisabled {
                node: name.to_owned(),
                parent: parent.name().to_owned(),
            });
        }

        self.nodes[index].set_enabled(true);
        debug!(node = name, "node enabled");
        Ok(())
    }

    /// Flip a node's state: enabled nodes are disabled with their subtree,
    /// disabled nodes are enabled if their parents allow it.
    pub fn toggle_node(&mut self, id: NodeId) -> Result<()> {
        let Some(node) = self.node(id) else {
            warn!(%id, "no node for handle, skip toggle");
            return Err(GraphError::UnknownHandle(id));
        };

        let name = node.name().to_owned();
        if node.is_enabled() {
            self.disable_node(&name)
        } else {
            self.enable_node(&name)
        }
    }

    /// Check that no direct parent of `id` is disabled.
    ///
    /// Only direct parents count: a node whose grandparent is disabled may
    /// still pass if its own parents are enabled.
    pub fn parents_enabled(&self, id: NodeId) -> bool {
        self.disabled_parent(id).is_none()
    }

    /// Find the first disabled node (in arena order) that lists `id` as a child.
    fn disabled_parent(&self, id: NodeId) -> Option<&Node> {
        self.nodes
            .values()
            .find(|parent| !parent.is_enabled() && parent.has_child(id))
    }

    fn disable_subtree(&mut self, id: NodeId) {
        let mut stack = vec![id];

        // Depth-first, children visited in edge order.
        while let Some(node_id) = stack.pop() {
            let Some((_, node)) = self.nodes.get_index_mut(node_id.raw()) else {
                continue;
            };
            if !node.is_enabled() {
                continue;
            }
            node.set_enabled(false);
            debug!(node = node.name(), "node disabled");

            stack.extend(node.children().iter().rev().copied());
        }
    }

    /// Get the cached topological order.
    pub fn topological_order(&self) -> &[NodeId] {
        &self.order
    }

    /// Iterate nodes in cached topological order.
    pub fn ordered_nodes(&self) -> impl Iterator<Item = (NodeId, &Node)> + '_ {
        self.order
            .iter()
            .filter_map(|&id| self.node(id).map(|node| (id, node)))
    }

    /// Get a node by handle.
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get_index(id.raw()).map(|(_, node)| node)
    }

    /// Get a node by name.
    pub fn node_by_name(&self, name: &str) -> Option<&Node> {
        self.nodes.get(name)
    }

    /// Resolve a name to its handle.
    pub fn id_of(&self, name: &str) -> Option<NodeId> {
        self.nodes.get_index_of(name).map(NodeId::from)
    }

    /// Check if a node with this name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.nodes.contains_key(name)
    }

    /// Names of a node's children, in edge insertion order.
    pub fn children_names(&self, id: NodeId) -> Vec<&str> {
        self.node(id)
            .map(|node| {
                node.children()
                    .iter()
                    .filter_map(|&child| self.node(child).map(Node::name))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Iterate over every edge as `(parent, child)` names, in arena order.
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.nodes.values().flat_map(move |parent| {
            parent
                .children()
                .iter()
                .filter_map(move |&child| self.node(child).map(|c| (parent.name(), c.name())))
        })
    }

    /// Get the total number of nodes in the graph.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Get the total number of edges in the graph.
    pub fn edge_count(&self) -> usize {
        self.nodes.values().map(|node| node.children().len()).sum()
    }

    /// Check the cached order against the current edges.
    pub fn is_consistent(&self) -> bool {
        sort::is_topological(&self.nodes, &self.order)
    }

    /// Write a diagnostic dump of every node, its state, and its children.
    pub fn print_graph<W: io::Write>(&self, mut out: W) -> io::Result<()> {
        out.write_all(self.render_graph().as_bytes())
    }

    /// Render the diagnostic dump as a string.
    pub fn render_graph(&self) -> String {
        let mut dump = String::new();
        for (index, node) in self.nodes.values().enumerate() {
            let _ = writeln!(dump, "Node: {}, Enabled: {}", node.name(), u8::from(node.is_enabled()));
            let children = self.children_names(NodeId::from(index)).join(" ");
            let _ = writeln!(dump, "----Children: {children}");
        }
        dump
    }
}
