//! Error types for techtree-core.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::graph::NodeId;

/// Result type for graph operations.
pub type Result<T> = std::result::Result<T, GraphError>;

/// Reasons a graph operation was refused.
///
/// None of these leave the graph modified: every operation either commits
/// or returns one of these with the previous state intact.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// Node names must be non-empty.
    #[error("node name should not be empty")]
    EmptyName,

    /// Names are single tokens; whitespace would not survive the resource file.
    #[error("node name should not contain whitespace: {0:?}")]
    InvalidName(String),

    /// No node with this name exists.
    #[error("node not found: {0}")]
    UnknownNode(String),

    /// The handle does not belong to this graph.
    #[error("no node for handle {0}")]
    UnknownHandle(NodeId),

    /// The edge is already present.
    #[error("edge already exists between: {parent} {child}")]
    DuplicateEdge { parent: String, child: String },

    /// Adding the edge would close a cycle.
    #[error("edge {parent} -> {child} would create a cycle")]
    Cycle { parent: String, child: String },

    /// A direct parent is disabled, so the node cannot be enabled.
    #[error("node cannot be enabled: {node} (parent {parent} is disabled)")]
    ParentDisabled { node: String, parent: String },
}

/// Failures reading or writing the resource file.
#[derive(Debug, Error)]
pub enum PersistError {
    #[error("cannot open {} for reading", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot open {} for writing", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
