//! Tech Tree Core
//!
//! This crate provides the graph engine behind the Tech Tree simulator.
//! It implements:
//!
//! - A prerequisite DAG with cycle-safe edge insertion
//! - A deterministic topological order, kept current after every change
//! - Cascading disable and parent-gated enable
//! - A small text command language
//! - A line-oriented resource file format
//!
//! Drawing, input handling, and hit-testing belong to the front-end. It
//! reads [`Graph::ordered_nodes`] to lay nodes out, submits typed lines to
//! [`Graph::process_user_input`], and passes clicked handles to
//! [`Graph::toggle_node`].
//!
//! # Architecture
//!
//! - `graph`: Nodes, the graph arena, and the topological sort
//! - `command`: Command parsing and dispatch
//! - `persist`: Resource file reading and writing
//! - `error`: Error types
//!
//! # Example
//!
//! ```rust
//! use techtree_core::Graph;
//!
//! let mut graph = Graph::new();
//! graph.process_user_input("addnode Mining");
//! graph.process_user_input("addnode Iron");
//! graph.process_user_input("addedge Mining Iron");
//!
//! // Disabling a prerequisite disables everything that needs it.
//! graph.process_user_input("disable Mining");
//! assert!(!graph.node_by_name("Iron").unwrap().is_enabled());
//!
//! // Iron cannot come back while Mining is off.
//! graph.process_user_input("enable Iron");
//! assert!(!graph.node_by_name("Iron").unwrap().is_enabled());
//! ```

pub mod command;
pub mod error;
pub mod graph;
pub mod persist;

pub use command::{Command, USAGE};
pub use error::{GraphError, PersistError};
pub use graph::{Graph, Node, NodeId};
