//! Resource File
//!
//! The tech tree is stored as plain text, one record per line:
//!
//! ```text
//! Iron Mining
//! Steel Iron
//! Steel
//! ```
//!
//! - `CHILD PARENT` registers both nodes and the edge `PARENT -> CHILD`.
//! - `NAME` registers a node with no recorded children.
//!
//! Nodes are written in cached topological order. A node without children
//! is written bare; a node with children is written only through its
//! `child parent` lines. Enabled flags are not stored.
//!
//! Reading is lenient: every line goes through the normal graph operations
//! and whatever they reject (empty names, duplicates, cycles) is logged and
//! skipped.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::PersistError;
use crate::graph::Graph;

/// Build a graph from resource text.
pub fn parse(text: &str) -> Graph {
    let mut graph = Graph::new();
    for line in text.lines() {
        let mut tokens = line.split_whitespace();
        let child = tokens.next().unwrap_or_default();
        let parent = tokens.next().unwrap_or_default();

        // Rejections are already logged by the graph.
        let _ = graph.add_node(child);
        let _ = graph.add_node(parent);
        let _ = graph.add_edge(parent, child);
    }
    graph
}

/// Render a graph as resource text.
pub fn render(graph: &Graph) -> String {
    let mut text = String::new();
    for (_, node) in graph.ordered_nodes() {
        if node.children().is_empty() {
            let _ = writeln!(text, "{}", node.name());
            continue;
        }
        for &child in node.children() {
            if let Some(child) = graph.node(child) {
                let _ = writeln!(text, "{} {}", child.name(), node.name());
            }
        }
    }
    text
}

/// Load a graph from the resource file at `path`.
pub fn load(path: impl AsRef<Path>) -> Result<Graph, PersistError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| PersistError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let graph = parse(&text);
    info!(
        path = %path.display(),
        nodes = graph.len(),
        edges = graph.edge_count(),
        "loaded tech tree"
    );
    Ok(graph)
}

/// Write `graph` to the resource file at `path`, replacing its contents.
pub fn save(graph: &Graph, path: impl AsRef<Path>) -> Result<(), PersistError> {
    let path = path.as_ref();
    fs::write(path, render(graph)).map_err(|source| PersistError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    info!(
        path = %path.display(),
        nodes = graph.len(),
        edges = graph.edge_count(),
        "saved tech tree"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Graph {
        let mut graph = Graph::new();
        for name in ["Mining", "Iron", "Steel", "Pottery"] {
            graph.add_node(name).unwrap();
        }
        graph.add_edge("Mining", "Iron").unwrap();
        graph.add_edge("Iron", "Steel").unwrap();
        graph
    }

    #[test]
    fn render_writes_edges_then_leaves() {
        // Order is Mining, Pottery, Iron, Steel.
        assert_eq!(render(&sample()), "Iron Mining\nPottery\nSteel Iron\nSteel\n");
    }

    #[test]
    fn render_empty_graph() {
        assert_eq!(render(&Graph::new()), "");
    }

    #[test]
    fn parse_reads_edges_and_bare_nodes() {
        let graph = parse("Iron Mining\nSteel Iron\nPottery\n");
        assert_eq!(graph.len(), 4);
        let edges: Vec<_> = graph.edges().collect();
        assert_eq!(edges, vec![("Iron", "Steel"), ("Mining", "Iron")]);
        assert!(graph.is_consistent());
    }

    #[test]
    fn parse_is_lenient() {
        let text = "\n  \nA\nB A extra\nA B\nB A\n";
        let graph = parse(text);

        assert_eq!(graph.len(), 2);
        // `A B` would close a cycle and the repeated `B A` is a duplicate.
        let edges: Vec<_> = graph.edges().collect();
        assert_eq!(edges, vec![("A", "B")]);
    }

    #[test]
    fn parse_render_round_trip() {
        let graph = sample();
        let reloaded = parse(&render(&graph));

        let mut names: Vec<_> = graph.ordered_nodes().map(|(_, n)| n.name()).collect();
        let mut reloaded_names: Vec<_> = reloaded.ordered_nodes().map(|(_, n)| n.name()).collect();
        names.sort_unstable();
        reloaded_names.sort_unstable();
        assert_eq!(names, reloaded_names);

        let mut edges: Vec<_> = graph.edges().collect();
        let mut reloaded_edges: Vec<_> = reloaded.edges().collect();
        edges.sort_unstable();
        reloaded_edges.sort_unstable();
        assert_eq!(edges, reloaded_edges);
        assert!(reloaded.is_consistent());
    }

    #[test]
    fn names_with_whitespace_never_reach_the_file() {
        let mut graph = sample();
        assert!(graph.add_node("Iron Age").is_err());

        let reloaded = parse(&render(&graph));
        assert_eq!(reloaded.len(), graph.len());
        assert!(!reloaded.contains("Iron Age"));
        assert!(!reloaded.contains("Age"));
    }

    #[test]
    fn load_and_save_files() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resource.txt");

        save(&sample(), &path).unwrap();
        let graph = load(&path).unwrap();
        assert_eq!(graph.len(), 4);
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn load_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.txt");

        let err = load(&path).unwrap_err();
        assert!(matches!(err, PersistError::Read { .. }));
        assert!(err.to_string().contains("missing.txt"));
    }

    #[test]
    fn save_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no-such-dir").join("resource.txt");

        let err = save(&sample(), &path).unwrap_err();
        assert!(matches!(err, PersistError::Write { .. }));
    }
}
