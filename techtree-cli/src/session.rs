//! Interactive session over a line-oriented input.
//!
//! Plain lines go to the graph's command interpreter. Lines starting with
//! `:` stand in for the window: `:order` draws the tree, `:toggle NAME`
//! clicks a node, and `:quit` closes the session.

use std::io::{self, BufRead, Write};

use techtree_core::{Graph, NodeId};
use tracing::debug;

/// Front-end commands, handled here rather than by the graph.
#[derive(Debug, PartialEq, Eq)]
enum Meta<'a> {
    Order,
    Toggle(&'a str),
    Quit,
    Unknown(&'a str),
}

impl<'a> Meta<'a> {
    fn parse(line: &'a str) -> Option<Self> {
        let rest = line.trim().strip_prefix(':')?;
        let mut tokens = rest.split_whitespace();
        let meta = match tokens.next().unwrap_or_default() {
            "order" => Self::Order,
            "toggle" => Self::Toggle(tokens.next().unwrap_or_default()),
            "quit" => Self::Quit,
            _ => Self::Unknown(rest),
        };
        Some(meta)
    }
}

/// Run the session until `:quit` or end of input.
pub fn run<R: BufRead, W: Write>(graph: &mut Graph, input: R, mut output: W) -> io::Result<()> {
    for line in input.lines() {
        let line = line?;
        debug!(input = %line, "user input");

        match Meta::parse(&line) {
            Some(Meta::Quit) => break,
            Some(Meta::Order) => draw(graph, &mut output)?,
            Some(Meta::Toggle(name)) => match pick(graph, name) {
                Some(id) => {
                    // Rejections are logged by the graph.
                    let _ = graph.toggle_node(id);
                }
                None => writeln!(output, "None of nodes are clicked.")?,
            },
            Some(Meta::Unknown(command)) => {
                writeln!(output, "Unknown session command: :{command}")?;
                writeln!(output, "Session commands: :order, :toggle NAME, :quit")?;
            }
            None => {
                if let Some(text) = graph.process_user_input(&line) {
                    output.write_all(text.as_bytes())?;
                }
            }
        }
        output.flush()?;
    }
    Ok(())
}

/// Print the tree in the order it is laid out, one node per line.
fn draw<W: Write>(graph: &Graph, output: &mut W) -> io::Result<()> {
    for (_, node) in graph.ordered_nodes() {
        let state = if node.is_enabled() { "on" } else { "off" };
        writeln!(output, "{} [{state}]", node.name())?;
    }
    Ok(())
}

/// Find the drawn node with this name, the way a click resolves to a node.
fn pick(graph: &Graph, name: &str) -> Option<NodeId> {
    graph
        .ordered_nodes()
        .find(|(_, node)| node.name() == name)
        .map(|(id, _)| id)
}
