//! Command Interpreter
//!
//! Parses the text a user types into a [`Command`] and runs it against a
//! [`Graph`]. Tokens are split on whitespace; the first selects the command
//! and missing arguments read as empty names, which the graph then rejects.

use tracing::debug;

use crate::error::Result;
use crate::graph::Graph;

/// Printed for any input that is not one of the known commands.
pub const USAGE: &str = "Invalid command. Please enter one of the following commands:
 - addnode A
 - addedge A B (B relies on A)
 - enable A
 - disable A
 - printgraph
";

/// A parsed user command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `addnode A`
    AddNode(String),

    /// `addedge A B`: B relies on A.
    AddEdge { parent: String, child: String },

    /// `enable A`
    Enable(String),

    /// `disable A`
    Disable(String),

    /// `printgraph`
    PrintGraph,

    /// Anything else, kept verbatim.
    Unknown(String),
}

impl Command {
    /// Parse a line of user input.
    ///
    /// Extra tokens after the expected arguments are ignored.
    pub fn parse(input: &str) -> Self {
        let mut tokens = input.split_whitespace();
        let mut arg = || tokens.next().unwrap_or_default().to_owned();

        match arg().as_str() {
            "addnode" => Self::AddNode(arg()),
            "addedge" => {
                let parent = arg();
                let child = arg();
                Self::AddEdge { parent, child }
            }
            "enable" => Self::Enable(arg()),
            "disable" => Self::Disable(arg()),
            "printgraph" => Self::PrintGraph,
            _ => Self::Unknown(input.to_owned()),
        }
    }
}

impl Graph {
    /// Run a parsed command.
    ///
    /// Returns the text the caller should show: the graph dump for
    /// `printgraph`, the usage message for unknown input, nothing otherwise.
    pub fn execute(&mut self, command: Command) -> Result<Option<String>> {
        match command {
            Command::AddNode(name) => self.add_node(&name).map(|_| None),
            Command::AddEdge { parent, child } => self.add_edge(&parent, &child).map(|()| None),
            Command::Enable(name) => self.enable_node(&name).map(|()| None),
            Command::Disable(name) => self.disable_node(&name).map(|()| None),
            Command::PrintGraph => Ok(Some(self.render_graph())),
            Command::Unknown(input) => {
                debug!(%input, "unrecognized command");
                Ok(Some(USAGE.to_owned()))
            }
        }
    }

    /// Parse and run a line of user input.
    ///
    /// Rejected operations are logged by the graph and leave it unchanged;
    /// they are not reported back as errors.
    pub fn process_user_input(&mut self, input: &str) -> Option<String> {
        self.execute(Command::parse(input)).unwrap_or_else(|err| {
            debug!(%input, %err, "command rejected");
            None
        })
    }
}
