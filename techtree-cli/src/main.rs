//! Tech Tree CLI - terminal front-end for the tech tree simulator.

mod session;

use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use techtree_core::persist;

#[derive(Parser)]
#[command(name = "techtree")]
#[command(about = "Build and explore a tech tree of prerequisites")]
#[command(version)]
struct Cli {
    /// Resource file loaded at startup and written back on exit
    #[arg(short, long, default_value = "resource.txt")]
    resource: PathBuf,

    /// Do not write the resource file on exit
    #[arg(long)]
    no_save: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        tracing_subscriber::EnvFilter::from_default_env()
            .add_directive(tracing::Level::DEBUG.into())
    } else {
        tracing_subscriber::EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into())
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let mut graph = persist::load(&cli.resource)
        .with_context(|| format!("failed to load {}", cli.resource.display()))?;

    let stdin = io::stdin();
    session::run(&mut graph, stdin.lock(), io::stdout().lock())
        .context("failed to run session")?;

    if !cli.no_save {
        persist::save(&graph, &cli.resource)
            .with_context(|| format!("failed to save {}", cli.resource.display()))?;
    }

    Ok(())
}
