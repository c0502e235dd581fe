//! CLI module for Intentscape.
//!
//! Subcommands:
//! - `explore`: Launch the interactive 3D explorer window
//! - `resolve`: Run one query through the decision resolver, print JSON
//! - `graph`: Print the active node list as JSON

mod explore;
mod graph;
mod resolve;

use std::sync::Arc;
use std::time::Duration;

use clap::{Parser, Subcommand};

use crate::backend::{DecisionBackend, HttpBackend, KeywordBackend};
use crate::config::Config;

pub use explore::ExploreCommand;
pub use graph::GraphCommand;
pub use resolve::ResolveCommand;

/// Intentscape - 3D intent exploration
#[derive(Parser)]
#[command(name = "intentscape")]
#[command(about = "Intent exploration - a 3D map of what the agent thinks you mean")]
#[command(version)]
pub struct App {
    /// Run in verbose mode
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Launch the interactive 3D explorer
    Explore(ExploreCommand),

    /// Resolve one query to a decision and print it as JSON
    Resolve(ResolveCommand),

    /// Print the node list as JSON
    Graph(GraphCommand),
}

impl App {
    /// Run the CLI application.
    pub async fn run(self) -> color_eyre::Result<()> {
        match self.command {
            Command::Explore(cmd) => cmd.run().await,
            Command::Resolve(cmd) => cmd.run().await,
            Command::Graph(cmd) => cmd.run().await,
        }
    }
}

/// Backend selection shared by every subcommand.
///
/// `--remote` talks to the configured HTTP decision service; otherwise
/// the built-in keyword resolver answers locally. `latency` applies only
/// to the demo resolver: the explorer keeps its simulated thinking pause,
/// one-shot commands skip it.
fn select_backend(
    config: &Config,
    remote: bool,
    latency: Duration,
) -> crate::error::Result<Arc<dyn DecisionBackend>> {
    if remote {
        tracing::info!(url = %config.backend.url, "using remote decision backend");
        Ok(Arc::new(HttpBackend::new(&config.backend)?))
    } else {
        Ok(Arc::new(KeywordBackend::new(latency)))
    }
}

/// The graph id to address: the `--graph-id` override or the configured one.
fn select_graph_id(config: &Config, graph_id: Option<String>) -> String {
    graph_id.unwrap_or_else(|| config.graph.id.clone())
}
