//! Resolve subcommand - one-shot query resolution.

use std::time::Duration;

use clap::Parser;

use crate::config::Config;

/// Resolve a query to an `AgentDecision` and print it as JSON.
///
/// Prints whatever the backend returned, including an `intent_id` the
/// caller may not recognize; the existing-node constraint binds the
/// backend, and this command performs no UI side effects.
#[derive(Parser)]
pub struct ResolveCommand {
    /// The query to resolve
    pub query: String,

    /// Use the configured remote decision backend instead of the demo resolver
    #[arg(long)]
    pub remote: bool,

    /// Graph id to resolve against (overrides the configured one)
    #[arg(long)]
    pub graph_id: Option<String>,
}

impl ResolveCommand {
    /// Run the resolve command.
    pub async fn run(self) -> color_eyre::Result<()> {
        let config = Config::load()?;
        let backend = super::select_backend(&config, self.remote, Duration::ZERO)?;
        let graph_id = super::select_graph_id(&config, self.graph_id);

        let decision = backend.decide(&self.query, &graph_id).await?;
        println!("{}", serde_json::to_string_pretty(&decision)?);

        Ok(())
    }
}
