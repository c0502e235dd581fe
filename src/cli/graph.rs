//! Graph subcommand - dump the node list.

use std::time::Duration;

use clap::Parser;
use serde_json::json;

use crate::config::Config;
use crate::explorer::position_nodes;

/// Print the active node list as JSON.
#[derive(Parser)]
pub struct GraphCommand {
    /// Use the configured remote decision backend instead of the demo resolver
    #[arg(long)]
    pub remote: bool,

    /// Graph id to fetch (overrides the configured one)
    #[arg(long)]
    pub graph_id: Option<String>,

    /// Include each node's computed layout coordinate
    #[arg(long)]
    pub positions: bool,
}

impl GraphCommand {
    /// Run the graph command.
    pub async fn run(self) -> color_eyre::Result<()> {
        let config = Config::load()?;
        let backend = super::select_backend(&config, self.remote, Duration::ZERO)?;
        let graph_id = super::select_graph_id(&config, self.graph_id);

        let nodes = backend.fetch_graph(&graph_id).await?;

        let output = if self.positions {
            let positioned: Vec<_> = position_nodes(&nodes)
                .into_iter()
                .map(|p| {
                    json!({
                        "id": p.node.id,
                        "text": p.node.text,
                        "position": p.position.to_array(),
                    })
                })
                .collect();
            json!({ "nodes": positioned })
        } else {
            json!({ "nodes": nodes })
        };

        println!("{}", serde_json::to_string_pretty(&output)?);
        Ok(())
    }
}
