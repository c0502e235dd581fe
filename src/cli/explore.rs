//! Explore subcommand - launch the 3D explorer window.

use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::Parser;

use crate::backend::demo_nodes;
use crate::config::Config;
use crate::error::AppError;
use crate::explorer::run_explorer;
use crate::models::{GraphResponse, IntentNode};

/// Launch the interactive 3D explorer.
#[derive(Parser)]
pub struct ExploreCommand {
    /// Use the configured remote decision backend instead of the demo resolver
    #[arg(long)]
    pub remote: bool,

    /// Graph id to load (overrides the configured one)
    #[arg(long)]
    pub graph_id: Option<String>,

    /// Load nodes from a local JSON file instead of the demo vocabulary
    #[arg(long)]
    pub file: Option<PathBuf>,
}

impl ExploreCommand {
    /// Run the explore command. Blocks until the window closes.
    pub async fn run(self) -> color_eyre::Result<()> {
        let config = Config::load()?;
        let backend = super::select_backend(&config, self.remote, Duration::from_millis(800))?;
        let graph_id = super::select_graph_id(&config, self.graph_id);

        // A preloaded list skips the startup fetch; remote mode loads
        // asynchronously and renders a loading state meanwhile.
        let initial_nodes = match &self.file {
            Some(path) => Some(load_nodes_from_file(path)?),
            None if self.remote => None,
            None => Some(demo_nodes()),
        };

        run_explorer(backend, graph_id, initial_nodes);
        Ok(())
    }
}

/// Reads a node list from a JSON file: either a `{ "nodes": [...] }`
/// envelope or a bare array.
fn load_nodes_from_file(path: &Path) -> Result<Vec<IntentNode>, AppError> {
    let content = std::fs::read_to_string(path)?;

    if let Ok(envelope) = serde_json::from_str::<GraphResponse>(&content) {
        return Ok(envelope.nodes);
    }
    let nodes: Vec<IntentNode> = serde_json::from_str(&content)?;
    Ok(nodes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_loads_enveloped_node_list() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"nodes": [{{"id": "a", "text": "Alpha"}}, {{"id": "b", "text": "Beta"}}]}}"#
        )
        .unwrap();

        let nodes = load_nodes_from_file(file.path()).unwrap();
        assert_eq!(nodes.len(), 2);
        assert_eq!(nodes[0].id, "a");
    }

    #[test]
    fn test_loads_bare_array() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[{{"id": "solo", "text": "Only node"}}]"#).unwrap();

        let nodes = load_nodes_from_file(file.path()).unwrap();
        assert_eq!(nodes.len(), 1);
        assert_eq!(nodes[0].id, "solo");
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json at all").unwrap();

        assert!(matches!(
            load_nodes_from_file(file.path()),
            Err(AppError::Json(_))
        ));
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        assert!(matches!(
            load_nodes_from_file(Path::new("/nonexistent/graph.json")),
            Err(AppError::Io(_))
        ));
    }
}
