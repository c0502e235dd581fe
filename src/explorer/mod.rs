//! 3D intent explorer.
//!
//! Places intent nodes on a golden-angle sphere, connects each to its two
//! nearest neighbors, and flies the camera to whichever node the agent
//! decides a query means.
//!
//! ## Module Structure
//!
//! - `layout` - Deterministic golden-angle sphere placement
//! - `proximity` - Nearest-neighbor connection segments
//! - `flight` - Idle/Flying camera state machine
//! - `state` - The shared state container (single resource)
//! - `runtime` - Async boundary to the decision backend
//! - `components` / `constants` / `setup` / `systems` - Bevy scene and UI
//! - `plugin` - Bevy plugin definition

pub mod components;
pub mod constants;
pub mod flight;
pub mod layout;
pub mod proximity;
pub mod runtime;
pub mod setup;
pub mod state;
pub mod systems;

mod plugin;

pub use flight::{FlightController, FlightPhase};
pub use layout::{node_position, position_nodes, PositionedNode};
pub use plugin::ExplorerPlugin;
pub use proximity::{build_segments, ConnectionSegment};
pub use state::ExplorerState;

use std::sync::Arc;

use bevy::prelude::*;

use crate::backend::DecisionBackend;
use crate::models::IntentNode;

/// Runs the explorer window. Blocks until the window closes.
///
/// `initial_nodes = None` fetches the graph from the backend at startup;
/// must be called from inside a tokio runtime either way, since backend
/// calls are spawned onto it.
pub fn run_explorer(
    backend: Arc<dyn DecisionBackend>,
    graph_id: impl Into<String>,
    initial_nodes: Option<Vec<IntentNode>>,
) {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Intentscape".to_string(),
                resolution: (1280.0, 720.0).into(),
                ..default()
            }),
            ..default()
        }))
        .insert_resource(ClearColor(Color::srgb(0.04, 0.04, 0.10)))
        .add_plugins(ExplorerPlugin::new(backend, graph_id, initial_nodes))
        .run();
}
