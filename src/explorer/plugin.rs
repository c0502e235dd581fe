//! Explorer plugin for Bevy.

use std::sync::{Arc, Mutex};

use bevy::prelude::*;

use crate::backend::DecisionBackend;
use crate::models::IntentNode;

use super::flight::FlightController;
use super::runtime::{drain_backend_events, BackendHandle};
use super::setup::setup_scene;
use super::state::ExplorerState;
use super::systems;
use super::systems::camera::OrbitState;
use super::systems::graph::SceneRevision;
use super::systems::interaction::PickState;
use super::systems::search::SearchInput;

/// Plugin wiring the explorer's resources and systems into a Bevy app.
///
/// The `backend` field uses `Mutex<Option<...>>` so ownership can move
/// into the resource during `build()` (which takes `&self`).
pub struct ExplorerPlugin {
    backend: Mutex<Option<Arc<dyn DecisionBackend>>>,
    graph_id: String,
    /// Nodes loaded ahead of time (demo table or `--file`); `None` means
    /// fetch from the backend at startup.
    initial_nodes: Option<Vec<IntentNode>>,
}

impl ExplorerPlugin {
    pub fn new(
        backend: Arc<dyn DecisionBackend>,
        graph_id: impl Into<String>,
        initial_nodes: Option<Vec<IntentNode>>,
    ) -> Self {
        Self {
            backend: Mutex::new(Some(backend)),
            graph_id: graph_id.into(),
            initial_nodes,
        }
    }
}

impl Plugin for ExplorerPlugin {
    fn build(&self, app: &mut App) {
        let backend = self
            .backend
            .lock()
            .expect("explorer backend mutex poisoned")
            .take()
            .expect("ExplorerPlugin built twice");

        let mut state = ExplorerState::default();
        match &self.initial_nodes {
            Some(nodes) => state.set_nodes(nodes.clone()),
            None => state.set_loading_graph(true),
        }

        app.insert_resource(state)
            .insert_resource(BackendHandle::new(backend, self.graph_id.clone()))
            .init_resource::<FlightController>()
            .init_resource::<OrbitState>()
            .init_resource::<SceneRevision>()
            .init_resource::<PickState>()
            .init_resource::<SearchInput>()
            .add_systems(Startup, (setup_scene, fetch_graph_if_loading))
            .add_systems(
                Update,
                (
                    drain_backend_events,
                    systems::rebuild_scene,
                    systems::pick_node_system,
                    systems::search_input_system,
                    systems::camera_system,
                    systems::update_node_visuals,
                    systems::update_hover_label,
                    systems::update_agent_overlay,
                    systems::update_intent_panel,
                    systems::update_search_text,
                    systems::update_status_text,
                ),
            );
    }
}

/// Kicks off the remote graph fetch when no nodes were preloaded.
fn fetch_graph_if_loading(state: Res<ExplorerState>, handle: Res<BackendHandle>) {
    if state.is_loading_graph() {
        tracing::info!(graph_id = handle.graph_id(), "fetching graph from backend");
        handle.spawn_fetch();
    }
}
