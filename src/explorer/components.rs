//! ECS components for the explorer scene.

use bevy::prelude::*;

/// A node sphere in the intent graph.
#[derive(Component)]
pub struct NodeSphere {
    /// Intent id, matching the state's node list.
    pub id: String,
    /// Index in the node list at spawn time.
    pub node_idx: usize,
}

/// A connection segment cylinder between two nodes.
#[derive(Component)]
pub struct SegmentBeam;

/// The floating label that follows the hovered node in screen space.
#[derive(Component)]
pub struct HoverLabel;

/// Marker for the agent status overlay container.
#[derive(Component)]
pub struct AgentOverlay;

/// Text content of the agent overlay.
#[derive(Component)]
pub struct AgentOverlayText;

/// Marker for the intent detail panel container.
#[derive(Component)]
pub struct IntentPanel;

/// Text content of the intent detail panel.
#[derive(Component)]
pub struct IntentPanelText;

/// Text element of the search strip.
#[derive(Component)]
pub struct SearchText;

/// Status line under the header (loading / graph error).
#[derive(Component)]
pub struct StatusText;
