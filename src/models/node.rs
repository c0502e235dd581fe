//! Intent node model representing selectable topics in the 3D scene.

use serde::{Deserialize, Serialize};

/// A single selectable intent in the graph.
///
/// Nodes are created by the graph source (demo table, JSON file, or backend
/// fetch), are immutable once loaded into explorer state, and are destroyed
/// only on a full state reset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntentNode {
    /// Unique, stable identifier.
    pub id: String,
    /// Human-readable description shown in labels and the detail panel.
    pub text: String,
    /// Optional pre-assigned coordinate. Absent in practice; the layout
    /// engine derives positions from list order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<[f32; 3]>,
}

impl IntentNode {
    /// Creates a node with no pre-assigned position.
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            position: None,
        }
    }
}

/// Wire envelope for `GET /graph/{graph_id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphResponse {
    /// Nodes in layout order.
    pub nodes: Vec<IntentNode>,
}
