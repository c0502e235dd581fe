//! ECS systems for the explorer, run once per frame.

pub mod camera;
pub mod graph;
pub mod interaction;
pub mod search;
pub mod ui;

pub use camera::camera_system;
pub use graph::rebuild_scene;
pub use interaction::pick_node_system;
pub use search::search_input_system;
pub use ui::{
    update_agent_overlay, update_hover_label, update_intent_panel, update_node_visuals,
    update_search_text, update_status_text,
};
