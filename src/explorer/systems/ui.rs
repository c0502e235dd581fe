//! UI systems: node tint and scale, hover label, overlay, panel, search
//! strip, and the status line.

use bevy::prelude::*;
use bevy::ui::Node as UiNode;

use crate::explorer::components::{
    AgentOverlay, AgentOverlayText, HoverLabel, IntentPanel, IntentPanelText, NodeSphere,
    SearchText, StatusText,
};
use crate::explorer::constants::{ACTIVE_SCALE, HOVER_SCALE, NODE_RADIUS, SCALE_EASE};
use crate::explorer::setup::NodePalette;
use crate::explorer::state::ExplorerState;
use crate::explorer::systems::search::SearchInput;
use crate::models::Confidence;

/// Tints and scales every node sphere from the explorer state.
///
/// Priority: active (confidence tint) > highlighted set (cyan) > hover
/// (blue) > default gray. Scale eases toward 1.4x for the active node,
/// 1.2x for the hovered one, 1x otherwise.
pub fn update_node_visuals(
    state: Res<ExplorerState>,
    palette: Res<NodePalette>,
    mut node_query: Query<(
        &NodeSphere,
        &mut Transform,
        &mut MeshMaterial3d<StandardMaterial>,
    )>,
) {
    let confidence = state
        .agent_decision()
        .and_then(|decision| decision.confidence);

    for (sphere, mut transform, mut material) in node_query.iter_mut() {
        let is_active = state.active_intent_id() == Some(sphere.id.as_str());
        let is_hovered = state.hovered_node_id() == Some(sphere.id.as_str());
        let is_highlighted = state
            .highlighted_node_ids()
            .iter()
            .any(|id| id == &sphere.id);

        let handle = if is_active {
            match confidence {
                Some(Confidence::High) => palette.active_high.clone(),
                Some(Confidence::Medium) => palette.active_medium.clone(),
                Some(Confidence::Low) => palette.active_low.clone(),
                None => palette.active_plain.clone(),
            }
        } else if is_highlighted {
            palette.highlight.clone()
        } else if is_hovered {
            palette.hover.clone()
        } else {
            palette.default.clone()
        };
        *material = MeshMaterial3d(handle);

        let target_scale = if is_active {
            ACTIVE_SCALE
        } else if is_hovered {
            HOVER_SCALE
        } else {
            1.0
        };
        transform.scale = transform.scale.lerp(Vec3::splat(target_scale), SCALE_EASE);
    }
}

/// Floats a label (id and description) above the hovered node, projected
/// to screen space; hidden when nothing is hovered or the node sits
/// behind the camera.
pub fn update_hover_label(
    state: Res<ExplorerState>,
    camera_query: Query<(&Camera, &GlobalTransform), With<Camera3d>>,
    node_query: Query<(&Transform, &NodeSphere)>,
    mut label_query: Query<(&mut UiNode, &mut Text, &mut Visibility), With<HoverLabel>>,
) {
    let Ok((mut ui_node, mut text, mut visibility)) = label_query.get_single_mut() else {
        return;
    };
    let Ok((camera, camera_transform)) = camera_query.get_single() else {
        return;
    };

    let Some(hovered_id) = state.hovered_node_id() else {
        *visibility = Visibility::Hidden;
        return;
    };
    let Some((transform, _)) = node_query.iter().find(|(_, s)| s.id == hovered_id) else {
        *visibility = Visibility::Hidden;
        return;
    };

    let world_pos = transform.translation + Vec3::Y * (NODE_RADIUS * 1.4 + 0.25);
    let Ok(viewport_pos) = camera.world_to_viewport(camera_transform, world_pos) else {
        *visibility = Visibility::Hidden;
        return;
    };

    let to_node = world_pos - camera_transform.translation();
    if to_node.dot(*camera_transform.forward()) <= 0.0 {
        *visibility = Visibility::Hidden;
        return;
    }

    let description = state
        .nodes()
        .iter()
        .find(|n| n.id == hovered_id)
        .map(|n| n.text.as_str())
        .unwrap_or("");

    **text = format!("{hovered_id}\n{description}");
    ui_node.left = Val::Px(viewport_pos.x - 50.0);
    ui_node.top = Val::Px(viewport_pos.y - 34.0);
    *visibility = Visibility::Visible;
}

/// Agent status overlay: the thinking line while a request is in flight,
/// the decision's reason and confidence badge afterwards.
pub fn update_agent_overlay(
    state: Res<ExplorerState>,
    mut overlay_query: Query<&mut Visibility, With<AgentOverlay>>,
    mut text_query: Query<(&mut Text, &mut TextColor), With<AgentOverlayText>>,
) {
    if !state.is_changed() {
        return;
    }
    let Ok(mut visibility) = overlay_query.get_single_mut() else {
        return;
    };
    let Ok((mut text, mut color)) = text_query.get_single_mut() else {
        return;
    };

    if state.is_agent_thinking() {
        **text = format!("Agent thinking...\nAnalyzing: \"{}\"", state.search_query());
        *color = TextColor(Color::srgb(0.85, 0.85, 0.9));
        *visibility = Visibility::Visible;
    } else if let Some(decision) = state.agent_decision() {
        let badge = decision
            .confidence
            .map(|c| c.label())
            .unwrap_or("unrated");
        **text = format!("{}\nconfidence: {badge}", decision.reason);
        *color = TextColor(crate::explorer::constants::confidence_color(
            decision.confidence,
        ));
        *visibility = Visibility::Visible;
    } else {
        *visibility = Visibility::Hidden;
    }
}

/// Intent detail panel: visible only when open and a node is active.
pub fn update_intent_panel(
    state: Res<ExplorerState>,
    mut panel_query: Query<&mut Visibility, With<IntentPanel>>,
    mut text_query: Query<&mut Text, With<IntentPanelText>>,
) {
    if !state.is_changed() {
        return;
    }
    let Ok(mut visibility) = panel_query.get_single_mut() else {
        return;
    };
    let Ok(mut text) = text_query.get_single_mut() else {
        return;
    };

    let active = state
        .active_intent_id()
        .and_then(|id| state.nodes().iter().find(|n| n.id == id));

    let (Some(node), true) = (active, state.is_panel_open()) else {
        *visibility = Visibility::Hidden;
        return;
    };

    let mut body = format!("{}\n\n{}", node.id, node.text);
    if let Some(decision) = state.agent_decision().filter(|d| d.intent_id == node.id) {
        body.push_str(&format!("\n\nWhy: {}", decision.reason));
        if let Some(confidence) = decision.confidence {
            body.push_str(&format!("\nConfidence: {}", confidence.label()));
        }
        body.push_str(&format!(
            "\nAction: {}",
            serde_json::to_string(&decision.action)
                .unwrap_or_default()
                .trim_matches('"')
        ));
    }

    **text = body;
    *visibility = Visibility::Visible;
}

/// Search strip text: the buffer with a caret while typing, a hint when
/// empty, a frozen line while thinking.
pub fn update_search_text(
    state: Res<ExplorerState>,
    input: Res<SearchInput>,
    mut text_query: Query<(&mut Text, &mut TextColor), With<SearchText>>,
) {
    let Ok((mut text, mut color)) = text_query.get_single_mut() else {
        return;
    };

    if state.is_agent_thinking() {
        **text = format!("{} ...", state.search_query());
        *color = TextColor(Color::srgb(0.55, 0.58, 0.65));
    } else if input.buffer.is_empty() {
        **text = "Ask anything, e.g. \"How do I apply?\" or \"What are the costs?\"".to_string();
        *color = TextColor(Color::srgb(0.5, 0.53, 0.6));
    } else {
        **text = format!("{}_", input.buffer);
        *color = TextColor(Color::srgb(0.85, 0.85, 0.9));
    }
}

/// Status line under the header: loading and graph-error states. A
/// failed graph load degrades to an empty scene with the error text,
/// never a crash.
pub fn update_status_text(
    state: Res<ExplorerState>,
    mut text_query: Query<(&mut Text, &mut TextColor), With<StatusText>>,
) {
    if !state.is_changed() {
        return;
    }
    let Ok((mut text, mut color)) = text_query.get_single_mut() else {
        return;
    };

    if state.is_loading_graph() {
        **text = "loading graph...".to_string();
        *color = TextColor(Color::srgb(0.55, 0.58, 0.65));
    } else if let Some(error) = state.graph_error() {
        **text = format!("graph unavailable: {error}");
        *color = TextColor(Color::srgb(0.94, 0.45, 0.45));
    } else {
        **text = String::new();
    }
}
