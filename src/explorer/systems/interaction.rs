//! Hover and click picking against the node spheres.

use bevy::prelude::*;

use crate::explorer::components::NodeSphere;
use crate::explorer::constants::{CLICK_DRAG_THRESHOLD, HIT_RADIUS_FACTOR, NODE_RADIUS};
use crate::explorer::state::ExplorerState;

/// Cursor position at the last left press, for click-vs-drag detection.
#[derive(Resource, Default)]
pub struct PickState {
    press_position: Option<Vec2>,
}

/// Returns the id of the node under the cursor, nearest hit first.
fn node_under_cursor(
    cursor_pos: Vec2,
    camera: &Camera,
    camera_transform: &GlobalTransform,
    node_query: &Query<(&Transform, &NodeSphere)>,
) -> Option<String> {
    let ray = camera.viewport_to_world(camera_transform, cursor_pos).ok()?;

    let mut closest: Option<(f32, &NodeSphere)> = None;
    for (transform, sphere) in node_query.iter() {
        let to_node = transform.translation - ray.origin;
        let t = to_node.dot(*ray.direction);
        if t <= 0.0 {
            continue;
        }

        let closest_point = ray.origin + *ray.direction * t;
        let distance = (closest_point - transform.translation).length();
        let hit_radius = NODE_RADIUS * HIT_RADIUS_FACTOR;

        if distance < hit_radius && closest.map_or(true, |(best_t, _)| t < best_t) {
            closest = Some((t, sphere));
        }
    }

    closest.map(|(_, sphere)| sphere.id.clone())
}

/// Mirrors the node under the cursor into the hover state, and resolves
/// clicks: a node click selects it (activate + flight + panel), an
/// empty-space click closes the panel and clears highlights. Cursor
/// travel beyond the threshold between press and release is a camera
/// drag, not a click.
pub fn pick_node_system(
    mut pick: ResMut<PickState>,
    mut state: ResMut<ExplorerState>,
    mouse_button: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window>,
    camera_query: Query<(&Camera, &GlobalTransform), With<Camera3d>>,
    node_query: Query<(&Transform, &NodeSphere)>,
) {
    let Ok(window) = windows.get_single() else {
        return;
    };
    let Ok((camera, camera_transform)) = camera_query.get_single() else {
        return;
    };

    let cursor_pos = window.cursor_position();

    let hovered = cursor_pos
        .and_then(|pos| node_under_cursor(pos, camera, camera_transform, &node_query));
    if state.hovered_node_id() != hovered.as_deref() {
        state.set_hovered_node(hovered.clone());
    }

    if mouse_button.just_pressed(MouseButton::Left) {
        pick.press_position = cursor_pos;
    }

    if mouse_button.just_released(MouseButton::Left) {
        let was_click = match (pick.press_position, cursor_pos) {
            (Some(press), Some(release)) => press.distance(release) < CLICK_DRAG_THRESHOLD,
            _ => false,
        };
        pick.press_position = None;

        if was_click {
            match hovered {
                Some(id) => state.select_node(&id),
                None => state.close_panel(),
            }
        }
    }
}
