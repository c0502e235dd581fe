//! Camera control: free orbit when idle, flight when a node is selected.

use bevy::input::mouse::{MouseMotion, MouseWheel};
use bevy::prelude::*;

use crate::explorer::constants::{
    CAMERA_MAX_DISTANCE, CAMERA_MIN_DISTANCE, CAMERA_ROTATE_DAMPING,
};
use crate::explorer::flight::FlightController;
use crate::explorer::state::ExplorerState;

/// Orbit parameters for the free camera.
#[derive(Resource)]
pub struct OrbitState {
    /// Horizontal rotation angle (radians).
    pub yaw: f32,
    /// Vertical rotation angle (radians).
    pub pitch: f32,
    /// Distance from target, clamped to the camera bounds.
    pub distance: f32,
    /// Point the camera orbits around.
    pub target: Vec3,
    /// Residual yaw velocity, decayed each frame.
    pub yaw_velocity: f32,
    /// Residual pitch velocity, decayed each frame.
    pub pitch_velocity: f32,
}

impl Default for OrbitState {
    fn default() -> Self {
        Self {
            yaw: 0.0,
            pitch: 0.3,
            distance: 12.0,
            target: Vec3::ZERO,
            yaw_velocity: 0.0,
            pitch_velocity: 0.0,
        }
    }
}

impl OrbitState {
    /// Re-derives orbit parameters from a camera pose, so free control
    /// picks up where a flight ended instead of snapping back.
    pub fn sync_to(&mut self, viewpoint: Vec3, target: Vec3) {
        let offset = viewpoint - target;
        self.target = target;
        self.distance = offset
            .length()
            .clamp(CAMERA_MIN_DISTANCE, CAMERA_MAX_DISTANCE);
        self.pitch = (offset.y / self.distance).clamp(-1.0, 1.0).asin();
        self.yaw = offset.x.atan2(offset.z);
        self.yaw_velocity = 0.0;
        self.pitch_velocity = 0.0;
    }
}

/// Camera position implied by the orbit parameters.
pub fn calculate_camera_position(orbit: &OrbitState) -> Vec3 {
    let x = orbit.distance * orbit.pitch.cos() * orbit.yaw.sin();
    let y = orbit.distance * orbit.pitch.sin();
    let z = orbit.distance * orbit.pitch.cos() * orbit.yaw.cos();
    orbit.target + Vec3::new(x, y, z)
}

/// Drives the camera each frame.
///
/// An active flight request owns the camera: the controller eases the
/// viewpoint toward the target node and, on arrival, clears the request
/// and hands the final pose back to the orbit state. Otherwise the
/// camera is under free control: right-drag orbits with damped rotation,
/// middle-drag pans, scroll zooms within the distance bounds.
#[allow(clippy::too_many_arguments)]
pub fn camera_system(
    mut state: ResMut<ExplorerState>,
    mut controller: ResMut<FlightController>,
    mut orbit: ResMut<OrbitState>,
    mut camera_query: Query<&mut Transform, With<Camera3d>>,
    mouse_button: Res<ButtonInput<MouseButton>>,
    mut mouse_motion: EventReader<MouseMotion>,
    mut scroll: EventReader<MouseWheel>,
) {
    let Ok(mut transform) = camera_query.get_single_mut() else {
        return;
    };

    // Pick up a pending flight request; retargets mid-flight as well.
    if state.fly_active() {
        if let Some(target) = state.camera_target() {
            if !controller.is_flying_to(target) {
                controller.fly_to(target);
            }
        }
    }

    if controller.is_flying() {
        // drain inputs so releasing mid-flight doesn't replay them
        mouse_motion.clear();
        scroll.clear();

        if let Some(frame) = controller.step(transform.translation) {
            transform.translation = frame.viewpoint;
            transform.look_at(frame.look_at, Vec3::Y);

            if frame.arrived {
                if let Some(target) = state.camera_target() {
                    orbit.sync_to(frame.viewpoint, target);
                }
                state.end_flight();
            }
        }
        return;
    }

    // Free orbit: right-drag rotates
    if mouse_button.pressed(MouseButton::Right) {
        for ev in mouse_motion.read() {
            orbit.yaw_velocity = -ev.delta.x * 0.01;
            orbit.pitch_velocity = ev.delta.y * 0.01;
        }
    }

    // Middle-drag pans perpendicular to the view direction
    if mouse_button.pressed(MouseButton::Middle) {
        for ev in mouse_motion.read() {
            let right = Vec3::new(orbit.yaw.cos(), 0.0, -orbit.yaw.sin());
            orbit.target += right * ev.delta.x * 0.02;
            orbit.target -= Vec3::Y * ev.delta.y * 0.02;
        }
    }

    // Damped rotation: velocity carries and decays after release
    orbit.yaw += orbit.yaw_velocity;
    orbit.pitch = (orbit.pitch + orbit.pitch_velocity).clamp(-1.5, 1.5);
    orbit.yaw_velocity *= CAMERA_ROTATE_DAMPING;
    orbit.pitch_velocity *= CAMERA_ROTATE_DAMPING;

    // Zoom on scroll, bounded
    for ev in scroll.read() {
        orbit.distance =
            (orbit.distance - ev.y).clamp(CAMERA_MIN_DISTANCE, CAMERA_MAX_DISTANCE);
    }

    let pos = calculate_camera_position(&orbit);
    *transform = Transform::from_translation(pos).looking_at(orbit.target, Vec3::Y);
}
