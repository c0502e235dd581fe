//! Camera flight controller.
//!
//! A two-state machine: Idle until a flight is requested, then Flying
//! until the viewpoint closes within the arrival threshold. Pure math
//! over [`Vec3`], so it tests headless; a system feeds it the camera
//! transform once per frame.

use bevy::math::Vec3;
use bevy::prelude::Resource;

/// Viewpoint offset from the target node, so the camera never parks
/// inside the sphere it is looking at.
const VIEW_OFFSET: Vec3 = Vec3::new(3.0, 2.0, 5.0);
/// Convergence per frame: 3% of the remaining distance.
const LERP_FACTOR: f32 = 0.03;
/// Arrival threshold in world units.
const ARRIVAL_EPSILON: f32 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlightPhase {
    Idle,
    Flying,
}

/// One frame of flight output.
#[derive(Debug, Clone, Copy)]
pub struct FlightFrame {
    /// Where the camera should be this frame.
    pub viewpoint: Vec3,
    /// Where it should look this frame.
    pub look_at: Vec3,
    /// Set on the frame the viewpoint closes within the threshold; the
    /// caller clears the shared flight request when it sees this.
    pub arrived: bool,
}

#[derive(Resource, Debug, Clone)]
pub struct FlightController {
    phase: FlightPhase,
    target: Vec3,
    target_viewpoint: Vec3,
    target_look_at: Vec3,
}

impl Default for FlightController {
    fn default() -> Self {
        Self {
            phase: FlightPhase::Idle,
            target: Vec3::ZERO,
            target_viewpoint: Vec3::ZERO,
            target_look_at: Vec3::ZERO,
        }
    }
}

impl FlightController {
    pub fn phase(&self) -> FlightPhase {
        self.phase
    }

    pub fn is_flying(&self) -> bool {
        self.phase == FlightPhase::Flying
    }

    /// True when a flight toward exactly `target` is in progress.
    pub fn is_flying_to(&self, target: Vec3) -> bool {
        self.is_flying() && self.target == target
    }

    /// Begins a flight toward `target`, or retargets the current one.
    ///
    /// A retarget recomputes both aim points immediately; the controller
    /// never passes through Idle in between.
    pub fn fly_to(&mut self, target: Vec3) {
        self.phase = FlightPhase::Flying;
        self.target = target;
        self.target_viewpoint = target + VIEW_OFFSET;
        self.target_look_at = target;
    }

    /// Advances one frame from `viewpoint`. Returns `None` when Idle.
    ///
    /// The look-at interpolation restarts from the world origin every
    /// frame, so it holds steady at 3% of the target for the whole
    /// flight rather than chaining from the previous frame's value.
    /// Arrival is tested on the post-step viewpoint; the frame that
    /// closes within the threshold flips the controller to Idle.
    pub fn step(&mut self, viewpoint: Vec3) -> Option<FlightFrame> {
        if self.phase != FlightPhase::Flying {
            return None;
        }

        let next = viewpoint.lerp(self.target_viewpoint, LERP_FACTOR);
        let look_at = Vec3::ZERO.lerp(self.target_look_at, LERP_FACTOR);

        let arrived = next.distance(self.target_viewpoint) < ARRIVAL_EPSILON;
        if arrived {
            self.phase = FlightPhase::Idle;
        }

        Some(FlightFrame {
            viewpoint: next,
            look_at,
            arrived,
        })
    }
}
