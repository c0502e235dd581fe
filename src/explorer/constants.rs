//! Visual constants for the explorer scene.

use bevy::prelude::*;

// =============================================================================
// Node Colors
// =============================================================================

/// Resting node color (gray).
pub const COLOR_NODE_DEFAULT: Color = Color::srgb(0.42, 0.45, 0.50);
/// Hovered node color (soft blue).
pub const COLOR_NODE_HOVER: Color = Color::srgb(0.38, 0.65, 0.98);
/// Highlighted-set member color (cyan).
pub const COLOR_NODE_HIGHLIGHT: Color = Color::srgb(0.13, 0.83, 0.93);

// Active node tint follows the decision's confidence badge.

/// Active node, high confidence (emerald).
pub const COLOR_ACTIVE_HIGH: Color = Color::srgb(0.06, 0.73, 0.51);
/// Active node, medium confidence (amber).
pub const COLOR_ACTIVE_MEDIUM: Color = Color::srgb(0.96, 0.62, 0.04);
/// Active node, low confidence (red).
pub const COLOR_ACTIVE_LOW: Color = Color::srgb(0.94, 0.27, 0.27);
/// Active node when the decision carries no confidence (cyan).
pub const COLOR_ACTIVE_PLAIN: Color = Color::srgb(0.13, 0.83, 0.93);

/// Connection segment color (faint blue-gray).
pub const COLOR_SEGMENT: Color = Color::srgb(0.30, 0.34, 0.45);

// =============================================================================
// Geometry
// =============================================================================

/// Visual radius of a node sphere.
pub const NODE_RADIUS: f32 = 0.35;
/// Hit radius multiplier for picking (larger than visual for easier aim).
pub const HIT_RADIUS_FACTOR: f32 = 1.8;
/// Connection segment cylinder radius.
pub const SEGMENT_RADIUS: f32 = 0.02;

/// Scale of the active node sphere.
pub const ACTIVE_SCALE: f32 = 1.4;
/// Scale of a hovered node sphere.
pub const HOVER_SCALE: f32 = 1.2;
/// Per-frame easing toward the target scale.
pub const SCALE_EASE: f32 = 0.2;

// =============================================================================
// Camera
// =============================================================================

/// Closest the free camera may orbit to its target.
pub const CAMERA_MIN_DISTANCE: f32 = 3.0;
/// Farthest the free camera may orbit from its target.
pub const CAMERA_MAX_DISTANCE: f32 = 20.0;
/// Rotation velocity retained each frame (damped rotation).
pub const CAMERA_ROTATE_DAMPING: f32 = 0.88;

// =============================================================================
// Interaction
// =============================================================================

/// Cursor travel below this many pixels between press and release counts
/// as a click rather than a drag.
pub const CLICK_DRAG_THRESHOLD: f32 = 5.0;

/// UI color for a confidence badge.
pub fn confidence_color(confidence: Option<crate::models::Confidence>) -> Color {
    use crate::models::Confidence;
    match confidence {
        Some(Confidence::High) => COLOR_ACTIVE_HIGH,
        Some(Confidence::Medium) => COLOR_ACTIVE_MEDIUM,
        Some(Confidence::Low) => COLOR_ACTIVE_LOW,
        None => COLOR_ACTIVE_PLAIN,
    }
}
