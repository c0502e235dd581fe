//! Scene setup: camera, lighting, material palette, and UI scaffold.

use bevy::prelude::*;
use bevy::ui::PositionType;

use super::components::{
    AgentOverlay, AgentOverlayText, HoverLabel, IntentPanel, IntentPanelText, SearchText,
    StatusText,
};
use super::constants::{
    COLOR_ACTIVE_HIGH, COLOR_ACTIVE_LOW, COLOR_ACTIVE_MEDIUM, COLOR_ACTIVE_PLAIN,
    COLOR_NODE_DEFAULT, COLOR_NODE_HIGHLIGHT, COLOR_NODE_HOVER, COLOR_SEGMENT,
};
use super::systems::camera::{calculate_camera_position, OrbitState};

/// Pre-built materials for every node state.
///
/// Handles live in a resource so the highlight system swaps them instead
/// of recreating materials every frame.
#[derive(Resource)]
pub struct NodePalette {
    pub default: Handle<StandardMaterial>,
    pub hover: Handle<StandardMaterial>,
    pub highlight: Handle<StandardMaterial>,
    pub active_high: Handle<StandardMaterial>,
    pub active_medium: Handle<StandardMaterial>,
    pub active_low: Handle<StandardMaterial>,
    pub active_plain: Handle<StandardMaterial>,
    pub segment: Handle<StandardMaterial>,
}

fn node_material(color: Color, glow: bool) -> StandardMaterial {
    let [r, g, b] = color.to_srgba().to_f32_array_no_alpha();
    StandardMaterial {
        base_color: color,
        metallic: 0.3,
        perceptual_roughness: 0.5,
        reflectance: 0.3,
        emissive: if glow {
            LinearRgba::new(r * 1.2, g * 1.2, b * 1.2, 1.0)
        } else {
            LinearRgba::BLACK
        },
        ..default()
    }
}

/// Sets up the scene and the UI chrome.
pub fn setup_scene(
    mut commands: Commands,
    mut materials: ResMut<Assets<StandardMaterial>>,
    orbit: Res<OrbitState>,
) {
    // Camera
    let camera_pos = calculate_camera_position(&orbit);
    commands.spawn((
        Camera3d::default(),
        Transform::from_translation(camera_pos).looking_at(orbit.target, Vec3::Y),
    ));

    // Key light
    commands.spawn((
        DirectionalLight {
            illuminance: 18000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(10.0, 20.0, 10.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    // Fill light from the opposite side
    commands.spawn((
        DirectionalLight {
            illuminance: 6000.0,
            shadows_enabled: false,
            ..default()
        },
        Transform::from_xyz(-8.0, 10.0, -8.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: 250.0,
    });

    // Material palette, one handle per node state
    commands.insert_resource(NodePalette {
        default: materials.add(node_material(COLOR_NODE_DEFAULT, false)),
        hover: materials.add(node_material(COLOR_NODE_HOVER, true)),
        highlight: materials.add(node_material(COLOR_NODE_HIGHLIGHT, true)),
        active_high: materials.add(node_material(COLOR_ACTIVE_HIGH, true)),
        active_medium: materials.add(node_material(COLOR_ACTIVE_MEDIUM, true)),
        active_low: materials.add(node_material(COLOR_ACTIVE_LOW, true)),
        active_plain: materials.add(node_material(COLOR_ACTIVE_PLAIN, true)),
        segment: materials.add(node_material(COLOR_SEGMENT, false)),
    });

    // Header strip, top center
    commands
        .spawn(bevy::ui::Node {
            position_type: PositionType::Absolute,
            top: Val::Px(10.0),
            left: Val::Px(0.0),
            right: Val::Px(0.0),
            flex_direction: FlexDirection::Column,
            align_items: AlignItems::Center,
            row_gap: Val::Px(4.0),
            ..default()
        })
        .with_children(|parent| {
            parent.spawn((
                Text::new("Intentscape"),
                TextFont {
                    font_size: 20.0,
                    ..default()
                },
                TextColor(Color::srgb(0.9, 0.9, 0.95)),
            ));
            parent.spawn((
                Text::new("ask a question, watch the agent pick an intent"),
                TextFont {
                    font_size: 12.0,
                    ..default()
                },
                TextColor(Color::srgb(0.55, 0.58, 0.65)),
            ));
            parent.spawn((
                Text::new(""),
                TextFont {
                    font_size: 12.0,
                    ..default()
                },
                TextColor(Color::srgb(0.94, 0.45, 0.45)),
                StatusText,
            ));
        });

    // Agent overlay, top left, hidden until the first query
    commands
        .spawn((
            bevy::ui::Node {
                position_type: PositionType::Absolute,
                top: Val::Px(10.0),
                left: Val::Px(10.0),
                max_width: Val::Px(320.0),
                padding: UiRect::all(Val::Px(12.0)),
                flex_direction: FlexDirection::Column,
                ..default()
            },
            BackgroundColor(Color::srgba(0.08, 0.08, 0.14, 0.9)),
            BorderRadius::all(Val::Px(8.0)),
            Visibility::Hidden,
            AgentOverlay,
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new(""),
                TextFont {
                    font_size: 13.0,
                    ..default()
                },
                TextColor(Color::srgb(0.85, 0.85, 0.9)),
                AgentOverlayText,
            ));
        });

    // Intent detail panel, right side, hidden until a node is active
    commands
        .spawn((
            bevy::ui::Node {
                position_type: PositionType::Absolute,
                top: Val::Px(60.0),
                right: Val::Px(10.0),
                width: Val::Px(300.0),
                min_height: Val::Px(120.0),
                padding: UiRect::all(Val::Px(14.0)),
                flex_direction: FlexDirection::Column,
                row_gap: Val::Px(6.0),
                ..default()
            },
            BackgroundColor(Color::srgba(0.08, 0.08, 0.14, 0.92)),
            BorderRadius::all(Val::Px(8.0)),
            Visibility::Hidden,
            IntentPanel,
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new(""),
                TextFont {
                    font_size: 13.0,
                    ..default()
                },
                TextColor(Color::srgb(0.85, 0.85, 0.9)),
                IntentPanelText,
            ));
            parent.spawn((
                Text::new("[Esc] close"),
                TextFont {
                    font_size: 11.0,
                    ..default()
                },
                TextColor(Color::srgb(0.5, 0.5, 0.6)),
            ));
        });

    // Search strip, bottom center
    commands
        .spawn((
            bevy::ui::Node {
                position_type: PositionType::Absolute,
                bottom: Val::Px(16.0),
                left: Val::Px(0.0),
                right: Val::Px(0.0),
                flex_direction: FlexDirection::Column,
                align_items: AlignItems::Center,
                ..default()
            },
        ))
        .with_children(|parent| {
            parent
                .spawn((
                    bevy::ui::Node {
                        min_width: Val::Px(420.0),
                        padding: UiRect::axes(Val::Px(16.0), Val::Px(10.0)),
                        ..default()
                    },
                    BackgroundColor(Color::srgba(0.08, 0.08, 0.14, 0.9)),
                    BorderRadius::all(Val::Px(20.0)),
                ))
                .with_children(|strip| {
                    strip.spawn((
                        Text::new(""),
                        TextFont {
                            font_size: 14.0,
                            ..default()
                        },
                        TextColor(Color::srgb(0.85, 0.85, 0.9)),
                        SearchText,
                    ));
                });
        });

    // Floating hover label, repositioned by the label system
    commands.spawn((
        Text::new(""),
        TextFont {
            font_size: 12.0,
            ..default()
        },
        TextColor(Color::srgba(0.9, 0.9, 0.95, 0.85)),
        bevy::ui::Node {
            position_type: PositionType::Absolute,
            ..default()
        },
        Visibility::Hidden,
        HoverLabel,
    ));
}
