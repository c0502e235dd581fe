//! Scene spawn and rebuild from the node list.

use bevy::prelude::*;

use crate::explorer::components::{NodeSphere, SegmentBeam};
use crate::explorer::constants::{NODE_RADIUS, SEGMENT_RADIUS};
use crate::explorer::layout::position_nodes;
use crate::explorer::proximity::build_segments;
use crate::explorer::setup::NodePalette;
use crate::explorer::state::ExplorerState;

/// Node-list revision the scene was last built from.
#[derive(Resource, Default)]
pub struct SceneRevision(u64);

/// Rebuilds the node spheres and connection segments when the node list
/// changes. Nodes arrive asynchronously in remote mode, so the scene is
/// spawned from whatever revision the state currently holds and torn
/// down wholesale when a newer one lands.
pub fn rebuild_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut revision: ResMut<SceneRevision>,
    state: Res<ExplorerState>,
    palette: Res<NodePalette>,
    spheres: Query<Entity, With<NodeSphere>>,
    beams: Query<Entity, With<SegmentBeam>>,
) {
    if state.nodes_revision() == revision.0 {
        return;
    }
    revision.0 = state.nodes_revision();

    for entity in spheres.iter().chain(beams.iter()) {
        commands.entity(entity).despawn();
    }

    let positioned = position_nodes(state.nodes());
    if positioned.is_empty() {
        return;
    }

    let sphere_mesh = meshes.add(Sphere::new(NODE_RADIUS).mesh().ico(4).unwrap());
    for (idx, node) in positioned.iter().enumerate() {
        commands.spawn((
            Mesh3d(sphere_mesh.clone()),
            MeshMaterial3d(palette.default.clone()),
            Transform::from_translation(node.position),
            NodeSphere {
                id: node.node.id.clone(),
                node_idx: idx,
            },
        ));
    }

    // One thin cylinder per nearest-neighbor segment, scaled to length
    let beam_mesh = meshes.add(Cylinder::new(SEGMENT_RADIUS, 1.0));
    for segment in build_segments(&positioned) {
        let direction = segment.b - segment.a;
        let length = direction.length();
        if length < 0.01 {
            continue;
        }
        let rotation = Quat::from_rotation_arc(Vec3::Y, direction.normalize());

        commands.spawn((
            Mesh3d(beam_mesh.clone()),
            MeshMaterial3d(palette.segment.clone()),
            Transform::from_translation((segment.a + segment.b) / 2.0)
                .with_rotation(rotation)
                .with_scale(Vec3::new(1.0, length, 1.0)),
            SegmentBeam,
        ));
    }
}
