//! Golden-angle sphere layout.

use bevy::math::Vec3;

use crate::models::IntentNode;

/// Horizontal scale of the layout sphere.
const RADIUS_SCALE: f32 = 4.0;
/// Vertical scale. The sphere is squashed: 4 wide, 3 tall.
const HEIGHT_SCALE: f32 = 3.0;

/// An intent node with its derived coordinate.
///
/// Never persisted. Positions derive from list order alone; a node's own
/// wire `position` field does not override the layout.
#[derive(Debug, Clone)]
pub struct PositionedNode {
    pub node: IntentNode,
    pub position: Vec3,
}

/// Coordinate for the node at `index` in a list of `count` nodes.
///
/// Golden-angle spiral: latitudes step evenly from the north pole to the
/// south pole while longitudes advance by ~137.5° per node, which spreads
/// any N points evenly over the sphere. Pure function of `(index, count)`;
/// same inputs give bit-identical output. A single node pins to the north
/// pole rather than dividing by zero.
pub fn node_position(index: usize, count: usize) -> Vec3 {
    let golden_angle = std::f32::consts::PI * (3.0 - 5.0_f32.sqrt());

    let y_unit = if count <= 1 {
        1.0
    } else {
        1.0 - (index as f32 / (count as f32 - 1.0)) * 2.0
    };
    let radius = (1.0 - y_unit * y_unit).sqrt() * RADIUS_SCALE;
    let theta = golden_angle * index as f32;

    Vec3::new(
        theta.cos() * radius,
        y_unit * HEIGHT_SCALE,
        theta.sin() * radius,
    )
}

/// Places every node on the layout sphere.
///
/// Recomputed wholesale whenever the node list changes; node order is the
/// sole input, so reloading the same list reproduces the same scene.
pub fn position_nodes(nodes: &[IntentNode]) -> Vec<PositionedNode> {
    nodes
        .iter()
        .enumerate()
        .map(|(i, node)| PositionedNode {
            node: node.clone(),
            position: node_position(i, nodes.len()),
        })
        .collect()
}
