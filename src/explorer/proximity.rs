//! Nearest-neighbor connection segments.

use bevy::math::Vec3;

use super::layout::PositionedNode;

/// Neighbors drawn per node.
const NEIGHBORS_PER_NODE: usize = 2;

/// A visual edge between a node and one of its nearest neighbors.
///
/// Directional artifact of the scan: a segment (a, b) does not imply
/// (b, a) exists, and two nodes that pick each other produce a pair of
/// overlapping segments. Both are fine to draw.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConnectionSegment {
    pub a: Vec3,
    pub b: Vec3,
}

/// Connects each node to its two nearest neighbors by Euclidean distance.
///
/// Segments come out in node order, each node's neighbors in ascending
/// distance order. Candidates are scanned in index order and sorted with a
/// stable sort, so equidistant neighbors resolve to the earlier index.
/// With one or two nodes a node simply has fewer neighbors; nothing is
/// padded. Rebuilt from scratch whenever the node set changes.
pub fn build_segments(nodes: &[PositionedNode]) -> Vec<ConnectionSegment> {
    let mut segments = Vec::new();

    for (i, node) in nodes.iter().enumerate() {
        let mut candidates: Vec<(usize, f32)> = nodes
            .iter()
            .enumerate()
            .filter(|(j, _)| *j != i)
            .map(|(j, other)| (j, node.position.distance(other.position)))
            .collect();

        candidates.sort_by(|a, b| a.1.total_cmp(&b.1));

        for &(j, _) in candidates.iter().take(NEIGHBORS_PER_NODE) {
            segments.push(ConnectionSegment {
                a: node.position,
                b: nodes[j].position,
            });
        }
    }

    segments
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::IntentNode;

    fn at(id: &str, x: f32, y: f32, z: f32) -> PositionedNode {
        PositionedNode {
            node: IntentNode::new(id, id),
            position: Vec3::new(x, y, z),
        }
    }

    #[test]
    fn test_collinear_nodes_do_not_get_symmetric_segments() {
        let nodes = vec![
            at("a", 0.0, 0.0, 0.0),
            at("b", 1.0, 0.0, 0.0),
            at("c", 2.0, 0.0, 0.0),
            at("d", 3.0, 0.0, 0.0),
        ];

        let segments = build_segments(&nodes);
        assert_eq!(segments.len(), 8);

        // a connects out to c...
        let a_to_c = ConnectionSegment {
            a: nodes[0].position,
            b: nodes[2].position,
        };
        assert!(segments.contains(&a_to_c));

        // ...but c's own two nearest are b and d, so no segment back to a
        let c_to_a = ConnectionSegment {
            a: nodes[2].position,
            b: nodes[0].position,
        };
        assert!(!segments.contains(&c_to_a));
    }

    #[test]
    fn test_equidistant_tie_breaks_to_earlier_index() {
        // three candidates all at distance 2 from the center node
        let nodes = vec![
            at("center", 0.0, 0.0, 0.0),
            at("east", 2.0, 0.0, 0.0),
            at("west", -2.0, 0.0, 0.0),
            at("north", 0.0, 2.0, 0.0),
        ];

        let segments = build_segments(&nodes);

        // center picks the first two tied indices, in index order
        assert_eq!(segments[0].b, nodes[1].position);
        assert_eq!(segments[1].b, nodes[2].position);
        assert!(!segments[..2].iter().any(|s| s.b == nodes[3].position));
    }

    #[test]
    fn test_neighbors_are_emitted_nearest_first() {
        let nodes = vec![
            at("a", 0.0, 0.0, 0.0),
            at("far", 5.0, 0.0, 0.0),
            at("near", 1.0, 0.0, 0.0),
        ];

        let segments = build_segments(&nodes);

        assert_eq!(segments[0].a, nodes[0].position);
        assert_eq!(segments[0].b, nodes[2].position);
        assert_eq!(segments[1].b, nodes[1].position);
    }

    #[test]
    fn test_small_graphs_are_not_padded() {
        assert!(build_segments(&[]).is_empty());
        assert!(build_segments(&[at("only", 0.0, 0.0, 0.0)]).is_empty());

        let pair = vec![at("a", 0.0, 0.0, 0.0), at("b", 1.0, 0.0, 0.0)];
        assert_eq!(build_segments(&pair).len(), 2);
    }
}
