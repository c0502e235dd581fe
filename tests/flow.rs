//! End-to-end flow tests: query submission through decision, state
//! transition, layout lookup, and camera flight convergence, all without
//! opening a window.

use std::time::Duration;

use bevy::math::Vec3;

use intentscape::backend::{demo_nodes, DecisionBackend, KeywordBackend};
use intentscape::explorer::{
    build_segments, node_position, position_nodes, ExplorerState, FlightController,
};
use intentscape::models::Confidence;

/// Submit a query, resolve it, apply the decision, and fly the camera to
/// the chosen node - the whole happy path.
#[tokio::test]
async fn test_query_to_arrival() {
    let backend = KeywordBackend::new(Duration::ZERO);
    let mut state = ExplorerState::default();
    state.set_nodes(demo_nodes());

    // submit
    let seq = state.begin_thinking("How do I apply?").expect("not thinking");
    assert!(state.is_agent_thinking());

    // a second submission while in flight is refused
    assert!(state.begin_thinking("another question").is_none());

    // resolve
    let decision = backend.decide("How do I apply?", "university").await.unwrap();
    assert_eq!(decision.intent_id, "admissions");
    assert_eq!(decision.confidence, Some(Confidence::High));

    // apply: one transition sets decision, active node, flight, panel
    assert!(state.apply_decision(seq, decision));
    assert!(!state.is_agent_thinking());
    assert_eq!(state.active_intent_id(), Some("admissions"));
    assert!(state.fly_active());
    assert!(state.is_panel_open());

    let target = state.camera_target().expect("flight target set");
    assert_eq!(target, node_position(0, 12));

    // fly until arrival
    let mut controller = FlightController::default();
    controller.fly_to(target);
    let mut viewpoint = Vec3::new(0.0, 0.0, 8.0);
    let mut steps = 0;
    loop {
        let frame = controller.step(viewpoint).expect("still flying");
        viewpoint = frame.viewpoint;
        steps += 1;
        assert!(steps < 1000, "flight never converged");
        if frame.arrived {
            break;
        }
    }
    assert!(viewpoint.distance(target + Vec3::new(3.0, 2.0, 5.0)) < 0.1);

    // arrival clears the request - the model's one self-driven mutation
    state.end_flight();
    assert!(!state.fly_active());
    assert_eq!(state.active_intent_id(), Some("admissions"));
}

/// The fallback path: an unmatched query still produces a valid decision
/// that lands on a real node.
#[tokio::test]
async fn test_unmatched_query_falls_back_and_still_flies() {
    let backend = KeywordBackend::new(Duration::ZERO);
    let mut state = ExplorerState::default();
    state.set_nodes(demo_nodes());

    let seq = state.begin_thinking("asdfqwerty").unwrap();
    let decision = backend.decide("asdfqwerty", "university").await.unwrap();
    assert_eq!(decision.intent_id, "admissions");
    assert_eq!(decision.confidence, Some(Confidence::Medium));

    assert!(state.apply_decision(seq, decision));
    assert!(state.fly_active());
}

/// The demo vocabulary lays out deterministically and every node gets
/// its two connection segments.
#[test]
fn test_demo_graph_layout_and_segments() {
    let nodes = demo_nodes();
    let positioned = position_nodes(&nodes);
    assert_eq!(positioned.len(), 12);

    // poles first and last
    assert_eq!(positioned[0].position, Vec3::new(0.0, 3.0, 0.0));
    assert_eq!(positioned[11].position.y, -3.0);

    // repeated layout is bit-identical
    let again = position_nodes(&nodes);
    for (a, b) in positioned.iter().zip(&again) {
        assert_eq!(a.position, b.position);
    }

    // 12 nodes x 2 neighbors
    assert_eq!(build_segments(&positioned).len(), 24);
}

/// Failure path: the resolver erroring clears thinking and applies
/// nothing, so the UI never wedges in a thinking state.
#[test]
fn test_resolver_failure_leaves_state_usable() {
    let mut state = ExplorerState::default();
    state.set_nodes(demo_nodes());

    let seq = state.begin_thinking("doomed query").unwrap();
    state.fail_thinking(seq);

    assert!(!state.is_agent_thinking());
    assert!(state.agent_decision().is_none());
    assert!(!state.fly_active());

    // and a fresh submission works
    assert!(state.begin_thinking("next query").is_some());
}
