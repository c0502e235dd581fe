//! Shared explorer state.
//!
//! One container owns everything the systems read: the node list, the
//! agent's latest decision, the camera flight request, and the UI flags.
//! Mutation happens only through the methods here, each of which is a
//! single observable transition; systems never poke fields halfway.

use bevy::math::Vec3;
use bevy::prelude::Resource;

use crate::models::{AgentDecision, IntentNode};

use super::layout;

/// The explorer's single state container, injected as a resource.
#[derive(Resource, Debug, Default)]
pub struct ExplorerState {
    // Graph data
    nodes: Vec<IntentNode>,
    nodes_revision: u64,
    is_loading_graph: bool,
    graph_error: Option<String>,

    // Agent state
    active_intent_id: Option<String>,
    agent_decision: Option<AgentDecision>,
    is_agent_thinking: bool,
    request_seq: u64,

    // Camera state
    camera_target: Option<Vec3>,
    fly_active: bool,

    // UI state
    search_query: String,
    is_panel_open: bool,
    hovered_node_id: Option<String>,
    highlighted_node_ids: Vec<String>,
}

impl ExplorerState {
    pub fn nodes(&self) -> &[IntentNode] {
        &self.nodes
    }

    /// Bumped whenever the node list is replaced; the scene rebuilds when
    /// it sees a revision it has not spawned yet.
    pub fn nodes_revision(&self) -> u64 {
        self.nodes_revision
    }

    pub fn is_loading_graph(&self) -> bool {
        self.is_loading_graph
    }

    pub fn graph_error(&self) -> Option<&str> {
        self.graph_error.as_deref()
    }

    pub fn active_intent_id(&self) -> Option<&str> {
        self.active_intent_id.as_deref()
    }

    pub fn agent_decision(&self) -> Option<&AgentDecision> {
        self.agent_decision.as_ref()
    }

    pub fn is_agent_thinking(&self) -> bool {
        self.is_agent_thinking
    }

    pub fn camera_target(&self) -> Option<Vec3> {
        self.camera_target
    }

    /// True while a flight request is waiting for the camera.
    pub fn fly_active(&self) -> bool {
        self.fly_active
    }

    /// The last submitted query (not the live input buffer).
    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn is_panel_open(&self) -> bool {
        self.is_panel_open
    }

    pub fn hovered_node_id(&self) -> Option<&str> {
        self.hovered_node_id.as_deref()
    }

    pub fn highlighted_node_ids(&self) -> &[String] {
        &self.highlighted_node_ids
    }

    /// Replaces the node list wholesale.
    pub fn set_nodes(&mut self, nodes: Vec<IntentNode>) {
        self.nodes = nodes;
        self.nodes_revision += 1;
    }

    pub fn set_loading_graph(&mut self, loading: bool) {
        self.is_loading_graph = loading;
    }

    pub fn set_graph_error(&mut self, error: Option<String>) {
        self.graph_error = error;
    }

    pub fn set_hovered_node(&mut self, id: Option<String>) {
        self.hovered_node_id = id;
    }

    pub fn set_highlighted_nodes(&mut self, ids: Vec<String>) {
        self.highlighted_node_ids = ids;
    }

    /// Marks a query submission, or refuses one already in flight.
    ///
    /// Returns the sequence number the eventual response must carry, or
    /// `None` while thinking: at most one in-flight request, never queued.
    pub fn begin_thinking(&mut self, query: &str) -> Option<u64> {
        if self.is_agent_thinking {
            return None;
        }
        self.search_query = query.to_string();
        self.is_agent_thinking = true;
        self.request_seq += 1;
        Some(self.request_seq)
    }

    /// Applies a resolved decision in one transition: stores it, activates
    /// the intent, and (when the intent names a known node) requests the
    /// camera flight and opens the panel.
    ///
    /// Responses carrying a stale sequence number are dropped whole.
    /// An unknown `intent_id` keeps the decision and active id but skips
    /// the flight and panel, so a bad payload moves nothing.
    pub fn apply_decision(&mut self, seq: u64, decision: AgentDecision) -> bool {
        if seq != self.request_seq {
            tracing::debug!(seq, latest = self.request_seq, "dropping stale decision");
            return false;
        }
        self.is_agent_thinking = false;

        let target = self
            .nodes
            .iter()
            .position(|n| n.id == decision.intent_id)
            .map(|index| layout::node_position(index, self.nodes.len()));

        if target.is_none() {
            tracing::debug!(intent_id = %decision.intent_id, "decision names no node, skipping flight");
        }

        self.active_intent_id = Some(decision.intent_id.clone());
        self.agent_decision = Some(decision);

        if let Some(position) = target {
            self.camera_target = Some(position);
            self.fly_active = true;
            self.is_panel_open = true;
        }
        true
    }

    /// Clears thinking after a failed resolution; prior state stays put.
    pub fn fail_thinking(&mut self, seq: u64) {
        if seq == self.request_seq {
            self.is_agent_thinking = false;
        }
    }

    /// Click path: activates a node and requests a flight to it.
    pub fn select_node(&mut self, id: &str) {
        let Some(index) = self.nodes.iter().position(|n| n.id == id) else {
            return;
        };
        self.active_intent_id = Some(id.to_string());
        self.camera_target = Some(layout::node_position(index, self.nodes.len()));
        self.fly_active = true;
        self.is_panel_open = true;
    }

    /// The flight controller's arrival signal; the one state mutation the
    /// model drives itself.
    pub fn end_flight(&mut self) {
        self.fly_active = false;
    }

    /// Clears the highlight set and the active intent together; observers
    /// never see one without the other.
    pub fn clear_highlights(&mut self) {
        self.highlighted_node_ids.clear();
        self.active_intent_id = None;
    }

    /// Panel close control: hides the panel and clears highlights in the
    /// same transition.
    pub fn close_panel(&mut self) {
        self.is_panel_open = false;
        self.clear_highlights();
    }

    /// Back to the initial state, except the request sequence keeps
    /// counting so responses from before the reset stay stale.
    pub fn reset(&mut self) {
        let request_seq = self.request_seq;
        let nodes_revision = self.nodes_revision;
        *self = Self::default();
        self.request_seq = request_seq;
        self.nodes_revision = nodes_revision + 1;
    }
}
