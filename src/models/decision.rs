//! Agent decision model and the decide request/response envelopes.

use serde::{Deserialize, Serialize};

/// A resolver's answer to one query: which intent the user meant and why.
///
/// Replaced wholesale on the next submission; never merged or patched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentDecision {
    /// Id of the matched node. Must reference a node in the active graph;
    /// the existing-node constraint binds the resolver producing it.
    pub intent_id: String,
    /// What the UI should do with the match.
    pub action: AgentAction,
    /// Presentation hint, opaque to this crate (e.g. "zoom_and_highlight").
    pub ui_hint: String,
    /// Human-readable explanation shown in the agent overlay and panel.
    pub reason: String,
    /// Advisory classification, display-only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<Confidence>,
    /// Runner-up node ids, if the resolver reports them.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alternatives: Option<Vec<String>>,
}

/// Action vocabulary for [`AgentDecision`].
///
/// Only `fly_to_node` is wired to a distinct effect today; the remaining
/// values are accepted forward-compatibility placeholders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgentAction {
    FlyToNode,
    HighlightOnly,
    // rename_all would emit "show_top3"; the wire name keeps the separator
    #[serde(rename = "show_top_3")]
    ShowTop3,
    AskClarifyingQuestion,
    OpenPreview,
}

/// Advisory confidence classification, display-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    High,
    Medium,
    Low,
}

impl Confidence {
    /// Lowercase label for badges and log lines.
    pub fn label(&self) -> &'static str {
        match self {
            Confidence::High => "high",
            Confidence::Medium => "medium",
            Confidence::Low => "low",
        }
    }
}

/// Wire body for `POST /agent/decide`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecideRequest {
    pub query: String,
    pub graph_id: String,
}

/// Wire envelope for the decide response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecideResponse {
    pub decision: AgentDecision,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_wire_names() {
        let cases = [
            (AgentAction::FlyToNode, "\"fly_to_node\""),
            (AgentAction::HighlightOnly, "\"highlight_only\""),
            (AgentAction::ShowTop3, "\"show_top_3\""),
            (
                AgentAction::AskClarifyingQuestion,
                "\"ask_clarifying_question\"",
            ),
            (AgentAction::OpenPreview, "\"open_preview\""),
        ];

        for (action, expected) in cases {
            assert_eq!(serde_json::to_string(&action).unwrap(), expected);
            let back: AgentAction = serde_json::from_str(expected).unwrap();
            assert_eq!(back, action);
        }
    }

    #[test]
    fn test_confidence_is_lowercase_on_the_wire() {
        assert_eq!(
            serde_json::to_string(&Confidence::Medium).unwrap(),
            "\"medium\""
        );
        let back: Confidence = serde_json::from_str("\"high\"").unwrap();
        assert_eq!(back, Confidence::High);
    }

    #[test]
    fn test_decision_omits_absent_optionals() {
        let decision = AgentDecision {
            intent_id: "library".to_string(),
            action: AgentAction::FlyToNode,
            ui_hint: "zoom_and_highlight".to_string(),
            reason: "Query relates to library resources".to_string(),
            confidence: None,
            alternatives: None,
        };

        let json = serde_json::to_string(&decision).unwrap();
        assert!(!json.contains("confidence"));
        assert!(!json.contains("alternatives"));
    }

    #[test]
    fn test_decision_roundtrip_with_optionals() {
        let json = r#"{
            "intent_id": "tuition",
            "action": "show_top_3",
            "ui_hint": "zoom_and_highlight",
            "reason": "Query relates to costs and financial matters",
            "confidence": "high",
            "alternatives": ["careers", "admissions"]
        }"#;

        let decision: AgentDecision = serde_json::from_str(json).unwrap();
        assert_eq!(decision.intent_id, "tuition");
        assert_eq!(decision.action, AgentAction::ShowTop3);
        assert_eq!(decision.confidence, Some(Confidence::High));
        assert_eq!(
            decision.alternatives.as_deref(),
            Some(&["careers".to_string(), "admissions".to_string()][..])
        );
    }
}
