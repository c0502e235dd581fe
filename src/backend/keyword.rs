//! Keyword-matching demo backend.
//!
//! A stand-in for a real agent: case-insensitive substring match over an
//! ordered rule table, first matching rule wins. It exists so the explorer
//! works out of the box; any resolver satisfying [`DecisionBackend`] can
//! replace it.

use std::time::Duration;

use async_trait::async_trait;
use once_cell::sync::Lazy;

use crate::error::AppError;
use crate::models::{AgentAction, AgentDecision, Confidence, IntentNode};

use super::DecisionBackend;

const UI_HINT: &str = "zoom_and_highlight";

/// Where unmatched queries land.
const FALLBACK_INTENT: &str = "admissions";
const FALLBACK_REASON: &str = "Semantic similarity match - interpreting user intent";

/// One row of the match table.
struct KeywordRule {
    intent_id: &'static str,
    keywords: &'static [&'static str],
    reason: &'static str,
}

/// Ordered: earlier rows shadow later ones when keywords overlap
/// ("student" belongs to campus even though housing is about students).
const RULES: &[KeywordRule] = &[
    KeywordRule {
        intent_id: "admissions",
        keywords: &["apply", "admission"],
        reason: "Query directly relates to application process",
    },
    KeywordRule {
        intent_id: "courses",
        keywords: &["course", "class", "program"],
        reason: "Query relates to academic programs",
    },
    KeywordRule {
        intent_id: "tuition",
        keywords: &["cost", "tuition", "fee", "financial"],
        reason: "Query relates to costs and financial matters",
    },
    KeywordRule {
        intent_id: "campus",
        keywords: &["campus", "life", "student"],
        reason: "Query relates to campus experience",
    },
    KeywordRule {
        intent_id: "research",
        keywords: &["research", "lab"],
        reason: "Query relates to research activities",
    },
    KeywordRule {
        intent_id: "faculty",
        keywords: &["faculty", "professor", "teacher"],
        reason: "Query relates to faculty members",
    },
    KeywordRule {
        intent_id: "events",
        keywords: &["event", "visit"],
        reason: "Query relates to events and visits",
    },
    KeywordRule {
        intent_id: "contact",
        keywords: &["contact", "help", "support"],
        reason: "Query relates to getting help or contact",
    },
    KeywordRule {
        intent_id: "library",
        keywords: &["library", "book"],
        reason: "Query relates to library resources",
    },
    KeywordRule {
        intent_id: "housing",
        keywords: &["housing", "dorm", "accommodation"],
        reason: "Query relates to student housing",
    },
    KeywordRule {
        intent_id: "careers",
        keywords: &["career", "job", "internship"],
        reason: "Query relates to career opportunities",
    },
    KeywordRule {
        intent_id: "athletics",
        keywords: &["sport", "gym", "athletic"],
        reason: "Query relates to sports and athletics",
    },
];

static DEMO_NODES: Lazy<Vec<IntentNode>> = Lazy::new(|| {
    vec![
        IntentNode::new("admissions", "How to apply for admission to our programs"),
        IntentNode::new("courses", "Browse available courses and curriculum"),
        IntentNode::new("tuition", "Tuition fees and financial aid options"),
        IntentNode::new("campus", "Campus life and student activities"),
        IntentNode::new("research", "Research opportunities and labs"),
        IntentNode::new("faculty", "Meet our faculty and staff"),
        IntentNode::new("events", "Upcoming events and open days"),
        IntentNode::new("contact", "Contact information and support"),
        IntentNode::new("library", "Library resources and digital archives"),
        IntentNode::new("housing", "Student housing and accommodation"),
        IntentNode::new("careers", "Career services and job placement"),
        IntentNode::new("athletics", "Sports teams and fitness facilities"),
    ]
});

/// The fixed demo vocabulary served when no remote backend is configured.
pub fn demo_nodes() -> Vec<IntentNode> {
    DEMO_NODES.clone()
}

/// The bundled resolver.
pub struct KeywordBackend {
    latency: Duration,
}

impl KeywordBackend {
    /// `latency` is slept before each decision; nonzero keeps the thinking
    /// indicator visible in the demo, tests pass `Duration::ZERO`.
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }

    /// Pure matcher, shared by `decide` and unit tests.
    pub fn match_query(query: &str) -> AgentDecision {
        let lowered = query.to_lowercase();

        for rule in RULES {
            if rule.keywords.iter().any(|k| lowered.contains(k)) {
                return AgentDecision {
                    intent_id: rule.intent_id.to_string(),
                    action: AgentAction::FlyToNode,
                    ui_hint: UI_HINT.to_string(),
                    reason: rule.reason.to_string(),
                    confidence: Some(Confidence::High),
                    alternatives: None,
                };
            }
        }

        AgentDecision {
            intent_id: FALLBACK_INTENT.to_string(),
            action: AgentAction::FlyToNode,
            ui_hint: UI_HINT.to_string(),
            reason: FALLBACK_REASON.to_string(),
            confidence: Some(Confidence::Medium),
            alternatives: None,
        }
    }
}

impl Default for KeywordBackend {
    fn default() -> Self {
        Self::new(Duration::from_millis(800))
    }
}

#[async_trait]
impl DecisionBackend for KeywordBackend {
    async fn decide(&self, query: &str, _graph_id: &str) -> Result<AgentDecision, AppError> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        Ok(Self::match_query(query))
    }

    async fn fetch_graph(&self, graph_id: &str) -> Result<Vec<IntentNode>, AppError> {
        tracing::debug!(graph_id, "serving demo vocabulary");
        Ok(demo_nodes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_query_matches_admissions_with_high_confidence() {
        let decision = KeywordBackend::match_query("How do I apply?");

        assert_eq!(decision.intent_id, "admissions");
        assert_eq!(decision.confidence, Some(Confidence::High));
        assert_eq!(decision.action, AgentAction::FlyToNode);
        assert_eq!(decision.ui_hint, UI_HINT);
    }

    #[test]
    fn test_cost_query_matches_tuition() {
        let decision = KeywordBackend::match_query("What are the costs?");

        assert_eq!(decision.intent_id, "tuition");
        assert_eq!(decision.confidence, Some(Confidence::High));
    }

    #[test]
    fn test_unmatched_query_falls_back_to_admissions_medium() {
        let decision = KeywordBackend::match_query("asdfqwerty");

        assert_eq!(decision.intent_id, "admissions");
        assert_eq!(decision.confidence, Some(Confidence::Medium));
        assert_eq!(decision.reason, FALLBACK_REASON);
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let decision = KeywordBackend::match_query("TELL ME ABOUT THE RESEARCH LABS");

        assert_eq!(decision.intent_id, "research");
    }

    #[test]
    fn test_earlier_rule_shadows_later_on_keyword_overlap() {
        // "student" is a campus keyword; the housing rule never sees it
        let decision = KeywordBackend::match_query("student housing");

        assert_eq!(decision.intent_id, "campus");
    }

    #[test]
    fn test_every_rule_targets_a_demo_node() {
        let nodes = demo_nodes();

        for rule in RULES {
            assert!(
                nodes.iter().any(|n| n.id == rule.intent_id),
                "rule for {} has no node",
                rule.intent_id
            );
        }
        assert!(nodes.iter().any(|n| n.id == FALLBACK_INTENT));
    }

    #[tokio::test]
    async fn test_decide_and_fetch_graph_through_the_trait() {
        let backend = KeywordBackend::new(Duration::ZERO);

        let nodes = backend.fetch_graph("university").await.unwrap();
        assert_eq!(nodes.len(), 12);
        assert_eq!(nodes[0].id, "admissions");

        let decision = backend.decide("show me courses", "university").await.unwrap();
        assert_eq!(decision.intent_id, "courses");
    }
}
