//! Decision backends.
//!
//! A backend answers two questions: "which intent did this query mean?"
//! and "what nodes does this graph contain?". The explorer talks to a
//! backend only through [`DecisionBackend`], so the bundled keyword
//! matcher and a real remote agent are interchangeable.

mod http;
mod keyword;

use async_trait::async_trait;

use crate::error::AppError;
use crate::models::{AgentDecision, IntentNode};

pub use http::HttpBackend;
pub use keyword::{demo_nodes, KeywordBackend};

/// Resolves free-text queries against an intent graph.
#[async_trait]
pub trait DecisionBackend: Send + Sync {
    /// Maps a query to a decision.
    ///
    /// The returned `intent_id` must name a node of the addressed graph;
    /// that constraint binds the implementation, callers do not re-check it.
    async fn decide(&self, query: &str, graph_id: &str) -> Result<AgentDecision, AppError>;

    /// Fetches the node list for a graph, in layout order.
    async fn fetch_graph(&self, graph_id: &str) -> Result<Vec<IntentNode>, AppError>;
}
