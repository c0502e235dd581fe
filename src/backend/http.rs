//! HTTP decision backend speaking the decide/graph JSON protocol.

use async_trait::async_trait;
use reqwest::Client;

use crate::config::BackendConfig;
use crate::error::AppError;
use crate::models::{AgentDecision, DecideRequest, DecideResponse, GraphResponse, IntentNode};

use super::DecisionBackend;

/// Client for a remote decision service.
///
/// Protocol:
/// - `POST {base}/agent/decide` with `{ query, graph_id }` returns
///   `{ decision: AgentDecision }`
/// - `GET {base}/graph/{graph_id}` returns `{ nodes: [IntentNode] }`
///
/// Any non-2xx status is a hard failure for that request.
pub struct HttpBackend {
    client: Client,
    base_url: String,
}

impl HttpBackend {
    /// Builds a client from config.
    ///
    /// The request timeout keeps a dead backend from wedging the UI in
    /// its thinking state.
    pub fn new(config: &BackendConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(config.request_timeout())
            .build()?;

        Ok(Self {
            client,
            base_url: config.url.trim_end_matches('/').to_string(),
        })
    }

    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, AppError> {
        if response.status().is_success() {
            return Ok(response);
        }
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        Err(AppError::BackendStatus { status, body })
    }
}

#[async_trait]
impl DecisionBackend for HttpBackend {
    async fn decide(&self, query: &str, graph_id: &str) -> Result<AgentDecision, AppError> {
        tracing::debug!(query, graph_id, "posting decide request");

        let response = self
            .client
            .post(format!("{}/agent/decide", self.base_url))
            .json(&DecideRequest {
                query: query.to_string(),
                graph_id: graph_id.to_string(),
            })
            .send()
            .await?;

        let response = Self::check_status(response).await?;
        let decide: DecideResponse = response.json().await?;
        Ok(decide.decision)
    }

    async fn fetch_graph(&self, graph_id: &str) -> Result<Vec<IntentNode>, AppError> {
        tracing::debug!(graph_id, "fetching graph");

        let response = self
            .client
            .get(format!("{}/graph/{}", self.base_url, graph_id))
            .send()
            .await?;

        let response = Self::check_status(response).await?;
        let graph: GraphResponse = response.json().await?;
        Ok(graph.nodes)
    }
}
