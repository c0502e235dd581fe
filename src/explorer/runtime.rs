//! Async boundary between the render loop and the decision backend.
//!
//! Backend calls run as tasks on the ambient tokio runtime; results come
//! back over an unbounded channel that a frame system drains with
//! `try_recv`, so the render loop never blocks on I/O.

use std::sync::Arc;

use bevy::prelude::{ResMut, Resource};
use tokio::sync::mpsc;

use crate::backend::DecisionBackend;
use crate::error::AppError;
use crate::models::{AgentDecision, IntentNode};

use super::state::ExplorerState;

/// A completed backend call, delivered to the frame loop.
pub enum BackendEvent {
    /// A decide call finished. `seq` ties it back to the submission that
    /// started it; stale sequences are dropped by the state.
    Decision {
        seq: u64,
        result: Result<AgentDecision, AppError>,
    },
    /// A graph fetch finished.
    Graph(Result<Vec<IntentNode>, AppError>),
}

/// Owns the backend, the runtime handle, and the result channel.
#[derive(Resource)]
pub struct BackendHandle {
    backend: Arc<dyn DecisionBackend>,
    runtime: tokio::runtime::Handle,
    graph_id: String,
    tx: mpsc::UnboundedSender<BackendEvent>,
    rx: mpsc::UnboundedReceiver<BackendEvent>,
}

impl BackendHandle {
    /// Captures the current tokio runtime; must be constructed inside it.
    pub fn new(backend: Arc<dyn DecisionBackend>, graph_id: String) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            backend,
            runtime: tokio::runtime::Handle::current(),
            graph_id,
            tx,
            rx,
        }
    }

    pub fn graph_id(&self) -> &str {
        &self.graph_id
    }

    /// Resolves `query` in the background; the result arrives as a
    /// [`BackendEvent::Decision`] carrying `seq`.
    pub fn spawn_decide(&self, seq: u64, query: String) {
        let backend = Arc::clone(&self.backend);
        let graph_id = self.graph_id.clone();
        let tx = self.tx.clone();

        self.runtime.spawn(async move {
            let result = backend.decide(&query, &graph_id).await;
            // send fails only when the explorer already shut down
            let _ = tx.send(BackendEvent::Decision { seq, result });
        });
    }

    /// Fetches the node list in the background.
    pub fn spawn_fetch(&self) {
        let backend = Arc::clone(&self.backend);
        let graph_id = self.graph_id.clone();
        let tx = self.tx.clone();

        self.runtime.spawn(async move {
            let result = backend.fetch_graph(&graph_id).await;
            let _ = tx.send(BackendEvent::Graph(result));
        });
    }

    fn try_recv(&mut self) -> Option<BackendEvent> {
        use mpsc::error::TryRecvError;
        match self.rx.try_recv() {
            Ok(event) => Some(event),
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => None,
        }
    }
}

/// Drains completed backend calls into the state, once per frame.
pub fn drain_backend_events(mut handle: ResMut<BackendHandle>, mut state: ResMut<ExplorerState>) {
    while let Some(event) = handle.try_recv() {
        match event {
            BackendEvent::Decision { seq, result } => match result {
                Ok(decision) => {
                    state.apply_decision(seq, decision);
                }
                Err(err) => {
                    tracing::warn!(%err, "decision request failed");
                    state.fail_thinking(seq);
                }
            },
            BackendEvent::Graph(Ok(nodes)) => {
                tracing::info!(count = nodes.len(), "graph loaded");
                state.set_nodes(nodes);
                state.set_graph_error(None);
                state.set_loading_graph(false);
            }
            BackendEvent::Graph(Err(err)) => {
                tracing::error!(%err, "graph fetch failed");
                state.set_graph_error(Some(err.to_string()));
                state.set_loading_graph(false);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::KeywordBackend;
    use std::time::Duration;

    #[tokio::test]
    async fn test_decide_result_arrives_on_the_channel() {
        let backend = Arc::new(KeywordBackend::new(Duration::ZERO));
        let mut handle = BackendHandle::new(backend, "university".to_string());

        handle.spawn_decide(1, "How do I apply?".to_string());

        let event = handle.rx.recv().await.unwrap();
        match event {
            BackendEvent::Decision { seq, result } => {
                assert_eq!(seq, 1);
                assert_eq!(result.unwrap().intent_id, "admissions");
            }
            BackendEvent::Graph(_) => panic!("expected a decision event"),
        }
    }

    #[tokio::test]
    async fn test_fetch_delivers_the_demo_vocabulary() {
        let backend = Arc::new(KeywordBackend::new(Duration::ZERO));
        let mut handle = BackendHandle::new(backend, "university".to_string());

        handle.spawn_fetch();

        match handle.rx.recv().await.unwrap() {
            BackendEvent::Graph(Ok(nodes)) => assert_eq!(nodes.len(), 12),
            _ => panic!("expected a graph event"),
        }
    }

    #[test]
    fn test_try_recv_is_non_blocking_when_empty() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let _guard = runtime.enter();
        let backend = Arc::new(KeywordBackend::new(Duration::ZERO));
        let mut handle = BackendHandle::new(backend, "university".to_string());

        assert!(handle.try_recv().is_none());
    }
}
