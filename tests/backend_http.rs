//! Integration tests for the HTTP decision backend against a real local
//! axum server on an ephemeral port.

use axum::extract::Path;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};

use intentscape::backend::{DecisionBackend, HttpBackend};
use intentscape::config::BackendConfig;
use intentscape::error::AppError;
use intentscape::models::{
    AgentAction, AgentDecision, Confidence, DecideRequest, DecideResponse, GraphResponse,
    IntentNode,
};

async fn decide_handler(Json(request): Json<DecideRequest>) -> Json<DecideResponse> {
    Json(DecideResponse {
        decision: AgentDecision {
            intent_id: "tuition".to_string(),
            action: AgentAction::FlyToNode,
            ui_hint: "zoom_and_highlight".to_string(),
            reason: format!("matched '{}' in graph {}", request.query, request.graph_id),
            confidence: Some(Confidence::High),
            alternatives: Some(vec!["careers".to_string()]),
        },
    })
}

async fn graph_handler(
    Path(graph_id): Path<String>,
) -> Result<Json<GraphResponse>, StatusCode> {
    if graph_id != "university" {
        return Err(StatusCode::NOT_FOUND);
    }
    Ok(Json(GraphResponse {
        nodes: vec![
            IntentNode::new("tuition", "Tuition fees and financial aid options"),
            IntentNode::new("careers", "Career services and job placement"),
        ],
    }))
}

/// Starts the stub server; returns a backend pointed at it.
async fn spawn_server() -> HttpBackend {
    let router = Router::new()
        .route("/agent/decide", post(decide_handler))
        .route("/graph/:graph_id", get(graph_handler));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    HttpBackend::new(&BackendConfig {
        url: format!("http://{addr}"),
        timeout: 5,
    })
    .unwrap()
}

#[tokio::test]
async fn test_decide_round_trip() {
    let backend = spawn_server().await;

    let decision = backend
        .decide("What are the costs?", "university")
        .await
        .unwrap();

    assert_eq!(decision.intent_id, "tuition");
    assert_eq!(decision.confidence, Some(Confidence::High));
    assert!(decision.reason.contains("What are the costs?"));
    assert_eq!(decision.alternatives.as_deref().unwrap().len(), 1);
}

#[tokio::test]
async fn test_fetch_graph_round_trip() {
    let backend = spawn_server().await;

    let nodes = backend.fetch_graph("university").await.unwrap();

    assert_eq!(nodes.len(), 2);
    assert_eq!(nodes[0].id, "tuition");
}

#[tokio::test]
async fn test_non_2xx_graph_fetch_is_a_hard_failure() {
    let backend = spawn_server().await;

    match backend.fetch_graph("museum").await {
        Err(AppError::BackendStatus { status, .. }) => assert_eq!(status, 404),
        other => panic!("expected a status error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_non_2xx_decide_carries_the_body() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let router = Router::new().route(
        "/agent/decide",
        post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "resolver exploded") }),
    );
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    let backend = HttpBackend::new(&BackendConfig {
        url: format!("http://{addr}"),
        timeout: 5,
    })
    .unwrap();

    match backend.decide("anything", "university").await {
        Err(AppError::BackendStatus { status, body }) => {
            assert_eq!(status, 500);
            assert_eq!(body, "resolver exploded");
        }
        other => panic!("expected a status error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_unreachable_backend_is_a_request_error() {
    // nothing listens on this port
    let backend = HttpBackend::new(&BackendConfig {
        url: "http://127.0.0.1:9".to_string(),
        timeout: 1,
    })
    .unwrap();

    assert!(matches!(
        backend.decide("anything", "university").await,
        Err(AppError::Request(_))
    ));
}
