//! HTTP server exposing the assistant to the visualizer UI

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{AssistRequest, AssistantContext, ClassifiedIntent, Intent, SharedAssistantRouter};

#[derive(Debug, Deserialize)]
pub struct ClassifyRequestHttp {
    pub question: String,
}

/// Answer returned to the UI
#[derive(Debug, Serialize)]
pub struct AssistResponse {
    pub answer: String,
    pub intent: Intent,
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
}

/// Answer a question; routing never fails, so neither does this handler
async fn assist_handler(
    State(router): State<SharedAssistantRouter>,
    Json(req): Json<AssistRequest>,
) -> Json<AssistResponse> {
    info!("Received assist request: pathname='{}', question_len={}", req.pathname, req.question.len());

    let routed = router.route_classified(&req).await;

    Json(AssistResponse {
        answer: routed.answer,
        intent: routed.classified.primary_intent,
    })
}

async fn classify_handler(
    State(router): State<SharedAssistantRouter>,
    Json(req): Json<ClassifyRequestHttp>,
) -> Json<ClassifiedIntent> {
    Json(router.classify(&req.question))
}

async fn context_handler(
    State(router): State<SharedAssistantRouter>,
    Json(req): Json<AssistRequest>,
) -> Json<AssistantContext> {
    Json(router.build_context(&req))
}

/// Health check handler
async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: "algoviz-assistant".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Create and configure the HTTP server
pub fn create_router(router: SharedAssistantRouter) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/assist", post(assist_handler))
        .route("/classify", post(classify_handler))
        .route("/context", post(context_handler))
        .with_state(router)
}

/// Run the HTTP server
pub async fn run_server(router: SharedAssistantRouter, port: u16) -> anyhow::Result<()> {
    let addr = format!("0.0.0.0:{}", port);
    info!("Starting assistant server on {}", addr);

    let app = create_router(router);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AssistantRouter, VisualizationState};

    #[tokio::test]
    async fn test_assist_handler_answers() {
        let router = AssistantRouter::new_simple();
        let req = AssistRequest::new("What is the time complexity?", "/algorithms/graph/bfs");
        let Json(resp) = assist_handler(State(router), Json(req)).await;

        assert_eq!(resp.intent, Intent::Complexity);
        assert!(resp.answer.starts_with("Direct answer: Time: O(V + E)"));
    }

    #[tokio::test]
    async fn test_classify_handler() {
        let router = AssistantRouter::new_simple();
        let req = ClassifyRequestHttp { question: "what is the weather tomorrow?".to_string() };
        let Json(resp) = classify_handler(State(router), Json(req)).await;
        assert_eq!(resp.primary_intent, Intent::OutOfContext);
    }

    #[tokio::test]
    async fn test_context_handler() {
        let router = AssistantRouter::new_simple();
        let state = VisualizationState {
            algorithm_id: Some("queue".to_string()),
            step_index: 0,
            total_steps: 2,
            queue: Some(vec!["7".to_string()]),
            ..Default::default()
        };
        let req = AssistRequest::new("state?", "/data-structures/queue").with_state(state);
        let Json(ctx) = context_handler(State(router), Json(req)).await;

        assert_eq!(ctx.summary, "Step 1 of 2");
        assert_eq!(ctx.state_details, vec!["Queue front: 7"]);
        assert_eq!(ctx.route_context, "Data Structures");
    }

    #[tokio::test]
    async fn test_health_handler() {
        let Json(resp) = health_handler().await;
        assert_eq!(resp.status, "healthy");
        assert_eq!(resp.service, "algoviz-assistant");
    }

    #[test]
    fn test_request_json_uses_camel_case() {
        let raw = r#"{
            "question": "why this node?",
            "pathname": "/algorithms/graph/dijkstra",
            "visualizationState": {"algorithmId": "dijkstra", "stepIndex": 3, "totalSteps": 9, "currentNode": "F"},
            "previousQuestion": "why this node?"
        }"#;
        let req: AssistRequest = serde_json::from_str(raw).unwrap();
        assert_eq!(req.visualization_state.algorithm_id.as_deref(), Some("dijkstra"));
        assert_eq!(req.visualization_state.total_steps, 9);
        assert!(req.visualization_state.queue.is_none());
        assert_eq!(req.previous_question.as_deref(), Some("why this node?"));
    }
}
