//! Assistant router: classify, build context, optionally ask the model,
//! always fall back to a deterministic answer

use crate::classifier::classify_intent;
use crate::composer::compose_response;
use crate::context_builder::build_context;
use crate::gateway::{GatewayRequest, ModelGateway, NullModelGateway};
use crate::knowledge::KnowledgeBase;
use crate::types::*;
use futures::FutureExt;
use once_cell::sync::Lazy;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use tracing::{debug, info};

/// Opt-in keyword for model-backed reasoning
const DEEP_KEYWORD: &str = "deep";

/// Returned only if deterministic composition somehow yields blank text
pub const SAFETY_RESPONSE: &str = "Direct answer: I couldn't put together a specific answer for that question.\n\n\
Why it matters: Every answer should stay grounded in the visualization on screen.\n\n\
Related insight: Try asking what the current step is doing, or about the algorithm's complexity.";

/// Main router (thread-safe via Arc)
pub struct AssistantRouter {
    knowledge: Arc<KnowledgeBase>,
    gateway: Arc<dyn ModelGateway>,
}

pub type SharedAssistantRouter = Arc<AssistantRouter>;

/// A routed answer together with the classification that produced it
#[derive(Debug, Clone)]
pub struct RoutedAnswer {
    pub answer: String,
    pub classified: ClassifiedIntent,
}

impl AssistantRouter {
    pub fn new(knowledge: Arc<KnowledgeBase>, gateway: Arc<dyn ModelGateway>) -> SharedAssistantRouter {
        Arc::new(Self { knowledge, gateway })
    }

    /// Built-in catalog and the null gateway
    pub fn new_simple() -> SharedAssistantRouter {
        Self::new(Arc::new(KnowledgeBase::builtin()), Arc::new(NullModelGateway))
    }

    pub fn knowledge(&self) -> &KnowledgeBase {
        &self.knowledge
    }

    pub fn classify(&self, question: &str) -> ClassifiedIntent {
        classify_intent(question)
    }

    pub fn build_context(&self, request: &AssistRequest) -> AssistantContext {
        build_context(&self.knowledge, request)
    }

    pub fn compose(
        &self,
        question: &str,
        classified: &ClassifiedIntent,
        context: &AssistantContext,
        previous_question: Option<&str>,
    ) -> String {
        compose_response(&self.knowledge, question, classified, context, previous_question)
    }

    /// Answer one question. Never fails and never returns blank text.
    pub async fn route(&self, request: &AssistRequest) -> String {
        self.route_classified(request).await.answer
    }

    /// Like `route`, but also hands back the classification
    pub async fn route_classified(&self, request: &AssistRequest) -> RoutedAnswer {
        let classified = self.classify(&request.question);
        let context = self.build_context(request);

        info!(
            "Routing question: intent={}, topic={:?}, confidence={:.2}",
            classified.primary_intent, context.topic_id, classified.confidence_score
        );

        if wants_model(&request.question, &classified) {
            if let Some(answer) = self.try_model(&request.question, &context, &classified).await {
                return RoutedAnswer { answer, classified };
            }
        }

        let composed = self.compose(
            &request.question,
            &classified,
            &context,
            request.previous_question.as_deref(),
        );
        let answer = if composed.trim().is_empty() {
            SAFETY_RESPONSE.to_string()
        } else {
            composed
        };
        RoutedAnswer { answer, classified }
    }

    /// The single place gateway failures are contained: errors, panics,
    /// `None` and blank answers all become `None`.
    async fn try_model(
        &self,
        question: &str,
        context: &AssistantContext,
        classified: &ClassifiedIntent,
    ) -> Option<String> {
        let request = GatewayRequest {
            question,
            context,
            intent: classified,
        };
        let outcome = AssertUnwindSafe(self.gateway.reason(request)).catch_unwind().await;

        match outcome {
            Ok(Ok(Some(answer))) if !answer.trim().is_empty() => {
                debug!("Answered by {} gateway", self.gateway.name());
                Some(answer)
            }
            Ok(Ok(_)) => {
                debug!("{} gateway had no answer, using deterministic response", self.gateway.name());
                None
            }
            Ok(Err(e)) => {
                debug!("{} gateway failed: {}", self.gateway.name(), e);
                None
            }
            Err(_) => {
                debug!("{} gateway panicked", self.gateway.name());
                None
            }
        }
    }
}

/// Model-backed reasoning is attempted only for edge-case or comparison
/// questions that explicitly contain "deep".
pub fn wants_model(question: &str, classified: &ClassifiedIntent) -> bool {
    (classified.includes(Intent::EdgeCaseAnalysis) || classified.includes(Intent::Comparison))
        && question.to_lowercase().contains(DEEP_KEYWORD)
}

static DEFAULT_ROUTER: Lazy<AssistantRouter> = Lazy::new(|| AssistantRouter {
    knowledge: Arc::new(KnowledgeBase::builtin()),
    gateway: Arc::new(NullModelGateway),
});

/// Built-in catalog shared by the free functions
pub fn default_knowledge_base() -> &'static KnowledgeBase {
    DEFAULT_ROUTER.knowledge()
}

/// Build context against the built-in catalog
pub fn build_assistant_context(request: &AssistRequest) -> AssistantContext {
    DEFAULT_ROUTER.build_context(request)
}

/// Compose against the built-in catalog
pub fn compose_deterministic_response(
    question: &str,
    classified: &ClassifiedIntent,
    context: &AssistantContext,
    previous_question: Option<&str>,
) -> String {
    DEFAULT_ROUTER.compose(question, classified, context, previous_question)
}

/// Route against the built-in catalog with the null gateway
pub async fn route_assistant_response(request: &AssistRequest) -> String {
    DEFAULT_ROUTER.route(request).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deep_opt_in_is_narrow() {
        let q = "Give me a deep comparison of BFS vs DFS";
        assert!(wants_model(q, &classify_intent(q)));

        let q = "Compare BFS vs DFS";
        assert!(!wants_model(q, &classify_intent(q)));

        // "deep" without a qualifying intent
        let q = "What is a deep copy?";
        assert!(!wants_model(q, &classify_intent(q)));

        let q = "DEEP dive: what edge case breaks dijkstra?";
        assert!(wants_model(q, &classify_intent(q)));
    }

    #[tokio::test]
    async fn test_route_classified_matches_route() {
        let router = AssistantRouter::new_simple();
        let request = AssistRequest::new("What is the time complexity?", "/algorithms/sorting/merge-sort");

        let routed = router.route_classified(&request).await;
        assert_eq!(routed.classified.primary_intent, Intent::Complexity);
        assert_eq!(routed.answer, router.route(&request).await);
    }

    #[test]
    fn test_safety_response_keeps_shape() {
        assert!(SAFETY_RESPONSE.contains("Direct answer:"));
        assert!(SAFETY_RESPONSE.contains("Why it matters:"));
        assert!(SAFETY_RESPONSE.contains("Related insight:"));
    }
}
