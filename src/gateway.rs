//! Model gateways for model-backed reasoning on "deep" questions

use crate::error::GatewayError;
use crate::types::*;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Everything a gateway gets to reason about one question
#[derive(Debug, Clone, Serialize)]
pub struct GatewayRequest<'a> {
    pub question: &'a str,
    pub context: &'a AssistantContext,
    pub intent: &'a ClassifiedIntent,
}

/// Pluggable source of model-backed answers.
///
/// Implementations may fail in any way; callers must contain the failure.
/// `Ok(None)` means "no answer", not an error.
#[async_trait]
pub trait ModelGateway: Send + Sync {
    fn name(&self) -> &'static str;

    async fn reason(&self, request: GatewayRequest<'_>) -> Result<Option<String>, GatewayError>;
}

/// Gateway that never answers
#[derive(Debug, Clone, Copy, Default)]
pub struct NullModelGateway;

#[async_trait]
impl ModelGateway for NullModelGateway {
    fn name(&self) -> &'static str {
        "null"
    }

    async fn reason(&self, _request: GatewayRequest<'_>) -> Result<Option<String>, GatewayError> {
        Ok(None)
    }
}

/// Gateway returning a fixed answer, for tests and demos
#[derive(Debug, Clone)]
pub struct StaticModelGateway {
    answer: Option<String>,
}

impl StaticModelGateway {
    pub fn new(answer: impl Into<String>) -> Self {
        Self {
            answer: Some(answer.into()),
        }
    }

    pub fn silent() -> Self {
        Self { answer: None }
    }
}

#[async_trait]
impl ModelGateway for StaticModelGateway {
    fn name(&self) -> &'static str {
        "static"
    }

    async fn reason(&self, _request: GatewayRequest<'_>) -> Result<Option<String>, GatewayError> {
        Ok(self.answer.clone())
    }
}

/// Body posted to the model service
#[derive(Debug, Serialize)]
struct ReasonBody<'a> {
    question: &'a str,
    context: &'a AssistantContext,
    intent: Intent,
    intents: Vec<Intent>,
}

/// Reply from the model service
#[derive(Debug, Deserialize)]
struct ReasonReply {
    #[serde(default)]
    answer: Option<String>,
}

/// HTTP-backed gateway calling an external model service.
///
/// The request timeout is enforced here so the router never has to.
pub struct HttpModelGateway {
    service_url: String,
    timeout: Duration,
    client: reqwest::Client,
}

impl HttpModelGateway {
    pub fn new(service_url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            service_url: service_url.into(),
            timeout,
            client: reqwest::Client::new(),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/reason", self.service_url.trim_end_matches('/'))
    }

    fn map_send_error(&self, err: reqwest::Error) -> GatewayError {
        if err.is_timeout() {
            GatewayError::Timeout(self.timeout.as_millis() as u64)
        } else if err.is_connect() {
            GatewayError::Unavailable(err.to_string())
        } else {
            GatewayError::Transport(err.to_string())
        }
    }
}

#[async_trait]
impl ModelGateway for HttpModelGateway {
    fn name(&self) -> &'static str {
        "http"
    }

    async fn reason(&self, request: GatewayRequest<'_>) -> Result<Option<String>, GatewayError> {
        let body = ReasonBody {
            question: request.question,
            context: request.context,
            intent: request.intent.primary_intent,
            intents: request.intent.intents.iter().map(|s| s.intent).collect(),
        };

        let response = self
            .client
            .post(self.endpoint())
            .timeout(self.timeout)
            .json(&body)
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(GatewayError::Status { status, body });
        }

        let reply: ReasonReply = response
            .json()
            .await
            .map_err(|e| GatewayError::Decode(e.to_string()))?;

        tracing::debug!("Model gateway replied with {} chars", reply.answer.as_deref().map_or(0, str::len));

        Ok(reply.answer.filter(|a| !a.trim().is_empty()))
    }
}
