//! AlgoViz Assistant - deterministic Q&A over live algorithm visualizations
//!
//! Answers free-text questions about the algorithm or data structure on screen:
//! - Weighted keyword intent classification
//! - Context extraction from the page path and visualization state
//! - Template-based answers from a runtime-extensible knowledge base
//! - Optional model-backed reasoning with guaranteed deterministic fallback

pub mod types;
pub mod catalog;
pub mod knowledge;
pub mod classifier;
pub mod context_builder;
pub mod composer;
pub mod config;
pub mod error;
pub mod gateway;
pub mod router;
pub mod server;

pub use types::*;
pub use knowledge::{KnowledgeBase, KnowledgeEntry, Comparison, Complexity, TopicType, validate_entries};
pub use classifier::classify_intent;
pub use config::{AssistantConfig, RunMode};
pub use error::GatewayError;
pub use gateway::{GatewayRequest, ModelGateway, NullModelGateway, StaticModelGateway, HttpModelGateway};
pub use router::{
    AssistantRouter, RoutedAnswer, SharedAssistantRouter, build_assistant_context, compose_deterministic_response,
    default_knowledge_base, route_assistant_response,
};

#[cfg(test)]
mod tests;
