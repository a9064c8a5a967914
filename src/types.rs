//! Core type definitions shared by the assistant pipeline

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Purpose behind a user question.
///
/// Declaration order matters: it breaks ties when two categories score the same.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Intent {
    Definition,
    CurrentStateExplanation,
    SelectionRuleReasoning,
    Comparison,
    Complexity,
    ImplementationDetail,
    OptimizationGuidance,
    EdgeCaseAnalysis,
    NavigationHelp,
    OutOfContext,
}

impl Intent {
    pub const ALL: [Intent; 10] = [
        Intent::Definition,
        Intent::CurrentStateExplanation,
        Intent::SelectionRuleReasoning,
        Intent::Comparison,
        Intent::Complexity,
        Intent::ImplementationDetail,
        Intent::OptimizationGuidance,
        Intent::EdgeCaseAnalysis,
        Intent::NavigationHelp,
        Intent::OutOfContext,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::Definition => "definition",
            Intent::CurrentStateExplanation => "current-state-explanation",
            Intent::SelectionRuleReasoning => "selection-rule-reasoning",
            Intent::Comparison => "comparison",
            Intent::Complexity => "complexity",
            Intent::ImplementationDetail => "implementation-detail",
            Intent::OptimizationGuidance => "optimization-guidance",
            Intent::EdgeCaseAnalysis => "edge-case-analysis",
            Intent::NavigationHelp => "navigation-help",
            Intent::OutOfContext => "out-of-context",
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Score of one intent category for a single question
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntentScore {
    pub intent: Intent,
    pub score: f32,
    pub evidence: Vec<String>,  // matched signal terms
}

/// Result of classifying one question
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassifiedIntent {
    pub primary_intent: Intent,
    pub secondary_intent: Option<Intent>,
    pub confidence_score: f32,        // 0.0-1.0
    pub raw_scores: BTreeMap<Intent, f32>,
    pub intents: Vec<IntentScore>,    // score descending
    pub conflict_note: Option<String>,
}

impl ClassifiedIntent {
    pub fn includes(&self, intent: Intent) -> bool {
        self.intents.iter().any(|s| s.intent == intent)
    }
}

/// Live snapshot of an in-progress animation, owned by the renderer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VisualizationState {
    pub algorithm_id: Option<String>,
    pub algorithm_name: Option<String>,
    pub step_index: usize,
    pub total_steps: usize,
    pub step_description: Option<String>,
    pub current_node: Option<String>,
    pub queue: Option<Vec<String>>,
    pub stack: Option<Vec<String>>,
    pub path: Option<Vec<String>>,
}

/// Question plus the UI state it was asked against
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssistRequest {
    pub question: String,
    #[serde(default)]
    pub pathname: String,
    #[serde(default)]
    pub visualization_state: VisualizationState,
    #[serde(default)]
    pub previous_question: Option<String>,
}

impl AssistRequest {
    pub fn new(question: impl Into<String>, pathname: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            pathname: pathname.into(),
            ..Default::default()
        }
    }

    pub fn with_state(mut self, state: VisualizationState) -> Self {
        self.visualization_state = state;
        self
    }

    pub fn with_previous(mut self, previous: impl Into<String>) -> Self {
        self.previous_question = Some(previous.into());
        self
    }
}

/// Context derived per request from the UI state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssistantContext {
    pub route_context: String,
    pub algorithm_id: Option<String>,
    pub topic_id: Option<String>,
    pub topic_name: String,
    pub summary: String,
    pub state_details: Vec<String>,
    pub has_visualization_data: bool,
    pub visualization_state: VisualizationState,
}
