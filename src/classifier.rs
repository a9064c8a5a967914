//! Weighted keyword intent classifier

use crate::types::*;
use std::collections::BTreeMap;
use tracing::debug;

/// Categories scoring below this are treated as noise
pub const MIN_INTENT_SCORE: f32 = 2.0;

/// Second-best scores within this margin of the top raise a conflict note
const CONFLICT_MARGIN: f32 = 1.0;

type Signal = (&'static str, u8);

/// Signal table: per intent, (term, weight) pairs matched as substrings.
/// Specific phrases carry more weight than generic single words.
const SIGNALS: &[(Intent, &[Signal])] = &[
    (Intent::Definition, &[
        ("what is", 4),
        ("what are", 3),
        ("what does", 3),
        ("definition", 5),
        ("define", 4),
        ("meaning", 3),
        ("tell me about", 4),
        ("describe", 3),
        ("overview", 3),
        ("explain", 2),
        ("concept", 2),
    ]),
    (Intent::CurrentStateExplanation, &[
        ("current step", 5),
        ("current state", 5),
        ("current node", 5),
        ("what is happening", 5),
        ("what's happening", 5),
        ("what just happened", 5),
        ("this step", 4),
        ("right now", 4),
        ("at the moment", 3),
        ("visited", 2),
        ("state", 2),
        ("step", 2),
    ]),
    (Intent::SelectionRuleReasoning, &[
        ("why did it pick", 5),
        ("why this node", 5),
        ("why was", 3),
        ("next node", 4),
        ("chosen", 3),
        ("choose", 3),
        ("pick", 3),
        ("select", 3),
        ("priority", 3),
        ("order", 2),
        ("why", 2),
    ]),
    (Intent::Comparison, &[
        ("difference between", 5),
        ("which is better", 5),
        ("compared to", 4),
        ("better than", 4),
        ("versus", 4),
        ("compare", 4),
        ("tradeoff", 3),
        ("trade-off", 3),
        ("differ", 3),
        ("vs", 3),
    ]),
    (Intent::Complexity, &[
        ("time complexity", 5),
        ("space complexity", 5),
        ("complexity", 5),
        ("big o", 4),
        ("big-o", 4),
        ("o(", 3),
        ("runtime", 3),
        ("how fast", 3),
        ("how much memory", 3),
        ("performance", 2),
    ]),
    (Intent::ImplementationDetail, &[
        ("pseudocode", 5),
        ("how do i implement", 5),
        ("implementation", 4),
        ("implement", 4),
        ("source code", 4),
        ("code", 3),
        ("how does it work", 3),
        ("write", 2),
    ]),
    (Intent::OptimizationGuidance, &[
        ("optimization", 5),
        ("optimize", 4),
        ("optimise", 4),
        ("speed up", 4),
        ("make it faster", 4),
        ("faster", 3),
        ("improve", 3),
        ("efficient", 3),
    ]),
    (Intent::EdgeCaseAnalysis, &[
        ("edge case", 5),
        ("corner case", 5),
        ("what if", 4),
        ("empty", 3),
        ("negative", 3),
        ("duplicate", 3),
        ("disconnected", 3),
        ("cycle", 3),
        ("boundary", 3),
        ("fail", 3),
        ("if", 1),
    ]),
    (Intent::NavigationHelp, &[
        ("how do i use", 5),
        ("controls", 4),
        ("button", 4),
        ("slider", 4),
        ("navigate", 4),
        ("pause", 3),
        ("replay", 3),
        ("reset", 3),
        ("where do i", 3),
        ("play", 2),
    ]),
    (Intent::OutOfContext, &[
        ("stock price", 5),
        ("weather", 5),
        ("forecast", 4),
        ("recipe", 4),
        ("joke", 4),
        ("movie", 4),
        ("sports", 4),
        ("tomorrow", 3),
        ("news", 3),
    ]),
];

/// Score every category against the normalized question
fn score_all(normalized: &str) -> Vec<IntentScore> {
    SIGNALS
        .iter()
        .map(|(intent, signals)| {
            let mut score = 0.0;
            let mut evidence = Vec::new();
            for (term, weight) in signals.iter() {
                if normalized.contains(term) {
                    score += *weight as f32;
                    evidence.push(term.to_string());
                }
            }
            IntentScore {
                intent: *intent,
                score,
                evidence,
            }
        })
        .collect()
}

fn default_classification(raw_scores: BTreeMap<Intent, f32>) -> ClassifiedIntent {
    ClassifiedIntent {
        primary_intent: Intent::Definition,
        secondary_intent: None,
        confidence_score: 1.0,
        raw_scores,
        intents: vec![IntentScore {
            intent: Intent::Definition,
            score: 1.0,
            evidence: vec!["default".to_string()],
        }],
        conflict_note: None,
    }
}

/// Classify a free-text question into ranked intents.
///
/// Always returns a usable primary intent; signal-free input falls back to
/// `Definition` with full confidence.
pub fn classify_intent(question: &str) -> ClassifiedIntent {
    let normalized = question.trim().to_lowercase();
    let scores = score_all(&normalized);

    let raw_scores: BTreeMap<Intent, f32> = scores.iter().map(|s| (s.intent, s.score)).collect();
    let total: f32 = scores.iter().map(|s| s.score).sum();

    let mut intents: Vec<IntentScore> = scores
        .into_iter()
        .filter(|s| s.score >= MIN_INTENT_SCORE)
        .collect();
    // stable: ties keep declaration order
    intents.sort_by(|a, b| b.score.total_cmp(&a.score));

    let Some(top) = intents.first() else {
        debug!("No intent signals in question, using default");
        return default_classification(raw_scores);
    };

    let primary_intent = top.intent;
    let second = intents.get(1);
    let confidence_score = if total > 0.0 { top.score / total } else { 1.0 };

    let conflict_note = second
        .filter(|s| top.score - s.score <= CONFLICT_MARGIN)
        .map(|s| {
            format!(
                "Question mixes {} and {} signals; prioritizing {}.",
                primary_intent, s.intent, primary_intent
            )
        });

    debug!(
        "Classified question: primary={}, confidence={:.2}, candidates={}",
        primary_intent,
        confidence_score,
        intents.len()
    );

    ClassifiedIntent {
        primary_intent,
        secondary_intent: second.map(|s| s.intent),
        confidence_score,
        raw_scores,
        intents,
        conflict_note,
    }
}
