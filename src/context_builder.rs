//! Derives assistant context from the page location and live visualization state

use crate::knowledge::KnowledgeBase;
use crate::types::*;
use tracing::debug;

pub const NO_STEPS_SUMMARY: &str = "No active visualization steps yet";
pub const DEFAULT_ROUTE_CONTEXT: &str = "Algorithm Visualizer";

/// Pathname fragments mapped to topic ids, most specific first
const PATH_TOPIC_RULES: &[(&str, &str)] = &[
    ("binary-search-tree", "binary-search-tree"),
    ("bst", "binary-search-tree"),
    ("binary-search", "binary-search"),
    ("linear-search", "linear-search"),
    ("bubble-sort", "bubble-sort"),
    ("selection-sort", "selection-sort"),
    ("insertion-sort", "insertion-sort"),
    ("merge-sort", "merge-sort"),
    ("quick-sort", "quick-sort"),
    ("dijkstra", "dijkstra"),
    ("a-star", "astar"),
    ("astar", "astar"),
    ("bfs", "bfs"),
    ("dfs", "dfs"),
    ("linked-list", "linked-list"),
    ("stack", "stack"),
    ("queue", "queue"),
    ("array", "array"),
];

/// Pathname prefixes mapped to topic family labels, most specific first
const ROUTE_FAMILIES: &[(&str, &str)] = &[
    ("/algorithms/graph", "Graph Algorithms"),
    ("/algorithms/sorting", "Sorting Algorithms"),
    ("/algorithms/searching", "Searching Algorithms"),
    ("/algorithms", "Algorithms"),
    ("/data-structures", "Data Structures"),
];

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

/// Topic id from the visualization state, else from the pathname
pub fn resolve_topic_id(pathname: &str, state: &VisualizationState) -> Option<String> {
    if let Some(id) = non_blank(&state.algorithm_id) {
        return Some(id.to_string());
    }

    let path = pathname.to_lowercase();
    let topic = PATH_TOPIC_RULES
        .iter()
        .find(|(fragment, _)| path.contains(fragment))
        .map(|(_, topic)| topic.to_string());
    debug!("Resolved topic {:?} from pathname '{}'", topic, pathname);
    topic
}

/// Coarse topic-family label for the page
pub fn route_context(pathname: &str) -> String {
    let path = pathname.to_lowercase();
    ROUTE_FAMILIES
        .iter()
        .find(|(prefix, _)| path.starts_with(prefix))
        .map(|(_, label)| label.to_string())
        .unwrap_or_else(|| DEFAULT_ROUTE_CONTEXT.to_string())
}

/// Human-readable facts about the current frame, in display order
pub fn state_details(state: &VisualizationState) -> Vec<String> {
    let mut details = Vec::new();

    if let Some(description) = non_blank(&state.step_description) {
        details.push(description.to_string());
    }
    if let Some(node) = non_blank(&state.current_node) {
        details.push(format!("Current node: {}", node));
    }
    if let Some(front) = state.queue.as_ref().and_then(|q| q.first()) {
        details.push(format!("Queue front: {}", front));
    }
    if let Some(top) = state.stack.as_ref().and_then(|s| s.last()) {
        details.push(format!("Stack top: {}", top));
    }
    if let Some(path) = state.path.as_ref().filter(|p| !p.is_empty()) {
        details.push(format!("Path: {}", path.join(" → ")));
    }

    details
}

/// Build the context for one question
pub fn build_context(kb: &KnowledgeBase, request: &AssistRequest) -> AssistantContext {
    let state = &request.visualization_state;
    let route_context = route_context(&request.pathname);

    let resolved_id = resolve_topic_id(&request.pathname, state);
    let entry = kb.find_entry(&request.question, resolved_id.as_deref());

    let has_visualization_data = state.total_steps > 0;
    let summary = if has_visualization_data {
        format!("Step {} of {}", state.step_index.saturating_add(1), state.total_steps)
    } else {
        NO_STEPS_SUMMARY.to_string()
    };

    let topic_name = entry
        .map(|e| e.name.clone())
        .or_else(|| non_blank(&state.algorithm_name).map(str::to_string))
        .unwrap_or_else(|| route_context.clone());

    AssistantContext {
        algorithm_id: non_blank(&state.algorithm_id).map(str::to_string),
        topic_id: entry.map(|e| e.id.clone()).or(resolved_id),
        topic_name,
        summary,
        state_details: state_details(state),
        has_visualization_data,
        route_context,
        visualization_state: state.clone(),
    }
}
