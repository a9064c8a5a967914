//! Template-based deterministic responses
//!
//! Every response has the same shape: "Direct answer", "Why it matters" and
//! "Related insight" sections separated by blank lines, optionally followed
//! by an "Examples" bullet block. Callers depend on these markers.

use crate::knowledge::{KnowledgeBase, KnowledgeEntry};
use crate::types::*;

pub const DIRECT_ANSWER: &str = "Direct answer:";
pub const WHY_IT_MATTERS: &str = "Why it matters:";
pub const RELATED_INSIGHT: &str = "Related insight:";
pub const EXAMPLES: &str = "Examples:";

const MAX_EXAMPLES: usize = 2;
const DETAIL_SEPARATOR: &str = " • ";

const GENERIC_PITFALL: &str =
    "Trace a small input by hand alongside the animation to catch off-by-one and ordering mistakes.";
const GENERIC_USE_CASE: &str =
    "Knowing how it scales tells you when it is the right tool and when to reach for something else.";

struct Sections {
    direct: String,
    why: String,
    related: String,
    examples: Vec<String>,
}

impl Sections {
    fn new(direct: impl Into<String>, why: impl Into<String>, related: impl Into<String>) -> Self {
        Self {
            direct: direct.into(),
            why: why.into(),
            related: related.into(),
            examples: Vec::new(),
        }
    }

    fn with_examples(mut self, examples: &[String]) -> Self {
        self.examples = facts(examples).take(MAX_EXAMPLES).map(str::to_string).collect();
        self
    }

    fn render(self) -> String {
        let mut blocks = vec![
            format!("{} {}", DIRECT_ANSWER, self.direct),
            format!("{} {}", WHY_IT_MATTERS, self.why),
            format!("{} {}", RELATED_INSIGHT, self.related),
        ];
        if !self.examples.is_empty() {
            let bullets: Vec<String> = self.examples.iter().map(|e| format!("- {}", e)).collect();
            blocks.push(format!("{}\n{}", EXAMPLES, bullets.join("\n")));
        }
        blocks.join("\n\n")
    }
}

/// Non-blank elements of a fact list
fn facts(items: &[String]) -> impl Iterator<Item = &str> + '_ {
    items.iter().map(String::as_str).filter(|s| !s.trim().is_empty())
}

/// First non-blank element of a fact list, or a filler sentence
fn first_or<'a>(items: &'a [String], filler: &'a str) -> &'a str {
    facts(items).next().unwrap_or(filler)
}

fn or_filler<'a>(text: &'a str, filler: &'a str) -> &'a str {
    if text.trim().is_empty() { filler } else { text }
}

fn is_repeat(question: &str, previous: Option<&str>) -> bool {
    previous.is_some_and(|p| p.trim().to_lowercase() == question.trim().to_lowercase())
}

fn live_state_line(context: &AssistantContext) -> String {
    if context.state_details.is_empty() {
        context.summary.clone()
    } else {
        format!("{}{}{}", context.summary, DETAIL_SEPARATOR, context.state_details.join(DETAIL_SEPARATOR))
    }
}

fn time_of(entry: &KnowledgeEntry) -> &str {
    or_filler(&entry.complexity.time, "a time cost that depends on the input")
}

fn space_of(entry: &KnowledgeEntry) -> &str {
    or_filler(&entry.complexity.space, "memory that depends on the input")
}

fn complexity_recap(entry: &KnowledgeEntry) -> String {
    format!("In short, {} runs in {} and needs {}.", entry.name, time_of(entry), space_of(entry))
}

/// Canned sentence describing how a topic picks its next element
fn selection_rule(entry: &KnowledgeEntry) -> String {
    match entry.id.as_str() {
        "bfs" => "BFS always expands the node at the front of the queue, so nodes are processed in order of their edge distance from the source.".to_string(),
        "dfs" => "DFS always continues from the node on top of the stack, going as deep as possible before backtracking to the most recent branch point.".to_string(),
        "dijkstra" => "Dijkstra always settles the unvisited node with the smallest tentative distance from the source, then relaxes its outgoing edges.".to_string(),
        "astar" => "A* always expands the open node with the lowest f = g + h, balancing the cost paid so far against the heuristic estimate to the goal.".to_string(),
        _ => format!(
            "{} picks its next element by a fixed rule at every step; the highlighted element in the current frame is the one that rule selected.",
            entry.name
        ),
    }
}

fn out_of_scope() -> Sections {
    Sections::new(
        "I can only help with the algorithms and data structures in this visualizer, so that question is outside what I can answer.",
        "Staying on topic keeps every answer grounded in the visualization you are looking at.",
        "Try asking what the current step is doing, how the algorithm compares to another, or what its complexity is.",
    )
}

fn navigation(context: &AssistantContext) -> Sections {
    Sections::new(
        format!(
            "Use the play and pause controls to animate {}, the step buttons to move one frame at a time, and the speed slider to change playback speed. Reset starts the scenario over.",
            context.topic_name
        ),
        "Stepping frame by frame lets you check each decision against the rule the algorithm follows.",
        "Pause on an interesting frame and ask me what is happening at the current step.",
    )
}

fn insufficient_context(context: &AssistantContext) -> Sections {
    Sections::new(
        format!(
            "I don't have enough context to answer that precisely for {}. Open a specific algorithm or data structure, or mention one by name such as BFS or merge sort.",
            context.route_context
        ),
        "Answers are built from the topic on screen, so a known topic makes them specific instead of generic.",
        "Once a visualization is running, I can also explain the current step and what the algorithm will do next.",
    )
}

fn current_state(entry: &KnowledgeEntry, context: &AssistantContext) -> Sections {
    let direct = if context.has_visualization_data {
        live_state_line(context)
    } else {
        format!(
            "{}. Start a scenario for {} and I can walk through each step with you.",
            context.summary, entry.name
        )
    };
    Sections::new(
        direct,
        format!(
            "Each frame shows the invariant {} maintains, so reading the state tells you why the next move follows.",
            entry.name
        ),
        or_filler(&entry.intuition, GENERIC_PITFALL),
    )
}

fn selection_reasoning(entry: &KnowledgeEntry, context: &AssistantContext, repeated: bool) -> Sections {
    let related = if repeated {
        format!("Right now: {}.", live_state_line(context))
    } else {
        first_or(&entry.pitfalls, GENERIC_PITFALL).to_string()
    };
    Sections::new(
        selection_rule(entry),
        "The selection rule is what separates one traversal or search strategy from another; change the rule and you get a different algorithm.",
        related,
    )
}

fn comparison(kb: &KnowledgeBase, entry: &KnowledgeEntry) -> Sections {
    let direct = entry
        .comparisons
        .iter()
        .map(|c| c.summary.trim())
        .find(|s| !s.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| {
            format!(
                "{} trades time, memory and simplicity differently from its alternatives; pick it when its strengths match your input.",
                entry.name
            )
        });

    let targets: Vec<String> = entry
        .comparisons
        .iter()
        .filter(|c| !c.with.trim().is_empty())
        .map(|c| kb.get(&c.with).map(|e| e.name.clone()).unwrap_or_else(|| c.with.clone()))
        .collect();
    let related = if targets.is_empty() {
        format!("Compare {} with another topic in this visualizer to see the tradeoffs side by side.", entry.name)
    } else {
        format!("{} is most often compared with: {}.", entry.name, targets.join(", "))
    };

    Sections::new(direct, first_or(&entry.use_cases, GENERIC_USE_CASE), related)
}

fn complexity(entry: &KnowledgeEntry) -> Sections {
    Sections::new(
        format!("Time: {}. Space: {}.", time_of(entry), space_of(entry)),
        "Complexity tells you how the cost grows with input size, which decides whether an approach still works at scale.",
        format!("Typical use: {}.", first_or(&entry.use_cases, GENERIC_USE_CASE).trim_end_matches('.')),
    )
}

fn implementation(entry: &KnowledgeEntry) -> Sections {
    let related = facts(&entry.implementation_notes)
        .nth(1)
        .or_else(|| facts(&entry.optimization_tips).next())
        .unwrap_or(GENERIC_PITFALL);
    Sections::new(
        first_or(
            &entry.implementation_notes,
            "Start from the textbook pseudocode and mirror each animation step with one loop iteration.",
        ),
        "Getting the core data structure and loop invariant right is most of a correct implementation.",
        related,
    )
    .with_examples(&entry.examples)
}

fn optimization(entry: &KnowledgeEntry) -> Sections {
    Sections::new(
        first_or(
            &entry.optimization_tips,
            "Measure first, then remove repeated work and unnecessary allocations from the inner loop.",
        ),
        "Constant factors and early exits often matter as much as the asymptotic bound on real inputs.",
        first_or(&entry.pitfalls, GENERIC_PITFALL),
    )
}

fn edge_cases(entry: &KnowledgeEntry) -> Sections {
    Sections::new(
        first_or(
            &entry.edge_cases,
            "Check empty input, a single element, and duplicate values first.",
        ),
        "Most bugs hide at the boundaries rather than in the typical case.",
        facts(&entry.edge_cases)
            .nth(1)
            .unwrap_or("Always test the boundaries: empty input, one element, and the largest allowed size."),
    )
}

fn definition(entry: &KnowledgeEntry, repeated: bool) -> Sections {
    let related = if repeated {
        complexity_recap(entry)
    } else {
        first_or(&entry.pitfalls, GENERIC_PITFALL).to_string()
    };
    let direct = format!("{} {}", entry.definition, entry.intuition).trim().to_string();
    let direct = if direct.is_empty() {
        format!("{} is one of the topics in this visualizer; run its animation to see it in action.", entry.name)
    } else {
        direct
    };
    Sections::new(
        direct,
        first_or(&entry.use_cases, GENERIC_USE_CASE),
        related,
    )
}

/// Compose a deterministic answer; never returns empty text.
pub fn compose_response(
    kb: &KnowledgeBase,
    question: &str,
    classified: &ClassifiedIntent,
    context: &AssistantContext,
    previous_question: Option<&str>,
) -> String {
    let sections = match classified.primary_intent {
        Intent::OutOfContext => out_of_scope(),
        Intent::NavigationHelp => navigation(context),
        intent => match kb.find_entry(question, context.topic_id.as_deref()) {
            None => insufficient_context(context),
            Some(entry) => {
                let repeated = is_repeat(question, previous_question);
                match intent {
                    Intent::CurrentStateExplanation => current_state(entry, context),
                    Intent::SelectionRuleReasoning => selection_reasoning(entry, context, repeated),
                    Intent::Comparison => comparison(kb, entry),
                    Intent::Complexity => complexity(entry),
                    Intent::ImplementationDetail => implementation(entry),
                    Intent::OptimizationGuidance => optimization(entry),
                    Intent::EdgeCaseAnalysis => edge_cases(entry),
                    _ => definition(entry, repeated),
                }
            }
        },
    };
    sections.render()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::classify_intent;
    use crate::context_builder::build_context;
    use crate::knowledge::{Comparison, Complexity, TopicType};

    fn assert_shape(text: &str) {
        assert!(text.contains(DIRECT_ANSWER), "missing direct answer: {}", text);
        assert!(text.contains(WHY_IT_MATTERS), "missing why: {}", text);
        assert!(text.contains(RELATED_INSIGHT), "missing related: {}", text);
        let direct = text.find(DIRECT_ANSWER).unwrap();
        let why = text.find(WHY_IT_MATTERS).unwrap();
        let related = text.find(RELATED_INSIGHT).unwrap();
        assert!(direct < why && why < related);
    }

    fn compose(kb: &KnowledgeBase, req: &AssistRequest) -> String {
        let classified = classify_intent(&req.question);
        let ctx = build_context(kb, req);
        compose_response(kb, &req.question, &classified, &ctx, req.previous_question.as_deref())
    }

    fn forced(intent: Intent) -> ClassifiedIntent {
        let mut classified = classify_intent("");
        classified.primary_intent = intent;
        classified
    }

    fn hollow_entry() -> KnowledgeEntry {
        KnowledgeEntry {
            id: "hollow".to_string(),
            topic_type: TopicType::DataStructure,
            name: "Hollow".to_string(),
            aliases: vec!["hollow".to_string()],
            definition: String::new(),
            intuition: String::new(),
            complexity: Complexity::default(),
            use_cases: vec![],
            comparisons: vec![],
            pitfalls: vec![],
            implementation_notes: vec![],
            optimization_tips: vec![],
            edge_cases: vec![],
            examples: vec![],
        }
    }

    #[test]
    fn test_every_intent_keeps_shape() {
        let kb = KnowledgeBase::builtin();
        let contexts = [
            build_context(&kb, &AssistRequest::new("tell me", "/algorithms/graph/bfs")),
            build_context(&kb, &AssistRequest::new("tell me", "/nowhere")),
        ];
        for ctx in &contexts {
            for intent in Intent::ALL {
                let text = compose_response(&kb, "tell me", &forced(intent), ctx, None);
                assert_shape(&text);
            }
        }
    }

    #[test]
    fn test_hollow_entry_uses_fillers() {
        let mut kb = KnowledgeBase::builtin();
        kb.insert(hollow_entry());
        let ctx = build_context(&kb, &AssistRequest::new("hollow", "/"));
        for intent in Intent::ALL {
            let text = compose_response(&kb, "hollow", &forced(intent), &ctx, Some("hollow"));
            assert_shape(&text);
            for marker in [DIRECT_ANSWER, WHY_IT_MATTERS, RELATED_INSIGHT] {
                let line = text.lines().find(|l| l.starts_with(marker)).unwrap();
                assert!(!line[marker.len()..].trim().is_empty(), "empty section in: {}", text);
            }
        }
    }

    #[test]
    fn test_blank_list_items_use_fillers() {
        let mut kb = KnowledgeBase::builtin();
        let mut heap = hollow_entry();
        heap.id = "heap".to_string();
        heap.name = "Heap".to_string();
        heap.aliases = vec!["heap".to_string()];
        heap.definition = "A heap keeps its smallest element at the root.".to_string();
        heap.use_cases = vec!["".to_string()];
        heap.pitfalls = vec![" ".to_string()];
        heap.implementation_notes = vec!["".to_string(), "\t".to_string()];
        heap.edge_cases = vec!["".to_string(), "".to_string()];
        heap.examples = vec!["  ".to_string()];
        heap.comparisons = vec![Comparison { with: "".to_string(), summary: " ".to_string() }];
        kb.insert(heap);

        let ctx = build_context(&kb, &AssistRequest::new("what is a heap?", "/"));
        for intent in Intent::ALL {
            let text = compose_response(&kb, "what is a heap?", &forced(intent), &ctx, None);
            for marker in [DIRECT_ANSWER, WHY_IT_MATTERS, RELATED_INSIGHT] {
                let line = text.lines().find(|l| l.starts_with(marker)).unwrap();
                assert!(!line[marker.len()..].trim().is_empty(), "empty section in: {}", text);
            }
            assert!(!text.contains(EXAMPLES), "blank examples rendered: {}", text);
        }
    }

    #[test]
    fn test_current_state_lists_details() {
        let kb = KnowledgeBase::builtin();
        let state = VisualizationState {
            algorithm_id: Some("bfs".to_string()),
            step_index: 1,
            total_steps: 4,
            current_node: Some("B".to_string()),
            ..Default::default()
        };
        let req = AssistRequest::new("What is happening at the current step?", "/algorithms/graph/bfs")
            .with_state(state);
        let text = compose(&kb, &req);

        assert!(text.contains("Step 2 of 4"));
        assert!(text.contains("Current node: B"));
        assert!(text.contains("Step 2 of 4 • Current node: B"));
    }

    #[test]
    fn test_current_state_without_steps_prompts_start() {
        let kb = KnowledgeBase::builtin();
        let req = AssistRequest::new("what is happening right now", "/algorithms/graph/dfs");
        let text = compose(&kb, &req);
        assert!(text.contains("No active visualization steps yet"));
        assert!(text.contains("Start a scenario"));
    }

    #[test]
    fn test_out_of_context_ignores_topic() {
        let kb = KnowledgeBase::builtin();
        let text = compose(&kb, &AssistRequest::new("what is the weather tomorrow?", "/algorithms/graph/bfs"));
        assert!(text.contains("outside what I can answer"));
        assert!(!text.contains("Breadth-First Search"));
    }

    #[test]
    fn test_navigation_mentions_topic() {
        let kb = KnowledgeBase::builtin();
        let text = compose(&kb, &AssistRequest::new("how do i use the controls?", "/algorithms/sorting/merge-sort"));
        assert!(text.contains("Merge Sort"));
        assert!(text.contains("speed slider"));
    }

    #[test]
    fn test_unresolved_topic_mentions_route() {
        let kb = KnowledgeBase::builtin();
        let text = compose(&kb, &AssistRequest::new("what is the time complexity?", "/algorithms/sorting"));
        assert!(text.contains("don't have enough context"));
        assert!(text.contains("Sorting Algorithms"));
    }

    #[test]
    fn test_comparison_lists_targets() {
        let kb = KnowledgeBase::builtin();
        let text = compose(&kb, &AssistRequest::new("compare bfs with the others", "/"));
        assert!(text.contains("Depth-First Search, Dijkstra's Algorithm"));
        assert!(text.starts_with("Direct answer: BFS finds the fewest-edge path"));
    }

    #[test]
    fn test_complexity_cites_use_case() {
        let kb = KnowledgeBase::builtin();
        let text = compose(&kb, &AssistRequest::new("what is the time complexity?", "/algorithms/sorting/merge-sort"));
        assert!(text.contains("Time: O(n log n) time in every case."));
        assert!(text.contains("Typical use: Stable sorting of large datasets."));
    }

    #[test]
    fn test_implementation_includes_examples() {
        let kb = KnowledgeBase::builtin();
        let text = compose(&kb, &AssistRequest::new("show me the pseudocode", "/algorithms/graph/dijkstra"));
        assert!(text.contains("Examples:\n- Fastest driving route between two cities\n- Cheapest sequence"));
        assert!(text.contains("Relax each outgoing edge"));
    }

    #[test]
    fn test_edge_case_second_entry() {
        let kb = KnowledgeBase::builtin();
        let text = compose(&kb, &AssistRequest::new("any edge case to watch?", "/algorithms/searching/binary-search"));
        assert!(text.contains("An empty array must return not-found"));
        assert!(text.contains("With duplicates"));
    }

    #[test]
    fn test_selection_rule_repeat_shows_state() {
        let kb = KnowledgeBase::builtin();
        let state = VisualizationState {
            algorithm_id: Some("dfs".to_string()),
            step_index: 0,
            total_steps: 3,
            stack: Some(vec!["A".to_string(), "B".to_string()]),
            ..Default::default()
        };
        let question = "Why did it pick this one?";
        let first = compose(&kb, &AssistRequest::new(question, "/").with_state(state.clone()));
        assert!(first.contains("top of the stack"));
        assert!(first.contains("overflow the call stack"));

        let again = compose(
            &kb,
            &AssistRequest::new(question, "/").with_state(state).with_previous("why did it PICK this one?"),
        );
        assert!(again.contains("Right now: Step 1 of 3 • Stack top: B."));
    }

    #[test]
    fn test_definition_repeat_recaps_complexity() {
        let kb = KnowledgeBase::builtin();
        let req = AssistRequest::new("What is a stack?", "/");
        let first = compose(&kb, &req);
        assert!(first.contains("last-in, first-out"));
        assert!(first.contains("underflow"));

        let again = compose(&kb, &req.clone().with_previous("what is a stack?"));
        assert!(again.contains("In short, Stack runs in O(1) push, pop and peek"));
    }

    #[test]
    fn test_sections_separated_by_blank_lines() {
        let kb = KnowledgeBase::builtin();
        let text = compose(&kb, &AssistRequest::new("what is bfs", "/"));
        assert_eq!(text.split("\n\n").count(), 3);
    }
}
