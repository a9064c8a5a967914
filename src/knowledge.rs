//! Knowledge base: topic id -> structured facts, with alias lookup

use crate::catalog::builtin_entries;
use crate::config::RunMode;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TopicType {
    Algorithm,
    DataStructure,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Complexity {
    pub time: String,
    pub space: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    pub with: String,  // topic id
    pub summary: String,
}

/// Facts about one algorithm or data structure.
///
/// For every list field the first element is the "primary" fact used when
/// composing answers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KnowledgeEntry {
    pub id: String,
    #[serde(rename = "type")]
    pub topic_type: TopicType,
    pub name: String,
    pub aliases: Vec<String>,  // lowercase
    pub definition: String,
    pub intuition: String,
    pub complexity: Complexity,
    pub use_cases: Vec<String>,
    pub comparisons: Vec<Comparison>,
    pub pitfalls: Vec<String>,
    pub implementation_notes: Vec<String>,
    pub optimization_tips: Vec<String>,
    pub edge_cases: Vec<String>,
    pub examples: Vec<String>,
}

impl KnowledgeEntry {
    /// Whether the lowercased text mentions this entry by alias or name
    fn mentioned_in(&self, lowered: &str) -> bool {
        self.aliases.iter().any(|alias| lowered.contains(alias.as_str()))
            || lowered.contains(&self.name.to_lowercase())
    }
}

type FieldCheck = (&'static str, fn(&KnowledgeEntry) -> bool);

/// A list with no non-blank element carries no facts
fn all_blank(items: &[String]) -> bool {
    items.iter().all(|s| s.trim().is_empty())
}

/// Required fields and their "is empty" predicates
const REQUIRED_FIELDS: &[FieldCheck] = &[
    ("definition", |e| e.definition.trim().is_empty()),
    ("intuition", |e| e.intuition.trim().is_empty()),
    ("complexity.time", |e| e.complexity.time.trim().is_empty()),
    ("complexity.space", |e| e.complexity.space.trim().is_empty()),
    ("useCases", |e| all_blank(&e.use_cases)),
    ("comparisons", |e| e.comparisons.iter().all(|c| c.summary.trim().is_empty())),
    ("pitfalls", |e| all_blank(&e.pitfalls)),
    ("implementationNotes", |e| all_blank(&e.implementation_notes)),
    ("edgeCases", |e| all_blank(&e.edge_cases)),
    ("examples", |e| all_blank(&e.examples)),
];

/// Names of required fields that are empty on this entry
pub fn missing_fields(entry: &KnowledgeEntry) -> Vec<&'static str> {
    REQUIRED_FIELDS
        .iter()
        .filter(|(_, is_empty)| is_empty(entry))
        .map(|(name, _)| *name)
        .collect()
}

/// Report entries with missing required fields, one diagnostic per entry.
///
/// Never fails; the sink decides what a diagnostic means.
pub fn validate_entries<'a, I, F>(entries: I, mut sink: F)
where
    I: IntoIterator<Item = &'a KnowledgeEntry>,
    F: FnMut(String),
{
    for entry in entries {
        let missing = missing_fields(entry);
        if !missing.is_empty() {
            sink(format!(
                "knowledge entry '{}' is missing required fields: {}",
                entry.id,
                missing.join(", ")
            ));
        }
    }
}

/// Open catalog of topics, kept in insertion order.
///
/// Topic ids are plain strings so new entries can be added at runtime
/// without touching the classifier or composer.
#[derive(Debug, Clone, Default)]
pub struct KnowledgeBase {
    entries: Vec<KnowledgeEntry>,
}

impl KnowledgeBase {
    pub fn new(entries: Vec<KnowledgeEntry>) -> Self {
        let mut kb = Self::default();
        for entry in entries {
            kb.insert(entry);
        }
        kb
    }

    /// Catalog of every topic the visualizer ships with
    pub fn builtin() -> Self {
        Self::new(builtin_entries())
    }

    /// Insert or replace an entry; a replaced entry keeps its scan position
    pub fn insert(&mut self, entry: KnowledgeEntry) -> Option<KnowledgeEntry> {
        match self.entries.iter_mut().find(|e| e.id == entry.id) {
            Some(existing) => Some(std::mem::replace(existing, entry)),
            None => {
                self.entries.push(entry);
                None
            }
        }
    }

    pub fn remove(&mut self, id: &str) -> Option<KnowledgeEntry> {
        let idx = self.entries.iter().position(|e| e.id == id)?;
        Some(self.entries.remove(idx))
    }

    pub fn get(&self, id: &str) -> Option<&KnowledgeEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn entries(&self) -> &[KnowledgeEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolve an entry from an explicit id or, failing that, from free text.
    ///
    /// An explicit id that resolves always wins. Otherwise the first entry
    /// (in insertion order) whose alias or lowercased name is a substring of
    /// the lowercased text is returned.
    pub fn find_entry(&self, free_text: &str, preferred_id: Option<&str>) -> Option<&KnowledgeEntry> {
        if let Some(entry) = preferred_id.and_then(|id| self.get(id)) {
            return Some(entry);
        }

        let lowered = free_text.to_lowercase();
        let found = self.entries.iter().find(|e| e.mentioned_in(&lowered));
        if let Some(entry) = found {
            debug!("Resolved topic '{}' from question text", entry.id);
        }
        found
    }

    /// Warn about incomplete entries unless running in production
    pub fn validate(&self, mode: RunMode) {
        self.validate_with(mode, |message| warn!("{}", message));
    }

    /// Report incomplete entries to `sink`; production mode reports nothing
    pub fn validate_with<F: FnMut(String)>(&self, mode: RunMode, sink: F) {
        if mode.is_production() {
            return;
        }
        validate_entries(&self.entries, sink);
    }
}
