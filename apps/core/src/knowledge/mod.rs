//! # Knowledge Base
//!
//! Read-only mapping from term to [`SemanticEntry`], loaded once and shared
//! by every search. Iteration order is the document's declared order — the
//! match selector depends on it for deterministic tie-breaking.
//!
//! ## Components
//! - `entry`: strongly-typed entry records with explicit optional fields
//! - `loader`: asynchronous document loading with fallback to the built-in default

pub mod entry;
pub mod loader;

use std::collections::{BTreeMap, HashMap};

pub use entry::{ActionHorizons, Actions, Domain, QuestionSpec, SemanticEntry, VECTOR_DIM};
pub use loader::{load_or_default, FileProvider, KnowledgeProvider, KnowledgeState};

/// The engine's knowledge base: an ordered, read-only collection of
/// term → entry pairs.
#[derive(Debug, Clone, Default)]
pub struct KnowledgeBase {
    entries: Vec<(String, SemanticEntry)>,
}

impl KnowledgeBase {
    /// Builds a knowledge base preserving the declared entry order.
    pub fn from_entries(entries: Vec<(String, SemanticEntry)>) -> Self {
        Self { entries }
    }

    /// Looks up an entry by its exact term.
    pub fn get(&self, term: &str) -> Option<&SemanticEntry> {
        self.entries
            .iter()
            .find(|(t, _)| t == term)
            .map(|(_, e)| e)
    }

    /// Iterates term/entry pairs in declared order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &SemanticEntry)> {
        self.entries.iter().map(|(t, e)| (t.as_str(), e))
    }

    /// First entry in declared order, if any.
    pub fn first(&self) -> Option<(&str, &SemanticEntry)> {
        self.entries.first().map(|(t, e)| (t.as_str(), e))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn question(title: &str, options: &[&str]) -> QuestionSpec {
    QuestionSpec {
        title: title.to_string(),
        options: options.iter().map(|o| o.to_string()).collect(),
    }
}

fn flat(actions: &[&str]) -> Actions {
    Actions::Flat(actions.iter().map(|a| a.to_string()).collect())
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// The built-in default knowledge base.
///
/// Used when no document is supplied or the external load fails, so that
/// matching degrades gracefully instead of failing outright. Carries at
/// least one entry per intent's representative term.
pub fn default_knowledge_base() -> KnowledgeBase {
    let mut entries: Vec<(String, SemanticEntry)> = Vec::new();

    entries.push((
        "sustainable living".to_string(),
        SemanticEntry::new(Domain::Community)
            .with_vector(vec![0.4, 0.5, 0.4, 0.9])
            .with_questions(BTreeMap::from([
                (
                    1,
                    question(
                        "Which part of daily life do you want to change first?",
                        &["Food", "Energy", "Waste"],
                    ),
                ),
                (
                    2,
                    question(
                        "How much time can you give it?",
                        &["A few minutes now", "A weekend project", "An ongoing habit"],
                    ),
                ),
                (
                    3,
                    question(
                        "What outcome matters most?",
                        &["Lower bills", "Smaller footprint", "Healthier home"],
                    ),
                ),
            ]))
            .with_actions(flat(&[
                "Audit your household waste",
                "Switch one staple to a local source",
                "Explore sustainable alternatives",
            ]))
            .with_modifiers(HashMap::from([
                ("home".to_string(), "household everyday changes".to_string()),
                ("work".to_string(), "workplace green initiatives".to_string()),
            ])),
    ));

    entries.push((
        "organic farming".to_string(),
        SemanticEntry::new(Domain::Agriculture)
            .with_subdomain("horticulture")
            .with_vector(vec![0.3, 0.4, 0.5, 0.9])
            .with_questions(BTreeMap::from([
                (
                    1,
                    question(
                        "Where will you grow?",
                        &["Balcony or containers", "Backyard plot", "Community space"],
                    ),
                ),
                (
                    2,
                    question(
                        "How do you want to start?",
                        &[
                            "Plan beds for next season",
                            "Start a quick herb box today",
                            "Join a local growing group",
                        ],
                    ),
                ),
                (
                    3,
                    question(
                        "What matters most to you?",
                        &["Fresh food", "Soil health", "Lower costs"],
                    ),
                ),
            ]))
            .with_actions(Actions::Horizons(ActionHorizons {
                immediate: strings(&["Test your soil", "Start a compost bin"]),
                short_term: strings(&["Plant a cover crop", "Set up rainwater collection"]),
                medium_term: strings(&["Rotate crops each season"]),
                long_term: strings(&["Build a long-term soil fertility plan"]),
            }))
            .with_modifiers(HashMap::from([
                (
                    "balcony".to_string(),
                    "container gardening small spaces".to_string(),
                ),
                (
                    "backyard".to_string(),
                    "raised beds home garden".to_string(),
                ),
                (
                    "community".to_string(),
                    "shared plot cooperative".to_string(),
                ),
            ])),
    ));

    entries.push((
        "learn programming".to_string(),
        SemanticEntry::new(Domain::Technology)
            .with_vector(vec![0.9, 0.3, 0.6, 0.1])
            .with_actions(flat(&[
                "Pick a beginner language",
                "Build a tiny first project",
            ])),
    ));

    entries.push((
        "renewable energy".to_string(),
        SemanticEntry::new(Domain::Energy)
            .with_subdomain("solar")
            .with_vector(vec![0.4, 0.5, 0.6, 0.8])
            .with_actions(Actions::Horizons(ActionHorizons {
                immediate: strings(&["Measure your current usage"]),
                short_term: strings(&["Get a solar quote"]),
                medium_term: vec![],
                long_term: strings(&["Plan a comprehensive home energy retrofit"]),
            })),
    ));

    entries.push((
        "mindfulness practice".to_string(),
        SemanticEntry::new(Domain::Wellness)
            .with_vector(vec![0.5, 0.4, 0.3, 0.7])
            .with_questions(BTreeMap::from([
                (
                    1,
                    question(
                        "When does stress hit hardest?",
                        &["Mornings", "Work hours", "Evenings"],
                    ),
                ),
                (
                    2,
                    question(
                        "Pick a practice to try",
                        &[
                            "Guided body scan",
                            "Two minute breathing now",
                            "Evening journaling",
                        ],
                    ),
                ),
                (
                    3,
                    question(
                        "What support helps you?",
                        &["Quiet solo practice", "A partner or friend", "A group class"],
                    ),
                ),
            ]))
            .with_actions(flat(&[
                "Practice mindfulness",
                "Connect with support",
                "Take a short walk outside",
            ])),
    ));

    entries.push((
        "eco education".to_string(),
        SemanticEntry::new(Domain::Education)
            .with_vector(vec![0.6, 0.4, 0.5, 0.8])
            .with_actions(flat(&[
                "Find beginner resources",
                "Join learning community",
            ])),
    ));

    entries.push((
        "community garden".to_string(),
        SemanticEntry::new(Domain::Community)
            .with_vector(vec![0.5, 0.4, 0.6, 0.8])
            .with_actions(Actions::Horizons(ActionHorizons {
                immediate: strings(&["Visit the nearest plot"]),
                short_term: strings(&["Sign up for a shared bed"]),
                medium_term: strings(&["Help organize a seed swap"]),
                long_term: vec![],
            })),
    ));

    KnowledgeBase::from_entries(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_kb_preserves_declared_order() {
        let kb = default_knowledge_base();
        let first = kb.first().map(|(t, _)| t.to_string());

        assert_eq!(first.as_deref(), Some("sustainable living"));
        assert!(kb.len() >= 6);
    }

    #[test]
    fn test_lookup_by_term() {
        let kb = default_knowledge_base();

        let entry = kb.get("organic farming").expect("entry present");
        assert_eq!(entry.domain, Domain::Agriculture);
        assert!(kb.get("no such term").is_none());
    }
}
