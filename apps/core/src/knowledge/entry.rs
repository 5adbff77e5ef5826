//! Knowledge-base entry types.
//!
//! A semantic entry describes one topic the engine can match against:
//! its domain, embedding vector, authored follow-up questions, recommended
//! actions and context modifiers. Entries are supplied data — read-only to
//! the engine, with every optional field made explicit.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::brain::intent::Intent;

/// Dimension of entry embedding vectors in the bundled knowledge base.
///
/// External documents may carry vectors of any length; comparisons against a
/// vector of a different length contribute zero similarity instead of erroring.
pub const VECTOR_DIM: usize = 4;

/// Coarse topical tag attached to an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Domain {
    Agriculture,
    Wellness,
    Technology,
    Education,
    Energy,
    Community,
}

impl Domain {
    /// All domains, in the order used for deterministic hint scans.
    pub const ALL: [Domain; 6] = [
        Domain::Agriculture,
        Domain::Wellness,
        Domain::Technology,
        Domain::Education,
        Domain::Energy,
        Domain::Community,
    ];

    /// Returns a human-readable label for the domain.
    pub fn label(&self) -> &'static str {
        match self {
            Domain::Agriculture => "agriculture",
            Domain::Wellness => "wellness",
            Domain::Technology => "technology",
            Domain::Education => "education",
            Domain::Energy => "energy",
            Domain::Community => "community",
        }
    }

    /// The intent this domain aligns with for scoring purposes.
    pub fn aligned_intent(&self) -> Intent {
        match self {
            Domain::Agriculture => Intent::EcologicalAction,
            Domain::Wellness => Intent::Wellness,
            Domain::Technology => Intent::Action,
            Domain::Education => Intent::Learning,
            Domain::Energy => Intent::EcologicalAction,
            Domain::Community => Intent::Action,
        }
    }

    /// Keywords whose presence in a query hints at this domain.
    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            Domain::Agriculture => &[
                "farm", "garden", "organic", "soil", "crop", "grow", "permaculture", "compost",
            ],
            Domain::Wellness => &[
                "stress", "health", "mindful", "sleep", "anxiety", "wellbeing", "meditation",
                "relax",
            ],
            Domain::Technology => &[
                "software", "programming", "computer", "digital", "code", "tech", "app",
            ],
            Domain::Education => &["course", "study", "tutorial", "teach", "school", "lesson"],
            Domain::Energy => &["solar", "energy", "renewable", "power", "wind", "battery"],
            Domain::Community => &[
                "community", "local", "neighborhood", "volunteer", "together", "share",
            ],
        }
    }
}

/// One step of an authored question flow: a title plus its answer options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionSpec {
    /// The question shown for this step.
    pub title: String,
    /// Answer options, in authored order.
    pub options: Vec<String>,
}

/// Actions grouped by time horizon.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ActionHorizons {
    #[serde(default)]
    pub immediate: Vec<String>,
    #[serde(default)]
    pub short_term: Vec<String>,
    #[serde(default)]
    pub medium_term: Vec<String>,
    #[serde(default)]
    pub long_term: Vec<String>,
}

/// Recommended actions for an entry: either a flat ordered list or a
/// horizon-grouped structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Actions {
    Flat(Vec<String>),
    Horizons(ActionHorizons),
}

impl Actions {
    /// Flattens into a single ordered list. Horizon order is
    /// immediate, short_term, medium_term, long_term.
    pub fn flatten(&self) -> Vec<String> {
        match self {
            Actions::Flat(list) => list.clone(),
            Actions::Horizons(h) => h
                .immediate
                .iter()
                .chain(h.short_term.iter())
                .chain(h.medium_term.iter())
                .chain(h.long_term.iter())
                .cloned()
                .collect(),
        }
    }
}

/// One knowledge-base record describing a topic.
///
/// A document entry may omit any of the optional fields; consumers treat a
/// missing field as an empty/default value, never as fatal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SemanticEntry {
    /// Coarse topical tag.
    pub domain: Domain,
    /// Optional finer-grained tag within the domain.
    #[serde(default)]
    pub subdomain: Option<String>,
    /// Embedding vector for similarity scoring.
    #[serde(default)]
    pub vector: Option<Vec<f32>>,
    /// Authored follow-up question flow, keyed by step number.
    #[serde(default)]
    pub questions: Option<BTreeMap<u8, QuestionSpec>>,
    /// Recommended actions.
    #[serde(default)]
    pub actions: Option<Actions>,
    /// Context-keyed modifier phrases for query enhancement.
    #[serde(default)]
    pub modifiers: Option<HashMap<String, String>>,
}

impl SemanticEntry {
    /// Creates a minimal entry with every optional field absent.
    pub fn new(domain: Domain) -> Self {
        Self {
            domain,
            subdomain: None,
            vector: None,
            questions: None,
            actions: None,
            modifiers: None,
        }
    }

    pub fn with_subdomain(mut self, subdomain: &str) -> Self {
        self.subdomain = Some(subdomain.to_string());
        self
    }

    pub fn with_vector(mut self, vector: Vec<f32>) -> Self {
        self.vector = Some(vector);
        self
    }

    pub fn with_questions(mut self, questions: BTreeMap<u8, QuestionSpec>) -> Self {
        self.questions = Some(questions);
        self
    }

    pub fn with_actions(mut self, actions: Actions) -> Self {
        self.actions = Some(actions);
        self
    }

    pub fn with_modifiers(mut self, modifiers: HashMap<String, String>) -> Self {
        self.modifiers = Some(modifiers);
        self
    }
}
