//! Intent detection from trigger phrases and token signals.
//!
//! An ordered rule list is tested via substring containment against the
//! lower-cased query; the first rule with any hit wins. Queries that trip
//! no rule fall back to token-type signals.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::tokens::{Token, WordType};

/// Inferred purpose of a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    /// Wants to acquire a skill or understanding.
    Learning,
    /// Wants evidence, comparisons or deeper investigation.
    Research,
    /// Wants to make or do something concrete.
    Action,
    /// Wants support for stress, health or mood.
    Wellness,
    /// Wants to act on environmental concerns.
    EcologicalAction,
    /// No clearer purpose detected.
    GeneralInquiry,
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl Intent {
    /// Returns a human-readable label for the intent.
    pub fn label(&self) -> &'static str {
        match self {
            Intent::Learning => "learning",
            Intent::Research => "research",
            Intent::Action => "action",
            Intent::Wellness => "wellness",
            Intent::EcologicalAction => "ecological_action",
            Intent::GeneralInquiry => "general_inquiry",
        }
    }
}

/// Trigger phrases per intent, in evaluation order. Earlier rules shadow
/// later ones, so the more specific intents come first.
const TRIGGER_RULES: &[(Intent, &[&str])] = &[
    (
        Intent::Research,
        &[
            "research",
            "methodology",
            "compare",
            "evidence",
            "investigate",
            "analysis of",
            "study of",
        ],
    ),
    (
        Intent::Learning,
        &[
            "learn",
            "how to",
            "tutorial",
            "course",
            "teach me",
            "understand",
            "explain",
        ],
    ),
    (
        Intent::Wellness,
        &[
            "stressed",
            "anxious",
            "overwhelmed",
            "relax",
            "sleep better",
            "feel better",
            "self care",
        ],
    ),
    (
        Intent::EcologicalAction,
        &[
            "sustainable",
            "eco friendly",
            "eco-friendly",
            "reduce waste",
            "carbon",
            "recycle",
            "go green",
        ],
    ),
    (
        Intent::Action,
        &["build", "create", "make a", "set up", "start a", "install"],
    ),
];

/// Classifies query intent.
pub struct IntentDetector;

impl Default for IntentDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl IntentDetector {
    pub fn new() -> Self {
        Self
    }

    /// Detects intent from the raw query, falling back to token-type
    /// signals when no trigger phrase matches.
    pub fn detect(&self, raw_query: &str, tokens: &[Token]) -> Intent {
        let query = raw_query.to_lowercase();

        for (intent, phrases) in TRIGGER_RULES {
            if phrases.iter().any(|phrase| query.contains(phrase)) {
                return *intent;
            }
        }

        // Token signals, checked in fixed order.
        if tokens.iter().any(|t| t.word_type == WordType::Emotional) {
            return Intent::Wellness;
        }
        if tokens.iter().any(|t| t.word_type == WordType::Ecological) {
            return Intent::EcologicalAction;
        }
        if tokens.iter().any(|t| t.word_type == WordType::Verb) {
            return Intent::Action;
        }

        Intent::GeneralInquiry
    }
}
