//! Query enhancement with domain, intent and context phrases.
//!
//! Builds the expanded query string by appending modifier phrases to the
//! original text in a fixed order, so identical inputs always produce the
//! identical enhanced query.

use super::analyzer::{Complexity, EmotionalTone, QueryAnalysis};
use super::intent::Intent;
use super::tokens::WordType;
use crate::knowledge::Domain;
use crate::models::SemanticMatch;

/// Appended when the query shows no ecological vocabulary of its own.
const ECOLOGICAL_PHRASE: &str = "sustainable eco-friendly";

/// Appended when the emotional tone is negative.
const SUPPORT_PHRASE: &str = "supportive guidance";

fn domain_phrase(domain: Domain) -> &'static str {
    match domain {
        Domain::Agriculture => "organic growing methods",
        Domain::Wellness => "natural techniques",
        Domain::Technology => "open source tools",
        Domain::Education => "step-by-step guide",
        Domain::Energy => "clean energy options",
        Domain::Community => "local community resources",
    }
}

fn intent_phrase(intent: Intent) -> &'static str {
    match intent {
        Intent::Learning => "structured learning path",
        Intent::Research => "evidence based sources",
        Intent::Action => "practical hands-on steps",
        Intent::Wellness => "gentle self care",
        Intent::EcologicalAction => "low impact methods",
        Intent::GeneralInquiry => "helpful overview",
    }
}

fn complexity_phrase(complexity: Complexity) -> Option<&'static str> {
    match complexity {
        Complexity::Low => Some("basics fundamentals"),
        Complexity::High => Some("advanced expert"),
        Complexity::Medium => None,
    }
}

/// Builds enhanced queries from a match and its analysis.
pub struct QueryEnhancer;

impl Default for QueryEnhancer {
    fn default() -> Self {
        Self::new()
    }
}

impl QueryEnhancer {
    pub fn new() -> Self {
        Self
    }

    /// Concatenates, in fixed order: the original query, the domain phrase,
    /// the intent phrase, the entry's context modifier, an ecological
    /// phrase (only when the query lacks ecological vocabulary), the
    /// complexity phrase and a support phrase for negative tone.
    pub fn enhance(
        &self,
        raw_query: &str,
        semantic_match: &SemanticMatch,
        analysis: &QueryAnalysis,
    ) -> String {
        let mut parts: Vec<&str> = Vec::new();

        let original = raw_query.trim();
        if !original.is_empty() {
            parts.push(original);
        }

        parts.push(domain_phrase(semantic_match.entry.domain));
        parts.push(intent_phrase(analysis.intent));

        let modifier = analysis
            .user_context
            .answer("context")
            .and_then(|key| semantic_match.entry.modifiers.as_ref()?.get(key));
        if let Some(phrase) = modifier {
            parts.push(phrase);
        }

        let has_ecological = analysis
            .tokens
            .iter()
            .any(|t| t.word_type == WordType::Ecological);
        if !has_ecological {
            parts.push(ECOLOGICAL_PHRASE);
        }

        if let Some(phrase) = complexity_phrase(analysis.complexity) {
            parts.push(phrase);
        }

        if analysis.emotional_tone == EmotionalTone::Negative {
            parts.push(SUPPORT_PHRASE);
        }

        parts.join(" ").trim().to_string()
    }
}
