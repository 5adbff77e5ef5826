//! Match selection over the knowledge base.
//!
//! Scans every entry in declared order, keeps the argmax, and synthesizes
//! a fallback match when nothing clears the acceptance threshold — a query
//! always resolves to some match, never to an error.

use tracing::debug;

use super::analyzer::QueryAnalysis;
use super::intent::Intent;
use super::scorer::MatchScorer;
use crate::config::EngineConfig;
use crate::knowledge::{Domain, KnowledgeBase, SemanticEntry};
use crate::models::{MatchType, SemanticMatch};

/// Representative entry term per intent, used when no entry scores above
/// the acceptance threshold.
const FALLBACK_TERMS: &[(Intent, &str)] = &[
    (Intent::Learning, "eco education"),
    (Intent::Research, "renewable energy"),
    (Intent::Action, "community garden"),
    (Intent::Wellness, "mindfulness practice"),
    (Intent::EcologicalAction, "organic farming"),
    (Intent::GeneralInquiry, "sustainable living"),
];

/// Ultimate default for intents with no mapped representative entry.
const DEFAULT_FALLBACK_TERM: &str = "sustainable living";

/// Selects the best-matching entry for a query.
pub struct MatchSelector {
    scorer: MatchScorer,
}

impl Default for MatchSelector {
    fn default() -> Self {
        Self::new()
    }
}

impl MatchSelector {
    pub fn new() -> Self {
        Self {
            scorer: MatchScorer::new(),
        }
    }

    /// Scores every entry and returns the best match, or a synthesized
    /// fallback when the best score is below the acceptance threshold.
    /// Ties keep the first entry in the base's declared order.
    pub fn find_match(
        &self,
        raw_query: &str,
        analysis: &QueryAnalysis,
        kb: &KnowledgeBase,
        config: &EngineConfig,
    ) -> SemanticMatch {
        let mut best: Option<(&str, &SemanticEntry, f32)> = None;

        for (term, entry) in kb.iter() {
            let score = self.scorer.score(term, entry, analysis, &config.weights);
            let current_best = best.map(|(_, _, s)| s).unwrap_or(f32::MIN);
            if score > current_best {
                best = Some((term, entry, score));
            }
        }

        match best {
            Some((term, entry, score)) if score >= config.min_match_score => SemanticMatch {
                term: term.to_string(),
                entry: entry.clone(),
                score,
                match_type: classify_match(raw_query, term),
            },
            _ => self.fallback_match(analysis.intent, kb, config),
        }
    }

    /// Synthesizes a fallback from the intent's representative entry.
    fn fallback_match(
        &self,
        intent: Intent,
        kb: &KnowledgeBase,
        config: &EngineConfig,
    ) -> SemanticMatch {
        let mapped = FALLBACK_TERMS
            .iter()
            .find(|(i, _)| *i == intent)
            .map(|(_, term)| *term)
            .unwrap_or(DEFAULT_FALLBACK_TERM);

        let (term, entry) = kb
            .get(mapped)
            .map(|e| (mapped, e.clone()))
            .or_else(|| {
                kb.get(DEFAULT_FALLBACK_TERM)
                    .map(|e| (DEFAULT_FALLBACK_TERM, e.clone()))
            })
            .or_else(|| kb.first().map(|(t, e)| (t, e.clone())))
            .unwrap_or((DEFAULT_FALLBACK_TERM, SemanticEntry::new(Domain::Community)));

        debug!("No entry cleared the threshold, falling back to '{}'", term);

        SemanticMatch {
            term: term.to_string(),
            entry,
            score: config.fallback_score,
            match_type: MatchType::DomainFallback,
        }
    }
}

/// Classifies how the query text relates to the selected term.
fn classify_match(raw_query: &str, term: &str) -> MatchType {
    let query = raw_query.trim().to_lowercase();

    if query == term {
        MatchType::Exact
    } else if !query.is_empty() && (query.contains(term) || term.contains(&query)) {
        MatchType::Partial
    } else {
        MatchType::Semantic
    }
}
