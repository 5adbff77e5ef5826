use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::brain::analyzer::QueryAnalysis;
use crate::knowledge::{Domain, QuestionSpec, SemanticEntry};

/// How the selected entry relates to the query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchType {
    /// Query text equals the entry term.
    Exact,
    /// One of query/term contains the other.
    Partial,
    /// Selected on combined signals without direct containment.
    Semantic,
    /// Synthesized because nothing cleared the acceptance threshold.
    DomainFallback,
}

impl MatchType {
    /// Returns a human-readable label for the match type.
    pub fn label(&self) -> &'static str {
        match self {
            MatchType::Exact => "exact",
            MatchType::Partial => "partial",
            MatchType::Semantic => "semantic",
            MatchType::DomainFallback => "domain_fallback",
        }
    }
}

/// The selected entry for a query plus its score and classification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SemanticMatch {
    /// The matched knowledge-base term.
    pub term: String,
    /// The matched entry.
    pub entry: SemanticEntry,
    /// Raw match score in [0, 1].
    pub score: f32,
    /// Relationship between query and term.
    pub match_type: MatchType,
}

/// Context the caller supplies with a query: answers gathered from the
/// question flow and longer-lived preferences.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserContext {
    #[serde(default)]
    pub answers: HashMap<String, String>,
    #[serde(default)]
    pub preferences: HashMap<String, String>,
}

impl UserContext {
    /// Looks up an answer by key.
    pub fn answer(&self, key: &str) -> Option<&str> {
        self.answers.get(key).map(String::as_str)
    }
}

/// Aggregate view over the session history and profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchPatterns {
    /// Up to three most frequent domains among successful matches.
    pub preferred_domains: Vec<Domain>,
    /// Searches performed this session, including evicted ones.
    pub total_searches: u64,
    /// Mean confidence across the retained history, 0.0 when empty.
    pub average_confidence: f32,
}

/// Complete outcome of one processed query.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    /// The query exactly as submitted.
    pub original_query: String,
    /// Best-matching entry with score and classification.
    pub semantic_match: SemanticMatch,
    /// Adjusted, bounded certainty in [0, 1].
    pub confidence: f32,
    /// Query expanded with domain, intent and context phrases.
    pub enhanced_query: String,
    /// Step-ordered follow-up questions.
    pub contextual_questions: BTreeMap<u8, QuestionSpec>,
    /// Deduplicated, capped recommended actions.
    pub recommended_actions: Vec<String>,
    /// The analysis the match was derived from.
    pub analysis: QueryAnalysis,
}

impl SearchResult {
    /// Get a summary for logging.
    pub fn summary(&self) -> String {
        format!(
            "Match: {} ({:.0}%, {}), Intent: {}, Actions: {}",
            self.semantic_match.term,
            self.confidence * 100.0,
            self.semantic_match.match_type.label(),
            self.analysis.intent,
            self.recommended_actions.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_type_labels() {
        assert_eq!(MatchType::Exact.label(), "exact");
        assert_eq!(MatchType::DomainFallback.label(), "domain_fallback");
    }

    #[test]
    fn test_user_context_answer_lookup() {
        let mut ctx = UserContext::default();
        ctx.answers
            .insert("context".to_string(), "balcony".to_string());

        assert_eq!(ctx.answer("context"), Some("balcony"));
        assert_eq!(ctx.answer("missing"), None);
    }
}
