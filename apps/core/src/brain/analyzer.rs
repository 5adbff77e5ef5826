//! Query Analyzer - aggregates token, intent and context signals.
//!
//! Produces a fresh [`QueryAnalysis`] per query; nothing here is shared
//! mutable state across searches.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::intent::{Intent, IntentDetector};
use super::tokens::{Token, Tokenizer};
use crate::knowledge::Domain;
use crate::models::UserContext;

/// Structural complexity of a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Complexity {
    Low,
    Medium,
    High,
}

/// Overall emotional tone of a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmotionalTone {
    Positive,
    Negative,
    Neutral,
}

/// How urgently the user wants an answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Urgency {
    Low,
    High,
}

/// Query-level analysis derived fresh for every search.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryAnalysis {
    /// Classified tokens in query order.
    pub tokens: Vec<Token>,
    /// Inferred purpose of the query.
    pub intent: Intent,
    /// Structural complexity.
    pub complexity: Complexity,
    /// Every domain whose keyword list hit the query. A query may hint
    /// several domains at once.
    pub domain_hints: Vec<Domain>,
    /// Tone from positive/negative word counts.
    pub emotional_tone: EmotionalTone,
    /// High when an urgency indicator appears in the query.
    pub urgency: Urgency,
    /// Context the caller supplied alongside the query.
    pub user_context: UserContext,
}

impl QueryAnalysis {
    /// Get a summary for logging.
    pub fn summary(&self) -> String {
        format!(
            "Intent: {}, Tokens: {}, Complexity: {:?}, Hints: {}, Tone: {:?}, Urgency: {:?}",
            self.intent,
            self.tokens.len(),
            self.complexity,
            self.domain_hints.len(),
            self.emotional_tone,
            self.urgency
        )
    }
}

// Academic phrasing that marks a query as high complexity.
static ACADEMIC_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(methodology|analysis|research|development|framework|hypothesis|literature)\b")
        .expect("Invalid regex: academic term pattern")
});

const POSITIVE_WORDS: &[&str] = &[
    "happy", "excited", "great", "love", "enjoy", "good", "hope", "curious",
];

const NEGATIVE_WORDS: &[&str] = &[
    "sad",
    "angry",
    "stressed",
    "anxious",
    "tired",
    "worried",
    "frustrated",
    "overwhelmed",
];

const URGENCY_PHRASES: &[&str] = &["now", "immediately", "urgent", "asap", "emergency"];

/// Main analyzer that orchestrates tokenization and signal extraction.
pub struct QueryAnalyzer {
    tokenizer: Tokenizer,
    intent_detector: IntentDetector,
}

impl Default for QueryAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl QueryAnalyzer {
    pub fn new() -> Self {
        Self {
            tokenizer: Tokenizer::new(),
            intent_detector: IntentDetector::new(),
        }
    }

    /// Analyze a query and produce a fresh analysis.
    ///
    /// Degenerate input is not an error: a query with no usable tokens
    /// yields an empty token list and a `general_inquiry` intent.
    pub fn analyze(&self, raw_query: &str, user_context: Option<&UserContext>) -> QueryAnalysis {
        let query = raw_query.to_lowercase();
        let tokens = self.tokenizer.tokenize(raw_query);

        let intent = self.intent_detector.detect(raw_query, &tokens);
        let complexity = self.complexity(&query, &tokens);
        let domain_hints = self.domain_hints(&query);
        let emotional_tone = self.emotional_tone(&query);
        let urgency = self.urgency(&query);

        let analysis = QueryAnalysis {
            tokens,
            intent,
            complexity,
            domain_hints,
            emotional_tone,
            urgency,
            user_context: user_context.cloned().unwrap_or_default(),
        };

        debug!("{}", analysis.summary());
        analysis
    }

    fn complexity(&self, query: &str, tokens: &[Token]) -> Complexity {
        if tokens.len() > 4 && ACADEMIC_PATTERN.is_match(query) {
            Complexity::High
        } else if tokens.len() > 2 {
            Complexity::Medium
        } else {
            Complexity::Low
        }
    }

    fn domain_hints(&self, query: &str) -> Vec<Domain> {
        Domain::ALL
            .iter()
            .copied()
            .filter(|domain| domain.keywords().iter().any(|kw| query.contains(kw)))
            .collect()
    }

    fn emotional_tone(&self, query: &str) -> EmotionalTone {
        let positive = POSITIVE_WORDS.iter().filter(|w| query.contains(*w)).count();
        let negative = NEGATIVE_WORDS.iter().filter(|w| query.contains(*w)).count();

        if positive > negative {
            EmotionalTone::Positive
        } else if negative > positive {
            EmotionalTone::Negative
        } else {
            EmotionalTone::Neutral
        }
    }

    fn urgency(&self, query: &str) -> Urgency {
        if URGENCY_PHRASES.iter().any(|p| query.contains(p)) {
            Urgency::High
        } else {
            Urgency::Low
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyze(query: &str) -> QueryAnalysis {
        QueryAnalyzer::new().analyze(query, None)
    }

    #[test]
    fn test_empty_query_yields_empty_analysis() {
        let analysis = analyze("");

        assert!(analysis.tokens.is_empty());
        assert_eq!(analysis.intent, Intent::GeneralInquiry);
        assert_eq!(analysis.complexity, Complexity::Low);
    }

    #[test]
    fn test_complexity_tiers() {
        assert_eq!(analyze("grow tomatoes").complexity, Complexity::Low);
        assert_eq!(
            analyze("grow tomatoes without pesticides").complexity,
            Complexity::Medium
        );
        // Five tokens plus an academic term.
        assert_eq!(
            analyze("soil restoration research methodology field comparison").complexity,
            Complexity::High
        );
        // Long but not academic stays medium.
        assert_eq!(
            analyze("grow tomatoes peppers beans squash together").complexity,
            Complexity::Medium
        );
    }

    #[test]
    fn test_domain_hints_allow_multiple_domains() {
        let analysis = analyze("solar power for my garden shed");

        assert!(analysis.domain_hints.contains(&Domain::Energy));
        assert!(analysis.domain_hints.contains(&Domain::Agriculture));
    }

    #[test]
    fn test_emotional_tone_counting() {
        assert_eq!(analyze("happy to learn").emotional_tone, EmotionalTone::Positive);
        assert_eq!(
            analyze("stressed and tired").emotional_tone,
            EmotionalTone::Negative
        );
        // Tie resolves to neutral.
        assert_eq!(
            analyze("happy but tired").emotional_tone,
            EmotionalTone::Neutral
        );
        assert_eq!(analyze("plain query").emotional_tone, EmotionalTone::Neutral);
    }

    #[test]
    fn test_urgency_detection() {
        assert_eq!(analyze("fix my compost urgent").urgency, Urgency::High);
        assert_eq!(analyze("compost at some point").urgency, Urgency::Low);
    }
}
