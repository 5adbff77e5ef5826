//! # Brain Module
//!
//! Fast, rule-based analysis pipeline for Verdant.
//! Turns a raw query into an analysis, a scored match and personalized
//! output without any learned model.
//!
//! ## Components
//! - `tokens`: tokenization, normalization and lexicon-based classification
//! - `intent`: trigger-phrase intent detection with token-signal fallback
//! - `analyzer`: query-level analysis (intent, complexity, hints, tone, urgency)
//! - `scorer`: additive multi-factor match scoring
//! - `matcher`: best-entry selection with fallback policy
//! - `confidence`: bounded confidence derivation
//! - `enhancer`: enhanced-query construction
//! - `recommend`: contextual questions and recommended actions

pub mod analyzer;
pub mod confidence;
pub mod enhancer;
pub mod intent;
pub mod matcher;
pub mod recommend;
pub mod scorer;
pub mod tokens;

pub use analyzer::{Complexity, EmotionalTone, QueryAnalysis, QueryAnalyzer, Urgency};
pub use confidence::confidence;
pub use enhancer::QueryEnhancer;
pub use intent::{Intent, IntentDetector};
pub use matcher::MatchSelector;
pub use recommend::RecommendationGenerator;
pub use scorer::{cosine_similarity, query_vector, MatchScorer, ScorerWeights};
pub use tokens::{Token, Tokenizer, WordType};
