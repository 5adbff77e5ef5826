//! Multi-factor match scorer.
//!
//! Scores one knowledge-base entry against a query from independent,
//! additive signals: lexical exact/partial overlap, domain/intent
//! alignment, domain hints and vector similarity.

use serde::{Deserialize, Serialize};
use tracing::debug;
use validator::Validate;

use super::analyzer::QueryAnalysis;
use super::tokens::Tokenizer;
use crate::knowledge::{SemanticEntry, VECTOR_DIM};

/// Weights for the additive scoring signals.
/// Contributions sum and the total is clamped to [0, 1].
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ScorerWeights {
    /// Per pair of equal query/term stems.
    #[validate(range(min = 0.0, max = 1.0))]
    pub exact: f32,
    /// Per pair where one stem contains the other.
    #[validate(range(min = 0.0, max = 1.0))]
    pub partial: f32,
    /// Entry domain aligns with the detected intent.
    #[validate(range(min = 0.0, max = 1.0))]
    pub domain_intent: f32,
    /// Entry domain appears among the query's domain hints.
    #[validate(range(min = 0.0, max = 1.0))]
    pub domain_hint: f32,
    /// Multiplier on cosine similarity between query and entry vectors.
    #[validate(range(min = 0.0, max = 1.0))]
    pub vector: f32,
}

impl Default for ScorerWeights {
    fn default() -> Self {
        Self {
            exact: 0.3,
            partial: 0.15,
            domain_intent: 0.25,
            domain_hint: 0.15,
            vector: 0.2,
        }
    }
}

/// Scores entries against an analyzed query.
pub struct MatchScorer {
    tokenizer: Tokenizer,
}

impl Default for MatchScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl MatchScorer {
    pub fn new() -> Self {
        Self {
            tokenizer: Tokenizer::new(),
        }
    }

    /// Scores a candidate entry. The result is clamped to [0, 1].
    pub fn score(
        &self,
        term: &str,
        entry: &SemanticEntry,
        analysis: &QueryAnalysis,
        weights: &ScorerWeights,
    ) -> f32 {
        let mut score = 0.0;

        // Lexical overlap between query stems and term stems. A pair counts
        // as exact or partial, never both.
        let term_stems: Vec<String> = self
            .tokenizer
            .tokenize(term)
            .into_iter()
            .map(|t| t.stem)
            .collect();

        for token in &analysis.tokens {
            for term_stem in &term_stems {
                if &token.stem == term_stem {
                    score += weights.exact;
                } else if token.stem.contains(term_stem.as_str())
                    || term_stem.contains(token.stem.as_str())
                {
                    score += weights.partial;
                }
            }
        }

        // Domain/intent alignment.
        if entry.domain.aligned_intent() == analysis.intent {
            score += weights.domain_intent;
        }

        // Domain-hint alignment.
        if analysis.domain_hints.contains(&entry.domain) {
            score += weights.domain_hint;
        }

        // Vector similarity against the synthesized query vector.
        if let Some(entry_vector) = &entry.vector {
            let query_vector = query_vector(analysis);
            let similarity = cosine_similarity(&query_vector, entry_vector);
            if entry_vector.len() != VECTOR_DIM {
                debug!(
                    "Vector length {} does not match expected {}, similarity treated as zero",
                    entry_vector.len(),
                    VECTOR_DIM
                );
            }
            score += weights.vector * similarity;
        }

        score.clamp(0.0, 1.0)
    }
}

/// Synthesizes a fixed-length query vector from token types: each token
/// adds its importance weight to the axis of its type, then the
/// accumulator is L2-normalized. A query with no contributing tokens
/// yields the zero vector.
pub fn query_vector(analysis: &QueryAnalysis) -> Vec<f32> {
    let mut accumulator = vec![0.0f32; VECTOR_DIM];

    for token in &analysis.tokens {
        if let Some(axis) = token.word_type.vector_axis() {
            accumulator[axis] += token.weight;
        }
    }

    let magnitude: f32 = accumulator.iter().map(|x| x * x).sum::<f32>().sqrt();
    if magnitude == 0.0 {
        return accumulator;
    }

    accumulator.iter().map(|x| x / magnitude).collect()
}

/// Calculate cosine similarity between two vectors.
/// Mismatched lengths and zero magnitudes yield 0.0, never an error.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }

    let dot_product: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let magnitude_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let magnitude_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if magnitude_a == 0.0 || magnitude_b == 0.0 {
        return 0.0;
    }

    dot_product / (magnitude_a * magnitude_b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brain::analyzer::QueryAnalyzer;
    use crate::knowledge::Domain;

    fn analyze(query: &str) -> QueryAnalysis {
        QueryAnalyzer::new().analyze(query, None)
    }

    #[test]
    fn test_cosine_similarity() {
        let a = vec![1.0, 0.0, 0.0];
        let b = vec![1.0, 0.0, 0.0];
        assert!((cosine_similarity(&a, &b) - 1.0).abs() < 0.001);

        let c = vec![0.0, 1.0, 0.0];
        assert!(cosine_similarity(&a, &c).abs() < 0.001);
    }

    #[test]
    fn test_cosine_similarity_degenerate_inputs() {
        assert_eq!(cosine_similarity(&[1.0, 0.0], &[1.0, 0.0, 0.0]), 0.0);
        assert_eq!(cosine_similarity(&[0.0, 0.0], &[1.0, 1.0]), 0.0);
        assert_eq!(cosine_similarity(&[], &[]), 0.0);
    }

    #[test]
    fn test_exact_overlap_strictly_increases_score() {
        let scorer = MatchScorer::new();
        let weights = ScorerWeights::default();
        let entry = SemanticEntry::new(Domain::Agriculture);

        let without = scorer.score("compost bin", &entry, &analyze("worm castings"), &weights);
        let with = scorer.score(
            "compost bin",
            &entry,
            &analyze("worm castings compost"),
            &weights,
        );

        assert!(with > without);
    }

    #[test]
    fn test_score_is_clamped_to_one() {
        let scorer = MatchScorer::new();
        let weights = ScorerWeights::default();
        let entry = SemanticEntry::new(Domain::Agriculture).with_vector(vec![0.3, 0.4, 0.5, 0.9]);

        // Heavy overlap plus alignment signals would exceed 1.0 unclamped.
        let analysis = analyze("organic garden soil compost farm");
        let score = scorer.score("organic garden soil compost farm", &entry, &analysis, &weights);

        assert!(score <= 1.0);
        assert!(score > 0.9);
    }

    #[test]
    fn test_mismatched_vector_contributes_nothing() {
        let scorer = MatchScorer::new();
        let weights = ScorerWeights::default();
        let analysis = analyze("organic soil");

        let plain = SemanticEntry::new(Domain::Technology);
        let mismatched =
            SemanticEntry::new(Domain::Technology).with_vector(vec![0.9, 0.9]);

        let base = scorer.score("metal working", &plain, &analysis, &weights);
        let with_bad_vector = scorer.score("metal working", &mismatched, &analysis, &weights);

        assert_eq!(base, with_bad_vector);
    }

    #[test]
    fn test_query_vector_is_normalized() {
        let vector = query_vector(&analyze("learn organic gardening"));
        let magnitude: f32 = vector.iter().map(|x| x * x).sum::<f32>().sqrt();

        assert!((magnitude - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_query_vector_zero_for_unclassified_tokens() {
        let vector = query_vector(&analyze("xylophone zebra"));
        assert!(vector.iter().all(|x| *x == 0.0));
    }
}
