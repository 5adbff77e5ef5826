//! Confidence derivation from a match and its analysis.

use super::analyzer::{Complexity, QueryAnalysis};
use crate::models::{MatchType, SemanticMatch};

/// Derives final confidence from the raw match score and contextual
/// adjustments. Additive boosts are applied before the multiplicative
/// fallback penalty, and the result is clamped to [0, 1].
pub fn confidence(semantic_match: &SemanticMatch, analysis: &QueryAnalysis) -> f32 {
    let mut confidence = semantic_match.score;

    if semantic_match.match_type == MatchType::Exact {
        confidence += 0.2;
    }
    if analysis.complexity == Complexity::High && semantic_match.score > 0.6 {
        confidence += 0.1;
    }
    if semantic_match.match_type == MatchType::DomainFallback {
        confidence *= 0.8;
    }

    confidence.clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brain::analyzer::QueryAnalyzer;
    use crate::knowledge::{Domain, SemanticEntry};

    fn match_with(score: f32, match_type: MatchType) -> SemanticMatch {
        SemanticMatch {
            term: "organic farming".to_string(),
            entry: SemanticEntry::new(Domain::Agriculture),
            score,
            match_type,
        }
    }

    #[test]
    fn test_exact_match_boost() {
        let analysis = QueryAnalyzer::new().analyze("organic farming", None);

        let exact = confidence(&match_with(0.5, MatchType::Exact), &analysis);
        let semantic = confidence(&match_with(0.5, MatchType::Semantic), &analysis);

        assert!((exact - 0.7).abs() < 0.001);
        assert!((semantic - 0.5).abs() < 0.001);
    }

    #[test]
    fn test_high_complexity_boost_requires_strong_score() {
        let analyzer = QueryAnalyzer::new();
        let complex = analyzer.analyze("soil restoration research methodology field comparison", None);

        let strong = confidence(&match_with(0.7, MatchType::Semantic), &complex);
        let weak = confidence(&match_with(0.5, MatchType::Semantic), &complex);

        assert!((strong - 0.8).abs() < 0.001);
        assert!((weak - 0.5).abs() < 0.001);
    }

    #[test]
    fn test_fallback_penalty_applies_after_boosts() {
        let analysis = QueryAnalyzer::new().analyze("xyz", None);

        let fallback = confidence(&match_with(0.2, MatchType::DomainFallback), &analysis);
        assert!((fallback - 0.16).abs() < 0.001);
    }

    #[test]
    fn test_confidence_is_clamped() {
        let analysis = QueryAnalyzer::new().analyze("organic farming", None);

        let capped = confidence(&match_with(0.95, MatchType::Exact), &analysis);
        assert_eq!(capped, 1.0);
    }
}
