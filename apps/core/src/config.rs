//! Engine configuration.
//!
//! The observed variants of this engine disagreed on scoring weights and
//! thresholds; this is the one documented constant set, exposed as
//! configuration instead of buried in the scorer.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::brain::scorer::ScorerWeights;
use crate::error::EngineError;

/// Tunable constants for scoring, selection, recommendations and history.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct EngineConfig {
    /// Weights for the additive match-score signals.
    #[validate(nested)]
    pub weights: ScorerWeights,

    /// Best scores below this are discarded in favor of a fallback match.
    #[validate(range(min = 0.0, max = 1.0))]
    pub min_match_score: f32,

    /// Fixed score assigned to synthesized fallback matches.
    #[validate(range(min = 0.0, max = 1.0))]
    pub fallback_score: f32,

    /// Maximum number of recommended actions returned.
    #[validate(range(min = 3, max = 8))]
    pub action_cap: usize,

    /// Maximum retained search records; the oldest is evicted past this.
    #[validate(range(min = 1, max = 500))]
    pub history_cap: usize,

    /// Confidence above which a search counts toward the user profile.
    #[validate(range(min = 0.0, max = 1.0))]
    pub success_threshold: f32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            weights: ScorerWeights::default(),
            min_match_score: 0.25,
            fallback_score: 0.2,
            action_cap: 5,
            history_cap: 50,
            success_threshold: 0.7,
        }
    }
}

impl EngineConfig {
    /// Validates every range constraint, mapping failures into the
    /// engine error type.
    pub fn validated(self) -> Result<Self, EngineError> {
        self.validate()?;
        Ok(self)
    }
}
