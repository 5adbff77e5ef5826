//! Contextual questions and recommended actions.
//!
//! Questions come from the matched entry when authored, otherwise from a
//! generic three-step template. Actions are assembled from the entry and
//! static intent/complexity lists, then filtered, deduplicated, padded and
//! capped into a short personalized list.

use std::collections::BTreeMap;
use std::collections::HashSet;

use super::analyzer::{Complexity, QueryAnalysis, Urgency};
use super::intent::Intent;
use crate::config::EngineConfig;
use crate::knowledge::QuestionSpec;
use crate::models::SemanticMatch;

/// Option labels containing one of these are surfaced first under high urgency.
const IMMEDIACY_MARKERS: &[&str] = &["now", "today", "immediate", "quick", "right away"];

/// Actions containing one of these are dropped under high urgency.
const URGENCY_EXCLUDES: &[&str] = &["long-term", "comprehensive"];

/// Prefix applied to every action when the user stated a desired outcome.
const OUTCOME_PREFIX: &str = "Toward your goal:";

/// Generic fillers used to pad the list up to the minimum.
const FILLER_ACTIONS: &[&str] = &[
    "Explore related topics",
    "Save useful resources",
    "Revisit your plan next week",
];

/// Minimum number of recommended actions returned.
const ACTION_FLOOR: usize = 3;

fn intent_actions(intent: Intent) -> &'static [&'static str] {
    match intent {
        Intent::Learning => &["Find beginner resources", "Join learning community"],
        Intent::Research => &["Review recent studies", "Compare multiple sources"],
        Intent::Action => &["Start with a simple project", "Learn essential tools"],
        Intent::Wellness => &["Practice mindfulness", "Connect with support"],
        Intent::EcologicalAction => &[
            "Explore sustainable alternatives",
            "Join an eco community",
        ],
        Intent::GeneralInquiry => &["Browse curated guides"],
    }
}

fn complexity_actions(complexity: Complexity) -> &'static [&'static str] {
    match complexity {
        Complexity::Low => &["Start with the basics"],
        Complexity::Medium => &[],
        Complexity::High => &["Consult expert material", "Plan a comprehensive roadmap"],
    }
}

fn generic_questions() -> BTreeMap<u8, QuestionSpec> {
    let step = |title: &str, options: &[&str]| QuestionSpec {
        title: title.to_string(),
        options: options.iter().map(|o| o.to_string()).collect(),
    };

    BTreeMap::from([
        (
            1,
            step(
                "What is your starting point?",
                &["Complete beginner", "Some experience", "Quite experienced"],
            ),
        ),
        (
            2,
            step(
                "How do you want to approach it?",
                &["Quick start today", "Steady weekly habit", "Deep dive"],
            ),
        ),
        (
            3,
            step(
                "What outcome matters most?",
                &["Practical results", "Understanding", "Enjoyment"],
            ),
        ),
    ])
}

/// Builds question sets and action lists for a selected match.
pub struct RecommendationGenerator;

impl Default for RecommendationGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl RecommendationGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Returns the entry's question flow, or the generic template when the
    /// entry has none. Under high urgency, options implying immediacy are
    /// stably moved to the front; no option is ever dropped.
    pub fn questions(
        &self,
        semantic_match: &SemanticMatch,
        analysis: &QueryAnalysis,
    ) -> BTreeMap<u8, QuestionSpec> {
        let mut questions = semantic_match
            .entry
            .questions
            .clone()
            .unwrap_or_else(generic_questions);

        if analysis.urgency == Urgency::High {
            for spec in questions.values_mut() {
                let (immediate, rest): (Vec<String>, Vec<String>) = spec
                    .options
                    .drain(..)
                    .partition(|option| {
                        let label = option.to_lowercase();
                        IMMEDIACY_MARKERS.iter().any(|m| label.contains(m))
                    });
                spec.options = immediate.into_iter().chain(rest).collect();
            }
        }

        questions
    }

    /// Assembles the personalized action list: entry actions (horizons
    /// flattened in order), intent actions, complexity actions, the
    /// urgency filter, the outcome prefix, dedup, padding and the cap.
    pub fn actions(
        &self,
        semantic_match: &SemanticMatch,
        analysis: &QueryAnalysis,
        config: &EngineConfig,
    ) -> Vec<String> {
        let mut actions: Vec<String> = semantic_match
            .entry
            .actions
            .as_ref()
            .map(|a| a.flatten())
            .unwrap_or_default();

        actions.extend(
            intent_actions(analysis.intent)
                .iter()
                .map(|a| a.to_string()),
        );
        actions.extend(
            complexity_actions(analysis.complexity)
                .iter()
                .map(|a| a.to_string()),
        );

        if analysis.urgency == Urgency::High {
            actions.retain(|action| {
                let text = action.to_lowercase();
                !URGENCY_EXCLUDES.iter().any(|ex| text.contains(ex))
            });
        }

        if analysis.user_context.answer("outcome").is_some() {
            actions = actions
                .into_iter()
                .map(|action| format!("{} {}", OUTCOME_PREFIX, action))
                .collect();
        }

        let mut seen = HashSet::new();
        actions.retain(|action| seen.insert(action.clone()));

        for filler in FILLER_ACTIONS {
            if actions.len() >= ACTION_FLOOR {
                break;
            }
            if seen.insert((*filler).to_string()) {
                actions.push((*filler).to_string());
            }
        }

        actions.truncate(config.action_cap);
        actions
    }
}
