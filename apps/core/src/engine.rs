//! Engine entry point - orchestrates one full search per call.
//!
//! Analysis, scoring, selection, confidence, enhancement and
//! recommendations are pure over (query, context, knowledge base, session
//! state); the only side effect is the session-tracker update. One query is
//! fully resolved before the next is accepted.

use tracing::info;

use crate::brain::analyzer::QueryAnalyzer;
use crate::brain::confidence::confidence;
use crate::brain::enhancer::QueryEnhancer;
use crate::brain::matcher::MatchSelector;
use crate::brain::recommend::RecommendationGenerator;
use crate::config::EngineConfig;
use crate::error::EngineError;
use crate::knowledge::{default_knowledge_base, load_or_default, KnowledgeBase, KnowledgeProvider};
use crate::models::{SearchPatterns, SearchResult, UserContext};
use crate::session::{SearchRecord, SessionTracker};

/// The semantic search engine: an injected knowledge base plus per-session
/// state. No process-wide singletons.
pub struct SemanticEngine {
    kb: KnowledgeBase,
    config: EngineConfig,
    analyzer: QueryAnalyzer,
    selector: MatchSelector,
    enhancer: QueryEnhancer,
    recommender: RecommendationGenerator,
    session: SessionTracker,
}

impl SemanticEngine {
    /// Creates an engine over an injected knowledge base, validating the
    /// configuration first.
    pub fn new(kb: KnowledgeBase, config: EngineConfig) -> Result<Self, EngineError> {
        let config = config.validated()?;
        Ok(Self::assemble(kb, config))
    }

    /// Creates an engine over the built-in knowledge base and the default
    /// configuration.
    pub fn with_defaults() -> Self {
        Self::assemble(default_knowledge_base(), EngineConfig::default())
    }

    /// Creates an engine from an asynchronous knowledge provider, falling
    /// back to the built-in base when the load fails.
    pub async fn from_provider(provider: &dyn KnowledgeProvider) -> Self {
        let kb = load_or_default(provider).await;
        Self::assemble(kb, EngineConfig::default())
    }

    fn assemble(kb: KnowledgeBase, config: EngineConfig) -> Self {
        let session = SessionTracker::new(config.history_cap, config.success_threshold);
        info!("Semantic engine ready with {} knowledge entries", kb.len());
        Self {
            kb,
            config,
            analyzer: QueryAnalyzer::new(),
            selector: MatchSelector::new(),
            enhancer: QueryEnhancer::new(),
            recommender: RecommendationGenerator::new(),
            session,
        }
    }

    /// Whether a knowledge base is available for matching.
    pub fn is_ready(&self) -> bool {
        !self.kb.is_empty()
    }

    /// Processes one query end to end. Never fails: degenerate inputs
    /// resolve to a low-confidence fallback result.
    pub fn process_query(&mut self, keyword: &str, context: Option<&UserContext>) -> SearchResult {
        let analysis = self.analyzer.analyze(keyword, context);
        let semantic_match = self
            .selector
            .find_match(keyword, &analysis, &self.kb, &self.config);

        let confidence_score = confidence(&semantic_match, &analysis);
        let enhanced_query = self.enhancer.enhance(keyword, &semantic_match, &analysis);
        let contextual_questions = self.recommender.questions(&semantic_match, &analysis);
        let recommended_actions =
            self.recommender
                .actions(&semantic_match, &analysis, &self.config);

        self.session
            .record(SearchRecord::new(keyword, &semantic_match, confidence_score), context);

        let result = SearchResult {
            original_query: keyword.to_string(),
            semantic_match,
            confidence: confidence_score,
            enhanced_query,
            contextual_questions,
            recommended_actions,
            analysis,
        };

        info!("{}", result.summary());
        result
    }

    /// Aggregate view over the session: preferred domains, totals, mean
    /// confidence.
    pub fn search_patterns(&self) -> SearchPatterns {
        self.session.patterns()
    }

    pub fn session(&self) -> &SessionTracker {
        &self.session
    }

    pub fn knowledge_base(&self) -> &KnowledgeBase {
        &self.kb
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}
