//! # verdant-core
//!
//! Rule-based semantic search brain: takes a free-text query and, against a
//! knowledge base of domain entries, produces a classified token analysis,
//! a best match with confidence, an enhanced query, contextual follow-up
//! questions and a short list of personalized actions.
//!
//! Matching is deterministic and reproducible given the same query,
//! knowledge base and context. The knowledge document itself, and any
//! UI/transport around the engine, belong to collaborators.

pub mod brain;
pub mod config;
pub mod engine;
pub mod error;
pub mod knowledge;
pub mod models;
pub mod session;

pub use brain::{Intent, QueryAnalysis};
pub use config::EngineConfig;
pub use engine::SemanticEngine;
pub use error::EngineError;
pub use knowledge::{
    default_knowledge_base, Domain, FileProvider, KnowledgeBase, KnowledgeProvider, SemanticEntry,
};
pub use models::{MatchType, SearchPatterns, SearchResult, SemanticMatch, UserContext};
pub use session::{SearchRecord, SessionTracker, UserProfile};

#[cfg(test)]
mod tests;
