//! Asynchronous knowledge-document loading.
//!
//! The knowledge base is an external, one-time precondition: a collaborator
//! supplies a JSON document which is parsed once into a [`KnowledgeBase`].
//! A failed load is reported as "use the default knowledge base", never as
//! an error the query path has to catch.

use std::path::PathBuf;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{info, warn};

use super::{default_knowledge_base, KnowledgeBase, SemanticEntry};
use crate::error::EngineError;

/// Parsed shape of a knowledge document.
///
/// Entries are a JSON array of `[term, entry]` pairs so the authored order
/// survives parsing.
#[derive(Debug, Deserialize)]
pub struct KnowledgeDocument {
    #[serde(default)]
    pub version: u32,
    pub entries: Vec<(String, SemanticEntry)>,
}

impl KnowledgeDocument {
    /// Parses a document from JSON text. A document with zero entries is
    /// rejected so an empty file cannot silently replace the default base.
    pub fn parse(text: &str) -> Result<KnowledgeBase, EngineError> {
        let doc: KnowledgeDocument = serde_json::from_str(text)?;
        if doc.entries.is_empty() {
            return Err(EngineError::Knowledge(
                "knowledge document has no entries".to_string(),
            ));
        }
        Ok(KnowledgeBase::from_entries(doc.entries))
    }
}

/// Two-state lifecycle for the externally-loaded knowledge base.
///
/// The core never scores against a base that is still loading; the entry
/// point checks readiness instead of throwing mid-score.
#[derive(Debug, Clone)]
pub enum KnowledgeState {
    Loading,
    Ready(KnowledgeBase),
}

impl KnowledgeState {
    pub fn is_ready(&self) -> bool {
        matches!(self, KnowledgeState::Ready(_))
    }
}

/// Supplies the term → entry mapping, typically from storage.
#[async_trait]
pub trait KnowledgeProvider: Send + Sync {
    async fn load(&self) -> Result<KnowledgeBase, EngineError>;
}

/// Loads a knowledge document from a JSON file.
pub struct FileProvider {
    path: PathBuf,
}

impl FileProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl KnowledgeProvider for FileProvider {
    async fn load(&self) -> Result<KnowledgeBase, EngineError> {
        let text = tokio::fs::read_to_string(&self.path).await?;
        KnowledgeDocument::parse(&text)
    }
}

/// Resolves the load lifecycle: `Loading → Ready(loaded | default)`.
///
/// On provider failure the built-in default base is used so matching
/// degrades gracefully rather than failing outright.
pub async fn load_or_default(provider: &dyn KnowledgeProvider) -> KnowledgeBase {
    match provider.load().await {
        Ok(kb) => {
            info!("Loaded knowledge base with {} entries", kb.len());
            kb
        }
        Err(e) => {
            warn!("Knowledge load failed, using default base: {}", e);
            default_knowledge_base()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::knowledge::Domain;

    #[test]
    fn test_parse_document_preserves_order() {
        let text = r#"{
            "version": 1,
            "entries": [
                ["solar panels", {"domain": "ENERGY", "vector": [0.1, 0.2, 0.3, 0.4]}],
                ["herb garden", {"domain": "AGRICULTURE"}]
            ]
        }"#;

        let kb = KnowledgeDocument::parse(text).unwrap();
        assert_eq!(kb.len(), 2);
        assert_eq!(kb.first().map(|(t, _)| t), Some("solar panels"));
        assert_eq!(kb.get("herb garden").unwrap().domain, Domain::Agriculture);
    }

    #[test]
    fn test_parse_rejects_empty_document() {
        let text = r#"{"entries": []}"#;
        assert!(KnowledgeDocument::parse(text).is_err());
    }

    #[test]
    fn test_parse_rejects_malformed_json() {
        assert!(KnowledgeDocument::parse("not json at all").is_err());
    }

    #[tokio::test]
    async fn test_missing_file_falls_back_to_default() {
        let provider = FileProvider::new("/definitely/not/a/real/path.json");
        let kb = load_or_default(&provider).await;

        // Default base stands in for the failed load.
        assert!(kb.get("sustainable living").is_some());
    }

    #[test]
    fn test_state_readiness() {
        assert!(!KnowledgeState::Loading.is_ready());
        assert!(KnowledgeState::Ready(default_knowledge_base()).is_ready());
    }
}
