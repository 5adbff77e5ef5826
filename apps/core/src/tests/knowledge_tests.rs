//! Knowledge Base Tests
//!
//! Document loading, fallback behavior and degradation for entries with
//! missing optional fields.

use std::io::Write;

use crate::config::EngineConfig;
use crate::engine::SemanticEngine;
use crate::knowledge::loader::KnowledgeDocument;
use crate::knowledge::{
    default_knowledge_base, load_or_default, Domain, FileProvider, KnowledgeBase, SemanticEntry,
};

#[tokio::test]
async fn test_file_provider_loads_a_valid_document() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{
            "version": 1,
            "entries": [
                ["herb spiral", {{"domain": "AGRICULTURE", "vector": [0.2, 0.3, 0.5, 0.9],
                  "actions": ["Lay out the spiral", "Plant the top tier"]}}],
                ["rain barrel", {{"domain": "ENERGY"}}]
            ]
        }}"#
    )
    .unwrap();

    let provider = FileProvider::new(file.path());
    let kb = load_or_default(&provider).await;

    assert_eq!(kb.len(), 2);
    assert_eq!(kb.get("herb spiral").unwrap().domain, Domain::Agriculture);
}

#[tokio::test]
async fn test_corrupt_document_falls_back_to_default() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{{ definitely not valid json").unwrap();

    let provider = FileProvider::new(file.path());
    let kb = load_or_default(&provider).await;

    // The default base stands in; its first entry is the ultimate fallback.
    assert_eq!(kb.first().map(|(t, _)| t), Some("sustainable living"));
}

#[tokio::test]
async fn test_engine_from_failed_provider_still_answers() {
    let provider = FileProvider::new("/nope/missing.json");
    let mut engine = SemanticEngine::from_provider(&provider).await;

    assert!(engine.is_ready());
    let result = engine.process_query("organic farming", None);
    assert_eq!(result.semantic_match.term, "organic farming");
}

#[test]
fn test_question_steps_keep_numeric_order() {
    let text = r#"{
        "entries": [
            ["bee hotel", {"domain": "AGRICULTURE", "questions": {
                "2": {"title": "Second", "options": ["a"]},
                "1": {"title": "First", "options": ["b"]}
            }}]
        ]
    }"#;

    let kb = KnowledgeDocument::parse(text).unwrap();
    let questions = kb.get("bee hotel").unwrap().questions.as_ref().unwrap();
    let titles: Vec<&str> = questions.values().map(|q| q.title.as_str()).collect();

    assert_eq!(titles, vec!["First", "Second"]);
}

#[test]
fn test_malformed_entry_degrades_to_defaults() {
    // An entry with no vector, questions, actions or modifiers is usable.
    let kb = KnowledgeBase::from_entries(vec![(
        "bare topic".to_string(),
        SemanticEntry::new(Domain::Education),
    )]);
    let mut engine = SemanticEngine::new(kb, EngineConfig::default()).unwrap();

    let result = engine.process_query("bare topic", None);

    assert_eq!(result.semantic_match.term, "bare topic");
    // Generic question template and padded actions stand in.
    assert_eq!(result.contextual_questions.len(), 3);
    assert!(result.recommended_actions.len() >= 3);
}

#[test]
fn test_default_base_covers_every_fallback_term() {
    let kb = default_knowledge_base();

    for term in [
        "eco education",
        "renewable energy",
        "community garden",
        "mindfulness practice",
        "organic farming",
        "sustainable living",
    ] {
        assert!(kb.get(term).is_some(), "missing fallback entry {term}");
    }
}
