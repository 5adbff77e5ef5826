//! Test Module
//!
//! Comprehensive test suite for the Verdant engine.
//!
//! ## Test Categories
//! - `brain_tests`: tokenization, intent, analysis, scoring, confidence
//! - `engine_tests`: end-to-end search properties and scenarios
//! - `knowledge_tests`: document loading, fallback, malformed entries

pub mod knowledge_tests;
