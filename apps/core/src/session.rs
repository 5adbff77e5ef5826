//! Session tracking: bounded search history and the derived user profile.
//!
//! Single-writer by design - one update per completed search. History is
//! most-recent-first with FIFO eviction past the cap.

use std::collections::{HashMap, VecDeque};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::knowledge::Domain;
use crate::models::{MatchType, SearchPatterns, SemanticMatch, UserContext};

/// One completed search, appended to the history front.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchRecord {
    /// Unique record identifier (UUID).
    pub id: String,
    /// The query as submitted.
    pub keyword: String,
    /// Term of the selected match.
    pub matched_term: String,
    /// Domain of the selected match.
    pub domain: Domain,
    /// How the match related to the query.
    pub match_type: MatchType,
    /// Final confidence for the search.
    pub confidence: f32,
    /// When the search completed.
    pub timestamp: DateTime<Utc>,
}

impl SearchRecord {
    /// Builds a record for a completed search.
    pub fn new(keyword: &str, semantic_match: &SemanticMatch, confidence: f32) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            keyword: keyword.to_string(),
            matched_term: semantic_match.term.clone(),
            domain: semantic_match.entry.domain,
            match_type: semantic_match.match_type,
            confidence,
            timestamp: Utc::now(),
        }
    }
}

/// Compact record of a high-confidence search.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuccessfulMatch {
    pub keyword: String,
    pub domain: Domain,
    pub timestamp: DateTime<Utc>,
}

/// Preferences and successful matches accumulated over a session.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserProfile {
    pub preferences: HashMap<String, String>,
    pub successful_matches: Vec<SuccessfulMatch>,
}

/// Maintains the bounded history and user profile.
pub struct SessionTracker {
    history: VecDeque<SearchRecord>,
    profile: UserProfile,
    total_searches: u64,
    history_cap: usize,
    success_threshold: f32,
}

impl SessionTracker {
    pub fn new(history_cap: usize, success_threshold: f32) -> Self {
        Self {
            history: VecDeque::new(),
            profile: UserProfile::default(),
            total_searches: 0,
            history_cap,
            success_threshold,
        }
    }

    /// Records a completed search: prepends to history (evicting the oldest
    /// past the cap), counts it, and folds high-confidence matches and any
    /// supplied preferences into the profile.
    pub fn record(&mut self, record: SearchRecord, context: Option<&UserContext>) {
        if record.confidence > self.success_threshold {
            self.profile.successful_matches.push(SuccessfulMatch {
                keyword: record.keyword.clone(),
                domain: record.domain,
                timestamp: record.timestamp,
            });
        }

        if let Some(ctx) = context {
            for (key, value) in &ctx.preferences {
                self.profile
                    .preferences
                    .insert(key.clone(), value.clone());
            }
        }

        self.history.push_front(record);
        while self.history.len() > self.history_cap {
            self.history.pop_back();
        }
        self.total_searches += 1;
    }

    /// Aggregate view: top-3 domains among successful matches, total search
    /// count and mean confidence across the retained history.
    pub fn patterns(&self) -> SearchPatterns {
        let mut counts: Vec<(Domain, usize, usize)> = Vec::new();
        for (index, success) in self.profile.successful_matches.iter().enumerate() {
            match counts.iter_mut().find(|(d, _, _)| *d == success.domain) {
                Some((_, count, _)) => *count += 1,
                None => counts.push((success.domain, 1, index)),
            }
        }
        // Frequency first, earliest appearance breaking ties.
        counts.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));

        let average_confidence = if self.history.is_empty() {
            0.0
        } else {
            self.history.iter().map(|r| r.confidence).sum::<f32>() / self.history.len() as f32
        };

        SearchPatterns {
            preferred_domains: counts.into_iter().take(3).map(|(d, _, _)| d).collect(),
            total_searches: self.total_searches,
            average_confidence,
        }
    }

    /// Retained records, most recent first.
    pub fn history(&self) -> impl Iterator<Item = &SearchRecord> {
        self.history.iter()
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::knowledge::SemanticEntry;

    fn record(keyword: &str, confidence: f32) -> SearchRecord {
        let semantic_match = SemanticMatch {
            term: "organic farming".to_string(),
            entry: SemanticEntry::new(Domain::Agriculture),
            score: confidence,
            match_type: MatchType::Partial,
        };
        SearchRecord::new(keyword, &semantic_match, confidence)
    }

    #[test]
    fn test_history_is_bounded_and_most_recent_first() {
        let mut tracker = SessionTracker::new(50, 0.7);

        for i in 0..60 {
            tracker.record(record(&format!("query {i}"), 0.5), None);
        }

        assert_eq!(tracker.history_len(), 50);
        let keywords: Vec<&str> = tracker.history().map(|r| r.keyword.as_str()).collect();
        assert_eq!(keywords[0], "query 59");
        assert_eq!(keywords[49], "query 10");
    }

    #[test]
    fn test_fifty_first_search_evicts_the_first() {
        let mut tracker = SessionTracker::new(50, 0.7);

        for i in 0..51 {
            tracker.record(record(&format!("query {i}"), 0.5), None);
        }

        assert_eq!(tracker.history_len(), 50);
        assert!(tracker.history().all(|r| r.keyword != "query 0"));
    }

    #[test]
    fn test_only_high_confidence_reaches_the_profile() {
        let mut tracker = SessionTracker::new(50, 0.7);

        tracker.record(record("strong", 0.9), None);
        tracker.record(record("borderline", 0.7), None);
        tracker.record(record("weak", 0.2), None);

        let successes = &tracker.profile().successful_matches;
        assert_eq!(successes.len(), 1);
        assert_eq!(successes[0].keyword, "strong");
    }

    #[test]
    fn test_patterns_rank_domains_by_frequency() {
        let mut tracker = SessionTracker::new(50, 0.7);

        let mut push = |domain: Domain| {
            let semantic_match = SemanticMatch {
                term: "t".to_string(),
                entry: SemanticEntry::new(domain),
                score: 0.9,
                match_type: MatchType::Semantic,
            };
            tracker.record(SearchRecord::new("q", &semantic_match, 0.9), None);
        };

        push(Domain::Wellness);
        push(Domain::Agriculture);
        push(Domain::Agriculture);
        push(Domain::Energy);
        push(Domain::Agriculture);
        push(Domain::Energy);

        let patterns = tracker.patterns();
        assert_eq!(
            patterns.preferred_domains,
            vec![Domain::Agriculture, Domain::Energy, Domain::Wellness]
        );
        assert_eq!(patterns.total_searches, 6);
    }

    #[test]
    fn test_empty_history_has_zero_average() {
        let tracker = SessionTracker::new(50, 0.7);
        let patterns = tracker.patterns();

        assert_eq!(patterns.average_confidence, 0.0);
        assert_eq!(patterns.total_searches, 0);
        assert!(patterns.preferred_domains.is_empty());
    }

    #[test]
    fn test_preferences_fold_into_profile() {
        let mut tracker = SessionTracker::new(50, 0.7);
        let mut ctx = UserContext::default();
        ctx.preferences
            .insert("pace".to_string(), "weekend".to_string());

        tracker.record(record("q", 0.5), Some(&ctx));

        assert_eq!(
            tracker.profile().preferences.get("pace").map(String::as_str),
            Some("weekend")
        );
    }

    #[test]
    fn test_patterns_average_over_history() {
        let mut tracker = SessionTracker::new(50, 0.7);
        tracker.record(record("a", 0.4), None);
        tracker.record(record("b", 0.8), None);

        let patterns = tracker.patterns();
        assert!((patterns.average_confidence - 0.6).abs() < 0.001);
    }
}
