//! Tokenization, normalization and word classification.
//!
//! Splits raw queries into classified tokens using static lexicons.
//! No ML model required - pure lookup tables built once at startup.

use std::collections::HashMap;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

/// Default importance weight for words absent from the importance table.
pub const DEFAULT_WEIGHT: f32 = 0.5;

/// Semantic type assigned to a word.
///
/// Classification checks lexicons in a fixed priority order (verb first,
/// activity last); the first lexicon containing the word wins, so a word
/// can never carry two types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WordType {
    Verb,
    Adverb,
    Adjective,
    Noun,
    Emotional,
    Ecological,
    Object,
    Activity,
    Other,
}

impl WordType {
    /// Returns a human-readable label for the type.
    pub fn label(&self) -> &'static str {
        match self {
            WordType::Verb => "verb",
            WordType::Adverb => "adverb",
            WordType::Adjective => "adjective",
            WordType::Noun => "noun",
            WordType::Emotional => "emotional",
            WordType::Ecological => "ecological",
            WordType::Object => "object",
            WordType::Activity => "activity",
            WordType::Other => "other",
        }
    }

    /// Axis of the synthesized query vector this type contributes to.
    /// `Other` words carry no signal and contribute nowhere.
    pub fn vector_axis(&self) -> Option<usize> {
        match self {
            WordType::Verb => Some(0),
            WordType::Adverb | WordType::Adjective => Some(1),
            WordType::Noun | WordType::Object | WordType::Activity => Some(2),
            WordType::Emotional | WordType::Ecological => Some(3),
            WordType::Other => None,
        }
    }
}

/// A classified unit of input text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    /// The lower-cased word as it appeared in the query.
    pub word: String,
    /// Stemmed form used for lexical comparison.
    pub stem: String,
    /// Semantic type from lexicon membership.
    pub word_type: WordType,
    /// Importance weight, `DEFAULT_WEIGHT` when unknown.
    pub weight: f32,
}

const VERBS: &[&str] = &[
    "learn", "study", "build", "create", "make", "find", "get", "use", "work", "help", "need",
    "want", "grow", "plant", "reduce", "start", "teach", "research", "improve", "practice",
    "meditate", "cook", "repair", "save",
];

const ADVERBS: &[&str] = &[
    "quickly", "easily", "slowly", "well", "fast", "now", "today", "soon", "better", "often",
    "daily",
];

const ADJECTIVES: &[&str] = &[
    "best", "good", "bad", "easy", "hard", "simple", "complex", "free", "paid", "new", "old",
    "cheap", "healthy", "local", "small", "large",
];

const NOUNS: &[&str] = &[
    "course", "tutorial", "guide", "book", "video", "tool", "software", "website", "resource",
    "garden", "soil", "energy", "water", "food", "home", "farm", "seed", "program",
];

const EMOTIONAL: &[&str] = &[
    "mad", "angry", "sad", "happy", "bored", "tired", "stressed", "anxious", "excited",
    "overwhelmed", "worried", "calm",
];

const ECOLOGICAL: &[&str] = &[
    "sustainable", "eco", "green", "organic", "natural", "renewable", "environment", "compost",
    "recycle", "biodegradable", "solar", "wildlife",
];

const OBJECTS: &[&str] = &[
    "panel", "battery", "bin", "bed", "box", "kit", "sensor", "pump",
];

const ACTIVITIES: &[&str] = &[
    "yoga", "hiking", "cycling", "permaculture", "upcycling", "volunteering", "birdwatching",
];

/// Inflected form → base form, applied before classification and used as the
/// first stage of stemming.
static NORMAL_FORMS: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        ("learning", "learn"),
        ("studying", "study"),
        ("building", "build"),
        ("creating", "create"),
        ("making", "make"),
        ("finding", "find"),
        ("getting", "get"),
        ("using", "use"),
        ("working", "work"),
        ("helping", "help"),
        ("growing", "grow"),
        ("planting", "plant"),
        ("reducing", "reduce"),
        ("starting", "start"),
        ("teaching", "teach"),
        ("researching", "research"),
        ("improving", "improve"),
        ("practicing", "practice"),
        ("meditating", "meditate"),
        ("cooking", "cook"),
        ("farming", "farm"),
        ("gardening", "garden"),
        ("composting", "compost"),
        ("recycling", "recycle"),
        ("saving", "save"),
    ])
});

/// Word → type, precomputed from the lexicons in priority order.
/// First insert wins, which is what gives earlier lexicons priority.
static WORD_TYPES: LazyLock<HashMap<&'static str, WordType>> = LazyLock::new(|| {
    let lexicons: [(&[&str], WordType); 8] = [
        (VERBS, WordType::Verb),
        (ADVERBS, WordType::Adverb),
        (ADJECTIVES, WordType::Adjective),
        (NOUNS, WordType::Noun),
        (EMOTIONAL, WordType::Emotional),
        (ECOLOGICAL, WordType::Ecological),
        (OBJECTS, WordType::Object),
        (ACTIVITIES, WordType::Activity),
    ];

    let mut map = HashMap::new();
    for (words, word_type) in lexicons {
        for word in words {
            map.entry(*word).or_insert(word_type);
        }
    }
    map
});

/// Importance weights for known high-signal words.
static IMPORTANCE: LazyLock<HashMap<&'static str, f32>> = LazyLock::new(|| {
    HashMap::from([
        ("learn", 0.9),
        ("study", 0.85),
        ("build", 0.85),
        ("create", 0.85),
        ("research", 0.9),
        ("sustainable", 0.95),
        ("organic", 0.9),
        ("renewable", 0.9),
        ("compost", 0.8),
        ("solar", 0.8),
        ("stressed", 0.8),
        ("anxious", 0.8),
        ("energy", 0.75),
        ("garden", 0.7),
        ("farm", 0.7),
        ("grow", 0.7),
        ("soil", 0.7),
        ("help", 0.6),
        ("course", 0.6),
        ("guide", 0.6),
    ])
});

/// Maps an inflected form to its base form, identity when unknown.
pub fn normalize(word: &str) -> &str {
    NORMAL_FORMS.get(word).copied().unwrap_or(word)
}

/// Produces a stem: normalization table first, then a suffix trim
/// ("ing", "ed", "s") as last resort. Short residues are left alone.
pub fn stem(word: &str) -> String {
    if let Some(base) = NORMAL_FORMS.get(word) {
        return (*base).to_string();
    }
    for suffix in ["ing", "ed", "s"] {
        if word.len() > suffix.len() + 2 {
            if let Some(trimmed) = word.strip_suffix(suffix) {
                return trimmed.to_string();
            }
        }
    }
    word.to_string()
}

/// Resolves a normalized word's type by lexicon membership.
pub fn classify(word: &str) -> WordType {
    WORD_TYPES.get(word).copied().unwrap_or(WordType::Other)
}

/// Looks up a word's importance weight.
pub fn importance(word: &str) -> f32 {
    IMPORTANCE.get(word).copied().unwrap_or(DEFAULT_WEIGHT)
}

/// Splits and classifies raw query text.
pub struct Tokenizer {
    min_word_length: usize,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Tokenizer {
    /// Creates a tokenizer with the standard short-word cutoff.
    pub fn new() -> Self {
        Self { min_word_length: 3 }
    }

    /// Produces an ordered token sequence. Order is preserved and duplicates
    /// are retained. Empty input yields an empty sequence.
    pub fn tokenize(&self, text: &str) -> Vec<Token> {
        text.to_lowercase()
            .split_whitespace()
            .filter(|word| word.len() >= self.min_word_length)
            .map(|word| {
                let normalized = normalize(word);
                Token {
                    word: word.to_string(),
                    stem: stem(normalized),
                    word_type: classify(normalized),
                    weight: importance(normalized),
                }
            })
            .collect()
    }
}
