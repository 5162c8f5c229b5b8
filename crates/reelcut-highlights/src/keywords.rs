//! Keyword sets used by the text feature extractor.
//!
//! Keywords are plain lower-case phrases matched as substrings of the
//! lower-cased segment text. A [`KeywordSet`] is immutable once built and is
//! handed to the scorer at construction, so a locale or content vertical can
//! swap in its own vocabulary.

const ENGAGEMENT_KEYWORDS: &[&str] = &[
    // Superlatives and surprise
    "amazing", "incredible", "wow", "unbelievable", "shocking", "surprising",
    // Urgency
    "important", "crucial", "key", "essential", "must", "never", "always",
    // Reveals
    "secret", "hidden", "revealed", "discovery", "breakthrough", "game-changer",
    // Correctness
    "mistake", "error", "wrong", "right", "correct", "truth", "fact",
    // Problem/solution
    "question", "answer", "solution", "problem", "issue", "challenge",
    // How-to
    "tip", "trick", "hack", "method", "technique", "strategy", "way",
    // Rankings
    "best", "worst", "top", "bottom", "first", "last", "only", "unique",
];

const EMOTION_KEYWORDS: &[&str] = &[
    "love", "hate", "excited", "angry", "sad", "happy", "frustrated",
    "confused", "surprised", "shocked", "amazed", "disappointed",
];

/// Engagement and emotion vocabularies.
#[derive(Debug, Clone, PartialEq)]
pub struct KeywordSet {
    engagement: Vec<String>,
    emotion: Vec<String>,
}

impl Default for KeywordSet {
    fn default() -> Self {
        Self::new(ENGAGEMENT_KEYWORDS, EMOTION_KEYWORDS)
    }
}

impl KeywordSet {
    /// Build a set from arbitrary phrases.
    ///
    /// Phrases are trimmed and lower-cased; blanks and duplicates are dropped.
    pub fn new<S: AsRef<str>>(engagement: &[S], emotion: &[S]) -> Self {
        Self {
            engagement: normalize(engagement),
            emotion: normalize(emotion),
        }
    }

    pub fn engagement(&self) -> &[String] {
        &self.engagement
    }

    pub fn emotion(&self) -> &[String] {
        &self.emotion
    }

    /// Number of engagement phrases present in already lower-cased text.
    pub fn engagement_hits(&self, lowered: &str) -> usize {
        count_hits(&self.engagement, lowered)
    }

    /// Number of emotion phrases present in already lower-cased text.
    pub fn emotion_hits(&self, lowered: &str) -> usize {
        count_hits(&self.emotion, lowered)
    }
}

fn normalize<S: AsRef<str>>(phrases: &[S]) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(phrases.len());
    for phrase in phrases {
        let phrase = phrase.as_ref().trim().to_lowercase();
        if !phrase.is_empty() && !out.contains(&phrase) {
            out.push(phrase);
        }
    }
    out
}

// Each phrase counts once, however often it repeats in the text.
fn count_hits(phrases: &[String], lowered: &str) -> usize {
    phrases
        .iter()
        .filter(|phrase| lowered.contains(phrase.as_str()))
        .count()
}
