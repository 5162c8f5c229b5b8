//! Transcript models.
//!
//! A transcript is an ordered sequence of [`TranscriptSegment`]s as produced
//! by the speech engine. Segments are immutable once built.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A contiguous span of spoken text with start/end timestamps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct TranscriptSegment {
    /// Start time in seconds
    pub start: f64,

    /// End time in seconds
    pub end: f64,

    /// Spoken text
    pub text: String,

    /// Engine-reported average log-probability (unbounded, 0.0 when absent)
    #[serde(default, alias = "avg_logprob")]
    pub confidence: f64,
}

impl TranscriptSegment {
    /// Create a new segment. Surrounding whitespace is trimmed from `text`.
    pub fn new(start: f64, end: f64, text: impl AsRef<str>) -> Self {
        Self {
            start,
            end,
            text: text.as_ref().trim().to_string(),
            confidence: 0.0,
        }
    }

    /// Builder-style setter for confidence.
    pub fn with_confidence(mut self, confidence: f64) -> Self {
        self.confidence = confidence;
        self
    }

    /// Duration in seconds.
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }

    /// Whether both timestamps are finite and `end >= start`.
    pub fn has_valid_timestamps(&self) -> bool {
        self.start.is_finite() && self.end.is_finite() && self.end >= self.start
    }
}

/// Read-only helpers over an ordered transcript.
pub trait Transcript {
    /// All segment texts joined by a single space.
    fn full_text(&self) -> String;

    /// Segments whose text contains any of `keywords` (case-insensitive),
    /// in transcript order. Each segment appears at most once.
    fn find_by_keywords<S: AsRef<str>>(&self, keywords: &[S]) -> Vec<&TranscriptSegment>;

    /// `(first.start, last.end)`, or `None` for an empty transcript.
    fn span(&self) -> Option<(f64, f64)>;
}

impl Transcript for [TranscriptSegment] {
    fn full_text(&self) -> String {
        self.iter()
            .map(|s| s.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn find_by_keywords<S: AsRef<str>>(&self, keywords: &[S]) -> Vec<&TranscriptSegment> {
        let lowered: Vec<String> = keywords
            .iter()
            .map(|k| k.as_ref().to_lowercase())
            .collect();

        self.iter()
            .filter(|segment| {
                let text = segment.text.to_lowercase();
                lowered.iter().any(|k| text.contains(k.as_str()))
            })
            .collect()
    }

    fn span(&self) -> Option<(f64, f64)> {
        match (self.first(), self.last()) {
            (Some(first), Some(last)) => Some((first.start, last.end)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<TranscriptSegment> {
        vec![
            TranscriptSegment::new(0.0, 4.0, "  Welcome back to the channel "),
            TranscriptSegment::new(4.0, 9.5, "This trick is AMAZING"),
            TranscriptSegment::new(9.5, 12.0, "Let's get started"),
        ]
    }

    #[test]
    fn test_new_trims_text() {
        let seg = TranscriptSegment::new(1.0, 2.0, "\thello world \n");
        assert_eq!(seg.text, "hello world");
        assert_eq!(seg.confidence, 0.0);
    }

    #[test]
    fn test_confidence_defaults_when_missing() {
        let seg: TranscriptSegment =
            serde_json::from_str(r#"{"start": 1.5, "end": 3.0, "text": "hi"}"#).unwrap();
        assert_eq!(seg.confidence, 0.0);
        assert!((seg.duration() - 1.5).abs() < 1e-9);
    }

    #[test]
    fn test_confidence_accepts_whisper_field() {
        let seg: TranscriptSegment = serde_json::from_str(
            r#"{"start": 0.0, "end": 2.0, "text": "hi", "avg_logprob": -0.42, "no_speech_prob": 0.1}"#,
        )
        .unwrap();
        assert!((seg.confidence + 0.42).abs() < 1e-9);
    }

    #[test]
    fn test_invalid_timestamps() {
        assert!(!TranscriptSegment::new(5.0, 4.0, "x").has_valid_timestamps());
        assert!(!TranscriptSegment::new(f64::NAN, 4.0, "x").has_valid_timestamps());
        assert!(TranscriptSegment::new(4.0, 4.0, "x").has_valid_timestamps());
    }

    #[test]
    fn test_full_text() {
        let transcript = sample();
        assert_eq!(
            transcript.full_text(),
            "Welcome back to the channel This trick is AMAZING Let's get started"
        );
    }

    #[test]
    fn test_find_by_keywords() {
        let transcript = sample();
        let found = transcript.find_by_keywords(&["amazing", "TRICK", "nothing"]);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].start, 4.0);
    }

    #[test]
    fn test_span() {
        assert_eq!(sample().span(), Some((0.0, 12.0)));
        let empty: Vec<TranscriptSegment> = Vec::new();
        assert_eq!(empty.span(), None);
    }
}
