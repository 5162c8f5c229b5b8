//! Per-segment text features.

use reelcut_models::TranscriptSegment;

use crate::keywords::KeywordSet;

/// Raw text signals for one transcript segment.
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentFeatures {
    /// Distinct engagement phrases present
    pub engagement: f64,
    /// Distinct emotion phrases present
    pub emotion: f64,
    /// Count of `?`
    pub questions: f64,
    /// Count of `!`
    pub exclamations: f64,
    /// Whitespace-delimited tokens
    pub word_count: usize,
    /// Words per second, with the duration floored at one second
    pub speaking_rate: f64,
}

impl SegmentFeatures {
    /// Compute features for a single segment.
    pub fn extract(segment: &TranscriptSegment, keywords: &KeywordSet) -> Self {
        let text = segment.text.to_lowercase();
        let word_count = text.split_whitespace().count();
        let duration = segment.end - segment.start;

        Self {
            engagement: keywords.engagement_hits(&text) as f64,
            emotion: keywords.emotion_hits(&text) as f64,
            questions: text.matches('?').count() as f64,
            exclamations: text.matches('!').count() as f64,
            word_count,
            speaking_rate: word_count as f64 / duration.max(1.0),
        }
    }
}

/// Compute features for every segment, preserving order.
pub fn extract_text_features(
    transcript: &[TranscriptSegment],
    keywords: &KeywordSet,
) -> Vec<SegmentFeatures> {
    transcript
        .iter()
        .map(|segment| SegmentFeatures::extract(segment, keywords))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_counts() {
        let keywords = KeywordSet::default();
        let segment = TranscriptSegment::new(0.0, 4.0, "Is this the BEST trick? I love it!!");
        let f = SegmentFeatures::extract(&segment, &keywords);

        assert_eq!(f.engagement, 2.0); // best, trick
        assert_eq!(f.emotion, 1.0); // love
        assert_eq!(f.questions, 1.0);
        assert_eq!(f.exclamations, 2.0);
        assert_eq!(f.word_count, 8);
        assert!((f.speaking_rate - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_speaking_rate_floors_duration() {
        let keywords = KeywordSet::default();
        let segment = TranscriptSegment::new(3.0, 3.2, "one two three");
        let f = SegmentFeatures::extract(&segment, &keywords);
        assert!((f.speaking_rate - 3.0).abs() < 1e-9);

        let zero = TranscriptSegment::new(3.0, 3.0, "one two");
        let f = SegmentFeatures::extract(&zero, &keywords);
        assert!((f.speaking_rate - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_output_matches_input_order() {
        let keywords = KeywordSet::default();
        let transcript = vec![
            TranscriptSegment::new(0.0, 2.0, "plain words"),
            TranscriptSegment::new(2.0, 4.0, "wow!"),
        ];
        let features = extract_text_features(&transcript, &keywords);
        assert_eq!(features.len(), 2);
        assert_eq!(features[0].engagement, 0.0);
        assert_eq!(features[1].engagement, 1.0);
        assert_eq!(features[1].exclamations, 1.0);
    }
}
