//! Composite segment scoring.
//!
//! Engagement, emotion and speaking rate are z-score normalized across the
//! transcript (`(x - mean) / max(std, 1)`); question and exclamation counts
//! enter raw. A single-segment transcript skips normalization and scores
//! from raw values.
//!
//! ```text
//! score = 0.3 * z(engagement)
//!       + 0.2 * z(emotion)
//!       + 0.1 * questions
//!       + 0.1 * exclamations
//!       + 0.1 * min(z(speaking_rate), 2.0)
//!       + 0.2 * min(mean_rms * 10, 1.0)     (only with audio)
//! ```

use reelcut_models::{AudioFeatureSeries, ScoredSegment, TranscriptSegment};
use tracing::debug;

use crate::audio::{energy_score, mean_energy_in_range};
use crate::config::ScoringWeights;
use crate::error::{DetectError, DetectResult};
use crate::features::{extract_text_features, SegmentFeatures};
use crate::keywords::KeywordSet;

/// Scores transcript segments with a fixed vocabulary and weight set.
#[derive(Debug, Clone, Default)]
pub struct SegmentScorer {
    keywords: KeywordSet,
    weights: ScoringWeights,
}

impl SegmentScorer {
    pub fn new(keywords: KeywordSet, weights: ScoringWeights) -> Self {
        Self { keywords, weights }
    }

    pub fn keywords(&self) -> &KeywordSet {
        &self.keywords
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    /// Score every segment, preserving transcript order.
    ///
    /// Fails on non-finite or inverted timestamps, on non-finite audio
    /// energy, and on any non-finite composite score.
    pub fn score(
        &self,
        transcript: &[TranscriptSegment],
        audio: Option<&AudioFeatureSeries>,
    ) -> DetectResult<Vec<ScoredSegment>> {
        validate_timestamps(transcript)?;

        let features = extract_text_features(transcript, &self.keywords);
        let mut engagement = column(&features, |f| f.engagement);
        let mut emotion = column(&features, |f| f.emotion);
        let mut speaking_rate = column(&features, |f| f.speaking_rate);

        if features.len() > 1 {
            z_normalize(&mut engagement);
            z_normalize(&mut emotion);
            z_normalize(&mut speaking_rate);
        }

        let w = &self.weights;
        let mut scored = Vec::with_capacity(transcript.len());
        let mut with_energy = 0usize;

        for (i, (segment, feature)) in transcript.iter().zip(&features).enumerate() {
            let mut score = engagement[i] * w.engagement
                + emotion[i] * w.emotion
                + feature.questions * w.question
                + feature.exclamations * w.exclamation
                + speaking_rate[i].min(w.speaking_rate_cap) * w.speaking_rate;

            if let Some(mean_rms) = mean_energy_in_range(audio, segment.start, segment.end) {
                if !mean_rms.is_finite() {
                    return Err(DetectError::NonFiniteFeature {
                        index: i,
                        feature: "rms_energy",
                    });
                }
                score += energy_score(mean_rms, w.energy_gain) * w.energy;
                with_energy += 1;
            }

            if !score.is_finite() {
                return Err(DetectError::NonFiniteScore { index: i });
            }

            scored.push(ScoredSegment {
                start: segment.start,
                end: segment.end,
                text: segment.text.clone(),
                score,
                confidence: segment.confidence,
            });
        }

        debug!(
            segments = scored.len(),
            with_energy = with_energy,
            "Scored transcript segments"
        );

        Ok(scored)
    }
}

/// Reject segments the scorer cannot place on the timeline.
pub(crate) fn validate_timestamps(transcript: &[TranscriptSegment]) -> DetectResult<()> {
    match transcript
        .iter()
        .enumerate()
        .find(|(_, s)| !s.has_valid_timestamps())
    {
        Some((index, s)) => Err(DetectError::InvalidTimestamps {
            index,
            start: s.start,
            end: s.end,
        }),
        None => Ok(()),
    }
}

fn column(features: &[SegmentFeatures], f: impl Fn(&SegmentFeatures) -> f64) -> Vec<f64> {
    features.iter().map(f).collect()
}

/// In-place `(x - mean) / max(std, 1)` with the population std.
fn z_normalize(values: &mut [f64]) {
    if values.is_empty() {
        return;
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
    let denom = variance.sqrt().max(1.0);
    for v in values.iter_mut() {
        *v = (*v - mean) / denom;
    }
}
