//! Highlight detection entry point.
//!
//! Detection runs in two explicit paths:
//!
//! 1. **Scored**: features, scoring and greedy selection. Returns a
//!    [`DetectResult`] instead of panicking or swallowing errors.
//! 2. **Fallback**: evenly spaced windows, taken whenever the scored path
//!    returns a recoverable error.
//!
//! Only errors raised by the fallback itself (malformed timestamps) and
//! invalid configuration reach the caller.

use std::time::Instant;

use reelcut_models::{AudioFeatureSeries, Highlight, TranscriptSegment};
use tracing::{debug, info, warn};

use crate::config::DetectionConfig;
use crate::error::DetectResult;
use crate::fallback::fallback_highlights;
use crate::metrics;
use crate::scorer::SegmentScorer;
use crate::selector::select_highlights;

/// Which path produced a detection result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetectionPath {
    Scored,
    Fallback,
}

impl DetectionPath {
    pub fn as_str(&self) -> &'static str {
        match self {
            DetectionPath::Scored => "scored",
            DetectionPath::Fallback => "fallback",
        }
    }
}

/// Highlights plus the path that produced them.
#[derive(Debug, Clone, PartialEq)]
pub struct Detection {
    pub highlights: Vec<Highlight>,
    pub path: DetectionPath,
}

impl Detection {
    pub fn is_fallback(&self) -> bool {
        self.path == DetectionPath::Fallback
    }
}

/// Synchronous, stateless highlight detector.
///
/// Holds only immutable configuration, so one instance can serve
/// concurrent jobs without locking.
#[derive(Debug, Clone, Default)]
pub struct HighlightDetector {
    scorer: SegmentScorer,
}

impl HighlightDetector {
    pub fn new(scorer: SegmentScorer) -> Self {
        Self { scorer }
    }

    pub fn scorer(&self) -> &SegmentScorer {
        &self.scorer
    }

    /// Scored path only: score, then select.
    pub fn detect_scored(
        &self,
        transcript: &[TranscriptSegment],
        audio: Option<&AudioFeatureSeries>,
        config: &DetectionConfig,
    ) -> DetectResult<Vec<Highlight>> {
        let scored = self.scorer.score(transcript, audio)?;
        Ok(select_highlights(scored, config))
    }

    /// Detect highlights, falling back to evenly spaced windows on failure.
    pub fn detect(
        &self,
        transcript: &[TranscriptSegment],
        audio: Option<&AudioFeatureSeries>,
        config: &DetectionConfig,
    ) -> DetectResult<Detection> {
        config.validate()?;

        let started = Instant::now();
        let span = tracing::debug_span!(
            "detect_highlights",
            segments = transcript.len(),
            max_clips = config.max_clips,
            has_audio = audio.is_some()
        );
        let _enter = span.enter();

        if transcript.is_empty() {
            debug!("Empty transcript, nothing to select");
            return Ok(Detection {
                highlights: Vec::new(),
                path: DetectionPath::Scored,
            });
        }

        let detection = match self.detect_scored(transcript, audio, config) {
            Ok(highlights) => Detection {
                highlights,
                path: DetectionPath::Scored,
            },
            Err(e) => {
                warn!(error = %e, "Scoring failed, using evenly spaced fallback");
                Detection {
                    highlights: fallback_highlights(transcript, config)?,
                    path: DetectionPath::Fallback,
                }
            }
        };

        let elapsed = started.elapsed().as_secs_f64();
        metrics::record_detection(detection.path.as_str(), detection.highlights.len(), elapsed);
        info!(
            path = detection.path.as_str(),
            highlights = detection.highlights.len(),
            requested = config.max_clips,
            "Highlight detection complete"
        );

        Ok(detection)
    }
}

/// Detect highlights with the default vocabulary and weights.
pub fn detect_highlights(
    transcript: &[TranscriptSegment],
    audio: Option<&AudioFeatureSeries>,
    config: &DetectionConfig,
) -> DetectResult<Vec<Highlight>> {
    HighlightDetector::default()
        .detect(transcript, audio, config)
        .map(|detection| detection.highlights)
}
