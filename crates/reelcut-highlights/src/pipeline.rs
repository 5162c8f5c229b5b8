//! Collaborator traits and the async detection pipeline.
//!
//! The engine itself is synchronous and does no I/O. Transcripts and audio
//! features come from providers, and selected highlights go to a clip sink.
//! [`HighlightPipeline`] wires them together and runs detection on the
//! blocking pool so an async caller is never stalled.

use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use reelcut_models::{AudioFeatureSeries, Highlight, Transcript, TranscriptSegment};
use tracing::{debug, info, warn};

use crate::config::DetectionConfig;
use crate::detector::{Detection, HighlightDetector};
use crate::error::{DetectError, DetectResult};
use crate::metrics;

/// Produces an ordered transcript for a media input.
#[async_trait]
pub trait TranscriptProvider: Send + Sync {
    async fn transcribe(&self, media: &Path) -> DetectResult<Vec<TranscriptSegment>>;
}

/// Produces an audio energy series, or `None` when unavailable.
#[async_trait]
pub trait AudioFeatureProvider: Send + Sync {
    async fn extract(&self, media: &Path) -> DetectResult<Option<AudioFeatureSeries>>;
}

/// Consumes selected highlights, e.g. to render clips.
///
/// `number` is 1-based and follows selection order.
#[async_trait]
pub trait ClipSink: Send + Sync {
    async fn accept(&self, number: usize, highlight: &Highlight) -> DetectResult<()>;
}

/// Audio provider for setups without audio decoding.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoAudioFeatures;

#[async_trait]
impl AudioFeatureProvider for NoAudioFeatures {
    async fn extract(&self, _media: &Path) -> DetectResult<Option<AudioFeatureSeries>> {
        Ok(None)
    }
}

/// Transcript + audio providers feeding a shared detector.
pub struct HighlightPipeline<T, A> {
    transcripts: T,
    audio: A,
    detector: Arc<HighlightDetector>,
    config: DetectionConfig,
}

impl<T, A> HighlightPipeline<T, A>
where
    T: TranscriptProvider,
    A: AudioFeatureProvider,
{
    pub fn new(transcripts: T, audio: A, detector: HighlightDetector, config: DetectionConfig) -> Self {
        Self {
            transcripts,
            audio,
            detector: Arc::new(detector),
            config,
        }
    }

    pub fn config(&self) -> &DetectionConfig {
        &self.config
    }

    /// Transcribe, gather audio features and detect highlights.
    ///
    /// Transcript failures propagate. Audio failures only drop the energy
    /// term.
    pub async fn run(&self, media: &Path) -> DetectResult<Detection> {
        let transcript = self.transcripts.transcribe(media).await?;
        info!(
            media = %media.display(),
            segments = transcript.len(),
            words = transcript.full_text().split_whitespace().count(),
            "Transcript loaded"
        );

        let audio = match self.audio.extract(media).await {
            Ok(Some(series)) if !series.is_empty() => Some(series),
            Ok(_) => {
                debug!(media = %media.display(), "No audio features, scoring text only");
                metrics::record_audio_degraded("unavailable");
                None
            }
            Err(e) => {
                warn!(error = %e, "Audio feature extraction failed, scoring text only");
                metrics::record_audio_degraded("error");
                None
            }
        };

        let detector = Arc::clone(&self.detector);
        let config = self.config.clone();
        tokio::task::spawn_blocking(move || detector.detect(&transcript, audio.as_ref(), &config))
            .await
            .map_err(|e| DetectError::internal(format!("detection task failed: {}", e)))?
    }

    /// Run detection and hand each highlight to `sink` in selection order.
    pub async fn run_into<S>(&self, media: &Path, sink: &S) -> DetectResult<Detection>
    where
        S: ClipSink + ?Sized,
    {
        let detection = self.run(media).await?;
        for (i, highlight) in detection.highlights.iter().enumerate() {
            sink.accept(i + 1, highlight).await?;
        }
        Ok(detection)
    }
}
