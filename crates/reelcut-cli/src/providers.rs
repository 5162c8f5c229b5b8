//! File-backed transcript and audio feature providers.
//!
//! The transcript provider treats the media path as a transcript JSON file.
//! The audio provider reads an explicit file or, failing that, the
//! `<stem>.audio.json` sibling of the media path.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use reelcut_highlights::{AudioFeatureProvider, DetectError, DetectResult, TranscriptProvider};
use reelcut_models::{AudioFeatureSeries, TranscriptSegment};
use serde::Deserialize;
use tracing::debug;

/// Accepted transcript document shapes.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum TranscriptDocument {
    Segments(Vec<TranscriptSegment>),
    Wrapped { segments: Vec<TranscriptSegment> },
}

impl TranscriptDocument {
    fn into_segments(self) -> Vec<TranscriptSegment> {
        match self {
            TranscriptDocument::Segments(segments) => segments,
            TranscriptDocument::Wrapped { segments } => segments,
        }
    }
}

/// Parse a transcript document, trimming text and dropping blank segments.
pub fn parse_transcript(json: &str) -> DetectResult<Vec<TranscriptSegment>> {
    let document: TranscriptDocument = serde_json::from_str(json)
        .map_err(|e| DetectError::transcript(format!("invalid transcript JSON: {}", e)))?;

    Ok(document
        .into_segments()
        .into_iter()
        .map(|s| TranscriptSegment::new(s.start, s.end, &s.text).with_confidence(s.confidence))
        .filter(|s| !s.text.is_empty())
        .collect())
}

/// Transcript provider reading JSON documents from disk.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonTranscriptFile;

#[async_trait]
impl TranscriptProvider for JsonTranscriptFile {
    async fn transcribe(&self, media: &Path) -> DetectResult<Vec<TranscriptSegment>> {
        let json = tokio::fs::read_to_string(media).await.map_err(|e| {
            DetectError::transcript(format!("failed to read {}: {}", media.display(), e))
        })?;
        parse_transcript(&json)
    }
}

/// Audio feature provider reading JSON series from disk.
#[derive(Debug, Clone, Default)]
pub struct JsonAudioFeatures {
    path: Option<PathBuf>,
}

impl JsonAudioFeatures {
    pub fn new(path: Option<PathBuf>) -> Self {
        Self { path }
    }

    /// File consulted for `media`.
    pub fn resolve(&self, media: &Path) -> PathBuf {
        self.path
            .clone()
            .unwrap_or_else(|| media.with_extension("audio.json"))
    }
}

#[async_trait]
impl AudioFeatureProvider for JsonAudioFeatures {
    async fn extract(&self, media: &Path) -> DetectResult<Option<AudioFeatureSeries>> {
        let path = self.resolve(media);
        if self.path.is_none() && !tokio::fs::try_exists(&path).await.unwrap_or(false) {
            debug!(path = %path.display(), "No audio feature file next to transcript");
            return Ok(None);
        }

        let json = tokio::fs::read_to_string(&path).await.map_err(|e| {
            DetectError::audio_features(format!("failed to read {}: {}", path.display(), e))
        })?;
        let raw: AudioFeatureSeries = serde_json::from_str(&json)
            .map_err(|e| DetectError::audio_features(format!("invalid audio JSON: {}", e)))?;

        let duration = raw.duration;
        let series = AudioFeatureSeries::try_new(raw.time_axis, raw.rms_energy)
            .map_err(|e| DetectError::audio_features(e.to_string()))?;
        Ok(Some(match duration {
            Some(secs) => series.with_duration(secs),
            None => series,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_segment_array() {
        let segments = parse_transcript(
            r#"[{"start": 0.0, "end": 2.0, "text": " hi there "},
                {"start": 2.0, "end": 3.0, "text": "   "}]"#,
        )
        .unwrap();
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].text, "hi there");
    }

    #[test]
    fn test_parse_whisper_document() {
        let segments = parse_transcript(
            r#"{"text": "full", "language": "en", "segments": [
                {"id": 0, "start": 0.0, "end": 2.5, "text": "hello", "avg_logprob": -0.25}
            ]}"#,
        )
        .unwrap();
        assert_eq!(segments.len(), 1);
        assert!((segments[0].confidence + 0.25).abs() < 1e-9);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(
            parse_transcript("{\"nope\": 1}"),
            Err(DetectError::Transcript(_))
        ));
    }

    #[test]
    fn test_resolve_sibling() {
        let provider = JsonAudioFeatures::default();
        assert_eq!(
            provider.resolve(Path::new("/tmp/talk.json")),
            PathBuf::from("/tmp/talk.audio.json")
        );
    }

    #[tokio::test]
    async fn test_transcript_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"[{{"start": 1.0, "end": 4.0, "text": "from disk"}}]"#).unwrap();
        let segments = JsonTranscriptFile.transcribe(file.path()).await.unwrap();
        assert_eq!(segments[0].text, "from disk");
    }

    #[tokio::test]
    async fn test_missing_sibling_is_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let media = dir.path().join("talk.json");
        let series = JsonAudioFeatures::default().extract(&media).await.unwrap();
        assert!(series.is_none());
    }

    #[tokio::test]
    async fn test_mismatched_series_is_error() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"time_axis": [0.0, 1.0], "rms_energy": [0.1]}}"#).unwrap();
        let provider = JsonAudioFeatures::new(Some(file.path().to_path_buf()));
        let result = provider.extract(Path::new("ignored.json")).await;
        assert!(matches!(result, Err(DetectError::AudioFeatures(_))));
    }

    #[tokio::test]
    async fn test_explicit_series() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"time_axis": [0.0, 0.5], "rms_energy": [0.1, 0.2], "duration": 1.0}}"#
        )
        .unwrap();
        let provider = JsonAudioFeatures::new(Some(file.path().to_path_buf()));
        let series = provider
            .extract(Path::new("ignored.json"))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(series.len(), 2);
        assert_eq!(series.duration, Some(1.0));
    }
}
