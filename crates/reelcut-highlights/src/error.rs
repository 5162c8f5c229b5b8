//! Error types for highlight detection.

use thiserror::Error;

/// Result type for detection operations.
pub type DetectResult<T> = Result<T, DetectError>;

/// Errors that can occur while detecting highlights.
#[derive(Debug, Error)]
pub enum DetectError {
    #[error("Invalid timestamps on segment {index}: start={start}, end={end}")]
    InvalidTimestamps { index: usize, start: f64, end: f64 },

    #[error("Non-finite {feature} on segment {index}")]
    NonFiniteFeature { index: usize, feature: &'static str },

    #[error("Non-finite score on segment {index}")]
    NonFiniteScore { index: usize },

    #[error("Invalid detection config: {0}")]
    InvalidConfig(String),

    #[error("Transcript unavailable: {0}")]
    Transcript(String),

    #[error("Audio features unavailable: {0}")]
    AudioFeatures(String),

    #[error("Clip sink rejected highlight: {0}")]
    ClipSink(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl DetectError {
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    pub fn transcript(msg: impl Into<String>) -> Self {
        Self::Transcript(msg.into())
    }

    pub fn audio_features(msg: impl Into<String>) -> Self {
        Self::AudioFeatures(msg.into())
    }

    pub fn clip_sink(msg: impl Into<String>) -> Self {
        Self::ClipSink(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}
