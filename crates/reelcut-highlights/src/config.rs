//! Detection configuration.
//!
//! [`DetectionConfig`] bounds the selection (how many clips, how long);
//! [`ScoringWeights`] holds the fixed coefficients of the composite score.

use crate::error::{DetectError, DetectResult};

/// Default number of highlights requested per video.
pub const DEFAULT_MAX_CLIPS: usize = 3;

/// Default minimum highlight duration in seconds.
pub const DEFAULT_MIN_DURATION: f64 = 30.0;

/// Default maximum highlight duration in seconds.
pub const DEFAULT_MAX_DURATION: f64 = 60.0;

/// Selection bounds for one detection call.
#[derive(Debug, Clone, PartialEq)]
pub struct DetectionConfig {
    /// Maximum number of highlights returned
    pub max_clips: usize,
    /// Shorter candidates are extended symmetrically to this length
    pub min_duration: f64,
    /// Longer candidates are truncated from the end to this length
    pub max_duration: f64,
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            max_clips: DEFAULT_MAX_CLIPS,
            min_duration: DEFAULT_MIN_DURATION,
            max_duration: DEFAULT_MAX_DURATION,
        }
    }
}

impl DetectionConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Self {
        Self {
            max_clips: std::env::var("REELCUT_MAX_CLIPS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_MAX_CLIPS),
            min_duration: std::env::var("REELCUT_MIN_DURATION")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_MIN_DURATION),
            max_duration: std::env::var("REELCUT_MAX_DURATION")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_MAX_DURATION),
        }
    }

    /// Builder-style setter for the clip count.
    pub fn with_max_clips(mut self, max_clips: usize) -> Self {
        self.max_clips = max_clips;
        self
    }

    /// Builder-style setter for the duration window.
    pub fn with_duration_range(mut self, min_duration: f64, max_duration: f64) -> Self {
        self.min_duration = min_duration;
        self.max_duration = max_duration;
        self
    }

    /// Reject windows the selector cannot honor.
    pub fn validate(&self) -> DetectResult<()> {
        if !self.min_duration.is_finite() || !self.max_duration.is_finite() {
            return Err(DetectError::invalid_config("durations must be finite"));
        }
        if self.min_duration <= 0.0 || self.max_duration <= 0.0 {
            return Err(DetectError::invalid_config("durations must be positive"));
        }
        if self.min_duration > self.max_duration {
            return Err(DetectError::invalid_config(format!(
                "min_duration ({}) exceeds max_duration ({})",
                self.min_duration, self.max_duration
            )));
        }
        Ok(())
    }
}

/// Coefficients of the composite segment score.
///
/// Text-derived terms sum to 0.8, the audio term to 0.2.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoringWeights {
    pub engagement: f64,
    pub emotion: f64,
    pub question: f64,
    pub exclamation: f64,
    pub speaking_rate: f64,
    pub energy: f64,
    /// Upper bound on the normalized speaking rate
    pub speaking_rate_cap: f64,
    /// Mean RMS is multiplied by this before clamping to 1.0
    pub energy_gain: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            engagement: 0.3,
            emotion: 0.2,
            question: 0.1,
            exclamation: 0.1,
            speaking_rate: 0.1,
            energy: 0.2,
            speaking_rate_cap: 2.0,
            energy_gain: 10.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = DetectionConfig::default();
        assert_eq!(config.max_clips, 3);
        assert!((config.min_duration - 30.0).abs() < f64::EPSILON);
        assert!((config.max_duration - 60.0).abs() < f64::EPSILON);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = DetectionConfig::default()
            .with_max_clips(5)
            .with_duration_range(15.0, 45.0);
        assert_eq!(config.max_clips, 5);
        assert!((config.min_duration - 15.0).abs() < f64::EPSILON);
        assert!((config.max_duration - 45.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_validate_rejects_inverted_window() {
        let config = DetectionConfig::default().with_duration_range(60.0, 30.0);
        assert!(matches!(config.validate(), Err(DetectError::InvalidConfig(_))));
    }

    #[test]
    fn test_validate_rejects_non_positive() {
        let config = DetectionConfig::default().with_duration_range(0.0, 30.0);
        assert!(config.validate().is_err());
        let config = DetectionConfig::default().with_duration_range(10.0, f64::INFINITY);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_weights_favor_text() {
        let w = ScoringWeights::default();
        let text = w.engagement + w.emotion + w.question + w.exclamation + w.speaking_rate;
        assert!((text - 0.8).abs() < 1e-9);
        assert!((w.energy - 0.2).abs() < 1e-9);
    }
}
