//! Command-line configuration.

use std::path::PathBuf;

use clap::Parser;
use reelcut_highlights::DetectionConfig;

/// Detect highlight intervals in a transcript.
#[derive(Debug, Clone, Parser)]
#[command(name = "reelcut", version, about)]
pub struct CliConfig {
    /// Transcript JSON: a segment array or an object with a `segments` array
    pub transcript: PathBuf,

    /// Audio feature JSON (`time_axis`, `rms_energy`). Defaults to
    /// `<transcript stem>.audio.json` next to the transcript when present
    #[arg(long)]
    pub audio_features: Option<PathBuf>,

    /// Skip audio features even if a file is present
    #[arg(long, default_value_t = false)]
    pub no_audio: bool,

    /// Write highlights JSON here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Maximum highlights to return
    #[arg(long)]
    pub max_clips: Option<usize>,

    /// Minimum highlight duration in seconds
    #[arg(long)]
    pub min_duration: Option<f64>,

    /// Maximum highlight duration in seconds
    #[arg(long)]
    pub max_duration: Option<f64>,

    /// Print Prometheus metrics to stderr on exit
    #[arg(long, default_value_t = false)]
    pub print_metrics: bool,

    /// Emit JSON logs
    #[arg(long, default_value_t = false)]
    pub json_logs: bool,
}

impl CliConfig {
    /// Detection bounds: flags win over `REELCUT_*` variables, which win
    /// over defaults.
    pub fn detection_config(&self) -> DetectionConfig {
        let defaults = DetectionConfig::from_env();
        DetectionConfig {
            max_clips: self.max_clips.unwrap_or(defaults.max_clips),
            min_duration: self.min_duration.unwrap_or(defaults.min_duration),
            max_duration: self.max_duration.unwrap_or(defaults.max_duration),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CliConfig::parse_from(["reelcut", "talk.json"]);
        assert_eq!(config.transcript, PathBuf::from("talk.json"));
        assert!(config.audio_features.is_none());
        assert!(!config.no_audio);
    }

    #[test]
    fn test_detection_overrides() {
        let config = CliConfig::parse_from([
            "reelcut",
            "talk.json",
            "--max-clips",
            "5",
            "--min-duration",
            "15",
            "--max-duration",
            "45.5",
        ]);
        let detection = config.detection_config();
        assert_eq!(detection.max_clips, 5);
        assert!((detection.min_duration - 15.0).abs() < f64::EPSILON);
        assert!((detection.max_duration - 45.5).abs() < f64::EPSILON);
    }
}
