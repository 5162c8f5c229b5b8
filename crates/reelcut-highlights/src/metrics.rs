//! Detection metrics.
//!
//! Recorded through the `metrics` facade; the binary decides which recorder
//! (if any) is installed.

use metrics::{counter, histogram};

/// Metric names as constants for consistency.
pub mod names {
    pub const DETECTIONS_TOTAL: &str = "reelcut_detections_total";
    pub const DETECTION_DURATION_SECONDS: &str = "reelcut_detection_duration_seconds";
    pub const HIGHLIGHTS_SELECTED_TOTAL: &str = "reelcut_highlights_selected_total";
    pub const CANDIDATES_REJECTED_TOTAL: &str = "reelcut_candidates_rejected_total";
    pub const AUDIO_DEGRADED_TOTAL: &str = "reelcut_audio_degraded_total";
}

/// Record a finished detection call and which path produced it.
pub fn record_detection(path: &str, highlights: usize, duration_secs: f64) {
    let labels = [("path", path.to_string())];
    counter!(names::DETECTIONS_TOTAL, &labels).increment(1);
    counter!(names::HIGHLIGHTS_SELECTED_TOTAL, &labels).increment(highlights as u64);
    histogram!(names::DETECTION_DURATION_SECONDS, &labels).record(duration_secs);
}

/// Record candidates the selector skipped.
pub fn record_rejected_candidates(reason: &str, count: usize) {
    if count == 0 {
        return;
    }
    let labels = [("reason", reason.to_string())];
    counter!(names::CANDIDATES_REJECTED_TOTAL, &labels).increment(count as u64);
}

/// Record a detection that ran without the audio energy term.
pub fn record_audio_degraded(reason: &str) {
    let labels = [("reason", reason.to_string())];
    counter!(names::AUDIO_DEGRADED_TOTAL, &labels).increment(1);
}
