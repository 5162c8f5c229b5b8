//! Evenly spaced highlights for when scoring fails.
//!
//! The transcript span is cut into `max_clips` windows of
//! `clamp(span / max_clips, min_duration, max_duration)` seconds separated by
//! a fixed gap. Each window collects the text of the segments lying fully
//! inside it; windows with no text are skipped.

use reelcut_models::{Highlight, Transcript, TranscriptSegment};
use tracing::debug;

use crate::config::DetectionConfig;
use crate::error::DetectResult;
use crate::scorer::validate_timestamps;

/// Gap inserted between consecutive fallback windows, in seconds.
pub const FALLBACK_GAP_SECS: f64 = 10.0;

/// Score assigned to every fallback highlight.
pub const FALLBACK_SCORE: f64 = 0.5;

/// Build fallback highlights, numbered `Highlight 1..=max_clips`.
///
/// Returns an empty list for an empty transcript. Malformed timestamps are
/// the one error this path surfaces.
pub fn fallback_highlights(
    transcript: &[TranscriptSegment],
    config: &DetectionConfig,
) -> DetectResult<Vec<Highlight>> {
    let (transcript_start, transcript_end) = match transcript.span() {
        Some(span) => span,
        None => return Ok(Vec::new()),
    };
    if config.max_clips == 0 {
        return Ok(Vec::new());
    }
    validate_timestamps(transcript)?;

    let total_duration = transcript_end - transcript_start;
    let window = config
        .max_duration
        .min(config.min_duration.max(total_duration / config.max_clips as f64));

    let mut highlights = Vec::with_capacity(config.max_clips.min(transcript.len()));
    let mut cursor = transcript_start;

    for n in 1..=config.max_clips {
        let start = cursor;
        let end = (start + window).min(transcript_end);

        let mut text = String::new();
        for segment in transcript
            .iter()
            .filter(|s| s.start >= start && s.end <= end)
        {
            text.push_str(&segment.text);
            text.push(' ');
        }
        let text = text.trim();

        if !text.is_empty() {
            highlights.push(Highlight::new(
                start,
                end,
                text,
                FALLBACK_SCORE,
                format!("Highlight {}", n),
            ));
        }

        cursor = end + FALLBACK_GAP_SECS;
        if cursor >= transcript_end {
            break;
        }
    }

    debug!(
        windows = highlights.len(),
        window_secs = window,
        "Built fallback highlights"
    );

    Ok(highlights)
}
