//! Greedy highlight selection.
//!
//! Candidates are visited best score first. Each one is repaired against the
//! duration window, then rejected if it overlaps any interval already taken.
//! Output keeps the visiting order (highest score first), not timeline order.

use reelcut_models::{Highlight, ScoredSegment};
use tracing::debug;

use crate::config::DetectionConfig;
use crate::metrics;
use crate::title::generate_title;

/// Fit `[start, end]` into `[min_duration, max_duration]`.
///
/// Short intervals grow by half the deficit on each side with the start
/// clamped at zero; the end is not clamped against media length. Long
/// intervals are truncated from the end only.
pub fn repair_duration(start: f64, end: f64, min_duration: f64, max_duration: f64) -> (f64, f64) {
    let duration = end - start;
    if duration < min_duration {
        let extension = (min_duration - duration) / 2.0;
        ((start - extension).max(0.0), end + extension)
    } else if duration > max_duration {
        (start, start + max_duration)
    } else {
        (start, end)
    }
}

/// Pick up to `config.max_clips` non-overlapping highlights.
pub fn select_highlights(mut scored: Vec<ScoredSegment>, config: &DetectionConfig) -> Vec<Highlight> {
    // Stable: equal scores keep transcript order
    scored.sort_by(|a, b| b.score.total_cmp(&a.score));

    let mut highlights: Vec<Highlight> = Vec::with_capacity(config.max_clips.min(scored.len()));
    let mut rejected = 0usize;

    for segment in scored {
        if highlights.len() >= config.max_clips {
            break;
        }

        let (start, end) = repair_duration(
            segment.start,
            segment.end,
            config.min_duration,
            config.max_duration,
        );

        if highlights.iter().any(|h| h.overlaps(start, end)) {
            debug!(
                start = start,
                end = end,
                score = segment.score,
                "Rejected overlapping candidate"
            );
            rejected += 1;
            continue;
        }

        let title = generate_title(&segment.text);
        highlights.push(Highlight::new(start, end, segment.text, segment.score, title));
    }

    metrics::record_rejected_candidates("overlap", rejected);

    highlights
}
