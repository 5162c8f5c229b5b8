//! Scored segment and highlight models.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::timestamp::format_seconds;

/// Maximum characters kept by [`Highlight::preview`].
const PREVIEW_CHARS: usize = 100;

/// A transcript segment with its composite score.
///
/// Only lives for the duration of a single detection call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ScoredSegment {
    pub start: f64,
    pub end: f64,
    pub text: String,
    pub score: f64,
    pub confidence: f64,
}

impl ScoredSegment {
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }
}

/// A selected, duration-corrected interval ready for clip rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Highlight {
    /// Start time in seconds
    pub start: f64,

    /// End time in seconds
    pub end: f64,

    /// Source text (concatenated segment texts for fallback highlights)
    pub text: String,

    /// Composite score (0.5 for fallback highlights)
    pub score: f64,

    /// Display title
    pub title: String,
}

impl Highlight {
    /// Create a new highlight.
    pub fn new(
        start: f64,
        end: f64,
        text: impl Into<String>,
        score: f64,
        title: impl Into<String>,
    ) -> Self {
        Self {
            start,
            end,
            text: text.into(),
            score,
            title: title.into(),
        }
    }

    /// Duration in seconds.
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }

    /// Half-open interval overlap test against `[start, end)`.
    pub fn overlaps(&self, start: f64, end: f64) -> bool {
        self.start < end && self.end > start
    }

    /// Text shortened for job summaries.
    pub fn preview(&self) -> String {
        if self.text.chars().count() > PREVIEW_CHARS {
            let head: String = self.text.chars().take(PREVIEW_CHARS).collect();
            format!("{}...", head)
        } else {
            self.text.clone()
        }
    }

    /// Start as `HH:MM:SS(.mmm)`.
    pub fn start_timestamp(&self) -> String {
        format_seconds(self.start)
    }

    /// End as `HH:MM:SS(.mmm)`.
    pub fn end_timestamp(&self) -> String {
        format_seconds(self.end)
    }
}

/// Detection output handed to the rendering side (highlights.json).
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct HighlightsData {
    /// Highlights in selection order (highest score first)
    pub highlights: Vec<Highlight>,

    /// Media the transcript came from
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    /// Whether the evenly spaced fallback produced these highlights
    #[serde(default)]
    pub fallback_used: bool,
}

impl HighlightsData {
    pub fn new(highlights: Vec<Highlight>) -> Self {
        Self {
            highlights,
            source: None,
            fallback_used: false,
        }
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn with_fallback_used(mut self, fallback_used: bool) -> Self {
        self.fallback_used = fallback_used;
        self
    }
}
