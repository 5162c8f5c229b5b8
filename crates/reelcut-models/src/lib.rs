//! Shared data models for the Reelcut highlight engine.
//!
//! This crate provides Serde-serializable types for:
//! - Time-stamped transcript segments
//! - Audio energy series aligned by time
//! - Scored segments and selected highlights
//! - Timestamp formatting for clip rendering

pub mod audio;
pub mod highlight;
pub mod timestamp;
pub mod transcript;

// Re-export common types
pub use audio::{AudioFeatureError, AudioFeatureSeries};
pub use highlight::{Highlight, HighlightsData, ScoredSegment};
pub use timestamp::format_seconds;
pub use transcript::{Transcript, TranscriptSegment};
