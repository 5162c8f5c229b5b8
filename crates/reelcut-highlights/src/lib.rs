//! Highlight selection engine.
//!
//! Turns a time-stamped transcript (plus optional audio energy) into a
//! ranked, non-overlapping, duration-bounded set of highlight intervals.
//!
//! # Architecture
//!
//! ```text
//! ┌────────────┐    ┌────────────┐    ┌────────────┐    ┌────────────┐
//! │ Transcript │───►│ Features   │───►│ Scorer     │───►│ Selector   │──► Highlights
//! └────────────┘    └────────────┘    └────────────┘    └────────────┘
//!                                           ▲
//! ┌────────────┐    ┌────────────┐          │ on error: evenly spaced
//! │ Audio RMS  │───►│ Aligner    │──────────┘ fallback windows
//! └────────────┘    └────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust
//! use reelcut_highlights::{detect_highlights, DetectionConfig};
//! use reelcut_models::TranscriptSegment;
//!
//! let transcript = vec![
//!     TranscriptSegment::new(0.0, 12.0, "welcome back everyone"),
//!     TranscriptSegment::new(50.0, 70.0, "here is the secret trick!"),
//! ];
//! let config = DetectionConfig::default().with_max_clips(1);
//! let highlights = detect_highlights(&transcript, None, &config).unwrap();
//! assert_eq!(highlights.len(), 1);
//! assert_eq!(highlights[0].title, "Here Is The Secret Trick");
//! ```

pub mod audio;
pub mod config;
pub mod detector;
pub mod error;
pub mod fallback;
pub mod features;
pub mod keywords;
pub mod metrics;
pub mod pipeline;
pub mod scorer;
pub mod selector;
pub mod title;

pub use config::{DetectionConfig, ScoringWeights};
pub use detector::{detect_highlights, Detection, DetectionPath, HighlightDetector};
pub use error::{DetectError, DetectResult};
pub use fallback::fallback_highlights;
pub use features::{extract_text_features, SegmentFeatures};
pub use keywords::KeywordSet;
pub use pipeline::{AudioFeatureProvider, ClipSink, HighlightPipeline, NoAudioFeatures, TranscriptProvider};
pub use scorer::SegmentScorer;
pub use selector::{repair_duration, select_highlights};
pub use title::generate_title;
