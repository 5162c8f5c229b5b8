//! Command-line front end for the highlight engine.
//!
//! This crate provides:
//! - CLI configuration (flags over `REELCUT_*` environment over defaults)
//! - File-backed transcript and audio feature providers
//! - A clip sink that reports render requests
//! - Tracing setup

pub mod config;
pub mod logging;
pub mod providers;
pub mod sink;

pub use config::CliConfig;
pub use providers::{parse_transcript, JsonAudioFeatures, JsonTranscriptFile};
pub use sink::{ClipRequest, LoggingClipSink};
