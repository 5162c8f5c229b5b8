//! Clip sink that reports render requests instead of encoding video.

use std::sync::Mutex;

use async_trait::async_trait;
use reelcut_highlights::{ClipSink, DetectError, DetectResult};
use reelcut_models::Highlight;
use tracing::info;

/// A render request derived from one highlight.
#[derive(Debug, Clone, PartialEq)]
pub struct ClipRequest {
    pub number: usize,
    pub title: String,
    pub start: String,
    pub end: String,
    pub duration: f64,
}

impl ClipRequest {
    pub fn from_highlight(number: usize, highlight: &Highlight) -> Self {
        Self {
            number,
            title: highlight.title.clone(),
            start: highlight.start_timestamp(),
            end: highlight.end_timestamp(),
            duration: highlight.duration(),
        }
    }
}

/// Logs every highlight as a clip request and keeps the list.
#[derive(Debug, Default)]
pub struct LoggingClipSink {
    requests: Mutex<Vec<ClipRequest>>,
}

impl LoggingClipSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn requests(&self) -> Vec<ClipRequest> {
        self.requests
            .lock()
            .map(|r| r.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl ClipSink for LoggingClipSink {
    async fn accept(&self, number: usize, highlight: &Highlight) -> DetectResult<()> {
        let request = ClipRequest::from_highlight(number, highlight);
        info!(
            clip = request.number,
            start = %request.start,
            end = %request.end,
            duration = request.duration,
            title = %request.title,
            text = %highlight.preview(),
            "Clip queued"
        );

        self.requests
            .lock()
            .map_err(|_| DetectError::clip_sink("request list poisoned"))?
            .push(request);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_records_requests() {
        let sink = LoggingClipSink::new();
        let highlight = Highlight::new(65.0, 95.5, "text", 0.7, "A Title");
        sink.accept(1, &highlight).await.unwrap();

        let requests = sink.requests();
        assert_eq!(
            requests,
            vec![ClipRequest {
                number: 1,
                title: "A Title".to_string(),
                start: "00:01:05".to_string(),
                end: "00:01:35.500".to_string(),
                duration: 30.5,
            }]
        );
    }
}
