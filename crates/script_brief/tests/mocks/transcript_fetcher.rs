use std::sync::{Arc, Mutex};

use script_brief::yt::{TranscriptError, TranscriptFetcher, TranscriptSegment};

#[derive(Clone)]
pub struct MockTranscriptFetcher {
    pub segments: Vec<TranscriptSegment>,
    pub calls: Arc<Mutex<Vec<String>>>,
    pub fail_with: Option<TranscriptError>,
}

impl MockTranscriptFetcher {
    pub fn with_segments(texts: &[&str]) -> Self {
        let segments = texts
            .iter()
            .enumerate()
            .map(|(i, text)| TranscriptSegment {
                text: text.to_string(),
                start: i as f64,
                duration: 1.0,
            })
            .collect();

        Self {
            segments,
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: None,
        }
    }

    pub fn failing(error: TranscriptError) -> Self {
        Self {
            segments: Vec::new(),
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: Some(error),
        }
    }
}

impl TranscriptFetcher for MockTranscriptFetcher {
    async fn fetch(&self, video_id: &str) -> Result<Vec<TranscriptSegment>, TranscriptError> {
        self.calls.lock().unwrap().push(video_id.to_string());
        if let Some(ref error) = self.fail_with {
            return Err(error.clone());
        }
        Ok(self.segments.clone())
    }
}
