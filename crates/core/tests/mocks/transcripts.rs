use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use ytnotes_core::{
    VideoReference,
    content::{TranscriptError, TranscriptSnippet, TranscriptSource},
};

#[derive(Clone)]
enum Failure {
    Disabled,
    NotFound,
    Service(String),
}

#[derive(Clone)]
pub struct MockTranscripts {
    pub snippets: Vec<TranscriptSnippet>,
    pub calls: Arc<Mutex<Vec<String>>>,
    fail_with: Option<Failure>,
}

impl MockTranscripts {
    pub fn new(lines: &[&str]) -> Self {
        let snippets = lines
            .iter()
            .enumerate()
            .map(|(i, text)| TranscriptSnippet {
                text: text.to_string(),
                start: i as f64 * 2.0,
                duration: 2.0,
            })
            .collect();

        Self {
            snippets,
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: None,
        }
    }

    pub fn disabled() -> Self {
        Self {
            fail_with: Some(Failure::Disabled),
            ..Self::new(&[])
        }
    }

    pub fn not_found() -> Self {
        Self {
            fail_with: Some(Failure::NotFound),
            ..Self::new(&[])
        }
    }

    pub fn failing(msg: &str) -> Self {
        Self {
            fail_with: Some(Failure::Service(msg.to_string())),
            ..Self::new(&[])
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl TranscriptSource for MockTranscripts {
    async fn fetch(
        &self,
        video: &VideoReference,
    ) -> Result<Vec<TranscriptSnippet>, TranscriptError> {
        self.calls.lock().unwrap().push(video.to_string());

        match &self.fail_with {
            None => Ok(self.snippets.clone()),
            Some(Failure::Disabled) => Err(TranscriptError::Disabled(video.to_string())),
            Some(Failure::NotFound) => Err(TranscriptError::NotFound {
                video_id: video.to_string(),
                languages: vec!["en".into()],
            }),
            Some(Failure::Service(msg)) => Err(TranscriptError::Service(msg.clone())),
        }
    }
}
