use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use ytnotes_core::{
    VideoReference,
    content::{MetadataError, MetadataSource, VideoSnippet},
};

#[derive(Clone)]
pub struct MockMetadata {
    pub snippet: Option<VideoSnippet>,
    pub calls: Arc<Mutex<Vec<String>>>,
    pub fail_with: Option<String>,
}

impl MockMetadata {
    pub fn new(title: &str, description: &str) -> Self {
        Self {
            snippet: Some(VideoSnippet {
                title: title.to_string(),
                description: description.to_string(),
            }),
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: None,
        }
    }

    /// The video does not exist.
    pub fn missing() -> Self {
        Self {
            snippet: None,
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: None,
        }
    }

    pub fn failing(msg: &str) -> Self {
        Self {
            snippet: None,
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: Some(msg.to_string()),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl MetadataSource for MockMetadata {
    async fn snippet(&self, video: &VideoReference) -> Result<VideoSnippet, MetadataError> {
        self.calls.lock().unwrap().push(video.to_string());

        if let Some(ref msg) = self.fail_with {
            return Err(MetadataError::Api {
                status: 403,
                message: msg.clone(),
            });
        }
        self.snippet
            .clone()
            .ok_or_else(|| MetadataError::VideoNotFound(video.to_string()))
    }
}
