use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use ytnotes_core::speech::{SpeechEngine, SpeechError, SpeechRate};

#[derive(Clone)]
pub struct MockSpeechEngine {
    pub audio: Vec<u8>,
    pub calls: Arc<Mutex<Vec<(String, String, SpeechRate)>>>,
    pub fail_with: Option<String>,
}

impl MockSpeechEngine {
    pub fn new(audio: &[u8]) -> Self {
        Self {
            audio: audio.to_vec(),
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_with: None,
        }
    }

    pub fn failing(msg: &str) -> Self {
        Self {
            fail_with: Some(msg.to_string()),
            ..Self::new(&[])
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn last_call(&self) -> Option<(String, String, SpeechRate)> {
        self.calls.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl SpeechEngine for MockSpeechEngine {
    async fn synthesize(
        &self,
        text: &str,
        lang: &str,
        rate: SpeechRate,
    ) -> Result<Vec<u8>, SpeechError> {
        self.calls
            .lock()
            .unwrap()
            .push((text.to_string(), lang.to_string(), rate));

        if let Some(ref msg) = self.fail_with {
            return Err(SpeechError::Api {
                status: 503,
                message: msg.clone(),
            });
        }
        Ok(self.audio.clone())
    }
}
