use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use ytnotes_core::summarizer::{GenerateError, TextGenerator};

#[derive(Clone)]
pub struct MockGenerator {
    pub response: String,
    pub prompts: Arc<Mutex<Vec<String>>>,
    pub fail_with: Option<String>,
}

impl MockGenerator {
    pub fn new(response: &str) -> Self {
        Self {
            response: response.to_string(),
            prompts: Arc::new(Mutex::new(Vec::new())),
            fail_with: None,
        }
    }

    pub fn failing(msg: &str) -> Self {
        Self {
            response: String::new(),
            prompts: Arc::new(Mutex::new(Vec::new())),
            fail_with: Some(msg.to_string()),
        }
    }

    pub fn call_count(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }

    pub fn last_prompt(&self) -> Option<String> {
        self.prompts.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl TextGenerator for MockGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, GenerateError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        if let Some(ref msg) = self.fail_with {
            return Err(GenerateError::Api {
                status: 500,
                message: msg.clone(),
            });
        }
        Ok(self.response.clone())
    }

    fn name(&self) -> &str {
        "mock-llm"
    }
}
