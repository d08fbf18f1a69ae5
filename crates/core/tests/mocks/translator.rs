use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use ytnotes_core::translate::{TranslateError, Translator};

#[derive(Clone)]
enum Mode {
    Identity,
    Prefix(String),
    FailOnCall(usize),
}

/// Records `(text, target)` for every call.
#[derive(Clone)]
pub struct MockTranslator {
    pub calls: Arc<Mutex<Vec<(String, String)>>>,
    mode: Mode,
}

impl MockTranslator {
    pub fn identity() -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            mode: Mode::Identity,
        }
    }

    pub fn prefixed(prefix: &str) -> Self {
        Self {
            mode: Mode::Prefix(prefix.to_string()),
            ..Self::identity()
        }
    }

    /// Succeeds until the `n`th call (1-based), which fails.
    pub fn failing_on(n: usize) -> Self {
        Self {
            mode: Mode::FailOnCall(n),
            ..Self::identity()
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl Translator for MockTranslator {
    async fn translate(&self, text: &str, target: &str) -> Result<String, TranslateError> {
        let call = {
            let mut calls = self.calls.lock().unwrap();
            calls.push((text.to_string(), target.to_string()));
            calls.len()
        };

        match &self.mode {
            Mode::Identity => Ok(text.to_string()),
            Mode::Prefix(prefix) => Ok(format!("{prefix}{text}")),
            Mode::FailOnCall(n) if call >= *n => Err(TranslateError::Api {
                status: 429,
                message: "Too Many Requests".into(),
            }),
            Mode::FailOnCall(_) => Ok(text.to_string()),
        }
    }
}
