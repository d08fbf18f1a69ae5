use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error("Nothing to summarize: the fetched text is empty")]
    EmptyInput,

    #[error("HTTP error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("The model returned no content")]
    EmptyResponse,
}

/// A single-shot text generation service.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, GenerateError>;

    fn name(&self) -> &str;
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    choices: Vec<CompletionChoice>,
}

#[derive(Debug, Deserialize)]
struct CompletionChoice {
    message: CompletionMessage,
}

#[derive(Debug, Deserialize)]
struct CompletionMessage {
    content: Option<String>,
}

/// Gemini, reached through its OpenAI-compatible chat completions endpoint.
pub struct GeminiClient {
    client: Client,
    api_key: String,
}

impl GeminiClient {
    const API_URL: &str =
        "https://generativelanguage.googleapis.com/v1beta/openai/chat/completions";
    const MODEL: &str = "gemini-flash-latest";

    pub fn new(api_key: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(120))
            .build()
            .unwrap_or_default();

        Self {
            client,
            api_key: api_key.into(),
        }
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String, GenerateError> {
        let resp = self
            .client
            .post(Self::API_URL)
            .bearer_auth(&self.api_key)
            .json(&serde_json::json!({
                "model": Self::MODEL,
                "messages": [
                    {
                        "role": "user",
                        "content": prompt,
                    },
                ],
            }))
            .send()
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to make http request"))?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let message = resp.text().await.unwrap_or_default();
            return Err(GenerateError::Api { status, message });
        }

        let response = resp.json::<CompletionResponse>().await?;

        response
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .filter(|content| !content.trim().is_empty())
            .ok_or(GenerateError::EmptyResponse)
    }

    fn name(&self) -> &str {
        "Gemini"
    }
}

/// Turns fetched video text into a summary with point-wise notes.
pub struct Summarizer {
    generator: Box<dyn TextGenerator>,
}

impl Summarizer {
    /// Input beyond this many characters is dropped before prompting.
    pub const MAX_INPUT_CHARS: usize = 12_000;

    pub const INSTRUCTION: &str = "You are a YouTube video summarizer. You will be taking the \
        transcript text and summarizing the entire video. Your response should have three parts: \
        first, the entire transcript of the video in the same language, a detailed summary of the \
        video in a large paragraph, and next to it, detailed notes in a point-wise format. Please \
        provide a paragraph of video summary and a point-wise notes in markdown format. Please \
        provide the summary of the text given here: ";

    pub fn new(generator: impl TextGenerator + 'static) -> Self {
        Self {
            generator: Box::new(generator),
        }
    }

    #[tracing::instrument(
        skip_all,
        fields(generator = self.generator.name(), chars = text.chars().count())
    )]
    pub async fn summarize(&self, text: &str) -> Result<String, GenerateError> {
        if text.trim().is_empty() {
            return Err(GenerateError::EmptyInput);
        }

        let prompt = build_prompt(Self::INSTRUCTION, text);

        self.generator
            .generate(&prompt)
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to summarize content"))
    }
}

/// Cuts `text` to at most `max_chars` characters.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

pub fn build_prompt(instruction: &str, text: &str) -> String {
    format!(
        "{instruction}\n\nTranscript:\n{}\n",
        truncate_chars(text, Summarizer::MAX_INPUT_CHARS)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_chars_counts_characters() {
        assert_eq!(truncate_chars("hello", 3), "hel");
        assert_eq!(truncate_chars("hello", 5), "hello");
        assert_eq!(truncate_chars("hello", 50), "hello");
        assert_eq!(truncate_chars("héllo wörld", 7), "héllo w");
        assert_eq!(truncate_chars("नमस्ते", 2), "नम");
    }

    #[test]
    fn test_prompt_is_truncated_to_limit() {
        let text = "a".repeat(Summarizer::MAX_INPUT_CHARS + 500);
        let prompt = build_prompt("INSTRUCTION", &text);

        assert!(prompt.starts_with("INSTRUCTION\n\nTranscript:\n"));
        let body = prompt
            .trim_start_matches("INSTRUCTION\n\nTranscript:\n")
            .trim_end();
        assert_eq!(body.chars().count(), Summarizer::MAX_INPUT_CHARS);
    }

    #[test]
    fn test_short_text_is_sent_whole() {
        let prompt = build_prompt("Summarize:", "short transcript");
        assert_eq!(prompt, "Summarize:\n\nTranscript:\nshort transcript\n");
    }
}
