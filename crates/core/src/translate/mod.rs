//! # Translation
//!
//! Summaries are translated chunk by chunk so that no single request
//! exceeds the service's input ceiling. A failed translation never loses
//! the summary: the caller gets [`TranslationResult::Degraded`] with the
//! original text instead.

mod chunk;
mod google;
pub mod languages;

pub use chunk::{MAX_CHUNK_CHARS, chunk_text};
pub use google::GoogleTranslate;
pub use languages::{LANGUAGES, Language};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TranslateError {
    #[error("HTTP error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Translation service error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Unexpected translation response: {0}")]
    Malformed(String),

    #[error("Text of {len} characters exceeds the {max} character limit")]
    TooLong { len: usize, max: usize },
}

#[async_trait]
pub trait Translator: Send + Sync {
    async fn translate(&self, text: &str, target: &str) -> Result<String, TranslateError>;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TranslationResult {
    Translated {
        text: String,
        language: String,
    },
    Degraded {
        text: String,
        language: String,
        reason: String,
    },
}

impl TranslationResult {
    pub fn text(&self) -> &str {
        match self {
            Self::Translated { text, .. } | Self::Degraded { text, .. } => text,
        }
    }

    /// The language that was asked for.
    pub fn language(&self) -> &str {
        match self {
            Self::Translated { language, .. } | Self::Degraded { language, .. } => language,
        }
    }

    /// Language the text is actually written in, for reading it aloud.
    pub fn spoken_language(&self) -> &str {
        match self {
            Self::Translated { language, .. } => language,
            Self::Degraded { .. } => "en",
        }
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self, Self::Degraded { .. })
    }
}

/// Translates `text` into `language`, one chunk at a time.
///
/// Blank chunks are skipped and the translated chunks are joined with a
/// blank line. Any failed chunk degrades the whole result.
#[tracing::instrument(skip(translator, text), fields(chars = text.chars().count()))]
pub async fn translate_text(
    translator: &dyn Translator,
    text: &str,
    language: &str,
) -> TranslationResult {
    let mut translated = Vec::new();

    for chunk in chunk_text(text, MAX_CHUNK_CHARS) {
        if chunk.trim().is_empty() {
            continue;
        }

        match translator.translate(&chunk, language).await {
            Ok(t) => translated.push(t),
            Err(e) => {
                tracing::warn!(error = %e, "Translation failed, keeping original text");
                return TranslationResult::Degraded {
                    text: text.to_string(),
                    language: language.to_string(),
                    reason: e.to_string(),
                };
            }
        }
    }

    TranslationResult::Translated {
        text: translated.join("\n\n"),
        language: language.to_string(),
    }
}
