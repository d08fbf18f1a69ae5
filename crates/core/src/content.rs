//! # Content fetching
//!
//! Retrieves the text a summary is built from: the spoken transcript when
//! one exists, otherwise a small document synthesized from the video's
//! title and description.

use std::fmt;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::video::VideoReference;

/// A timed fragment of a transcript.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptSnippet {
    pub text: String,
    pub start: f64,
    pub duration: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoSnippet {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Error)]
pub enum TranscriptError {
    #[error("Transcripts are disabled for video {0}")]
    Disabled(String),

    #[error("No transcript found for video {video_id} in any of {languages:?}")]
    NotFound {
        video_id: String,
        languages: Vec<String>,
    },

    #[error("Transcript request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Transcript service error: {0}")]
    Service(String),
}

impl TranscriptError {
    /// Whether the video simply has no usable transcript, as opposed to the
    /// service failing.
    pub fn is_missing_transcript(&self) -> bool {
        matches!(self, Self::Disabled(_) | Self::NotFound { .. })
    }
}

#[derive(Debug, Error)]
pub enum MetadataError {
    #[error("Video {0} not found")]
    VideoNotFound(String),

    #[error("Missing API key for the video metadata service")]
    MissingApiKey,

    #[error("Metadata request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Metadata service error: {status} - {message}")]
    Api { status: u16, message: String },
}

#[async_trait]
pub trait TranscriptSource: Send + Sync {
    async fn fetch(&self, video: &VideoReference)
    -> Result<Vec<TranscriptSnippet>, TranscriptError>;
}

#[async_trait]
pub trait MetadataSource: Send + Sync {
    async fn snippet(&self, video: &VideoReference) -> Result<VideoSnippet, MetadataError>;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum UnavailableReason {
    UnrecognizedUrl,
    NoContent,
    ServiceError(String),
}

impl fmt::Display for UnavailableReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnrecognizedUrl => f.write_str("the URL is not a recognized video link"),
            Self::NoContent => f.write_str("no transcript or video details are available"),
            Self::ServiceError(message) => write!(f, "transcript error: {message}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TranscriptResult {
    Transcript(String),
    MetadataFallback(String),
    Unavailable(UnavailableReason),
}

impl TranscriptResult {
    /// The fetched text, if any.
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Transcript(text) | Self::MetadataFallback(text) => Some(text),
            Self::Unavailable(_) => None,
        }
    }

    pub fn is_available(&self) -> bool {
        self.text().is_some()
    }
}

/// Joins transcript fragments into one string.
pub fn join_snippets(snippets: &[TranscriptSnippet]) -> String {
    snippets
        .iter()
        .map(|s| s.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
        .trim()
        .to_string()
}

/// Builds the fallback document from a video's title and description.
pub fn metadata_document(snippet: &VideoSnippet) -> String {
    format!(
        "Video Title: {}\n\nDescription:\n{}",
        snippet.title.trim(),
        snippet.description.trim()
    )
    .trim()
    .to_string()
}

fn non_blank(text: String, wrap: fn(String) -> TranscriptResult) -> TranscriptResult {
    if text.trim().is_empty() {
        TranscriptResult::Unavailable(UnavailableReason::NoContent)
    } else {
        wrap(text.trim().to_string())
    }
}

pub struct ContentFetcher {
    transcripts: Box<dyn TranscriptSource>,
    metadata: Box<dyn MetadataSource>,
}

impl ContentFetcher {
    pub fn new(
        transcripts: impl TranscriptSource + 'static,
        metadata: impl MetadataSource + 'static,
    ) -> Self {
        Self {
            transcripts: Box::new(transcripts),
            metadata: Box::new(metadata),
        }
    }

    /// Fetches transcript text for `url`, falling back to title and
    /// description when the video has no transcript.
    #[tracing::instrument(skip(self))]
    pub async fn fetch(&self, url: &str) -> TranscriptResult {
        let Some(video) = VideoReference::resolve(url) else {
            tracing::info!("URL does not match any known video shape");
            return TranscriptResult::Unavailable(UnavailableReason::UnrecognizedUrl);
        };

        match self.transcripts.fetch(&video).await {
            Ok(snippets) => {
                tracing::debug!(count = snippets.len(), "Fetched transcript snippets");
                non_blank(join_snippets(&snippets), TranscriptResult::Transcript)
            }
            Err(e) if e.is_missing_transcript() => {
                tracing::info!(error = %e, "No transcript, falling back to video details");
                self.fetch_metadata(&video).await
            }
            Err(e) => {
                tracing::error!(error = %e, video_id = %video, "Failed to fetch transcript");
                TranscriptResult::Unavailable(UnavailableReason::ServiceError(e.to_string()))
            }
        }
    }

    async fn fetch_metadata(&self, video: &VideoReference) -> TranscriptResult {
        match self.metadata.snippet(video).await {
            Ok(snippet)
                if snippet.title.trim().is_empty() && snippet.description.trim().is_empty() =>
            {
                TranscriptResult::Unavailable(UnavailableReason::NoContent)
            }
            Ok(snippet) => non_blank(
                metadata_document(&snippet),
                TranscriptResult::MetadataFallback,
            ),
            Err(MetadataError::VideoNotFound(_)) => {
                TranscriptResult::Unavailable(UnavailableReason::NoContent)
            }
            Err(e) => {
                tracing::error!(error = %e, video_id = %video, "Failed to fetch video details");
                TranscriptResult::Unavailable(UnavailableReason::ServiceError(e.to_string()))
            }
        }
    }
}
