use thiserror::Error;

use crate::{
    auth::AuthError, config::ConfigError, export::ExportError, history::HistoryError,
    speech::SpeechError, summarizer::GenerateError,
};

#[derive(Error, Debug)]
pub enum NotesError {
    #[error("Unrecognized video URL: {url}")]
    ResolutionFailure { url: String },

    #[error("Could not fetch transcript or video details for {url}: {reason}")]
    FetchFailure { url: String, reason: String },

    #[error("Summarization failed: {0}")]
    SummarizationFailure(#[from] GenerateError),

    #[error("Text-to-speech failed: {0}")]
    SynthesisFailure(#[from] SpeechError),

    #[error("Export failed: {0}")]
    ExportFailure(#[from] ExportError),

    #[error("History store failed: {0}")]
    PersistenceFailure(#[from] HistoryError),

    #[error("Unsupported language code: {0}")]
    UnsupportedLanguage(String),

    #[error("No summary available yet, generate notes first")]
    MissingSummary,

    #[error("Nothing to read aloud: {0} is not available in this session")]
    MissingText(&'static str),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Login failed: {0}")]
    Auth(#[from] AuthError),
}

pub type Result<T> = std::result::Result<T, NotesError>;
