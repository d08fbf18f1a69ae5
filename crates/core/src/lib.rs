pub mod auth;
pub mod cache;
pub mod config;
pub mod content;
pub mod error;
pub mod export;
pub mod format;
pub mod history;
mod http;
pub mod session;
pub mod speech;
pub mod summarizer;
pub mod translate;
pub mod video;
pub mod youtube;

pub use auth::{AuthError, CredentialVerifier, Identity, StaticCredentials, TRIAL_USERNAME};
pub use cache::{ContentCache, get_root_cache_dir};
pub use config::{ConfigError, Settings};
pub use content::{ContentFetcher, TranscriptResult, UnavailableReason};
pub use error::{NotesError, Result};
pub use export::{ExportArtifact, ExportFormat, export_by_name};
pub use format::{format_history_readable, format_translation_readable};
pub use history::{HistoryEntry, HistoryStore, JsonFileHistoryStore};
pub use session::{NotesPipeline, NotesPipelineBuilder, SessionContext, SpeechTarget};
pub use speech::{AudioArtifact, GoogleTts, SpeechSynthesizer};
pub use summarizer::{GeminiClient, Summarizer};
pub use translate::{GoogleTranslate, TranslationResult};
pub use video::VideoReference;
pub use youtube::{WatchPageTranscripts, YouTubeDataApi};
