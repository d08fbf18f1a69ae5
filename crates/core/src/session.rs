//! # Session orchestration
//!
//! [`NotesPipeline`] runs each user-facing operation against an explicit
//! [`SessionContext`]. Every operation reads what it needs from the context
//! and writes its result back only once it has fully succeeded, so a failed
//! step never leaves a half-updated session behind.

use std::{fmt, sync::Arc};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::{
    cache::ContentCache,
    content::{ContentFetcher, TranscriptResult, UnavailableReason},
    error::{NotesError, Result},
    export::{self, ExportArtifact, ExportFormat},
    history::{HistoryEntry, HistoryStore},
    speech::{AudioArtifact, SpeechSynthesizer},
    summarizer::Summarizer,
    translate::{self, TranslationResult, Translator, languages},
    video::VideoReference,
};

/// Everything a single user's session has produced so far.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionContext {
    pub session_id: Uuid,
    pub username: String,
    pub youtube_link: Option<String>,
    pub video: Option<VideoReference>,
    pub content: Option<TranscriptResult>,
    pub summary: Option<String>,
    pub translation: Option<TranslationResult>,
}

impl SessionContext {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            session_id: Uuid::new_v4(),
            username: username.into(),
            youtube_link: None,
            video: None,
            content: None,
            summary: None,
            translation: None,
        }
    }

    /// Transcript, or the title and description used in its place.
    pub fn transcript(&self) -> Option<&str> {
        self.content.as_ref().and_then(TranscriptResult::text)
    }

    pub fn thumbnail_url(&self) -> Option<String> {
        self.video.as_ref().map(VideoReference::thumbnail_url)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpeechTarget {
    Transcript,
    Summary,
    Translation,
}

impl SpeechTarget {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Transcript => "transcript",
            Self::Summary => "summary",
            Self::Translation => "translated summary",
        }
    }
}

impl fmt::Display for SpeechTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Error)]
#[error("Notes pipeline is missing its {0}")]
pub struct MissingComponent(&'static str);

pub struct NotesPipeline {
    fetcher: ContentFetcher,
    summarizer: Summarizer,
    translator: Box<dyn Translator>,
    speech: SpeechSynthesizer,
    history: Arc<dyn HistoryStore>,
    cache: Option<ContentCache>,
    refresh: bool,
}

#[derive(Default)]
pub struct NotesPipelineBuilder {
    fetcher: Option<ContentFetcher>,
    summarizer: Option<Summarizer>,
    translator: Option<Box<dyn Translator>>,
    speech: Option<SpeechSynthesizer>,
    history: Option<Arc<dyn HistoryStore>>,
    cache: Option<ContentCache>,
    refresh: bool,
}

impl NotesPipelineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fetcher(mut self, fetcher: ContentFetcher) -> Self {
        self.fetcher = Some(fetcher);
        self
    }

    pub fn summarizer(mut self, summarizer: Summarizer) -> Self {
        self.summarizer = Some(summarizer);
        self
    }

    pub fn translator(mut self, translator: impl Translator + 'static) -> Self {
        self.translator = Some(Box::new(translator));
        self
    }

    pub fn speech(mut self, speech: SpeechSynthesizer) -> Self {
        self.speech = Some(speech);
        self
    }

    pub fn history(mut self, store: impl HistoryStore + 'static) -> Self {
        self.history = Some(Arc::new(store));
        self
    }

    pub fn cache(mut self, cache: ContentCache) -> Self {
        self.cache = Some(cache);
        self
    }

    /// Ignore cached content and fetch again (the result is still cached).
    pub fn refresh(mut self, refresh: bool) -> Self {
        self.refresh = refresh;
        self
    }

    pub fn build(self) -> std::result::Result<NotesPipeline, MissingComponent> {
        Ok(NotesPipeline {
            fetcher: self.fetcher.ok_or(MissingComponent("content fetcher"))?,
            summarizer: self.summarizer.ok_or(MissingComponent("summarizer"))?,
            translator: self.translator.ok_or(MissingComponent("translator"))?,
            speech: self.speech.ok_or(MissingComponent("speech synthesizer"))?,
            history: self.history.ok_or(MissingComponent("history store"))?,
            cache: self.cache,
            refresh: self.refresh,
        })
    }
}

impl NotesPipeline {
    pub fn builder() -> NotesPipelineBuilder {
        NotesPipelineBuilder::new()
    }

    /// Fetches, summarizes and records notes for `url`.
    ///
    /// On success the context is replaced with the new video's state. A
    /// history write failure is reported after the context is updated.
    #[tracing::instrument(skip(self, ctx), fields(session = %ctx.session_id, user = %ctx.username))]
    pub async fn generate_notes(&self, ctx: &mut SessionContext, url: &str) -> Result<()> {
        let content = match self.fetch(url).await {
            TranscriptResult::Unavailable(UnavailableReason::UnrecognizedUrl) => {
                return Err(NotesError::ResolutionFailure { url: url.into() });
            }
            TranscriptResult::Unavailable(reason) => {
                return Err(NotesError::FetchFailure {
                    url: url.into(),
                    reason: reason.to_string(),
                });
            }
            content => content,
        };

        let text = content.text().unwrap_or_default();
        let summary = self.summarizer.summarize(text).await?;

        *ctx = SessionContext {
            session_id: ctx.session_id,
            username: ctx.username.clone(),
            youtube_link: Some(url.to_string()),
            video: VideoReference::resolve(url),
            content: Some(content),
            summary: Some(summary.clone()),
            translation: None,
        };
        tracing::info!("Notes generated");

        self.history
            .append(&ctx.username, HistoryEntry::now(url, summary))
            .await?;

        Ok(())
    }

    async fn fetch(&self, url: &str) -> TranscriptResult {
        let Some(cache) = &self.cache else {
            return self.fetcher.fetch(url).await;
        };

        if !self.refresh {
            match cache.load(url).await {
                Ok(Some(content)) => {
                    tracing::debug!("Using cached content");
                    return content;
                }
                Ok(None) => {}
                Err(e) => tracing::warn!(error = %e, "Ignoring unreadable content cache"),
            }
        }

        let content = self.fetcher.fetch(url).await;
        if let Err(e) = cache.save(url, &content).await {
            tracing::warn!(error = %e, "Failed to cache fetched content");
        }
        content
    }

    /// Translates the current summary into `language` (a code or a display
    /// name from the language table).
    #[tracing::instrument(skip(self, ctx), fields(session = %ctx.session_id))]
    pub async fn translate<'a>(
        &self,
        ctx: &'a mut SessionContext,
        language: &str,
    ) -> Result<&'a TranslationResult> {
        let summary = ctx.summary.as_deref().ok_or(NotesError::MissingSummary)?;
        let language = languages::lookup(language)
            .ok_or_else(|| NotesError::UnsupportedLanguage(language.to_string()))?;

        let result =
            translate::translate_text(self.translator.as_ref(), summary, language.code).await;

        Ok(ctx.translation.insert(result))
    }

    /// Reads the targeted text aloud. Transcript and summary are spoken in
    /// English, a translation in its own language.
    #[tracing::instrument(skip(self, ctx), fields(session = %ctx.session_id))]
    pub async fn speak(
        &self,
        ctx: &SessionContext,
        target: SpeechTarget,
        speed: f32,
    ) -> Result<AudioArtifact> {
        let (text, lang) = match target {
            SpeechTarget::Transcript => (ctx.transcript(), "en"),
            SpeechTarget::Summary => (ctx.summary.as_deref(), "en"),
            SpeechTarget::Translation => match &ctx.translation {
                Some(t) => (Some(t.text()), t.spoken_language()),
                None => (None, "en"),
            },
        };

        let text = text
            .filter(|t| !t.trim().is_empty())
            .ok_or(NotesError::MissingText(target.label()))?;

        Ok(self.speech.synthesize(text, lang, speed).await?)
    }

    pub fn export(&self, ctx: &SessionContext, format: ExportFormat) -> Result<ExportArtifact> {
        let summary = ctx.summary.as_deref().ok_or(NotesError::MissingSummary)?;

        export::export(summary, format)
            .inspect_err(|e| tracing::error!(error = %e, %format, "Export failed"))
            .map_err(NotesError::from)
    }

    /// All recorded notes for `username`, oldest first.
    pub async fn history(&self, username: &str) -> Result<Vec<HistoryEntry>> {
        Ok(self.history.history(username).await?)
    }
}
