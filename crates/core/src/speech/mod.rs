//! # Speech synthesis
//!
//! Text is turned into MP3 audio that lives in a temporary file for as long
//! as the returned [`AudioArtifact`] is held.

mod google;

pub use google::GoogleTts;

use std::{
    io::{self, Write},
    path::{Path, PathBuf},
};

use async_trait::async_trait;
use tempfile::NamedTempFile;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SpeechError {
    #[error("Empty text passed to text-to-speech")]
    EmptyText,

    #[error("HTTP error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Speech service error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Speech service returned no audio")]
    EmptyAudio,

    #[error("Failed to write audio file: {0}")]
    Io(#[from] io::Error),
}

/// The engine only knows two speaking rates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpeechRate {
    Normal,
    Slow,
}

impl SpeechRate {
    pub fn from_speed(speed: f32) -> Self {
        if speed < 1.0 { Self::Slow } else { Self::Normal }
    }
}

#[async_trait]
pub trait SpeechEngine: Send + Sync {
    /// Returns MP3 bytes for `text` spoken in `lang`.
    async fn synthesize(
        &self,
        text: &str,
        lang: &str,
        rate: SpeechRate,
    ) -> Result<Vec<u8>, SpeechError>;
}

/// An MP3 file on disk, deleted when dropped.
#[derive(Debug)]
pub struct AudioArtifact {
    file: NamedTempFile,
    len: usize,
}

impl AudioArtifact {
    fn write(bytes: &[u8], dir: Option<&Path>) -> io::Result<Self> {
        let mut builder = tempfile::Builder::new();
        builder.prefix("ytnotes-").suffix(".mp3");
        let mut file = match dir {
            Some(dir) => builder.tempfile_in(dir)?,
            None => builder.tempfile()?,
        };
        file.write_all(bytes)?;
        file.flush()?;

        Ok(Self {
            file,
            len: bytes.len(),
        })
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn bytes(&self) -> io::Result<Vec<u8>> {
        std::fs::read(self.path())
    }

    /// Copies the audio somewhere that outlives this artifact.
    pub fn save_copy(&self, dest: impl AsRef<Path>) -> io::Result<u64> {
        std::fs::copy(self.path(), dest)
    }
}

pub struct SpeechSynthesizer {
    engine: Box<dyn SpeechEngine>,
    audio_dir: Option<PathBuf>,
}

impl SpeechSynthesizer {
    pub fn new(engine: impl SpeechEngine + 'static) -> Self {
        Self {
            engine: Box::new(engine),
            audio_dir: None,
        }
    }

    #[cfg(test)]
    fn in_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.audio_dir = Some(dir.into());
        self
    }

    #[tracing::instrument(skip(self, text), fields(chars = text.chars().count()))]
    pub async fn synthesize(
        &self,
        text: &str,
        lang: &str,
        speed: f32,
    ) -> Result<AudioArtifact, SpeechError> {
        if text.trim().is_empty() {
            return Err(SpeechError::EmptyText);
        }

        let rate = SpeechRate::from_speed(speed);
        let audio = self
            .engine
            .synthesize(text, lang, rate)
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Text-to-speech failed"))?;

        if audio.is_empty() {
            return Err(SpeechError::EmptyAudio);
        }

        let artifact = AudioArtifact::write(&audio, self.audio_dir.as_deref())?;
        tracing::debug!(path = %artifact.path().display(), bytes = artifact.len(), "Audio written");

        Ok(artifact)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedEngine(Result<Vec<u8>, u16>);

    #[async_trait]
    impl SpeechEngine for FixedEngine {
        async fn synthesize(
            &self,
            _: &str,
            _: &str,
            _: SpeechRate,
        ) -> Result<Vec<u8>, SpeechError> {
            self.0.clone().map_err(|status| SpeechError::Api {
                status,
                message: "unavailable".to_string(),
            })
        }
    }

    fn files_in(dir: &Path) -> usize {
        std::fs::read_dir(dir).unwrap().count()
    }

    #[test]
    fn test_speed_quantization() {
        assert_eq!(SpeechRate::from_speed(0.4), SpeechRate::Slow);
        assert_eq!(SpeechRate::from_speed(0.99), SpeechRate::Slow);
        assert_eq!(SpeechRate::from_speed(1.0), SpeechRate::Normal);
        assert_eq!(SpeechRate::from_speed(2.0), SpeechRate::Normal);
    }

    #[test]
    fn test_artifact_file_removed_on_drop() {
        let artifact = AudioArtifact::write(b"ID3fake", None).unwrap();
        let path = artifact.path().to_path_buf();

        assert!(path.exists());
        assert_eq!(path.extension().and_then(|e| e.to_str()), Some("mp3"));
        assert_eq!(artifact.bytes().unwrap(), b"ID3fake");

        drop(artifact);
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn test_failed_synthesis_leaves_no_file() {
        let dir = tempfile::tempdir().unwrap();

        let failing = SpeechSynthesizer::new(FixedEngine(Err(503))).in_dir(dir.path());
        assert!(matches!(
            failing.synthesize("hello", "en", 1.0).await,
            Err(SpeechError::Api { status: 503, .. })
        ));
        assert_eq!(files_in(dir.path()), 0);

        let silent = SpeechSynthesizer::new(FixedEngine(Ok(Vec::new()))).in_dir(dir.path());
        assert!(matches!(
            silent.synthesize("hello", "en", 1.0).await,
            Err(SpeechError::EmptyAudio)
        ));
        assert_eq!(files_in(dir.path()), 0);
    }

    #[tokio::test]
    async fn test_synthesized_audio_is_transient() {
        let dir = tempfile::tempdir().unwrap();
        let synth =
            SpeechSynthesizer::new(FixedEngine(Ok(b"ID3audio".to_vec()))).in_dir(dir.path());

        let artifact = synth.synthesize("hello", "en", 0.5).await.unwrap();
        assert_eq!(files_in(dir.path()), 1);
        assert_eq!(artifact.len(), 8);

        drop(artifact);
        assert_eq!(files_in(dir.path()), 0);
    }

    #[test]
    fn test_saved_copy_survives_drop() {
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("summary.mp3");

        let artifact = AudioArtifact::write(b"audio", None).unwrap();
        artifact.save_copy(&dest).unwrap();
        drop(artifact);

        assert_eq!(std::fs::read(&dest).unwrap(), b"audio");
    }
}
