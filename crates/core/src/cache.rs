use std::{
    hash::{DefaultHasher, Hash, Hasher},
    path::{Path, PathBuf},
};

use thiserror::Error;
use tokio::fs;

use crate::content::TranscriptResult;

#[derive(Debug, Error)]
pub enum CacheError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn get_root_cache_dir() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("ytnotes")
}

/// Fetched video content, stored per URL under a cache root.
#[derive(Debug, Clone)]
pub struct ContentCache {
    root: PathBuf,
}

impl ContentCache {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Cache directory for a given URL
    pub fn dir_for(&self, url: &str) -> PathBuf {
        let mut hasher = DefaultHasher::new();
        url.hash(&mut hasher);
        self.root.join(hasher.finish().to_string())
    }

    pub fn content_path(&self, url: &str) -> PathBuf {
        self.dir_for(url).join("content.json")
    }

    /// Returns the cached content for `url`, if present.
    pub async fn load(&self, url: &str) -> Result<Option<TranscriptResult>, CacheError> {
        let path = self.content_path(url);
        let json = match fs::read_to_string(&path).await {
            Ok(json) => json,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        Ok(Some(serde_json::from_str(&json)?))
    }

    /// Stores successful fetches. Unavailable results are never cached.
    pub async fn save(&self, url: &str, content: &TranscriptResult) -> Result<bool, CacheError> {
        if !content.is_available() {
            return Ok(false);
        }

        fs::create_dir_all(self.dir_for(url)).await?;
        let pretty_json = serde_json::to_string_pretty(content)?;
        fs::write(self.content_path(url), &pretty_json).await?;

        Ok(true)
    }
}

impl Default for ContentCache {
    fn default() -> Self {
        Self::new(get_root_cache_dir())
    }
}
