//! # History store
//!
//! Durable per-user log of generated notes. The on-disk layout is one JSON
//! object keyed by username:
//!
//! ```json
//! { "alice": { "history": [ { "youtube_link": "...", "summary": "...", "timestamp": "2025-01-31 09:15:00" } ] } }
//! ```

use std::{
    collections::{BTreeMap, HashMap},
    io::{self, Write},
    path::{Path, PathBuf},
    sync::{Arc, LazyLock, PoisonError},
};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;
use tokio::sync::Mutex;

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One append lock per history file, shared by every store in the process.
static FILE_LOCKS: LazyLock<std::sync::Mutex<HashMap<PathBuf, Arc<Mutex<()>>>>> =
    LazyLock::new(Default::default);

fn file_lock(path: &Path) -> Arc<Mutex<()>> {
    let key = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
    FILE_LOCKS
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .entry(key)
        .or_default()
        .clone()
}

#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("History file {path} is not valid JSON: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub youtube_link: String,
    pub summary: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

impl HistoryEntry {
    /// Creates an entry stamped with the current local time.
    pub fn now(youtube_link: impl Into<String>, summary: impl Into<String>) -> Self {
        Self {
            youtube_link: youtube_link.into(),
            summary: summary.into(),
            timestamp: Some(chrono::Local::now().format(TIMESTAMP_FORMAT).to_string()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    #[serde(default)]
    pub history: Vec<HistoryEntry>,
    /// Fields written by other tools are kept as they are.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

pub type UserData = BTreeMap<String, UserRecord>;

#[async_trait]
pub trait HistoryStore: Send + Sync {
    async fn load(&self) -> Result<UserData, HistoryError>;

    async fn append(&self, username: &str, entry: HistoryEntry) -> Result<(), HistoryError>;

    /// Entries for `username`, oldest first.
    async fn history(&self, username: &str) -> Result<Vec<HistoryEntry>, HistoryError> {
        let mut data = self.load().await?;
        Ok(data.remove(username).map(|r| r.history).unwrap_or_default())
    }
}

/// History kept in a single JSON file.
///
/// Appends to the same file are serialized across every store in this
/// process. Separate processes writing the same file are not coordinated.
#[derive(Debug, Clone)]
pub struct JsonFileHistoryStore {
    path: PathBuf,
    lock: Arc<Mutex<()>>,
}

impl JsonFileHistoryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        Self {
            lock: file_lock(&path),
            path,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read(&self) -> Result<UserData, HistoryError> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(UserData::new()),
            Err(source) => {
                return Err(HistoryError::Io {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        serde_json::from_str(&content).map_err(|source| HistoryError::Malformed {
            path: self.path.clone(),
            source,
        })
    }

    async fn write(&self, data: &UserData) -> Result<(), HistoryError> {
        let json = serde_json::to_string_pretty(data).map_err(|source| HistoryError::Malformed {
            path: self.path.clone(),
            source,
        })?;

        let path = self.path.clone();
        tokio::task::spawn_blocking(move || write_atomic(&path, json.as_bytes()))
            .await
            .map_err(io::Error::other)
            .and_then(|res| res)
            .map_err(|source| HistoryError::Io {
                path: self.path.clone(),
                source,
            })
    }
}

#[async_trait]
impl HistoryStore for JsonFileHistoryStore {
    async fn load(&self) -> Result<UserData, HistoryError> {
        self.read()
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to load history"))
    }

    #[tracing::instrument(skip(self, entry))]
    async fn append(&self, username: &str, entry: HistoryEntry) -> Result<(), HistoryError> {
        let _guard = self.lock.lock().await;

        let mut data = self.read().await?;
        data.entry(username.to_string())
            .or_default()
            .history
            .push(entry);

        self.write(&data)
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to save history"))
    }
}

/// Writes to a temporary file next to `path` and renames it into place.
fn write_atomic(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir)?;

    let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
    tmp.write_all(bytes)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| e.error)?;

    Ok(())
}
