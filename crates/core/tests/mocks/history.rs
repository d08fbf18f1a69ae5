use std::{
    io,
    path::PathBuf,
    sync::{Arc, Mutex},
};

use async_trait::async_trait;
use ytnotes_core::history::{HistoryEntry, HistoryError, HistoryStore, UserData};

#[derive(Clone, Default)]
pub struct MockHistoryStore {
    pub data: Arc<Mutex<UserData>>,
    pub fail_appends: bool,
}

impl MockHistoryStore {
    pub fn failing() -> Self {
        Self {
            fail_appends: true,
            ..Self::default()
        }
    }

    pub fn entries(&self, username: &str) -> Vec<HistoryEntry> {
        self.data
            .lock()
            .unwrap()
            .get(username)
            .map(|r| r.history.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl HistoryStore for MockHistoryStore {
    async fn load(&self) -> Result<UserData, HistoryError> {
        Ok(self.data.lock().unwrap().clone())
    }

    async fn append(&self, username: &str, entry: HistoryEntry) -> Result<(), HistoryError> {
        if self.fail_appends {
            return Err(HistoryError::Io {
                path: PathBuf::from("user_data.json"),
                source: io::Error::new(io::ErrorKind::PermissionDenied, "read-only"),
            });
        }
        self.data
            .lock()
            .unwrap()
            .entry(username.to_string())
            .or_default()
            .history
            .push(entry);
        Ok(())
    }
}
