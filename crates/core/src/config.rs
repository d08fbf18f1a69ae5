use std::path::PathBuf;

use thiserror::Error;

use crate::auth::StaticCredentials;

pub const GEMINI_API_KEY_VAR: &str = "GEMINI_API_KEY";
pub const HISTORY_PATH_VAR: &str = "YTNOTES_HISTORY_PATH";
pub const YOUTUBE_API_KEY_VAR: &str = "YOUTUBE_API_KEY";
pub const USERNAME_VAR: &str = "YTNOTES_USERNAME";
pub const PASSWORD_VAR: &str = "YTNOTES_PASSWORD";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing API key: {0} environment variable is not set")]
    MissingApiKey(&'static str),

    #[error("No data directory available, set YTNOTES_HISTORY_PATH")]
    NoDataDir,
}

/// Runtime settings read from the environment (and a `.env` file, if any).
///
/// The model API key is looked up on demand with [`Settings::gemini_api_key`],
/// so commands that never call the model work without one.
#[derive(Clone)]
pub struct Settings {
    pub youtube_api_key: Option<String>,
    pub history_path: PathBuf,
    pub credentials: Option<StaticCredentials>,
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        match dotenvy::dotenv() {
            Err(e) if !e.not_found() => tracing::warn!(error = %e, "Failed to load .env file"),
            _ => {}
        }

        let history_path = match non_empty_var(HISTORY_PATH_VAR) {
            Some(path) => PathBuf::from(path),
            None => default_history_path().ok_or(ConfigError::NoDataDir)?,
        };

        let credentials = match (non_empty_var(USERNAME_VAR), non_empty_var(PASSWORD_VAR)) {
            (Some(username), Some(password)) => Some(StaticCredentials::new(username, password)),
            _ => None,
        };

        Ok(Self {
            youtube_api_key: non_empty_var(YOUTUBE_API_KEY_VAR),
            history_path,
            credentials,
        })
    }

    pub fn gemini_api_key(&self) -> Result<String, ConfigError> {
        non_empty_var(GEMINI_API_KEY_VAR).ok_or(ConfigError::MissingApiKey(GEMINI_API_KEY_VAR))
    }
}

pub fn default_history_path() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join("ytnotes").join("user_data.json"))
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_history_path_layout() {
        if let Some(path) = default_history_path() {
            assert!(path.ends_with("ytnotes/user_data.json"));
        }
    }
}
