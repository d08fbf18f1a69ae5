use thiserror::Error;

/// Username under which trial sessions are recorded.
pub const TRIAL_USERNAME: &str = "Trial User";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("Invalid username or password")]
    InvalidCredentials,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Identity {
    Registered(String),
    Trial,
}

impl Identity {
    pub fn username(&self) -> &str {
        match self {
            Identity::Registered(name) => name,
            Identity::Trial => TRIAL_USERNAME,
        }
    }
}

pub trait CredentialVerifier: Send + Sync {
    fn verify(&self, username: &str, password: &str) -> Result<Identity, AuthError>;
}

/// Accepts exactly one configured username and password.
#[derive(Clone)]
pub struct StaticCredentials {
    username: String,
    password: String,
}

impl StaticCredentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl std::fmt::Debug for StaticCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StaticCredentials")
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}

impl CredentialVerifier for StaticCredentials {
    fn verify(&self, username: &str, password: &str) -> Result<Identity, AuthError> {
        if username == self.username && password == self.password {
            Ok(Identity::Registered(username.to_string()))
        } else {
            Err(AuthError::InvalidCredentials)
        }
    }
}
