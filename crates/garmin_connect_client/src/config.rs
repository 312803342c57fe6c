use crate::GarminError;
use secrecy::SecretString;
use std::path::PathBuf;

pub const DEFAULT_BASE_URL: &str = "https://connectapi.garmin.com";
pub const SESSION_FILE_NAME: &str = ".garmin-session.json";

#[derive(Clone, Debug)]
pub struct Config {
    pub base_url: String,
    /// Where the opaque credential bundle is persisted between runs.
    pub session_path: PathBuf,
    pub username: Option<String>,
    pub password: Option<SecretString>,
}

impl Config {
    pub fn from_env() -> Result<Self, GarminError> {
        Self::from_env_with(|k| std::env::var(k).ok())
    }

    /// Testable helper that reads configuration values using the provided
    /// function. This avoids mutating global environment in tests and keeps
    /// `from_env()` small and safe.
    pub fn from_env_with<F>(mut get: F) -> Result<Self, GarminError>
    where
        F: FnMut(&str) -> Option<String>,
    {
        let base_url = get("GARMIN_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.into());
        let session_path = match get("GARMIN_SESSION_FILE") {
            Some(p) => PathBuf::from(p),
            None => match get("HOME") {
                Some(home) => PathBuf::from(home).join(SESSION_FILE_NAME),
                None => PathBuf::from(SESSION_FILE_NAME),
            },
        };
        let username = get("GARMIN_USERNAME").filter(|v| !v.is_empty());
        let password = get("GARMIN_PASSWORD")
            .filter(|v| !v.is_empty())
            .map(|v| SecretString::new(v.into()));
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            session_path,
            username,
            password,
        })
    }

    /// The login credential pair, required only when no persisted session
    /// can be restored.
    pub fn credentials(&self) -> Result<(&str, &SecretString), GarminError> {
        match (self.username.as_deref(), self.password.as_ref()) {
            (Some(u), Some(p)) => Ok((u, p)),
            _ => Err(GarminError::Config(
                "GARMIN_USERNAME and GARMIN_PASSWORD must be set".into(),
            )),
        }
    }
}
