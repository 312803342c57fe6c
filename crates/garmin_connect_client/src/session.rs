//! Session-credential lifecycle: restore, login fallback, persistence.

use crate::GarminError;
use crate::config::Config;
use crate::http_client::GarminClient;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// The persisted token bundle.
///
/// Only `access_token` is interpreted; every other field the login endpoint
/// returned is carried through the flattened map so the bundle round-trips
/// opaquely.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct SessionCredential {
    pub access_token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<i64>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Why a persisted session could not be restored. Every variant leads to
/// the same place (a fresh login); the tag exists for log lines and tests.
#[derive(Debug, Error)]
pub enum RestoreError {
    #[error("no session file at {}", .0.display())]
    Missing(PathBuf),
    #[error("session file unreadable: {0}")]
    Unreadable(std::io::Error),
    #[error("session file corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// Read and parse the credential bundle at `path`.
pub fn restore_session(path: &Path) -> Result<SessionCredential, RestoreError> {
    let raw = std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            RestoreError::Missing(path.to_path_buf())
        } else {
            RestoreError::Unreadable(e)
        }
    })?;
    Ok(serde_json::from_str(&raw)?)
}

/// Persist the credential bundle, overwriting any previous one.
pub fn save_session(credential: &SessionCredential, path: &Path) -> Result<(), GarminError> {
    let raw = serde_json::to_string_pretty(credential)?;
    std::fs::write(path, raw)?;
    Ok(())
}

/// Produce an authenticated client, restoring the persisted session when
/// possible and falling back to a single interactive login.
///
/// A restored session is validated with a profile fetch before use; any
/// failure along the restore path drops through to the login branch, which
/// requires the credential pair from [`Config`] and persists the fresh
/// bundle on success. A rejected login is fatal.
pub async fn ensure_session(config: &Config) -> Result<GarminClient, GarminError> {
    match restore_session(&config.session_path) {
        Ok(credential) => {
            let client = GarminClient::new(&config.base_url, credential);
            match client.social_profile().await {
                Ok(profile) => {
                    info!("resumed session for {}", profile_label(&profile));
                    return Ok(client);
                }
                Err(e) => info!("persisted session rejected ({e}), logging in"),
            }
        }
        Err(reason) => debug!("no session to restore: {reason}"),
    }

    let (username, password) = config.credentials()?;
    let client = GarminClient::login(&config.base_url, username, password).await?;
    save_session(client.credential(), &config.session_path)?;
    info!(
        "logged in as {username}, session saved to {}",
        config.session_path.display()
    );
    Ok(client)
}

fn profile_label(profile: &crate::SocialProfile) -> &str {
    profile
        .display_name
        .as_deref()
        .or(profile.user_name.as_deref())
        .unwrap_or("unknown user")
}
