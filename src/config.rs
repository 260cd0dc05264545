//! Configuration management for GiveMeASong.
//!
//! The only setting the client needs is the base URL of the resolve/song API.
//! Values are looked up in this order:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults
//!
//! The document defaults (title and favicon restored whenever no song is shown)
//! live here as well so every host uses the same values.

use std::{env, path::PathBuf};

/// Environment variable holding the API base URL.
pub const API_URL_VAR: &str = "GMAS_API_URL";

/// Base URL used when [`API_URL_VAR`] is unset or blank.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Application name, also the document title when no song is displayed.
pub const APP_TITLE: &str = "GiveMeASong";

/// Favicon reference when no song cover overrides it.
pub const DEFAULT_FAVICON: &str = "/favicon.ico";

/// Loads environment variables from a `.env` file in the local data directory.
///
/// The file is looked up under the platform-specific local data directory:
/// - Linux: `~/.local/share/givemeasong/.env`
/// - macOS: `~/Library/Application Support/givemeasong/.env`
/// - Windows: `%LOCALAPPDATA%/givemeasong/.env`
///
/// The directory is created when missing. A missing `.env` file is not an error;
/// the defaults apply. Variables already present in the environment win over the
/// file.
///
/// # Errors
///
/// Returns an error string if the directory cannot be created or the file exists
/// but cannot be parsed.
pub async fn load_env() -> Result<(), String> {
    let path = env_path();
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if !path.is_file() {
        tracing::debug!(path = %path.display(), "no .env file, using defaults");
        return Ok(());
    }

    dotenv::from_path(&path).map_err(|e| e.to_string())
}

/// Returns the base URL of the resolve/song API.
///
/// Reads [`API_URL_VAR`]; falls back to [`DEFAULT_API_URL`] when the variable is
/// unset or blank.
pub fn api_url() -> String {
    match env::var(API_URL_VAR) {
        Ok(value) if !value.trim().is_empty() => value.trim().to_string(),
        _ => DEFAULT_API_URL.to_string(),
    }
}

fn env_path() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("givemeasong/.env");
    path
}
