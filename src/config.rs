//! Configuration management for the catalog client.
//!
//! Values come from environment variables, optionally seeded from `.env`
//! files. The lookup order is:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory (`<data_local_dir>/spotcat/.env`)
//! 3. `.env` file in the working directory
//! 4. Built-in defaults for the endpoint URLs
//!
//! Credentials have no default. They are read either from the combined
//! `SPOTIFY_CREDENTIALS` (`id:secret`) or from the pair `SPOTIFY_CLIENT_ID` /
//! `SPOTIFY_CLIENT_SECRET`; the combined form wins when both are set.

use std::{env, path::PathBuf};

use tracing::debug;

use crate::{
    error::{Error, Result},
    spotify::ClientCredentials,
};

pub const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";
pub const DEFAULT_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";

/// Path of the `.env` file in the platform local data directory.
///
/// - Linux: `~/.local/share/spotcat/.env`
/// - macOS: `~/Library/Application Support/spotcat/.env`
/// - Windows: `%LOCALAPPDATA%/spotcat/.env`
pub fn env_file_path() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("spotcat/.env");
    path
}

/// Loads `.env` files into the process environment.
///
/// Missing files are not an error. Variables already set in the environment
/// are never overridden.
pub fn load_env() -> Result<()> {
    let path = env_file_path();
    if path.is_file() {
        dotenv::from_path(&path)
            .map_err(|e| Error::Config(format!("cannot load {}: {}", path.display(), e)))?;
        debug!("Loaded environment from {}", path.display());
    }

    match dotenv::dotenv() {
        Ok(path) => debug!("Loaded environment from {}", path.display()),
        Err(e) if e.not_found() => {}
        Err(e) => return Err(Error::Config(format!("cannot load .env: {e}"))),
    }

    Ok(())
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}

/// Returns the Spotify Web API base URL (`SPOTIFY_API_URL`).
pub fn spotify_apiurl() -> String {
    non_empty_var("SPOTIFY_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string())
}

/// Returns the OAuth token endpoint (`SPOTIFY_API_TOKEN_URL`).
pub fn spotify_apitoken_url() -> String {
    non_empty_var("SPOTIFY_API_TOKEN_URL").unwrap_or_else(|| DEFAULT_TOKEN_URL.to_string())
}

/// Builds the application credentials from the environment.
///
/// # Errors
///
/// [`Error::Config`] when neither `SPOTIFY_CREDENTIALS` nor both of
/// `SPOTIFY_CLIENT_ID` and `SPOTIFY_CLIENT_SECRET` are set.
pub fn credentials() -> Result<ClientCredentials> {
    if let Some(combined) = non_empty_var("SPOTIFY_CREDENTIALS") {
        return ClientCredentials::from_combined(&combined);
    }

    match (
        non_empty_var("SPOTIFY_CLIENT_ID"),
        non_empty_var("SPOTIFY_CLIENT_SECRET"),
    ) {
        (Some(id), Some(secret)) => ClientCredentials::new(&id, &secret),
        _ => Err(Error::Config(
            "set SPOTIFY_CREDENTIALS or both SPOTIFY_CLIENT_ID and SPOTIFY_CLIENT_SECRET"
                .to_string(),
        )),
    }
}
