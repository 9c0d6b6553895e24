//! Configuration management for the playlist exporter.
//!
//! Only two values are configurable: the Spotify client ID and client secret.
//! Everything else (the callback address, the redirect URI, the requested
//! scope and the market filter) is fixed. The Spotify endpoint URLs live on
//! [`Config`] so that tests can point the exporter at a local mock.
//!
//! The secrets are looked up in this order:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. `.env` file in the current working directory

use std::{env, path::PathBuf};

use crate::error::{ExportError, Result};

/// Environment variable holding the Spotify client ID.
pub const CLIENT_ID_VAR: &str = "SPOTIFY_ID";

/// Environment variable holding the Spotify client secret.
pub const CLIENT_SECRET_VAR: &str = "SPOTIFY_SECRET";

/// OAuth redirect URI. Must be registered verbatim in the Spotify developer
/// dashboard for the application.
pub const REDIRECT_URI: &str = "http://localhost:8080/callback";

/// Address the callback server binds to.
pub const SERVER_ADDRESS: &str = "0.0.0.0:8080";

/// Path of the OAuth callback route.
pub const CALLBACK_PATH: &str = "/callback";

/// Permission requested from the user.
pub const SCOPE: &str = "playlist-read-private";

/// Market used to filter playlist items.
pub const MARKET: &str = "ES";

pub const SPOTIFY_AUTH_URL: &str = "https://accounts.spotify.com/authorize";
pub const SPOTIFY_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
pub const SPOTIFY_API_URL: &str = "https://api.spotify.com/v1";

/// Loads environment variables from `.env` files.
///
/// Looks for a `.env` file in the platform-specific local data directory
/// under `spexport/.env` and then in the current working directory. Missing
/// files are not an error; variables that are already set in the process
/// environment are never overwritten.
///
/// # Directory Structure
///
/// - Linux: `~/.local/share/spexport/.env`
/// - macOS: `~/Library/Application Support/spexport/.env`
/// - Windows: `%LOCALAPPDATA%/spexport/.env`
pub fn load_env() {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("spexport/.env");
    if path.is_file() {
        dotenv::from_path(&path).ok();
    }

    dotenv::dotenv().ok();
}

/// Everything the export flow needs to talk to Spotify.
#[derive(Debug, Clone)]
pub struct Config {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_uri: String,
    pub server_addr: String,
    pub auth_url: String,
    pub token_url: String,
    pub api_url: String,
}

impl Config {
    /// Builds a configuration for the real Spotify endpoints.
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            redirect_uri: REDIRECT_URI.to_string(),
            server_addr: SERVER_ADDRESS.to_string(),
            auth_url: SPOTIFY_AUTH_URL.to_string(),
            token_url: SPOTIFY_TOKEN_URL.to_string(),
            api_url: SPOTIFY_API_URL.to_string(),
        }
    }

    /// Reads the client ID and secret from the environment.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::Config`] naming the first variable that is unset
    /// or empty.
    pub fn from_env() -> Result<Self> {
        let client_id = required_var(CLIENT_ID_VAR)?;
        let client_secret = required_var(CLIENT_SECRET_VAR)?;
        Ok(Self::new(client_id, client_secret))
    }
}

fn required_var(name: &str) -> Result<String> {
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ExportError::Config(format!("{} must be set", name))),
    }
}
