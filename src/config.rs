//! Configuration management for the Broadcast Log Replay CLI.
//!
//! This module handles loading and accessing configuration values from
//! environment variables and `.env` files. Spotify credentials and endpoint
//! URLs are gathered once into an [`AppConfig`] that is passed explicitly to
//! the components that need it; the broadcast-history API has its own small
//! accessors with sensible defaults.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults (where applicable)

use std::{env, path::PathBuf};

/// Loads environment variables from a `.env` file in the local data directory.
///
/// Creates the necessary directory structure if it doesn't exist and loads
/// environment variables from a `.env` file located in the platform-specific
/// local data directory under `replaycli/.env`. When that file is absent, any
/// `.env` in the working directory is picked up instead so the process
/// environment alone is also enough.
///
/// # Directory Structure
///
/// The function looks for the `.env` file in:
/// - Linux: `~/.local/share/replaycli/.env`
/// - macOS: `~/Library/Application Support/replaycli/.env`
/// - Windows: `%LOCALAPPDATA%/replaycli/.env`
///
/// # Errors
///
/// This function will return an error if:
/// - The parent directory cannot be created
/// - The `.env` file exists but cannot be read or parsed
pub async fn load_env() -> Result<(), String> {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("replaycli/.env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if path.is_file() {
        dotenv::from_path(&path).map_err(|e| e.to_string())?;
    } else {
        dotenv::dotenv().ok();
    }
    Ok(())
}

/// Resolved Spotify API configuration, materialized once from the environment
/// and passed by reference to the token provider and API calls.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub client_id: String,
    pub client_secret: String,
    pub scope: String,
    pub redirect_uri: String,
    pub auth_url: String,
    pub token_url: String,
    pub api_url: String,
    pub server_addr: String,
}

impl AppConfig {
    /// Builds the configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error naming the first missing variable. All of
    /// `SPOTIFY_API_AUTH_CLIENT_ID`, `SPOTIFY_API_AUTH_CLIENT_SECRET`,
    /// `SPOTIFY_API_AUTH_SCOPE`, `SPOTIFY_API_REDIRECT_URI`,
    /// `SPOTIFY_API_AUTH_URL`, `SPOTIFY_API_TOKEN_URL`, `SPOTIFY_API_URL`
    /// and `SERVER_ADDRESS` must be set.
    pub fn from_env() -> Result<Self, String> {
        Ok(AppConfig {
            client_id: require("SPOTIFY_API_AUTH_CLIENT_ID")?,
            client_secret: require("SPOTIFY_API_AUTH_CLIENT_SECRET")?,
            scope: require("SPOTIFY_API_AUTH_SCOPE")?,
            redirect_uri: require("SPOTIFY_API_REDIRECT_URI")?,
            auth_url: require("SPOTIFY_API_AUTH_URL")?,
            token_url: require("SPOTIFY_API_TOKEN_URL")?,
            api_url: require("SPOTIFY_API_URL")?,
            server_addr: require("SERVER_ADDRESS")?,
        })
    }
}

fn require(name: &str) -> Result<String, String> {
    env::var(name).map_err(|_| format!("{} must be set", name))
}

/// Returns the base URL of the broadcast-history API.
///
/// Defaults to the ABC Radio plays service when `STATION_API_URL` is unset.
pub fn station_api_url() -> String {
    env::var("STATION_API_URL")
        .unwrap_or_else(|_| "https://music.abcradio.net.au/api/v1".to_string())
}

/// Returns the identifier of the station whose log is replayed.
///
/// Defaults to `triplej` when `STATION_ID` is unset.
pub fn station_id() -> String {
    env::var("STATION_ID").unwrap_or_else(|_| "triplej".to_string())
}
