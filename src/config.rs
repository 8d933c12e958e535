//! Configuration management for the Statify service.
//!
//! This module handles loading and accessing configuration values from environment
//! variables and `.env` files. The values are read once at startup into a
//! [`Config`] which is then handed to the server and shared by every request.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. An explicit `--env-file`, or `.env` in the working directory
//! 3. `.env` file in the local data directory
//! 4. Application defaults (where applicable)

use std::{env, fmt, path::PathBuf};

use crate::aggregate::ScoreWeights;

pub const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";
pub const DEFAULT_ACCOUNTS_URL: &str = "https://accounts.spotify.com";
pub const DEFAULT_SERVER_ADDRESS: &str = "127.0.0.1:8888";

/// Loads environment variables from `.env` files.
///
/// When `env_file` is given only that file is read and a missing file is an
/// error. Otherwise a `.env` in the working directory is loaded if present,
/// followed by `statify/.env` in the platform-specific local data directory:
///
/// - Linux: `~/.local/share/statify/.env`
/// - macOS: `~/Library/Application Support/statify/.env`
/// - Windows: `%LOCALAPPDATA%/statify/.env`
///
/// Variables that are already set in the process environment are never
/// overwritten, so the first source to define a variable wins.
///
/// # Errors
///
/// Returns an error string if the explicit file cannot be read, if the data
/// directory cannot be created, or if an existing `.env` file fails to parse.
pub async fn load_env(env_file: Option<PathBuf>) -> Result<(), String> {
    if let Some(file) = env_file {
        dotenv::from_path(&file).map_err(|e| format!("{}: {}", file.display(), e))?;
        return Ok(());
    }

    let local = PathBuf::from(".env");
    if local.is_file() {
        dotenv::from_path(&local).map_err(|e| e.to_string())?;
    }

    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("statify/.env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if path.is_file() {
        dotenv::from_path(&path).map_err(|e| e.to_string())?;
    }
    Ok(())
}

#[derive(Debug)]
pub enum ConfigError {
    Missing(&'static str),
    Invalid(&'static str, String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Missing(name) => write!(f, "{} must be set", name),
            ConfigError::Invalid(name, reason) => write!(f, "{} is invalid: {}", name, reason),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Runtime configuration of the service.
///
/// All fields are public so tests can point the service at a mock upstream
/// without touching the process environment.
#[derive(Debug, Clone)]
pub struct Config {
    /// Client ID obtained when registering the application with Spotify.
    pub client_id: String,
    /// Client secret paired with `client_id`. Never logged.
    pub client_secret: String,
    /// Callback URL registered with Spotify, e.g. `http://localhost:8888/callback`.
    pub redirect_uri: String,
    /// Public URL of the front-end that receives the token after login.
    pub site_url: String,
    /// Base URL of the Spotify Web API.
    pub api_url: String,
    /// Base URL of the Spotify accounts service (authorize and token endpoints).
    pub accounts_url: String,
    /// Address the HTTP server binds to.
    pub server_address: String,
    pub weights: ScoreWeights,
}

impl Config {
    /// Reads the configuration from the process environment.
    ///
    /// Required: `SPOTIFY_CLIENT_ID`, `SPOTIFY_CLIENT_SECRET`,
    /// `SPOTIFY_REDIRECT_URI` and `SITE_URL`.
    ///
    /// Optional: `SPOTIFY_API_URL`, `SPOTIFY_ACCOUNTS_URL`, `SERVER_ADDRESS`
    /// and `STATIFY_SCORE_WEIGHTS` (three comma separated numbers for the
    /// short, medium and long windows, summing to 1).
    pub fn from_env() -> Result<Self, ConfigError> {
        let weights = match env::var("STATIFY_SCORE_WEIGHTS") {
            Ok(raw) => parse_weights(&raw)?,
            Err(_) => ScoreWeights::default(),
        };

        Ok(Config {
            client_id: required("SPOTIFY_CLIENT_ID")?,
            client_secret: required("SPOTIFY_CLIENT_SECRET")?,
            redirect_uri: required("SPOTIFY_REDIRECT_URI")?,
            site_url: required("SITE_URL")?,
            api_url: optional("SPOTIFY_API_URL", DEFAULT_API_URL),
            accounts_url: optional("SPOTIFY_ACCOUNTS_URL", DEFAULT_ACCOUNTS_URL),
            server_address: optional("SERVER_ADDRESS", DEFAULT_SERVER_ADDRESS),
            weights,
        })
    }
}

/// Parses a `short,medium,long` weight triple such as `0.3,0.35,0.35`.
pub fn parse_weights(raw: &str) -> Result<ScoreWeights, ConfigError> {
    let parts = raw
        .split(',')
        .map(|p| p.trim().parse::<f64>())
        .collect::<Result<Vec<f64>, _>>()
        .map_err(|e| ConfigError::Invalid("STATIFY_SCORE_WEIGHTS", e.to_string()))?;

    let [short, medium, long] = parts[..] else {
        return Err(ConfigError::Invalid(
            "STATIFY_SCORE_WEIGHTS",
            format!("expected 3 weights, got {}", parts.len()),
        ));
    };

    ScoreWeights::new(short, medium, long)
        .map_err(|reason| ConfigError::Invalid("STATIFY_SCORE_WEIGHTS", reason))
}

fn required(name: &'static str) -> Result<String, ConfigError> {
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ConfigError::Missing(name)),
    }
}

fn optional(name: &str, default: &str) -> String {
    env::var(name)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}
