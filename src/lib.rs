//! Statify Listening Analytics Library
//!
//! This library powers a small Spotify analytics service. It authenticates a
//! listener through the Spotify OAuth flow, scores their top tracks across the
//! three listening-history windows, and lays the result out as an orbit scene
//! together with a shareable summary card.
//!
//! # Modules
//!
//! - `aggregate` - Merging of the ranked windows, listen score and obscurity rating
//! - `api` - HTTP handlers exposed by the service
//! - `config` - Configuration management and environment variables
//! - `presenter` - Orbit layout, genre colors, selection state and summary card
//! - `server` - Router assembly and the listening loop
//! - `spotify` - Spotify Web API client implementation
//! - `types` - Data structures and type definitions
//! - `utils` - Utility functions and helpers
//!
//! # Example
//!
//! ```
//! use statify::{config, server};
//!
//! #[tokio::main]
//! async fn main() -> statify::Res<()> {
//!     config::load_env(None).await?;
//!     let config = config::Config::from_env()?;
//!     server::start_api_server(config).await
//! }
//! ```

pub mod aggregate;
pub mod api;
pub mod config;
pub mod presenter;
pub mod server;
pub mod spotify;
pub mod types;
pub mod utils;

/// A convenient Result type alias for operations that may fail.
///
/// Provides a standard error handling pattern for the plumbing around the
/// service (startup, configuration loading, binding the listener) using a
/// boxed dynamic error trait object. Request-level code uses the concrete
/// error types from [`spotify::ApiError`] and [`config::ConfigError`].
///
/// # Type Parameters
///
/// - `T` - The success type returned on successful operations
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// Creates a formatted output line with a distinctive blue "o" indicator
/// followed by the provided message. Used for general information and
/// status updates throughout the service.
///
/// # Example
///
/// ```
/// info!("Listening on {}", addr);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// # Example
///
/// ```
/// success!("Configuration loaded");
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Creates a formatted error output with a red "!" indicator and immediately
/// terminates the program with exit code 1. Only used during startup: once
/// the server is accepting requests, failures are reported with
/// [`warning!`] and the process keeps running.
///
/// # Example
///
/// ```
/// error!("Failed to load configuration: {}", e);
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Used for recoverable issues, most notably failed upstream calls inside a
/// request handler. The request fails, the process does not.
///
/// # Example
///
/// ```
/// warning!("Failed to fetch tracks: {}", e);
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
