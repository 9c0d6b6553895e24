//! Spotify Playlist Exporter Library
//!
//! This library authenticates a single Spotify user through the OAuth 2.0
//! authorization code flow, fetches the user's playlists together with their
//! tracks and renders the result as JSON.
//!
//! # Modules
//!
//! - `api` - HTTP handlers for the local callback server
//! - `browser` - Opening the authorization URL in the default browser
//! - `config` - Configuration management and environment variables
//! - `error` - Error type shared by every stage of the export
//! - `export` - The sequential export flow
//! - `output` - JSON serialization of the exported playlists
//! - `server` - Local HTTP server for OAuth callbacks
//! - `spotify` - Spotify Web API client implementation
//! - `types` - Data structures and type definitions
//! - `utils` - Utility functions and helpers
//!
//! # Output streams
//!
//! Standard output carries nothing but the exported JSON document. Every
//! status message produced by the logging macros below is written to
//! standard error, so `spexport > playlists.json` yields a clean file.
//!
//! # Example
//!
//! ```
//! use spexport::{browser::SystemBrowser, config::{self, Config}, export, output};
//!
//! #[tokio::main]
//! async fn main() -> spexport::Result<()> {
//!     config::load_env();
//!     let config = Config::from_env()?;
//!     let playlists = export::run(&config, &SystemBrowser).await?;
//!     output::write_json(&playlists, std::io::stdout().lock())
//! }
//! ```

pub mod api;
pub mod browser;
pub mod config;
pub mod error;
pub mod export;
pub mod output;
pub mod server;
pub mod spotify;
pub mod types;
pub mod utils;

pub use error::{ExportError, Result};

/// Prints an informational message with a blue bullet point.
///
/// Creates a formatted line on standard error with a distinctive blue "o"
/// indicator followed by the provided message. Used for general information
/// and status updates throughout the application.
///
/// # Example
///
/// ```
/// info!("Waiting for authorization...");
/// info!("Found {} playlists", count);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// Creates a formatted line on standard error with a green "✓" indicator to
/// signify successful completion of an operation.
///
/// # Example
///
/// ```
/// success!("Authentication completed successfully");
/// success!("Exported {} playlists", count);
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Creates a formatted line on standard error with a red "!" indicator and
/// immediately terminates the program with exit code 1.
///
/// # Behavior
///
/// This macro exits the process. The export flow never calls it directly;
/// every failure travels back to `main` as an [`ExportError`], and `main` is
/// the single place where this macro turns an error into an exit status.
///
/// # Example
///
/// ```
/// error!("Failed to load configuration");
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Used for unusual situations that do not abort the export, such as a
/// second hit on the callback endpoint.
///
/// # Example
///
/// ```
/// warning!("Ignoring repeated callback");
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
