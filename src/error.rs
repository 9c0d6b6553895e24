use thiserror::Error;

/// Every way an export run can fail.
///
/// None of these are recovered from. They travel up to `main`, which logs the
/// message and exits with a non-zero status before anything reaches stdout.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Callback server error: {0}")]
    Server(#[source] std::io::Error),

    #[error("State mismatch: {received} != {expected}")]
    AuthStateMismatch { expected: String, received: String },

    #[error("Couldn't get token: {0}")]
    TokenExchange(String),

    #[error("Authorization was aborted before a token was delivered")]
    AuthAborted,

    #[error("Spotify API error: {0}")]
    Api(#[from] reqwest::Error),

    #[error("Playlist '{playlist}' contains an item without a track")]
    MissingTrack { playlist: String },

    #[error("Track '{track}' in playlist '{playlist}' has no artists")]
    MissingArtist { playlist: String, track: String },

    #[error("Unsupported platform: cannot open a browser")]
    UnsupportedPlatform,

    #[error("Failed to launch browser: {0}")]
    Launch(#[source] std::io::Error),

    #[error("JSON error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Failed to write output: {0}")]
    Output(#[source] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ExportError>;
