use reqwest::{Client, Url};

use crate::{
    config::{self, Config},
    error::{ExportError, Result},
    types::Token,
};

/// Builds the Spotify authorization URL the user has to visit.
///
/// The URL requests the `playlist-read-private` scope and carries the
/// `state` value that the callback handler later compares against.
///
/// # Arguments
///
/// * `config` - Client ID, redirect URI and authorization endpoint
/// * `state` - Anti-CSRF value echoed back by Spotify on the redirect
///
/// # Errors
///
/// Returns [`ExportError::Config`] when the configured authorization endpoint
/// is not a valid URL.
///
/// # Example
///
/// ```
/// let url = authorize_url(&config, "k2Jd8s0aQm1xTzPe")?;
/// // https://accounts.spotify.com/authorize?client_id=...&response_type=code&...
/// ```
pub fn authorize_url(config: &Config, state: &str) -> Result<Url> {
    Url::parse_with_params(
        &config.auth_url,
        &[
            ("client_id", config.client_id.as_str()),
            ("response_type", "code"),
            ("redirect_uri", config.redirect_uri.as_str()),
            ("scope", config::SCOPE),
            ("state", state),
        ],
    )
    .map_err(|e| ExportError::Config(format!("Invalid authorization URL: {}", e)))
}

/// Exchanges an authorization code for an access token.
///
/// Completes the authorization code flow by posting the code received on the
/// callback to Spotify's token endpoint. The client credentials are sent with
/// HTTP Basic authentication.
///
/// # Arguments
///
/// * `http` - HTTP client used for the request
/// * `config` - Client credentials, redirect URI and token endpoint
/// * `code` - Authorization code from the callback query string
///
/// # Errors
///
/// Every failure, whether a network error, a rejected code or a malformed
/// response, is reported as [`ExportError::TokenExchange`]. When Spotify
/// rejects the code the response body is included in the message.
///
/// # Security Note
///
/// The authorization code is single-use and expires quickly. The exchange
/// should happen immediately after receiving the code.
pub async fn exchange_code(http: &Client, config: &Config, code: &str) -> Result<Token> {
    let response = http
        .post(&config.token_url)
        .basic_auth(&config.client_id, Some(&config.client_secret))
        .form(&[
            ("grant_type", "authorization_code"),
            ("code", code),
            ("redirect_uri", config.redirect_uri.as_str()),
        ])
        .send()
        .await
        .map_err(|e| ExportError::TokenExchange(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(ExportError::TokenExchange(format!("{}: {}", status, body)));
    }

    response
        .json::<Token>()
        .await
        .map_err(|e| ExportError::TokenExchange(e.to_string()))
}
