use reqwest::Client;

use crate::{
    error::Result,
    types::{PlaylistItemsPage, PlaylistPage, Token},
};

/// An authenticated handle on the Spotify Web API.
///
/// Created once per run by the callback handler after a successful code
/// exchange and handed over to the export flow. The token is never persisted
/// or refreshed.
#[derive(Debug, Clone)]
pub struct SpotifyClient {
    http: Client,
    api_url: String,
    token: Token,
}

impl SpotifyClient {
    pub fn new(http: Client, api_url: impl Into<String>, token: Token) -> Self {
        Self {
            http,
            api_url: api_url.into(),
            token,
        }
    }

    /// Retrieves the first page of the current user's playlists.
    ///
    /// Uses the `/me/playlists` endpoint with Spotify's default page size.
    /// Libraries larger than one page are truncated; `next` is left for the
    /// caller to report.
    ///
    /// # Errors
    ///
    /// Network failures, non-success status codes and undecodable bodies are
    /// all returned as [`crate::ExportError::Api`].
    pub async fn current_user_playlists(&self) -> Result<PlaylistPage> {
        let api_url = format!("{uri}/me/playlists", uri = self.api_url);

        let page = self
            .http
            .get(&api_url)
            .bearer_auth(&self.token.access_token)
            .send()
            .await?
            .error_for_status()?
            .json::<PlaylistPage>()
            .await?;

        Ok(page)
    }

    /// Retrieves the items of one playlist, filtered by `market`.
    ///
    /// Only the first page of items is requested.
    pub async fn playlist_items(&self, playlist_id: &str, market: &str) -> Result<PlaylistItemsPage> {
        let api_url = format!(
            "{uri}/playlists/{id}/tracks",
            uri = self.api_url,
            id = playlist_id
        );

        let page = self
            .http
            .get(&api_url)
            .query(&[("market", market)])
            .bearer_auth(&self.token.access_token)
            .send()
            .await?
            .error_for_status()?
            .json::<PlaylistItemsPage>()
            .await?;

        Ok(page)
    }
}
