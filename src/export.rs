use std::{sync::Arc, time::Duration};

use indicatif::{ProgressBar, ProgressStyle};
use reqwest::Client;
use tokio::net::TcpListener;

use crate::{
    browser::BrowserLauncher,
    config::{self, Config},
    error::{ExportError, Result},
    info,
    server::{self, AuthContext},
    spotify::{self, SpotifyClient},
    success,
    types::{Playlist, PlaylistItem, Track},
    utils, warning,
};

/// Runs the whole export: authorization followed by playlist retrieval.
///
/// Binds the callback listener on the configured address and then behaves
/// like [`run_with_listener`].
///
/// # Errors
///
/// Returns the first error encountered. Nothing is returned for playlists
/// that were fetched before the failure.
pub async fn run(config: &Config, browser: &impl BrowserLauncher) -> Result<Vec<Playlist>> {
    let listener = server::bind(&config.server_addr).await?;
    run_with_listener(config, listener, browser).await
}

/// Runs the export with an already bound callback listener.
pub async fn run_with_listener(
    config: &Config,
    listener: TcpListener,
    browser: &impl BrowserLauncher,
) -> Result<Vec<Playlist>> {
    let client = authorize(config, listener, browser).await?;
    fetch_playlists(&client, config::MARKET).await
}

/// Drives the OAuth 2.0 authorization code flow up to an authenticated client.
///
/// This function orchestrates the interactive part of the export:
/// 1. Generating a fresh `state` value
/// 2. Starting the local callback server on `listener`
/// 3. Opening the authorization URL in the user's browser
/// 4. Waiting for the callback handler to deliver the client
///
/// The wait has no timeout. A user who never completes the consent screen
/// leaves the process waiting until it is interrupted.
///
/// # Errors
///
/// - [`ExportError::UnsupportedPlatform`] or [`ExportError::Launch`] when the
///   browser cannot be started
/// - [`ExportError::AuthStateMismatch`] or [`ExportError::TokenExchange`] as
///   reported by the callback handler
/// - [`ExportError::AuthAborted`] when the callback server stops before
///   delivering anything
pub async fn authorize(
    config: &Config,
    listener: TcpListener,
    browser: &impl BrowserLauncher,
) -> Result<SpotifyClient> {
    let state = utils::generate_state();
    let auth_url = spotify::auth::authorize_url(config, &state)?;

    let (ctx, handoff) = AuthContext::new(config.clone(), state, Client::new());
    tokio::spawn(server::start_api_server(listener, Arc::new(ctx)));

    info!(
        "If browser window does not open, then visit the following site to complete auth: {}",
        auth_url
    );
    browser.open(auth_url.as_str())?;

    let client = handoff.await.map_err(|_| ExportError::AuthAborted)??;
    success!("Authentication successful!");

    Ok(client)
}

/// Fetches the user's playlists and the tracks of each one.
///
/// Playlists are deduplicated by ID, keeping the order in which Spotify
/// listed them. Tracks keep the order of the playlist.
///
/// # Errors
///
/// Any failed request, an item without a track or a track without artists
/// aborts the whole export.
pub async fn fetch_playlists(client: &SpotifyClient, market: &str) -> Result<Vec<Playlist>> {
    let pb = spinner("Fetching playlists...");
    let page = client.current_user_playlists().await;
    pb.finish_and_clear();

    let mut page = page?;
    if page.next.is_some() {
        warning!(
            "Only the first {} of {} playlists will be exported",
            page.items.len(),
            page.total.unwrap_or_default()
        );
    }

    utils::remove_duplicate_playlists(&mut page.items);
    info!("Found {} playlists", page.items.len());

    let mut playlists = Vec::with_capacity(page.items.len());
    for listed in page.items {
        let pb = spinner(&format!("Fetching tracks of {}...", listed.name));
        let items = client.playlist_items(&listed.id, market).await;
        pb.finish_and_clear();

        let tracks = items?
            .items
            .into_iter()
            .map(|item| project_track(&listed.name, item))
            .collect::<Result<Vec<Track>>>()?;

        info!("{} ({} tracks)", listed.name, tracks.len());
        playlists.push(Playlist {
            name: listed.name,
            tracks,
        });
    }

    Ok(playlists)
}

/// Reduces a playlist item to the exported track fields.
///
/// Only the first artist is kept.
pub fn project_track(playlist: &str, item: PlaylistItem) -> Result<Track> {
    let track = item.track.ok_or_else(|| ExportError::MissingTrack {
        playlist: playlist.to_string(),
    })?;

    let artist = track
        .artists
        .into_iter()
        .next()
        .ok_or_else(|| ExportError::MissingArtist {
            playlist: playlist.to_string(),
            track: track.name.clone(),
        })?;

    Ok(Track {
        name: track.name,
        artist_name: artist.name,
        album_name: track.album.name,
        release_date: track.album.release_date,
    })
}

fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}
