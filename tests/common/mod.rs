#![allow(dead_code)]

use std::{
    collections::HashMap,
    io,
    sync::{Arc, Mutex},
};

use axum::{
    Form, Json, Router,
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use reqwest::Url;
use serde_json::{Value, json};
use spexport::{ExportError, browser::BrowserLauncher, config::Config};
use tokio::{net::TcpListener, task::JoinHandle};

pub const AUTH_CODE: &str = "valid-code";
pub const ACCESS_TOKEN: &str = "test-access-token";

/// Playlists and items served by the mock Spotify API.
#[derive(Clone, Default)]
pub struct Fixture {
    pub playlists: Vec<(String, String)>,
    pub items: HashMap<String, Vec<Value>>,
    pub reject_token: bool,
}

impl Fixture {
    pub fn with_playlist(mut self, id: &str, name: &str, items: Vec<Value>) -> Self {
        self.playlists.push((id.to_string(), name.to_string()));
        self.items.insert(id.to_string(), items);
        self
    }

    pub fn road_trip_and_chill() -> Self {
        Fixture::default()
            .with_playlist(
                "road",
                "Road Trip",
                vec![
                    track_item("Highway Star", &["Deep Purple"], "Machine Head", "1972-03-25"),
                    track_item("Roadrunner", &["The Modern Lovers", "Jonathan Richman"], "The Modern Lovers", "1976-08"),
                ],
            )
            .with_playlist(
                "chill",
                "Chill",
                vec![track_item("Teardrop", &["Massive Attack"], "Mezzanine", "1998")],
            )
    }
}

pub fn track_item(name: &str, artists: &[&str], album: &str, release_date: &str) -> Value {
    let artists: Vec<Value> = artists.iter().map(|a| json!({ "name": a })).collect();
    json!({
        "added_at": "2024-01-01T00:00:00Z",
        "track": {
            "name": name,
            "artists": artists,
            "album": { "name": album, "release_date": release_date }
        }
    })
}

fn authorized(headers: &HeaderMap) -> bool {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v == format!("Bearer {}", ACCESS_TOKEN))
}

async fn token(
    State(fixture): State<Arc<Fixture>>,
    headers: HeaderMap,
    Form(form): Form<HashMap<String, String>>,
) -> Response {
    let has_basic = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.starts_with("Basic "));
    let valid = !fixture.reject_token
        && has_basic
        && form.get("grant_type").map(String::as_str) == Some("authorization_code")
        && form.get("code").map(String::as_str) == Some(AUTH_CODE);

    if !valid {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "invalid_grant", "error_description": "Invalid authorization code" })),
        )
            .into_response();
    }

    Json(json!({
        "access_token": ACCESS_TOKEN,
        "token_type": "Bearer",
        "scope": "playlist-read-private",
        "expires_in": 3600,
        "refresh_token": "test-refresh-token"
    }))
    .into_response()
}

async fn playlists(State(fixture): State<Arc<Fixture>>, headers: HeaderMap) -> Response {
    if !authorized(&headers) {
        return StatusCode::UNAUTHORIZED.into_response();
    }

    let items: Vec<Value> = fixture
        .playlists
        .iter()
        .map(|(id, name)| json!({ "id": id, "name": name }))
        .collect();
    Json(json!({ "items": items, "total": items.len(), "next": null })).into_response()
}

async fn playlist_tracks(
    State(fixture): State<Arc<Fixture>>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Query(query): Query<HashMap<String, String>>,
) -> Response {
    if !authorized(&headers) {
        return StatusCode::UNAUTHORIZED.into_response();
    }
    if query.get("market").map(String::as_str) != Some("ES") {
        return StatusCode::BAD_REQUEST.into_response();
    }

    match fixture.items.get(&id) {
        Some(items) => Json(json!({ "items": items })).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

/// Starts a mock of the Spotify accounts and Web API endpoints and returns
/// its base URL.
pub async fn start_mock_spotify(fixture: Fixture) -> String {
    let app = Router::new()
        .route("/api/token", post(token))
        .route("/v1/me/playlists", get(playlists))
        .route("/v1/playlists/{id}/tracks", get(playlist_tracks))
        .with_state(Arc::new(fixture));

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}", addr)
}

/// Binds a callback listener on an ephemeral port and builds a config that
/// redirects to it and talks to the mock at `mock_url`.
pub async fn callback_listener(mock_url: &str) -> (Config, TcpListener) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();

    let mut config = Config::new("test-client", "test-secret");
    config.redirect_uri = format!("http://127.0.0.1:{}/callback", port);
    config.server_addr = format!("127.0.0.1:{}", port);
    config.auth_url = format!("{}/authorize", mock_url);
    config.token_url = format!("{}/api/token", mock_url);
    config.api_url = format!("{}/v1", mock_url);

    (config, listener)
}

/// Plays the part of the user and Spotify: instead of opening a window it
/// requests the redirect URI with a code and a state.
pub struct RedirectingBrowser {
    code: String,
    state: Option<String>,
    opened: Mutex<Option<String>>,
    redirect: Mutex<Option<JoinHandle<Option<(StatusCode, String)>>>>,
}

impl RedirectingBrowser {
    pub fn new() -> Self {
        Self {
            code: AUTH_CODE.to_string(),
            state: None,
            opened: Mutex::new(None),
            redirect: Mutex::new(None),
        }
    }

    pub fn with_state(mut self, state: &str) -> Self {
        self.state = Some(state.to_string());
        self
    }

    pub fn with_code(mut self, code: &str) -> Self {
        self.code = code.to_string();
        self
    }

    pub fn opened_url(&self) -> Option<String> {
        self.opened.lock().unwrap().clone()
    }

    /// Status and body the "browser" received from the callback server.
    pub async fn callback_response(&self) -> Option<(StatusCode, String)> {
        let handle = self.redirect.lock().unwrap().take()?;
        handle.await.ok().flatten()
    }
}

impl BrowserLauncher for RedirectingBrowser {
    fn open(&self, url: &str) -> spexport::Result<()> {
        *self.opened.lock().unwrap() = Some(url.to_string());

        let url = Url::parse(url).map_err(|e| ExportError::Config(e.to_string()))?;
        let params: HashMap<String, String> = url.query_pairs().into_owned().collect();
        let redirect_uri = params.get("redirect_uri").cloned().unwrap_or_default();
        let state = self
            .state
            .clone()
            .or_else(|| params.get("state").cloned())
            .unwrap_or_default();
        let code = self.code.clone();

        let handle = tokio::spawn(async move {
            let response = reqwest::Client::new()
                .get(&redirect_uri)
                .query(&[("code", code.as_str()), ("state", state.as_str())])
                .send()
                .await
                .ok()?;
            let status = StatusCode::from_u16(response.status().as_u16()).ok()?;
            let body = response.text().await.ok()?;
            Some((status, body))
        });
        *self.redirect.lock().unwrap() = Some(handle);

        Ok(())
    }
}

/// A browser that cannot be started. Records whether it was asked to open.
pub struct FailingBrowser {
    kind: io::ErrorKind,
    opened: Mutex<bool>,
}

impl FailingBrowser {
    pub fn new(kind: io::ErrorKind) -> Self {
        Self {
            kind,
            opened: Mutex::new(false),
        }
    }

    pub fn was_opened(&self) -> bool {
        *self.opened.lock().unwrap()
    }
}

impl BrowserLauncher for FailingBrowser {
    fn open(&self, _url: &str) -> spexport::Result<()> {
        *self.opened.lock().unwrap() = true;
        Err(spexport::browser::launch_error(io::Error::new(
            self.kind,
            "xdg-open: not found",
        )))
    }
}
