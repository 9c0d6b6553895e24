use std::sync::Arc;

use axum::{Extension, Router, routing::get};
use reqwest::Client;
use tokio::{
    net::TcpListener,
    sync::{Mutex, oneshot},
};

use crate::{
    api,
    config::{self, Config},
    error::{ExportError, Result},
    spotify::SpotifyClient,
    warning,
};

/// Outcome of the callback, sent exactly once to the waiting export flow.
pub type AuthOutcome = Result<SpotifyClient>;

/// State shared between the export flow and the callback handler for one
/// authorization attempt.
///
/// The sender half of the handoff channel is taken by the first callback
/// request; any later request finds it gone.
pub struct AuthContext {
    pub config: Config,
    pub state: String,
    pub http: Client,
    sender: Mutex<Option<oneshot::Sender<AuthOutcome>>>,
}

impl AuthContext {
    pub fn new(
        config: Config,
        state: String,
        http: Client,
    ) -> (Self, oneshot::Receiver<AuthOutcome>) {
        let (tx, rx) = oneshot::channel();
        let ctx = Self {
            config,
            state,
            http,
            sender: Mutex::new(Some(tx)),
        };
        (ctx, rx)
    }

    pub async fn take_sender(&self) -> Option<oneshot::Sender<AuthOutcome>> {
        self.sender.lock().await.take()
    }
}

/// Binds the callback listener.
pub async fn bind(addr: &str) -> Result<TcpListener> {
    TcpListener::bind(addr).await.map_err(ExportError::Server)
}

pub fn router(ctx: Arc<AuthContext>) -> Router {
    Router::new()
        .route(config::CALLBACK_PATH, get(api::callback))
        .fallback(api::unexpected)
        .layer(Extension(ctx))
}

/// Serves the callback routes until the process exits.
///
/// If serving fails the context is dropped along with the router, which
/// closes the handoff channel and wakes the waiting export flow.
pub async fn start_api_server(listener: TcpListener, ctx: Arc<AuthContext>) {
    if let Err(e) = axum::serve(listener, router(ctx)).await {
        warning!("Callback server stopped: {}", e);
    }
}
