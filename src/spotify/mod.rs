//! # Spotify Integration Module
//!
//! The thin layer between the exporter and Spotify's services. It covers the
//! two halves of the OAuth 2.0 authorization code flow and the two Web API
//! endpoints the export needs.
//!
//! ## Authentication
//!
//! [`auth`] builds the authorization URL and exchanges the code received on
//! the callback for an access token:
//!
//! 1. **Authorization Request**: the user is sent to
//!    `https://accounts.spotify.com/authorize` with the client ID, redirect
//!    URI, requested scope and a `state` value
//! 2. **Local Callback**: Spotify redirects back to the local server with a
//!    code and the same `state`
//! 3. **Token Exchange**: the code is posted to `/api/token` together with the
//!    client credentials
//!
//! ## API Coverage
//!
//! [`client`] wraps the resulting token:
//!
//! - `GET /me/playlists` - First page of the user's playlists
//! - `GET /playlists/{id}/tracks` - First page of a playlist's items
//!
//! ## Error Handling
//!
//! Nothing here retries. Token endpoint failures surface as
//! [`crate::ExportError::TokenExchange`], Web API failures as
//! [`crate::ExportError::Api`].

pub mod auth;
pub mod client;

pub use client::SpotifyClient;
