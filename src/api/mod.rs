//! # API Module
//!
//! HTTP handlers for the local callback server that completes the Spotify
//! OAuth 2.0 authorization code flow.
//!
//! ## Endpoints
//!
//! - [`callback`] - Receives the redirect from Spotify's authorization server.
//!   Verifies the `state` parameter, exchanges the authorization code for an
//!   access token and hands the resulting client to the export flow. The
//!   browser sees `Login Completed!` on success and `403 Forbidden` when the
//!   state does not match or the exchange fails.
//! - [`unexpected`] - Fallback for every other path. Logs the request and
//!   answers with an empty `200 OK`; it never affects the export.
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use axum::{Extension, Router, routing::get};
//! use spexport::api::{callback, unexpected};
//!
//! let app = Router::new()
//!     .route("/callback", get(callback))
//!     .fallback(unexpected)
//!     .layer(Extension(ctx));
//! ```
//!
//! ## Related Modules
//!
//! - [`crate::server`] - Router construction and the shared [`crate::server::AuthContext`]
//! - [`crate::spotify`] - Token exchange and the authenticated client

mod callback;
mod unexpected;

pub use callback::callback;
pub use unexpected::unexpected;
