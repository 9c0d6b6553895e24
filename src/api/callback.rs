use std::{collections::HashMap, sync::Arc};

use axum::{Extension, extract::Query, http::StatusCode};

use crate::{
    error::ExportError,
    server::{AuthContext, AuthOutcome},
    spotify::{self, SpotifyClient},
    warning,
};

pub async fn callback(
    Query(params): Query<HashMap<String, String>>,
    Extension(ctx): Extension<Arc<AuthContext>>,
) -> (StatusCode, &'static str) {
    let Some(sender) = ctx.take_sender().await else {
        warning!("Ignoring repeated callback, login was already handled");
        return (StatusCode::CONFLICT, "Login already handled.");
    };

    let outcome = complete_auth(&ctx, &params).await;
    let response = match &outcome {
        Ok(_) => (StatusCode::OK, "Login Completed!"),
        Err(ExportError::AuthStateMismatch { .. }) => (StatusCode::FORBIDDEN, "State mismatch"),
        Err(_) => (StatusCode::FORBIDDEN, "Couldn't get token"),
    };

    if sender.send(outcome).is_err() {
        warning!("Export is no longer waiting for the login");
    }

    response
}

async fn complete_auth(ctx: &AuthContext, params: &HashMap<String, String>) -> AuthOutcome {
    // State is verified before any code is exchanged.
    let received = params.get("state").map(String::as_str).unwrap_or_default();
    if received != ctx.state {
        return Err(ExportError::AuthStateMismatch {
            expected: ctx.state.clone(),
            received: received.to_string(),
        });
    }

    if let Some(reason) = params.get("error") {
        return Err(ExportError::TokenExchange(format!(
            "authorization denied: {}",
            reason
        )));
    }

    let Some(code) = params.get("code") else {
        return Err(ExportError::TokenExchange(
            "missing authorization code".to_string(),
        ));
    };

    let token = spotify::auth::exchange_code(&ctx.http, &ctx.config, code).await?;

    Ok(SpotifyClient::new(
        ctx.http.clone(),
        ctx.config.api_url.clone(),
        token,
    ))
}
