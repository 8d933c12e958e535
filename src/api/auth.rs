use std::sync::Arc;

use axum::{
    Extension,
    extract::Query,
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;

use crate::{server::AppState, spotify::auth, utils, warning};

const AUTH_FAILED: &str = "Spotify authorization failed";

pub async fn login(Extension(state): Extension<Arc<AppState>>) -> Response {
    let oauth_state = utils::generate_state(&state.config.client_secret);

    match auth::authorize_url(&state.config, &oauth_state) {
        Ok(url) => Redirect::to(url.as_str()).into_response(),
        Err(e) => {
            warning!("Cannot build authorization URL: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to start Spotify login",
            )
                .into_response()
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CallbackParams {
    pub code: Option<String>,
    pub state: Option<String>,
    pub error: Option<String>,
}

pub async fn callback(
    Query(params): Query<CallbackParams>,
    Extension(state): Extension<Arc<AppState>>,
) -> Response {
    if let Some(reason) = params.error {
        warning!("Spotify denied authorization: {}", reason);
        return (StatusCode::BAD_REQUEST, AUTH_FAILED).into_response();
    }

    let Some(code) = params.code else {
        return (StatusCode::BAD_REQUEST, AUTH_FAILED).into_response();
    };

    let state_ok = params
        .state
        .as_deref()
        .is_some_and(|s| utils::verify_state(s, &state.config.client_secret));
    if !state_ok {
        warning!("Rejected callback with an unknown state");
        return (StatusCode::BAD_REQUEST, AUTH_FAILED).into_response();
    }

    let token = match auth::exchange_code(state.spotify.client(), &state.config, &code).await {
        Ok(token) => token,
        Err(e) => {
            warning!("Token exchange failed: {}", e);
            return (StatusCode::BAD_REQUEST, AUTH_FAILED).into_response();
        }
    };

    match auth::post_login_redirect(&state.config, &token.access_token) {
        Ok(url) => Redirect::to(url.as_str()).into_response(),
        Err(e) => {
            warning!("Cannot build post-login redirect: {}", e);
            (StatusCode::BAD_REQUEST, AUTH_FAILED).into_response()
        }
    }
}
