use std::sync::Arc;

use axum::{
    Extension, Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{aggregate, api::BearerToken, server::AppState, spotify::ApiError, warning};

/// Logs the upstream failure and answers with a bare 400.
pub(crate) fn upstream_failure(body: &'static str, err: ApiError) -> Response {
    warning!("{}: {}", body, err);
    (StatusCode::BAD_REQUEST, body).into_response()
}

pub async fn tracks(
    BearerToken(token): BearerToken,
    Extension(state): Extension<Arc<AppState>>,
) -> Response {
    match aggregate::aggregate(&state.spotify, &token, &state.config.weights).await {
        Ok(result) => Json(result).into_response(),
        Err(e) => upstream_failure("Failed to fetch tracks", e),
    }
}

pub async fn recent(
    BearerToken(token): BearerToken,
    Extension(state): Extension<Arc<AppState>>,
) -> Response {
    match aggregate::recent(&state.spotify, &token).await {
        Ok(items) => Json(items).into_response(),
        Err(e) => upstream_failure("Failed to fetch recently played tracks", e),
    }
}

pub async fn me(
    BearerToken(token): BearerToken,
    Extension(state): Extension<Arc<AppState>>,
) -> Response {
    match state.spotify.current_user(&token).await {
        Ok(profile) => Json(profile).into_response(),
        Err(e) => upstream_failure("Failed to fetch profile", e),
    }
}
