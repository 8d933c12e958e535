use std::sync::Arc;

use axum::{
    Extension, Json,
    extract::Query,
    http::header::{CONTENT_DISPOSITION, CONTENT_TYPE},
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use crate::{
    aggregate,
    api::{BearerToken, tracks::upstream_failure},
    presenter::{OrbitLayout, build_scene, card, summarize},
    server::AppState,
    spotify::ApiError,
    types::AggregationResult,
};

#[derive(Debug, Deserialize)]
pub struct SceneParams {
    /// Viewport width in CSS pixels.
    pub width: Option<f64>,
}

async fn load(state: &AppState, token: &str) -> Result<AggregationResult, ApiError> {
    aggregate::aggregate(&state.spotify, token, &state.config.weights).await
}

pub async fn scene(
    BearerToken(token): BearerToken,
    Query(params): Query<SceneParams>,
    Extension(state): Extension<Arc<AppState>>,
) -> Response {
    match load(&state, &token).await {
        Ok(result) => {
            // placement depends only on the track ids, so a fresh layout reproduces the last one
            let mut layout = OrbitLayout::new();
            let width = params.width.unwrap_or(0.0);
            Json(build_scene(&mut layout, &result.tracks, width)).into_response()
        }
        Err(e) => upstream_failure("Failed to fetch tracks", e),
    }
}

pub async fn summary(
    BearerToken(token): BearerToken,
    Extension(state): Extension<Arc<AppState>>,
) -> Response {
    match load(&state, &token).await {
        Ok(result) => Json(summarize(&result)).into_response(),
        Err(e) => upstream_failure("Failed to fetch tracks", e),
    }
}

pub async fn summary_card(
    BearerToken(token): BearerToken,
    Extension(state): Extension<Arc<AppState>>,
) -> Response {
    match load(&state, &token).await {
        Ok(result) => {
            let svg = card::render_svg(&summarize(&result));
            (
                [
                    (CONTENT_TYPE, "image/svg+xml"),
                    (
                        CONTENT_DISPOSITION,
                        "attachment; filename=\"statify-summary.svg\"",
                    ),
                ],
                svg,
            )
                .into_response()
        }
        Err(e) => upstream_failure("Failed to fetch tracks", e),
    }
}
