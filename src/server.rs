use axum::{Extension, Router, routing::get};
use std::{net::SocketAddr, str::FromStr, sync::Arc};

use crate::{Res, api, config::Config, info, spotify::SpotifyApi, success};

/// Shared, read-only state handed to every handler.
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: Config,
    pub spotify: SpotifyApi,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let spotify = SpotifyApi::new(config.api_url.clone());
        AppState { config, spotify }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(api::health))
        .route("/login", get(api::login))
        .route("/callback", get(api::callback))
        .route("/tracks", get(api::tracks))
        .route("/recent", get(api::recent))
        .route("/me", get(api::me))
        .route("/scene", get(api::scene))
        .route("/summary", get(api::summary))
        .route("/summary.svg", get(api::summary_card))
        .layer(Extension(Arc::new(state)))
}

pub async fn start_api_server(config: Config) -> Res<()> {
    let addr = SocketAddr::from_str(&config.server_address)
        .map_err(|e| format!("Failed to parse server address: {}", e))?;

    info!(
        "Score weights: short {}, medium {}, long {}",
        config.weights.short(),
        config.weights.medium(),
        config.weights.long()
    );

    let app = router(AppState::new(config));
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    success!("Statify listening on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
