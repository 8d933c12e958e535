//! # Spotify Integration Module
//!
//! This module is the integration layer between Statify and the Spotify Web
//! API. It covers the OAuth authorization-code exchange and the handful of
//! read-only endpoints the aggregator needs.
//!
//! ## Architecture
//!
//! ```text
//! HTTP handlers (api)
//!          ↓
//! Aggregation (aggregate)
//!          ↓
//! Spotify Integration Layer
//!     ├── Authentication (authorize URL, code exchange)
//!     ├── Tracks (top tracks per window, recently played)
//!     ├── Artists (batched genre lookup)
//!     └── Profile (current user)
//!          ↓
//! HTTP Layer (reqwest, JSON)
//! ```
//!
//! ## Token handling
//!
//! [`SpotifyApi`] holds no credentials. Every call takes the caller's bearer
//! token as an argument, so one instance (and its connection pool) is shared
//! by all requests without any per-request configuration.
//!
//! ## Error handling
//!
//! Every call returns [`ApiError`]. There is no retry logic: a 401, a 429 or
//! a network failure surfaces immediately to the caller.
//!
//! ## API Coverage
//!
//! - `GET /me/top/tracks` - Top tracks for one time range
//! - `GET /me/player/recently-played` - Recently played tracks
//! - `GET /artists` - Several artists by id (genres)
//! - `GET /me` - Current user's profile
//! - `POST /api/token` - Authorization code exchange (accounts service)

pub mod artists;
pub mod auth;
mod error;
pub mod profile;
pub mod tracks;

use reqwest::{Client, Response, StatusCode, header::RETRY_AFTER};
use serde::de::DeserializeOwned;

pub use error::ApiError;
pub use tracks::TimeRange;

/// Largest page the top-tracks and recently-played endpoints will return.
pub const MAX_PAGE_SIZE: u32 = 50;

/// Largest number of ids accepted by `GET /artists`.
pub const MAX_ARTIST_IDS: usize = 50;

/// Stateless Spotify Web API client.
#[derive(Debug, Clone)]
pub struct SpotifyApi {
    client: Client,
    api_url: String,
}

impl SpotifyApi {
    pub fn new(api_url: impl Into<String>) -> Self {
        SpotifyApi {
            client: Client::new(),
            api_url: api_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    /// Issues an authenticated `GET {api_url}/{path}` and decodes the JSON body.
    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        token: &str,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, ApiError> {
        let url = format!(
            "{base}/{path}",
            base = self.api_url,
            path = path.trim_start_matches('/')
        );

        let response = self
            .client
            .get(&url)
            .bearer_auth(token)
            .query(query)
            .send()
            .await?;

        let response = check_status(response)?;
        Ok(response.json::<T>().await?)
    }
}

pub(crate) fn check_status(response: Response) -> Result<Response, ApiError> {
    match response.status() {
        status if status.is_success() => Ok(response),
        StatusCode::UNAUTHORIZED => Err(ApiError::Unauthorized),
        StatusCode::TOO_MANY_REQUESTS => {
            let retry_after = response
                .headers()
                .get(RETRY_AFTER)
                .and_then(|h| h.to_str().ok())
                .and_then(|s| s.parse::<u64>().ok());
            Err(ApiError::RateLimited(retry_after))
        }
        status => Err(ApiError::Status(status)),
    }
}
