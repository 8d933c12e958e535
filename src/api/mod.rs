//! # API Module
//!
//! HTTP endpoints of the Statify service.
//!
//! ## Endpoints
//!
//! ### Authentication
//!
//! - [`login`] - Redirects to Spotify's authorization page with the
//!   `user-top-read` and `user-read-recently-played` scopes
//! - [`callback`] - Exchanges the authorization code and redirects to the
//!   site with the access token in the query string
//!
//! ### Listening data
//!
//! All of these expect `Authorization: Bearer <token>` and answer `401`
//! without it. Upstream failures answer `400` with a short text body.
//!
//! - [`tracks`] - Scored, genre-tagged top tracks plus the obscurity rating
//! - [`recent`] - Recently played tracks
//! - [`me`] - The Spotify profile, passed through
//! - [`scene`] - Tracks with orbit position, color and sphere size
//! - [`summary`] / [`summary_card`] - Summary as JSON or as an SVG download
//!
//! ### Monitoring
//!
//! - [`health`] - Status and version
//!
//! Handlers are plain async functions sharing [`crate::server::AppState`]
//! through an `Extension` layer. No handler keeps state between requests.

mod auth;
mod extract;
mod health;
mod presenter;
mod tracks;

pub use auth::{callback, login};
pub use extract::BearerToken;
pub use health::health;
pub use presenter::{scene, summary, summary_card};
pub use tracks::{me, recent, tracks};
