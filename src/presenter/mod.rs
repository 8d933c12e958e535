//! # Presenter
//!
//! Everything the front-end needs to draw an aggregation result, minus the
//! actual drawing:
//!
//! - [`orbit`] - angular genre slices, radial shells and best-effort
//!   collision-avoiding placement, cached per track set
//! - [`sizing`] - sphere radius from listen score and viewport width
//! - [`color`] - stable genre to palette mapping
//! - [`interaction`] - single hover/click selection and the detail overlay
//! - [`summary`] / [`card`] - top genres, songs and artist, popularity
//!   extremes, rendered as a downloadable SVG card
//! - [`session`] - explicit login session and the client for the service's
//!   own HTTP API
//!
//! All of it runs on one logical thread per view; nothing here is shared.

pub mod card;
pub mod color;
pub mod interaction;
pub mod orbit;
pub mod scene;
pub mod session;
pub mod sizing;
pub mod summary;

pub use color::genre_color;
pub use interaction::{Selection, TrackDetail};
pub use orbit::{GenreSlice, OrbitLayout, Point3};
pub use scene::{PositionedTrack, Scene, build_scene};
pub use session::{ClientError, Session, StatifyClient};
pub use summary::{Summary, summarize};
